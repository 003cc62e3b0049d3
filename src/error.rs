//! Error types for the knn-offload crate.

/// Error type for all fallible operations in the crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KnnError {
    /// Returned when the training set has no rows.
    #[error("training set is empty")]
    EmptyTrainingSet,

    /// Returned when the feature dimension is zero.
    #[error("feature dimension must be >= 1")]
    ZeroDimension,

    /// Returned when the label count does not match the training row count.
    #[error("label count {labels} does not match training row count {rows}")]
    LabelCountMismatch {
        /// Number of labels provided.
        labels: usize,
        /// Number of training feature rows.
        rows: usize,
    },

    /// Returned when the flat training data length is not divisible by the dimension.
    #[error("training data length {len} is not divisible by dimension {dim}")]
    TrainingShapeMismatch {
        /// Length of the flat training slice.
        len: usize,
        /// Expected feature dimension.
        dim: usize,
    },

    /// Returned when the flat query data length is not divisible by the training dimension.
    #[error("query data length {len} is not divisible by dimension {dim}")]
    QueryShapeMismatch {
        /// Length of the flat query slice.
        len: usize,
        /// Feature dimension of the training set.
        dim: usize,
    },

    /// Returned when training features contain NaN or infinity.
    #[error("non-finite value in training features")]
    NonFiniteTraining,

    /// Returned when k is outside `[1, n_train]`.
    #[error("k must be in [1, {n_train}], got {k}")]
    InvalidK {
        /// The invalid k value.
        k: usize,
        /// Number of training rows.
        n_train: usize,
    },

    /// Returned when the accelerator device or its connection is not ready.
    ///
    /// Propagated verbatim from the device boundary; the crate never retries
    /// and never substitutes the reference path on its own.
    #[error("accelerator unavailable: {reason}")]
    AcceleratorUnavailable {
        /// Device-reported reason.
        reason: String,
    },
}
