//! Training set storage and derived statistics.

use crate::error::KnnError;
use crate::matrix::Matrix;

/// Immutable training set with cached per-row squared norms.
///
/// For KNN there is no training step beyond memorisation: construction stores
/// the N×D feature matrix and the N labels, and computes
/// `sq_norms[i] = Σⱼ features[i][j]²` once (O(N·D)). The cached norms are the
/// `‖t‖²` correction term of the distance identity, shared by both distance
/// strategies. Everything after construction is a read-only borrow.
#[derive(Debug, Clone)]
pub struct TrainingSet<L> {
    features: Matrix,
    labels: Vec<L>,
    sq_norms: Vec<f64>,
}

impl<L> TrainingSet<L> {
    /// Builds a training set from flat row-major features and per-row labels.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::ZeroDimension`] if `dim == 0`,
    /// [`KnnError::EmptyTrainingSet`] if `features` is empty,
    /// [`KnnError::TrainingShapeMismatch`] if `features.len()` is not a
    /// multiple of `dim`, [`KnnError::LabelCountMismatch`] if the label count
    /// differs from the row count, and [`KnnError::NonFiniteTraining`] if any
    /// feature is NaN or infinite.
    pub fn new(features: Vec<f64>, dim: usize, labels: Vec<L>) -> Result<Self, KnnError> {
        if dim == 0 {
            return Err(KnnError::ZeroDimension);
        }
        if features.is_empty() {
            return Err(KnnError::EmptyTrainingSet);
        }
        if !features.len().is_multiple_of(dim) {
            return Err(KnnError::TrainingShapeMismatch {
                len: features.len(),
                dim,
            });
        }
        let rows = features.len() / dim;
        if labels.len() != rows {
            return Err(KnnError::LabelCountMismatch {
                labels: labels.len(),
                rows,
            });
        }
        if features.iter().any(|v| !v.is_finite()) {
            return Err(KnnError::NonFiniteTraining);
        }

        let features = Matrix::from_vec(features, rows, dim);
        let sq_norms = (0..rows)
            .map(|i| features.row(i).iter().map(|x| x * x).sum())
            .collect();

        Ok(Self {
            features,
            labels,
            sq_norms,
        })
    }

    /// Returns the number of training rows.
    pub fn len(&self) -> usize {
        self.features.rows()
    }

    /// Returns `true` if the set has no rows. Construction rejects empty
    /// sets, so this is always `false` for a successfully built value.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the feature dimension D.
    pub fn dim(&self) -> usize {
        self.features.cols()
    }

    /// Returns the N×D feature matrix.
    pub fn features(&self) -> &Matrix {
        &self.features
    }

    /// Returns the labels, aligned with feature rows.
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Returns the cached squared norms, aligned with feature rows.
    pub fn sq_norms(&self) -> &[f64] {
        &self.sq_norms
    }

    /// Returns the D×N transposed feature matrix, the layout an accelerator
    /// is loaded with.
    pub fn transposed_features(&self) -> Matrix {
        self.features.transposed()
    }
}
