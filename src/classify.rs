//! Classifier orchestration: path selection, per-row selection and voting.

use rayon::prelude::*;
use tracing::debug;

use crate::accel::{MatmulAccelerator, NoAccelerator};
use crate::distance::{accelerated_distances, reference_distances};
use crate::error::KnnError;
use crate::matrix::Matrix;
use crate::select::select_nearest;
use crate::training::TrainingSet;
use crate::vote::majority_label;

/// Which distance strategy a prediction call uses.
///
/// Both strategies produce the same distances up to the device's quantization
/// error. The choice is always the caller's: an unavailable accelerator is
/// surfaced as an error, never silently replaced by the reference path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistancePath {
    /// Dense CPU inner products.
    Reference,
    /// Inner products delegated to the configured accelerator.
    Accelerated,
}

/// K-nearest-neighbor classifier over an immutable training set.
///
/// Holds the training set and an injected accelerator handle, and nothing
/// else — no per-call state — so one instance serves repeated predictions
/// with varying batches, k values, and paths, including concurrently.
#[derive(Debug, Clone)]
pub struct KnnClassifier<L, A = NoAccelerator> {
    training: TrainingSet<L>,
    accel: A,
}

impl<L> KnnClassifier<L, NoAccelerator> {
    /// Creates a CPU-only classifier.
    ///
    /// [`DistancePath::Accelerated`] calls on it report the device
    /// unavailable.
    pub fn new(training: TrainingSet<L>) -> Self {
        Self {
            training,
            accel: NoAccelerator,
        }
    }
}

impl<L, A: MatmulAccelerator> KnnClassifier<L, A> {
    /// Creates a classifier with an injected accelerator handle.
    ///
    /// The handle must already be loaded with this training set's transposed
    /// features; [`AcceleratorSetup`](crate::accel::AcceleratorSetup) bundles
    /// what the device driver needs.
    pub fn with_accelerator(training: TrainingSet<L>, accel: A) -> Self {
        Self { training, accel }
    }

    /// Returns the training set backing this classifier.
    pub fn training(&self) -> &TrainingSet<L> {
        &self.training
    }

    /// Computes the full query×training distance matrix via the chosen path.
    ///
    /// `queries` is flat row-major M×D with D equal to the training
    /// dimension. An empty slice yields a 0×N matrix.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::QueryShapeMismatch`] if `queries.len()` is not a
    /// multiple of the training dimension, and propagates
    /// [`KnnError::AcceleratorUnavailable`] from the device on the
    /// accelerated path.
    pub fn distances(&self, queries: &[f64], path: DistancePath) -> Result<Matrix, KnnError> {
        let batch = self.query_batch(queries)?;
        match path {
            DistancePath::Reference => Ok(reference_distances(&self.training, &batch)),
            DistancePath::Accelerated => accelerated_distances(&self.training, &batch, &self.accel),
        }
    }

    /// Predicts one label per query row by majority vote among the k nearest
    /// training points.
    ///
    /// Rows of the distance matrix are independent, so selection and voting
    /// fan out across the rayon pool; the output order always matches the
    /// query order. An empty batch returns an empty prediction sequence.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::InvalidK`] if `k` is outside `[1, n_train]`,
    /// [`KnnError::QueryShapeMismatch`] on a ragged batch, and propagates
    /// [`KnnError::AcceleratorUnavailable`] on the accelerated path.
    #[tracing::instrument(skip(self, queries))]
    pub fn predict(&self, queries: &[f64], k: usize, path: DistancePath) -> Result<Vec<L>, KnnError>
    where
        L: Clone + PartialEq + Send + Sync,
    {
        let n_train = self.training.len();
        if k < 1 || k > n_train {
            return Err(KnnError::InvalidK { k, n_train });
        }
        if queries.is_empty() {
            return Ok(Vec::new());
        }

        let dist = self.distances(queries, path)?;
        debug!(
            n_queries = dist.rows(),
            n_train = dist.cols(),
            "distance matrix ready"
        );

        let labels = self.training.labels();
        let predictions = (0..dist.rows())
            .into_par_iter()
            .map(|i| {
                let neighbors: Vec<L> = select_nearest(dist.row(i), k)
                    .into_iter()
                    .map(|idx| labels[idx].clone())
                    .collect();
                majority_label(&neighbors)
            })
            .collect();
        Ok(predictions)
    }

    fn query_batch(&self, queries: &[f64]) -> Result<Matrix, KnnError> {
        let dim = self.training.dim();
        if !queries.len().is_multiple_of(dim) {
            return Err(KnnError::QueryShapeMismatch {
                len: queries.len(),
                dim,
            });
        }
        Ok(Matrix::from_vec(queries.to_vec(), queries.len() / dim, dim))
    }
}
