//! Pairwise Euclidean distance computation, reference and accelerated.
//!
//! Both strategies implement the same identity,
//! `dist(q, t) = sqrt(‖q‖² + ‖t‖² − 2·q·t)`, so the only per-pair work is the
//! inner product `q·t`. The reference strategy materialises the M×N
//! inner-product matrix on the CPU; the accelerated strategy receives it from
//! the device and applies the identical correction terms.

use tracing::debug;

use crate::accel::MatmulAccelerator;
use crate::error::KnnError;
use crate::matrix::Matrix;
use crate::training::TrainingSet;

/// Computes the M×N distance matrix on the CPU.
///
/// # Panics
///
/// Debug-asserts that `queries.cols()` equals the training dimension.
pub(crate) fn reference_distances<L>(training: &TrainingSet<L>, queries: &Matrix) -> Matrix {
    debug_assert_eq!(queries.cols(), training.dim());

    let mut inner = inner_products(queries, training.features());
    finish_distances(&mut inner, queries, training.sq_norms());
    inner
}

/// Computes the M×N distance matrix with the inner products delegated to the
/// device; the norm correction terms stay on the CPU.
///
/// The device result may be quantized, in which case the output agrees with
/// [`reference_distances`] only up to the quantization error.
///
/// # Errors
///
/// Propagates [`KnnError::AcceleratorUnavailable`] unchanged. No fallback to
/// the reference path happens here.
pub(crate) fn accelerated_distances<L>(
    training: &TrainingSet<L>,
    queries: &Matrix,
    accel: &impl MatmulAccelerator,
) -> Result<Matrix, KnnError> {
    debug_assert_eq!(queries.cols(), training.dim());

    let mut inner = accel.multiply(queries, false)?;
    debug!(
        rows = inner.rows(),
        cols = inner.cols(),
        "inner-product matrix received from accelerator"
    );
    finish_distances(&mut inner, queries, training.sq_norms());
    Ok(inner)
}

/// Dense multiply of `queries` (M×D) against the rows of `train` (N×D),
/// producing the M×N matrix of inner products.
fn inner_products(queries: &Matrix, train: &Matrix) -> Matrix {
    let m = queries.rows();
    let n = train.rows();
    let mut out = Matrix::zeros(m, n);
    for i in 0..m {
        let q = queries.row(i);
        for j in 0..n {
            let ip: f64 = q.iter().zip(train.row(j)).map(|(a, b)| a * b).sum();
            out.set(i, j, ip);
        }
    }
    out
}

/// Converts an inner-product matrix into Euclidean distances in place.
///
/// Cancellation in `‖q‖² + ‖t‖² − 2·q·t` can push tiny true distances
/// slightly negative; those are clamped to zero before the square root so the
/// output never contains NaN.
fn finish_distances(inner: &mut Matrix, queries: &Matrix, train_sq: &[f64]) {
    let (m, n) = (inner.rows(), inner.cols());
    for i in 0..m {
        let q_sq: f64 = queries.row(i).iter().map(|x| x * x).sum();
        for j in 0..n {
            let d2 = q_sq + train_sq[j] - 2.0 * inner.get(i, j);
            inner.set(i, j, d2.max(0.0).sqrt());
        }
    }
}
