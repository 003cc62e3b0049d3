//! The external matrix-multiply accelerator boundary.
//!
//! The device is consumed, not implemented: this module defines the one
//! operation the distance pipeline needs from it, the opaque quantization
//! configuration passed through to it, and the construction-time bundle a
//! driver loads before any multiply is issued.

use crate::error::KnnError;
use crate::matrix::Matrix;
use crate::training::TrainingSet;

/// Fixed-point quantization scales passed through to the device.
///
/// The crate does not interpret these values. They configure how the device
/// quantizes the weight (training) matrix and the bias term, and how the
/// multiply-accumulate output is rescaled back to floating semantics
/// (`post_scale = (multiplier, shift)`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleConfig {
    weight_scale: Vec<i32>,
    bias_scale: Vec<i32>,
    post_scale: (i32, i32),
}

impl ScaleConfig {
    /// Identity scales: weight `[1]`, bias `[1]`, post `(1, 0)`.
    pub fn identity() -> Self {
        Self {
            weight_scale: vec![1],
            bias_scale: vec![1],
            post_scale: (1, 0),
        }
    }

    /// Sets the weight-matrix scale factors.
    pub fn with_weight_scale(mut self, weight_scale: Vec<i32>) -> Self {
        self.weight_scale = weight_scale;
        self
    }

    /// Sets the bias scale factors.
    pub fn with_bias_scale(mut self, bias_scale: Vec<i32>) -> Self {
        self.bias_scale = bias_scale;
        self
    }

    /// Sets the post-multiply rescale pair `(multiplier, shift)`.
    pub fn with_post_scale(mut self, post_scale: (i32, i32)) -> Self {
        self.post_scale = post_scale;
        self
    }

    /// Returns the weight-matrix scale factors.
    pub fn weight_scale(&self) -> &[i32] {
        &self.weight_scale
    }

    /// Returns the bias scale factors.
    pub fn bias_scale(&self) -> &[i32] {
        &self.bias_scale
    }

    /// Returns the post-multiply rescale pair.
    pub fn post_scale(&self) -> (i32, i32) {
        self.post_scale
    }
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self::identity()
    }
}

/// Everything a device driver needs at construction time.
///
/// Bundles the training matrix transposed to D×N, a zero bias matrix sized
/// to the expected query-batch height, and the quantization scales. The crate
/// prepares this bundle from a [`TrainingSet`]; the external runtime consumes
/// it when the device handle is built.
#[derive(Debug, Clone)]
pub struct AcceleratorSetup {
    weights_t: Matrix,
    bias: Matrix,
    scales: ScaleConfig,
}

impl AcceleratorSetup {
    /// Assembles the bundle for `training`.
    ///
    /// `batch_rows` is the expected query-batch height M and only sizes the
    /// zero bias matrix (M×N).
    pub fn new<L>(training: &TrainingSet<L>, batch_rows: usize, scales: ScaleConfig) -> Self {
        Self {
            weights_t: training.transposed_features(),
            bias: Matrix::zeros(batch_rows, training.len()),
            scales,
        }
    }

    /// Returns the D×N transposed training matrix.
    pub fn weights_t(&self) -> &Matrix {
        &self.weights_t
    }

    /// Returns the zero bias matrix.
    pub fn bias(&self) -> &Matrix {
        &self.bias
    }

    /// Returns the quantization scales.
    pub fn scales(&self) -> &ScaleConfig {
        &self.scales
    }
}

/// Handle to an external device that multiplies query batches against the
/// training matrix it was loaded with.
///
/// One call is one blocking unit of work: submit the whole M×D batch, receive
/// the whole M×N inner-product matrix. Implementations backed by fixed-point
/// hardware may return an approximation of the exact product; the distance
/// pipeline tolerates that, since the norm correction and clamp are applied
/// on the CPU afterwards.
///
/// Injected into the classifier as a constructor argument, which keeps the
/// device substitutable with a software mock in tests.
pub trait MatmulAccelerator {
    /// Multiplies `queries` (M×D) against the loaded D×N weights.
    ///
    /// `apply_relu` selects the device's output nonlinearity; this crate
    /// always passes `false`.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::AcceleratorUnavailable`] if the device or its
    /// connection is not ready.
    fn multiply(&self, queries: &Matrix, apply_relu: bool) -> Result<Matrix, KnnError>;
}

/// Placeholder device for CPU-only classifiers.
///
/// Every multiply reports the device unavailable. The reference path never
/// calls it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAccelerator;

impl MatmulAccelerator for NoAccelerator {
    fn multiply(&self, _queries: &Matrix, _apply_relu: bool) -> Result<Matrix, KnnError> {
        Err(KnnError::AcceleratorUnavailable {
            reason: "no accelerator configured".to_string(),
        })
    }
}
