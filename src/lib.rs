//! K-nearest-neighbor classification with an offloadable distance kernel.
//!
//! The pairwise Euclidean distances that dominate KNN inference reduce to one
//! dense matrix multiply through the identity
//! `‖q − t‖² = ‖q‖² + ‖t‖² − 2·q·t`. This crate computes that multiply either
//! on the CPU (the reference path) or on an external fixed-point matrix
//! accelerator, corrects the result with cached squared norms, and classifies
//! each query by majority vote among its k nearest training points.
//!
//! # Quick start
//!
//! ```
//! use knn_offload::{DistancePath, KnnClassifier, TrainingSet};
//!
//! // Two 2-D clusters.
//! let features = vec![0.0, 0.0, 0.0, 1.0, 9.0, 9.0, 9.0, 8.0];
//! let labels = vec!["low", "low", "high", "high"];
//! let training = TrainingSet::new(features, 2, labels).unwrap();
//!
//! let classifier = KnnClassifier::new(training);
//! let predicted = classifier
//!     .predict(&[8.5, 8.5], 3, DistancePath::Reference)
//!     .unwrap();
//! assert_eq!(predicted, vec!["high"]);
//! ```
//!
//! # Architecture
//!
//! ```text
//! KnnClassifier::predict()
//!   ├─ validate k and query shape
//!   ├─ reference_distances() | accelerated_distances()   (distance.rs)
//!   │    └─ MatmulAccelerator::multiply()                (accel.rs, injected)
//!   ├─ select_nearest()   per query row                  (select.rs)
//!   └─ majority_label()   per query row                  (vote.rs)
//! ```
//!
//! The accelerator is an injected [`MatmulAccelerator`] handle, loaded at
//! device construction from an [`AcceleratorSetup`] bundle (transposed
//! training matrix, zero bias, quantization scales). An unavailable device is
//! surfaced as [`KnnError::AcceleratorUnavailable`]; falling back to the
//! reference path is the caller's decision, never the crate's.

pub mod accel;
pub mod classify;
pub mod error;
pub mod matrix;
pub mod training;

pub(crate) mod distance;
pub(crate) mod select;
pub(crate) mod vote;

pub use accel::{AcceleratorSetup, MatmulAccelerator, NoAccelerator, ScaleConfig};
pub use classify::{DistancePath, KnnClassifier};
pub use error::KnnError;
pub use matrix::Matrix;
pub use training::TrainingSet;
