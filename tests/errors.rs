//! Integration tests for KnnError variants surfaced through the public API.

use knn_offload::{DistancePath, KnnClassifier, KnnError, TrainingSet};

fn classifier() -> KnnClassifier<&'static str> {
    let training = TrainingSet::new(vec![0.0, 0.0, 1.0, 1.0], 2, vec!["a", "b"]).unwrap();
    KnnClassifier::new(training)
}

#[test]
fn error_empty_training_set() {
    let result = TrainingSet::<i32>::new(vec![], 2, vec![]);
    assert!(matches!(result, Err(KnnError::EmptyTrainingSet)));
}

#[test]
fn error_zero_dimension() {
    let result = TrainingSet::new(vec![1.0, 2.0], 0, vec!["a", "b"]);
    assert!(matches!(result, Err(KnnError::ZeroDimension)));
}

#[test]
fn error_training_shape_mismatch() {
    // 5 elements with dim=2 do not divide evenly.
    let result = TrainingSet::new(vec![1.0, 2.0, 3.0, 4.0, 5.0], 2, vec!["a", "b"]);
    assert!(matches!(
        result,
        Err(KnnError::TrainingShapeMismatch { len: 5, dim: 2 })
    ));
}

#[test]
fn error_label_count_mismatch() {
    let result = TrainingSet::new(vec![1.0, 2.0, 3.0, 4.0], 2, vec!["a"]);
    assert!(matches!(
        result,
        Err(KnnError::LabelCountMismatch { labels: 1, rows: 2 })
    ));
}

#[test]
fn error_nan_in_training() {
    let result = TrainingSet::new(vec![1.0, f64::NAN], 2, vec!["a"]);
    assert!(matches!(result, Err(KnnError::NonFiniteTraining)));
}

#[test]
fn error_inf_in_training() {
    let result = TrainingSet::new(vec![f64::NEG_INFINITY, 2.0], 2, vec!["a"]);
    assert!(matches!(result, Err(KnnError::NonFiniteTraining)));
}

#[test]
fn error_query_shape_mismatch() {
    let result = classifier().predict(&[1.0, 2.0, 3.0], 1, DistancePath::Reference);
    assert!(matches!(
        result,
        Err(KnnError::QueryShapeMismatch { len: 3, dim: 2 })
    ));
}

#[test]
fn error_query_shape_mismatch_from_distances() {
    let result = classifier().distances(&[1.0], DistancePath::Reference);
    assert!(matches!(
        result,
        Err(KnnError::QueryShapeMismatch { len: 1, dim: 2 })
    ));
}

#[test]
fn error_k_zero() {
    let result = classifier().predict(&[0.0, 0.0], 0, DistancePath::Reference);
    assert!(matches!(result, Err(KnnError::InvalidK { k: 0, n_train: 2 })));
}

#[test]
fn error_k_exceeds_training_rows() {
    let result = classifier().predict(&[0.0, 0.0], 3, DistancePath::Reference);
    assert!(matches!(result, Err(KnnError::InvalidK { k: 3, n_train: 2 })));
}

#[test]
fn error_k_checked_before_query_shape() {
    // Both k and the batch are invalid; k is validated first.
    let result = classifier().predict(&[1.0], 0, DistancePath::Reference);
    assert!(matches!(result, Err(KnnError::InvalidK { k: 0, n_train: 2 })));
}

#[test]
fn error_accelerated_without_device() {
    let result = classifier().predict(&[0.0, 0.0], 1, DistancePath::Accelerated);
    match result {
        Err(KnnError::AcceleratorUnavailable { reason }) => {
            assert_eq!(reason, "no accelerator configured");
        }
        other => panic!("expected AcceleratorUnavailable, got {other:?}"),
    }
}
