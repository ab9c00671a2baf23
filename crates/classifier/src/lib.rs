//! Drowsiness Classifier Adapter
//!
//! Wraps an opaque 4-class image classifier behind a single
//! `classify(frame) -> Verdict` contract. Preprocessing normalizes the
//! frame to the model's fixed input resolution; the class partition that
//! collapses 4 model classes into 2 verdicts is an explicit mapping table.

mod engine;
mod preprocess;

pub use engine::{DrowsinessClassifier, InferenceBackend, MockBackend, TractBackend};
pub use preprocess::{preprocess_frame, MODEL_INPUT_SIZE};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors during classification
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Model load failed: {0}")]
    ModelLoad(String),

    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Model output shape mismatch: expected {expected} classes, got {actual}")]
    OutputShapeMismatch { expected: usize, actual: usize },

    #[error("Image processing failed: {0}")]
    ImageProcessing(String),
}

/// Number of classes the underlying model was trained on
pub const EXPECTED_CLASSES: usize = 4;

/// Per-frame verdict of the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verdict {
    #[default]
    NonDrowsy,
    Drowsy,
    /// Model output was unusable this frame. Non-drowsy for alerting.
    Unknown,
}

impl Verdict {
    pub fn is_drowsy(&self) -> bool {
        matches!(self, Verdict::Drowsy)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::NonDrowsy => "Non-Drowsy",
            Verdict::Drowsy => "Drowsy",
            Verdict::Unknown => "Unknown",
        }
    }
}

/// Class index → verdict mapping for the 4-class model.
/// Classes 0 and 3 are the alert-looking states, 1 and 2 the drowsy ones.
pub const CLASS_VERDICTS: [Verdict; EXPECTED_CLASSES] = [
    Verdict::NonDrowsy,
    Verdict::Drowsy,
    Verdict::Drowsy,
    Verdict::NonDrowsy,
];

/// Map a raw class probability vector onto a verdict.
///
/// Fails if the vector length does not match the trained class count.
pub fn verdict_from_scores(scores: &[f32]) -> Result<Verdict, ClassifierError> {
    if scores.len() != EXPECTED_CLASSES {
        return Err(ClassifierError::OutputShapeMismatch {
            expected: EXPECTED_CLASSES,
            actual: scores.len(),
        });
    }

    let class_idx = scores
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(i, _)| i)
        .unwrap_or(0);

    Ok(CLASS_VERDICTS[class_idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_classes_map_to_non_drowsy() {
        let verdict = verdict_from_scores(&[0.9, 0.05, 0.03, 0.02]).unwrap();
        assert_eq!(verdict, Verdict::NonDrowsy);

        let verdict = verdict_from_scores(&[0.02, 0.03, 0.05, 0.9]).unwrap();
        assert_eq!(verdict, Verdict::NonDrowsy);
    }

    #[test]
    fn test_drowsy_classes_map_to_drowsy() {
        let verdict = verdict_from_scores(&[0.05, 0.8, 0.1, 0.05]).unwrap();
        assert_eq!(verdict, Verdict::Drowsy);

        let verdict = verdict_from_scores(&[0.05, 0.1, 0.8, 0.05]).unwrap();
        assert_eq!(verdict, Verdict::Drowsy);
    }

    #[test]
    fn test_wrong_output_length_is_shape_mismatch() {
        let result = verdict_from_scores(&[0.2, 0.2, 0.2, 0.2, 0.2]);
        assert!(matches!(
            result,
            Err(ClassifierError::OutputShapeMismatch {
                expected: 4,
                actual: 5
            })
        ));
    }

    #[test]
    fn test_unknown_is_not_drowsy() {
        assert!(!Verdict::Unknown.is_drowsy());
        assert!(!Verdict::NonDrowsy.is_drowsy());
        assert!(Verdict::Drowsy.is_drowsy());
    }
}
