//! Classifier engine and inference backends

use crate::preprocess::preprocess_frame;
use crate::{verdict_from_scores, ClassifierError, Verdict, EXPECTED_CLASSES};
use frame_source::VideoFrame;
use ndarray::Array4;
use tract_onnx::prelude::*;
use tracing::{debug, info};

/// Backend boundary for the opaque trained model:
/// one normalized input tensor in, one class probability vector out.
pub trait InferenceBackend: Send {
    fn infer(&self, input: &Array4<f32>) -> Result<Vec<f32>, ClassifierError>;
}

/// ONNX inference via tract
pub struct TractBackend {
    plan: TypedRunnableModel<TypedModel>,
}

impl TractBackend {
    /// Load and optimize an ONNX model from disk
    pub fn load(path: &str) -> Result<Self, ClassifierError> {
        info!("Loading classifier model from {}", path);

        let size = crate::MODEL_INPUT_SIZE as i32;
        let plan = tract_onnx::onnx()
            .model_for_path(path)
            .map_err(|e| ClassifierError::ModelLoad(e.to_string()))?
            .with_input_fact(
                0,
                InferenceFact::dt_shape(f32::datum_type(), tvec!(1, size, size, 3)),
            )
            .map_err(|e| ClassifierError::ModelLoad(e.to_string()))?
            .into_optimized()
            .map_err(|e| ClassifierError::ModelLoad(e.to_string()))?
            .into_runnable()
            .map_err(|e| ClassifierError::ModelLoad(e.to_string()))?;

        Ok(Self { plan })
    }
}

impl InferenceBackend for TractBackend {
    fn infer(&self, input: &Array4<f32>) -> Result<Vec<f32>, ClassifierError> {
        let slice = input
            .as_slice()
            .ok_or_else(|| ClassifierError::Inference("non-contiguous input tensor".into()))?;
        let tensor = Tensor::from_shape(input.shape(), slice)
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let outputs = self
            .plan
            .run(tvec!(tensor.into()))
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let view = outputs[0]
            .to_array_view::<f32>()
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        Ok(view.iter().copied().collect())
    }
}

/// Rule-based mock backend for development and tests: a dark cabin view
/// scores drowsy, anything else scores alert. Deterministic.
pub struct MockBackend;

impl InferenceBackend for MockBackend {
    fn infer(&self, input: &Array4<f32>) -> Result<Vec<f32>, ClassifierError> {
        let mean = input.iter().sum::<f32>() / input.len() as f32;
        let scores = if mean < 0.3 {
            vec![0.05, 0.75, 0.15, 0.05]
        } else {
            vec![0.88, 0.05, 0.03, 0.04]
        };
        debug_assert_eq!(scores.len(), EXPECTED_CLASSES);
        Ok(scores)
    }
}

/// Classifier adapter: frame in, verdict out
pub struct DrowsinessClassifier {
    backend: Box<dyn InferenceBackend>,
    model_path: String,
    mock_mode: bool,
}

impl DrowsinessClassifier {
    /// Create a classifier backed by an ONNX model file
    pub fn from_onnx(path: &str) -> Result<Self, ClassifierError> {
        Ok(Self {
            backend: Box::new(TractBackend::load(path)?),
            model_path: path.to_string(),
            mock_mode: false,
        })
    }

    /// Create a mock classifier for development and tests
    pub fn mock() -> Self {
        info!("Creating mock classifier");
        Self {
            backend: Box::new(MockBackend),
            model_path: "mock".to_string(),
            mock_mode: true,
        }
    }

    /// Classify a single frame.
    ///
    /// No retries; callers map errors to [`Verdict::Unknown`] and keep the
    /// loop running.
    pub fn classify(&self, frame: &VideoFrame) -> Result<Verdict, ClassifierError> {
        let input = preprocess_frame(frame)?;
        let scores = self.backend.infer(&input)?;
        let verdict = verdict_from_scores(&scores)?;
        debug!("Frame {} classified as {}", frame.sequence, verdict.as_str());
        Ok(verdict)
    }

    pub fn model_path(&self) -> &str {
        &self.model_path
    }

    pub fn is_mock(&self) -> bool {
        self.mock_mode
    }
}
