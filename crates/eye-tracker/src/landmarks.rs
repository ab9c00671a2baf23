//! Face-mesh landmark boundary

use frame_source::VideoFrame;
use serde::{Deserialize, Serialize};

/// Face-mesh indices of the six left-eye boundary points, in EAR order
/// (outer corner, upper pair, inner corner, lower pair).
pub const LEFT_EYE: [usize; 6] = [33, 160, 158, 133, 153, 144];

/// Face-mesh indices of the six right-eye boundary points
pub const RIGHT_EYE: [usize; 6] = [362, 385, 387, 263, 373, 380];

/// Landmarks for a single tracked face, as normalized (x, y) coordinates
/// in [0, 1] relative to the frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceLandmarks {
    pub points: Vec<(f32, f32)>,
}

impl FaceLandmarks {
    pub fn new(points: Vec<(f32, f32)>) -> Self {
        Self { points }
    }

    /// Extract the six boundary points of one eye in pixel coordinates.
    /// Returns `None` if the landmark set does not cover the indices.
    pub fn eye_points(&self, indices: &[usize; 6], frame: &VideoFrame) -> Option<[(f32, f32); 6]> {
        let w = frame.width as f32;
        let h = frame.height as f32;
        let mut out = [(0.0, 0.0); 6];
        for (slot, &idx) in out.iter_mut().zip(indices.iter()) {
            let (x, y) = *self.points.get(idx)?;
            *slot = (x * w, y * h);
        }
        Some(out)
    }
}

/// Boundary to the face-mesh detector. Polled once per frame; at most one
/// face is tracked, and the detector holds whatever internal state it needs
/// for that face.
pub trait LandmarkDetector: Send {
    fn detect(&mut self, frame: &VideoFrame) -> Option<FaceLandmarks>;
}

/// Detector that never finds a face. For headless runs and tests, where
/// drowsiness detection falls back to the classifier alone.
pub struct NullDetector;

impl LandmarkDetector for NullDetector {
    fn detect(&mut self, _frame: &VideoFrame) -> Option<FaceLandmarks> {
        None
    }
}
