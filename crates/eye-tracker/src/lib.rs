//! Eye-State Tracker
//!
//! Computes the eye aspect ratio (EAR) from face-mesh landmarks and runs a
//! timer-based state machine over it: eyes held closed past a duration
//! threshold flag prolonged closure. A momentary blink that recovers before
//! the threshold never triggers.

pub mod ear;
pub mod landmarks;
pub mod tracker;

pub use ear::eye_aspect_ratio;
pub use landmarks::{FaceLandmarks, LandmarkDetector, NullDetector, LEFT_EYE, RIGHT_EYE};
pub use tracker::{EyeClosureTracker, TrackerConfig};
