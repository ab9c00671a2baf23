//! Frame acquisition for the drowsiness detection pipeline.
//!
//! Provides:
//! - [`VideoFrame`]: decoded RGB frame with timestamp and sequence number
//! - [`FrameSource`]: the camera boundary, one blocking read per iteration
//! - [`SyntheticCamera`]: deterministic source for tests and headless demos

pub mod frame;
pub mod source;

pub use frame::VideoFrame;
pub use source::{FrameSource, SyntheticCamera};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Frame acquisition error types
#[derive(Error, Debug)]
pub enum FrameError {
    /// Camera could not be opened. Fatal: the detection loop never starts.
    #[error("Failed to open camera: {0}")]
    Unavailable(String),

    /// A frame read failed. Fatal: the detection loop exits.
    #[error("Failed to read frame: {0}")]
    Read(String),
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Device path (e.g., "/dev/video0")
    pub device: String,
    /// Capture width
    pub width: u32,
    /// Capture height
    pub height: u32,
    /// Target FPS
    pub fps: u32,
    /// Mirror frames horizontally (selfie view)
    pub mirror: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device: "/dev/video0".to_string(),
            width: 640,
            height: 480,
            fps: 30,
            mirror: true,
        }
    }
}

impl CameraConfig {
    /// Config for a driver-facing webcam
    pub fn webcam() -> Self {
        Self::default()
    }
}
