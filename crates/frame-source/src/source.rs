//! Frame source boundary

use crate::frame::VideoFrame;
use crate::{CameraConfig, FrameError};
use tracing::info;

/// Boundary to the camera driver. One blocking read per loop iteration;
/// a stalled source stalls the whole detection loop.
pub trait FrameSource {
    /// Acquire the next frame
    fn next_frame(&mut self) -> Result<VideoFrame, FrameError>;
}

/// Deterministic frame source for tests and headless demos.
///
/// Yields mid-gray frames at the configured resolution, with a nanosecond
/// timestamp advancing by the frame interval. Exhausts with a read error
/// after the optional frame limit, mirroring how a real camera failure
/// terminates the loop.
pub struct SyntheticCamera {
    config: CameraConfig,
    sequence: u32,
    frame_limit: Option<u32>,
}

impl SyntheticCamera {
    pub fn new(config: CameraConfig) -> Self {
        info!(
            "Synthetic camera: {}x{} @ {}fps",
            config.width, config.height, config.fps
        );
        Self {
            config,
            sequence: 0,
            frame_limit: None,
        }
    }

    /// Stop producing frames after `limit` reads
    pub fn with_frame_limit(mut self, limit: u32) -> Self {
        self.frame_limit = Some(limit);
        self
    }
}

impl FrameSource for SyntheticCamera {
    fn next_frame(&mut self) -> Result<VideoFrame, FrameError> {
        if let Some(limit) = self.frame_limit {
            if self.sequence >= limit {
                return Err(FrameError::Read("synthetic stream exhausted".to_string()));
            }
        }

        let interval_ns = 1_000_000_000u64 / self.config.fps.max(1) as u64;
        let frame = VideoFrame::new(
            vec![128; (self.config.width * self.config.height * 3) as usize],
            self.config.width,
            self.config.height,
            self.sequence as u64 * interval_ns,
            self.sequence,
        );
        self.sequence += 1;
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_sequence_and_timestamps() {
        let mut camera = SyntheticCamera::new(CameraConfig {
            fps: 10,
            ..Default::default()
        });

        let first = camera.next_frame().unwrap();
        let second = camera.next_frame().unwrap();
        assert_eq!(first.sequence, 0);
        assert_eq!(second.sequence, 1);
        assert_eq!(second.timestamp_ns - first.timestamp_ns, 100_000_000);
    }

    #[test]
    fn test_frame_limit_exhausts_with_read_error() {
        let mut camera = SyntheticCamera::new(CameraConfig::default()).with_frame_limit(2);
        assert!(camera.next_frame().is_ok());
        assert!(camera.next_frame().is_ok());
        assert!(matches!(camera.next_frame(), Err(FrameError::Read(_))));
    }
}
