//! Display sink boundary

use alerting::DriverStatus;
use frame_source::VideoFrame;
use tracing::{debug, info};

/// Render boundary. Purely a side effect; nothing it returns influences
/// the decision loop.
pub trait DisplaySink: Send {
    fn show(&mut self, frame: &VideoFrame, status: DriverStatus, warning: Option<&str>);
}

/// Display sink that logs instead of rendering. Status transitions at
/// info, steady state at debug.
#[derive(Default)]
pub struct LogDisplay {
    last_status: Option<DriverStatus>,
}

impl DisplaySink for LogDisplay {
    fn show(&mut self, frame: &VideoFrame, status: DriverStatus, warning: Option<&str>) {
        if self.last_status != Some(status) {
            info!("Frame {}: status {}", frame.sequence, status.as_str());
            self.last_status = Some(status);
        } else {
            debug!("Frame {}: status {}", frame.sequence, status.as_str());
        }

        if let Some(text) = warning {
            debug!("Warning banner: {}", text);
        }
    }
}
