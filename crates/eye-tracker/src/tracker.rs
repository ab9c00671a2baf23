//! Eye closure timer state machine

use crate::ear::eye_aspect_ratio;
use crate::landmarks::{LandmarkDetector, LEFT_EYE, RIGHT_EYE};
use frame_source::VideoFrame;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::debug;

/// Eye closure tracker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// EAR below this counts as closed eyes
    pub blink_threshold: f32,

    /// Continuous closure time before the prolonged-closure flag (milliseconds)
    pub closure_duration_ms: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            blink_threshold: 0.25,
            closure_duration_ms: 3500,
        }
    }
}

impl TrackerConfig {
    /// Strict config (flags sooner)
    pub fn strict() -> Self {
        Self {
            closure_duration_ms: 2000,
            ..Default::default()
        }
    }

    /// Lenient config (tolerates longer closures)
    pub fn lenient() -> Self {
        Self {
            closure_duration_ms: 5000,
            ..Default::default()
        }
    }

    pub fn closure_duration(&self) -> Duration {
        Duration::from_millis(self.closure_duration_ms)
    }
}

/// Tracks continuous eye closure over successive frames.
///
/// The timer starts on the first frame the averaged EAR drops below the
/// blink threshold and resets on any frame at or above it — a blink that
/// recovers before the duration threshold never flags. No face means no
/// closure signal and also resets the timer.
pub struct EyeClosureTracker {
    config: TrackerConfig,
    detector: Box<dyn LandmarkDetector>,
    closed_since: Option<Instant>,
    last_ear: Option<f32>,
}

impl EyeClosureTracker {
    pub fn new(config: TrackerConfig, detector: Box<dyn LandmarkDetector>) -> Self {
        Self {
            config,
            detector,
            closed_since: None,
            last_ear: None,
        }
    }

    /// Process one frame. Returns true while closure has been continuous
    /// for at least the configured duration.
    pub fn update(&mut self, frame: &VideoFrame, now: Instant) -> bool {
        let ear = self.detector.detect(frame).and_then(|landmarks| {
            let left = landmarks.eye_points(&LEFT_EYE, frame)?;
            let right = landmarks.eye_points(&RIGHT_EYE, frame)?;
            Some((eye_aspect_ratio(&left) + eye_aspect_ratio(&right)) / 2.0)
        });

        self.advance(ear, now)
    }

    /// Advance the timer with one EAR sample (`None` = no face found)
    pub fn advance(&mut self, ear: Option<f32>, now: Instant) -> bool {
        self.last_ear = ear;

        match ear {
            Some(ear) if ear < self.config.blink_threshold => {
                let start = *self.closed_since.get_or_insert(now);
                let elapsed = now.duration_since(start);
                let prolonged = elapsed >= self.config.closure_duration();
                if prolonged {
                    debug!("Prolonged eye closure: {:?} below EAR threshold", elapsed);
                }
                prolonged
            }
            _ => {
                self.closed_since = None;
                false
            }
        }
    }

    /// EAR of the most recent frame, if a face was found
    pub fn last_ear(&self) -> Option<f32> {
        self.last_ear
    }

    /// Reset the closure timer (on session restart)
    pub fn reset(&mut self) {
        self.closed_since = None;
        self.last_ear = None;
    }
}
