//! Alert coordinator: cooldown and warning-window state machine

use classifier::Verdict;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::info;

/// Warning banner shown while an alert window is active
pub const WARNING_TEXT: &str = "Drowsiness Detected! Stay Alert";

/// Alert configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertConfig {
    /// Minimum time between two audio triggers (milliseconds)
    pub cooldown_ms: u64,
    /// How long a triggered warning stays on screen (milliseconds)
    pub warning_duration_ms: u64,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: 2000,
            warning_duration_ms: 5000,
        }
    }
}

impl AlertConfig {
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    pub fn warning_duration(&self) -> Duration {
        Duration::from_millis(self.warning_duration_ms)
    }
}

/// Per-frame driver status label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DriverStatus {
    #[default]
    NonDrowsy,
    /// Model flagged drowsiness
    Drowsy,
    /// Only the eye tracker flagged (prolonged closure)
    DrowsyEyesClosed,
}

impl DriverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverStatus::NonDrowsy => "Non-Drowsy",
            DriverStatus::Drowsy => "Drowsy",
            DriverStatus::DrowsyEyesClosed => "Drowsy (Eyes Closed)",
        }
    }

    pub fn is_drowsy(&self) -> bool {
        !matches!(self, DriverStatus::NonDrowsy)
    }
}

/// Outcome of evaluating one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertDecision {
    pub status: DriverStatus,
    /// Banner text while a warning window is active
    pub warning: Option<&'static str>,
    /// Whether an audio alert should be dispatched for this frame
    pub fire_audio: bool,
}

/// Reconciles the two drowsiness signals under one cooldown and one
/// warning window.
///
/// States: Idle and Warning. Idle → Warning on (drowsy ∧ cooldown elapsed).
/// The warning is time-boxed: it stays visible until `warning_until`
/// passes, regardless of the drowsiness of intervening frames. Both
/// signals share the same suppression window — a model-flagged alert
/// also suppresses a closely following eye-closure alert.
pub struct AlertCoordinator {
    config: AlertConfig,
    last_alert: Option<Instant>,
    warning_until: Option<Instant>,
}

impl AlertCoordinator {
    pub fn new(config: AlertConfig) -> Self {
        Self {
            config,
            last_alert: None,
            warning_until: None,
        }
    }

    /// Evaluate one frame's signals
    pub fn evaluate(
        &mut self,
        verdict: Verdict,
        prolonged_closure: bool,
        now: Instant,
    ) -> AlertDecision {
        let status = if verdict.is_drowsy() {
            DriverStatus::Drowsy
        } else if prolonged_closure {
            DriverStatus::DrowsyEyesClosed
        } else {
            DriverStatus::NonDrowsy
        };

        let mut fire_audio = false;
        if status.is_drowsy() && self.cooldown_elapsed(now) {
            self.last_alert = Some(now);
            self.warning_until = Some(now + self.config.warning_duration());
            fire_audio = true;
            info!("Drowsiness alert fired ({})", status.as_str());
        }

        let warning = match self.warning_until {
            Some(until) if now <= until => Some(WARNING_TEXT),
            _ => None,
        };

        AlertDecision {
            status,
            warning,
            fire_audio,
        }
    }

    fn cooldown_elapsed(&self, now: Instant) -> bool {
        match self.last_alert {
            Some(last) => now.duration_since(last) > self.config.cooldown(),
            None => true,
        }
    }

    /// Reset alert state (on session restart)
    pub fn reset(&mut self) {
        self.last_alert = None;
        self.warning_until = None;
    }
}

impl Default for AlertCoordinator {
    fn default() -> Self {
        Self::new(AlertConfig::default())
    }
}
