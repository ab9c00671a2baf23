//! Session configuration

use crate::SessionError;
use alerting::AlertConfig;
use eye_tracker::TrackerConfig;
use frame_source::CameraConfig;
use serde::{Deserialize, Serialize};

/// Configuration for one detection run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Camera settings
    pub camera: CameraConfig,

    /// Eye closure tracking thresholds
    pub tracker: TrackerConfig,

    /// Alert cooldown and warning window
    pub alert: AlertConfig,

    /// Path to the ONNX classifier model. Unset runs the mock classifier.
    pub model_path: Option<String>,

    /// Alert sound file handed to the audio sink
    pub alert_sound: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            tracker: TrackerConfig::default(),
            alert: AlertConfig::default(),
            model_path: None,
            alert_sound: "assets/alert.mp3".to_string(),
        }
    }
}

impl SessionConfig {
    /// Load configuration from an optional TOML file plus `DETECT__*`
    /// environment overrides, falling back to defaults.
    pub fn load(path: &str) -> Result<Self, SessionError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("DETECT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| SessionError::Config(e.to_string()))?;

        settings
            .try_deserialize()
            .map_err(|e| SessionError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_detection_policy() {
        let config = SessionConfig::default();
        assert_eq!(config.tracker.blink_threshold, 0.25);
        assert_eq!(config.tracker.closure_duration_ms, 3500);
        assert_eq!(config.alert.cooldown_ms, 2000);
        assert_eq!(config.alert.warning_duration_ms, 5000);
        assert!(config.model_path.is_none());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = SessionConfig::load("does-not-exist").unwrap();
        assert_eq!(config.camera.width, 640);
        assert_eq!(config.alert_sound, "assets/alert.mp3");
    }
}
