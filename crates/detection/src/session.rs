//! Per-frame detection session

use crate::display::DisplaySink;
use crate::{SessionConfig, SessionError};
use alerting::{AlertCoordinator, AlertDispatcher, AudioSink};
use classifier::{DrowsinessClassifier, Verdict};
use eye_tracker::{EyeClosureTracker, LandmarkDetector};
use frame_source::FrameSource;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

/// Counters reported at the end of a run
#[derive(Debug, Clone, Default)]
pub struct SessionSummary {
    pub frames_processed: u64,
    pub alerts_fired: u64,
}

/// One detection run. Owns every piece of per-run state; nothing
/// outlives it.
pub struct DetectionSession {
    config: SessionConfig,
    classifier: DrowsinessClassifier,
    tracker: EyeClosureTracker,
    coordinator: AlertCoordinator,
    dispatcher: AlertDispatcher,
    display: Box<dyn DisplaySink>,
    running: Arc<AtomicBool>,
}

impl DetectionSession {
    /// Build a session from config and the external boundaries.
    ///
    /// Must be called within a tokio runtime (the audio dispatch worker
    /// is spawned here). A configured model path that fails to load is a
    /// setup error and aborts the run before it starts.
    pub fn new(
        config: SessionConfig,
        detector: Box<dyn LandmarkDetector>,
        audio: impl AudioSink,
        display: Box<dyn DisplaySink>,
    ) -> Result<Self, SessionError> {
        let classifier = match &config.model_path {
            Some(path) => DrowsinessClassifier::from_onnx(path)?,
            None => DrowsinessClassifier::mock(),
        };
        info!("Classifier ready (model: {})", classifier.model_path());

        let tracker = EyeClosureTracker::new(config.tracker.clone(), detector);
        let coordinator = AlertCoordinator::new(config.alert.clone());
        let dispatcher = AlertDispatcher::spawn(audio, config.alert_sound.clone());

        Ok(Self {
            config,
            classifier,
            tracker,
            coordinator,
            dispatcher,
            display,
            running: Arc::new(AtomicBool::new(true)),
        })
    }

    /// Handle for cooperative shutdown; checked once per iteration
    pub fn shutdown_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.running)
    }

    /// Run the detection loop until shutdown or frame read failure.
    ///
    /// Synchronous by design: the loop blocks on frame acquisition and on
    /// inference, and there is no watchdog. Per-frame classifier errors
    /// degrade the verdict to Unknown and the loop keeps going.
    pub fn run(&mut self, source: &mut dyn FrameSource) -> Result<SessionSummary, SessionError> {
        let mut summary = SessionSummary::default();
        info!("Detection loop started");

        while self.running.load(Ordering::Relaxed) {
            let frame = match source.next_frame() {
                Ok(frame) => frame,
                Err(e) => {
                    error!("Frame read failed, stopping: {}", e);
                    break;
                }
            };

            let frame = if self.config.camera.mirror {
                frame.mirror_horizontal()
            } else {
                frame
            };
            let now = Instant::now();

            let verdict = match self.classifier.classify(&frame) {
                Ok(verdict) => verdict,
                Err(e) => {
                    warn!("Classification degraded to Unknown: {}", e);
                    Verdict::Unknown
                }
            };
            let prolonged_closure = self.tracker.update(&frame, now);

            let decision = self.coordinator.evaluate(verdict, prolonged_closure, now);
            if decision.fire_audio {
                summary.alerts_fired += 1;
                self.dispatcher.trigger();
            }

            self.display.show(&frame, decision.status, decision.warning);
            summary.frames_processed += 1;
        }

        self.running.store(false, Ordering::Relaxed);
        info!(
            "Detection loop stopped: {} frames, {} alerts",
            summary.frames_processed, summary.alerts_fired
        );
        Ok(summary)
    }

    /// Request the loop to stop after the current iteration
    pub fn stop(&self) {
        self.running.store(false, Ordering::Relaxed);
    }
}
