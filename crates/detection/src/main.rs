//! Drowsiness Detection Pipeline - Main Entry Point

use alerting::NullAudioSink;
use detection::{init_logging, DetectionSession, LogDisplay, SessionConfig};
use eye_tracker::NullDetector;
use frame_source::SyntheticCamera;
use std::sync::atomic::Ordering;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    info!("=== Drowsiness Detection Pipeline v{} ===", env!("CARGO_PKG_VERSION"));

    let config = SessionConfig::load("detection")?;
    let mut session = DetectionSession::new(
        config.clone(),
        Box::new(NullDetector),
        NullAudioSink,
        Box::new(LogDisplay::default()),
    )?;

    let running = session.shutdown_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown requested");
            running.store(false, Ordering::Relaxed);
        }
    });

    // Camera driver integration is external; the synthetic source stands in
    // for it here so the loop runs end-to-end.
    let mut camera = SyntheticCamera::new(config.camera.clone());
    let summary = session.run(&mut camera)?;

    info!(
        "Run complete: {} frames processed, {} alerts",
        summary.frames_processed, summary.alerts_fired
    );
    Ok(())
}
