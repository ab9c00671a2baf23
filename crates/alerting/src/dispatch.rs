//! Audio alert dispatch
//!
//! The original design played alert audio on a detached thread with no
//! coordination, so overlapping triggers could overlap audio. Here the
//! sink sits behind a single-slot channel: at most one trigger is pending
//! while one plays, and further triggers are dropped (and logged). The
//! cooldown already spaces triggers out, so drops only happen when
//! playback outlasts the cooldown.

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, info, warn};

/// Audio playback boundary. Fire-and-forget: failures are logged by the
/// dispatch worker and never surfaced to the alerting logic.
pub trait AudioSink: Send + Sync + 'static {
    fn play(&self, path: &str) -> std::io::Result<()>;
}

/// Sink that only logs. For headless runs and tests.
pub struct NullAudioSink;

impl AudioSink for NullAudioSink {
    fn play(&self, path: &str) -> std::io::Result<()> {
        info!("Alert sound: {}", path);
        Ok(())
    }
}

/// Single-slot dispatcher in front of an [`AudioSink`].
pub struct AlertDispatcher {
    tx: mpsc::Sender<()>,
}

impl AlertDispatcher {
    /// Spawn the playback worker and return its handle
    pub fn spawn<S: AudioSink>(sink: S, sound_path: String) -> Self {
        let (tx, mut rx) = mpsc::channel(1);
        let sink = Arc::new(sink);

        tokio::spawn(async move {
            while rx.recv().await.is_some() {
                let sink = Arc::clone(&sink);
                let path = sound_path.clone();
                // Playback may block; keep it off the runtime workers
                let result = tokio::task::spawn_blocking(move || sink.play(&path)).await;
                match result {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => warn!("Error playing alert: {}", e),
                    Err(e) => warn!("Audio playback task failed: {}", e),
                }
            }
            debug!("Audio dispatch worker stopped");
        });

        Self { tx }
    }

    /// Request one alert playback. Drops the trigger if the slot is taken.
    pub fn trigger(&self) {
        match self.tx.try_send(()) {
            Ok(()) => {}
            Err(TrySendError::Full(())) => {
                debug!("Alert trigger dropped: playback already pending");
            }
            Err(TrySendError::Closed(())) => {
                warn!("Alert trigger dropped: audio worker stopped");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct CountingSink {
        plays: Arc<AtomicUsize>,
        play_time: Duration,
    }

    impl AudioSink for CountingSink {
        fn play(&self, _path: &str) -> std::io::Result<()> {
            std::thread::sleep(self.play_time);
            self.plays.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_single_trigger_plays_once() {
        let plays = Arc::new(AtomicUsize::new(0));
        let dispatcher = AlertDispatcher::spawn(
            CountingSink {
                plays: Arc::clone(&plays),
                play_time: Duration::from_millis(10),
            },
            "alert.mp3".to_string(),
        );

        dispatcher.trigger();
        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(plays.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_triggers_while_slot_taken_are_dropped() {
        let plays = Arc::new(AtomicUsize::new(0));
        let dispatcher = AlertDispatcher::spawn(
            CountingSink {
                plays: Arc::clone(&plays),
                play_time: Duration::from_millis(400),
            },
            "alert.mp3".to_string(),
        );

        // First trigger starts playing, second fills the slot,
        // the rest are dropped while playback is still running.
        dispatcher.trigger();
        tokio::time::sleep(Duration::from_millis(100)).await;
        dispatcher.trigger();
        dispatcher.trigger();
        dispatcher.trigger();

        tokio::time::sleep(Duration::from_millis(1200)).await;
        assert_eq!(plays.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_playback_failure_is_swallowed() {
        struct FailingSink;
        impl AudioSink for FailingSink {
            fn play(&self, _path: &str) -> std::io::Result<()> {
                Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no device"))
            }
        }

        let dispatcher = AlertDispatcher::spawn(FailingSink, "alert.mp3".to_string());
        dispatcher.trigger();
        tokio::time::sleep(Duration::from_millis(100)).await;
        // Still usable after a failure
        dispatcher.trigger();
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
}
