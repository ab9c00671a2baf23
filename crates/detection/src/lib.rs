//! Detection Session
//!
//! The per-frame drowsiness decision loop: acquire a frame, run the
//! classifier and the eye-closure tracker, reconcile both signals in the
//! alert coordinator, then hand results to the display and audio sinks.
//! Single-threaded and synchronous; per-frame errors degrade the signal,
//! setup errors abort the run.

mod config;
mod display;
mod session;

pub use config::SessionConfig;
pub use display::{DisplaySink, LogDisplay};
pub use session::{DetectionSession, SessionSummary};

use thiserror::Error;

/// Session error types
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Classifier(#[from] classifier::ClassifierError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Initialize tracing with an env-filter (RUST_LOG), defaulting to info
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
