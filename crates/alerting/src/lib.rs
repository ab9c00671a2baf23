//! Alerting
//!
//! Reconciles the classifier verdict with the eye-closure signal, debounces
//! alert triggers behind a shared cooldown, keeps a time-boxed warning
//! window, and dispatches audio through a single-slot channel.

mod coordinator;
mod dispatch;

pub use coordinator::{AlertConfig, AlertCoordinator, AlertDecision, DriverStatus};
pub use dispatch::{AlertDispatcher, AudioSink, NullAudioSink};
