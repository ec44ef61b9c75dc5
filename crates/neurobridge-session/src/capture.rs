//! Tap capture sources.
//!
//! The session consumes timestamps through [`TapSource`]. Hardware-backed
//! shells provide their own implementation; [`SimulatedTapper`] stands in
//! where no capture device exists (demos, tests).

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use tracing::info;

use neurobridge_core::error::CoreError;
use neurobridge_core::models::taps::TapSequence;

use crate::config::ScreeningConfig;

/// Cooperative cancellation flag shared between a capture loop and its
/// controller. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Source of tap timestamps for the motor test.
pub trait TapSource {
    /// Collect one trial. Implementations poll `cancel` between taps and
    /// return what was gathered so far when it fires — a cancelled trial
    /// is a shorter trial, not an error.
    fn collect(&mut self, cancel: &CancelToken) -> Result<TapSequence, CoreError>;
}

/// Fixed-cadence fake tapper: emits one tap per poll interval for the
/// length of the trial window.
pub struct SimulatedTapper {
    window: Duration,
    poll: Duration,
}

impl SimulatedTapper {
    /// Default trial: a 10 second window polled every 200 ms.
    pub fn new() -> Self {
        Self {
            window: Duration::from_secs(10),
            poll: Duration::from_millis(200),
        }
    }

    pub fn with_window(window: Duration, poll: Duration) -> Self {
        Self { window, poll }
    }

    pub fn from_config(config: &ScreeningConfig) -> Self {
        Self {
            window: Duration::from_secs(config.capture_window_secs),
            poll: Duration::from_millis(config.capture_poll_ms),
        }
    }

    /// Trial window length; shells derive capture progress from this.
    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn poll(&self) -> Duration {
        self.poll
    }
}

impl Default for SimulatedTapper {
    fn default() -> Self {
        Self::new()
    }
}

impl TapSource for SimulatedTapper {
    fn collect(&mut self, cancel: &CancelToken) -> Result<TapSequence, CoreError> {
        let started = Instant::now();
        let mut taps = Vec::new();

        while started.elapsed() < self.window {
            if cancel.is_cancelled() {
                info!(taps = taps.len(), "tapping trial cancelled");
                break;
            }
            std::thread::sleep(self.poll);
            taps.push(started.elapsed().as_secs_f64());
        }

        TapSequence::new(taps)
    }
}
