// src/infra/timing.rs — Scoped stage timing

use std::time::{Duration, Instant};

/// Logs how long a stage took when dropped.
///
/// ```ignore
/// let _timer = StageTimer::start("parse_complexity");
/// // ... work ...
/// // elapsed time is logged at debug level here
/// ```
pub struct StageTimer {
    stage: &'static str,
    start: Instant,
}

impl StageTimer {
    pub fn start(stage: &'static str) -> Self {
        Self {
            stage,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for StageTimer {
    fn drop(&mut self) {
        tracing::debug!(
            stage = self.stage,
            elapsed_ms = self.elapsed().as_secs_f64() * 1000.0,
            "stage finished"
        );
    }
}
