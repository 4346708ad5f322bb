//! Suggestion run timing
//!
//! Lightweight timers wrapped around each suggestion run so slow runs show up
//! in the logs.

use std::time::{Duration, Instant};

/// Performance timer for tracking operation duration
pub struct PerformanceTimer {
    start: Instant,
    label: &'static str,
    slow_threshold: Duration,
}

impl PerformanceTimer {
    pub fn new(label: &'static str, slow_threshold: Duration) -> Self {
        Self {
            start: Instant::now(),
            label,
            slow_threshold,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn is_slow(&self) -> bool {
        self.elapsed() > self.slow_threshold
    }
}

impl Drop for PerformanceTimer {
    fn drop(&mut self) {
        if self.is_slow() {
            tracing::warn!(
                "Slow suggestion run: {} took {:?} (threshold: {:?})",
                self.label,
                self.elapsed(),
                self.slow_threshold
            );
        } else {
            tracing::debug!("{} completed in {:?}", self.label, self.elapsed());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_thresholds() {
        let generous = PerformanceTimer::new("generous", Duration::from_secs(60));
        assert!(!generous.is_slow());

        let strict = PerformanceTimer::new("strict", Duration::ZERO);
        std::thread::sleep(Duration::from_millis(2));
        assert!(strict.is_slow());
        assert!(strict.elapsed() >= Duration::from_millis(2));
    }
}
