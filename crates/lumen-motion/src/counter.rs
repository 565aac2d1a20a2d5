//! Count-up number animation.

/// Counts linearly from zero to `target` over `duration_ms` once started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    target: u64,
    duration_ms: u64,
    started_at: Option<u64>,
}

impl Counter {
    pub fn new(target: u64, duration_ms: u64) -> Self {
        Self {
            target,
            duration_ms,
            started_at: None,
        }
    }

    /// Count toward a new target from zero, starting at `now_ms`.
    pub fn restart(&mut self, target: u64, now_ms: u64) {
        self.target = target;
        self.started_at = Some(now_ms);
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Value to display at `now_ms`.
    pub fn value(&self, now_ms: u64) -> u64 {
        let Some(start) = self.started_at else {
            return 0;
        };
        let elapsed = now_ms.saturating_sub(start);
        if elapsed >= self.duration_ms {
            return self.target;
        }
        let progress = elapsed as f64 / self.duration_ms as f64;
        (progress * self.target as f64).floor() as u64
    }
}
