//! Recording timeline adjustments.

/// Caps the gap between consecutive output events.
///
/// Every gap longer than the limit is shrunk to it, and all later
/// timestamps shift left by the accumulated excess.
#[derive(Debug, Clone)]
pub struct PauseLimiter {
    limit: Option<f64>,
    last: f64,
    shift: f64,
}

impl PauseLimiter {
    pub fn new(limit: Option<f64>) -> Self {
        Self {
            limit,
            last: 0.0,
            shift: 0.0,
        }
    }

    /// Map a recorded timestamp to its playback time.
    pub fn adjust(&mut self, time: f64) -> f64 {
        if let Some(limit) = self.limit {
            let gap = time - self.last;
            if gap > limit {
                self.shift += gap - limit;
            }
        }
        self.last = time;
        time - self.shift
    }

    /// Total time removed so far.
    pub fn skipped(&self) -> f64 {
        self.shift
    }
}
