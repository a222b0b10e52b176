use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Instant;

/// Process-wide request counter plus the service start instant.
///
/// Created once at startup and shared (behind an `Arc`) between the HTTP
/// layer and the reporter. The count only ever goes up; it is never reset.
/// Increments are lock-free so counting stays off the hot-path lock.
pub struct StatsCounter {
    started: Instant,
    requests: AtomicI64,
}

impl StatsCounter {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            requests: AtomicI64::new(0),
        }
    }

    /// Add one to the request count. Safe under unbounded concurrency.
    pub fn increment(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn request_count(&self) -> i64 {
        self.requests.load(Ordering::Relaxed)
    }

    /// Whole seconds elapsed since the counter was created. `Instant` is
    /// monotonic, so this never goes backwards and is never negative.
    pub fn uptime_seconds(&self) -> i64 {
        self.started.elapsed().as_secs() as i64
    }
}
