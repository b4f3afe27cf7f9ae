//! Client-side request pacing.
//!
//! Google Trends aggressively rate limits anonymous clients, so all requests
//! funnel through a [`RateLimiter`] that bounds concurrency and enforces a
//! minimum delay between request start times. Waiters are served in FIFO
//! order, so no request starves under contention.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, Semaphore};
use tokio::time::Instant;
use tracing::debug;

/// Pacing configuration for outbound requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    /// Maximum number of requests in flight at once.
    pub max_concurrent: usize,
    /// Minimum spacing between request start times, in milliseconds.
    pub min_delay_ms: u64,
}

impl RateLimitPolicy {
    /// Returns a copy with `max_concurrent` clamped to at least 1.
    pub fn clamped(self) -> Self {
        Self {
            max_concurrent: self.max_concurrent.max(1),
            min_delay_ms: self.min_delay_ms,
        }
    }
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self {
            max_concurrent: 1,
            min_delay_ms: 1000,
        }
    }
}

/// Bounds concurrency and spaces out request start times.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    semaphore: Arc<Semaphore>,
    next_start: Arc<Mutex<Instant>>,
    min_delay: Duration,
}

impl RateLimiter {
    /// Creates a limiter from a policy.
    pub fn new(policy: RateLimitPolicy) -> Self {
        let policy = policy.clamped();
        Self {
            semaphore: Arc::new(Semaphore::new(policy.max_concurrent)),
            next_start: Arc::new(Mutex::new(Instant::now())),
            min_delay: Duration::from_millis(policy.min_delay_ms),
        }
    }

    /// Runs `task` once a concurrency slot and a start time are available.
    ///
    /// The permit is held for the full duration of the task, so at most
    /// `max_concurrent` tasks run at once. Start times of successive tasks
    /// are at least `min_delay_ms` apart regardless of how long each runs.
    pub async fn run<F, Fut, T>(&self, task: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        // Semaphore queuing is FIFO, which keeps admission fair.
        let _permit = self
            .semaphore
            .acquire()
            .await
            .expect("rate limiter semaphore is never closed");

        let slot = {
            let mut next_start = self.next_start.lock().await;
            let slot = (*next_start).max(Instant::now());
            *next_start = slot + self.min_delay;
            slot
        };

        let wait = slot.saturating_duration_since(Instant::now());
        if !wait.is_zero() {
            debug!(wait_ms = wait.as_millis() as u64, "Pacing request start");
        }
        tokio::time::sleep_until(slot).await;

        task().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test(start_paused = true)]
    async fn test_spaces_sequential_starts() {
        let limiter = RateLimiter::new(RateLimitPolicy {
            max_concurrent: 1,
            min_delay_ms: 1000,
        });

        let origin = Instant::now();
        let mut starts = Vec::new();
        for _ in 0..3 {
            let at = limiter.run(|| async { Instant::now() }).await;
            starts.push(at.duration_since(origin));
        }

        assert!(starts[1] - starts[0] >= Duration::from_millis(1000));
        assert!(starts[2] - starts[1] >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_bounds_concurrency() {
        let limiter = Arc::new(RateLimiter::new(RateLimitPolicy {
            max_concurrent: 2,
            min_delay_ms: 0,
        }));
        let running = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..6 {
            let limiter = limiter.clone();
            let running = running.clone();
            let peak = peak.clone();
            handles.push(tokio::spawn(async move {
                limiter
                    .run(|| async {
                        let now = running.fetch_add(1, Ordering::SeqCst) + 1;
                        peak.fetch_max(now, Ordering::SeqCst);
                        tokio::time::sleep(Duration::from_millis(50)).await;
                        running.fetch_sub(1, Ordering::SeqCst);
                    })
                    .await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert!(peak.load(Ordering::SeqCst) <= 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_concurrency_is_clamped() {
        let limiter = RateLimiter::new(RateLimitPolicy {
            max_concurrent: 0,
            min_delay_ms: 0,
        });
        let value = limiter.run(|| async { 7 }).await;
        assert_eq!(value, 7);
    }
}
