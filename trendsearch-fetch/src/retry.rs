//! Retry policy and backoff for transient failures.

use std::time::Duration;

use rand::Rng;
use tracing::{debug, warn};
use trendsearch_core::TrendsError;

/// Upper bound honored for server-supplied `Retry-After` waits.
const RETRY_AFTER_CAP_MS: u64 = 120_000;

/// Backoff configuration for retried requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Number of retries after the initial attempt. Zero disables retries.
    pub max_retries: u32,
    /// Delay before the first retry, in milliseconds.
    pub base_delay_ms: u64,
    /// Upper bound on any computed delay, in milliseconds.
    pub max_delay_ms: u64,
}

impl RetryPolicy {
    /// Disables retries entirely.
    pub fn no_retry() -> Self {
        Self {
            max_retries: 0,
            base_delay_ms: 0,
            max_delay_ms: 0,
        }
    }

    /// Exponential backoff with jitter for a given completed attempt number.
    ///
    /// Attempt 0 is the initial request, so the first retry waits roughly
    /// `base_delay_ms`, the second roughly twice that, and so on, capped at
    /// `max_delay_ms`. Up to 20% random jitter is added to avoid retry
    /// convergence across concurrent callers.
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let exp = self
            .base_delay_ms
            .saturating_mul(2u64.saturating_pow(attempt))
            .min(self.max_delay_ms);
        let jitter = if exp == 0 {
            0
        } else {
            rand::thread_rng().gen_range(0..=exp / 5)
        };
        Duration::from_millis((exp + jitter).min(self.max_delay_ms))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay_ms: 500,
            max_delay_ms: 8000,
        }
    }
}

/// Whether a failed attempt is worth repeating.
///
/// Rate limiting and transport failures without a status (timeouts, DNS and
/// connection errors) are transient. Server errors (5xx) are transient.
/// Client errors (4xx) and everything the response layer produces after a
/// body arrived are terminal: retrying a malformed payload or a removed
/// endpoint only burns quota.
pub fn default_should_retry(error: &TrendsError) -> bool {
    match error {
        TrendsError::RateLimit { .. } => true,
        TrendsError::Transport { status, .. } => match status {
            None => true,
            Some(code) => *code >= 500,
        },
        TrendsError::SchemaValidation { .. }
        | TrendsError::UnexpectedResponse { .. }
        | TrendsError::EndpointUnavailable { .. }
        | TrendsError::Config(_) => false,
    }
}

/// Wait hint carried by a rate-limit response, capped to a sane bound.
fn retry_after_override(error: &TrendsError) -> Option<Duration> {
    match error {
        TrendsError::RateLimit {
            retry_after_ms: Some(ms),
            ..
        } => Some(Duration::from_millis((*ms).min(RETRY_AFTER_CAP_MS))),
        _ => None,
    }
}

/// Runs `task` until it succeeds, runs out of attempts, or fails terminally.
///
/// The task receives the zero-based attempt number. `should_retry` decides
/// whether a failure is worth repeating; [`default_should_retry`] is the
/// usual choice. The error returned after exhaustion is the last attempt's
/// error, unchanged.
pub async fn run_with_retry<T, F, Fut, C>(
    policy: &RetryPolicy,
    mut task: F,
    should_retry: C,
) -> Result<T, TrendsError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, TrendsError>>,
    C: Fn(&TrendsError) -> bool,
{
    let mut attempt = 0;
    loop {
        match task(attempt).await {
            Ok(value) => return Ok(value),
            Err(error) => {
                if attempt >= policy.max_retries || !should_retry(&error) {
                    if attempt > 0 {
                        debug!(attempts = attempt + 1, code = error.code(), "Giving up");
                    }
                    return Err(error);
                }

                let delay =
                    retry_after_override(&error).unwrap_or_else(|| policy.backoff_delay(attempt));
                warn!(
                    code = error.code(),
                    attempt = attempt + 1,
                    delay_ms = delay.as_millis() as u64,
                    "Request failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn transport(status: Option<u16>) -> TrendsError {
        TrendsError::Transport {
            message: "boom".to_string(),
            url: "https://example.com/".to_string(),
            status,
            response_body: None,
        }
    }

    #[test]
    fn test_classification() {
        assert!(default_should_retry(&transport(None)));
        assert!(default_should_retry(&transport(Some(500))));
        assert!(default_should_retry(&transport(Some(503))));
        assert!(!default_should_retry(&transport(Some(400))));
        assert!(!default_should_retry(&transport(Some(404))));
        assert!(default_should_retry(&TrendsError::RateLimit {
            url: "https://example.com/".to_string(),
            status: 429,
            retry_after_ms: None,
        }));
        assert!(!default_should_retry(&TrendsError::schema(
            "explore.response",
            "(root): bad",
        )));
        assert!(!default_should_retry(&TrendsError::Config("x".to_string())));
    }

    #[test]
    fn test_backoff_doubles_and_caps() {
        let policy = RetryPolicy {
            max_retries: 5,
            base_delay_ms: 500,
            max_delay_ms: 2000,
        };
        for _ in 0..20 {
            let d0 = policy.backoff_delay(0).as_millis() as u64;
            let d1 = policy.backoff_delay(1).as_millis() as u64;
            let d4 = policy.backoff_delay(4).as_millis() as u64;
            assert!((500..=600).contains(&d0));
            assert!((1000..=1200).contains(&d1));
            assert_eq!(d4, 2000);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_retries_then_succeeds() {
        let calls = AtomicU32::new(0);
        let result = run_with_retry(
            &RetryPolicy::default(),
            |_| {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n < 2 {
                        Err(transport(Some(502)))
                    } else {
                        Ok("ok")
                    }
                }
            },
            default_should_retry,
        )
        .await;
        assert_eq!(result.unwrap(), "ok");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_terminal_error_is_not_retried() {
        let calls = AtomicU32::new(0);
        let result: Result<(), _> = run_with_retry(
            &RetryPolicy::default(),
            |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(transport(Some(400))) }
            },
            default_should_retry,
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            TrendsError::Transport {
                status: Some(400),
                ..
            }
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejecting_classifier_means_single_call() {
        let calls = AtomicU32::new(0);
        let result: Result<(), _> = run_with_retry(
            &RetryPolicy::default(),
            |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(transport(Some(503))) }
            },
            |_| false,
        )
        .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhaustion_returns_last_error() {
        let policy = RetryPolicy {
            max_retries: 2,
            base_delay_ms: 10,
            max_delay_ms: 100,
        };
        let calls = AtomicU32::new(0);
        let result: Result<(), _> = run_with_retry(
            &policy,
            |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async {
                    Err(TrendsError::RateLimit {
                        url: "https://example.com/".to_string(),
                        status: 429,
                        retry_after_ms: Some(5),
                    })
                }
            },
            default_should_retry,
        )
        .await;
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert!(matches!(
            result.unwrap_err(),
            TrendsError::RateLimit { status: 429, .. }
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_after_hint_is_honored() {
        let policy = RetryPolicy {
            max_retries: 1,
            base_delay_ms: 60_000,
            max_delay_ms: 60_000,
        };
        let start = tokio::time::Instant::now();
        let calls = AtomicU32::new(0);
        let _: Result<(), _> = run_with_retry(
            &policy,
            |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async {
                    Err(TrendsError::RateLimit {
                        url: "https://example.com/".to_string(),
                        status: 429,
                        retry_after_ms: Some(250),
                    })
                }
            },
            default_should_retry,
        )
        .await;
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(250));
        assert!(elapsed < Duration::from_millis(60_000));
    }
}
