use std::{future::Future, time::Duration};

use tokio::time::{sleep, sleep_until, Instant};
use tokio_util::sync::CancellationToken;

use crate::error::FetchError;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(500);

/// Bounded retry with exponential backoff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
        }
    }
}

impl RetryPolicy {
    /// Wait between attempt `attempt` and the next one: `base * 2^(attempt - 1)`
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        self.base_delay.saturating_mul(1 << exponent)
    }

    /// Runs `operation` until it succeeds, fails with a non-retryable error,
    /// or the attempt budget is spent.
    ///
    /// Each attempt and each backoff wait races `cancel` and `deadline`, so
    /// either one aborts the loop without waiting out the remaining attempts.
    pub async fn run<T, F, Fut>(
        &self,
        deadline: Instant,
        cancel: &CancellationToken,
        mut operation: F,
    ) -> Result<T, FetchError>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, FetchError>>,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(FetchError::Cancelled),
                _ = sleep_until(deadline) => return Err(FetchError::DeadlineExceeded),
                outcome = operation(attempt) => outcome,
            };

            let err = match outcome {
                Ok(value) => {
                    if attempt > 1 {
                        tracing::info!(attempt, max_attempts, "Catalog fetch succeeded after retry");
                    }
                    return Ok(value);
                }
                Err(err) if !err.is_retryable() => return Err(err),
                Err(err) => err,
            };

            if attempt >= max_attempts {
                tracing::warn!(attempts = attempt, error = %err, "Catalog fetch attempts exhausted");
                return Err(FetchError::Exhausted {
                    attempts: attempt,
                    last: Box::new(err),
                });
            }

            let delay = self.delay_after(attempt);
            tracing::warn!(
                attempt,
                max_attempts,
                delay_ms = delay.as_millis() as u64,
                error = %err,
                "Catalog fetch attempt failed, retrying"
            );

            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(FetchError::Cancelled),
                _ = sleep_until(deadline) => return Err(FetchError::DeadlineExceeded),
                _ = sleep(delay) => {}
            }

            attempt += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tokio_test::{assert_err, assert_ok};

    fn unavailable() -> FetchError {
        FetchError::UpstreamStatus {
            status: 503,
            body: "unavailable".to_string(),
        }
    }

    fn far_deadline() -> Instant {
        Instant::now() + Duration::from_secs(60)
    }

    #[test]
    fn test_delay_doubles_per_attempt() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_after(1), Duration::from_millis(500));
        assert_eq!(policy.delay_after(2), Duration::from_millis(1000));
        assert_eq!(policy.delay_after(3), Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_three_attempts_with_increasing_waits() {
        let started = Instant::now();
        let attempts: Arc<Mutex<Vec<Duration>>> = Arc::new(Mutex::new(Vec::new()));
        let cancel = CancellationToken::new();

        let recorded = attempts.clone();
        let result: Result<(), FetchError> = RetryPolicy::default()
            .run(far_deadline(), &cancel, move |_| {
                let recorded = recorded.clone();
                async move {
                    recorded.lock().unwrap().push(started.elapsed());
                    Err(unavailable())
                }
            })
            .await;

        match result {
            Err(FetchError::Exhausted { attempts, last }) => {
                assert_eq!(attempts, 3);
                assert!(matches!(*last, FetchError::UpstreamStatus { status: 503, .. }));
            }
            other => panic!("expected exhausted error, got {:?}", other),
        }

        let offsets = attempts.lock().unwrap().clone();
        assert_eq!(
            offsets,
            vec![
                Duration::ZERO,
                Duration::from_millis(500),
                Duration::from_millis(1500)
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_on_second_attempt() {
        let cancel = CancellationToken::new();

        let result = RetryPolicy::default()
            .run(far_deadline(), &cancel, |attempt| async move {
                if attempt == 1 {
                    Err(unavailable())
                } else {
                    Ok(attempt)
                }
            })
            .await;

        assert_eq!(assert_ok!(result), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_retryable_error_returns_immediately() {
        let cancel = CancellationToken::new();
        let calls = Arc::new(Mutex::new(0));

        let counter = calls.clone();
        let result: Result<(), FetchError> = RetryPolicy::default()
            .run(far_deadline(), &cancel, move |_| {
                let counter = counter.clone();
                async move {
                    *counter.lock().unwrap() += 1;
                    Err(FetchError::Decode(
                        serde_json::from_str::<serde_json::Value>("not json").unwrap_err(),
                    ))
                }
            })
            .await;

        assert!(matches!(assert_err!(result), FetchError::Decode(_)));
        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancellation_aborts_backoff_wait() {
        let cancel = CancellationToken::new();
        let calls = Arc::new(Mutex::new(0));

        let counter = calls.clone();
        let trigger = cancel.clone();
        let result: Result<(), FetchError> = RetryPolicy::default()
            .run(far_deadline(), &cancel, move |_| {
                let counter = counter.clone();
                let trigger = trigger.clone();
                async move {
                    *counter.lock().unwrap() += 1;
                    trigger.cancel();
                    Err(unavailable())
                }
            })
            .await;

        assert!(matches!(assert_err!(result), FetchError::Cancelled));
        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_aborts_mid_retry() {
        let cancel = CancellationToken::new();
        let started = Instant::now();
        let deadline = started + Duration::from_millis(700);
        let calls = Arc::new(Mutex::new(0));

        let counter = calls.clone();
        let result: Result<(), FetchError> = RetryPolicy::default()
            .run(deadline, &cancel, move |_| {
                let counter = counter.clone();
                async move {
                    *counter.lock().unwrap() += 1;
                    Err(unavailable())
                }
            })
            .await;

        assert!(matches!(assert_err!(result), FetchError::DeadlineExceeded));
        assert_eq!(*calls.lock().unwrap(), 2);
        assert_eq!(started.elapsed(), Duration::from_millis(700));
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_aborts_slow_attempt() {
        let cancel = CancellationToken::new();
        let deadline = Instant::now() + Duration::from_secs(1);

        let result: Result<(), FetchError> = RetryPolicy::default()
            .run(deadline, &cancel, |_| async {
                sleep(Duration::from_secs(30)).await;
                Ok(())
            })
            .await;

        assert!(matches!(assert_err!(result), FetchError::DeadlineExceeded));
    }
}
