// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Bounded retry with an injectable backoff function
//!
//! Only failures that happen before a response is received are retried. The
//! backoff sleeps run inside the caller's future.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Default number of attempts before giving up
pub const DEFAULT_MAX_ATTEMPTS: u32 = 40;

/// Default delay unit of the linear backoff
pub const DEFAULT_BACKOFF_UNIT: Duration = Duration::from_millis(200);

/// Maps the number of the attempt that just failed (starting at 1) to the
/// delay before the next attempt
pub type BackoffFn = Arc<dyn Fn(u32) -> Duration + Send + Sync>;

/// How many times a request is attempted and how long to wait in between
#[derive(Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: BackoffFn,
}

impl RetryPolicy {
    /// Waits `attempt * unit` after each failed attempt
    pub fn linear(max_attempts: u32, unit: Duration) -> Self {
        Self {
            max_attempts,
            backoff: Arc::new(move |attempt| unit.saturating_mul(attempt)),
        }
    }

    /// Retries immediately; mostly useful in tests
    pub fn no_delay(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            backoff: Arc::new(|_| Duration::ZERO),
        }
    }

    /// Uses a caller supplied backoff function
    pub fn with_backoff<F>(max_attempts: u32, backoff: F) -> Self
    where
        F: Fn(u32) -> Duration + Send + Sync + 'static,
    {
        Self {
            max_attempts,
            backoff: Arc::new(backoff),
        }
    }

    pub fn delay_after(&self, attempt: u32) -> Duration {
        (self.backoff)(attempt)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::linear(DEFAULT_MAX_ATTEMPTS, DEFAULT_BACKOFF_UNIT)
    }
}

impl fmt::Debug for RetryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryPolicy")
            .field("max_attempts", &self.max_attempts)
            .field("first_delay", &self.delay_after(1))
            .finish()
    }
}

/// Last error of a failed retry loop
#[derive(Debug)]
pub struct RetryFailure<E> {
    /// Number of attempts made, including the failed one
    pub attempts: u32,
    /// True if the error was retryable and the attempt ceiling was reached
    pub exhausted: bool,
    pub error: E,
}

/// Runs `operation` until it succeeds, fails with an error `is_retryable`
/// rejects, or `policy.max_attempts` attempts were made.
///
/// A `max_attempts` of 0 is treated as 1.
pub async fn retry_with_backoff<T, E, F, Fut, R>(
    policy: &RetryPolicy,
    mut operation: F,
    is_retryable: R,
) -> Result<T, RetryFailure<E>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    R: Fn(&E) -> bool,
    E: fmt::Display,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        attempt += 1;

        match operation(attempt).await {
            Ok(result) => return Ok(result),
            Err(e) => {
                if !is_retryable(&e) {
                    return Err(RetryFailure {
                        attempts: attempt,
                        exhausted: false,
                        error: e,
                    });
                }
                if attempt >= max_attempts {
                    return Err(RetryFailure {
                        attempts: attempt,
                        exhausted: true,
                        error: e,
                    });
                }

                let backoff = policy.delay_after(attempt);
                log::debug!(
                    "attempt {attempt}/{max_attempts} failed: {e}; retrying in {}ms",
                    backoff.as_millis()
                );
                if !backoff.is_zero() {
                    async_std::task::sleep(backoff).await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 40);
        assert_eq!(policy.delay_after(1), Duration::from_millis(200));
        assert_eq!(policy.delay_after(2), Duration::from_millis(400));
        assert_eq!(policy.delay_after(39), Duration::from_millis(7800));
    }

    #[test]
    fn test_no_delay_policy() {
        let policy = RetryPolicy::no_delay(5);
        assert_eq!(policy.max_attempts, 5);
        assert_eq!(policy.delay_after(3), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_retry_success_first_attempt() {
        let calls = AtomicU32::new(0);
        let result: Result<u32, RetryFailure<String>> = retry_with_backoff(
            &RetryPolicy::no_delay(3),
            |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok(42) }
            },
            |_| true,
        )
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retry_success_after_failures() {
        let calls = AtomicU32::new(0);
        let result = retry_with_backoff(
            &RetryPolicy::no_delay(5),
            |attempt| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if attempt < 3 {
                        Err("connection reset".to_string())
                    } else {
                        Ok(attempt)
                    }
                }
            },
            |_| true,
        )
        .await;

        assert_eq!(result.unwrap(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retry_exhausts_at_ceiling() {
        let calls = AtomicU32::new(0);
        let delays = Arc::new(AtomicU32::new(0));
        let counted = delays.clone();
        let policy = RetryPolicy::with_backoff(7, move |_| {
            counted.fetch_add(1, Ordering::SeqCst);
            Duration::ZERO
        });

        let result: Result<(), _> = retry_with_backoff(
            &policy,
            |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err("connection refused".to_string()) }
            },
            |_| true,
        )
        .await;

        let failure = result.unwrap_err();
        assert!(failure.exhausted);
        assert_eq!(failure.attempts, 7);
        assert_eq!(failure.error, "connection refused");
        assert_eq!(calls.load(Ordering::SeqCst), 7);
        // no wait after the last attempt
        assert_eq!(delays.load(Ordering::SeqCst), 6);
    }

    #[tokio::test]
    async fn test_non_retryable_error_stops_immediately() {
        let calls = AtomicU32::new(0);
        let result: Result<(), _> = retry_with_backoff(
            &RetryPolicy::no_delay(10),
            |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err("invalid header value".to_string()) }
            },
            |e: &String| !e.contains("invalid"),
        )
        .await;

        let failure = result.unwrap_err();
        assert!(!failure.exhausted);
        assert_eq!(failure.attempts, 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_zero_attempts_still_tries_once() {
        let calls = AtomicU32::new(0);
        let result: Result<(), _> = retry_with_backoff(
            &RetryPolicy::no_delay(0),
            |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err("timeout".to_string()) }
            },
            |_| true,
        )
        .await;

        assert_eq!(result.unwrap_err().attempts, 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_linear_backoff_waits() {
        let start = std::time::Instant::now();
        let result: Result<(), _> = retry_with_backoff(
            &RetryPolicy::linear(3, Duration::from_millis(10)),
            |_| async { Err("timeout".to_string()) },
            |_| true,
        )
        .await;

        assert!(result.unwrap_err().exhausted);
        // 10ms + 20ms
        assert!(start.elapsed() >= Duration::from_millis(30));
    }
}
