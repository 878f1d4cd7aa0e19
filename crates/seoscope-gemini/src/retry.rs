//! Retry execution with exponential backoff and jitter.
//!
//! Every failed attempt is retried the same way until attempts run out.
//! There is no per-status classification: transient and permanent transport
//! failures get the same treatment, and the final error is classified at
//! the call site.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use seoscope_core::RetryPolicy;

use crate::errors::{ClientError, RetryError};

/// Sleep source for retry waits.
///
/// Production code uses [`TokioClock`]; tests inject a recording fake so
/// backoff behavior is observable without real waiting.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Sleep for the given duration.
    async fn sleep(&self, duration: Duration);
}

/// Clock backed by the tokio timer.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Executor state, advanced one step per loop iteration.
///
/// An attempt either resolves the whole operation or transitions to a
/// bounded wait, so the loop cannot run more than `max_attempts` tries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RetryState {
    /// Performing attempt `n` (zero-based).
    Attempting(u32),
    /// Waiting before performing attempt `n`.
    Waiting(u32),
}

/// Runs transport operations with bounded retries.
#[derive(Clone)]
pub struct RetryExecutor {
    policy: RetryPolicy,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for RetryExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetryExecutor")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl RetryExecutor {
    /// Create an executor using the tokio timer for waits.
    #[must_use]
    pub fn new(policy: RetryPolicy) -> Self {
        Self::with_clock(policy, Arc::new(TokioClock))
    }

    /// Create an executor with an injected clock.
    #[must_use]
    pub fn with_clock(policy: RetryPolicy, clock: Arc<dyn Clock>) -> Self {
        Self { policy, clock }
    }

    /// The retry policy in effect.
    #[must_use]
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Run `operation` until it succeeds or attempts are exhausted.
    ///
    /// A `max_attempts` of zero is treated as one attempt.
    ///
    /// # Errors
    ///
    /// [`RetryError`] wrapping the final attempt's failure.
    pub async fn execute<T, F, Fut>(&self, mut operation: F) -> Result<T, RetryError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        let max_attempts = self.policy.max_attempts.max(1);
        let mut state = RetryState::Attempting(0);

        loop {
            match state {
                RetryState::Attempting(attempt) => match operation().await {
                    Ok(value) => {
                        if attempt > 0 {
                            debug!(attempts = attempt + 1, "operation succeeded after retries");
                        }
                        return Ok(value);
                    }
                    Err(err) => {
                        let attempts = attempt + 1;
                        if attempts >= max_attempts {
                            warn!(attempts, error = %err, "all attempts failed");
                            return Err(RetryError {
                                attempts,
                                last: err,
                            });
                        }
                        warn!(attempt = attempts, error = %err, "attempt failed, retrying");
                        state = RetryState::Waiting(attempts);
                    }
                },
                RetryState::Waiting(next) => {
                    let delay = self.policy.delay_for(next - 1, rand::random::<f64>());
                    debug!(?delay, "waiting before retry");
                    self.clock.sleep(delay).await;
                    state = RetryState::Attempting(next);
                }
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
