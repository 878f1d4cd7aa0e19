//! Retry policy and backoff calculation.
//!
//! Portable, sync-only building blocks. The async executor that drives the
//! actual attempts lives in `seoscope-gemini` (which has access to tokio);
//! this module contains:
//!
//! - [`RetryPolicy`]: attempt budget and delay parameters
//! - [`backoff_delay_with_random`]: exponential backoff with additive jitter

use std::time::Duration;

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Default total attempt budget per logical call.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
/// Default base delay in milliseconds.
pub const DEFAULT_BASE_DELAY_MS: u64 = 1000;
/// Default upper bound of the additive jitter in milliseconds.
pub const DEFAULT_JITTER_CAP_MS: u64 = 1000;

/// Configuration for the retry executor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryPolicy {
    /// Total attempt budget, first try included (default: 3).
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Base delay for exponential backoff in ms (default: 1000).
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
    /// Upper bound of the random additive jitter in ms (default: 1000).
    #[serde(default = "default_jitter_cap_ms")]
    pub jitter_cap_ms: u64,
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}
fn default_base_delay_ms() -> u64 {
    DEFAULT_BASE_DELAY_MS
}
fn default_jitter_cap_ms() -> u64 {
    DEFAULT_JITTER_CAP_MS
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay_ms: DEFAULT_BASE_DELAY_MS,
            jitter_cap_ms: DEFAULT_JITTER_CAP_MS,
        }
    }
}

impl RetryPolicy {
    /// Delay to wait after the given failed attempt, as a [`Duration`].
    ///
    /// `random` must be a value in `[0.0, 1.0)` from a PRNG; the executor
    /// draws it per wait, tests pass fixed values for exact assertions.
    #[must_use]
    pub fn delay_for(&self, attempt: u32, random: f64) -> Duration {
        Duration::from_millis(backoff_delay_with_random(
            attempt,
            self.base_delay_ms,
            self.jitter_cap_ms,
            random,
        ))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Backoff calculation
// ─────────────────────────────────────────────────────────────────────────────

/// Calculate the backoff delay in milliseconds before retrying a failed
/// attempt.
///
/// Formula: `base_delay * 2^attempt + random * jitter_cap`
///
/// The jitter is additive, not multiplicative, so the delay grows
/// monotonically in expectation across attempts. `attempt` is zero-based
/// and the shift saturates for large values instead of overflowing.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn backoff_delay_with_random(
    attempt: u32,
    base_delay_ms: u64,
    jitter_cap_ms: u64,
    random: f64,
) -> u64 {
    let exponential = base_delay_ms.saturating_mul(1u64 << attempt.min(31));
    let jitter = (random * jitter_cap_ms as f64).floor() as u64;
    exponential.saturating_add(jitter)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
