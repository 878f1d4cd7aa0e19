//! Observable per-session invocation state.
//!
//! One session tracks one active tool, at most one invocation in flight,
//! and the outcome of the last settled invocation. All mutation goes
//! through the coordinator; readers get point-in-time snapshots so no lock
//! is ever held across an await.

use parking_lot::Mutex;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use seoscope_core::{InvocationError, InvocationResult};

/// Rejection returned when a submit arrives while another is in flight.
///
/// This is a synchronous refusal, not an invocation failure: nothing is
/// written to session state and the in-flight invocation is unaffected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("session is busy: `{active_tool_id}` has an invocation in flight")]
pub struct SessionBusy {
    /// Tool whose invocation is still running.
    pub active_tool_id: String,
}

/// Point-in-time view of the session.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// Id of the currently active tool.
    pub active_tool_id: String,
    /// Whether an invocation is in flight.
    pub loading: bool,
    /// Result of the last settled invocation, if it succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<InvocationResult>,
    /// Error of the last settled invocation, if it failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<InvocationError>,
}

#[derive(Debug)]
struct Inner {
    active_tool_id: String,
    loading: bool,
    result: Option<InvocationResult>,
    error: Option<InvocationError>,
    /// Monotonic dispatch counter. Bumped by every accepted submit and
    /// every tool switch, so a settle can prove it is still current.
    dispatch_seq: u64,
}

/// Mutable state for one tool session.
#[derive(Debug)]
pub struct SessionState {
    inner: Mutex<Inner>,
}

impl SessionState {
    /// Create a session with the given tool active and nothing in flight.
    #[must_use]
    pub fn new(initial_tool_id: impl Into<String>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                active_tool_id: initial_tool_id.into(),
                loading: false,
                result: None,
                error: None,
                dispatch_seq: 0,
            }),
        }
    }

    /// Snapshot the observable state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let inner = self.inner.lock();
        SessionSnapshot {
            active_tool_id: inner.active_tool_id.clone(),
            loading: inner.loading,
            result: inner.result.clone(),
            error: inner.error.clone(),
        }
    }

    /// Whether an invocation is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.inner.lock().loading
    }

    /// Id of the currently active tool.
    #[must_use]
    pub fn active_tool_id(&self) -> String {
        self.inner.lock().active_tool_id.clone()
    }

    /// Accept a new invocation for `tool_id`.
    ///
    /// Rejects synchronously when one is already in flight. On acceptance
    /// the previous outcome is cleared, the tool becomes active, and the
    /// returned dispatch number must accompany the eventual settle.
    pub(crate) fn begin(&self, tool_id: &str) -> Result<u64, SessionBusy> {
        let mut inner = self.inner.lock();
        if inner.loading {
            return Err(SessionBusy {
                active_tool_id: inner.active_tool_id.clone(),
            });
        }
        inner.dispatch_seq += 1;
        inner.active_tool_id = tool_id.to_string();
        inner.loading = true;
        inner.result = None;
        inner.error = None;
        Ok(inner.dispatch_seq)
    }

    /// Record the outcome of dispatch `seq`, if it is still current.
    ///
    /// The write is accepted only when `seq` matches the latest dispatch
    /// and `tool_id` matches the active tool; otherwise the outcome is a
    /// leftover from a superseded invocation and is dropped. Returns
    /// whether the write happened.
    pub(crate) fn settle(
        &self,
        seq: u64,
        tool_id: &str,
        outcome: &Result<InvocationResult, InvocationError>,
    ) -> bool {
        let mut inner = self.inner.lock();
        if inner.dispatch_seq != seq || inner.active_tool_id != tool_id {
            debug!(seq, tool_id, "discarding stale settlement");
            return false;
        }
        inner.loading = false;
        match outcome {
            Ok(result) => {
                inner.result = Some(result.clone());
                inner.error = None;
            }
            Err(error) => {
                inner.error = Some(error.clone());
                inner.result = None;
            }
        }
        true
    }

    /// Clear the loading flag for an abandoned dispatch.
    ///
    /// Used when an in-flight invocation is dropped before settling; a
    /// stale `seq` means the session has already moved on.
    pub(crate) fn abandon(&self, seq: u64) {
        let mut inner = self.inner.lock();
        if inner.dispatch_seq == seq && inner.loading {
            debug!(seq, "abandoning in-flight dispatch");
            inner.loading = false;
        }
    }

    /// Make `tool_id` the active tool and reset transient state.
    ///
    /// Advancing the dispatch counter logically cancels any in-flight
    /// invocation: its settle will arrive with a stale `seq` and be
    /// dropped, even if the user switches back to the same tool first.
    pub(crate) fn switch_tool(&self, tool_id: &str) {
        let mut inner = self.inner.lock();
        inner.dispatch_seq += 1;
        inner.active_tool_id = tool_id.to_string();
        inner.loading = false;
        inner.result = None;
        inner.error = None;
    }

    #[cfg(test)]
    pub(crate) fn current_seq(&self) -> u64 {
        self.inner.lock().dispatch_seq
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
