//! # seoscope-session
//!
//! Invocation orchestration for SEOScope tool sessions.
//!
//! The [`Coordinator`] ties the other crates together: it looks tools up in
//! the catalog, validates requests against the credential store, dispatches
//! prompts through the Gemini client with retries, and settles each outcome
//! into an observable [`SessionState`]. One invocation runs at a time;
//! concurrent submissions are refused with [`SessionBusy`], and a tool
//! switch supersedes whatever is in flight.

#![deny(unsafe_code)]

pub mod coordinator;
pub mod state;

pub use coordinator::{Coordinator, Settlement};
pub use state::{SessionBusy, SessionSnapshot, SessionState};
