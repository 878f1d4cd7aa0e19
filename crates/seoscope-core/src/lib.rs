//! # seoscope-core
//!
//! Foundation types shared by the SEOScope orchestration crates.
//!
//! This crate provides the vocabulary the other crates compose:
//!
//! - **Errors**: [`ErrorKind`] taxonomy and the [`InvocationError`] value
//!   written into session state
//! - **Reports**: [`StructuredReport`] and [`OutlineSection`], the
//!   machine-checkable output of the flagship tool
//! - **Invocations**: [`InvocationRequest`] and the [`InvocationResult`] enum
//! - **Retry math**: [`RetryPolicy`] and the pure backoff delay calculation
//!   (the async executor that drives attempts lives in `seoscope-gemini`)

#![deny(unsafe_code)]

pub mod errors;
pub mod invocation;
pub mod report;
pub mod retry;

pub use errors::{ErrorKind, InvocationError};
pub use invocation::{InvocationRequest, InvocationResult};
pub use report::{OutlineSection, StructuredReport};
pub use retry::{RetryPolicy, backoff_delay_with_random};
