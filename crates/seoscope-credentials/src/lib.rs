//! # seoscope-credentials
//!
//! Key-value credential storage consumed by the invocation coordinator.
//!
//! The coordinator reads the service credential exactly once per invocation
//! through the [`CredentialStore`] trait under [`CREDENTIAL_KEY`]; it never
//! owns the store's lifecycle. Two reference implementations ship here:
//!
//! - [`MemoryCredentialStore`] — in-process map, used by tests and embedders
//! - [`FileCredentialStore`] — versioned JSON at `~/.seoscope/credentials.json`
//!   written with `0o600` permissions

#![deny(unsafe_code)]

pub mod errors;
pub mod file;
pub mod store;

pub use errors::CredentialError;
pub use file::FileCredentialStore;
pub use store::{CREDENTIAL_KEY, CredentialStore, MemoryCredentialStore, meets_minimum_length};
