//! # seoscope-gemini
//!
//! Gemini API access for seoscope tool invocations.
//!
//! - [`GeminiClient`] sends `generateContent` requests and classifies
//!   transport failures
//! - [`RetryExecutor`] wraps calls with exponential backoff and jitter
//! - [`report_schema`] and [`parse_report`] implement the structured
//!   report contract for the flagship keyword tool

#![deny(unsafe_code)]

pub mod client;
pub mod errors;
pub mod retry;
pub mod schema;
pub mod types;

pub use client::GeminiClient;
pub use errors::{ClientError, RetryError, SchemaError};
pub use retry::{Clock, RetryExecutor, TokioClock};
pub use schema::{parse_report, report_schema};
pub use types::{
    GenerateRequest, GenerateResponse, GenerationConfig, RequestContent, RequestTool,
    SystemInstruction, TextPart,
};
