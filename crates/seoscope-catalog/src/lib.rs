//! # seoscope-catalog
//!
//! Static catalog of SEO tool descriptors.
//!
//! Each tool is an immutable [`ToolDescriptor`] carrying its identity, a
//! presentation category, a [`ToolKind`] tag, and a prompt-building function.
//! Exactly one descriptor is [`ToolKind::SchemaDriven`] — the flagship
//! keyword insight report — and it alone triggers structured-output handling
//! downstream. Lookup is O(1) by id; enumeration preserves a fixed category
//! order used only for presentation.
//!
//! The catalog is pure data: no I/O, no runtime mutation.

#![deny(unsafe_code)]

pub mod catalog;
pub mod descriptor;
mod prompts;

pub use catalog::{CATEGORY_ORDER, all, core_tool, list_by_category, resolve};
pub use descriptor::{PromptParts, ToolCategory, ToolDescriptor, ToolKind};
