//! Structured code-emission utilities for the clientgen generator.
//!
//! This crate provides the writer primitive the language generators compose
//! against: ordered line/block/indentation emission with conditional and
//! iterating helpers, plus the casing utilities shared by type-name
//! derivation rules.

pub mod builder;
mod naming;

pub use builder::{CodeWriter, Indent};
pub use naming::to_pascal_case;
