//! Foundation types for jsondiff.
//!
//! This crate provides the value model and per-key result types shared by
//! every other jsondiff crate.
//!
//! # Key Types
//!
//! - [`Document`] — Decoded JSON object, iterated in source key order
//! - [`ValueKind`] — Dynamic category of a value (null, bool, number, ...)
//! - [`ChangeKind`] — Classification of a single key comparison
//! - [`Pair`] — Flat per-key comparison record

pub mod change;
pub mod value;

pub use change::{ChangeKind, Pair};
pub use value::{document_keys, values_equal, Document, ValueKind};

pub use serde_json::Value;
