//! Structural diff of JSON documents.
//!
//! This is the main entry point for applications embedding jsondiff. It
//! decodes both inputs and hands them to the diff engine.
//!
//! ```
//! use jsondiff::{diff_str, ChangeKind};
//!
//! let tree = diff_str(r#"{"foo": "bar"}"#, r#"{"foo": "baz"}"#).unwrap();
//! let foo = tree.child("foo").unwrap();
//! assert_eq!(foo.change(), Some(ChangeKind::Updated));
//! ```

pub mod error;

use std::io::Read;

use tracing::debug;

pub use error::{JsonDiffError, JsonDiffResult};

// Re-export key types
pub use jsondiff_core::{
    align_keys, diff, render, DiffSummary, DiffTree, Leaf, Leaves, Node, RenderConfig, TreeError,
};
pub use jsondiff_decode::{decode, decode_slice, decode_str, DecodeError, MAX_DEPTH};
pub use jsondiff_types::{document_keys, values_equal, ChangeKind, Document, Pair, Value, ValueKind};

/// Decode one document from each reader and diff them.
pub fn diff_readers<L: Read, R: Read>(left: L, right: R) -> JsonDiffResult<DiffTree> {
    let left = decode(left).map_err(JsonDiffError::Left)?;
    let right = decode(right).map_err(JsonDiffError::Right)?;
    debug!(left_keys = left.len(), right_keys = right.len(), "diffing decoded documents");
    Ok(diff(&left, &right))
}

/// Decode two JSON strings and diff them.
pub fn diff_str(left: &str, right: &str) -> JsonDiffResult<DiffTree> {
    diff_readers(left.as_bytes(), right.as_bytes())
}
