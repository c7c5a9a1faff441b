//! Structural diff of two documents.
//!
//! Keys of each frame are aligned with [`align_keys`], then every aligned key
//! is classified. Nested documents present on both sides are compared
//! recursively; everything else becomes a leaf.

use serde_json::Value;
use tracing::{debug, enabled, trace, Level};

use jsondiff_types::{document_keys, values_equal, ChangeKind, Document, ValueKind};

use crate::align::align_keys;
use crate::tree::{DiffTree, Leaf, Node};

/// Compute the diff tree of two documents.
///
/// The returned root is a [`Node`] with an empty key holding both inputs.
/// Never fails: empty documents simply produce no children.
pub fn diff(left: &Document, right: &Document) -> DiffTree {
    let tree = diff_documents("", left, right, 0);
    if enabled!(Level::DEBUG) {
        let summary = tree.summary();
        debug!(
            added = summary.added,
            removed = summary.removed,
            updated = summary.updated,
            unchanged = summary.unchanged,
            "documents compared"
        );
    }
    tree
}

fn diff_documents(key: &str, left: &Document, right: &Document, depth: usize) -> DiffTree {
    let keys = align_keys(document_keys(left), document_keys(right));
    trace!(key, depth, keys = keys.len(), "comparing documents");

    // Aligned keys come from one of the two sides, so (None, None) never occurs.
    let children = keys
        .into_iter()
        .filter_map(|k| classify(k, left.get(k), right.get(k), depth))
        .collect();

    DiffTree::Node(Node {
        key: key.to_owned(),
        left: left.clone(),
        right: right.clone(),
        children,
    })
}

fn classify(key: &str, left: Option<&Value>, right: Option<&Value>, depth: usize) -> Option<DiffTree> {
    let (change, left, right) = match (left, right) {
        (None, None) => return None,
        (Some(l), None) => (ChangeKind::Removed, Some(l), None),
        (None, Some(r)) => (ChangeKind::Added, None, Some(r)),
        (Some(Value::Object(l)), Some(Value::Object(r))) => {
            return Some(diff_documents(key, l, r, depth + 1));
        }
        (Some(l), Some(r)) if ValueKind::of(l) != ValueKind::of(r) => {
            (ChangeKind::Updated, Some(l), Some(r))
        }
        (Some(l), Some(r)) if values_equal(l, r) => (ChangeKind::Unchanged, Some(l), Some(r)),
        (Some(l), Some(r)) => (ChangeKind::Updated, Some(l), Some(r)),
    };

    Some(DiffTree::Leaf(Leaf {
        key: key.to_owned(),
        change,
        left: left.cloned(),
        right: right.cloned(),
    }))
}
