//! The diff tree: one node per compared document, one leaf per compared value.
//!
//! On the wire a tree is `{"root": Pair, "children": [...]}`, where `children`
//! is omitted when empty and the root pair omits `change` for nodes.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use jsondiff_types::{ChangeKind, Document, Pair};

use crate::error::TreeError;

/// The result of comparing two documents.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "TreeRecord")]
pub enum DiffTree {
    /// Two documents compared key by key.
    Node(Node),
    /// A single value comparison.
    Leaf(Leaf),
}

/// Two documents reached under the same key, with one child per aligned key.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// The key this node was reached under; empty at the root.
    pub key: String,
    pub left: Document,
    pub right: Document,
    /// Children in aligned key order.
    pub children: Vec<DiffTree>,
}

/// The classified comparison of a single key.
#[derive(Clone, Debug, PartialEq)]
pub struct Leaf {
    pub key: String,
    pub change: ChangeKind,
    /// `None` when the key is missing on the left.
    pub left: Option<Value>,
    /// `None` when the key is missing on the right.
    pub right: Option<Value>,
}

impl DiffTree {
    /// The key this tree was reached under.
    pub fn key(&self) -> &str {
        match self {
            Self::Node(node) => &node.key,
            Self::Leaf(leaf) => &leaf.key,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Child trees; always empty for a leaf.
    pub fn children(&self) -> &[DiffTree] {
        match self {
            Self::Node(node) => &node.children,
            Self::Leaf(_) => &[],
        }
    }

    /// The change kind of a leaf; `None` for a node.
    pub fn change(&self) -> Option<ChangeKind> {
        match self {
            Self::Node(_) => None,
            Self::Leaf(leaf) => Some(leaf.change),
        }
    }

    /// Find a direct child by key.
    pub fn child(&self, key: &str) -> Option<&DiffTree> {
        self.children().iter().find(|c| c.key() == key)
    }

    /// The flat pair describing this tree's root.
    pub fn pair(&self) -> Pair {
        match self {
            Self::Node(node) => Pair {
                key: node.key.clone(),
                left: Some(Value::Object(node.left.clone())),
                right: Some(Value::Object(node.right.clone())),
                change: None,
            },
            Self::Leaf(leaf) => Pair {
                key: leaf.key.clone(),
                left: leaf.left.clone(),
                right: leaf.right.clone(),
                change: Some(leaf.change),
            },
        }
    }

    /// Depth-first iterator over every leaf, in child order.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves {
            stack: vec![(Vec::new(), self)],
        }
    }

    /// Count leaves per change kind.
    pub fn summary(&self) -> DiffSummary {
        let mut summary = DiffSummary::default();
        for (_, leaf) in self.leaves() {
            summary.record(leaf.change);
        }
        summary
    }

    /// Returns `true` if any leaf is not `Unchanged`.
    pub fn has_changes(&self) -> bool {
        self.leaves().any(|(_, leaf)| leaf.change.is_change())
    }
}

/// Iterator over the leaves of a [`DiffTree`].
///
/// Yields each leaf with its key path from the root (the root key excluded,
/// the leaf key included).
pub struct Leaves<'a> {
    stack: Vec<(Vec<&'a str>, &'a DiffTree)>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = (Vec<&'a str>, &'a Leaf);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((path, tree)) = self.stack.pop() {
            match tree {
                DiffTree::Leaf(leaf) => {
                    let mut path = path;
                    path.push(&leaf.key);
                    return Some((path, leaf));
                }
                DiffTree::Node(node) => {
                    for child in node.children.iter().rev() {
                        let mut child_path = path.clone();
                        if let DiffTree::Node(inner) = child {
                            child_path.push(&inner.key);
                        }
                        self.stack.push((child_path, child));
                    }
                }
            }
        }
        None
    }
}

/// Leaf counts per change kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub updated: usize,
    pub unchanged: usize,
}

impl DiffSummary {
    fn record(&mut self, change: ChangeKind) {
        match change {
            ChangeKind::Added => self.added += 1,
            ChangeKind::Removed => self.removed += 1,
            ChangeKind::Updated => self.updated += 1,
            ChangeKind::Unchanged => self.unchanged += 1,
        }
    }

    /// Total number of leaves.
    pub fn total(&self) -> usize {
        self.added + self.removed + self.updated + self.unchanged
    }

    /// Number of leaves that are not `Unchanged`.
    pub fn changes(&self) -> usize {
        self.added + self.removed + self.updated
    }
}

// ---- Wire format ----

/// Borrowed view of one side of a pair.
#[derive(Serialize)]
#[serde(untagged)]
enum Side<'a> {
    Document(&'a Document),
    Value(&'a Value),
}

#[derive(Serialize)]
struct PairView<'a> {
    key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    left: Option<Side<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    right: Option<Side<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    change: Option<ChangeKind>,
}

#[derive(Serialize)]
struct TreeView<'a> {
    root: PairView<'a>,
    #[serde(skip_serializing_if = "no_children")]
    children: &'a [DiffTree],
}

fn no_children(children: &&[DiffTree]) -> bool {
    children.is_empty()
}

impl Serialize for DiffTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let root = match self {
            Self::Node(node) => PairView {
                key: &node.key,
                left: Some(Side::Document(&node.left)),
                right: Some(Side::Document(&node.right)),
                change: None,
            },
            Self::Leaf(leaf) => PairView {
                key: &leaf.key,
                left: leaf.left.as_ref().map(Side::Value),
                right: leaf.right.as_ref().map(Side::Value),
                change: Some(leaf.change),
            },
        };
        TreeView {
            root,
            children: self.children(),
        }
        .serialize(serializer)
    }
}

#[derive(Deserialize)]
struct TreeRecord {
    root: Pair,
    #[serde(default)]
    children: Vec<DiffTree>,
}

impl TryFrom<TreeRecord> for DiffTree {
    type Error = TreeError;

    fn try_from(record: TreeRecord) -> Result<Self, Self::Error> {
        let Pair {
            key,
            left,
            right,
            change,
        } = record.root;

        match change {
            Some(change) => {
                if !record.children.is_empty() {
                    return Err(TreeError::LeafWithChildren {
                        key,
                        count: record.children.len(),
                    });
                }
                let expected = match change {
                    ChangeKind::Added => (false, true),
                    ChangeKind::Removed => (true, false),
                    ChangeKind::Updated | ChangeKind::Unchanged => (true, true),
                };
                if (left.is_some(), right.is_some()) != expected {
                    return Err(TreeError::SidesMismatch {
                        key,
                        change,
                        left: presence(&left),
                        right: presence(&right),
                    });
                }
                Ok(Self::Leaf(Leaf {
                    key,
                    change,
                    left,
                    right,
                }))
            }
            None => match (left, right) {
                (Some(Value::Object(left)), Some(Value::Object(right))) => Ok(Self::Node(Node {
                    key,
                    left,
                    right,
                    children: record.children,
                })),
                _ => Err(TreeError::NodeNotDocument { key }),
            },
        }
    }
}

fn presence(side: &Option<Value>) -> &'static str {
    if side.is_some() {
        "present"
    } else {
        "absent"
    }
}
