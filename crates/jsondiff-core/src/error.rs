//! Error types for the diff crate.

use jsondiff_types::ChangeKind;

/// Errors raised when a serialized diff tree does not describe a valid tree.
///
/// Computing a diff never fails; these only surface when reading a tree back.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TreeError {
    /// A node carrying a change kind also had children.
    #[error("leaf {key:?} has a change kind but also {count} children")]
    LeafWithChildren { key: String, count: usize },

    /// A node without a change kind did not hold documents on both sides.
    #[error("node {key:?} has no change kind but its sides are not both documents")]
    NodeNotDocument { key: String },

    /// A leaf's present sides disagree with its change kind.
    #[error("leaf {key:?} marked {change:?} has sides left={left}, right={right}")]
    SidesMismatch {
        key: String,
        change: ChangeKind,
        left: &'static str,
        right: &'static str,
    },
}

/// Convenience alias for tree results.
pub type TreeResult<T> = Result<T, TreeError>;
