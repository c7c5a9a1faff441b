//! Diff engine for jsondiff.
//!
//! Compares two decoded documents key by key and produces a [`DiffTree`]
//! mirroring their nested structure.
//!
//! # Key Types
//!
//! - [`align_keys`] -- Ordered union of two key sequences
//! - [`diff`] -- Structural comparison of two documents
//! - [`DiffTree`] / [`Node`] / [`Leaf`] -- The diff result
//! - [`RenderConfig`] / [`render`] -- Text rendering of a diff tree

pub mod align;
pub mod differ;
pub mod error;
pub mod render;
pub mod tree;

pub use align::align_keys;
pub use differ::diff;
pub use error::{TreeError, TreeResult};
pub use render::{render, RenderConfig};
pub use tree::{DiffSummary, DiffTree, Leaf, Leaves, Node};
