//! Text rendering of a diff tree.
//!
//! ```text
//! {
//!   - "a": 1
//!     "n": {
//!       ~ "b": true -> false
//!     }
//!   + "c": null
//! }
//! ```

use std::fmt;

use colored::{Color, Colorize};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use jsondiff_types::ChangeKind;

use crate::tree::{DiffTree, Leaf};

/// Options controlling how a [`DiffTree`] is rendered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Spaces per nesting level.
    pub indent: usize,
    /// Whether `Unchanged` leaves are printed.
    pub show_unchanged: bool,
    /// Whether lines are colored with ANSI escapes.
    pub color: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            show_unchanged: true,
            color: false,
        }
    }
}

impl RenderConfig {
    /// Only changed leaves, colored. Suited to terminal output.
    pub fn changes_only() -> Self {
        Self {
            show_unchanged: false,
            color: true,
            ..Default::default()
        }
    }
}

/// Render a diff tree to a string.
pub fn render(tree: &DiffTree, config: &RenderConfig) -> String {
    Rendered { tree, config }.to_string()
}

struct Rendered<'a> {
    tree: &'a DiffTree,
    config: &'a RenderConfig,
}

impl Rendered<'_> {
    fn write_tree(&self, f: &mut fmt::Formatter<'_>, tree: &DiffTree, depth: usize) -> fmt::Result {
        match tree {
            DiffTree::Leaf(leaf) => self.write_leaf(f, leaf, depth),
            DiffTree::Node(node) => {
                let pad = self.pad(depth);
                if depth == 0 {
                    writeln!(f, "{{")?;
                } else {
                    writeln!(f, "{pad}  {}: {{", quoted(&node.key))?;
                }
                for child in &node.children {
                    self.write_tree(f, child, depth + 1)?;
                }
                if depth == 0 {
                    writeln!(f, "}}")
                } else {
                    writeln!(f, "{pad}  }}")
                }
            }
        }
    }

    fn write_leaf(&self, f: &mut fmt::Formatter<'_>, leaf: &Leaf, depth: usize) -> fmt::Result {
        if leaf.change == ChangeKind::Unchanged && !self.config.show_unchanged {
            return Ok(());
        }

        let body = match leaf.change {
            ChangeKind::Added => show(leaf.right.as_ref()),
            ChangeKind::Removed | ChangeKind::Unchanged => show(leaf.left.as_ref()),
            ChangeKind::Updated => {
                format!("{} -> {}", show(leaf.left.as_ref()), show(leaf.right.as_ref()))
            }
        };
        let line = format!("{} {}: {}", leaf.change.symbol(), quoted(&leaf.key), body);

        let pad = self.pad(depth);
        match color_of(leaf.change).filter(|_| self.config.color) {
            Some(color) => writeln!(f, "{pad}{}", line.as_str().color(color)),
            None => writeln!(f, "{pad}{line}"),
        }
    }

    fn pad(&self, depth: usize) -> String {
        // Below the first level, children also clear the parent's marker column.
        let width = match depth {
            0 => 0,
            d => self.config.indent + (d - 1) * (self.config.indent + 2),
        };
        " ".repeat(width)
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, self.tree, 0)
    }
}

impl fmt::Display for DiffTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = RenderConfig::default();
        fmt::Display::fmt(&Rendered { tree: self, config: &config }, f)
    }
}

/// Keys are printed as JSON strings so separators and newlines stay unambiguous.
fn quoted(key: &str) -> String {
    Value::from(key).to_string()
}

fn show(value: Option<&Value>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "(absent)".into(),
    }
}

fn color_of(change: ChangeKind) -> Option<Color> {
    match change {
        ChangeKind::Added => Some(Color::Green),
        ChangeKind::Removed => Some(Color::Red),
        ChangeKind::Updated => Some(Color::Yellow),
        ChangeKind::Unchanged => None,
    }
}
