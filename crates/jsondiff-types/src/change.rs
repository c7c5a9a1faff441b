use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Classification of a single key comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeKind {
    /// The key exists only on the right.
    Added,
    /// The key exists only on the left.
    Removed,
    /// The key exists on both sides with different values or categories.
    Updated,
    /// The key exists on both sides with equal values.
    Unchanged,
}

impl ChangeKind {
    /// One-character marker used when rendering a diff.
    pub fn symbol(&self) -> char {
        match self {
            Self::Added => '+',
            Self::Removed => '-',
            Self::Updated => '~',
            Self::Unchanged => ' ',
        }
    }

    /// Returns `true` for everything except `Unchanged`.
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }

    /// The classification seen from the opposite direction.
    pub fn inverse(&self) -> Self {
        match self {
            Self::Added => Self::Removed,
            Self::Removed => Self::Added,
            other => *other,
        }
    }
}

/// Flat per-key comparison record, as exchanged with consumers.
///
/// `left` and `right` are `None` when the key is missing on that side and
/// `Some(Value::Null)` when it is present with a `null` value. `change` is
/// unset for a node standing for a whole sub-document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pair {
    pub key: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub left: Option<Value>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub right: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<ChangeKind>,
}

/// A field that is present deserializes to `Some`, even when it is `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn change_kind_serializes_as_name() {
        assert_eq!(serde_json::to_value(ChangeKind::Updated).unwrap(), json!("Updated"));
        let parsed: ChangeKind = serde_json::from_value(json!("Removed")).unwrap();
        assert_eq!(parsed, ChangeKind::Removed);
    }

    #[test]
    fn inverse_swaps_added_and_removed() {
        assert_eq!(ChangeKind::Added.inverse(), ChangeKind::Removed);
        assert_eq!(ChangeKind::Removed.inverse(), ChangeKind::Added);
        assert_eq!(ChangeKind::Updated.inverse(), ChangeKind::Updated);
        assert_eq!(ChangeKind::Unchanged.inverse(), ChangeKind::Unchanged);
    }

    #[test]
    fn pair_omits_absent_sides_and_change() {
        let pair = Pair {
            key: "x".into(),
            left: None,
            right: Some(json!(1)),
            change: Some(ChangeKind::Added),
        };
        assert_eq!(
            serde_json::to_value(&pair).unwrap(),
            json!({"key": "x", "right": 1, "change": "Added"})
        );

        let root = Pair {
            key: String::new(),
            left: Some(json!({})),
            right: Some(json!({})),
            change: None,
        };
        assert_eq!(
            serde_json::to_value(&root).unwrap(),
            json!({"key": "", "left": {}, "right": {}})
        );
    }

    #[test]
    fn explicit_null_survives_roundtrip() {
        let pair = Pair {
            key: "n".into(),
            left: Some(Value::Null),
            right: Some(Value::Null),
            change: Some(ChangeKind::Unchanged),
        };
        let json = serde_json::to_string(&pair).unwrap();
        let parsed: Pair = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, pair);
    }

    #[test]
    fn missing_side_parses_as_absent() {
        let parsed: Pair =
            serde_json::from_value(json!({"key": "x", "left": 1, "change": "Removed"})).unwrap();
        assert_eq!(parsed.left, Some(json!(1)));
        assert_eq!(parsed.right, None);
        assert_eq!(parsed.change, Some(ChangeKind::Removed));
    }
}
