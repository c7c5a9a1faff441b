use std::io::Read;

use serde_json::{Deserializer, Value};
use tracing::debug;

use jsondiff_types::{Document, ValueKind};

use crate::error::{DecodeError, DecodeResult};

/// Deepest array/object nesting accepted by [`decode`].
///
/// Decoding and diffing both recurse once per level, so the input is checked
/// against this bound before any value is built.
pub const MAX_DEPTH: usize = 512;

/// Decode the first JSON value of a stream into a document.
///
/// Only one value is parsed; whatever follows it in the stream is ignored.
/// Input nested deeper than [`MAX_DEPTH`] fails with [`DecodeError::TooDeep`].
pub fn decode<R: Read>(mut reader: R) -> DecodeResult<Document> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    check_depth(&buf)?;

    let mut de = Deserializer::from_slice(&buf);
    de.disable_recursion_limit();
    let value = de
        .into_iter::<Value>()
        .next()
        .ok_or(DecodeError::Empty)??;
    into_document(value)
}

/// Decode a document from a string.
pub fn decode_str(input: &str) -> DecodeResult<Document> {
    decode(input.as_bytes())
}

/// Decode a document from a byte slice.
pub fn decode_slice(input: &[u8]) -> DecodeResult<Document> {
    decode(input)
}

/// Scan the first value of `input` and fail once its nesting exceeds [`MAX_DEPTH`].
///
/// Brackets inside strings are skipped. Malformed input is left for the parser
/// to report.
fn check_depth(input: &[u8]) -> DecodeResult<()> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for &byte in input {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                if depth > MAX_DEPTH {
                    return Err(DecodeError::TooDeep { limit: MAX_DEPTH });
                }
            }
            b'}' | b']' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    break;
                }
            }
            _ => {}
        }
    }
    Ok(())
}

fn into_document(value: Value) -> DecodeResult<Document> {
    match value {
        Value::Object(doc) => {
            debug!(keys = doc.len(), "decoded document");
            Ok(doc)
        }
        other => Err(DecodeError::NotAnObject(ValueKind::of(&other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_flat_object() {
        let doc = decode_str(r#"{ "foo": "bar" }"#).unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.get("foo"), Some(&json!("bar")));
    }

    #[test]
    fn keeps_source_key_order() {
        let doc = decode_str(r#"{"b": 1, "c": {"z": 0, "y": 0}, "a": 2}"#).unwrap();
        let keys: Vec<&str> = doc.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "c", "a"]);

        let nested = doc["c"].as_object().unwrap();
        let nested_keys: Vec<&str> = nested.keys().map(String::as_str).collect();
        assert_eq!(nested_keys, vec!["z", "y"]);
    }

    #[test]
    fn reads_from_any_reader() {
        let cursor = std::io::Cursor::new(br#"{"n": [1, 2, 3]}"#.to_vec());
        let doc = decode(cursor).unwrap();
        assert_eq!(doc["n"], json!([1, 2, 3]));
    }

    #[test]
    fn empty_object_is_valid() {
        assert!(decode_slice(b"{}").unwrap().is_empty());
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(decode_str(""), Err(DecodeError::Empty)));
        assert!(matches!(decode_str("   \n"), Err(DecodeError::Empty)));
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert!(matches!(decode_str(r#"{"a": "#), Err(DecodeError::Json(_))));
        assert!(matches!(decode_str("{a: 1}"), Err(DecodeError::Json(_))));
    }

    #[test]
    fn non_object_top_level_is_rejected() {
        match decode_str("[1, 2]") {
            Err(DecodeError::NotAnObject(kind)) => assert_eq!(kind, ValueKind::Array),
            other => panic!("expected NotAnObject, got {other:?}"),
        }
        assert!(matches!(
            decode_str("\"text\""),
            Err(DecodeError::NotAnObject(ValueKind::String))
        ));
        assert!(matches!(
            decode_str("null"),
            Err(DecodeError::NotAnObject(ValueKind::Null))
        ));
    }

    #[test]
    fn only_the_first_value_is_read() {
        let doc = decode_str(r#"{"a": 1} {"b": 2}"#).unwrap();
        assert_eq!(doc.len(), 1);
        assert!(doc.contains_key("a"));
    }

    fn nested(depth: usize) -> String {
        format!("{}1{}", r#"{"a":"#.repeat(depth), "}".repeat(depth))
    }

    #[test]
    fn deep_nesting_beyond_serde_default_is_accepted() {
        let mut doc = decode_str(&nested(200)).unwrap();
        let mut levels = 1;
        while let Some(Value::Object(inner)) = doc.remove("a") {
            doc = inner;
            levels += 1;
        }
        assert_eq!(levels, 200);
    }

    #[test]
    fn nesting_past_the_limit_is_too_deep() {
        match decode_str(&nested(MAX_DEPTH + 1)) {
            Err(DecodeError::TooDeep { limit }) => assert_eq!(limit, MAX_DEPTH),
            other => panic!("expected TooDeep, got {other:?}"),
        }
    }

    #[test]
    fn depth_check_stops_at_the_limit() {
        let at_limit = "[".repeat(MAX_DEPTH) + &"]".repeat(MAX_DEPTH);
        assert!(check_depth(at_limit.as_bytes()).is_ok());

        let over = "[".repeat(MAX_DEPTH + 1);
        assert!(matches!(
            check_depth(over.as_bytes()),
            Err(DecodeError::TooDeep { .. })
        ));
    }

    #[test]
    fn depth_check_ignores_brackets_in_strings() {
        let quoted = format!(r#"{{"k": "{}\"{}"}}"#, "{[".repeat(MAX_DEPTH), "[".repeat(4));
        assert!(check_depth(quoted.as_bytes()).is_ok());
        assert!(decode_str(&quoted).is_ok());
    }

    #[test]
    fn depth_check_only_covers_the_first_value() {
        let input = format!("{{}} {}", "[".repeat(MAX_DEPTH + 1));
        assert!(decode_str(&input).unwrap().is_empty());
    }

    #[test]
    fn error_messages() {
        let err = decode_str("42").unwrap_err();
        assert_eq!(err.to_string(), "top-level value must be an object, got number");
        assert_eq!(DecodeError::Empty.to_string(), "no JSON value in input");
    }
}
