use thiserror::Error;

use jsondiff_types::ValueKind;

/// Errors produced while decoding a document.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("no JSON value in input")]
    Empty,

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("top-level value must be an object, got {0}")]
    NotAnObject(ValueKind),

    /// Nesting exceeded [`MAX_DEPTH`](crate::decode::MAX_DEPTH).
    #[error("document nested deeper than {limit} levels")]
    TooDeep { limit: usize },

    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DecodeResult<T> = Result<T, DecodeError>;
