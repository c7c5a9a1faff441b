use thiserror::Error;

use jsondiff_decode::DecodeError;

/// Errors from decoding the inputs of a diff, tagged with the failing side.
#[derive(Debug, Error)]
pub enum JsonDiffError {
    #[error("left document: {0}")]
    Left(#[source] DecodeError),

    #[error("right document: {0}")]
    Right(#[source] DecodeError),
}

impl JsonDiffError {
    /// The underlying decode error.
    pub fn decode_error(&self) -> &DecodeError {
        match self {
            Self::Left(e) | Self::Right(e) => e,
        }
    }
}

pub type JsonDiffResult<T> = Result<T, JsonDiffError>;
