//! Document decoding for jsondiff.
//!
//! Turns a JSON byte stream into a [`Document`](jsondiff_types::Document),
//! keeping keys in source order. Anything other than a top-level object is
//! rejected before it can reach the diff engine.

pub mod decode;
pub mod error;

pub use decode::{decode, decode_slice, decode_str, MAX_DEPTH};
pub use error::{DecodeError, DecodeResult};
