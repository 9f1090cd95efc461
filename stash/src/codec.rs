//! Collection payload codec — JSON arrays with a tagged decode error.
//!
//! ERROR HANDLING
//! ==============
//! Decode is the only operation in this crate that can fail, and the failure
//! is always absorbed by the caller: a slot that does not hold a valid
//! collection payload loads as an empty collection. Encode degrades to the
//! empty-array payload rather than erroring so a persist step never throws.

#[cfg(test)]
#[path = "codec_test.rs"]
mod codec_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Error returned by [`decode_entries`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeFailure {
    /// The slot content is not a valid serialized collection.
    #[error("slot does not hold a valid collection payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Decode a slot payload into a collection of entries.
///
/// # Errors
///
/// Returns [`DecodeFailure::Malformed`] when the payload is not valid JSON or
/// does not match the entry schema.
pub fn decode_entries<T: DeserializeOwned>(raw: &str) -> Result<Vec<T>, DecodeFailure> {
    Ok(serde_json::from_str(raw)?)
}

/// Encode a collection of entries into its slot payload.
///
/// Serialization of plain data entries cannot fail in practice; if it ever
/// does, the payload degrades to the empty collection so the slot stays a
/// valid serialization.
pub fn encode_entries<T: Serialize>(entries: &[T]) -> String {
    serde_json::to_string(entries).unwrap_or_else(|_| "[]".to_owned())
}
