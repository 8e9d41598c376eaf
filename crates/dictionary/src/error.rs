//! Errors raised by dictionary operations.

use scrdict_value::ValueType;

/// Recoverable failures of a single dictionary operation.
///
/// None of these leave the store modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DictionaryError {
	/// An equal key is already stored under the active comparison mode.
	#[error("key already exists: {key}")]
	KeyAlreadyExists { key: String },

	/// No stored key matches.
	#[error("key not found: {key}")]
	KeyNotFound { key: String },

	/// The key's kind cannot be used as a dictionary key.
	#[error("invalid key type: {kind}")]
	InvalidKeyType { kind: ValueType },
}

/// Result type for dictionary operations.
pub type Result<T> = std::result::Result<T, DictionaryError>;
