//! Key equality strategies.

use std::fmt;

use scrdict_value::Value;

/// Decides whether two keys name the same entry.
///
/// Implementations must be reflexive and symmetric for key-eligible values.
/// Hosts install their own implementation for [`CompareMode::DATABASE`].
///
/// [`CompareMode::DATABASE`]: crate::CompareMode::DATABASE
pub trait KeyComparer: fmt::Debug {
	fn keys_equal(&self, a: &Value, b: &Value) -> bool;
}

/// Same kind and same raw value. Floats compare by bit pattern and objects
/// by identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryComparer;

impl KeyComparer for BinaryComparer {
	fn keys_equal(&self, a: &Value, b: &Value) -> bool {
		match (a, b) {
			(Value::Null, Value::Null) => true,
			(Value::Bool(x), Value::Bool(y)) => x == y,
			(Value::Int(x), Value::Int(y)) => x == y,
			(Value::Float(x), Value::Float(y)) => x.to_bits() == y.to_bits(),
			(Value::String(x), Value::String(y)) => x == y,
			(Value::Object(x), Value::Object(y)) => x.ptr_eq(y),
			_ => false,
		}
	}
}

/// Case-insensitive for strings, [`BinaryComparer`] for every other kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextComparer;

impl KeyComparer for TextComparer {
	fn keys_equal(&self, a: &Value, b: &Value) -> bool {
		match (a, b) {
			(Value::String(x), Value::String(y)) => fold_eq(x, y),
			_ => BinaryComparer.keys_equal(a, b),
		}
	}
}

fn fold_eq(a: &str, b: &str) -> bool {
	a.chars().flat_map(char::to_lowercase).eq(b.chars().flat_map(char::to_lowercase))
}
