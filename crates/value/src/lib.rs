//! Tagged dynamic values passed across late-bound interfaces.
//!
//! Every argument and result that crosses a dispatch boundary is a [`Value`].
//! The set of kinds is closed; conversions between kinds are never implicit.

use std::fmt;

mod object;

pub use object::ObjectRef;

/// Runtime value carried by keys, items, and dispatch arguments.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
	/// Unset value. Not eligible as a dictionary key.
	#[default]
	Empty,
	/// Explicit null.
	Null,
	Bool(bool),
	Int(i64),
	Float(f64),
	String(String),
	/// Reference to a host object, compared by identity.
	Object(ObjectRef),
	/// Ordered list of values, as returned by snapshot accessors.
	Array(Vec<Value>),
}

impl Value {
	pub fn bool(val: bool) -> Self {
		Self::Bool(val)
	}

	pub fn int(val: i64) -> Self {
		Self::Int(val)
	}

	pub fn float(val: f64) -> Self {
		Self::Float(val)
	}

	pub fn string(val: impl Into<String>) -> Self {
		Self::String(val.into())
	}

	pub fn object(val: ObjectRef) -> Self {
		Self::Object(val)
	}

	pub fn array(vals: Vec<Value>) -> Self {
		Self::Array(vals)
	}

	pub fn get_type(&self) -> ValueType {
		match self {
			Self::Empty => ValueType::Empty,
			Self::Null => ValueType::Null,
			Self::Bool(_) => ValueType::Bool,
			Self::Int(_) => ValueType::Int,
			Self::Float(_) => ValueType::Float,
			Self::String(_) => ValueType::String,
			Self::Object(_) => ValueType::Object,
			Self::Array(_) => ValueType::Array,
		}
	}

	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}

	pub fn as_bool(&self) -> Result<bool, ValueTypeError> {
		match self {
			Self::Bool(val) => Ok(*val),
			other => Err(ValueTypeError::new("bool", other.get_type())),
		}
	}

	pub fn as_int(&self) -> Result<i64, ValueTypeError> {
		match self {
			Self::Int(val) => Ok(*val),
			other => Err(ValueTypeError::new("int", other.get_type())),
		}
	}

	pub fn as_float(&self) -> Result<f64, ValueTypeError> {
		match self {
			Self::Float(val) => Ok(*val),
			other => Err(ValueTypeError::new("float", other.get_type())),
		}
	}

	pub fn as_str(&self) -> Result<&str, ValueTypeError> {
		match self {
			Self::String(val) => Ok(val),
			other => Err(ValueTypeError::new("string", other.get_type())),
		}
	}

	pub fn as_object(&self) -> Result<&ObjectRef, ValueTypeError> {
		match self {
			Self::Object(val) => Ok(val),
			other => Err(ValueTypeError::new("object", other.get_type())),
		}
	}

	pub fn as_array(&self) -> Result<&[Value], ValueTypeError> {
		match self {
			Self::Array(vals) => Ok(vals),
			other => Err(ValueTypeError::new("array", other.get_type())),
		}
	}

	pub fn into_array(self) -> Result<Vec<Value>, Self> {
		match self {
			Self::Array(vals) => Ok(vals),
			other => Err(other),
		}
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Empty => f.write_str("<empty>"),
			Self::Null => f.write_str("null"),
			Self::Bool(val) => write!(f, "{val}"),
			Self::Int(val) => write!(f, "{val}"),
			Self::Float(val) => write!(f, "{val}"),
			Self::String(val) => write!(f, "{val:?}"),
			Self::Object(obj) => write!(f, "<{}>", obj.type_name()),
			Self::Array(vals) => {
				f.write_str("[")?;
				for (i, val) in vals.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{val}")?;
				}
				f.write_str("]")
			}
		}
	}
}

impl From<bool> for Value {
	fn from(val: bool) -> Self {
		Self::Bool(val)
	}
}

impl From<i32> for Value {
	fn from(val: i32) -> Self {
		Self::Int(val.into())
	}
}

impl From<i64> for Value {
	fn from(val: i64) -> Self {
		Self::Int(val)
	}
}

impl From<f64> for Value {
	fn from(val: f64) -> Self {
		Self::Float(val)
	}
}

impl From<&str> for Value {
	fn from(val: &str) -> Self {
		Self::String(val.to_owned())
	}
}

impl From<String> for Value {
	fn from(val: String) -> Self {
		Self::String(val)
	}
}

impl From<ObjectRef> for Value {
	fn from(val: ObjectRef) -> Self {
		Self::Object(val)
	}
}

/// Coarse value kind used for diagnostics and key eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
	/// [`Value::Empty`], the uninitialized value.
	Empty,
	/// [`Value::Null`], an explicit absence of data.
	Null,
	/// [`Value::Bool`].
	Bool,
	/// [`Value::Int`].
	Int,
	/// [`Value::Float`].
	Float,
	/// [`Value::String`].
	String,
	/// [`Value::Object`], a shared object reference.
	Object,
	/// [`Value::Array`], never valid as a key.
	Array,
}

impl ValueType {
	/// Whether values of this kind may be stored as dictionary keys.
	pub const fn is_key_eligible(self) -> bool {
		!matches!(self, Self::Empty | Self::Array)
	}
}

impl fmt::Display for ValueType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Empty => "empty",
			Self::Null => "null",
			Self::Bool => "bool",
			Self::Int => "int",
			Self::Float => "float",
			Self::String => "string",
			Self::Object => "object",
			Self::Array => "array",
		};
		f.write_str(name)
	}
}

/// Error returned by typed accessors like [`Value::as_int`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueTypeError {
	expected: &'static str,
	got: ValueType,
}

impl ValueTypeError {
	pub fn new(expected: &'static str, got: ValueType) -> Self {
		Self { expected, got }
	}

	pub fn expected(&self) -> &'static str {
		self.expected
	}

	pub fn got(&self) -> ValueType {
		self.got
	}
}

impl fmt::Display for ValueTypeError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "expected {}, got {}", self.expected, self.got)
	}
}

impl std::error::Error for ValueTypeError {}

#[cfg(test)]
mod tests;
