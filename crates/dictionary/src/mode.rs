//! Key comparison modes.

use std::fmt;

/// Comparison strategy selector stored by a [`Dictionary`].
///
/// The stored value is an arbitrary `i32`. Values outside the nominal set
/// are kept verbatim and compare keys the same way [`CompareMode::BINARY`]
/// does.
///
/// [`Dictionary`]: crate::Dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CompareMode(i32);

impl CompareMode {
	/// Ordinal comparison of kind and raw value.
	pub const BINARY: Self = Self(0);
	/// Case-insensitive text comparison.
	pub const TEXT: Self = Self(1);
	/// Host-defined comparison.
	pub const DATABASE: Self = Self(2);

	pub const fn from_raw(raw: i32) -> Self {
		Self(raw)
	}

	pub const fn raw(self) -> i32 {
		self.0
	}

	/// Classifies the stored value, `None` when it is outside the nominal set.
	pub const fn method(self) -> Option<CompareMethod> {
		match self.0 {
			0 => Some(CompareMethod::Binary),
			1 => Some(CompareMethod::Text),
			2 => Some(CompareMethod::Database),
			_ => None,
		}
	}

	pub const fn is_recognized(self) -> bool {
		self.method().is_some()
	}
}

impl From<i32> for CompareMode {
	fn from(raw: i32) -> Self {
		Self(raw)
	}
}

impl From<CompareMode> for i32 {
	fn from(mode: CompareMode) -> Self {
		mode.0
	}
}

impl From<CompareMethod> for CompareMode {
	fn from(method: CompareMethod) -> Self {
		match method {
			CompareMethod::Binary => Self::BINARY,
			CompareMethod::Text => Self::TEXT,
			CompareMethod::Database => Self::DATABASE,
		}
	}
}

impl fmt::Display for CompareMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.method() {
			Some(method) => write!(f, "{method}"),
			None => write!(f, "unrecognized({})", self.0),
		}
	}
}

/// The recognized comparison strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareMethod {
	/// Exact comparison. Strings must match code point for code point.
	Binary,
	/// Case-insensitive string comparison. Other kinds compare as binary.
	Text,
	/// Host-supplied comparison, text by default.
	Database,
}

impl fmt::Display for CompareMethod {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Binary => "binary",
			Self::Text => "text",
			Self::Database => "database",
		};
		f.write_str(name)
	}
}
