//! Late-bound invocation.
//!
//! Callers resolve a member name to a [`MemberId`] once, then invoke it with
//! an [`InvokeKind`] and positional [`Value`] arguments. Name resolution is
//! ASCII case-insensitive.

use std::fmt;

use scrdict_dictionary::DictionaryError;
use scrdict_value::{Value, ValueTypeError};

/// Resolved member identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemberId(pub i32);

/// How a member is being invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvokeKind {
	/// Plain call with positional arguments.
	Method,
	/// Property read. Indexed properties take the index as the argument.
	PropertyGet,
	/// Property write. The assigned value is the last argument.
	PropertyPut,
}

impl fmt::Display for InvokeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Method => "method",
			Self::PropertyGet => "property-get",
			Self::PropertyPut => "property-put",
		};
		f.write_str(name)
	}
}

/// Failures of name resolution, argument marshaling, or the invoked member.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DispatchError {
	#[error("unknown member name: {0}")]
	UnknownName(String),

	/// The id is unknown, or the member does not support this invoke kind.
	#[error("member {id:?} does not support {kind}")]
	MemberNotFound { id: MemberId, kind: InvokeKind },

	#[error("{member}: expected {expected} argument(s), got {got}")]
	BadParamCount { member: &'static str, expected: usize, got: usize },

	#[error("{member}: argument {index}: {source}")]
	TypeMismatch {
		member: &'static str,
		index: usize,
		#[source]
		source: ValueTypeError,
	},

	#[error("{member}: argument {index}: value {value} out of range")]
	Overflow { member: &'static str, index: usize, value: i64 },

	#[error(transparent)]
	Dictionary(#[from] DictionaryError),
}

/// Plain late-bound invocation over a fixed member set.
///
/// Implementations use interior mutability: the dispatch surface is shared
/// by every holder of the object.
pub trait Dispatch {
	/// Class name for diagnostics.
	fn type_name(&self) -> &'static str;

	fn member_id(&self, name: &str) -> Result<MemberId, DispatchError>;

	fn invoke(&self, id: MemberId, kind: InvokeKind, args: &[Value]) -> Result<Value, DispatchError>;

	/// Resolves `name` and invokes it.
	fn invoke_by_name(&self, name: &str, kind: InvokeKind, args: &[Value]) -> Result<Value, DispatchError> {
		let id = self.member_id(name)?;
		self.invoke(id, kind, args)
	}
}

/// Checks the positional argument count for `member`.
pub(crate) fn expect_args<'a>(member: &'static str, args: &'a [Value], expected: usize) -> Result<&'a [Value], DispatchError> {
	if args.len() == expected {
		Ok(args)
	} else {
		Err(DispatchError::BadParamCount {
			member,
			expected,
			got: args.len(),
		})
	}
}

/// Reads argument `index` as an `i32`.
pub(crate) fn arg_i32(member: &'static str, args: &[Value], index: usize) -> Result<i32, DispatchError> {
	let val = args
		.get(index)
		.ok_or(DispatchError::BadParamCount {
			member,
			expected: index + 1,
			got: args.len(),
		})?
		.as_int()
		.map_err(|source| DispatchError::TypeMismatch { member, index, source })?;
	i32::try_from(val).map_err(|_| DispatchError::Overflow { member, index, value: val })
}

#[cfg(test)]
mod tests {
	use rstest::rstest;
	use scrdict_value::ValueType;

	use super::*;

	#[test]
	fn expect_args_reports_count() {
		let args = [Value::int(1)];
		assert_eq!(
			expect_args("Add", &args, 2),
			Err(DispatchError::BadParamCount {
				member: "Add",
				expected: 2,
				got: 1
			})
		);
		assert!(expect_args("Exists", &args, 1).is_ok());
	}

	#[rstest]
	#[case(Value::int(10), Ok(10))]
	#[case(Value::int(-3), Ok(-3))]
	#[case(Value::int(i64::from(i32::MAX) + 1), Err(DispatchError::Overflow { member: "CompareMode", index: 0, value: i64::from(i32::MAX) + 1 }))]
	fn arg_i32_cases(#[case] arg: Value, #[case] expected: Result<i32, DispatchError>) {
		assert_eq!(arg_i32("CompareMode", &[arg], 0), expected);
	}

	#[test]
	fn arg_i32_type_mismatch() {
		let err = arg_i32("CompareMode", &[Value::string("1")], 0).unwrap_err();
		assert!(matches!(err, DispatchError::TypeMismatch { index: 0, .. }));
		assert_eq!(err.to_string(), "CompareMode: argument 0: expected int, got string");

		let source = std::error::Error::source(&err).and_then(|e| e.downcast_ref::<ValueTypeError>());
		assert_eq!(source.map(|e| (e.expected(), e.got())), Some(("int", ValueType::String)));
	}
}
