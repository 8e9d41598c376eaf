use std::cell::Cell;
use std::rc::Rc;

use rstest::rstest;

use super::*;

#[rstest]
#[case(Value::Empty, ValueType::Empty, false)]
#[case(Value::Null, ValueType::Null, true)]
#[case(Value::bool(true), ValueType::Bool, true)]
#[case(Value::int(7), ValueType::Int, true)]
#[case(Value::float(1.5), ValueType::Float, true)]
#[case(Value::string("a"), ValueType::String, true)]
#[case(Value::array(vec![Value::int(1)]), ValueType::Array, false)]
fn kind_and_key_eligibility(#[case] value: Value, #[case] ty: ValueType, #[case] eligible: bool) {
	assert_eq!(value.get_type(), ty);
	assert_eq!(ty.is_key_eligible(), eligible);
}

#[test]
fn default_is_empty() {
	assert!(Value::default().is_empty());
}

#[test]
fn typed_accessor_reports_mismatch() {
	let err = Value::string("x").as_int().unwrap_err();
	assert_eq!(err.expected(), "int");
	assert_eq!(err.got(), ValueType::String);
	assert_eq!(err.to_string(), "expected int, got string");
}

#[test]
fn typed_accessors_return_their_payload() {
	assert_eq!(Value::bool(true).as_bool(), Ok(true));
	assert_eq!(Value::int(-3).as_int(), Ok(-3));
	assert_eq!(Value::float(2.5).as_float(), Ok(2.5));
	assert_eq!(Value::string("s").as_str(), Ok("s"));
	assert_eq!(Value::array(vec![Value::Null]).as_array(), Ok(&[Value::Null][..]));
}

#[rstest]
#[case(Value::int(1).as_bool().map(|_| ()), "bool", ValueType::Int)]
#[case(Value::int(1).as_float().map(|_| ()), "float", ValueType::Int)]
#[case(Value::Null.as_str().map(|_| ()), "string", ValueType::Null)]
#[case(Value::Empty.as_object().map(|_| ()), "object", ValueType::Empty)]
#[case(Value::string("a").as_array().map(|_| ()), "array", ValueType::String)]
fn typed_accessors_name_the_expected_kind(
	#[case] result: Result<(), ValueTypeError>,
	#[case] expected: &str,
	#[case] got: ValueType,
) {
	let err = result.unwrap_err();
	assert_eq!((err.expected(), err.got()), (expected, got));
}

#[test]
fn into_array_hands_back_non_arrays() {
	let items = vec![Value::int(1), Value::string("b")];
	assert_eq!(Value::array(items.clone()).into_array(), Ok(items));
	assert_eq!(Value::bool(false).into_array(), Err(Value::bool(false)));
}

#[test]
fn object_equality_is_identity() {
	let a = Rc::new(Cell::new(1));
	let b = Rc::new(Cell::new(1));
	let ra = ObjectRef::new(Rc::clone(&a), "Cell");
	let ra2 = ObjectRef::new(Rc::clone(&a), "Cell");
	let rb = ObjectRef::new(b, "Cell");

	assert_eq!(Value::object(ra.clone()), Value::object(ra2));
	assert_ne!(Value::object(ra.clone()), Value::object(rb));
	assert_eq!(ra.downcast::<Cell<i32>>().map(|c| c.get()), Some(1));
	assert!(ra.downcast::<String>().is_none());
}

#[test]
fn object_clone_shares_reference() {
	let a = Rc::new(());
	let obj = ObjectRef::new(Rc::clone(&a), "Unit");
	assert_eq!(obj.strong_count(), 2);
	let copy = obj.clone();
	assert_eq!(copy.strong_count(), 3);
	drop(copy);
	drop(obj);
	assert_eq!(Rc::strong_count(&a), 1);
}

#[test]
fn display_formats_nested_arrays() {
	let v = Value::array(vec![Value::int(1), Value::string("b"), Value::Empty]);
	assert_eq!(v.to_string(), "[1, \"b\", <empty>]");
}
