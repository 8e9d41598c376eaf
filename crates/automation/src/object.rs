//! Reference-counted Dictionary objects and their interfaces.
//!
//! A [`DictionaryHandle`] is one reference to a live store. Cloning a handle
//! adds a reference, dropping one releases it, and the store is destroyed
//! when the last handle goes away. Handles are `!Send`: an object stays on
//! the thread that created it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use scrdict_dictionary::{CompareMode, Dictionary, KeyComparer};
use scrdict_value::{ObjectRef, Value};

use crate::capability::{Capability, CapabilityUnsupported, DICTIONARY_CAPABILITIES};
use crate::dispatch::{Dispatch, DispatchError, InvokeKind, MemberId, arg_i32, expect_args};

/// Class name reported through dispatch and object references.
pub const DICTIONARY_TYPE_NAME: &str = "Dictionary";

/// Member ids of the Dictionary dispatch surface.
pub mod members {
	use crate::dispatch::MemberId;

	pub const ITEM: MemberId = MemberId(0);
	pub const ADD: MemberId = MemberId(1);
	pub const COUNT: MemberId = MemberId(2);
	pub const EXISTS: MemberId = MemberId(3);
	pub const ITEMS: MemberId = MemberId(4);
	pub const REMOVE: MemberId = MemberId(5);
	pub const REMOVE_ALL: MemberId = MemberId(6);
	pub const KEYS: MemberId = MemberId(7);
	pub const KEY: MemberId = MemberId(8);
	pub const COMPARE_MODE: MemberId = MemberId(9);
}

const MEMBER_NAMES: &[(&str, MemberId)] = &[
	("Item", members::ITEM),
	("Add", members::ADD),
	("Count", members::COUNT),
	("Exists", members::EXISTS),
	("Items", members::ITEMS),
	("Remove", members::REMOVE),
	("RemoveAll", members::REMOVE_ALL),
	("Keys", members::KEYS),
	("Key", members::KEY),
	("CompareMode", members::COMPARE_MODE),
];

/// Shared reference to a Dictionary object.
#[derive(Debug, Clone, Default)]
pub struct DictionaryHandle {
	inner: Rc<RefCell<Dictionary>>,
}

impl DictionaryHandle {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_database_comparer(comparer: impl KeyComparer + 'static) -> Self {
		Self::from_dictionary(Dictionary::with_database_comparer(comparer))
	}

	pub fn from_dictionary(dictionary: Dictionary) -> Self {
		Self {
			inner: Rc::new(RefCell::new(dictionary)),
		}
	}

	/// Number of live references to this object.
	pub fn ref_count(&self) -> usize {
		Rc::strong_count(&self.inner)
	}

	pub fn ptr_eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.inner, &other.inner)
	}

	/// Observer that does not keep the object alive.
	pub fn downgrade(&self) -> WeakDictionary {
		WeakDictionary {
			inner: Rc::downgrade(&self.inner),
		}
	}

	/// Runs `f` against a read-only view of the store.
	///
	/// The borrow ends when `f` returns, so the handle can be mutated again
	/// right after.
	pub fn with_store<R>(&self, f: impl FnOnce(&Dictionary) -> R) -> R {
		f(&self.inner.borrow())
	}

	pub fn supports(&self, capability: Capability) -> bool {
		DICTIONARY_CAPABILITIES.supports(capability)
	}

	/// Hands out a new reference through `capability`.
	///
	/// Unsupported capabilities allocate nothing and leave the reference
	/// count untouched.
	pub fn query(&self, capability: Capability) -> Result<Interface, CapabilityUnsupported> {
		match capability {
			Capability::Dispatch => Ok(Interface::Dispatch(self.clone())),
			Capability::Dictionary => Ok(Interface::Dictionary(self.clone())),
			Capability::DispatchEx | Capability::ObjectWithSite => {
				tracing::debug!(domain = "capability", %capability, object = DICTIONARY_TYPE_NAME, "capability rejected");
				Err(CapabilityUnsupported { capability })
			}
		}
	}

	/// Wraps a new reference to this object in a [`Value`].
	pub fn to_value(&self) -> Value {
		Value::object(ObjectRef::new(Rc::clone(&self.inner), DICTIONARY_TYPE_NAME))
	}

	/// Recovers a handle from an object value holding a Dictionary.
	pub fn from_value(value: &Value) -> Option<Self> {
		let inner = value.as_object().ok()?.downcast::<RefCell<Dictionary>>()?;
		Some(Self { inner })
	}

	pub fn add(&self, key: Value, value: Value) -> scrdict_dictionary::Result<()> {
		self.inner.borrow_mut().add(key, value)
	}

	pub fn exists(&self, key: &Value) -> bool {
		self.inner.borrow().exists(key)
	}

	pub fn item(&self, key: &Value) -> scrdict_dictionary::Result<Value> {
		self.inner.borrow_mut().item(key)
	}

	pub fn set_item(&self, key: Value, value: Value) -> scrdict_dictionary::Result<()> {
		self.inner.borrow_mut().set_item(key, value)
	}

	pub fn rename_key(&self, old: &Value, new: Value) -> scrdict_dictionary::Result<()> {
		self.inner.borrow_mut().rename_key(old, new)
	}

	pub fn remove(&self, key: &Value) -> scrdict_dictionary::Result<Value> {
		self.inner.borrow_mut().remove(key)
	}

	pub fn remove_all(&self) {
		self.inner.borrow_mut().remove_all();
	}

	pub fn keys(&self) -> Vec<Value> {
		self.inner.borrow().keys()
	}

	pub fn items(&self) -> Vec<Value> {
		self.inner.borrow().items()
	}

	pub fn count(&self) -> usize {
		self.inner.borrow().count()
	}

	pub fn compare_mode(&self) -> CompareMode {
		self.inner.borrow().compare_mode()
	}

	pub fn set_compare_mode(&self, mode: CompareMode) {
		self.inner.borrow_mut().set_compare_mode(mode);
	}

	pub fn set_database_comparer(&self, comparer: Box<dyn KeyComparer>) {
		self.inner.borrow_mut().set_database_comparer(comparer);
	}
}

impl Dispatch for DictionaryHandle {
	fn type_name(&self) -> &'static str {
		DICTIONARY_TYPE_NAME
	}

	fn member_id(&self, name: &str) -> Result<MemberId, DispatchError> {
		MEMBER_NAMES
			.iter()
			.find(|(member, _)| member.eq_ignore_ascii_case(name))
			.map(|&(_, id)| id)
			.ok_or_else(|| DispatchError::UnknownName(name.to_owned()))
	}

	fn invoke(&self, id: MemberId, kind: InvokeKind, args: &[Value]) -> Result<Value, DispatchError> {
		use InvokeKind::{Method, PropertyGet, PropertyPut};

		tracing::trace!(domain = "dispatch", object = DICTIONARY_TYPE_NAME, member = id.0, %kind, argc = args.len(), "invoke");
		match (id, kind) {
			(members::ADD, Method) => {
				let args = expect_args("Add", args, 2)?;
				self.add(args[0].clone(), args[1].clone())?;
				Ok(Value::Empty)
			}
			(members::ITEM, Method | PropertyGet) => {
				let args = expect_args("Item", args, 1)?;
				Ok(self.item(&args[0])?)
			}
			(members::ITEM, PropertyPut) => {
				let args = expect_args("Item", args, 2)?;
				self.set_item(args[0].clone(), args[1].clone())?;
				Ok(Value::Empty)
			}
			(members::KEY, PropertyPut) => {
				let args = expect_args("Key", args, 2)?;
				self.rename_key(&args[0], args[1].clone())?;
				Ok(Value::Empty)
			}
			(members::EXISTS, Method) => {
				let args = expect_args("Exists", args, 1)?;
				Ok(Value::bool(self.exists(&args[0])))
			}
			(members::REMOVE, Method) => {
				let args = expect_args("Remove", args, 1)?;
				self.remove(&args[0])?;
				Ok(Value::Empty)
			}
			(members::REMOVE_ALL, Method) => {
				expect_args("RemoveAll", args, 0)?;
				self.remove_all();
				Ok(Value::Empty)
			}
			(members::KEYS, Method) => {
				expect_args("Keys", args, 0)?;
				Ok(Value::array(self.keys()))
			}
			(members::ITEMS, Method) => {
				expect_args("Items", args, 0)?;
				Ok(Value::array(self.items()))
			}
			(members::COUNT, Method | PropertyGet) => {
				expect_args("Count", args, 0)?;
				let count = i64::try_from(self.count()).unwrap_or(i64::MAX);
				Ok(Value::int(count))
			}
			(members::COMPARE_MODE, PropertyGet) => {
				expect_args("CompareMode", args, 0)?;
				Ok(Value::int(self.compare_mode().raw().into()))
			}
			(members::COMPARE_MODE, PropertyPut) => {
				let raw = arg_i32("CompareMode", expect_args("CompareMode", args, 1)?, 0)?;
				self.set_compare_mode(CompareMode::from_raw(raw));
				Ok(Value::Empty)
			}
			(id, kind) => Err(DispatchError::MemberNotFound { id, kind }),
		}
	}
}

/// Non-owning observer of a Dictionary object.
#[derive(Debug, Clone)]
pub struct WeakDictionary {
	inner: Weak<RefCell<Dictionary>>,
}

impl WeakDictionary {
	pub fn upgrade(&self) -> Option<DictionaryHandle> {
		self.inner.upgrade().map(|inner| DictionaryHandle { inner })
	}

	/// True once the last handle has been dropped.
	pub fn is_disposed(&self) -> bool {
		self.inner.strong_count() == 0
	}
}

/// A reference to an object obtained through one capability.
#[derive(Debug, Clone)]
pub enum Interface {
	Dispatch(DictionaryHandle),
	Dictionary(DictionaryHandle),
}

impl Interface {
	pub fn capability(&self) -> Capability {
		match self {
			Self::Dispatch(_) => Capability::Dispatch,
			Self::Dictionary(_) => Capability::Dictionary,
		}
	}

	/// The object behind this interface.
	pub fn object(&self) -> &DictionaryHandle {
		match self {
			Self::Dispatch(handle) | Self::Dictionary(handle) => handle,
		}
	}

	pub fn as_dispatch(&self) -> &dyn Dispatch {
		self.object()
	}

	/// Asks the underlying object for another capability.
	pub fn query(&self, capability: Capability) -> Result<Interface, CapabilityUnsupported> {
		self.object().query(capability)
	}

	pub fn into_object(self) -> DictionaryHandle {
		match self {
			Self::Dispatch(handle) | Self::Dictionary(handle) => handle,
		}
	}
}
