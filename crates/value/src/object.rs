use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Shared reference to a host object.
///
/// Cloning adds a reference; equality is object identity, never structural.
#[derive(Clone)]
pub struct ObjectRef {
	inner: Rc<dyn Any>,
	type_name: &'static str,
}

impl ObjectRef {
	pub fn new<T: Any>(object: Rc<T>, type_name: &'static str) -> Self {
		Self { inner: object, type_name }
	}

	/// Name of the object's class, for diagnostics.
	pub fn type_name(&self) -> &'static str {
		self.type_name
	}

	/// Address of the referenced object. Stable for the object's lifetime.
	pub fn addr(&self) -> usize {
		Rc::as_ptr(&self.inner).cast::<()>() as usize
	}

	pub fn ptr_eq(&self, other: &Self) -> bool {
		self.addr() == other.addr()
	}

	/// Returns a typed reference when the object is a `T`.
	pub fn downcast<T: Any>(&self) -> Option<Rc<T>> {
		Rc::clone(&self.inner).downcast::<T>().ok()
	}

	pub fn strong_count(&self) -> usize {
		Rc::strong_count(&self.inner)
	}
}

impl PartialEq for ObjectRef {
	fn eq(&self, other: &Self) -> bool {
		self.ptr_eq(other)
	}
}

impl Eq for ObjectRef {}

impl fmt::Debug for ObjectRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ObjectRef")
			.field("type_name", &self.type_name)
			.field("addr", &format_args!("{:#x}", self.addr()))
			.finish()
	}
}
