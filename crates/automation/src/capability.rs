use std::fmt;

/// An interface an object may be asked for at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
	/// Plain late-bound invocation of a fixed member set.
	Dispatch,
	/// Direct, statically typed dictionary operations.
	Dictionary,
	/// Expando members defined at runtime.
	DispatchEx,
	/// Host site attachment.
	ObjectWithSite,
}

bitflags::bitflags! {
	/// A set of object capabilities.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct CapabilitySet: u32 {
		/// See [`Capability::Dispatch`].
		const DISPATCH = 1 << 0;
		/// See [`Capability::Dictionary`].
		const DICTIONARY = 1 << 1;
		/// See [`Capability::DispatchEx`].
		const DISPATCH_EX = 1 << 2;
		/// See [`Capability::ObjectWithSite`].
		const OBJECT_WITH_SITE = 1 << 3;
	}
}

impl Capability {
	/// Returns the bitflag for this capability.
	pub const fn as_set(self) -> CapabilitySet {
		match self {
			Self::Dispatch => CapabilitySet::DISPATCH,
			Self::Dictionary => CapabilitySet::DICTIONARY,
			Self::DispatchEx => CapabilitySet::DISPATCH_EX,
			Self::ObjectWithSite => CapabilitySet::OBJECT_WITH_SITE,
		}
	}

	pub const fn name(self) -> &'static str {
		match self {
			Self::Dispatch => "dispatch",
			Self::Dictionary => "dictionary",
			Self::DispatchEx => "dispatch-ex",
			Self::ObjectWithSite => "object-with-site",
		}
	}
}

impl fmt::Display for Capability {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl From<Capability> for CapabilitySet {
	fn from(cap: Capability) -> Self {
		cap.as_set()
	}
}

impl FromIterator<Capability> for CapabilitySet {
	fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
		let mut set = CapabilitySet::empty();
		for cap in iter {
			set |= cap.as_set();
		}
		set
	}
}

impl CapabilitySet {
	pub const fn supports(self, cap: Capability) -> bool {
		self.contains(cap.as_set())
	}
}

/// Capabilities answered by every Dictionary instance, independent of its
/// contents.
pub const DICTIONARY_CAPABILITIES: CapabilitySet = CapabilitySet::DISPATCH.union(CapabilitySet::DICTIONARY);

/// The object does not provide the requested capability.
///
/// An expected outcome of negotiation, returned as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("capability not supported: {capability}")]
pub struct CapabilityUnsupported {
	pub capability: Capability,
}
