//! Automation surface for the Dictionary object.
//!
//! A caller activates a class through [`ClassRegistry`], negotiates the
//! capabilities it needs, and then either calls [`DictionaryHandle`] directly
//! or goes through the late-bound [`Dispatch`] interface.
//!
//! ```
//! use scrdict_automation::{CLSID_DICTIONARY, Capability, ClassRegistry, Dispatch, InvokeKind};
//! use scrdict_value::Value;
//!
//! let registry = ClassRegistry::with_builtins();
//! let disp = registry.create_instance(CLSID_DICTIONARY, Capability::Dispatch).unwrap();
//! assert!(disp.query(Capability::DispatchEx).is_err());
//!
//! let d = disp.as_dispatch();
//! d.invoke_by_name("Add", InvokeKind::Method, &[Value::string("a"), Value::int(1)]).unwrap();
//! assert_eq!(d.invoke_by_name("Count", InvokeKind::PropertyGet, &[]).unwrap(), Value::int(1));
//! ```

pub mod activation;
/// Capability negotiation.
pub mod capability;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod object;

pub use activation::{CLSID_DICTIONARY, ClassId, ClassRegistry, DICTIONARY_PROG_ID};
pub use capability::{Capability, CapabilitySet, CapabilityUnsupported, DICTIONARY_CAPABILITIES};
pub use config::{ActivationConfig, DatabaseCompare, DictionaryOptions, RuntimeConfig};
pub use dispatch::{Dispatch, DispatchError, InvokeKind, MemberId};
pub use error::{ActivationError, ConfigError};
pub use object::{DictionaryHandle, Interface, WeakDictionary, members};
