//! Activation: turning a class id into a fresh object.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap as HashMap;
use uuid::Uuid;

use crate::capability::Capability;
use crate::config::{DictionaryOptions, RuntimeConfig};
use crate::error::{ActivationError, ConfigError};
use crate::object::{DictionaryHandle, Interface};

/// Class identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(Uuid);

impl ClassId {
	pub const fn from_u128(raw: u128) -> Self {
		Self(Uuid::from_u128(raw))
	}
}

impl fmt::Display for ClassId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut buf = Uuid::encode_buffer();
		write!(f, "{{{}}}", self.0.hyphenated().encode_upper(&mut buf))
	}
}

impl FromStr for ClassId {
	type Err = uuid::Error;

	/// Accepts plain, hyphenated, braced, and URN forms.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Uuid::parse_str(s).map(Self)
	}
}

/// `{EE09B103-97E0-11CF-978F-00A02463E06F}`
pub const CLSID_DICTIONARY: ClassId = ClassId::from_u128(0xee09b103_97e0_11cf_978f_00a02463e06f);

pub const DICTIONARY_PROG_ID: &str = "Scripting.Dictionary";

type Factory = fn(&DictionaryOptions) -> DictionaryHandle;

/// Classes this crate knows how to create.
const BUILTIN_CLASSES: &[(&str, ClassId, Factory)] = &[(DICTIONARY_PROG_ID, CLSID_DICTIONARY, new_dictionary)];

fn new_dictionary(options: &DictionaryOptions) -> DictionaryHandle {
	let handle = DictionaryHandle::new();
	handle.set_database_comparer(options.database_compare.comparer());
	handle
}

#[derive(Debug, Clone, Copy)]
struct ClassEntry {
	prog_id: &'static str,
	factory: Factory,
}

/// Maps class ids to factories and hands out new instances.
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
	classes: HashMap<ClassId, ClassEntry>,
	options: DictionaryOptions,
}

impl ClassRegistry {
	/// A registry with no classes.
	pub fn empty() -> Self {
		Self::default()
	}

	/// A registry with every built-in class and default options.
	pub fn with_builtins() -> Self {
		let mut registry = Self::empty();
		for &(prog_id, clsid, factory) in BUILTIN_CLASSES {
			registry.classes.insert(clsid, ClassEntry { prog_id, factory });
		}
		registry
	}

	pub fn from_config(config: &RuntimeConfig) -> Result<Self, ConfigError> {
		let mut registry = Self {
			classes: HashMap::default(),
			options: config.dictionary,
		};
		for name in &config.activation.classes {
			registry.register(name)?;
		}
		Ok(registry)
	}

	/// Registers the built-in class named by `prog_id` (ASCII case-insensitive).
	pub fn register(&mut self, prog_id: &str) -> Result<ClassId, ConfigError> {
		let &(prog_id, clsid, factory) = BUILTIN_CLASSES
			.iter()
			.find(|(name, ..)| name.eq_ignore_ascii_case(prog_id))
			.ok_or_else(|| ConfigError::UnknownClass(prog_id.to_owned()))?;
		tracing::debug!(domain = "activation", prog_id, %clsid, "class registered");
		self.classes.insert(clsid, ClassEntry { prog_id, factory });
		Ok(clsid)
	}

	pub fn unregister(&mut self, clsid: ClassId) -> bool {
		self.classes.remove(&clsid).is_some()
	}

	pub fn is_registered(&self, clsid: ClassId) -> bool {
		self.classes.contains_key(&clsid)
	}

	/// Looks up a registered class by ProgID (ASCII case-insensitive).
	pub fn class_id_from_prog_id(&self, prog_id: &str) -> Option<ClassId> {
		self.classes
			.iter()
			.find(|(_, entry)| entry.prog_id.eq_ignore_ascii_case(prog_id))
			.map(|(&clsid, _)| clsid)
	}

	/// Creates a fresh, empty instance and returns it through `capability`.
	pub fn create_instance(&self, clsid: ClassId, capability: Capability) -> Result<Interface, ActivationError> {
		let Some(entry) = self.classes.get(&clsid) else {
			tracing::debug!(domain = "activation", %clsid, "class not registered");
			return Err(ActivationError::ClassNotRegistered(clsid));
		};
		let object = (entry.factory)(&self.options);
		tracing::debug!(domain = "activation", prog_id = entry.prog_id, %capability, "instance created");
		object.query(capability).map_err(|source| ActivationError::NoInterface { clsid, source })
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::config::DatabaseCompare;

	#[test]
	fn clsid_formats_braced_uppercase() {
		assert_eq!(CLSID_DICTIONARY.to_string(), "{EE09B103-97E0-11CF-978F-00A02463E06F}");
	}

	#[test]
	fn clsid_parses_braced_and_plain() {
		let braced: ClassId = "{EE09B103-97E0-11CF-978F-00A02463E06F}".parse().unwrap();
		let plain: ClassId = "ee09b103-97e0-11cf-978f-00a02463e06f".parse().unwrap();
		assert_eq!(braced, CLSID_DICTIONARY);
		assert_eq!(plain, CLSID_DICTIONARY);
		assert!("not-a-guid".parse::<ClassId>().is_err());
	}

	#[test]
	fn empty_registry_reports_not_registered() {
		let registry = ClassRegistry::empty();
		assert_eq!(
			registry.create_instance(CLSID_DICTIONARY, Capability::Dispatch).unwrap_err(),
			ActivationError::ClassNotRegistered(CLSID_DICTIONARY)
		);
	}

	#[test]
	fn unsupported_capability_at_creation() {
		let registry = ClassRegistry::with_builtins();
		let err = registry.create_instance(CLSID_DICTIONARY, Capability::ObjectWithSite).unwrap_err();
		assert!(matches!(err, ActivationError::NoInterface { clsid, .. } if clsid == CLSID_DICTIONARY));
	}

	#[test]
	fn prog_id_lookup_follows_registration() {
		let mut registry = ClassRegistry::empty();
		assert_eq!(registry.class_id_from_prog_id("Scripting.Dictionary"), None);

		assert_eq!(registry.register("scripting.dictionary").unwrap(), CLSID_DICTIONARY);
		assert_eq!(registry.class_id_from_prog_id("SCRIPTING.DICTIONARY"), Some(CLSID_DICTIONARY));

		assert!(registry.unregister(CLSID_DICTIONARY));
		assert!(!registry.is_registered(CLSID_DICTIONARY));
	}

	#[test]
	fn config_with_unknown_class_fails() {
		let config = RuntimeConfig::from_toml("[activation]\nclasses = [\"Scripting.FileSystemObject\"]\n").unwrap();
		assert!(matches!(ClassRegistry::from_config(&config), Err(ConfigError::UnknownClass(name)) if name == "Scripting.FileSystemObject"));
	}

	#[test]
	fn configured_database_compare_reaches_new_instances() {
		let config = RuntimeConfig::from_toml("[dictionary]\ndatabase_compare = \"binary\"\n").unwrap();
		assert_eq!(config.dictionary.database_compare, DatabaseCompare::Binary);
		let registry = ClassRegistry::from_config(&config).unwrap();

		let dict = registry.create_instance(CLSID_DICTIONARY, Capability::Dictionary).unwrap().into_object();
		dict.set_compare_mode(scrdict_dictionary::CompareMode::DATABASE);
		dict.add(scrdict_value::Value::string("a"), scrdict_value::Value::Null).unwrap();
		assert!(!dict.exists(&scrdict_value::Value::string("A")));
	}

	#[test]
	fn each_activation_yields_a_distinct_object() {
		let registry = ClassRegistry::with_builtins();
		let a = registry.create_instance(CLSID_DICTIONARY, Capability::Dictionary).unwrap();
		let b = registry.create_instance(CLSID_DICTIONARY, Capability::Dictionary).unwrap();
		assert!(!a.object().ptr_eq(b.object()));
		assert_eq!(a.object().ref_count(), 1);
	}
}
