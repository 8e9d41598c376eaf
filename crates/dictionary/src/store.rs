//! The dictionary store.

use scrdict_value::Value;

use crate::compare::{BinaryComparer, KeyComparer, TextComparer};
use crate::error::{DictionaryError, Result};
use crate::mode::{CompareMethod, CompareMode};

#[derive(Debug, Clone, PartialEq)]
struct Entry {
	key: Value,
	value: Value,
}

/// Insertion-ordered dictionary keyed by [`Value`].
///
/// # Invariants
///
/// - Every stored key is key-eligible (see [`ValueType::is_key_eligible`]).
/// - A key is rejected when it equals a stored key under the mode active at
///   insertion time. Later mode changes do not re-check stored keys.
///
/// [`ValueType::is_key_eligible`]: scrdict_value::ValueType::is_key_eligible
#[derive(Debug)]
pub struct Dictionary {
	entries: Vec<Entry>,
	mode: CompareMode,
	database: Box<dyn KeyComparer>,
}

impl Default for Dictionary {
	fn default() -> Self {
		Self::new()
	}
}

impl Dictionary {
	/// Creates an empty store in [`CompareMode::BINARY`].
	///
	/// [`CompareMode::DATABASE`] behaves like text comparison until a host
	/// comparer is installed.
	pub fn new() -> Self {
		Self {
			entries: Vec::new(),
			mode: CompareMode::default(),
			database: Box::new(TextComparer),
		}
	}

	pub fn with_database_comparer(comparer: impl KeyComparer + 'static) -> Self {
		Self {
			database: Box::new(comparer),
			..Self::new()
		}
	}

	/// Replaces the comparer used while [`CompareMode::DATABASE`] is active.
	pub fn set_database_comparer(&mut self, comparer: Box<dyn KeyComparer>) {
		self.database = comparer;
	}

	pub fn count(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn compare_mode(&self) -> CompareMode {
		self.mode
	}

	/// Stores `mode` verbatim. Never fails and never revisits stored keys.
	pub fn set_compare_mode(&mut self, mode: CompareMode) {
		if !mode.is_recognized() {
			tracing::debug!(domain = "dictionary", raw = mode.raw(), "storing unrecognized compare mode");
		}
		tracing::debug!(domain = "dictionary", from = %self.mode, to = %mode, entries = self.entries.len(), "compare mode changed");
		self.mode = mode;
	}

	/// Appends a new entry.
	///
	/// Fails with [`DictionaryError::InvalidKeyType`] for ineligible keys and
	/// [`DictionaryError::KeyAlreadyExists`] when an equal key is stored.
	pub fn add(&mut self, key: Value, value: Value) -> Result<()> {
		check_key(&key)?;
		if self.position(&key).is_some() {
			return Err(DictionaryError::KeyAlreadyExists { key: key.to_string() });
		}
		tracing::debug!(domain = "dictionary", %key, mode = %self.mode, "add");
		self.entries.push(Entry { key, value });
		Ok(())
	}

	/// Whether a stored key equals `key` under the active mode.
	pub fn exists(&self, key: &Value) -> bool {
		let found = self.position(key).is_some();
		tracing::trace!(domain = "dictionary", %key, found, "exists");
		found
	}

	pub fn get(&self, key: &Value) -> Option<&Value> {
		self.position(key).map(|idx| &self.entries[idx].value)
	}

	/// Property-get semantics: returns a copy of the value, inserting an
	/// [`Value::Empty`] entry first when `key` is absent.
	pub fn item(&mut self, key: &Value) -> Result<Value> {
		check_key(key)?;
		if let Some(idx) = self.position(key) {
			return Ok(self.entries[idx].value.clone());
		}
		tracing::debug!(domain = "dictionary", %key, "item read on absent key; inserting empty entry");
		self.entries.push(Entry {
			key: key.clone(),
			value: Value::Empty,
		});
		Ok(Value::Empty)
	}

	/// Property-put semantics: overwrites in place or appends.
	pub fn set_item(&mut self, key: Value, value: Value) -> Result<()> {
		check_key(&key)?;
		match self.position(&key) {
			Some(idx) => self.entries[idx].value = value,
			None => {
				tracing::debug!(domain = "dictionary", %key, "set_item appends");
				self.entries.push(Entry { key, value });
			}
		}
		Ok(())
	}

	/// Replaces the key of an existing entry, keeping its position.
	pub fn rename_key(&mut self, old: &Value, new: Value) -> Result<()> {
		check_key(&new)?;
		let idx = self.position(old).ok_or_else(|| DictionaryError::KeyNotFound { key: old.to_string() })?;
		// Latent duplicates from an earlier mode may match `new` past `idx`.
		let comparer = self.comparer();
		let collides = self.entries.iter().enumerate().any(|(i, e)| i != idx && comparer.keys_equal(&e.key, &new));
		if collides {
			return Err(DictionaryError::KeyAlreadyExists { key: new.to_string() });
		}
		tracing::debug!(domain = "dictionary", %old, %new, "rename key");
		self.entries[idx].key = new;
		Ok(())
	}

	/// Removes the first matching entry and returns its value.
	pub fn remove(&mut self, key: &Value) -> Result<Value> {
		let idx = self.position(key).ok_or_else(|| DictionaryError::KeyNotFound { key: key.to_string() })?;
		tracing::debug!(domain = "dictionary", %key, "remove");
		Ok(self.entries.remove(idx).value)
	}

	pub fn remove_all(&mut self) {
		tracing::debug!(domain = "dictionary", removed = self.entries.len(), "remove all");
		self.entries.clear();
	}

	/// Snapshot of the keys in insertion order.
	pub fn keys(&self) -> Vec<Value> {
		self.entries.iter().map(|e| e.key.clone()).collect()
	}

	/// Snapshot of the values in insertion order.
	pub fn items(&self) -> Vec<Value> {
		self.entries.iter().map(|e| e.value.clone()).collect()
	}

	pub fn iter(&self) -> impl ExactSizeIterator<Item = (&Value, &Value)> {
		self.entries.iter().map(|e| (&e.key, &e.value))
	}

	fn position(&self, key: &Value) -> Option<usize> {
		if !key.get_type().is_key_eligible() {
			return None;
		}
		let comparer = self.comparer();
		self.entries.iter().position(|e| comparer.keys_equal(&e.key, key))
	}

	fn comparer(&self) -> &dyn KeyComparer {
		match self.mode.method() {
			Some(CompareMethod::Text) => &TextComparer,
			Some(CompareMethod::Database) => self.database.as_ref(),
			Some(CompareMethod::Binary) | None => &BinaryComparer,
		}
	}
}

fn check_key(key: &Value) -> Result<()> {
	let kind = key.get_type();
	if kind.is_key_eligible() {
		Ok(())
	} else {
		Err(DictionaryError::InvalidKeyType { kind })
	}
}
