//! Runtime configuration.
//!
//! ```toml
//! [activation]
//! classes = ["Scripting.Dictionary"]
//!
//! [dictionary]
//! database_compare = "text"
//! ```

use std::path::Path;

use scrdict_dictionary::{BinaryComparer, KeyComparer, TextComparer};
use serde::Deserialize;

use crate::activation::DICTIONARY_PROG_ID;
use crate::error::{ConfigError, Result};

/// Top-level configuration. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
	pub activation: ActivationConfig,
	pub dictionary: DictionaryOptions,
}

impl RuntimeConfig {
	pub fn from_toml(src: &str) -> Result<Self> {
		Ok(toml::from_str(src)?)
	}

	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let src = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::from_toml(&src)?;
		tracing::debug!(domain = "config", path = %path.display(), classes = config.activation.classes.len(), "loaded runtime config");
		Ok(config)
	}
}

/// Which classes the activation registry exposes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ActivationConfig {
	/// ProgIDs to register.
	pub classes: Vec<String>,
}

impl Default for ActivationConfig {
	fn default() -> Self {
		Self {
			classes: vec![DICTIONARY_PROG_ID.to_owned()],
		}
	}
}

/// Settings applied to every Dictionary the registry creates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DictionaryOptions {
	pub database_compare: DatabaseCompare,
}

/// Comparison used while a Dictionary is in database mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseCompare {
	#[default]
	Text,
	Binary,
}

impl DatabaseCompare {
	pub fn comparer(self) -> Box<dyn KeyComparer> {
		match self {
			Self::Text => Box::new(TextComparer),
			Self::Binary => Box::new(BinaryComparer),
		}
	}
}
