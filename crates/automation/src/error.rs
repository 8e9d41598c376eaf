//! Error types for activation and configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::activation::ClassId;
use crate::capability::CapabilityUnsupported;

/// Errors that can occur when loading runtime configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A configured ProgID names no known class.
	#[error("unknown class: {0}")]
	UnknownClass(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Failures of [`ClassRegistry::create_instance`].
///
/// [`ClassRegistry::create_instance`]: crate::activation::ClassRegistry::create_instance
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivationError {
	#[error("class not registered: {0}")]
	ClassNotRegistered(ClassId),

	#[error("class {clsid} created, but {source}")]
	NoInterface {
		clsid: ClassId,
		#[source]
		source: CapabilityUnsupported,
	},
}
