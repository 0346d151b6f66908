//! Configuration file for the `maptel` binary.
//!
//! ```toml
//! log_level = "info"
//! output_capacity = 16
//!
//! [registry]
//! diagnostics = true
//! ```

use std::path::{Path, PathBuf};

use maptel_registry::RegistryConfig;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading the configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error parsing TOML syntax or structure.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// The log level is not one of trace, debug, info, warn, error.
	#[error("invalid log level: {0}")]
	InvalidLogLevel(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
	/// Maximum tracing level written to stderr.
	pub log_level: String,
	/// Capacity of the fixed output buffer used for `transform` commands that
	/// do not give one. Unbounded when absent.
	pub output_capacity: Option<usize>,
	/// Table store settings.
	pub registry: RegistryConfig,
}

impl Default for CliConfig {
	fn default() -> Self {
		Self {
			log_level: "warn".to_string(),
			output_capacity: None,
			registry: RegistryConfig::default(),
		}
	}
}

impl CliConfig {
	/// Reads and parses a configuration file.
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let text = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::parse(&text)
	}

	/// Parses configuration from TOML text.
	pub fn parse(text: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(text)?;
		config.level()?;
		Ok(config)
	}

	/// The configured tracing level.
	pub fn level(&self) -> Result<tracing::Level, ConfigError> {
		self.log_level
			.parse()
			.map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
	}
}
