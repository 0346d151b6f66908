//! Runtime configuration for a table store.

use serde::{Deserialize, Serialize};

/// Knobs for a [`TableStore`](crate::TableStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
	/// Emit per-call diagnostic events (arguments and outcome).
	///
	/// Defaults to on in debug builds and off in release builds.
	pub diagnostics: bool,
}

impl Default for RegistryConfig {
	fn default() -> Self {
		Self {
			diagnostics: cfg!(debug_assertions),
		}
	}
}

impl RegistryConfig {
	/// Configuration with diagnostics forced off.
	pub fn quiet() -> Self {
		Self { diagnostics: false }
	}
}
