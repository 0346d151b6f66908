//! Error types for table store operations.

use maptel_primitives::{PhoneNumberError, TableId};
use thiserror::Error;

/// Contract violations reported by the table store.
///
/// Expected absences (erasing a number that has no mapping) are not errors and
/// never surface here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
	/// No table is registered under the identifier.
	#[error("unknown table: {0}")]
	UnknownTable(TableId),

	/// A caller-supplied string is not a valid phone number.
	#[error("invalid phone number {input:?}: {source}")]
	InvalidPhoneNumber {
		/// The rejected input.
		input: String,
		/// Why it was rejected.
		source: PhoneNumberError,
	},

	/// The output buffer has no room for the terminator.
	#[error("output buffer has zero capacity")]
	EmptyBuffer,
}

/// Result type for table store operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
