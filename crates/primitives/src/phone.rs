//! Digit-only phone numbers.
//!
//! A [`PhoneNumber`] is the key and value type of every renumbering table. It
//! can only be built through validation, so any value held in a table is known
//! to be non-empty, ASCII digits only, and at most [`TEL_NUM_MAX_LEN`] long.

use std::borrow::Borrow;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of digits in a phone number.
pub const TEL_NUM_MAX_LEN: usize = 22;

#[cfg(test)]
mod tests;

/// Reasons a string is rejected as a phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PhoneNumberError {
	/// The input has no digits at all.
	#[error("phone number is empty")]
	Empty,

	/// The input is longer than [`TEL_NUM_MAX_LEN`].
	#[error("phone number has {len} digits (max {max})")]
	TooLong { len: usize, max: usize },

	/// The input contains something other than an ASCII digit.
	#[error("invalid character {ch:?} at index {index}")]
	InvalidChar { index: usize, ch: char },
}

/// Validated, immutable phone number.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(Box<str>);

impl PhoneNumber {
	/// Validates `raw` and wraps it.
	pub fn new(raw: impl Into<String>) -> Result<Self, PhoneNumberError> {
		let raw = raw.into();
		validate(&raw)?;
		Ok(Self(raw.into_boxed_str()))
	}

	/// Returns the digits as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Number of digits.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Always false; kept for API symmetry with `len`.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

/// Checks that `raw` is a well-formed phone number without allocating.
pub fn validate(raw: &str) -> Result<(), PhoneNumberError> {
	if raw.is_empty() {
		return Err(PhoneNumberError::Empty);
	}
	if let Some((index, ch)) = raw.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
		return Err(PhoneNumberError::InvalidChar { index, ch });
	}
	if raw.len() > TEL_NUM_MAX_LEN {
		return Err(PhoneNumberError::TooLong {
			len: raw.len(),
			max: TEL_NUM_MAX_LEN,
		});
	}
	Ok(())
}

impl std::fmt::Display for PhoneNumber {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

impl Borrow<str> for PhoneNumber {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl FromStr for PhoneNumber {
	type Err = PhoneNumberError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

impl TryFrom<&str> for PhoneNumber {
	type Error = PhoneNumberError;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}

impl TryFrom<String> for PhoneNumber {
	type Error = PhoneNumberError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}

impl From<PhoneNumber> for String {
	fn from(number: PhoneNumber) -> Self {
		number.0.into_string()
	}
}

impl PartialEq<&str> for PhoneNumber {
	fn eq(&self, other: &&str) -> bool {
		&*self.0 == *other
	}
}
