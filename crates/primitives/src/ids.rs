use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Handle naming one mapping table inside a table store.
///
/// Handles are allocated from a monotonically increasing counter and are never
/// reused, so a stale handle can never alias a newer table.
#[derive(
	Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TableId(pub u64);

impl TableId {
	/// The first handle a fresh store hands out; also the `Default`.
	pub const FIRST: TableId = TableId(0);

	/// Returns the handle following this one.
	pub fn next(self) -> Self {
		Self(self.0 + 1)
	}
}

impl std::fmt::Display for TableId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for TableId {
	type Err = ParseIntError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		s.parse().map(Self)
	}
}
