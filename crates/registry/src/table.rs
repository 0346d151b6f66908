//! A single renumbering table.

use maptel_primitives::PhoneNumber;
use rustc_hash::FxHashMap as HashMap;

/// One renumbering scheme: each key number is replaced by its value.
///
/// Viewed as a graph with an edge `key -> value` per entry, a table may contain
/// cycles. Nothing here assumes otherwise; see [`Resolver`](crate::Resolver).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
	entries: HashMap<PhoneNumber, PhoneNumber>,
}

impl MappingTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the replacement for `key`, if any.
	#[inline]
	pub fn get(&self, key: &str) -> Option<&PhoneNumber> {
		self.entries.get(key)
	}

	/// Whether `key` has an outgoing mapping.
	#[inline]
	pub fn contains(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	/// Sets `key -> value`, returning the replaced value.
	pub fn insert(&mut self, key: PhoneNumber, value: PhoneNumber) -> Option<PhoneNumber> {
		self.entries.insert(key, value)
	}

	/// Removes the mapping for `key`, returning its value.
	pub fn remove(&mut self, key: &str) -> Option<PhoneNumber> {
		self.entries.remove(key)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
