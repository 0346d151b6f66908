//! Cycle-safe chain resolution.
//!
//! Following `key -> table[key]` repeatedly either reaches a terminal number
//! (one with no mapping) or loops forever. The [`Resolver`] first proves which
//! case applies with a slow/fast cursor walk (Floyd's tortoise and hare), which
//! takes time linear in the chain length and constant extra memory, and only
//! then walks the chain to its end.
//!
//! # Cycle policy
//!
//! A cyclic chain has no meaningful terminal number. Its transformation is the
//! source number itself; this is a successful outcome, not an error.

use maptel_primitives::PhoneNumber;

use crate::MappingTable;

#[cfg(test)]
mod tests;

/// Outcome of resolving one source number against a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
	/// The source has no mapping; it is its own result.
	Unchanged,
	/// The chain ends at `target` after `hops` renumberings.
	Resolved {
		target: &'a PhoneNumber,
		hops: usize,
	},
	/// The chain starting at the source loops.
	Cycle,
}

/// Resolves numbers against a borrowed table.
///
/// The resolver holds no state of its own and is created per lookup.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
	table: &'a MappingTable,
}

impl<'a> Resolver<'a> {
	pub fn new(table: &'a MappingTable) -> Self {
		Self { table }
	}

	/// Whether following mappings from `source` revisits a number.
	///
	/// The tortoise starts at `source` and the hare one hop ahead. The hare
	/// advances every step, the tortoise every other step, and the walk stops
	/// when the hare reaches a terminal number or the cursors meet.
	/// The tortoise trails the hare, so it only ever stands on numbers that have
	/// a mapping; meeting therefore implies a cycle.
	pub fn is_cyclic(&self, source: &str) -> bool {
		let Some(first) = self.table.get(source) else {
			return false;
		};

		let mut tortoise = source;
		let mut hare = first.as_str();
		let mut move_tortoise = false;

		while tortoise != hare {
			let Some(next) = self.table.get(hare) else {
				return false;
			};
			hare = next.as_str();
			if move_tortoise && let Some(next) = self.table.get(tortoise) {
				tortoise = next.as_str();
			}
			move_tortoise = !move_tortoise;
		}

		true
	}

	/// Resolves `source` to the end of its chain.
	pub fn resolve(&self, source: &str) -> Resolution<'a> {
		if self.is_cyclic(source) {
			return Resolution::Cycle;
		}

		let Some(mut target) = self.table.get(source) else {
			return Resolution::Unchanged;
		};
		let mut hops = 1;
		// Terminates: the chain was just shown to be acyclic.
		while let Some(next) = self.table.get(target.as_str()) {
			target = next;
			hops += 1;
		}

		Resolution::Resolved { target, hops }
	}

	/// Returns the transformed number: the chain's terminal number, or `source`
	/// itself when the source is unmapped or its chain is cyclic.
	pub fn transform<'s>(&self, source: &'s str) -> &'s str
	where
		'a: 's,
	{
		match self.resolve(source) {
			Resolution::Resolved { target, .. } => target.as_str(),
			Resolution::Unchanged | Resolution::Cycle => source,
		}
	}
}
