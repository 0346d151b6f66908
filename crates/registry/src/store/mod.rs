//! Owner of all renumbering tables.
//!
//! The [`TableStore`] is the only path to table contents: callers create a
//! table, edit it through [`insert`](TableStore::insert) and
//! [`erase`](TableStore::erase), and look numbers up through
//! [`transform`](TableStore::transform). Identifiers come from a monotonic
//! counter and are never handed out twice, even after deletion.
//!
//! Every operation validates its identifier and phone numbers before touching
//! state, so a rejected call leaves the store unchanged.

use maptel_primitives::{PhoneNumber, TableId};
use rustc_hash::FxHashMap as HashMap;

use crate::output::write_terminated;
use crate::resolver::{Resolution, Resolver};
use crate::{MappingTable, RegistryConfig, RegistryError, Result};


/// Emits a diagnostic event when the store's config enables them.
macro_rules! diag {
	($config:expr, $level:ident, $($arg:tt)+) => {
		if $config.diagnostics {
			tracing::$level!(target: "maptel", $($arg)+);
		}
	};
}

/// Registry of mapping tables keyed by [`TableId`].
#[derive(Debug, Default)]
pub struct TableStore {
	tables: HashMap<TableId, MappingTable>,
	next_id: TableId,
	config: RegistryConfig,
}

impl TableStore {
	/// Creates an empty store with the default configuration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty store with `config`.
	pub fn with_config(config: RegistryConfig) -> Self {
		Self {
			config,
			..Self::default()
		}
	}

	/// Allocates a fresh identifier and registers an empty table under it.
	pub fn create(&mut self) -> TableId {
		diag!(self.config, trace, op = "create", "call");

		let id = self.next_id;
		self.next_id = id.next();
		self.tables.insert(id, MappingTable::new());

		diag!(self.config, debug, op = "create", %id, "new map id");
		id
	}

	/// Drops the table named by `id` together with all of its entries.
	///
	/// Deleting an unknown `id` is a caller contract violation, like every other
	/// operation given an unknown `id`: it returns [`RegistryError::UnknownTable`]
	/// and leaves the store untouched. Only erasing an absent *key* is a silent
	/// no-op; callers that want idempotent deletion can check
	/// [`contains`](Self::contains) first or ignore this error.
	pub fn delete(&mut self, id: TableId) -> Result<()> {
		diag!(self.config, trace, op = "delete", %id, "call");

		if self.tables.remove(&id).is_none() {
			diag!(self.config, warn, op = "delete", %id, "nothing to delete");
			return Err(RegistryError::UnknownTable(id));
		}

		diag!(self.config, debug, op = "delete", %id, "deleted");
		Ok(())
	}

	/// Whether a table is registered under `id`.
	pub fn contains(&self, id: TableId) -> bool {
		self.tables.contains_key(&id)
	}

	/// Sets `key -> value` in table `id`, overwriting any previous mapping.
	pub fn insert(&mut self, id: TableId, key: &str, value: &str) -> Result<()> {
		diag!(self.config, trace, op = "insert", %id, key, value, "call");

		let Self { tables, config, .. } = self;
		let table = lookup_mut(tables, config, "insert", id)?;
		let key = parse_number(config, "insert", key)?;
		let value = parse_number(config, "insert", value)?;

		match table.insert(key, value) {
			Some(previous) => {
				diag!(config, debug, op = "insert", %id, %previous, "inserted, replacing")
			}
			None => diag!(config, debug, op = "insert", %id, "inserted"),
		}
		Ok(())
	}

	/// Removes the mapping for `key` from table `id`.
	///
	/// A `key` with no mapping is not an error; the call does nothing.
	pub fn erase(&mut self, id: TableId, key: &str) -> Result<()> {
		diag!(self.config, trace, op = "erase", %id, key, "call");

		let Self { tables, config, .. } = self;
		let table = lookup_mut(tables, config, "erase", id)?;
		parse_number(config, "erase", key)?;

		if table.remove(key).is_some() {
			diag!(config, debug, op = "erase", %id, key, "erased");
		} else {
			diag!(config, debug, op = "erase", %id, key, "nothing to erase");
		}
		Ok(())
	}

	/// Returns the direct replacement for `key` in table `id`, without following
	/// the chain.
	pub fn get(&self, id: TableId, key: &str) -> Result<Option<&PhoneNumber>> {
		let table = self.table(id)?;
		parse_number(&self.config, "get", key)?;
		Ok(table.get(key))
	}

	/// Borrows table `id` for read-only inspection.
	pub fn table(&self, id: TableId) -> Result<&MappingTable> {
		self.tables.get(&id).ok_or_else(|| {
			diag!(self.config, warn, %id, "unknown table");
			RegistryError::UnknownTable(id)
		})
	}

	/// Number of entries in table `id`.
	pub fn table_len(&self, id: TableId) -> Result<usize> {
		self.table(id).map(MappingTable::len)
	}

	/// Number of live tables.
	pub fn len(&self) -> usize {
		self.tables.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tables.is_empty()
	}

	/// Identifiers of all live tables, ascending.
	pub fn ids(&self) -> Vec<TableId> {
		let mut ids: Vec<_> = self.tables.keys().copied().collect();
		ids.sort_unstable();
		ids
	}

	/// Resolves `source` through table `id`.
	///
	/// Returns the terminal number of the chain starting at `source`, or
	/// `source` itself when it has no mapping or its chain is cyclic.
	pub fn transform(&self, id: TableId, source: &str) -> Result<PhoneNumber> {
		diag!(self.config, trace, op = "transform", %id, source, "call");

		let table = self.table(id)?;
		let source = parse_number(&self.config, "transform", source)?;
		let result = self.resolve_in(id, table, source);

		Ok(result)
	}

	/// Resolves `source` through table `id` into a caller-supplied buffer.
	///
	/// The result is written with a `0` terminator and truncated to
	/// `buf.len() - 1` digits if it does not fit. Returns the number of digits
	/// written. An empty buffer is rejected before any lookup happens.
	pub fn transform_into(&self, id: TableId, source: &str, buf: &mut [u8]) -> Result<usize> {
		diag!(self.config, trace, op = "transform", %id, source, capacity = buf.len(), "call");

		let table = self.table(id)?;
		let source = parse_number(&self.config, "transform", source)?;
		if buf.is_empty() {
			diag!(self.config, warn, op = "transform", %id, "empty output buffer");
			return Err(RegistryError::EmptyBuffer);
		}

		let result = self.resolve_in(id, table, source);
		let written = write_terminated(result.as_str(), buf)?;
		if written < result.len() {
			diag!(
				self.config,
				debug,
				op = "transform",
				%id,
				%result,
				written,
				"result truncated to fit output buffer"
			);
		}
		Ok(written)
	}

	fn resolve_in(&self, id: TableId, table: &MappingTable, source: PhoneNumber) -> PhoneNumber {
		let result = match Resolver::new(table).resolve(source.as_str()) {
			Resolution::Resolved { target, hops } => {
				diag!(self.config, trace, op = "transform", %id, hops, "chain resolved");
				target.clone()
			}
			Resolution::Cycle => {
				diag!(self.config, debug, op = "transform", %id, %source, "cycle detected");
				source.clone()
			}
			Resolution::Unchanged => source.clone(),
		};
		diag!(self.config, debug, op = "transform", %id, "{source} -> {result}");
		result
	}
}

fn lookup_mut<'t>(
	tables: &'t mut HashMap<TableId, MappingTable>,
	config: &RegistryConfig,
	op: &'static str,
	id: TableId,
) -> Result<&'t mut MappingTable> {
	tables.get_mut(&id).ok_or_else(|| {
		diag!(config, warn, op, %id, "unknown table");
		RegistryError::UnknownTable(id)
	})
}

fn parse_number(config: &RegistryConfig, op: &'static str, raw: &str) -> Result<PhoneNumber> {
	PhoneNumber::new(raw).map_err(|source| {
		diag!(config, warn, op, input = raw, %source, "invalid phone number");
		RegistryError::InvalidPhoneNumber {
			input: raw.to_owned(),
			source,
		}
	})
}
