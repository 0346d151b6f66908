//! Registry of phone renumbering tables.
//!
//! A [`TableStore`] owns any number of [`MappingTable`]s, each named by a
//! [`TableId`]. Lookups go through the [`Resolver`], which follows a chain of
//! renumberings to its terminal number and never loops on cyclic tables.

pub mod config;
pub mod error;
pub mod output;
pub mod resolver;
pub mod store;
pub mod table;

pub use config::RegistryConfig;
pub use error::{RegistryError, Result};
pub use maptel_primitives::{PhoneNumber, PhoneNumberError, TEL_NUM_MAX_LEN, TableId};
pub use output::write_terminated;
pub use resolver::{Resolution, Resolver};
pub use store::TableStore;
pub use table::MappingTable;
