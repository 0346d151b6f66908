//! Core value types for renumbering tables: validated phone numbers and table handles.

/// Table identifier handles.
pub mod ids;
/// Validated digit-only phone numbers.
pub mod phone;

pub use ids::TableId;
pub use phone::{PhoneNumber, PhoneNumberError, TEL_NUM_MAX_LEN};
