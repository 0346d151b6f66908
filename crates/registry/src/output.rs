//! Fixed-capacity output for callers that supply their own buffer.
//!
//! The number is written followed by a `0` terminator. When the buffer is too
//! small the number is truncated to `capacity - 1` digits; the terminator is
//! always written.

use crate::{RegistryError, Result};

/// Writes `value` and a terminating `0` into `buf`.
///
/// Returns the number of digit bytes written, which is less than `value.len()`
/// only when the buffer was too small.
pub fn write_terminated(value: &str, buf: &mut [u8]) -> Result<usize> {
	let Some(room) = buf.len().checked_sub(1) else {
		return Err(RegistryError::EmptyBuffer);
	};
	let written = value.len().min(room);
	buf[..written].copy_from_slice(&value.as_bytes()[..written]);
	buf[written] = 0;
	Ok(written)
}
