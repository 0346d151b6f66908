//! Line-oriented command scripts over one table store.
//!
//! Each non-blank line holds one command; `#` starts a comment.
//!
//! ```text
//! create                      # prints the new table id
//! insert ID SRC DST
//! erase ID SRC
//! transform ID SRC [CAPACITY] # prints the resolved number
//! delete ID
//! ```

use std::io::{BufRead, Write};

use maptel_registry::{RegistryError, TEL_NUM_MAX_LEN, TableId, TableStore};
use thiserror::Error;


/// One parsed script command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
	Create,
	Delete(TableId),
	Insert {
		id: TableId,
		key: String,
		value: String,
	},
	Erase {
		id: TableId,
		key: String,
	},
	Transform {
		id: TableId,
		source: String,
		capacity: Option<usize>,
	},
}

/// Errors that abort a script.
#[derive(Debug, Error)]
pub enum ScriptError {
	/// The line could not be parsed as a command.
	#[error("line {line}: {source}")]
	Parse { line: usize, source: ParseError },

	/// The store rejected the command.
	#[error("line {line}: {source}")]
	Registry { line: usize, source: RegistryError },

	/// Reading the script or writing output failed.
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

/// Reasons a script line is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
	/// The first word is not a known command.
	#[error("unknown command {0:?}")]
	UnknownCommand(String),

	/// A known command with the wrong number of arguments.
	#[error("wrong number of arguments for {verb}: got {got}")]
	Arity { verb: String, got: usize },

	/// A table id that is not an unsigned integer.
	#[error("invalid table id {0:?}")]
	InvalidId(String),

	/// An output capacity that is not an unsigned integer.
	#[error("invalid capacity {0:?}")]
	InvalidCapacity(String),
}

/// Parses one line. Returns `Ok(None)` for blank and comment-only lines.
pub fn parse_line(text: &str) -> Result<Option<Command>, ParseError> {
	let text = text.split_once('#').map_or(text, |(code, _)| code);
	let mut words = text.split_whitespace();
	let Some(verb) = words.next() else {
		return Ok(None);
	};
	let args: Vec<&str> = words.collect();

	let command = match (verb, args.as_slice()) {
		("create", []) => Command::Create,
		("delete", [id]) => Command::Delete(parse_id(id)?),
		("insert", [id, key, value]) => Command::Insert {
			id: parse_id(id)?,
			key: (*key).to_string(),
			value: (*value).to_string(),
		},
		("erase", [id, key]) => Command::Erase {
			id: parse_id(id)?,
			key: (*key).to_string(),
		},
		("transform", [id, source, rest @ ..]) if rest.len() <= 1 => Command::Transform {
			id: parse_id(id)?,
			source: (*source).to_string(),
			capacity: rest
				.first()
				.map(|raw| {
					raw.parse()
						.map_err(|_| ParseError::InvalidCapacity((*raw).to_string()))
				})
				.transpose()?,
		},
		("create" | "delete" | "insert" | "erase" | "transform", args) => {
			return Err(ParseError::Arity {
				verb: verb.to_string(),
				got: args.len(),
			});
		}
		_ => return Err(ParseError::UnknownCommand(verb.to_string())),
	};
	Ok(Some(command))
}

fn parse_id(raw: &str) -> Result<TableId, ParseError> {
	raw.parse()
		.map_err(|_| ParseError::InvalidId(raw.to_string()))
}

/// Buffer size needed to hold any phone number and its terminator.
const MAX_OUTPUT_LEN: usize = TEL_NUM_MAX_LEN + 1;

/// Executes one command, writing any output line to `out`.
pub fn execute(
	store: &mut TableStore,
	command: &Command,
	default_capacity: Option<usize>,
	out: &mut impl Write,
) -> Result<(), ExecError> {
	match command {
		Command::Create => writeln!(out, "{}", store.create())?,
		Command::Delete(id) => store.delete(*id)?,
		Command::Insert { id, key, value } => store.insert(*id, key, value)?,
		Command::Erase { id, key } => store.erase(*id, key)?,
		Command::Transform {
			id,
			source,
			capacity,
		} => match capacity.or(default_capacity) {
			Some(capacity) => {
				// Larger buffers would never receive more than a full number.
				let mut buf = vec![0u8; capacity.min(MAX_OUTPUT_LEN)];
				let written = store.transform_into(*id, source, &mut buf)?;
				out.write_all(&buf[..written])?;
				writeln!(out)?;
			}
			None => writeln!(out, "{}", store.transform(*id, source)?)?,
		},
	}
	Ok(())
}

/// Failure of a single command.
#[derive(Debug, Error)]
pub enum ExecError {
	#[error(transparent)]
	Registry(#[from] RegistryError),
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

/// Runs every command in `input`, stopping at the first failure.
///
/// Returns the number of commands executed.
pub fn run(
	store: &mut TableStore,
	input: impl BufRead,
	out: &mut impl Write,
	default_capacity: Option<usize>,
) -> Result<usize, ScriptError> {
	let mut executed = 0;
	for (index, text) in input.lines().enumerate() {
		let line = index + 1;
		let text = text?;
		let command = match parse_line(&text) {
			Ok(Some(command)) => command,
			Ok(None) => continue,
			Err(source) => return Err(ScriptError::Parse { line, source }),
		};

		tracing::debug!(line, ?command, "executing");
		execute(store, &command, default_capacity, out).map_err(|err| match err {
			ExecError::Registry(source) => ScriptError::Registry { line, source },
			ExecError::Io(err) => ScriptError::Io(err),
		})?;
		executed += 1;
	}
	out.flush()?;
	Ok(executed)
}
