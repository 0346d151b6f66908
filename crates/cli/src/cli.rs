use std::path::PathBuf;

use clap::Parser;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "maptel")]
#[command(about = "Run phone renumbering table scripts")]
#[command(version)]
pub struct Cli {
	/// Script to execute (reads stdin if omitted)
	pub script: Option<PathBuf>,

	/// TOML configuration file
	#[arg(short, long, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Trace every registry call to stderr
	#[arg(short, long)]
	pub verbose: bool,
}
