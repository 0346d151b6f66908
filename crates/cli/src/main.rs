//! `maptel` binary.
//!
//! Runs a command script against a fresh table store and prints the output of
//! `create` and `transform` commands to stdout.

mod cli;
mod config;
mod script;

use std::fs::File;
use std::io::{self, BufReader};

use clap::Parser;
use maptel_registry::TableStore;

use crate::cli::Cli;
use crate::config::CliConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Cli::parse();

	let mut config = match &args.config {
		Some(path) => CliConfig::load(path)?,
		None => CliConfig::default(),
	};
	if args.verbose {
		config.registry.diagnostics = true;
	}

	let subscriber = tracing_subscriber::fmt()
		.with_writer(io::stderr)
		.with_max_level(if args.verbose {
			tracing::Level::TRACE
		} else {
			config.level()?
		})
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;

	let mut store = TableStore::with_config(config.registry);
	let mut out = io::stdout().lock();

	let executed = match &args.script {
		Some(path) => {
			let file = File::open(path)?;
			script::run(&mut store, BufReader::new(file), &mut out, config.output_capacity)?
		}
		None => script::run(&mut store, io::stdin().lock(), &mut out, config.output_capacity)?,
	};

	tracing::info!(executed, tables = store.len(), "script finished");
	Ok(())
}
