use std::path::PathBuf;

use palc::{Parser, Subcommand};

/// Environment variable read when `--unit` is not given.
pub const UNIT_ENV: &str = "GYMLOG_UNIT";

#[derive(Parser)]
#[command(name = "gymlog", after_long_help = "Weights without a unit use --unit, then $GYMLOG_UNIT, then kg.")]
pub struct Cli {
	/// Unit of weights written without one: kg or lbs
	#[arg(short, long)]
	pub unit: Option<String>,
	#[command(subcommand)]
	pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Parse a workout log file
	File { path: PathBuf },
	/// Print the tokens of a workout log file
	Tokens { path: PathBuf },
	/// Parse lines typed at a prompt
	Repl,
}

impl Cli {
	/// The flag wins over the environment, neither given means kg.
	pub fn unit_name(&self) -> Option<String> { self.unit.clone().or_else(|| std::env::var(UNIT_ENV).ok()) }
}
