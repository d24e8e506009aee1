pub mod interpreter;
pub mod scanner;

use interpreter::InterpretError;
use scanner::ScanError;

/// GymlogError is the top-level error type returned by the public API.
#[derive(thiserror::Error, Debug)]
pub enum GymlogError {
	/// Internal error, IO failures while reading a log
	#[error("InternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// Nothing to parse
	#[error("Empty source string")]
	EmptySource,
	/// Weight unit other than `kg` or `lbs`
	#[error("Invalid weight unit {0:?}, expected \"kg\" or \"lbs\"")]
	InvalidUnit(String),
	/// Scanner errors, only raised by strict parsing
	#[error("ScannerErrors:\n{}", display_errors(.0))]
	ScannerErrors(Vec<ScanError>),
	/// Interpreter errors, only raised by strict parsing
	#[error("InterpreterErrors:\n{}", display_errors(.0))]
	InterpreterErrors(Vec<InterpretError>),
}

/// A non fatal problem found while parsing, returned next to the exercises.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Diagnostic {
	#[error(transparent)]
	Scan(#[from] ScanError),
	#[error(transparent)]
	Interpret(#[from] InterpretError),
}

impl Diagnostic {
	pub fn line(&self) -> usize {
		match self {
			Diagnostic::Scan(e) => e.line(),
			Diagnostic::Interpret(e) => e.line(),
		}
	}
}

fn display_errors<E: std::fmt::Display>(errors: &[E]) -> String {
	errors.iter().map(|e| format!("{}", e)).collect::<Vec<String>>().join("\n")
}
