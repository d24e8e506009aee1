//! # Workout log parsing
//!
//! Turns lines typed by hand after a training session into structured
//! exercises.
//!
//! ``` text
//! Bench Press @90kg 5/5/5
//! Squats @100kg 3*10 @140lbs 10
//! ```
//!
//! A line starts with the exercise name, followed by any number of weight
//! clauses (`@90kg`, `@87,5lbs`, `@20`) and reps clauses. Reps are written
//! either as a multiplier `3*10`, ten reps in each of three sets, or one count
//! per set `5/5/5`. There are no fixed separators, so each weight clause after
//! the first starts a new record under the same name.

//! ## Scanning
//!
//! The [`Scanner`] takes in the characters and converts them into tokens:
//! words, weight units, numbers, `@ * / -` and whitespace. Unknown characters
//! are reported and skipped.

//! ## Interpreting
//!
//! The [`Interpreter`] walks the tokens once, building [`Exercise`] records
//! with a small state machine. Problems it runs into drop the offending
//! clause and are reported, they never abort the pass.

pub mod cli;
mod config;
mod error;
mod gymlog;
mod interpreter;
mod scanner;

pub use config::Config;
pub use error::{
	Diagnostic, GymlogError,
	interpreter::{InterpretError, InterpretErrorType},
	scanner::{ScanError, ScanErrorType},
};
pub use gymlog::Gymlog;
pub use interpreter::{Exercise, Interpreter, MAX_SETS, Unit, Weight};
pub use scanner::{Literal, Scanner, Token, TokenKind};

/// Exercises parsed from a log, with every problem found on the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workout {
	pub exercises:   Vec<Exercise>,
	pub diagnostics: Vec<Diagnostic>,
}

/// Parse a workout log. Malformed characters, clauses and rep counts are
/// dropped and listed in [`Workout::diagnostics`].
pub fn parse(source: &str, config: Config) -> Result<Workout, GymlogError> {
	if source.is_empty() {
		return Err(GymlogError::EmptySource);
	}

	let (tokens, scan_errors) = Scanner::new(source).scan_tokens();
	let (exercises, interpret_errors) = Interpreter::new(tokens, config).interpret();

	let diagnostics = scan_errors.into_iter().map(Diagnostic::from).chain(interpret_errors.into_iter().map(Diagnostic::from)).collect();
	Ok(Workout { exercises, diagnostics })
}

/// Parse a workout log, failing on the first stage that reports a problem.
pub fn parse_strict(source: &str, config: Config) -> Result<Vec<Exercise>, GymlogError> {
	if source.is_empty() {
		return Err(GymlogError::EmptySource);
	}

	let (tokens, scan_errors) = Scanner::new(source).scan_tokens();
	if !scan_errors.is_empty() {
		return Err(GymlogError::ScannerErrors(scan_errors));
	}
	let (exercises, interpret_errors) = Interpreter::new(tokens, config).interpret();
	if !interpret_errors.is_empty() {
		return Err(GymlogError::InterpreterErrors(interpret_errors));
	}
	Ok(exercises)
}

/// Run only the scanner, the token list ends with [`TokenKind::EndOfInput`].
pub fn tokenize(source: &str) -> (Vec<Token<'_>>, Vec<ScanError>) { Scanner::new(source).scan_tokens() }
