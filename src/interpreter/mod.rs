//! Workout log interpreter.
//!
//! Walks the token list once and assembles [`Exercise`] records. Dispatch is
//! keyed on the kind of the token just consumed:
//!
//! - **Name**: a `String` or `Hyphen` starts a new exercise, and the name runs
//!   over every following word, hyphen and whitespace token.
//! - **Weight**: `@` followed by an optional number and an optional unit. The
//!   first weight of an exercise fills it in, every further weight clause
//!   starts a new record with the same name.
//! - **Reps**: a `Number` outside a weight clause, joined with the following
//!   numbers, `*` and `/` into one reps text, see [`reps`].
//!
//! ``` text
//! Squats @100kg 3*10 @140lbs 10
//! ├── Squats 100kg 10/10/10
//! └── Squats 140lbs 10
//! ```

mod exercise;
mod reps;

use std::{iter::Peekable, vec::IntoIter};

pub use exercise::{Exercise, Unit, Weight};
pub use reps::MAX_SETS;
use TokenKind::*;

use crate::{
	Config,
	error::interpreter::{InterpretError, InterpretErrorType},
	scanner::{Token, TokenKind},
};

/// Interpreter that turns tokens into exercises.
pub struct Interpreter<'a> {
	/// The tokens to interpret.
	tokens:    Peekable<IntoIter<Token<'a>>>,
	config:    Config,
	exercises: Vec<Exercise>,
	/// Index of the exercise that weight and reps clauses apply to.
	current:   Option<usize>,
	errors:    Vec<InterpretError>,
}

impl<'a> Interpreter<'a> {
	pub fn new(tokens: Vec<Token<'a>>, config: Config) -> Self {
		Self { tokens: tokens.into_iter().peekable(), config, exercises: Vec::new(), current: None, errors: Vec::new() }
	}

	/// Interpret every token up to the end of input. Problems never stop the
	/// pass, they are returned next to the exercises.
	pub fn interpret(mut self) -> (Vec<Exercise>, Vec<InterpretError>) {
		while let Some(token) = self.tokens.next() {
			log::trace!("interpret {token}");
			match token.kind {
				EndOfInput => break,
				String | Hyphen => self.exercise_name(token),
				Asperand => self.weight(token.line),
				Number => self.reps(token),
				WhiteSpace | Newline => {}
				Asterisk | ForwardSlash | WeightUnit => {
					self.error(token.line, InterpretErrorType::UnexpectedToken(token.lexeme.to_string()))
				}
			}
		}
		log::debug!("interpreted {} exercises with {} errors", self.exercises.len(), self.errors.len());
		(self.exercises, self.errors)
	}

	/// Consume the following tokens while they match `predicate`, joining
	/// their lexemes onto `text`.
	fn join_while(&mut self, mut text: std::string::String, predicate: fn(TokenKind) -> bool) -> std::string::String {
		while let Some(token) = self.tokens.next_if(|t| predicate(t.kind)) {
			text.push_str(token.lexeme);
		}
		text
	}

	fn exercise_name(&mut self, first: Token<'a>) {
		let name = self.join_while(first.lexeme.to_string(), |kind| matches!(kind, String | Hyphen | WhiteSpace));
		self.push(Exercise::new(name.trim(), Weight::default(), Vec::new()));
	}

	fn weight(&mut self, line: usize) {
		let value = self.tokens.next_if(|t| t.kind == Number).and_then(|t| t.literal.as_number()).unwrap_or_default();
		let unit = match self.tokens.next_if(|t| t.kind == WeightUnit) {
			Some(token) => token.literal.as_text().and_then(|s| s.parse().ok()).unwrap_or(self.config.default_weight_unit),
			None => self.config.default_weight_unit,
		};
		let weight = Weight::new(value, unit);

		let Some(current) = self.current_exercise() else {
			self.error(line, InterpretErrorType::MissingExercise);
			return;
		};
		if current.weight.is_unset() {
			current.weight = weight;
		} else {
			// Another weight for the same exercise, e.g. `Bench @90kg 8/8 @95kg 8/8`.
			let name = current.name.clone();
			self.push(Exercise::new(name, weight, Vec::new()));
		}
	}

	fn reps(&mut self, first: Token<'a>) {
		let text = self.join_while(first.lexeme.to_string(), |kind| matches!(kind, Number | ForwardSlash | Asterisk));
		if self.current.is_none() {
			self.error(first.line, InterpretErrorType::MissingExercise);
			return;
		}

		let mut problems = Vec::new();
		let reps = reps::parse_reps(&text, &mut problems);
		for problem in problems {
			self.error(first.line, problem);
		}
		if let (Some(reps), Some(current)) = (reps, self.current_exercise()) {
			current.reps = reps;
		}
	}

	fn push(&mut self, exercise: Exercise) {
		self.exercises.push(exercise);
		self.current = Some(self.exercises.len() - 1);
	}

	fn current_exercise(&mut self) -> Option<&mut Exercise> { self.current.and_then(|i| self.exercises.get_mut(i)) }

	fn error(&mut self, line: usize, r#type: InterpretErrorType) {
		let error = InterpretError::new(line, r#type);
		log::warn!("Interpret error: {error}");
		self.errors.push(error);
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::scanner::Scanner;

	fn interpret(input: &str, config: Config) -> (Vec<Exercise>, Vec<InterpretError>) {
		let (tokens, _) = Scanner::new(input).scan_tokens();
		Interpreter::new(tokens, config).interpret()
	}

	fn exercise(name: &str, value: f64, unit: Unit, reps: &[u32]) -> Exercise {
		Exercise::new(name, Weight::new(value, unit), reps.to_vec())
	}

	#[test]
	fn second_weight_splits_exercise() {
		let (exercises, errors) = interpret("Squats @100kg 3*10 @140lbs 10", Config::default());
		assert_eq!(exercises, vec![
			exercise("Squats", 100.0, Unit::Metric, &[10, 10, 10]),
			exercise("Squats", 140.0, Unit::Imperial, &[10]),
		]);
		assert!(errors.is_empty());
	}

	#[test]
	fn repeated_weights_share_name() {
		let (exercises, _) = interpret("Bench @90kg 8/8 @95kg 8/8 @100kg 6", Config::default());
		assert_eq!(exercises, vec![
			exercise("Bench", 90.0, Unit::Metric, &[8, 8]),
			exercise("Bench", 95.0, Unit::Metric, &[8, 8]),
			exercise("Bench", 100.0, Unit::Metric, &[6]),
		]);
	}

	#[test]
	fn default_unit_fallback() {
		let (exercises, _) = interpret("Row @50 5/5", Config::new(Unit::Metric));
		assert_eq!(exercises, vec![exercise("Row", 50.0, Unit::Metric, &[5, 5])]);
		assert_eq!(exercises[0].weight.unit.to_string(), "kg");

		let (exercises, _) = interpret("Row @50 5/5", Config::new(Unit::Imperial));
		assert_eq!(exercises, vec![exercise("Row", 50.0, Unit::Imperial, &[5, 5])]);

		let (exercises, _) = interpret("Row @50kg 5/5", Config::new(Unit::Imperial));
		assert_eq!(exercises[0].weight.unit, Unit::Metric);
	}

	#[test]
	fn names_span_words_and_hyphens() {
		let (exercises, _) = interpret("  Dumbbell-Rows @20 8/8/\nRomanian Dead Lift\t@60,5kg 3*8", Config::default());
		assert_eq!(exercises, vec![
			exercise("Dumbbell-Rows", 20.0, Unit::Metric, &[8, 8]),
			exercise("Romanian Dead Lift", 60.5, Unit::Metric, &[8, 8, 8]),
		]);
	}

	#[test]
	fn name_without_weight_or_reps() {
		let (exercises, errors) = interpret("Plank\nDips 12/10/8", Config::default());
		assert_eq!(exercises, vec![
			Exercise::new("Plank", Weight::default(), vec![]),
			Exercise::new("Dips", Weight::default(), vec![12, 10, 8]),
		]);
		assert!(errors.is_empty());
	}

	#[test]
	fn reps_before_weight() {
		let (exercises, _) = interpret("Curl 10/10 @12kg", Config::default());
		assert_eq!(exercises, vec![exercise("Curl", 12.0, Unit::Metric, &[10, 10])]);
	}

	#[test]
	fn later_reps_replace_earlier() {
		let (exercises, _) = interpret("Curl @12kg 10/10 8", Config::default());
		assert_eq!(exercises, vec![exercise("Curl", 12.0, Unit::Metric, &[8])]);
	}

	#[test]
	fn zero_weight_counts_as_unset() {
		let (exercises, _) = interpret("Bench @0kg 5 @50kg 5/5", Config::default());
		assert_eq!(exercises, vec![exercise("Bench", 50.0, Unit::Metric, &[5, 5])]);
	}

	#[test]
	fn weight_marker_without_number() {
		let (exercises, errors) = interpret("Bench @ 5", Config::new(Unit::Imperial));
		assert_eq!(exercises, vec![exercise("Bench", 0.0, Unit::Imperial, &[5])]);
		assert!(errors.is_empty());
	}

	#[test]
	fn clauses_without_exercise() {
		let (exercises, errors) = interpret("@90kg 5/5\nBench 5", Config::default());
		assert_eq!(exercises, vec![Exercise::new("Bench", Weight::default(), vec![5])]);
		assert_eq!(errors, vec![
			InterpretError::new(1, InterpretErrorType::MissingExercise),
			InterpretError::new(1, InterpretErrorType::MissingExercise),
		]);
	}

	#[test]
	fn stray_tokens_are_reported() {
		let (exercises, errors) = interpret("Bench * @90kg 5 kg", Config::default());
		assert_eq!(exercises, vec![exercise("Bench", 90.0, Unit::Metric, &[5])]);
		assert_eq!(errors, vec![
			InterpretError::new(1, InterpretErrorType::UnexpectedToken("*".into())),
			InterpretError::new(1, InterpretErrorType::UnexpectedToken("kg".into())),
		]);
	}

	#[test]
	fn unrecognized_reps_keep_previous() {
		let (exercises, errors) = interpret("Bench @90kg 5/5\n\nBench 3*3*3", Config::default());
		assert_eq!(exercises, vec![
			exercise("Bench", 90.0, Unit::Metric, &[5, 5]),
			Exercise::new("Bench", Weight::default(), vec![]),
		]);
		assert_eq!(errors, vec![InterpretError::new(3, InterpretErrorType::UnrecognizedReps("3*3*3".into()))]);
	}

	#[test]
	fn empty_token_stream() {
		let (exercises, errors) = Interpreter::new(vec![Token::end_of_input(1)], Config::default()).interpret();
		assert!(exercises.is_empty());
		assert!(errors.is_empty());
	}
}
