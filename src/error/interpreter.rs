/// Non fatal problems found while interpreting tokens. The offending clause or
/// field is dropped and interpretation carries on.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("line {line}: {type}")]
pub struct InterpretError {
	line:   usize,
	r#type: InterpretErrorType,
}

impl InterpretError {
	pub fn new(line: usize, r#type: InterpretErrorType) -> Self { Self { line, r#type } }

	pub fn line(&self) -> usize { self.line }

	pub fn r#type(&self) -> &InterpretErrorType { &self.r#type }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InterpretErrorType {
	/// A rep count that does not fit an integer, only that field is skipped
	InvalidRepField(String),
	/// Reps text in neither `N*M` nor `N/N/N` notation
	UnrecognizedReps(String),
	/// Multiplier above [`crate::MAX_SETS`]
	TooManySets(u32),
	/// Weight or reps before any exercise name
	MissingExercise,
	/// Token that does not start a name, weight or reps clause
	UnexpectedToken(String),
}

impl std::fmt::Display for InterpretErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use InterpretErrorType::*;
		match self {
			InvalidRepField(field) => write!(f, "Invalid rep count \"{field}\""),
			UnrecognizedReps(text) => write!(f, "Unrecognized reps \"{text}\""),
			TooManySets(sets) => write!(f, "Too many sets ({sets})"),
			MissingExercise => write!(f, "Weight or reps without an exercise name"),
			UnexpectedToken(lexeme) => write!(f, "Unexpected token {lexeme:?}"),
		}
	}
}
