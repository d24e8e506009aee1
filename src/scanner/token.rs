use std::fmt::Display;

/// A token produced by the scanner
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
	pub kind:    TokenKind,
	/// Raw slice of the source this token was built from.
	pub lexeme:  &'a str,
	pub literal: Literal<'a>,
	pub line:    usize,
}

impl<'a> Token<'a> {
	pub fn new(kind: TokenKind, lexeme: &'a str, literal: Literal<'a>, line: usize) -> Self {
		Self { kind, lexeme, literal, line }
	}

	pub fn end_of_input(line: usize) -> Self { Self::new(TokenKind::EndOfInput, "", Literal::None, line) }
}

impl Display for Token<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:>4} {:?} {:?}", self.line, self.kind, self.lexeme)
	}
}

/// The different kinds of tokens found in a workout log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
	/// Weight marker `@`.
	Asperand,
	/// Multiplier `*`.
	Asterisk,
	/// Set separator `/`.
	ForwardSlash,
	/// Hyphen `-`, also part of exercise names.
	Hyphen,
	/// New Line Character `\n`.
	Newline,
	/// Empty Character: ` `, `\r`, `\t`.
	WhiteSpace,
	/// Digits with an optional `.` or `,` fractional part.
	Number,
	/// A run of letters that is not a keyword.
	String,
	/// `kg` or `lbs`.
	WeightUnit,
	/// End of input, always the last token.
	EndOfInput,
}

impl TokenKind {
	/// Single character tokens, the lexeme is the character itself.
	pub fn punctuation(c: char) -> Option<Self> {
		Some(match c {
			'@' => TokenKind::Asperand,
			'*' => TokenKind::Asterisk,
			'/' => TokenKind::ForwardSlash,
			'-' => TokenKind::Hyphen,
			'\n' => TokenKind::Newline,
			' ' | '\r' | '\t' => TokenKind::WhiteSpace,
			_ => return None,
		})
	}

	pub fn keyword_or_string(word: &str) -> Self {
		match word {
			"kg" | "lbs" => TokenKind::WeightUnit,
			_ => TokenKind::String,
		}
	}
}

/// Value carried by a token, decided by its kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal<'a> {
	/// Punctuation, whitespace and end of input.
	None,
	/// Parsed `Number`, decimal commas already normalized.
	Number(f64),
	/// Word text of a `String` or `WeightUnit`.
	Text(&'a str),
}

impl<'a> Literal<'a> {
	pub fn as_number(&self) -> Option<f64> {
		match self {
			Literal::Number(n) => Some(*n),
			_ => None,
		}
	}

	pub fn as_text(&self) -> Option<&'a str> {
		match self {
			Literal::Text(s) => Some(*s),
			_ => None,
		}
	}
}
