//! Turns a raw workout log into tokens.
//!
//! The scanner makes a single pass over the characters and never backtracks.
//! Whitespace and newlines are kept as tokens because exercise names are made
//! of several words, and the interpreter needs them to glue a name back
//! together.
//!
//! Scanning never stops on bad input. A character that belongs to no token
//! class is recorded as a [`ScanError`] and skipped, so a log line with a
//! stray `$` still produces every other token.
mod token;

use std::{iter::Peekable, str::CharIndices, sync::LazyLock};

use regex::Regex;
pub use token::*;

use crate::error::scanner::{ScanError, ScanErrorType};

/// A single letter or combining mark, marks may follow a letter inside a word.
/// Stored as Option, a failed compile falls back to `char::is_alphabetic`.
static WORD_CHAR: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[\p{L}\p{M}]$").ok());

/// A scanner for workout log source text
pub struct Scanner<'a> {
	/// User input source text
	source:      &'a str,
	/// User input source text iterator
	source_iter: Peekable<CharIndices<'a>>,
	/// Points at the beginning of the current lexeme
	start:       usize,
	/// Points past the character currently being considered
	cursor:      usize,
	/// Line of the current lexeme, bumped after each newline token
	line:        usize,
}

impl<'a> Scanner<'a> {
	pub fn new(source: &'a str) -> Self {
		let source_iter = source.char_indices().peekable();

		Self { source, source_iter, start: 0, cursor: 0, line: 1 }
	}

	/// Scan all tokens from the source text. The token list always ends with
	/// exactly one [`TokenKind::EndOfInput`].
	pub fn scan_tokens(mut self) -> (Vec<Token<'a>>, Vec<ScanError>) {
		let mut tokens = Vec::new();
		let mut errors = Vec::new();
		while let Some(&(index, _)) = self.source_iter.peek() {
			// We are at the beginning of the next lexeme.
			self.start = index;
			self.cursor = self.start;
			if let Err(e) = self.scan_token(&mut tokens) {
				log::warn!("Scan error: {e}");
				errors.push(e);
			}
		}
		tokens.push(Token::end_of_input(self.line));
		log::debug!("scanned {} tokens with {} errors", tokens.len(), errors.len());
		(tokens, errors)
	}

	/// Scan a single token from the source text
	fn scan_token(&mut self, tokens: &mut Vec<Token<'a>>) -> Result<(), ScanError> {
		let Some(next_char) = self.advance() else {
			return Ok(());
		};

		let (kind, literal) = if let Some(kind) = TokenKind::punctuation(next_char) {
			(kind, Literal::None)
		} else if is_word_char(next_char) {
			self.word()
		} else if next_char.is_ascii_digit() {
			(TokenKind::Number, self.number()?)
		} else {
			return Err(ScanError::new(self.line, ScanErrorType::UnexpectedCharacter(next_char)));
		};

		let lexeme = &self.source[self.start..self.cursor];
		tokens.push(Token::new(kind, lexeme, literal, self.line));
		if kind == TokenKind::Newline {
			self.line += 1;
		}

		Ok(())
	}

	/// Advance to the next character
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().map(|&(_, c)| c) }

	/// Peek the second character ahead
	fn peek_second(&mut self) -> Option<char> {
		let mut it = self.source_iter.clone();
		it.next()?;
		it.peek().map(|&(_, c)| c)
	}

	/// Scan a word, `kg` and `lbs` are weight units
	fn word(&mut self) -> (TokenKind, Literal<'a>) {
		while self.peek().is_some_and(is_word_char) {
			self.advance();
		}
		let text = &self.source[self.start..self.cursor];
		(TokenKind::keyword_or_string(text), Literal::Text(text))
	}

	/// Scan a number, `87,5` and `87.5` are the same number
	fn number(&mut self) -> Result<Literal<'a>, ScanError> {
		self.digits();

		// Look for a fractional part, a trailing separator is left alone.
		if matches!(self.peek(), Some('.' | ',')) && self.peek_second().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
			self.digits();
		}

		let text = &self.source[self.start..self.cursor];
		text.replacen(',', ".", 1)
			.parse()
			.map(Literal::Number)
			.map_err(|_| ScanError::new(self.line, ScanErrorType::InvalidNumber(text.to_string())))
	}

	fn digits(&mut self) {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}
	}
}

fn is_word_char(c: char) -> bool {
	match WORD_CHAR.as_ref() {
		Some(word_char) => word_char.is_match(c.encode_utf8(&mut [0; 4])),
		None => c.is_alphabetic(),
	}
}
