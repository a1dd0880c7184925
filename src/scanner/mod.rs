//! Lexical analysis for Mini-Java.
//!
//! The scanner walks the source characters once and groups them into tokens.
//! Whitespace and `//` comments are skipped; everything else must match one
//! of the token kinds in [`TokenType`] or scanning fails with the offending
//! character and its position.
//!
//! `System.out.println` is a single fixed lexeme. The language has no `.`
//! token, so the scanner tries that lexeme before single-character dispatch;
//! a `.` anywhere else (outside a number) is a lexical error. Reserved words
//! are recognized by scanning a full identifier first and reclassifying it,
//! so `whilex` stays an identifier.

mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenType::*;
use anyhow::Context;
pub use token::*;

use crate::{MiniJavaError, error::scanner::{ScanError, ScanErrorType, ScannerError}};

/// A scanner for Mini-Java source code
pub struct Scanner<'a> {
	/// User input source code
	source:       &'a str,
	/// User input source code iterator
	source_iter:  Peekable<CharIndices<'a>>,
	/// Points at the beginning of the current lexeme
	start:        usize,
	/// Points at the character currently being considered
	cursor:       usize,
	/// Tracks what source line `cursor` is on
	line:         usize,
	/// Characters consumed on the current line
	column:       usize,
	/// Line of the lexeme being scanned
	token_line:   usize,
	/// Column (1-based) of the lexeme being scanned
	token_column: usize,
}

impl<'a> Scanner<'a> {
	pub fn new(source: &'a str) -> Self {
		let source_iter = source.char_indices().peekable();

		Self { source, source_iter, start: 0, cursor: 0, line: 1, column: 0, token_line: 1, token_column: 1 }
	}

	/// Scan all tokens from the source code, ending with an `Eof` token
	pub fn scan_tokens(mut self) -> Result<Vec<Token>, MiniJavaError> {
		let mut tokens = Vec::new();
		while let Some(&(index, _)) = self.source_iter.peek() {
			// We are at the beginning of the next lexeme.
			self.start = index;
			self.cursor = self.start;
			self.token_line = self.line;
			self.token_column = self.column + 1;
			match self.scan_token() {
				Ok(Some(token)) => tokens.push(token),
				Ok(None) => {}
				Err(ScannerError::InternalError(e)) => return Err(e.into()),
				Err(ScannerError::ScanError(e)) => return Err(e.into()),
			}
		}
		tokens.push(Token::new(Eof, "", self.line, self.column + 1));
		Ok(tokens)
	}

	/// Scan a single token; trivia (whitespace, comments) yields `None`
	fn scan_token(&mut self) -> Result<Option<Token>, ScannerError> {
		if self.match_fixed("System.out.println") {
			return Ok(Some(self.token(Println)));
		}

		let next_char = self.advance().context("unexpected end of input")?;
		let r#type = match next_char {
			'{' => LeftBrace,
			'}' => RightBrace,
			'(' => LeftParen,
			')' => RightParen,
			'[' => LeftBracket,
			']' => RightBracket,
			';' => Semicolon,
			',' => Comma,
			'+' => Plus,
			'-' => Minus,
			'*' => Star,
			'=' => if self.match_next('=') { EqualEqual } else { Equal },
			'>' => if self.match_next('=') { GreaterEqual } else { Greater },
			'<' => if self.match_next('=') { LessEqual } else { Less },
			'!' => {
				if self.match_next('=') {
					BangEqual
				} else {
					return Err(self.unexpected('!'));
				}
			}
			'/' => {
				if self.match_next('/') {
					while self.peek().is_some_and(|c| c != '\n') {
						self.advance();
					}
					return Ok(None);
				}
				Slash
			}
			' ' | '\r' | '\t' => return Ok(None),
			'\n' => {
				self.line += 1;
				self.column = 0;
				return Ok(None);
			}
			c if c.is_ascii_digit() => self.number()?,
			c if c.is_ascii_alphabetic() || c == '_' => self.identifier(),
			c => return Err(self.unexpected(c)),
		};

		Ok(Some(self.token(r#type)))
	}

	fn token(&self, r#type: TokenType) -> Token {
		let lexeme = &self.source[self.start..self.cursor];
		Token::new(r#type, lexeme, self.token_line, self.token_column)
	}

	fn unexpected(&self, c: char) -> ScannerError {
		ScanError::new(self.token_line, self.token_column, ScanErrorType::UnexpectedCharacter(c)).into()
	}

	/// Consume `fixed` if the source continues with it verbatim
	fn match_fixed(&mut self, fixed: &str) -> bool {
		if !self.source[self.start..].starts_with(fixed) {
			return false;
		}
		for _ in fixed.chars() {
			self.advance();
		}
		true
	}

	/// Match the next character if it is the expected one
	fn match_next(&mut self, expected: char) -> bool {
		matches!(self.peek(), Some(c) if c == expected && { self.advance(); true })
	}

	/// Advance to the next character
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		self.column += 1;
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

	/// Scan a number literal: digits with an optional fractional part
	fn number(&mut self) -> Result<TokenType, ScannerError> {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}

		// Only consume '.' when a digit follows, so `1.` leaves the dot behind.
		if self.peek() == Some('.') && self.peek_second().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
			while self.peek().is_some_and(|c| c.is_ascii_digit()) {
				self.advance();
			}
		}

		let s = &self.source[self.start..self.cursor];
		Ok(Number(s.parse().context("failed to parse number literal")?))
	}

	/// Scan an identifier or keyword
	fn identifier(&mut self) -> TokenType {
		while self.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_') {
			self.advance();
		}
		let text = &self.source[self.start..self.cursor];
		TokenType::keyword_or_identifier(text)
	}
}
