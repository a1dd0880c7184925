/// Errors that can occur during parsing.
#[derive(thiserror::Error, Debug)]
pub enum ParserError {
	/// Internal compiler error, should never happen
	#[error("{0}")]
	InternalError(#[from] anyhow::Error),
	/// Errors encountered during parsing
	#[error(transparent)]
	ParseError(#[from] ParseError),
}

/// A specific parsing error with line number and type.
#[derive(thiserror::Error, Debug)]
#[error("line {line}: {type}")]
pub struct ParseError {
	/// The line number where the error occurred.
	line:   usize,
	/// The type of parsing error.
	r#type: ParseErrorType,
}

impl ParseError {
	pub fn new(line: usize, r#type: ParseErrorType) -> Self { Self { line, r#type } }
}

/// Types of parsing errors.
#[derive(Debug)]
pub enum ParseErrorType {
	/// A specific token was required by the grammar.
	Expected { construct: &'static str, found: String },
	/// A statement had to start here.
	ExpectStatement(String),
	/// An expression factor had to start here.
	ExpectFactor(String),
	/// A relational operator had to follow the left side of a condition.
	ExpectRelation(String),
	/// Tokens remained after the closing brace of the class.
	TrailingToken(String),
}

impl std::fmt::Display for ParseErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ParseErrorType::*;
		match self {
			Expected { construct, found } => write!(f, "expected {construct}, found '{found}'"),
			ExpectStatement(found) => write!(f, "expected a statement, found '{found}'"),
			ExpectFactor(found) => write!(f, "expected a number, a variable or '(', found '{found}'"),
			ExpectRelation(found) => write!(f, "expected a relational operator, found '{found}'"),
			TrailingToken(found) => write!(f, "unexpected token '{found}' after the end of the program"),
		}
	}
}
