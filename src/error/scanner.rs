#[derive(thiserror::Error, Debug)]
pub enum ScannerError {
	#[error("{0}")]
	InternalError(#[from] anyhow::Error),
	#[error(transparent)]
	ScanError(#[from] ScanError),
}

/// A lexical error with the position of the offending character.
#[derive(thiserror::Error, Debug)]
#[error("line {line}, column {column}: {type}")]
pub struct ScanError {
	line:   usize,
	column: usize,
	r#type: ScanErrorType,
}

impl ScanError {
	pub fn new(line: usize, column: usize, r#type: ScanErrorType) -> Self { Self { line, column, r#type } }
}

#[derive(Debug)]
pub enum ScanErrorType {
	UnexpectedCharacter(char),
}

impl std::fmt::Display for ScanErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ScanErrorType::*;
		match self {
			UnexpectedCharacter(c) => {
				write!(f, "unexpected character '{c}'")
			}
		}
	}
}
