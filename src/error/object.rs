/// An error found while loading a textual object-code listing.
#[derive(thiserror::Error, Debug)]
#[error("object code line {line}: {type}")]
pub struct ListingError {
	/// The 1-based listing line where the error occurred.
	line:   usize,
	/// The type of listing error.
	r#type: ListingErrorType,
}

impl ListingError {
	pub fn new(line: usize, r#type: ListingErrorType) -> Self { Self { line, r#type } }
}

#[derive(Debug)]
pub enum ListingErrorType {
	/// The line does not start with an integer label.
	MissingLabel,
	/// The leading label does not equal the line's position in the listing.
	LabelMismatch { expected: usize, found: usize },
	/// The mnemonic is not part of the instruction set.
	UnknownOpcode(String),
	/// The opcode requires an operand but none was given.
	MissingOperand(&'static str),
	/// The operand could not be parsed for this opcode.
	BadOperand(String),
	/// The opcode takes no operand but one was given.
	UnexpectedOperand(&'static str),
	/// A jump refers to label 0; labels are numbered from 1.
	ZeroLabel,
}

impl std::fmt::Display for ListingErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ListingErrorType::*;
		match self {
			MissingLabel => write!(f, "expected an integer line label"),
			LabelMismatch { expected, found } => {
				write!(f, "label {found} does not match its line number {expected}")
			}
			UnknownOpcode(mnemonic) => write!(f, "unknown opcode '{mnemonic}'"),
			MissingOperand(mnemonic) => write!(f, "{mnemonic} requires an operand"),
			BadOperand(operand) => write!(f, "invalid operand '{operand}'"),
			UnexpectedOperand(mnemonic) => write!(f, "{mnemonic} takes no operand"),
			ZeroLabel => write!(f, "jump to label 0; labels are numbered from 1"),
		}
	}
}
