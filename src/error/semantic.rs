/// A semantic diagnostic with the line of the offending identifier.
///
/// Unlike scan and parse errors these are collected, not thrown: the
/// analyzer reports every diagnostic of a run at once.
#[derive(thiserror::Error, Debug)]
#[error("line {line}: {type}")]
pub struct SemanticError {
	/// The line number where the error occurred.
	line:   usize,
	/// The type of semantic error.
	r#type: SemanticErrorType,
}

impl SemanticError {
	pub fn new(line: usize, r#type: SemanticErrorType) -> Self { Self { line, r#type } }
}

#[derive(Debug)]
pub enum SemanticErrorType {
	/// An identifier was used without a declaration before it.
	UndeclaredVariable(String),
	/// An identifier appeared in more than one declaration.
	DuplicateDeclaration(String),
}

impl std::fmt::Display for SemanticErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use SemanticErrorType::*;
		match self {
			UndeclaredVariable(name) => {
				write!(f, "variable '{name}' has not been declared")
			}
			DuplicateDeclaration(name) => {
				write!(f, "variable '{name}' is declared twice")
			}
		}
	}
}
