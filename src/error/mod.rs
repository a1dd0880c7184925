pub mod object;
pub mod parser;
pub mod scanner;
pub mod semantic;
pub mod vm;

use crate::error::{object::ListingError, parser::ParseError, scanner::ScanError, semantic::SemanticError, vm::VmFault};

/// MiniJavaError is the top-level error type for the compiler and the VM.
#[derive(thiserror::Error, Debug)]
pub enum MiniJavaError {
	/// Internal compiler error, should never happen
	#[error("internal compiler error: {0}")]
	InternalError(#[from] anyhow::Error),
	#[error("{0}")]
	ScanError(#[from] ScanError),
	#[error("{0}")]
	ParseError(#[from] ParseError),
	/// All semantic diagnostics of a run, reported together
	#[error("semantic analysis failed:\n{}", display_semantic_errors(.0))]
	SemanticErrors(Vec<SemanticError>),
	#[error("{0}")]
	ListingError(#[from] ListingError),
	#[error("{0}")]
	Fault(#[from] VmFault),
}

fn display_semantic_errors(errors: &[SemanticError]) -> String {
	errors.iter().map(|e| e.to_string()).collect::<Vec<String>>().join("\n")
}
