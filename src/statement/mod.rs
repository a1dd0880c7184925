//! Statement nodes of the Mini-Java AST.
//!
//! There is no place in the grammar where both an expression and a
//! statement are allowed: the operand of `System.out.println` is always an
//! expression, the body of `while` is always a sequence of statements.

use crate::{parser::expression::{Condition, Expression}, scanner::Token};

/// A whole Mini-Java program: the mandatory class/`main` wrapper around a
/// single block of statements.
#[derive(Debug, PartialEq)]
pub struct Program {
	/// The class name, recorded but not otherwise validated.
	pub class_name: Token,
	/// The name of `main`'s `String[]` parameter, recorded only.
	pub args_name:  Token,
	/// The statements of `main`.
	pub body:       Vec<Statement>,
}

/// A statement in the Mini-Java language.
#[derive(Debug, PartialEq)]
pub enum Statement {
	/// A `double` declaration of one or more names.
	VarDecl { names: Vec<Token> },
	/// An assignment of an expression to a variable.
	Assign { target: Token, value: Expression },
	/// An assignment whose right side is `lerDouble()`.
	Read { target: Token },
	/// A `System.out.println` statement.
	Print(Expression),
	If {
		condition:   Condition,
		then_branch: Vec<Statement>,
		else_branch: Option<Vec<Statement>>,
	},
	While {
		condition: Condition,
		body:      Vec<Statement>,
	},
}

#[cfg(test)]
mod tests {
	use crate::{parser::Parser, scanner::Scanner, statement::Statement};

	fn body(source: &str) -> Vec<Statement> {
		let program = format!("public class T {{ public static void main(String[] args) {{ {source} }} }}");
		let tokens = Scanner::new(&program).scan_tokens().unwrap();
		let (program, _) = Parser::new(tokens).parse().unwrap();
		program.body
	}

	#[test]
	fn statement_counts() {
		assert_eq!(body("").len(), 0);
		assert_eq!(body("double a;").len(), 1);
		assert_eq!(body("double a; a = 1; System.out.println(a);").len(), 3);
	}

	#[test]
	fn statement_kinds() {
		assert!(matches!(body("double a;")[0], Statement::VarDecl { .. }));
		assert!(matches!(body("double a; a = 1;")[1], Statement::Assign { .. }));
		assert!(matches!(body("double a; a = lerDouble();")[1], Statement::Read { .. }));
		assert!(matches!(body("double a; System.out.println(a);")[1], Statement::Print(_)));
		assert!(matches!(body("double a; if (a > 0) { a = 0; }")[1], Statement::If { .. }));
		assert!(matches!(body("double a; while (a > 0) { a = 0; }")[1], Statement::While { .. }));
	}

	#[test]
	fn declaration_lists() {
		match &body("double a, b, c;")[0] {
			Statement::VarDecl { names } => {
				let names: Vec<&str> = names.iter().map(|t| t.lexeme.as_str()).collect();
				assert_eq!(names, ["a", "b", "c"]);
			}
			other => panic!("expected a declaration, got {other:?}"),
		}
	}

	#[test]
	fn else_branches() {
		match &body("double a; if (a > 0) { a = 0; } else { a = 1; }")[1] {
			Statement::If { else_branch, .. } => assert!(else_branch.is_some()),
			other => panic!("expected an if, got {other:?}"),
		}
		match &body("double a; if (a > 0) { a = 0; }")[1] {
			Statement::If { else_branch, .. } => assert!(else_branch.is_none()),
			other => panic!("expected an if, got {other:?}"),
		}
	}
}
