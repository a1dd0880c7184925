//! Semantic analysis for Mini-Java.
//!
//! With a single type and a single scope the only rules to enforce are
//! about names: every identifier that is assigned, read into or evaluated
//! must have a declaration before it, and no name may be declared twice.
//! Diagnostics are collected in source order and reported together; the
//! pipeline aborts before code generation if any exist.

use crate::{MiniJavaError, error::semantic::{SemanticError, SemanticErrorType}, parser::expression::{Condition, Expression}, scanner::Token, statement::{Program, Statement}, symbols::SymbolTable};

pub struct SemanticAnalyzer {
	table:       SymbolTable,
	diagnostics: Vec<SemanticError>,
}

impl SemanticAnalyzer {
	pub fn new() -> Self { Self { table: SymbolTable::new(), diagnostics: Vec::new() } }

	/// Walk the program; on success the finished symbol table is handed to
	/// the code generator.
	pub fn analyze(mut self, program: &Program) -> Result<SymbolTable, MiniJavaError> {
		self.block(&program.body);
		if self.diagnostics.is_empty() {
			Ok(self.table)
		} else {
			Err(MiniJavaError::SemanticErrors(self.diagnostics))
		}
	}

	fn block(&mut self, statements: &[Statement]) {
		for statement in statements {
			self.statement(statement);
		}
	}

	fn statement(&mut self, statement: &Statement) {
		match statement {
			Statement::VarDecl { names } => {
				for name in names {
					if self.table.declare(&name.lexeme).is_none() {
						self.diagnostics.push(SemanticError::new(
							name.line,
							SemanticErrorType::DuplicateDeclaration(name.lexeme.clone()),
						));
					}
				}
			}
			Statement::Assign { target, value } => {
				self.check_declared(target);
				self.expression(value);
			}
			Statement::Read { target } => self.check_declared(target),
			Statement::Print(value) => self.expression(value),
			Statement::If { condition, then_branch, else_branch } => {
				self.condition(condition);
				self.block(then_branch);
				if let Some(else_branch) = else_branch {
					self.block(else_branch);
				}
			}
			Statement::While { condition, body } => {
				self.condition(condition);
				self.block(body);
			}
		}
	}

	fn condition(&mut self, condition: &Condition) {
		self.expression(&condition.left);
		self.expression(&condition.right);
	}

	fn expression(&mut self, expression: &Expression) {
		match expression {
			Expression::Number(_) => {}
			Expression::Variable(token) => self.check_declared(token),
			Expression::Unary { right, .. } => self.expression(right),
			Expression::Binary { left, right, .. } => {
				self.expression(left);
				self.expression(right);
			}
		}
	}

	fn check_declared(&mut self, token: &Token) {
		if !self.table.contains(&token.lexeme) {
			self.diagnostics
				.push(SemanticError::new(token.line, SemanticErrorType::UndeclaredVariable(token.lexeme.clone())));
		}
	}
}

impl Default for SemanticAnalyzer {
	fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{parser::Parser, scanner::Scanner};

	fn analyze(body: &str) -> Result<SymbolTable, MiniJavaError> {
		let source = format!("public class T {{ public static void main(String[] args) {{ {body} }} }}");
		let tokens = Scanner::new(&source).scan_tokens().unwrap();
		let (program, _) = Parser::new(tokens).parse().unwrap();
		SemanticAnalyzer::new().analyze(&program)
	}

	#[test]
	fn accepts_declared_names() {
		let table = analyze("double a, b; a = 1; b = a + 1; System.out.println(b);").unwrap();
		assert_eq!(table.address("a"), Some(0));
		assert_eq!(table.address("b"), Some(1));
	}

	#[test]
	fn declarations_inside_blocks_share_the_scope() {
		let table = analyze("double a; a = 3; while (a > 0) { double b; b = a; a = b - 1; }").unwrap();
		assert_eq!(table.len(), 2);
		assert_eq!(table.address("b"), Some(1));
	}

	#[test]
	fn rejects_undeclared_names() {
		assert!(analyze("y = 1;").is_err());
		assert!(analyze("double a; a = y;").is_err());
		assert!(analyze("double a; System.out.println(a + y);").is_err());
		assert!(analyze("y = lerDouble();").is_err());
		assert!(analyze("double a; if (y > 0) { a = 1; }").is_err());
	}

	#[test]
	fn rejects_use_before_declaration() {
		assert!(analyze("a = 1; double a;").is_err());
	}

	#[test]
	fn rejects_duplicate_declarations() {
		assert!(analyze("double a; double a;").is_err());
		assert!(analyze("double a, a;").is_err());
		assert!(analyze("double a; while (a > 0) { double a; }").is_err());
	}

	#[test]
	fn collects_every_diagnostic_in_order() {
		let error = analyze("x = 1;\ndouble a;\ndouble a;\ny = 2;").unwrap_err();
		match error {
			MiniJavaError::SemanticErrors(diagnostics) => {
				assert_eq!(diagnostics.len(), 3);
				let rendered: Vec<std::string::String> = diagnostics.iter().map(|d| d.to_string()).collect();
				assert!(rendered[0].contains("'x'"));
				assert!(rendered[1].contains("'a'"));
				assert!(rendered[2].contains("'y'"));
			}
			other => panic!("expected semantic errors, got {other}"),
		}
	}
}
