//! Code generation: lowering the AST to a linear program for the stack
//! machine.
//!
//! Expressions are emitted in post order, which is exactly reverse-Polish
//! evaluation on the VM's stack. Control flow lowers to conditional and
//! unconditional jumps whose targets are back-patched: a jump is emitted
//! with a placeholder operand and patched as soon as its target index is
//! known. Every reserved jump is patched on every path, so no placeholder
//! survives into the returned program.

pub mod instruction;

use anyhow::anyhow;

use crate::{MiniJavaError, codegen::instruction::Instruction, parser::expression::{Condition, Expression}, scanner::{Token, TokenType}, statement::{Program, Statement}, symbols::SymbolTable};

/// Placeholder operand of a not-yet-patched jump. Deliberately out of
/// range: if one ever escaped it would fault instead of executing.
const UNPATCHED: usize = usize::MAX;

pub struct CodeGenerator<'a> {
	symbols: &'a SymbolTable,
	code:    Vec<Instruction>,
}

impl<'a> CodeGenerator<'a> {
	pub fn new(symbols: &'a SymbolTable) -> Self { Self { symbols, code: Vec::new() } }

	/// Lower a semantically valid program to its object program:
	/// `INPP; ALME n` prologue, statements, `PARA` epilogue.
	pub fn generate(mut self, program: &Program) -> Result<Vec<Instruction>, MiniJavaError> {
		self.emit(Instruction::Inpp);
		self.emit(Instruction::Alme(self.symbols.len()));
		self.block(&program.body)?;
		self.emit(Instruction::Para);
		Ok(self.code)
	}

	fn block(&mut self, statements: &[Statement]) -> anyhow::Result<()> {
		for statement in statements {
			self.statement(statement)?;
		}
		Ok(())
	}

	fn statement(&mut self, statement: &Statement) -> anyhow::Result<()> {
		match statement {
			// Declarations have no code of their own; their space is part
			// of the ALME prologue.
			Statement::VarDecl { .. } => {}
			Statement::Assign { target, value } => {
				self.expression(value)?;
				let address = self.address(target)?;
				self.emit(Instruction::Armz(address));
			}
			Statement::Read { target } => {
				self.emit(Instruction::Leit);
				let address = self.address(target)?;
				self.emit(Instruction::Armz(address));
			}
			Statement::Print(value) => {
				self.expression(value)?;
				self.emit(Instruction::Impr);
			}
			Statement::If { condition, then_branch, else_branch } => {
				self.condition(condition)?;
				let to_else = self.emit(Instruction::Dsvf(UNPATCHED));
				self.block(then_branch)?;
				match else_branch {
					Some(else_branch) => {
						let to_end = self.emit(Instruction::Dsvi(UNPATCHED));
						self.patch_jump(to_else)?;
						self.block(else_branch)?;
						self.patch_jump(to_end)?;
					}
					None => self.patch_jump(to_else)?,
				}
			}
			Statement::While { condition, body } => {
				let top = self.code.len();
				self.condition(condition)?;
				let to_end = self.emit(Instruction::Dsvf(UNPATCHED));
				self.block(body)?;
				self.emit(Instruction::Dsvi(top));
				self.patch_jump(to_end)?;
			}
		}
		Ok(())
	}

	fn condition(&mut self, condition: &Condition) -> anyhow::Result<()> {
		self.expression(&condition.left)?;
		self.expression(&condition.right)?;
		let comparison = match condition.operator.r#type {
			TokenType::EqualEqual => Instruction::Cpig,
			TokenType::BangEqual => Instruction::Cdes,
			TokenType::Greater => Instruction::Cpma,
			TokenType::Less => Instruction::Cpme,
			TokenType::GreaterEqual => Instruction::Cpmai,
			TokenType::LessEqual => Instruction::Cpmei,
			ref other => return Err(anyhow!("not a relational operator: {other:?}")),
		};
		self.emit(comparison);
		Ok(())
	}

	fn expression(&mut self, expression: &Expression) -> anyhow::Result<()> {
		match expression {
			Expression::Number(value) => {
				self.emit(Instruction::Crct(*value));
			}
			Expression::Variable(token) => {
				let address = self.address(token)?;
				self.emit(Instruction::Crvl(address));
			}
			Expression::Unary { right, .. } => {
				self.expression(right)?;
				self.emit(Instruction::Inve);
			}
			Expression::Binary { left, operator, right } => {
				self.expression(left)?;
				self.expression(right)?;
				let arithmetic = match operator.r#type {
					TokenType::Plus => Instruction::Soma,
					TokenType::Minus => Instruction::Subt,
					TokenType::Star => Instruction::Mult,
					TokenType::Slash => Instruction::Divi,
					ref other => return Err(anyhow!("not an arithmetic operator: {other:?}")),
				};
				self.emit(arithmetic);
			}
		}
		Ok(())
	}

	/// Append an instruction and return its index.
	fn emit(&mut self, instruction: Instruction) -> usize {
		self.code.push(instruction);
		self.code.len() - 1
	}

	/// Point the jump at `at` to the next instruction to be emitted.
	fn patch_jump(&mut self, at: usize) -> anyhow::Result<()> {
		let target = self.code.len();
		match self.code.get_mut(at) {
			Some(Instruction::Dsvf(operand)) | Some(Instruction::Dsvi(operand)) => {
				*operand = target;
				Ok(())
			}
			_ => Err(anyhow!("no jump to patch at instruction {at}")),
		}
	}

	/// Memory address of a declared variable. Semantic analysis runs
	/// first, so a miss here is an internal error.
	fn address(&self, token: &Token) -> anyhow::Result<usize> {
		self.symbols.address(&token.lexeme).ok_or_else(|| anyhow!("no address for variable '{}'", token.lexeme))
	}
}
