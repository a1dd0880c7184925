//! The file-level driver: reads `.java` sources, runs the pipeline, writes
//! `.obj` listings next to their sources, and feeds object programs to the
//! VM on the real console. Progress goes to stderr; stdout belongs to the
//! executed program.

use std::{fs, io, path::{Path, PathBuf}};

use anyhow::Context;

use crate::{codegen::{CodeGenerator, instruction::{self, Instruction}}, parser::Parser, scanner::Scanner, semantic::SemanticAnalyzer, vm::VirtualMachine};

pub struct Toolchain;

impl Toolchain {
	/// Compile a source file and write the object listing next to it.
	/// Nothing is written unless every stage succeeds.
	pub fn compile_file(&self, path: &Path) -> crate::Result<PathBuf> {
		let source = fs::read_to_string(path).context("failed to open source file")?;
		eprintln!("compiling {}", path.display());
		let object = self.compile(&source)?;

		let object_path = path.with_extension("obj");
		fs::write(&object_path, instruction::write_listing(&object)).context("failed to write object file")?;
		eprintln!("object code written to {}", object_path.display());
		Ok(object_path)
	}

	/// Execute an object file on the console. Accepts either the `.obj`
	/// path or the source path it sits next to.
	pub fn execute_file(&self, path: &Path, trace: bool) -> crate::Result<()> {
		let object_path =
			if path.extension().is_some_and(|e| e == "obj") { path.to_path_buf() } else { path.with_extension("obj") };
		let listing = fs::read_to_string(&object_path)
			.with_context(|| format!("failed to open object file {} (compile first?)", object_path.display()))?;
		let program = instruction::parse_listing(&listing)?;
		eprintln!("executing {} ({} instructions)", object_path.display(), program.len());

		let mut vm = VirtualMachine::new(program);
		vm.set_trace(trace);
		let stdin = io::stdin();
		let stdout = io::stdout();
		vm.run(&mut stdin.lock(), &mut stdout.lock())?;
		Ok(())
	}

	/// Compile a source file, then execute the written object code.
	pub fn run_file(&self, path: &Path, trace: bool) -> crate::Result<()> {
		let object_path = self.compile_file(path)?;
		self.execute_file(&object_path, trace)
	}
}

impl Toolchain {
	/// The compilation pipeline: source text to object program.
	pub fn compile(&self, source: &str) -> crate::Result<Vec<Instruction>> {
		let tokens = Scanner::new(source).scan_tokens()?;
		eprintln!("lexical analysis: {} tokens", tokens.len());

		let (program, declarations) = Parser::new(tokens).parse()?;
		eprintln!("syntax analysis: {} variable(s) declared", declarations.len());

		let symbols = SemanticAnalyzer::new().analyze(&program)?;
		eprintln!("semantic analysis: ok");

		let object = CodeGenerator::new(&symbols).generate(&program)?;
		eprintln!("code generation: {} instruction(s)", object.len());
		Ok(object)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const SOURCE: &str = "public class P { public static void main(String[] args) { \
	                      double a; a = 2 + 3 * 4; System.out.println(a); } }";

	#[test]
	fn compile_produces_a_closed_program() {
		let toolchain = Toolchain;
		let object = toolchain.compile(SOURCE).unwrap();
		assert_eq!(object.first(), Some(&Instruction::Inpp));
		assert_eq!(object.get(1), Some(&Instruction::Alme(1)));
		assert_eq!(object.last(), Some(&Instruction::Para));
	}

	#[test]
	fn compile_rejects_broken_sources() {
		let toolchain = Toolchain;
		assert!(toolchain.compile("public class P {").is_err());
		assert!(toolchain.compile("@").is_err());
		assert!(toolchain
			.compile("public class P { public static void main(String[] args) { y = 1; } }")
			.is_err());
	}
}
