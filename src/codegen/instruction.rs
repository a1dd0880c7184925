//! The instruction set of the stack machine and its textual object format.
//!
//! An object file is line oriented: each line is an integer label, a
//! mnemonic and at most one operand, whitespace separated. Labels number
//! the lines consecutively from 1 and are the targets of `DSVF`/`DSVI`.
//! Blank lines and lines starting with `#` are ignored by the loader.
//!
//! In memory, jump operands are 0-based instruction indices; the writer
//! and the loader convert to and from the 1-based labels of the listing.

use crate::error::object::{ListingError, ListingErrorType};

/// One instruction of the stack machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
	/// Program start marker; does nothing.
	Inpp,
	/// Allocate `n` zeroed memory cells.
	Alme(usize),
	/// Push a literal.
	Crct(f64),
	/// Push the value of memory cell `a`.
	Crvl(usize),
	/// Pop into memory cell `a`.
	Armz(usize),
	/// Read one number from the console and push it.
	Leit,
	/// Pop and print with a trailing newline.
	Impr,
	/// Pop b, pop a, push a + b.
	Soma,
	/// Pop b, pop a, push a - b.
	Subt,
	/// Pop b, pop a, push a * b.
	Mult,
	/// Pop b, pop a, push a / b; faults when b is zero.
	Divi,
	/// Negate the top of the stack.
	Inve,
	/// Pop b, pop a, push 1.0 if a == b else 0.0.
	Cpig,
	/// Pop b, pop a, push 1.0 if a != b else 0.0.
	Cdes,
	/// Pop b, pop a, push 1.0 if a > b else 0.0.
	Cpma,
	/// Pop b, pop a, push 1.0 if a < b else 0.0.
	Cpme,
	/// Pop b, pop a, push 1.0 if a >= b else 0.0.
	Cpmai,
	/// Pop b, pop a, push 1.0 if a <= b else 0.0.
	Cpmei,
	/// Pop; jump to the target if the popped value is 0.0.
	Dsvf(usize),
	/// Jump to the target unconditionally.
	Dsvi(usize),
	/// Halt.
	Para,
}

impl Instruction {
	pub fn mnemonic(&self) -> &'static str {
		use Instruction::*;
		match self {
			Inpp => "INPP",
			Alme(_) => "ALME",
			Crct(_) => "CRCT",
			Crvl(_) => "CRVL",
			Armz(_) => "ARMZ",
			Leit => "LEIT",
			Impr => "IMPR",
			Soma => "SOMA",
			Subt => "SUBT",
			Mult => "MULT",
			Divi => "DIVI",
			Inve => "INVE",
			Cpig => "CPIG",
			Cdes => "CDES",
			Cpma => "CPMA",
			Cpme => "CPME",
			Cpmai => "CPMAI",
			Cpmei => "CPMEI",
			Dsvf(_) => "DSVF",
			Dsvi(_) => "DSVI",
			Para => "PARA",
		}
	}
}

impl std::fmt::Display for Instruction {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use Instruction::*;
		match self {
			Alme(n) => write!(f, "ALME {n}"),
			Crct(value) => write!(f, "CRCT {value}"),
			Crvl(address) => write!(f, "CRVL {address}"),
			Armz(address) => write!(f, "ARMZ {address}"),
			// Jumps print the 1-based line label of the listing.
			Dsvf(target) => write!(f, "DSVF {}", target + 1),
			Dsvi(target) => write!(f, "DSVI {}", target + 1),
			other => write!(f, "{}", other.mnemonic()),
		}
	}
}

/// Render a program as a labeled object-code listing.
pub fn write_listing(program: &[Instruction]) -> String {
	let mut listing = String::new();
	for (index, instruction) in program.iter().enumerate() {
		listing.push_str(&format!("{} {}\n", index + 1, instruction));
	}
	listing
}

/// Load a program from an object-code listing.
pub fn parse_listing(listing: &str) -> Result<Vec<Instruction>, ListingError> {
	let mut program = Vec::new();
	for (line_number, line) in listing.lines().enumerate() {
		let line_number = line_number + 1;
		let line = line.trim();
		if line.is_empty() || line.starts_with('#') {
			continue;
		}
		program.push(parse_line(line, line_number, program.len() + 1)?);
	}
	Ok(program)
}

fn parse_line(line: &str, line_number: usize, expected_label: usize) -> Result<Instruction, ListingError> {
	use Instruction::*;

	let error = |r#type| ListingError::new(line_number, r#type);
	let mut fields = line.split_whitespace();

	let label: usize = fields
		.next()
		.and_then(|field| field.parse().ok())
		.ok_or_else(|| error(ListingErrorType::MissingLabel))?;
	if label != expected_label {
		return Err(error(ListingErrorType::LabelMismatch { expected: expected_label, found: label }));
	}

	let mnemonic = fields.next().ok_or_else(|| error(ListingErrorType::UnknownOpcode(String::new())))?;
	let operand = fields.next();

	let unsigned = |mnemonic: &'static str| -> Result<usize, ListingError> {
		let field = operand.ok_or_else(|| error(ListingErrorType::MissingOperand(mnemonic)))?;
		field.parse().map_err(|_| error(ListingErrorType::BadOperand(field.to_string())))
	};
	let target = |mnemonic: &'static str| -> Result<usize, ListingError> {
		match unsigned(mnemonic)? {
			0 => Err(error(ListingErrorType::ZeroLabel)),
			label => Ok(label - 1),
		}
	};
	let bare = |instruction: Instruction| -> Result<Instruction, ListingError> {
		match operand {
			Some(_) => Err(error(ListingErrorType::UnexpectedOperand(instruction.mnemonic()))),
			None => Ok(instruction),
		}
	};

	let instruction = match mnemonic {
		"INPP" => bare(Inpp)?,
		"ALME" => Alme(unsigned("ALME")?),
		"CRCT" => {
			let field = operand.ok_or_else(|| error(ListingErrorType::MissingOperand("CRCT")))?;
			Crct(field.parse().map_err(|_| error(ListingErrorType::BadOperand(field.to_string())))?)
		}
		"CRVL" => Crvl(unsigned("CRVL")?),
		"ARMZ" => Armz(unsigned("ARMZ")?),
		"LEIT" => bare(Leit)?,
		"IMPR" => bare(Impr)?,
		"SOMA" => bare(Soma)?,
		"SUBT" => bare(Subt)?,
		"MULT" => bare(Mult)?,
		"DIVI" => bare(Divi)?,
		"INVE" => bare(Inve)?,
		"CPIG" => bare(Cpig)?,
		"CDES" => bare(Cdes)?,
		"CPMA" => bare(Cpma)?,
		"CPME" => bare(Cpme)?,
		"CPMAI" => bare(Cpmai)?,
		"CPMEI" => bare(Cpmei)?,
		"DSVF" => Dsvf(target("DSVF")?),
		"DSVI" => Dsvi(target("DSVI")?),
		"PARA" => bare(Para)?,
		unknown => return Err(error(ListingErrorType::UnknownOpcode(unknown.to_string()))),
	};

	if fields.next().is_some() {
		return Err(error(ListingErrorType::BadOperand(line.to_string())));
	}
	Ok(instruction)
}
