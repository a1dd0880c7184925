/// A runtime fault: an abnormal halt of the VM, as opposed to `PARA`.
#[derive(thiserror::Error, Debug)]
#[error("fault at instruction {pc}: {type}")]
pub struct VmFault {
	/// Program counter of the faulting instruction.
	pub pc:     usize,
	/// The kind of fault.
	pub r#type: VmFaultType,
}

impl VmFault {
	pub fn new(pc: usize, r#type: VmFaultType) -> Self { Self { pc, r#type } }
}

#[derive(Debug)]
pub enum VmFaultType {
	/// An operator needed more operands than the stack holds.
	StackUnderflow,
	/// A load or store addressed memory outside the allocated range.
	MemoryOutOfRange(usize),
	/// The divisor of `DIVI` was zero.
	DivisionByZero,
	/// A jump target is not an instruction of the program.
	JumpOutOfRange(usize),
	/// `LEIT` could not parse the input line as a number.
	InvalidInput(String),
	/// `LEIT` hit the end of the input stream.
	EndOfInput,
	/// Execution ran past the last instruction without reaching `PARA`.
	MissingHalt,
	/// Reading or writing the VM's console streams failed.
	Io(std::io::Error),
}

impl std::fmt::Display for VmFaultType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use VmFaultType::*;
		match self {
			StackUnderflow => write!(f, "stack underflow"),
			MemoryOutOfRange(address) => write!(f, "memory address {address} out of range"),
			DivisionByZero => write!(f, "division by zero"),
			JumpOutOfRange(target) => write!(f, "jump to nonexistent instruction {target}"),
			InvalidInput(line) => write!(f, "cannot read '{line}' as a number"),
			EndOfInput => write!(f, "end of input while reading a number"),
			MissingHalt => write!(f, "program ran past its last instruction"),
			Io(e) => write!(f, "i/o error: {e}"),
		}
	}
}
