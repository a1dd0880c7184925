//! # minijavac
//!
//! A compiler and virtual machine for Mini-Java: a strict subset of Java
//! with a single `double` type, a single `main`, assignment, console I/O,
//! arithmetic and relational expressions, `if`/`else` and `while`.
//!
//! The toolchain is a straight pipeline; each stage consumes its whole
//! input and produces a complete artifact before the next begins:
//!
//! ``` markdown
//! source text --Scanner--> tokens --Parser--> AST + declarations
//!     --SemanticAnalyzer--> symbol table
//!     --CodeGenerator--> object program --VirtualMachine--> stdout
//! ```
//!
//! The object program targets a tiny stack machine: expressions become
//! reverse-Polish pushes and operators, control flow becomes `DSVF`
//! (branch if the popped value is zero) and `DSVI` (unconditional branch),
//! variables live in a memory array indexed by the addresses the symbol
//! table assigned in declaration order. A compiled program for
//!
//! ``` java
//! public class Soma {
//!     public static void main(String[] args) {
//!         double a;
//!         a = 2 + 3 * 4;
//!         System.out.println(a);
//!     }
//! }
//! ```
//!
//! is written as a line-labeled textual listing:
//!
//! ``` text
//! 1 INPP
//! 2 ALME 1
//! 3 CRCT 2
//! 4 CRCT 3
//! 5 CRCT 4
//! 6 MULT
//! 7 SOMA
//! 8 ARMZ 0
//! 9 CRVL 0
//! 10 IMPR
//! 11 PARA
//! ```
//!
//! Compilation errors come in three kinds, one per front-end stage:
//! lexical (unknown character, with position), syntactic (first mismatch,
//! with the expected construct), and semantic (undeclared or doubly
//! declared names, collected and reported together). The VM distinguishes
//! the orderly `PARA` halt from faults: stack underflow, bad memory
//! index, division by zero, malformed input and unresolved jumps.

pub mod cli;
pub mod codegen;
pub mod error;
pub mod parser;
pub mod scanner;
pub mod semantic;
pub mod statement;
pub mod symbols;
pub mod toolchain;
pub mod vm;

pub use error::MiniJavaError;
pub use toolchain::Toolchain;

pub type Result<T> = std::result::Result<T, MiniJavaError>;
