//! End-to-end pipeline tests: source text through the compiler, the object
//! listing, and the VM.

use std::{fs, io::Cursor, path::PathBuf};

use minijavac::{MiniJavaError, Toolchain, codegen::instruction::{self, Instruction}, error::vm::VmFaultType, vm::VirtualMachine};

fn wrap(body: &str) -> String {
	format!("public class T {{ public static void main(String[] args) {{ {body} }} }}")
}

fn run_object(object: Vec<Instruction>, input: &str) -> Result<String, MiniJavaError> {
	let mut vm = VirtualMachine::new(object);
	let mut output = Vec::new();
	vm.run(&mut Cursor::new(input.as_bytes()), &mut output)?;
	Ok(String::from_utf8(output).unwrap())
}

fn compile_and_run(body: &str, input: &str) -> Result<String, MiniJavaError> {
	let object = Toolchain.compile(&wrap(body))?;
	run_object(object, input)
}

#[test]
fn arithmetic_program_prints_fourteen() {
	let output = compile_and_run("double a; a = 2 + 3 * 4; System.out.println(a);", "").unwrap();
	assert_eq!(output, "14.0\n");
}

#[test]
fn read_program_doubles_its_input() {
	let output =
		compile_and_run("double x; x = lerDouble(); System.out.println(x * 2);", "3.5\n").unwrap();
	assert_eq!(output, "7.0\n");
}

#[test]
fn if_else_takes_the_right_branch() {
	let body = "double a, b, c; a = 1; b = 4; \
	            if (a > b) { c = a - b; } else { c = b - a; } \
	            System.out.println(c);";
	assert_eq!(compile_and_run(body, "").unwrap(), "3.0\n");
}

#[test]
fn while_loop_counts_down() {
	let body = "double cont; cont = 3; \
	            while (cont > 0) { System.out.println(cont); cont = cont - 1; }";
	assert_eq!(compile_and_run(body, "").unwrap(), "3.0\n2.0\n1.0\n");
}

#[test]
fn nonstrict_comparisons_execute() {
	let body = "double a; a = 2; \
	            if (a >= 2) { System.out.println(1); } else { System.out.println(0); } \
	            if (a <= 1) { System.out.println(1); } else { System.out.println(0); }";
	assert_eq!(compile_and_run(body, "").unwrap(), "1.0\n0.0\n");
}

#[test]
fn factorial_of_five() {
	let body = "double n, f; n = 5; f = 1; \
	            while (n > 0) { f = f * n; n = n - 1; } \
	            System.out.println(f);";
	assert_eq!(compile_and_run(body, "").unwrap(), "120.0\n");
}

#[test]
fn undeclared_identifier_is_a_semantic_error() {
	let error = Toolchain.compile(&wrap("y = 1;")).unwrap_err();
	assert!(matches!(error, MiniJavaError::SemanticErrors(_)));
	assert!(error.to_string().contains("'y'"));
}

#[test]
fn division_by_zero_faults_at_the_divi() {
	let object = Toolchain.compile(&wrap("double a; a = 1 / 0;")).unwrap();
	// 0 INPP  1 ALME 1  2 CRCT 1  3 CRCT 0  4 DIVI  5 ARMZ 0  6 PARA
	match run_object(object, "").unwrap_err() {
		MiniJavaError::Fault(fault) => {
			assert_eq!(fault.pc, 4);
			assert!(matches!(fault.r#type, VmFaultType::DivisionByZero));
		}
		other => panic!("expected a VM fault, got {other}"),
	}
}

#[test]
fn object_listing_round_trips_through_text() {
	let body = "double cont; cont = 3; \
	            while (cont > 0) { System.out.println(cont); cont = cont - 1; }";
	let object = Toolchain.compile(&wrap(body)).unwrap();
	let listing = instruction::write_listing(&object);
	let reloaded = instruction::parse_listing(&listing).unwrap();
	assert_eq!(reloaded, object);
	// The reloaded program behaves exactly like the in-memory one.
	assert_eq!(run_object(reloaded, "").unwrap(), run_object(object, "").unwrap());
}

fn fixture(name: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("programs").join(name)
}

fn scratch_copy(name: &str) -> PathBuf {
	let directory = std::env::temp_dir().join(format!("minijavac-{}-{name}", std::process::id()));
	fs::create_dir_all(&directory).unwrap();
	let copy = directory.join(name);
	fs::copy(fixture(name), &copy).unwrap();
	copy
}

#[test]
fn compile_file_writes_an_adjacent_object_file() {
	let source = scratch_copy("sum.java");
	let object_path = Toolchain.compile_file(&source).unwrap();
	assert_eq!(object_path, source.with_extension("obj"));

	let listing = fs::read_to_string(&object_path).unwrap();
	let program = instruction::parse_listing(&listing).unwrap();
	assert_eq!(run_object(program, "").unwrap(), "14.0\n");
}

#[test]
fn countdown_fixture_runs() {
	let source = scratch_copy("countdown.java");
	let object_path = Toolchain.compile_file(&source).unwrap();
	let program = instruction::parse_listing(&fs::read_to_string(object_path).unwrap()).unwrap();
	assert_eq!(run_object(program, "").unwrap(), "3.0\n2.0\n1.0\n");
}

#[test]
fn average_fixture_reads_the_console() {
	let source = scratch_copy("average.java");
	let object_path = Toolchain.compile_file(&source).unwrap();
	let program = instruction::parse_listing(&fs::read_to_string(object_path).unwrap()).unwrap();
	assert_eq!(run_object(program, "3\n4\n").unwrap(), "3.5\n");
}

#[test]
fn no_object_file_is_written_for_a_broken_source() {
	let directory = std::env::temp_dir().join(format!("minijavac-{}-broken", std::process::id()));
	fs::create_dir_all(&directory).unwrap();
	let source = directory.join("broken.java");
	fs::write(&source, wrap("y = 1;")).unwrap();

	assert!(Toolchain.compile_file(&source).is_err());
	assert!(!source.with_extension("obj").exists());
}
