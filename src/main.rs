use clap::Parser;
use minijavac::{Toolchain, cli::*};

fn main() {
	let toolchain = Toolchain;

	let result = match Cli::parse().mode {
		Mode::Full { path, trace } => toolchain.run_file(&path, trace),
		Mode::Compile { path } => toolchain.compile_file(&path).map(|_| ()),
		Mode::Execute { path, trace } => toolchain.execute_file(&path, trace),
	};

	if let Err(e) = result {
		eprintln!("{e}");
		std::process::exit(1);
	}
}
