use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// CLI arguments
#[derive(Parser)]
#[command(name = "minijavac", about = "A Mini-Java compiler and stack virtual machine")]
pub struct Cli {
	/// Program mode
	#[command(subcommand)]
	pub mode: Mode,
}

/// Program mode
#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Compile a source file and execute the result
	Full {
		path:  PathBuf,
		/// Narrate every executed instruction on stderr
		#[arg(long)]
		trace: bool,
	},
	/// Compile a source file to an adjacent .obj listing
	Compile { path: PathBuf },
	/// Execute an existing object file
	Execute {
		path:  PathBuf,
		/// Narrate every executed instruction on stderr
		#[arg(long)]
		trace: bool,
	},
}
