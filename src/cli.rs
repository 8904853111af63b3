//! CLI argument parsing for the pseudoglossa binary.

use clap::Parser;

/// Interpreter & C transpiler for Greek instructional pseudocode.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the source file.
    #[arg(index = 1)]
    pub file: std::path::PathBuf,

    /// Emit diagnostic tracing on the standard error stream.
    #[arg(long)]
    pub debug: bool,

    /// Emit C source on standard output instead of executing.
    #[arg(long)]
    pub transpile: bool,
}

impl Cli {
    pub fn init() -> Self {
        Cli::parse()
    }
}
