//! `hackasm` — reads a Hack assembly source file and writes the 16-bit
//! binary program text to stdout or a file.

use clap::Parser;
use colored::*;
use hack_core::asm::{assemble, AssembleError};
use std::fs;
use std::path::PathBuf;
use std::process::exit;

/// Assemble Hack assembly source into the 16-bit binary program format.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the .asm source file.
    source: PathBuf,

    /// Path to write the assembled binary. Defaults to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print line/instruction counts as they assemble.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(message) = run(&cli) {
        eprintln!("{} {}", "error:".red().bold(), message);
        exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let source = fs::read_to_string(&cli.source)
        .map_err(|e| format!("failed to read {}: {}", cli.source.display(), e))?;
    log::info!("read {} bytes from {}", source.len(), cli.source.display());

    let words = assemble(&source).map_err(|err| describe_error(&err))?;
    log::info!("assembled {} instructions", words.len());
    if cli.verbose {
        println!("{} instructions", words.len().to_string().cyan());
    }

    let binary = hack_core::program::render(&words);
    match &cli.output {
        Some(path) => {
            fs::write(path, &binary).map_err(|e| format!("failed to write {}: {}", path.display(), e))?;
            log::info!("wrote binary to {}", path.display());
        }
        None => print!("{}", binary),
    }
    Ok(())
}

fn describe_error(err: &AssembleError) -> String {
    format!("{}", err)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn describe_error_includes_line_context() {
        let err = AssembleError::UnknownComp {
            line: 3,
            comp: "Q".to_string(),
        };
        let message = describe_error(&err);
        assert!(message.contains("line 3"));
        assert!(message.contains("Q"));
    }
}
