//! `hackrun` — loads a 16-bit binary program, builds a `Computer`, and
//! ticks it. There is no graphical window or keyboard event loop in this
//! workspace (spec.md §1 treats those as external collaborators), so this
//! driver ticks for a fixed budget and optionally injects one keyboard
//! word before the run, then reports the resulting memory/PC state.

use clap::Parser;
use colored::*;
use hack_core::computer::Computer;
use hack_core::program;
use hack_core::rom::Rom;
use hack_core::signal::Signal;
use hack_core::word::Word;
use std::fs;
use std::path::PathBuf;
use std::process::exit;

const KEYBOARD_ADDRESS: u16 = 24_576;

/// Tick a Hack `Computer` loaded from a binary program file.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the binary program (one 16-character '0'/'1' line per instruction).
    binary: PathBuf,

    /// Number of ticks to run.
    #[arg(short, long, default_value_t = 1000)]
    ticks: u32,

    /// Inject this key code into the keyboard-mapped memory word before running.
    #[arg(short, long)]
    key: Option<u16>,

    /// Print PC and the first few RAM words after every tick.
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
    let source = fs::read_to_string(&cli.binary)
        .map_err(|e| format!("failed to read {}: {}", cli.binary.display(), e))?;
    let words = program::parse(&source).map_err(|e| e.to_string())?;
    log::info!("loaded {} instructions from {}", words.len(), cli.binary.display());

    let mut computer = Computer::new(Rom::new(words));

    if let Some(key) = cli.key {
        computer.write_memory(KEYBOARD_ADDRESS, Word::from_u16(key));
        log::debug!("injected key code {} at the keyboard word", key);
    }

    for tick in 0..cli.ticks {
        computer.tick(Signal::Inactive);
        if cli.verbose {
            println!(
                "{} pc={} m[0]={}",
                format!("tick {tick}:").dimmed(),
                computer.peek_pc().to_u16(),
                computer.peek_memory(0).to_u16(),
            );
        }
    }

    println!("ran {} ticks", cli.ticks.to_string().cyan());
    println!("pc  = {}", computer.peek_pc().to_u16());
    println!("m[0] = {}", computer.peek_memory(0).to_u16());
    Ok(())
}
