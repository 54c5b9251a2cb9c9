//! MIPS pipeline simulator CLI.
//!
//! Loads a hex-word program image (and optionally a data image), runs it
//! to the stop trap, and prints the final cycle/CPI/bubble/flush report.

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mipsim_core::sim::loader;
use mipsim_core::{Config, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    version,
    about = "MIPS pipeline simulator",
    long_about = "Run a MIPS program image through the pipeline timing model.\n\nImages are text files with one 32-bit hex word per line; '#' starts a comment.\n\nExamples:\n  mipsim program.hex\n  mipsim program.hex --data data.hex --trace\n  mipsim program.hex --config sim.json"
)]
struct Cli {
    /// Program image for instruction memory.
    program: String,

    /// Optional image for data memory.
    #[arg(long)]
    data: Option<String>,

    /// JSON configuration file (memory sizes, start pc).
    #[arg(long)]
    config: Option<String>,

    /// Trace every decoded instruction to stderr.
    #[arg(long)]
    trace: bool,

    /// Dump the register file after every instruction.
    #[arg(long)]
    dump_regs: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
            )
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let mut config = match cli.config {
        Some(path) => Config::from_json_file(&path).unwrap_or_else(|e| {
            eprintln!("mipsim: {e}");
            process::exit(1);
        }),
        None => Config::default(),
    };
    config.dump_regs |= cli.dump_regs;

    let program = loader::load_words_file(&cli.program).unwrap_or_else(|e| {
        eprintln!("mipsim: {}: {e}", cli.program);
        process::exit(1);
    });

    let data = match cli.data {
        Some(path) => loader::load_words_file(&path).unwrap_or_else(|e| {
            eprintln!("mipsim: {path}: {e}");
            process::exit(1);
        }),
        None => Vec::new(),
    };

    let mut sim = Simulator::new(&config, &program, &data);
    match sim.run() {
        Ok(()) => sim.report(),
        Err(e) => {
            eprintln!("mipsim: {e}");
            process::exit(1);
        }
    }
}
