//! mtxinfo – load a Matrix Market graph, print its summary and the top-left
//! corner of the inverted adjacency matrix.

use clap::Parser;
use mtxbit::{build_from_file, describe, dump_matrix, Params};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "mtxinfo")]
#[command(version = "0.1.0")]
#[command(about = "Load an MTX graph into an inverted bit-packed adjacency matrix")]
struct Cli {
    /// Matrix Market coordinate file
    path: PathBuf,

    /// Rows/columns of the matrix dump
    #[arg(long, default_value_t = Params::default().dump_size)]
    dump_size: usize,

    /// Longest accepted input line in bytes
    #[arg(long, default_value_t = Params::default().max_line_len)]
    max_line_len: usize,

    /// Skip the matrix dump
    #[arg(long)]
    no_dump: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let p = Params { max_line_len: cli.max_line_len, dump_size: cli.dump_size };

    let (graph, _report) = build_from_file(&cli.path, &p)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    describe(&graph, &mut out)?;
    if !cli.no_dump {
        dump_matrix(&graph, p.dump_size, &mut out)?;
    }
    out.flush()?;

    graph.release();
    Ok(())
}

fn main() -> ExitCode {
    let start = Instant::now();
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt().with_env_filter(filter).with_writer(io::stderr).init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let us = start.elapsed().as_micros();
    println!("\n=== Execution Time ===");
    println!(
        "Total execution time: {us} microseconds ({:.3} milliseconds, {:.6} seconds)",
        us as f64 / 1_000.0,
        us as f64 / 1_000_000.0
    );
    ExitCode::SUCCESS
}
