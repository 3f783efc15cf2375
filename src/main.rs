mod classifier;
mod error;
mod format;
mod reporter;
mod scanner;
mod types;

use clap::Parser;
use colored::Colorize;
use error::ScanError;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Scan a directory and output detailed file information in tab-separated format.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the directory to scan
    directory: PathBuf,

    /// Output file path (if not specified, prints to console)
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        // colored only checks stdout; the error goes to stderr
        colored::control::set_override(use_color(
            std::io::stderr().is_terminal(),
            std::env::var_os("NO_COLOR").is_some(),
        ));

        eprintln!("{} {e}", "Error:".red());
        std::process::exit(1);
    }
}

fn run(args: &Args) -> error::Result<()> {
    validate_root(&args.directory)?;

    println!("Scanning directory: {}", args.directory.display());
    let results = scanner::scan_directory(&args.directory);

    println!("Found {} items.", results.len());
    reporter::output_results(&results, args.output.as_deref())
}

fn use_color(stderr_is_terminal: bool, no_color: bool) -> bool {
    stderr_is_terminal && !no_color
}

fn validate_root(dir: &Path) -> error::Result<()> {
    if !dir.exists() {
        return Err(ScanError::NotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }
    Ok(())
}
