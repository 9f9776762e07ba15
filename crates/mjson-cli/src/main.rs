//! `mjson` CLI — validate and canonicalize JSON from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Validate JSON (stdin → exit code + report)
//! echo '{"name":"Alice","age":30}' | mjson check
//!
//! # Canonicalize: parse and re-emit compact text (stdin → stdout)
//! echo '[ 1 , 2 , 3 , ]' | mjson compact
//!
//! # From file to file
//! mjson compact -i data.json -o data.min.json
//!
//! # Show size statistics for the canonical form
//! mjson stats -i data.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::process;

#[derive(Parser)]
#[command(name = "mjson", version, about = "Minimal JSON validator and canonicalizer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the input and report success or the first error
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Parse the input and emit its canonical compact form
    Compact {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show input vs canonical size statistics
    Stats {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { input } => {
            let text = read_input(input.as_deref())?;
            match mjson_core::parse(&text) {
                Ok(_) => println!("OK"),
                Err(err) => {
                    eprintln!("error: {err}");
                    process::exit(1);
                }
            }
        }
        Commands::Compact { input, output } => {
            let text = read_input(input.as_deref())?;
            let value = mjson_core::parse(&text).context("failed to parse input as JSON")?;
            write_output(output.as_deref(), &mjson_core::serialize(&value))?;
        }
        Commands::Stats { input } => {
            let text = read_input(input.as_deref())?;
            let value = mjson_core::parse(&text).context("failed to parse input as JSON")?;
            let canonical = mjson_core::serialize(&value);
            let input_bytes = text.len();
            let canonical_bytes = canonical.len();
            let ratio = if input_bytes > 0 {
                (1.0 - (canonical_bytes as f64 / input_bytes as f64)) * 100.0
            } else {
                0.0
            };
            println!("Input size:      {} bytes", input_bytes);
            println!("Canonical size:  {} bytes", canonical_bytes);
            println!("Reduction:       {:.1}%", ratio);
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
