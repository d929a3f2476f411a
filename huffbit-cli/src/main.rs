//! huffbit CLI
//!
//! Inspect canonical Huffman codes, round-trip files through them, and
//! exercise the bit-stream helpers from the command line.

mod commands;

use clap::{Parser, Subcommand};
use commands::{CodesOptions, TestOptions, cmd_codes, cmd_digest, cmd_test, cmd_utf8};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "HUFFBIT_LOG";

#[derive(Parser)]
#[command(name = "huffbit")]
#[command(
    author,
    version,
    about = "Bit streams and canonical Huffman codes - Pure Rust"
)]
#[command(long_about = "
huffbit builds canonical, optionally length-limited Huffman codes over the
bytes of a file and checks that they round-trip through the bit stream.

Logging goes to stderr; set HUFFBIT_LOG (e.g. HUFFBIT_LOG=trace) to change
the filter.

Examples:
  huffbit codes book.txt
  huffbit codes book.txt --limit 8 --json
  huffbit test book.txt --limit 15 --lsb
  huffbit digest a.bin b.bin
  huffbit utf8 65 233 8364 2147483647
")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the Huffman code for the bytes of a file
    #[command(alias = "c")]
    Codes {
        /// Input file
        file: PathBuf,

        /// Maximum code length in bits (0 = unlimited)
        #[arg(short, long, default_value_t = 0)]
        limit: usize,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Encode a file with its own Huffman code and verify it decodes
    #[command(alias = "t")]
    Test {
        /// Input file
        file: PathBuf,

        /// Maximum code length in bits (0 = unlimited)
        #[arg(short, long, default_value_t = 0)]
        limit: usize,

        /// Pack bits least significant first (DEFLATE order)
        #[arg(long)]
        lsb: bool,
    },

    /// Print MD5 digests of files
    #[command(alias = "d")]
    Digest {
        /// Files to digest
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Show the extended UTF-8 encoding of integers
    Utf8 {
        /// Values to encode (decimal, or hex with 0x prefix)
        #[arg(required = true, value_parser = parse_u32)]
        values: Vec<u32>,
    },
}

fn parse_u32(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid value '{}': {}", s, e))
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Codes { file, limit, json } => cmd_codes(&file, &CodesOptions { limit, json }),
        Commands::Test { file, limit, lsb } => cmd_test(
            &file,
            &TestOptions {
                limit,
                lsb,
                verbose: cli.verbose,
            },
        ),
        Commands::Digest { files } => cmd_digest(&files),
        Commands::Utf8 { values } => cmd_utf8(&values),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
