//! NFL8 CLI
//!
//! Inflates files into self-describing NFL8 frames and deflates them back.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{cmd_deflate, cmd_inflate, cmd_info, cmd_test};
use nfl8::Level;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nfl8")]
#[command(author, version, about = "Reversible bit inflation with fixed and LFSR-driven padding")]
#[command(long_about = "
NFL8 pads every byte of a file with zero filler bits and stores the result in
an NFL8 frame that records how to undo it.

Levels: noop, fixed:N, partial:N, full:N (N = filler bits per byte, 1-7)

Examples:
  nfl8 inflate secret.bin
  nfl8 inflate secret.bin -l full:3 -s 0xC0FFEE -o secret.padded
  nfl8 deflate secret.bin.nfl8
  nfl8 info secret.bin.nfl8 --json
  nfl8 test secret.bin.nfl8
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inflate a file into an NFL8 frame
    #[command(alias = "i")]
    Inflate {
        /// File to inflate
        input: PathBuf,

        /// Output file (default: <INPUT>.nfl8)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Inflate level (noop, fixed:N, partial:N, full:N)
        #[arg(short, long, default_value_t = Level::default())]
        level: Level,

        /// LFSR seed, decimal or 0x-prefixed hex (default: from the clock)
        #[arg(short, long, value_parser = utils::parse_seed)]
        seed: Option<u32>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Recover the original file from an NFL8 frame
    #[command(alias = "d")]
    Deflate {
        /// NFL8 frame to deflate
        input: PathBuf,

        /// Output file (default: <INPUT> without .nfl8, or <INPUT>.out)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip the CRC-32 check
        #[arg(long)]
        no_verify: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the header of an NFL8 frame
    Info {
        /// NFL8 frame to inspect
        input: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Check that an NFL8 frame deflates cleanly
    #[command(alias = "t")]
    Test {
        /// NFL8 frame to test
        input: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Inflate {
            input,
            output,
            level,
            seed,
            verbose,
        } => cmd_inflate(&input, output.as_deref(), level, seed, verbose),
        Commands::Deflate {
            input,
            output,
            no_verify,
            verbose,
        } => cmd_deflate(&input, output.as_deref(), !no_verify, verbose),
        Commands::Info { input, json } => cmd_info(&input, json),
        Commands::Test { input, verbose } => cmd_test(&input, verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_inflate_args() {
        let cli = Cli::try_parse_from(["nfl8", "inflate", "in.bin", "-l", "full:3", "-s", "0x10"])
            .unwrap();
        match cli.command {
            Commands::Inflate { level, seed, .. } => {
                assert_eq!(level, Level::random_full(3).unwrap());
                assert_eq!(seed, Some(16));
            }
            _ => panic!("expected inflate"),
        }
    }

    #[test]
    fn test_default_level() {
        let cli = Cli::try_parse_from(["nfl8", "inflate", "in.bin"]).unwrap();
        match cli.command {
            Commands::Inflate { level, seed, .. } => {
                assert_eq!(level, Level::default());
                assert_eq!(seed, None);
            }
            _ => panic!("expected inflate"),
        }
    }

    #[test]
    fn test_rejects_bad_level() {
        assert!(Cli::try_parse_from(["nfl8", "inflate", "in.bin", "-l", "fixed:9"]).is_err());
    }
}
