//! Command-line front end for `gotots-typegen`.
//!
//! Resolves the input directory and output file from flags and config
//! files, runs generation, and writes the result once.

pub mod commands;
pub mod config;
pub mod logging;
pub mod output;

use clap::Parser;
use commands::generate::GenerateArgs;

/// Generate TypeScript interfaces from Go structs
#[derive(Parser, Debug)]
#[command(name = "gotots", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
