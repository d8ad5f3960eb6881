//! Generate command - TypeScript interfaces from a directory of Go structs.

use crate::config::GototsConfig;
use crate::output::write_output;
use clap::Args;
use gotots_typegen::{Error, GenerateConfig, generate_from_dir};
use std::path::{Path, PathBuf};

/// Generate command arguments
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Input directory containing Go files
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Output TypeScript file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file (defaults to .gotots/config.toml layered over the global one)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Run the generate command
pub fn run(args: GenerateArgs) -> i32 {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    match execute(&args, &cwd) {
        Ok(config) => {
            println!(
                "Generated {} from {}",
                config.output_file().display(),
                config.input_dir().display()
            );
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

/// Resolve settings, generate, and write the output once.
pub fn execute(args: &GenerateArgs, root: &Path) -> Result<GenerateConfig, Error> {
    let file_config = match &args.config {
        Some(path) => GototsConfig::load_explicit(path)?,
        None => GototsConfig::load(root),
    };
    let config = resolve(args, file_config)?;

    let ts = generate_from_dir(&config)?;
    write_output(&config, &ts)?;
    Ok(config)
}

/// Flags override config values; anything still unset is an error.
fn resolve(args: &GenerateArgs, file_config: GototsConfig) -> Result<GenerateConfig, Error> {
    let dir = args
        .dir
        .clone()
        .or(file_config.generate.dir)
        .unwrap_or_default();
    let output = args
        .output
        .clone()
        .or(file_config.generate.output)
        .unwrap_or_default();
    GenerateConfig::new(dir, output)
}
