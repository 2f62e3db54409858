use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mapcrafter_textures_lib::init_logging;
use mapcrafter_textures_lib::services::codegen::{generate, Collation, OutputMode};

/// Lists the block textures in a directory and prints the C++ texture code.
#[derive(Parser, Debug)]
#[command(name = "gen_texture_code", version)]
struct Args {
    /// Member ordering
    #[arg(long, value_enum, default_value_t = CollationArg::Bytewise)]
    collation: CollationArg,

    /// Fragment to print
    #[arg(value_enum)]
    mode: ModeArg,

    /// Directory with the block textures
    textures_dir: PathBuf,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum ModeArg {
    Header,
    Source,
    Both,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum CollationArg {
    Bytewise,
    IgnoreCase,
}

impl From<ModeArg> for OutputMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Header => OutputMode::Header,
            ModeArg::Source => OutputMode::Source,
            ModeArg::Both => OutputMode::Both,
        }
    }
}

impl From<CollationArg> for Collation {
    fn from(arg: CollationArg) -> Self {
        match arg {
            CollationArg::Bytewise => Collation::Bytewise,
            CollationArg::IgnoreCase => Collation::IgnoreCase,
        }
    }
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let code = generate(&args.textures_dir, args.mode.into(), args.collation.into())
        .with_context(|| format!("Failed to scan {}", args.textures_dir.display()))?;
    print!("{code}");

    Ok(())
}
