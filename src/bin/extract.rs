use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use mapcrafter_textures_lib::init_logging;
use mapcrafter_textures_lib::services::archive::ZipAssetArchive;
use mapcrafter_textures_lib::services::config::{Profile, RuleTable};
use mapcrafter_textures_lib::services::extractor::extract_textures;
use mapcrafter_textures_lib::services::postprocess::{
    apply_fixups, ImageMagick, PostProcessor, DEFAULT_PROGRAM,
};

/// Extracts from a Minecraft Jar file the textures required for mapcrafter.
#[derive(Parser, Debug)]
#[command(name = "extract", version)]
struct Args {
    /// Force overwriting already existing textures
    #[arg(short, long)]
    force: bool,

    /// Rule table JSON file, takes precedence over --profile
    #[arg(long, value_name = "FILE")]
    rules: Option<PathBuf>,

    /// Built-in rule table
    #[arg(long, value_enum, default_value_t = ProfileArg::Default)]
    profile: ProfileArg,

    /// Image tool used for the texture fix-ups
    #[arg(long, env = "MAPCRAFTER_IMAGE_TOOL", default_value = DEFAULT_PROGRAM)]
    image_tool: String,

    /// Skip the texture fix-ups
    #[arg(long)]
    no_fixups: bool,

    /// Print the selected rule table as JSON and exit
    #[arg(long)]
    dump_rules: bool,

    /// The Minecraft Jar file to use
    #[arg(value_name = "JARFILE", required_unless_present = "dump_rules")]
    jarfile: Option<PathBuf>,

    /// The output texture directory
    #[arg(value_name = "OUTDIR", required_unless_present = "dump_rules")]
    outdir: Option<PathBuf>,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum ProfileArg {
    Default,
    Entities,
}

impl From<ProfileArg> for Profile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Default => Profile::Default,
            ProfileArg::Entities => Profile::Entities,
        }
    }
}

fn main() -> Result<ExitCode> {
    init_logging();
    let args = Args::parse();

    let table = match &args.rules {
        Some(path) => RuleTable::load(path)
            .with_context(|| format!("Failed to load rule table {}", path.display()))?,
        None => Profile::from(args.profile).table(),
    };

    if args.dump_rules {
        println!("{}", table.to_json_pretty()?);
        return Ok(ExitCode::SUCCESS);
    }

    let (Some(jarfile), Some(outdir)) = (args.jarfile, args.outdir) else {
        bail!("both <JARFILE> and <OUTDIR> are required");
    };

    let mut archive = ZipAssetArchive::open(&jarfile)
        .with_context(|| format!("Failed to open {}", jarfile.display()))?;

    let report = extract_textures(&mut archive, &table, &outdir, args.force)
        .context("Failed to prepare the output directory")?;
    print!("{}", report.render_summary());

    if !args.no_fixups {
        let mut tool = ImageMagick::new(args.image_tool);
        let fixes = apply_fixups(&mut tool, &table.fixups, &outdir);
        let warnings = fixes.render_summary(tool.program());
        if !warnings.is_empty() {
            println!();
            print!("{warnings}");
        }
    }

    if report.has_failures() {
        eprintln!("Some textures could not be written, see the summary above.");
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
