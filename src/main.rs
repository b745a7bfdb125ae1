//! stitchkit CLI - digitize vector design files into machine stitch files.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use stitchkit::{
    digitize, encode_dst, encode_exp, init_logging, DesignFile, StitchStats, StitchStyle,
};

#[derive(Parser)]
#[command(name = "stitchkit")]
#[command(about = "Embroidery digitizing toolkit", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Digitize a design file into a stitch file
    Digitize {
        /// Input design JSON (layers + config)
        input: PathBuf,
        /// Output stitch file (format from extension: .dst, .exp)
        output: PathBuf,
        /// Design label for the DST header (default: output file stem)
        #[arg(short, long)]
        label: Option<String>,
        /// Override the configured stitch type (running, satin, tatami)
        #[arg(long)]
        stitch_type: Option<String>,
        /// Override the configured stitch density in mm
        #[arg(long)]
        density: Option<f64>,
        /// Override the configured pull compensation in mm
        #[arg(long)]
        pull_compensation: Option<f64>,
        /// Disable the structural underlay
        #[arg(long)]
        no_underlay: bool,
    },
    /// Summarize the stitches a design file produces
    Info {
        /// Input design JSON (layers + config)
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Digitize {
            input,
            output,
            label,
            stitch_type,
            density,
            pull_compensation,
            no_underlay,
        } => {
            let mut design = load_design(&input)?;
            if let Some(style) = stitch_type {
                design.config.stitch_type =
                    StitchStyle::from_str(&style).map_err(|e| anyhow::anyhow!(e))?;
            }
            if let Some(density) = density {
                design.config.density_mm = density;
            }
            if let Some(pull) = pull_compensation {
                design.config.pull_compensation_mm = pull;
            }
            if no_underlay {
                design.config.enable_underlay = false;
            }

            let stitches = digitize(&design.layers, &design.config)?;

            let extension = output
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("")
                .to_lowercase();
            let bytes = match extension.as_str() {
                "dst" => {
                    let label = label.unwrap_or_else(|| {
                        output
                            .file_stem()
                            .and_then(|s| s.to_str())
                            .unwrap_or("DESIGN")
                            .to_uppercase()
                    });
                    encode_dst(&stitches, &label)?
                }
                "exp" => encode_exp(&stitches)?,
                other => bail!("unsupported output format: .{}", other),
            };
            std::fs::write(&output, &bytes)
                .with_context(|| format!("failed to write {}", output.display()))?;

            let stats = StitchStats::from_stitches(&stitches);
            println!(
                "{}: {} stitches, {} jumps, {} color changes, {:.1} x {:.1} mm",
                output.display(),
                stats.penetrations,
                stats.jumps,
                stats.color_changes,
                stats.width(),
                stats.height()
            );
        }
        Commands::Info { input } => {
            let design = load_design(&input)?;
            let stitches = digitize(&design.layers, &design.config)?;
            let stats = StitchStats::from_stitches(&stitches);

            println!("Layers:        {}", design.layers.len());
            println!("Stitch type:   {}", design.config.stitch_type);
            println!("Records:       {}", stats.total);
            println!("Face stitches: {}", stats.face_stitches);
            println!("Penetrations:  {}", stats.penetrations);
            println!("Jumps:         {}", stats.jumps);
            println!("Trims:         {}", stats.trims);
            println!("Color changes: {}", stats.color_changes);
            println!(
                "Extent:        {:.1} x {:.1} mm",
                stats.width(),
                stats.height()
            );
        }
    }

    Ok(())
}

fn load_design(path: &Path) -> Result<DesignFile> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("failed to parse design file {}", path.display()))
}
