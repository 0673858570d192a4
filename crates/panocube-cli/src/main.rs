//! panocube CLI - equirectangular panorama to cubemap converter
//!
//! This binary converts a spherical panorama into six cube-face images in
//! the +X, -X, +Y, -Y, +Z, -Z order and an optional cross-layout atlas.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use panocube_cli::commands;

/// panocube - Panorama to Cubemap Converter
#[derive(Parser)]
#[command(name = "panocube")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a panorama into cube faces and a cross atlas
    Convert {
        /// Path to the input panorama (PNG or JPEG)
        #[arg(short, long)]
        input: String,

        /// Face side length in pixels (default: source width / 4)
        #[arg(short, long)]
        face_size: Option<u32>,

        /// Output directory (default: beside the input)
        #[arg(short, long)]
        out_dir: Option<String>,

        /// Skip the cross atlas output
        #[arg(long, conflicts_with = "atlas_only")]
        no_atlas: bool,

        /// Write only the cross atlas, not the six face files
        #[arg(long)]
        atlas_only: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print panorama dimensions and the derived face size
    Info {
        /// Path to the input panorama (PNG or JPEG)
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            input,
            face_size,
            out_dir,
            no_atlas,
            atlas_only,
            json,
        } => commands::convert::run(
            &input,
            face_size,
            out_dir.as_deref(),
            no_atlas,
            atlas_only,
            json,
        ),
        Commands::Info { input, json } => commands::info::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
