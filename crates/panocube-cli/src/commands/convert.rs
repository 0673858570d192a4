//! Convert command implementation
//!
//! Converts an equirectangular panorama into six cube-face PNGs and,
//! unless disabled, a cross-layout atlas.

use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use colored::Colorize;
use panocube::{convert_file, ConvertOptions, ConvertReport, PngConfig};

use crate::paths::derive_outputs;

/// Run the convert command
///
/// # Arguments
/// * `input` - Path to the panorama image (PNG or JPEG)
/// * `face_size` - Face side length override (default: source width / 4)
/// * `out_dir` - Output directory override (default: beside the input)
/// * `no_atlas` - Skip the atlas output
/// * `atlas_only` - Skip the six face outputs
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 conversion error
pub fn run(
    input: &str,
    face_size: Option<u32>,
    out_dir: Option<&str>,
    no_atlas: bool,
    atlas_only: bool,
    json_output: bool,
) -> Result<ExitCode> {
    let input = Path::new(input);
    let outputs = derive_outputs(
        input,
        out_dir.map(Path::new),
        !atlas_only,
        !no_atlas,
    )?;
    let options = ConvertOptions {
        face_size,
        png: PngConfig::default(),
    };

    if json_output {
        return match convert_file(input, &outputs, &options) {
            Ok(report) => {
                println!("{}", serde_json::to_string_pretty(&json_report(&report))?);
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "ok": false,
                        "error": e.to_string(),
                    }))?
                );
                Ok(ExitCode::from(1))
            }
        };
    }

    let start = Instant::now();
    println!("{} {}", "Converting:".cyan().bold(), input.display());
    if let Some(size) = face_size {
        println!("{} {}", "Face size:".dimmed(), size);
    }

    match convert_file(input, &outputs, &options) {
        Ok(report) => {
            println!(
                "{} {}x{} panorama, {}x{} faces",
                "Source:".dimmed(),
                report.source_width,
                report.source_height,
                report.face_size,
                report.face_size
            );
            for file in &report.files {
                println!(
                    "  {} {} -> {} ({})",
                    "+".green(),
                    file.target,
                    file.path.display(),
                    &file.hash[..16]
                );
            }
            println!(
                "{} {} files in {:.1?}",
                "Done:".green().bold(),
                report.files.len(),
                start.elapsed()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{} {}", "Conversion failed:".red().bold(), e);
            Ok(ExitCode::from(1))
        }
    }
}

fn json_report(report: &ConvertReport) -> serde_json::Value {
    serde_json::json!({
        "ok": true,
        "report": report,
    })
}
