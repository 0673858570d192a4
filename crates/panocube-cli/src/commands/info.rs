//! Info command implementation
//!
//! Decodes a panorama and reports its dimensions and the face size a
//! conversion would derive from them.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use panocube::{decode_panorama, derive_face_size, ConvertOptions};

/// Run the info command
///
/// # Returns
/// Exit code: 0 success, 1 decode error
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    let path = Path::new(input);

    let source = match decode_panorama(path) {
        Ok(source) => source,
        Err(e) => {
            if json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "ok": false,
                        "error": e.to_string(),
                    }))?
                );
            } else {
                eprintln!("{} {}", "Decode failed:".red().bold(), e);
            }
            return Ok(ExitCode::from(1));
        }
    };

    let derived = derive_face_size(source.width, &ConvertOptions::default()).ok();

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "ok": true,
                "width": source.width,
                "height": source.height,
                "derived_face_size": derived,
            }))?
        );
    } else {
        println!("{} {}", "Panorama:".cyan().bold(), path.display());
        println!("{} {}x{}", "Size:".dimmed(), source.width, source.height);
        match derived {
            Some(size) => println!("{} {}x{}", "Derived face size:".dimmed(), size, size),
            None => println!(
                "{} panorama is too narrow to derive a face size",
                "!".yellow()
            ),
        }
    }

    Ok(ExitCode::SUCCESS)
}
