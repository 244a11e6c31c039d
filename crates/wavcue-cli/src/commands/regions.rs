//! Regions command implementation
//!
//! Builds a silent WAV file whose cue/label/length chunks mirror the cues of
//! a SubRip script, ready to drop onto a DAW timeline.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use wavcue_codec::{srt, write_region_wav, WavFormat};

use super::sibling_path;

/// Default output path: `<stem>_regions.wav` next to the script.
pub fn default_output(srt_path: &Path) -> PathBuf {
    sibling_path(srt_path, "_regions.wav")
}

/// Run the regions command
///
/// # Arguments
/// * `srt_path` - Path to the SubRip script
/// * `output` - Output WAV path (default: `<stem>_regions.wav`)
/// * `format` - PCM format of the silent audio
///
/// # Returns
/// Exit code: 0 on success (including an empty script), 1 on error
pub fn run(srt_path: &str, output: Option<&str>, format: WavFormat) -> Result<ExitCode> {
    let input = Path::new(srt_path);
    println!("{} {}", "Reading:".cyan().bold(), srt_path);

    let entries = srt::read(input).with_context(|| format!("Failed to parse SRT: {srt_path}"))?;
    if entries.is_empty() {
        println!("{} No regions found in {}", "WARNING".yellow().bold(), srt_path);
        return Ok(ExitCode::SUCCESS);
    }

    let output_path = output.map(PathBuf::from).unwrap_or_else(|| default_output(input));
    write_region_wav(&output_path, &entries, &format)
        .with_context(|| format!("Failed to build region WAV from: {srt_path}"))?;

    println!(
        "  {} {} Hz, {}-bit, {} channel(s)",
        "Format:".dimmed(),
        format.sample_rate,
        format.bits_per_sample,
        format.channels
    );
    println!(
        "{} Wrote {} regions to: {}",
        "SUCCESS".green().bold(),
        entries.len(),
        output_path.display()
    );

    Ok(ExitCode::SUCCESS)
}
