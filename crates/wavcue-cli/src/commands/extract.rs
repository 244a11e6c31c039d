//! Extract command implementation
//!
//! Recovers a SubRip script (or an Audacity label track) from the region
//! markers embedded in a WAV file. Useful when only the marked session mix of
//! an audio-description script survives.

use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use std::fs;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;
use walkdir::WalkDir;

use wavcue_codec::{
    build_timeline, labels, read_cues, srt, DecodeOptions, TimelineOptions, DEFAULT_SAMPLE_RATE,
};

use super::sibling_path;

/// Output text format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// SubRip subtitles
    #[default]
    Srt,
    /// Audacity label track (tab-separated seconds)
    Labels,
}

impl OutputFormat {
    fn suffix(self) -> &'static str {
        match self {
            OutputFormat::Srt => "_reconstructed.srt",
            OutputFormat::Labels => "_labels.txt",
        }
    }
}

/// Settings for the extract command.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Sample rate override. Defaults to the file's `fmt ` rate.
    pub sample_rate: Option<NonZeroU32>,
    /// Length of a trailing region with no explicit length.
    pub default_duration: Option<Duration>,
    /// Output text format.
    pub format: OutputFormat,
    /// Decoder settings.
    pub decode: DecodeOptions,
}

/// What happened to one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Regions were written to the given path.
    Written { path: PathBuf, regions: usize },
    /// The file carried no cue points.
    NoMarkers,
}

/// Parses a non-negative number of seconds for clap.
pub fn parse_seconds(s: &str) -> Result<Duration, String> {
    let secs: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    Duration::try_from_secs_f64(secs).map_err(|_| format!("'{s}' is not a valid duration"))
}

/// Run the extract command
///
/// # Arguments
/// * `input` - A WAV file, or a directory searched recursively for `.wav` files
/// * `output` - Output file (single input) or output directory (directory input)
/// * `options` - Timing and format settings
///
/// # Returns
/// Exit code: 0 on success, 1 if a single input file has no markers
pub fn run(input: &str, output: Option<&str>, options: &ExtractOptions) -> Result<ExitCode> {
    let input_path = Path::new(input);
    if input_path.is_dir() {
        return run_dir(input_path, output.map(Path::new), options);
    }

    println!("{} {}", "Extracting:".cyan().bold(), input);
    let output_path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| sibling_path(input_path, options.format.suffix()));

    match extract_file(input_path, &output_path, options)? {
        Outcome::Written { path, regions } => {
            println!(
                "{} Wrote {} regions to: {}",
                "SUCCESS".green().bold(),
                regions,
                path.display()
            );
            Ok(ExitCode::SUCCESS)
        }
        Outcome::NoMarkers => {
            println!("{} No cue points found in {}", "WARNING".yellow().bold(), input);
            Ok(ExitCode::from(1))
        }
    }
}

/// Processes every `.wav` file below `dir`.
fn run_dir(dir: &Path, out_dir: Option<&Path>, options: &ExtractOptions) -> Result<ExitCode> {
    println!("{} {}", "Scanning:".cyan().bold(), dir.display());
    if let Some(out_dir) = out_dir {
        fs::create_dir_all(out_dir)
            .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;
    }

    let mut written = 0usize;
    let mut skipped = 0usize;
    let mut failed = 0usize;

    for path in find_wav_files(dir) {
        let output_path = match out_dir {
            Some(out_dir) => mirrored_output(dir, out_dir, &path, options.format),
            None => sibling_path(&path, options.format.suffix()),
        };

        let result = match output_path.parent() {
            Some(parent) => fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))
                .and_then(|()| extract_file(&path, &output_path, options)),
            None => extract_file(&path, &output_path, options),
        };

        match result {
            Ok(Outcome::Written { path: out, regions }) => {
                written += 1;
                println!(
                    "  {} {} ({} regions)",
                    "+".green(),
                    out.display(),
                    regions
                );
            }
            Ok(Outcome::NoMarkers) => {
                skipped += 1;
                println!("  {} {} (no cue points)", "-".yellow(), path.display());
            }
            Err(e) => {
                failed += 1;
                eprintln!("  {} {}: {:#}", "!".red(), path.display(), e);
            }
        }
    }

    println!(
        "\n{} {} written, {} without markers, {} failed",
        "Done:".cyan().bold(),
        written,
        skipped,
        failed
    );

    Ok(if failed > 0 {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    })
}

/// Output path under `out_dir` that keeps `path`'s location relative to
/// `input_dir`, so same-named files in different folders stay apart.
pub fn mirrored_output(
    input_dir: &Path,
    out_dir: &Path,
    path: &Path,
    format: OutputFormat,
) -> PathBuf {
    match path.strip_prefix(input_dir) {
        Ok(relative) => out_dir.join(sibling_path(relative, format.suffix())),
        Err(_) => {
            let sibling = sibling_path(path, format.suffix());
            out_dir.join(sibling.file_name().unwrap_or_default())
        }
    }
}

/// Sorted list of `.wav` files (any case) below `dir`.
pub fn find_wav_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("wav"))
        })
        .collect();
    files.sort();
    files
}

/// Decodes one file and writes its regions to `output_path`.
pub fn extract_file(input: &Path, output_path: &Path, options: &ExtractOptions) -> Result<Outcome> {
    let metadata = read_cues(input, &options.decode)
        .with_context(|| format!("Failed to read WAV file: {}", input.display()))?;
    if metadata.is_empty() {
        return Ok(Outcome::NoMarkers);
    }

    let file_rate = metadata
        .format
        .and_then(|format| NonZeroU32::new(format.sample_rate));
    let sample_rate = options.sample_rate.or(file_rate).unwrap_or(DEFAULT_SAMPLE_RATE);
    log::debug!(
        "{}: {} cue points at {} Hz",
        input.display(),
        metadata.cues.len(),
        sample_rate
    );

    let mut timeline_options = TimelineOptions::new(sample_rate);
    if let Some(duration) = options.default_duration {
        timeline_options = timeline_options.with_default_duration(duration);
    }
    let timeline = build_timeline(&metadata, &timeline_options);

    let text = match options.format {
        OutputFormat::Srt => srt::format(&timeline),
        OutputFormat::Labels => labels::format(&timeline),
    };
    fs::write(output_path, text)
        .with_context(|| format!("Failed to write to: {}", output_path.display()))?;

    Ok(Outcome::Written {
        path: output_path.to_path_buf(),
        regions: timeline.len(),
    })
}
