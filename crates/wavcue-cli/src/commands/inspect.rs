//! Inspect command implementation
//!
//! Dumps the format, PCM hash and marker tables of a WAV file.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::process::ExitCode;

use wavcue_codec::{decode_cues, wav, CueMetadata, DecodeOptions, Region};

/// Machine-readable inspect report.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    /// Inspected file.
    pub file: String,
    /// File size in bytes.
    pub file_size: usize,
    /// BLAKE3 hash of the PCM payload, if a complete `data` chunk exists.
    pub pcm_hash: Option<String>,
    /// Raw marker tables.
    pub metadata: CueMetadata,
    /// Regions in timeline order.
    pub regions: Vec<Region>,
    /// Label or length entries whose id has no cue point.
    pub orphans: Vec<u32>,
}

impl InspectReport {
    /// Builds the report from raw file bytes.
    pub fn from_bytes(file: &str, bytes: &[u8], options: &DecodeOptions) -> Self {
        let metadata = decode_cues(bytes, options);
        let regions = metadata.regions();

        let mut orphans: Vec<u32> = metadata
            .labels
            .keys()
            .chain(metadata.lengths.keys())
            .filter(|id| !metadata.cues.contains_key(*id))
            .copied()
            .collect();
        orphans.sort_unstable();
        orphans.dedup();

        Self {
            file: file.to_string(),
            file_size: bytes.len(),
            pcm_hash: wav::compute_pcm_hash(bytes),
            metadata,
            regions,
            orphans,
        }
    }
}

/// Run the inspect command
///
/// # Arguments
/// * `input` - Path to the WAV file
/// * `json_output` - Whether to output machine-readable JSON
/// * `options` - Decoder settings
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(input: &str, json_output: bool, options: &DecodeOptions) -> Result<ExitCode> {
    let bytes = fs::read(input).with_context(|| format!("Failed to read file: {input}"))?;
    let report = InspectReport::from_bytes(input, &bytes, options);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(ExitCode::SUCCESS)
}

fn print_report(report: &InspectReport) {
    println!("{} {}", "Inspecting:".cyan().bold(), report.file);
    println!("  {} {} bytes", "Size:".dimmed(), report.file_size);

    match report.metadata.format {
        Some(format) => println!(
            "  {} {} Hz, {}-bit, {} channel(s)",
            "Format:".dimmed(),
            format.sample_rate,
            format.bits_per_sample,
            format.channels
        ),
        None => println!("  {} {}", "Format:".dimmed(), "no fmt chunk".yellow()),
    }

    if let Some(data_len) = report.metadata.data_len {
        let duration = report
            .metadata
            .format
            .filter(|f| f.byte_rate() > 0)
            .map(|f| format!(" ({:.3} s)", f64::from(data_len) / f.byte_rate() as f64))
            .unwrap_or_default();
        println!("  {} {} bytes{}", "Data:".dimmed(), data_len, duration);
    }
    if let Some(hash) = &report.pcm_hash {
        println!("  {} {}", "PCM hash:".dimmed(), &hash[..16]);
    }

    if report.regions.is_empty() {
        println!("\n{}", "No cue points found.".yellow());
        return;
    }

    println!("\n{}", "Regions:".cyan().bold());
    for region in &report.regions {
        let length = region
            .length_samples
            .map(|l| l.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:>4}  {:>10}  {:>10}  {}",
            region.id, region.start_sample, length, region.label
        );
    }

    if !report.orphans.is_empty() {
        let ids: Vec<String> = report.orphans.iter().map(u32::to_string).collect();
        println!(
            "\n{} entries without cue points: {}",
            "WARNING".yellow().bold(),
            ids.join(", ")
        );
    }
}
