//! wavcue CLI - region markers between SubRip scripts and WAV files
//!
//! This binary builds silent region-marked WAV files from SRT scripts and
//! recovers scripts from the cue/label/length chunks of marked WAV files.

use clap::{ArgAction, Parser, Subcommand};
use std::num::NonZeroU32;
use std::process::ExitCode;
use std::time::Duration;

use wavcue_cli::commands::extract::{self, ExtractOptions, OutputFormat};
use wavcue_cli::{commands, logging};
use wavcue_codec::{DecodeOptions, LtxtLayout, WavFormat};

/// wavcue - WAV cue/region marker tools
#[derive(Parser)]
#[command(name = "wavcue")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Print codec diagnostics (-v debug, -vv trace). Defaults to RUST_LOG.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a silent WAV file with one region marker per SRT cue
    Regions {
        /// Path to the SRT script
        srt: String,

        /// Output WAV path (default: <stem>_regions.wav next to the script)
        #[arg(short, long)]
        output: Option<String>,

        /// Sample rate in Hz
        #[arg(long, default_value_t = 48000)]
        rate: u32,

        /// Bits per sample
        #[arg(long, default_value_t = 24)]
        bit_depth: u16,

        /// Number of audio channels
        #[arg(long, default_value_t = 1)]
        channels: u16,
    },

    /// Recover an SRT script (or label track) from WAV region markers
    Extract {
        /// WAV file, or a directory to search recursively for .wav files
        input: String,

        /// Output file, or output directory when INPUT is a directory
        #[arg(short, long)]
        output: Option<String>,

        /// Sample rate in Hz (default: the file's own rate, else 48000)
        #[arg(long)]
        rate: Option<NonZeroU32>,

        /// Seconds given to a trailing marker with no region length
        #[arg(long, default_value = "2.0", value_parser = extract::parse_seconds)]
        default_duration: Duration,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Srt)]
        format: OutputFormat,

        /// Read ltxt lengths at bytes 12..16 (files from older marker scripts)
        #[arg(long)]
        legacy_ltxt: bool,
    },

    /// Show the format, PCM hash and marker tables of a WAV file
    Inspect {
        /// Path to the WAV file
        input: String,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,

        /// Read ltxt lengths at bytes 12..16 (files from older marker scripts)
        #[arg(long)]
        legacy_ltxt: bool,
    },
}

fn decode_options(legacy_ltxt: bool) -> DecodeOptions {
    DecodeOptions {
        ltxt_layout: if legacy_ltxt {
            LtxtLayout::Legacy
        } else {
            LtxtLayout::Standard
        },
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Regions {
            srt,
            output,
            rate,
            bit_depth,
            channels,
        } => commands::regions::run(
            &srt,
            output.as_deref(),
            WavFormat::new(channels, rate, bit_depth),
        ),
        Commands::Extract {
            input,
            output,
            rate,
            default_duration,
            format,
            legacy_ltxt,
        } => commands::extract::run(
            &input,
            output.as_deref(),
            &ExtractOptions {
                sample_rate: rate,
                default_duration: Some(default_duration),
                format,
                decode: decode_options(legacy_ltxt),
            },
        ),
        Commands::Inspect {
            input,
            json,
            legacy_ltxt,
        } => commands::inspect::run(&input, json, &decode_options(legacy_ltxt)),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
