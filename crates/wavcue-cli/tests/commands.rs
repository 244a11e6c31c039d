//! Integration tests for the CLI commands.

use std::fs;
use std::process::ExitCode;
use std::time::Duration;

use pretty_assertions::assert_eq;
use tempfile::tempdir;
use wavcue_cli::commands::extract::{self, ExtractOptions, Outcome, OutputFormat};
use wavcue_cli::commands::{inspect, regions};
use wavcue_codec::{DecodeOptions, WavFormat};

const SCRIPT: &str = "1\n00:00:01,000 --> 00:00:03,000\nHello\n\n2\n00:00:03,000 --> 00:00:04,500\nWorld\n";

#[test]
fn regions_then_extract_reproduces_script() {
    let dir = tempdir().unwrap();
    let srt_path = dir.path().join("ep01.srt");
    fs::write(&srt_path, SCRIPT).unwrap();

    let code = regions::run(srt_path.to_str().unwrap(), None, WavFormat::default()).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let wav_path = dir.path().join("ep01_regions.wav");
    assert!(wav_path.exists());

    let code = extract::run(wav_path.to_str().unwrap(), None, &ExtractOptions::default()).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let recovered = fs::read_to_string(dir.path().join("ep01_regions_reconstructed.srt")).unwrap();
    assert_eq!(recovered, format!("{SCRIPT}\n"));
}

#[test]
fn extract_label_track_with_explicit_output() {
    let dir = tempdir().unwrap();
    let srt_path = dir.path().join("script.srt");
    let wav_path = dir.path().join("marked.wav");
    let labels_path = dir.path().join("labels.txt");
    fs::write(&srt_path, SCRIPT).unwrap();

    regions::run(
        srt_path.to_str().unwrap(),
        Some(wav_path.to_str().unwrap()),
        WavFormat::stereo(44100).with_bits(16),
    )
    .unwrap();

    let options = ExtractOptions {
        format: OutputFormat::Labels,
        ..ExtractOptions::default()
    };
    let outcome = extract::extract_file(&wav_path, &labels_path, &options).unwrap();
    assert_eq!(
        outcome,
        Outcome::Written {
            path: labels_path.clone(),
            regions: 2
        }
    );
    assert_eq!(
        fs::read_to_string(&labels_path).unwrap(),
        "1.000000\t3.000000\tHello\n3.000000\t4.500000\tWorld\n"
    );
}

#[test]
fn empty_script_is_not_an_error() {
    let dir = tempdir().unwrap();
    let srt_path = dir.path().join("empty.srt");
    fs::write(&srt_path, "").unwrap();

    let code = regions::run(srt_path.to_str().unwrap(), None, WavFormat::default()).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);
    assert!(!dir.path().join("empty_regions.wav").exists());
}

#[test]
fn bad_timestamp_fails_with_context() {
    let dir = tempdir().unwrap();
    let srt_path = dir.path().join("bad.srt");
    fs::write(&srt_path, "1\n00:00:01,000 --> 0:0\nBroken\n").unwrap();

    let err = regions::run(srt_path.to_str().unwrap(), None, WavFormat::default()).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("bad.srt"));
    assert!(msg.contains("entry 1"));
}

#[test]
fn extract_without_markers_exits_nonzero() {
    let dir = tempdir().unwrap();
    let wav_path = dir.path().join("plain.wav");
    // Header-only RIFF file: no chunks at all
    fs::write(&wav_path, b"RIFF\x04\x00\x00\x00WAVE").unwrap();

    let code = extract::run(wav_path.to_str().unwrap(), None, &ExtractOptions::default()).unwrap();
    assert_eq!(code, ExitCode::from(1));
}

#[test]
fn extract_directory_processes_every_wav() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("season1");
    let out_dir = dir.path().join("out");
    fs::create_dir_all(&nested).unwrap();

    let srt_path = dir.path().join("script.srt");
    fs::write(&srt_path, SCRIPT).unwrap();
    regions::run(
        srt_path.to_str().unwrap(),
        Some(nested.join("ep01.WAV").to_str().unwrap()),
        WavFormat::default(),
    )
    .unwrap();
    fs::write(nested.join("ep02.wav"), b"RIFF\x04\x00\x00\x00WAVE").unwrap();
    fs::write(nested.join("notes.txt"), "not audio").unwrap();

    assert_eq!(extract::find_wav_files(dir.path()).len(), 2);

    let options = ExtractOptions {
        default_duration: Some(Duration::from_secs(1)),
        ..ExtractOptions::default()
    };
    let code = extract::run(
        dir.path().to_str().unwrap(),
        Some(out_dir.to_str().unwrap()),
        &options,
    )
    .unwrap();
    assert_eq!(code, ExitCode::SUCCESS);
    assert!(out_dir.join("season1").join("ep01_reconstructed.srt").exists());
    assert!(!out_dir.join("season1").join("ep02_reconstructed.srt").exists());
}

#[test]
fn extract_directory_keeps_same_named_files_apart() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in");
    let out_dir = dir.path().join("out");
    fs::create_dir_all(input.join("a")).unwrap();
    fs::create_dir_all(input.join("b")).unwrap();

    for (folder, text) in [("a", "Alpha"), ("b", "Bravo")] {
        let srt_path = dir.path().join(format!("{folder}.srt"));
        fs::write(&srt_path, format!("1\n00:00:01,000 --> 00:00:02,000\n{text}\n")).unwrap();
        let wav_path = input.join(folder).join("ep01.wav");
        regions::run(
            srt_path.to_str().unwrap(),
            Some(wav_path.to_str().unwrap()),
            WavFormat::default(),
        )
        .unwrap();
    }

    let code = extract::run(
        input.to_str().unwrap(),
        Some(out_dir.to_str().unwrap()),
        &ExtractOptions::default(),
    )
    .unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let alpha = fs::read_to_string(out_dir.join("a").join("ep01_reconstructed.srt")).unwrap();
    let bravo = fs::read_to_string(out_dir.join("b").join("ep01_reconstructed.srt")).unwrap();
    assert!(alpha.contains("Alpha"));
    assert!(bravo.contains("Bravo"));
    assert!(!out_dir.join("ep01_reconstructed.srt").exists());
}

#[test]
fn inspect_runs_on_generated_file() {
    let dir = tempdir().unwrap();
    let srt_path = dir.path().join("script.srt");
    fs::write(&srt_path, SCRIPT).unwrap();
    regions::run(srt_path.to_str().unwrap(), None, WavFormat::default()).unwrap();

    let wav_path = dir.path().join("script_regions.wav");
    let code = inspect::run(wav_path.to_str().unwrap(), true, &DecodeOptions::default()).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let missing = dir.path().join("missing.wav");
    assert!(inspect::run(missing.to_str().unwrap(), false, &DecodeOptions::default()).is_err());
}
