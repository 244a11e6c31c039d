//! End-to-end tests: SubRip -> region WAV on disk -> SubRip.

use std::io::Cursor;
use std::num::NonZeroU32;

use pretty_assertions::assert_eq;
use tempfile::tempdir;
use wavcue_codec::{
    build_timeline, decode_cues_from_reader, read_cues, srt, wav, write_region_wav, CodecError,
    DecodeOptions, TimelineOptions, WavFormat,
};

const SCRIPT: &str = "\
1
00:00:01,000 --> 00:00:03,000
Hello

2
00:00:03,000 --> 00:00:04,500
World

3
00:01:10,250 --> 00:01:12,000
She looks up,
startled.
";

#[test]
fn srt_to_wav_to_srt_preserves_timing_and_text() {
    let dir = tempdir().unwrap();
    let srt_path = dir.path().join("script.srt");
    let wav_path = dir.path().join("script_regions.wav");
    std::fs::write(&srt_path, SCRIPT).unwrap();

    let entries = srt::read(&srt_path).unwrap();
    let format = WavFormat::mono(48000);
    assert!(write_region_wav(&wav_path, &entries, &format).unwrap());

    let metadata = read_cues(&wav_path, &DecodeOptions::default()).unwrap();
    assert_eq!(metadata.cues.len(), 3);
    assert_eq!(metadata.format, Some(format));

    let timeline = build_timeline(&metadata, &TimelineOptions::default());
    assert_eq!(
        srt::format(&timeline),
        "1\n00:00:01,000 --> 00:00:03,000\nHello\n\n\
         2\n00:00:03,000 --> 00:00:04,500\nWorld\n\n\
         3\n00:01:10,250 --> 00:01:12,000\nShe looks up, startled.\n\n"
    );
}

#[test]
fn written_file_has_expected_pcm_length() {
    let dir = tempdir().unwrap();
    let wav_path = dir.path().join("out.wav");
    let entries = srt::parse(SCRIPT).unwrap();
    let format = WavFormat::stereo(44100).with_bits(16);

    write_region_wav(&wav_path, &entries, &format).unwrap();
    let bytes = std::fs::read(&wav_path).unwrap();

    // 72 s of 16-bit stereo at 44.1 kHz
    let pcm = wav::extract_pcm_data(&bytes).unwrap();
    assert_eq!(pcm.len(), 72 * 44100 * 4);
    assert_eq!(
        wav::compute_pcm_hash(&bytes).unwrap(),
        blake3_of_zeroes(pcm.len())
    );
}

#[test]
fn generated_file_opens_in_hound() {
    let entries = srt::parse(SCRIPT).unwrap();
    let format = WavFormat::mono(48000);
    let bytes = wavcue_codec::encode_regions(&entries, &format)
        .unwrap()
        .unwrap();

    let reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 48000);
    assert_eq!(spec.bits_per_sample, 24);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);
    assert_eq!(reader.len(), 72 * 48000);
    assert!(reader
        .into_samples::<i32>()
        .all(|sample| sample.unwrap() == 0));
}

#[test]
fn empty_script_writes_no_file() {
    let dir = tempdir().unwrap();
    let wav_path = dir.path().join("nothing.wav");
    let entries = srt::parse("\n\n").unwrap();

    assert!(!write_region_wav(&wav_path, &entries, &WavFormat::default()).unwrap());
    assert!(!wav_path.exists());
}

#[test]
fn missing_file_reports_path() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.wav");
    let err = read_cues(&missing, &DecodeOptions::default()).unwrap_err();
    match err {
        CodecError::Io { path, .. } => assert_eq!(path, missing),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn decode_from_reader_matches_file_decode() {
    let entries = srt::parse(SCRIPT).unwrap();
    let bytes = wavcue_codec::encode_regions(&entries, &WavFormat::default())
        .unwrap()
        .unwrap();

    let metadata =
        decode_cues_from_reader(Cursor::new(&bytes), "<memory>", &DecodeOptions::default())
            .unwrap();
    let timeline = build_timeline(
        &metadata,
        &TimelineOptions::new(NonZeroU32::new(48000).unwrap()),
    );
    assert_eq!(timeline.len(), 3);
    assert_eq!(timeline[2].text, "She looks up, startled.");
}

fn blake3_of_zeroes(len: usize) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&vec![0u8; len]);
    hasher.finalize().to_hex().to_string()
}
