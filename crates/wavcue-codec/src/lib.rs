//! wavcue codec
//!
//! Reads and writes the marker metadata that DAWs embed in WAV files: the
//! RIFF `cue ` table and the `LIST`/`adtl` chunk with its `labl` (label) and
//! `ltxt` (region length) sub-chunks.
//!
//! # Overview
//!
//! - **Decode**: [`read_cues`] / [`decode_cues`] walk a WAV file and return
//!   [`CueMetadata`]. Truncated or odd files never fail; they just yield
//!   fewer markers. [`build_timeline`] turns the metadata into ordered
//!   [`TimedRegion`]s, inferring missing end times.
//! - **Encode**: [`encode_regions`] synthesizes a silent PCM WAV file whose
//!   markers reproduce a list of [`SubtitleEntry`] values.
//!
//! # Example
//!
//! ```
//! use wavcue_codec::{
//!     build_timeline, decode_cues, encode_timestamps, DecodeOptions, TimelineOptions, WavFormat,
//! };
//!
//! let wav = encode_timestamps(
//!     &[("00:00:01,000", "00:00:03,000", "Hello")],
//!     &WavFormat::mono(48000),
//! )?
//! .expect("one region");
//!
//! let metadata = decode_cues(&wav, &DecodeOptions::default());
//! let timeline = build_timeline(&metadata, &TimelineOptions::default());
//! assert_eq!(timeline[0].text, "Hello");
//! # Ok::<(), wavcue_codec::CodecError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`cue`] - Region decoder, timeline inference and encoder
//! - [`riff`] - Chunk reader and writer
//! - [`wav`] - PCM format descriptor and payload helpers
//! - [`timestamp`] - `HH:MM:SS,mmm` timestamps
//! - [`srt`] - SubRip input and output
//! - [`labels`] - Audacity label-track output

pub mod cue;
pub mod error;
pub mod labels;
pub mod riff;
pub mod srt;
pub mod timestamp;
pub mod wav;

// Re-export main types at crate root
pub use cue::{
    build_timeline, decode_cues, decode_cues_from_reader, encode_regions, encode_timestamps,
    read_cues, write_region_wav, CueMetadata, DecodeOptions, LtxtLayout, Region, SubtitleEntry,
    TimedRegion, TimelineOptions, DEFAULT_SAMPLE_RATE,
};
pub use error::{CodecError, CodecResult};
pub use timestamp::Timestamp;
pub use wav::WavFormat;
