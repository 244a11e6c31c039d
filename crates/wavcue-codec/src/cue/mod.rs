//! WAV cue/region metadata codec.
//!
//! Decoding walks the RIFF chunks of a WAV file and collects three maps keyed
//! by cue id: start offsets from `cue `, text from `labl` and lengths from
//! `ltxt`. [`build_timeline`] joins them into an ordered list of timed
//! regions. Encoding goes the other way: from subtitle entries to a silent
//! WAV file carrying `cue ` and `LIST`/`adtl` chunks.

mod decode;
mod encode;
mod model;
mod timeline;


pub use decode::{decode_cues, decode_cues_from_reader, read_cues, DecodeOptions, LtxtLayout};
pub use encode::{encode_regions, encode_timestamps, write_region_wav};
pub use model::{CueMetadata, Region, SubtitleEntry, TimedRegion};
pub use timeline::{build_timeline, samples_to_duration, TimelineOptions, DEFAULT_SAMPLE_RATE};

/// Size of one record in the `cue ` table.
pub(crate) const CUE_RECORD_LEN: usize = 24;

/// Size of the `ltxt` payload written by the encoder.
pub(crate) const LTXT_PAYLOAD_LEN: usize = 20;
