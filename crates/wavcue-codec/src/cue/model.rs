//! Region data model.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

use crate::timestamp::Timestamp;
use crate::wav::WavFormat;

/// Marker metadata recovered from one WAV file.
///
/// The three maps are filled independently while walking the file and are
/// only joined in [`CueMetadata::regions`]. Labels and lengths whose id has no
/// cue point stay in their map but never produce a region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CueMetadata {
    /// Cue id to start offset in samples.
    pub cues: BTreeMap<u32, u32>,
    /// Cue id to label text.
    pub labels: BTreeMap<u32, String>,
    /// Cue id to region length in samples.
    pub lengths: BTreeMap<u32, u32>,
    /// Format from the `fmt ` chunk, if one was readable.
    pub format: Option<WavFormat>,
    /// Declared size of the `data` chunk, if one was seen.
    pub data_len: Option<u32>,
}

impl CueMetadata {
    /// True when the file carried no usable cue points.
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Joins the maps into regions ordered by start sample, then id.
    ///
    /// Regions without a `labl` entry get the placeholder `Cue <n>`, where `n`
    /// is the 1-based position in this ordering.
    pub fn regions(&self) -> Vec<Region> {
        let mut ordered: Vec<(u32, u32)> =
            self.cues.iter().map(|(&id, &start)| (id, start)).collect();
        ordered.sort_by_key(|&(id, start)| (start, id));

        ordered
            .into_iter()
            .enumerate()
            .map(|(i, (id, start_sample))| Region {
                id,
                start_sample,
                length_samples: self.lengths.get(&id).copied(),
                label: self
                    .labels
                    .get(&id)
                    .cloned()
                    .unwrap_or_else(|| format!("Cue {}", i + 1)),
            })
            .collect()
    }
}

/// One labeled cue point, possibly with an explicit length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    /// Cue id as stored in the file.
    pub id: u32,
    /// Start offset in samples.
    pub start_sample: u32,
    /// Length in samples from `ltxt`, if present.
    pub length_samples: Option<u32>,
    /// Label text.
    pub label: String,
}

/// A region placed on the time axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimedRegion {
    /// 1-based position in the ordered output.
    pub index: usize,
    /// Region start.
    pub start: Duration,
    /// Region end.
    pub end: Duration,
    /// Label text.
    pub text: String,
}

impl TimedRegion {
    /// Start truncated to whole milliseconds.
    pub fn start_timestamp(&self) -> Timestamp {
        Timestamp::from_duration(self.start)
    }

    /// End truncated to whole milliseconds.
    pub fn end_timestamp(&self) -> Timestamp {
        Timestamp::from_duration(self.end)
    }
}

/// One timed, labeled entry from a subtitle source: the encoder's input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleEntry {
    /// Region start.
    pub start: Timestamp,
    /// Region end.
    pub end: Timestamp,
    /// Label text.
    pub text: String,
}

impl SubtitleEntry {
    /// Creates an entry.
    pub fn new(start: Timestamp, end: Timestamp, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }
}
