//! Region end-time inference.

use std::num::NonZeroU32;
use std::time::Duration;

use super::model::{CueMetadata, TimedRegion};

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Sample rate assumed when neither the caller nor the file provides one.
pub const DEFAULT_SAMPLE_RATE: NonZeroU32 = match NonZeroU32::new(48_000) {
    Some(rate) => rate,
    None => panic!("48000 is non-zero"),
};

/// Settings for placing decoded regions on the time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineOptions {
    /// Sample rate used to convert offsets to time.
    pub sample_rate: NonZeroU32,
    /// Length given to the last region when it has no explicit length.
    pub default_duration: Duration,
}

impl Default for TimelineOptions {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            default_duration: Duration::from_secs(2),
        }
    }
}

impl TimelineOptions {
    /// Options at `sample_rate` with the default fallback duration.
    pub fn new(sample_rate: NonZeroU32) -> Self {
        Self {
            sample_rate,
            ..Self::default()
        }
    }

    /// Returns a copy with a different fallback duration.
    pub fn with_default_duration(self, default_duration: Duration) -> Self {
        Self {
            default_duration,
            ..self
        }
    }

    /// The fallback duration in samples, rounded to the nearest sample.
    pub fn default_samples(&self) -> u64 {
        let rate = u128::from(self.sample_rate.get());
        let samples = (self.default_duration.as_nanos() * rate + NANOS_PER_SEC / 2) / NANOS_PER_SEC;
        samples.min(u128::from(u64::MAX)) as u64
    }
}

/// Exact duration of `samples` at `sample_rate`, to the nanosecond.
pub fn samples_to_duration(samples: u64, sample_rate: NonZeroU32) -> Duration {
    let nanos = u128::from(samples) * NANOS_PER_SEC / u128::from(sample_rate.get());
    let secs = (nanos / NANOS_PER_SEC) as u64;
    Duration::new(secs, (nanos % NANOS_PER_SEC) as u32)
}

/// Orders regions by start sample and gives each an end time.
///
/// The end of a region is, in order of preference: its `ltxt` length, the
/// start of the next region, or the configured default duration.
pub fn build_timeline(metadata: &CueMetadata, options: &TimelineOptions) -> Vec<TimedRegion> {
    let regions = metadata.regions();
    let rate = options.sample_rate;

    regions
        .iter()
        .enumerate()
        .map(|(i, region)| {
            let start = u64::from(region.start_sample);
            let end = match (region.length_samples, regions.get(i + 1)) {
                (Some(length), _) => start + u64::from(length),
                (None, Some(next)) => u64::from(next.start_sample),
                (None, None) => start.saturating_add(options.default_samples()),
            };

            TimedRegion {
                index: i + 1,
                start: samples_to_duration(start, rate),
                end: samples_to_duration(end, rate),
                text: region.label.clone(),
            }
        })
        .collect()
}
