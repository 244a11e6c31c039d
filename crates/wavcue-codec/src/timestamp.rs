//! `HH:MM:SS,mmm` subtitle timestamps.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use serde::Serialize;

use crate::error::{CodecError, CodecResult};

/// A subtitle timestamp with millisecond resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Timestamp {
    millis: u64,
}

fn timestamp_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d+):(\d{1,2}):(\d{1,2})[,.](\d{1,3})$").expect("timestamp regex is valid")
    })
}

impl Timestamp {
    /// Creates a timestamp from milliseconds.
    pub const fn from_millis(millis: u64) -> Self {
        Self { millis }
    }

    /// Truncates a duration to whole milliseconds.
    pub fn from_duration(duration: Duration) -> Self {
        Self {
            millis: duration.as_millis().min(u128::from(u64::MAX)) as u64,
        }
    }

    /// Parses `HH:MM:SS,mmm` (a `.` separator is accepted too).
    ///
    /// Minutes and seconds must be below 60. A fraction shorter than three
    /// digits is read as a decimal fraction, so `,5` is 500 ms.
    pub fn parse(text: &str) -> CodecResult<Self> {
        let trimmed = text.trim();
        let caps = timestamp_regex()
            .captures(trimmed)
            .ok_or_else(|| CodecError::timestamp(trimmed, "expected HH:MM:SS,mmm"))?;

        let field = |i: usize| -> CodecResult<u64> {
            caps[i]
                .parse::<u64>()
                .map_err(|_| CodecError::timestamp(trimmed, "number out of range"))
        };
        let hours = field(1)?;
        let minutes = field(2)?;
        let seconds = field(3)?;
        if minutes >= 60 {
            return Err(CodecError::timestamp(trimmed, "minutes must be below 60"));
        }
        if seconds >= 60 {
            return Err(CodecError::timestamp(trimmed, "seconds must be below 60"));
        }

        let fraction = &caps[4];
        let millis = field(4)? * 10u64.pow(3 - fraction.len() as u32);

        hours
            .checked_mul(3_600_000)
            .and_then(|ms| ms.checked_add(minutes * 60_000 + seconds * 1000 + millis))
            .map(Self::from_millis)
            .ok_or_else(|| CodecError::timestamp(trimmed, "number out of range"))
    }

    /// Milliseconds since zero.
    pub fn as_millis(&self) -> u64 {
        self.millis
    }

    /// Sample offset at `sample_rate`, rounded to the nearest sample.
    pub fn to_samples(&self, sample_rate: u32) -> u64 {
        let scaled = u128::from(self.millis) * u128::from(sample_rate) + 500;
        (scaled / 1000).min(u128::from(u64::MAX)) as u64
    }
}

impl FromStr for Timestamp {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.millis / 3_600_000;
        let minutes = (self.millis % 3_600_000) / 60_000;
        let seconds = (self.millis % 60_000) / 1000;
        let millis = self.millis % 1000;
        write!(f, "{hours:02}:{minutes:02}:{seconds:02},{millis:03}")
    }
}
