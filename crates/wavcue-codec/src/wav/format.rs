//! WAV file format parameters.

use serde::Serialize;

use crate::error::{CodecError, CodecResult};
use crate::riff::read_u16_le;
use crate::riff::read_u32_le;

/// PCM format code in the `fmt ` chunk.
const FORMAT_PCM: u16 = 1;

/// Size of the plain PCM `fmt ` payload.
pub(crate) const FMT_PAYLOAD_LEN: usize = 16;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WavFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample, a multiple of 8.
    pub bits_per_sample: u16,
}

impl Default for WavFormat {
    /// 48 kHz, 24-bit, mono: the usual audio-description session format.
    fn default() -> Self {
        Self::mono(48_000)
    }
}

impl WavFormat {
    /// Creates a format from explicit parameters.
    pub fn new(channels: u16, sample_rate: u32, bits_per_sample: u16) -> Self {
        Self {
            channels,
            sample_rate,
            bits_per_sample,
        }
    }

    /// Creates a 24-bit mono format.
    pub fn mono(sample_rate: u32) -> Self {
        Self::new(1, sample_rate, 24)
    }

    /// Creates a 24-bit stereo format.
    pub fn stereo(sample_rate: u32) -> Self {
        Self::new(2, sample_rate, 24)
    }

    /// Returns a copy with a different bit depth.
    pub fn with_bits(self, bits_per_sample: u16) -> Self {
        Self {
            bits_per_sample,
            ..self
        }
    }

    /// Checks that the parameters describe writable integer PCM.
    pub fn validate(&self) -> CodecResult<()> {
        if self.channels == 0 {
            return Err(CodecError::format("channel count must be at least 1"));
        }
        if self.sample_rate == 0 {
            return Err(CodecError::format("sample rate must be positive"));
        }
        if self.bits_per_sample == 0 || self.bits_per_sample % 8 != 0 {
            return Err(CodecError::format(format!(
                "bit depth must be a non-zero multiple of 8, got {}",
                self.bits_per_sample
            )));
        }
        if u16::try_from(self.block_align()).is_err() {
            return Err(CodecError::format(format!(
                "block align of {} channels x {} bytes exceeds 16 bits",
                self.channels,
                self.bytes_per_sample()
            )));
        }
        if u32::try_from(self.byte_rate()).is_err() {
            return Err(CodecError::format("byte rate overflows 32 bits"));
        }
        Ok(())
    }

    /// Bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Bytes per sample frame (all channels).
    ///
    /// Wider than the 16-bit `fmt ` field so decoded formats never overflow;
    /// [`validate`](Self::validate) rejects values that do not fit.
    pub fn block_align(&self) -> u32 {
        u32::from(self.channels) * u32::from(self.bytes_per_sample())
    }

    /// Bytes per second.
    pub fn byte_rate(&self) -> u64 {
        u64::from(self.sample_rate) * u64::from(self.block_align())
    }

    /// Serializes the 16-byte PCM `fmt ` payload.
    pub(crate) fn to_fmt_payload(self) -> CodecResult<[u8; FMT_PAYLOAD_LEN]> {
        self.validate()?;
        let block_align = u16::try_from(self.block_align())
            .map_err(|_| CodecError::format("block align exceeds 16 bits"))?;
        let byte_rate = u32::try_from(self.byte_rate())
            .map_err(|_| CodecError::format("byte rate overflows 32 bits"))?;

        let mut out = [0u8; FMT_PAYLOAD_LEN];
        out[0..2].copy_from_slice(&FORMAT_PCM.to_le_bytes());
        out[2..4].copy_from_slice(&self.channels.to_le_bytes());
        out[4..8].copy_from_slice(&self.sample_rate.to_le_bytes());
        out[8..12].copy_from_slice(&byte_rate.to_le_bytes());
        out[12..14].copy_from_slice(&block_align.to_le_bytes());
        out[14..16].copy_from_slice(&self.bits_per_sample.to_le_bytes());
        Ok(out)
    }

    /// Reads channel count, rate and bit depth from a `fmt ` payload.
    ///
    /// The format code is not checked: only the sample rate matters for cue
    /// timing, and it sits at the same offset for every WAVE format.
    pub(crate) fn from_fmt_payload(payload: &[u8]) -> Option<Self> {
        if payload.len() < FMT_PAYLOAD_LEN {
            return None;
        }
        Some(Self {
            channels: read_u16_le(payload, 2)?,
            sample_rate: read_u32_le(payload, 4)?,
            bits_per_sample: read_u16_le(payload, 14)?,
        })
    }
}
