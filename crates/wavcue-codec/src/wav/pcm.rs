//! PCM payload helpers.

use crate::error::{CodecError, CodecResult};
use crate::riff::{tags, ChunkReader, RIFF_HEADER_LEN};

use super::WavFormat;

/// Allocates `frames` sample frames of all-zero PCM.
pub fn silence(format: &WavFormat, frames: u64) -> CodecResult<Vec<u8>> {
    let block_align = u64::from(format.block_align());
    let len = frames
        .checked_mul(block_align)
        .and_then(|len| usize::try_from(len).ok())
        .filter(|&len| len <= u32::MAX as usize)
        .ok_or_else(|| CodecError::ChunkTooLarge {
            tag: "data".to_string(),
            len: frames.saturating_mul(block_align) as usize,
        })?;

    Ok(vec![0; len])
}

/// Extracts the PCM payload from a WAV file buffer.
///
/// Returns `None` if the buffer is not a RIFF/WAVE file or has no complete
/// `data` chunk.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < RIFF_HEADER_LEN
        || &wav_data[0..4] != tags::RIFF
        || &wav_data[8..12] != tags::WAVE
    {
        return None;
    }

    ChunkReader::new(&wav_data[RIFF_HEADER_LEN..])
        .find(|chunk| &chunk.tag == tags::DATA)
        .filter(|chunk| !chunk.is_truncated())
        .map(|chunk| chunk.payload)
}

/// BLAKE3 hash of the PCM payload of a WAV file.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}
