//! Chunk serialization with RIFF word alignment.

use std::io::{self, Write};

use crate::error::{CodecError, CodecResult};

use super::{tag_name, tags, CHUNK_HEADER_LEN};

/// Payload length rounded up to the next even byte count.
pub fn padded_len(len: usize) -> usize {
    len + (len & 1)
}

/// Validates that a payload fits a RIFF size field and returns that field.
pub fn chunk_size(tag: &[u8; 4], len: usize) -> CodecResult<u32> {
    u32::try_from(len).map_err(|_| CodecError::ChunkTooLarge {
        tag: tag_name(tag),
        len,
    })
}

/// Writes one chunk: tag, unpadded size, payload, and a zero pad byte if the
/// payload length is odd.
///
/// The caller is expected to have checked the size with [`chunk_size`].
pub fn write_chunk<W: Write>(writer: &mut W, tag: &[u8; 4], payload: &[u8]) -> io::Result<()> {
    writer.write_all(tag)?;
    writer.write_all(&(payload.len() as u32).to_le_bytes())?;
    writer.write_all(payload)?;
    if payload.len() % 2 == 1 {
        writer.write_all(&[0])?;
    }
    Ok(())
}

/// Computes the RIFF size field for a body made of chunks with the given
/// payload lengths: 4 bytes for `WAVE` plus every chunk's header and padded
/// payload.
pub fn riff_size(payload_lens: &[usize]) -> CodecResult<u32> {
    let body = 4 + payload_lens
        .iter()
        .map(|&len| CHUNK_HEADER_LEN + padded_len(len))
        .sum::<usize>();
    chunk_size(tags::RIFF, body)
}

/// Writes the 12-byte `RIFF`/size/`WAVE` file header.
pub fn write_riff_header<W: Write>(writer: &mut W, riff_size: u32) -> io::Result<()> {
    writer.write_all(tags::RIFF)?;
    writer.write_all(&riff_size.to_le_bytes())?;
    writer.write_all(tags::WAVE)
}
