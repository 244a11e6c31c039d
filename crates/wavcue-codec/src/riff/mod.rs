//! RIFF chunk primitives.
//!
//! A RIFF file is a 12-byte `RIFF`/size/`WAVE` header followed by chunks of
//! the form `tag (4 bytes) | size (u32 LE) | payload | pad byte if size is odd`.
//! The declared size never includes the pad byte.

mod reader;
mod writer;

#[cfg(test)]
mod tests;

pub use reader::{Chunk, ChunkReader};
pub use writer::{chunk_size, padded_len, riff_size, write_chunk, write_riff_header};

/// Length of the `RIFF`/size/`WAVE` file header.
pub const RIFF_HEADER_LEN: usize = 12;

/// Length of a chunk header (tag + size).
pub const CHUNK_HEADER_LEN: usize = 8;

/// Four-character chunk identifiers used by the codec.
pub mod tags {
    pub const RIFF: &[u8; 4] = b"RIFF";
    pub const WAVE: &[u8; 4] = b"WAVE";
    pub const FMT: &[u8; 4] = b"fmt ";
    pub const DATA: &[u8; 4] = b"data";
    pub const CUE: &[u8; 4] = b"cue ";
    pub const LIST: &[u8; 4] = b"LIST";
    pub const ADTL: &[u8; 4] = b"adtl";
    pub const LABL: &[u8; 4] = b"labl";
    pub const LTXT: &[u8; 4] = b"ltxt";
}

/// Reads a little-endian u32 at `offset`, if the slice is long enough.
pub(crate) fn read_u32_le(bytes: &[u8], offset: usize) -> Option<u32> {
    let end = offset.checked_add(4)?;
    let b = bytes.get(offset..end)?;
    Some(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

/// Reads a little-endian u16 at `offset`, if the slice is long enough.
pub(crate) fn read_u16_le(bytes: &[u8], offset: usize) -> Option<u16> {
    let end = offset.checked_add(2)?;
    let b = bytes.get(offset..end)?;
    Some(u16::from_le_bytes([b[0], b[1]]))
}

/// Renders a chunk tag for diagnostics, escaping non-printable bytes.
pub(crate) fn tag_name(tag: &[u8; 4]) -> String {
    tag.escape_ascii().to_string()
}
