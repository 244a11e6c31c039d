//! Forward-only chunk walker over an in-memory RIFF body.

use super::{read_u32_le, CHUNK_HEADER_LEN};

/// One chunk as seen by [`ChunkReader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// Four-character tag.
    pub tag: [u8; 4],
    /// Size field as declared in the file.
    pub declared_size: u32,
    /// Payload bytes actually present. Shorter than `declared_size` when the
    /// input ends inside the chunk.
    pub payload: &'a [u8],
}

impl Chunk<'_> {
    /// Returns true if the input ended before the declared payload did.
    pub fn is_truncated(&self) -> bool {
        self.payload.len() < self.declared_size as usize
    }
}

/// Iterates the chunks of a RIFF body (or of a `LIST` payload).
///
/// Iteration stops at the first incomplete chunk header. Chunk payloads that
/// run past the end of the input are yielded truncated, after which the walk
/// ends on its own because no further header can be read.
#[derive(Debug, Clone)]
pub struct ChunkReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ChunkReader<'a> {
    /// Creates a reader positioned at the first chunk header of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Current byte offset relative to the start of the walked slice.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<'a> Iterator for ChunkReader<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Chunk<'a>> {
        let header_end = self.pos.checked_add(CHUNK_HEADER_LEN)?;
        let header = self.bytes.get(self.pos..header_end)?;
        let tag = [header[0], header[1], header[2], header[3]];
        let declared_size = read_u32_le(header, 4)?;

        let size = declared_size as usize;
        let payload_end = header_end.saturating_add(size).min(self.bytes.len());
        let payload = &self.bytes[header_end..payload_end];

        // Chunks are word-aligned: skip the pad byte after odd payloads.
        let padded = size.saturating_add(size & 1);
        self.pos = header_end.saturating_add(padded).min(self.bytes.len());

        Some(Chunk {
            tag,
            declared_size,
            payload,
        })
    }
}
