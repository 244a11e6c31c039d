//! RIFF region decoder.

use std::fs;
use std::io::Read;
use std::path::Path;

use log::{debug, trace};

use crate::error::{CodecError, CodecResult};
use crate::riff::{read_u32_le, tag_name, tags, Chunk, ChunkReader, RIFF_HEADER_LEN};
use crate::wav::WavFormat;

use super::model::CueMetadata;
use super::CUE_RECORD_LEN;

/// Where an `ltxt` payload keeps the region length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LtxtLayout {
    /// `dwName, dwSampleLength, dwPurposeID, ...`: length at bytes 4..8.
    /// This is what the encoder writes.
    #[default]
    Standard,
    /// Length at bytes 12..16, as written by older marker scripts.
    Legacy,
}

impl LtxtLayout {
    /// Byte offset of the length field inside the `ltxt` payload.
    pub fn length_offset(self) -> usize {
        match self {
            LtxtLayout::Standard => 4,
            LtxtLayout::Legacy => 12,
        }
    }
}

/// Decoder settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Layout used to read `ltxt` lengths.
    pub ltxt_layout: LtxtLayout,
}

/// Reads marker metadata from a WAV file on disk.
///
/// Only I/O failures are errors. A file with no usable markers yields empty
/// metadata.
pub fn read_cues(path: impl AsRef<Path>, options: &DecodeOptions) -> CodecResult<CueMetadata> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| CodecError::io(path, e))?;
    debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(decode_cues(&bytes, options))
}

/// Reads a whole stream, then decodes it. `source` names the stream in errors.
pub fn decode_cues_from_reader<R: Read>(
    mut reader: R,
    source: impl AsRef<Path>,
    options: &DecodeOptions,
) -> CodecResult<CueMetadata> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| CodecError::io(source, e))?;
    Ok(decode_cues(&bytes, options))
}

/// Decodes marker metadata from WAV file bytes.
///
/// The RIFF header is skipped without checking its declared size. The chunk
/// walk stops at the first incomplete chunk header, keeping everything parsed
/// up to that point.
pub fn decode_cues(bytes: &[u8], options: &DecodeOptions) -> CueMetadata {
    let mut metadata = CueMetadata::default();

    if bytes.len() < RIFF_HEADER_LEN {
        debug!("input too short for a RIFF header: {} bytes", bytes.len());
        return metadata;
    }
    if &bytes[0..4] != tags::RIFF || &bytes[8..12] != tags::WAVE {
        debug!("missing RIFF/WAVE magic, walking chunks anyway");
    }

    for chunk in ChunkReader::new(&bytes[RIFF_HEADER_LEN..]) {
        if chunk.is_truncated() {
            debug!(
                "{} chunk truncated: {} of {} bytes present",
                tag_name(&chunk.tag),
                chunk.payload.len(),
                chunk.declared_size
            );
        }

        match &chunk.tag {
            tags::CUE => read_cue_table(&chunk, &mut metadata),
            tags::LIST => read_list(&chunk, options, &mut metadata),
            tags::FMT => {
                metadata.format = WavFormat::from_fmt_payload(chunk.payload);
            }
            tags::DATA => {
                metadata.data_len = Some(chunk.declared_size);
            }
            other => trace!("skipping {} chunk", tag_name(other)),
        }
    }

    metadata
}

fn read_cue_table(chunk: &Chunk<'_>, metadata: &mut CueMetadata) {
    let Some(count) = read_u32_le(chunk.payload, 0) else {
        debug!("cue chunk too short for its point count");
        return;
    };

    let records = chunk.payload[4..].chunks_exact(CUE_RECORD_LEN);
    let available = records.len();
    for record in records.take(count as usize) {
        // id, position, fccChunk, chunkStart, blockStart, sampleOffset
        if let (Some(id), Some(offset)) = (read_u32_le(record, 0), read_u32_le(record, 20)) {
            metadata.cues.insert(id, offset);
        }
    }

    if available < count as usize {
        debug!("cue table declares {count} points but holds {available}");
    }
}

fn read_list(chunk: &Chunk<'_>, options: &DecodeOptions, metadata: &mut CueMetadata) {
    let Some(list_type) = chunk.payload.get(0..4) else {
        debug!("LIST chunk too short for its type");
        return;
    };
    if list_type != tags::ADTL {
        trace!("skipping LIST/{} chunk", list_type.escape_ascii());
        return;
    }

    for sub in ChunkReader::new(&chunk.payload[4..]) {
        if sub.is_truncated() {
            debug!(
                "adtl/{} sub-chunk truncated: {} of {} bytes present, skipped",
                tag_name(&sub.tag),
                sub.payload.len(),
                sub.declared_size
            );
            continue;
        }
        match &sub.tag {
            tags::LABL => {
                let Some(id) = read_u32_le(sub.payload, 0) else {
                    debug!("labl sub-chunk too short for a cue id");
                    continue;
                };
                let text = String::from_utf8_lossy(&sub.payload[4..]);
                metadata
                    .labels
                    .insert(id, text.trim_end_matches('\0').to_string());
            }
            tags::LTXT => {
                let offset = options.ltxt_layout.length_offset();
                match (read_u32_le(sub.payload, 0), read_u32_le(sub.payload, offset)) {
                    (Some(id), Some(length)) => {
                        metadata.lengths.insert(id, length);
                    }
                    _ => debug!("ltxt sub-chunk too short: {} bytes", sub.payload.len()),
                }
            }
            other => trace!("skipping adtl/{} sub-chunk", tag_name(other)),
        }
    }
}
