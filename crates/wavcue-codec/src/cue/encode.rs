//! WAV region encoder.
//!
//! Produces `RIFF | fmt | data | cue | LIST/adtl`, with silent PCM spanning
//! sample 0 to the latest region end.

use std::fs;
use std::io::Write;
use std::path::Path;

use log::debug;

use crate::error::{CodecError, CodecResult};
use crate::riff::{chunk_size, riff_size, tags, write_chunk, write_riff_header};
use crate::timestamp::Timestamp;
use crate::wav::{silence, WavFormat};

use super::model::SubtitleEntry;
use super::{CUE_RECORD_LEN, LTXT_PAYLOAD_LEN};

/// One region resolved to the sample domain.
struct SampleSpan<'a> {
    id: u32,
    start: u32,
    end: u32,
    text: &'a str,
}

/// Appends a chunk to an in-memory buffer.
fn push_chunk(out: &mut Vec<u8>, tag: &[u8; 4], payload: &[u8]) {
    write_chunk(out, tag, payload).expect("writing to Vec should not fail");
}

/// Converts a timestamp to a 32-bit sample offset.
fn sample_offset(ts: Timestamp, rate: u32, index: usize, field: &'static str) -> CodecResult<u32> {
    u32::try_from(ts.to_samples(rate)).map_err(|_| {
        CodecError::timestamp(ts.to_string(), "sample offset exceeds 32 bits")
            .in_entry(index, field)
    })
}

/// Encodes subtitle entries as a silent WAV file with region markers.
///
/// Cue ids are assigned 1, 2, ... in input order. Returns `Ok(None)` when
/// `entries` is empty: there is nothing to write.
pub fn encode_regions(
    entries: &[SubtitleEntry],
    format: &WavFormat,
) -> CodecResult<Option<Vec<u8>>> {
    format.validate()?;
    if entries.is_empty() {
        return Ok(None);
    }

    let rate = format.sample_rate;
    let mut spans = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let index = i + 1;
        if entry.end < entry.start {
            return Err(CodecError::InvertedRegion {
                index,
                start: entry.start.to_string(),
                end: entry.end.to_string(),
            });
        }
        spans.push(SampleSpan {
            id: u32::try_from(index).map_err(|_| CodecError::format("more than 2^32 regions"))?,
            start: sample_offset(entry.start, rate, index, "start")?,
            end: sample_offset(entry.end, rate, index, "end")?,
            text: &entry.text,
        });
    }

    let frames = spans.iter().map(|s| u64::from(s.end)).max().unwrap_or(0);
    let data = silence(format, frames)?;

    let cue = cue_payload(&spans)?;
    let list = adtl_payload(&spans)?;
    let fmt = format.to_fmt_payload()?;

    let total = riff_size(&[fmt.len(), data.len(), cue.len(), list.len()])?;
    let mut out = Vec::with_capacity(total as usize + 8);
    write_riff_header(&mut out, total).expect("writing to Vec should not fail");
    push_chunk(&mut out, tags::FMT, &fmt);
    push_chunk(&mut out, tags::DATA, &data);
    push_chunk(&mut out, tags::CUE, &cue);
    push_chunk(&mut out, tags::LIST, &list);

    debug!(
        "encoded {} regions over {} frames ({} bytes)",
        spans.len(),
        frames,
        out.len()
    );
    Ok(Some(out))
}

/// Parses `(start, end, label)` timestamp strings and encodes them.
///
/// Any malformed timestamp rejects the whole input, naming the entry and
/// field it came from.
pub fn encode_timestamps<S: AsRef<str>>(
    entries: &[(S, S, S)],
    format: &WavFormat,
) -> CodecResult<Option<Vec<u8>>> {
    let parsed = entries
        .iter()
        .enumerate()
        .map(|(i, (start, end, label))| -> CodecResult<SubtitleEntry> {
            Ok(SubtitleEntry::new(
                Timestamp::parse(start.as_ref()).map_err(|e| e.in_entry(i + 1, "start"))?,
                Timestamp::parse(end.as_ref()).map_err(|e| e.in_entry(i + 1, "end"))?,
                label.as_ref(),
            ))
        })
        .collect::<CodecResult<Vec<_>>>()?;
    encode_regions(&parsed, format)
}

/// Encodes `entries` and writes the result to `path`.
///
/// Returns `false` without touching the file system when there are no
/// entries.
pub fn write_region_wav(
    path: impl AsRef<Path>,
    entries: &[SubtitleEntry],
    format: &WavFormat,
) -> CodecResult<bool> {
    let path = path.as_ref();
    let Some(bytes) = encode_regions(entries, format)? else {
        return Ok(false);
    };
    let mut file = fs::File::create(path).map_err(|e| CodecError::io(path, e))?;
    file.write_all(&bytes).map_err(|e| CodecError::io(path, e))?;
    Ok(true)
}

/// `count | (id, position, "data", chunk start, block start, offset)*`
fn cue_payload(spans: &[SampleSpan<'_>]) -> CodecResult<Vec<u8>> {
    let mut cue = Vec::with_capacity(4 + spans.len() * CUE_RECORD_LEN);
    cue.extend_from_slice(&(spans.len() as u32).to_le_bytes());
    for span in spans {
        cue.extend_from_slice(&span.id.to_le_bytes());
        cue.extend_from_slice(&span.start.to_le_bytes());
        cue.extend_from_slice(tags::DATA);
        cue.extend_from_slice(&0u32.to_le_bytes());
        cue.extend_from_slice(&0u32.to_le_bytes());
        cue.extend_from_slice(&span.start.to_le_bytes());
    }
    chunk_size(tags::CUE, cue.len())?;
    Ok(cue)
}

/// `adtl` followed by every `labl` sub-chunk, then every `ltxt` sub-chunk.
fn adtl_payload(spans: &[SampleSpan<'_>]) -> CodecResult<Vec<u8>> {
    let mut labels = Vec::new();
    let mut lengths = Vec::with_capacity(spans.len() * (8 + LTXT_PAYLOAD_LEN));

    for span in spans {
        let mut labl = Vec::with_capacity(4 + span.text.len() + 1);
        labl.extend_from_slice(&span.id.to_le_bytes());
        labl.extend_from_slice(span.text.as_bytes());
        labl.push(0);
        chunk_size(tags::LABL, labl.len())?;
        push_chunk(&mut labels, tags::LABL, &labl);

        // dwName, dwSampleLength, dwPurposeID, wCountry, wLanguage, wDialect, wCodePage
        let mut ltxt = [0u8; LTXT_PAYLOAD_LEN];
        ltxt[0..4].copy_from_slice(&span.id.to_le_bytes());
        ltxt[4..8].copy_from_slice(&(span.end - span.start).to_le_bytes());
        push_chunk(&mut lengths, tags::LTXT, &ltxt);
    }

    let mut list = Vec::with_capacity(4 + labels.len() + lengths.len());
    list.extend_from_slice(tags::ADTL);
    list.extend_from_slice(&labels);
    list.extend_from_slice(&lengths);
    chunk_size(tags::LIST, list.len())?;
    Ok(list)
}
