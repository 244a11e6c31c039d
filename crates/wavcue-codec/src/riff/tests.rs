//! Tests for the RIFF chunk primitives.

use super::reader::ChunkReader;
use super::writer::{chunk_size, padded_len, riff_size, write_chunk, write_riff_header};
use super::{read_u16_le, read_u32_le, tag_name, tags};

fn chunk_bytes(tag: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    write_chunk(&mut out, tag, payload).unwrap();
    out
}

// =========================================================================
// Writer tests
// =========================================================================

#[test]
fn test_write_chunk_even_payload() {
    let bytes = chunk_bytes(b"abcd", &[1, 2, 3, 4]);
    assert_eq!(&bytes[0..4], b"abcd");
    assert_eq!(read_u32_le(&bytes, 4), Some(4));
    assert_eq!(bytes.len(), 12);
}

#[test]
fn test_write_chunk_odd_payload_is_padded() {
    let bytes = chunk_bytes(tags::LABL, &[1, 2, 3]);
    // Declared size excludes the pad byte
    assert_eq!(read_u32_le(&bytes, 4), Some(3));
    assert_eq!(bytes.len(), 12);
    assert_eq!(bytes[11], 0);
}

#[test]
fn test_padded_len() {
    assert_eq!(padded_len(0), 0);
    assert_eq!(padded_len(1), 2);
    assert_eq!(padded_len(2), 2);
    assert_eq!(padded_len(7), 8);
}

#[test]
fn test_riff_size_counts_wave_and_padding() {
    // WAVE + fmt (8 + 16) + a 3-byte chunk padded to 4
    assert_eq!(riff_size(&[16, 3]).unwrap(), 4 + 24 + 12);
}

#[test]
fn test_write_riff_header() {
    let mut out = Vec::new();
    write_riff_header(&mut out, 36).unwrap();
    assert_eq!(&out[0..4], b"RIFF");
    assert_eq!(read_u32_le(&out, 4), Some(36));
    assert_eq!(&out[8..12], b"WAVE");
}

#[test]
fn test_chunk_size_limit() {
    assert_eq!(chunk_size(tags::DATA, 10).unwrap(), 10);
    if usize::BITS > 32 {
        let err = chunk_size(tags::DATA, u32::MAX as usize + 1).unwrap_err();
        assert!(err.to_string().contains("data"));
    }
}

// =========================================================================
// Reader tests
// =========================================================================

#[test]
fn test_reader_walks_padded_chunks() {
    let mut body = chunk_bytes(b"odd ", &[9, 9, 9]);
    body.extend(chunk_bytes(b"next", &[7, 7]));

    let chunks: Vec<_> = ChunkReader::new(&body).collect();
    assert_eq!(chunks.len(), 2);
    assert_eq!(&chunks[0].tag, b"odd ");
    assert_eq!(chunks[0].payload, &[9, 9, 9]);
    assert_eq!(&chunks[1].tag, b"next");
    assert_eq!(chunks[1].payload, &[7, 7]);
    assert!(!chunks[1].is_truncated());
}

#[test]
fn test_reader_yields_truncated_payload_then_stops() {
    let mut body = chunk_bytes(b"full", &[1, 2]);
    body.extend_from_slice(b"part");
    body.extend_from_slice(&100u32.to_le_bytes());
    body.extend_from_slice(&[5, 5, 5]);

    let chunks: Vec<_> = ChunkReader::new(&body).collect();
    assert_eq!(chunks.len(), 2);
    assert!(chunks[1].is_truncated());
    assert_eq!(chunks[1].declared_size, 100);
    assert_eq!(chunks[1].payload, &[5, 5, 5]);
}

#[test]
fn test_reader_stops_on_incomplete_header() {
    let mut body = chunk_bytes(b"full", &[1, 2]);
    body.extend_from_slice(b"cu");

    let mut reader = ChunkReader::new(&body);
    assert!(reader.next().is_some());
    assert_eq!(reader.position(), 10);
    assert!(reader.next().is_none());
}

#[test]
fn test_reader_handles_huge_declared_size() {
    let mut body = b"huge".to_vec();
    body.extend_from_slice(&u32::MAX.to_le_bytes());
    body.extend_from_slice(&[1, 2, 3, 4]);

    let chunks: Vec<_> = ChunkReader::new(&body).collect();
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].payload.len(), 4);
}

#[test]
fn test_little_endian_helpers() {
    let bytes = [0x01, 0x02, 0x03, 0x04, 0x05];
    assert_eq!(read_u32_le(&bytes, 0), Some(0x0403_0201));
    assert_eq!(read_u32_le(&bytes, 2), None);
    assert_eq!(read_u16_le(&bytes, 3), Some(0x0504));
    assert_eq!(read_u16_le(&bytes, usize::MAX), None);
}

#[test]
fn test_tag_name_escapes() {
    assert_eq!(tag_name(b"cue "), "cue ");
    assert_eq!(tag_name(&[0, b'a', b'b', b'c']), "\\x00abc");
}
