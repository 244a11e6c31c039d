//! SubRip (`.srt`) reading and writing.
//!
//! Reading produces the encoder's input; writing renders the decoder's
//! timeline. Multi-line cue text is joined with single spaces because region
//! labels are one line in DAW marker lists.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::cue::{SubtitleEntry, TimedRegion};
use crate::error::{CodecError, CodecResult};
use crate::timestamp::Timestamp;

const ARROW: &str = "-->";

/// Parses SubRip text into entries, in file order.
///
/// Blocks are separated by blank lines. The numeric index line is optional;
/// the timing line is not. A leading byte-order mark and CRLF line endings
/// are accepted.
pub fn parse(content: &str) -> CodecResult<Vec<SubtitleEntry>> {
    let content = content.trim_start_matches('\u{feff}');
    let mut entries = Vec::new();
    let mut lines = content.lines().map(str::trim).peekable();
    let mut block = 0;

    while let Some(first) = lines.next() {
        if first.is_empty() {
            continue;
        }
        block += 1;

        let timing = if first.contains(ARROW) {
            first
        } else {
            if first.parse::<u64>().is_err() {
                return Err(CodecError::Subtitle {
                    block,
                    message: format!("expected a cue number, found '{first}'"),
                });
            }
            match lines.next() {
                Some(line) if line.contains(ARROW) => line,
                Some(line) => {
                    return Err(CodecError::Subtitle {
                        block,
                        message: format!("expected 'start --> end', found '{line}'"),
                    })
                }
                None => {
                    return Err(CodecError::Subtitle {
                        block,
                        message: "missing timing line".to_string(),
                    })
                }
            }
        };

        let (start, end) = timing.split_once(ARROW).unwrap_or((timing, ""));
        let start = Timestamp::parse(start).map_err(|e| e.in_entry(block, "start"))?;
        // Some tools append positioning after the end time ("X1:... Y1:...").
        let end = end.split_whitespace().next().unwrap_or("");
        let end = Timestamp::parse(end).map_err(|e| e.in_entry(block, "end"))?;

        let mut text = String::new();
        while let Some(line) = lines.next_if(|line| !line.is_empty()) {
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(line);
        }

        entries.push(SubtitleEntry::new(start, end, text));
    }

    Ok(entries)
}

/// Reads and parses a SubRip file.
pub fn read(path: impl AsRef<Path>) -> CodecResult<Vec<SubtitleEntry>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| CodecError::io(path, e))?;
    parse(&content)
}

/// Renders regions as SubRip text, numbered from 1.
pub fn format(regions: &[TimedRegion]) -> String {
    let mut out = String::new();
    for (i, region) in regions.iter().enumerate() {
        // Writing to a String cannot fail.
        let _ = write!(
            out,
            "{}\n{} --> {}\n{}\n\n",
            i + 1,
            region.start_timestamp(),
            region.end_timestamp(),
            region.text
        );
    }
    out
}
