//! Error types for the cue codec.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while reading or synthesizing region WAV files.
///
/// Format quirks found while walking a RIFF file are never reported through
/// this type; the decoder absorbs them and returns whatever it could parse.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A file could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path of the file being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A timestamp string could not be parsed.
    #[error("invalid timestamp '{value}': {reason}")]
    InvalidTimestamp {
        /// The offending text.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// An input entry carried a bad field.
    #[error("entry {index}, {field}: {source}")]
    InvalidEntry {
        /// 1-based position of the entry in the input.
        index: usize,
        /// Name of the field (`start`, `end`, `timing`).
        field: &'static str,
        /// The underlying error.
        #[source]
        source: Box<CodecError>,
    },

    /// A region ends before it starts.
    #[error("entry {index}: end {end} is before start {start}")]
    InvertedRegion {
        /// 1-based position of the entry in the input.
        index: usize,
        /// Rendered start timestamp.
        start: String,
        /// Rendered end timestamp.
        end: String,
    },

    /// The PCM format parameters are unusable.
    #[error("invalid WAV format: {message}")]
    InvalidFormat {
        /// Error message.
        message: String,
    },

    /// A chunk payload does not fit in a 32-bit RIFF size field.
    #[error("{tag} chunk too large: {len} bytes")]
    ChunkTooLarge {
        /// Chunk tag.
        tag: String,
        /// Payload length in bytes.
        len: usize,
    },

    /// A subtitle file could not be parsed.
    #[error("subtitle block {block}: {message}")]
    Subtitle {
        /// 1-based block number in the source file.
        block: usize,
        /// Error message.
        message: String,
    },
}

impl CodecError {
    /// Creates an I/O error tagged with the offending path.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates an invalid timestamp error.
    pub fn timestamp(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Wraps an error with the entry index and field it came from.
    pub fn in_entry(self, index: usize, field: &'static str) -> Self {
        Self::InvalidEntry {
            index,
            field,
            source: Box::new(self),
        }
    }
}
