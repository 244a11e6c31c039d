//! PCM container pieces: the `fmt ` descriptor and the `data` payload.

mod format;
mod pcm;

pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, extract_pcm_data, silence};
