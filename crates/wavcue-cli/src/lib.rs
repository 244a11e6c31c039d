//! wavcue CLI library.
//!
//! Command implementations behind the `wavcue` binary: building region WAV
//! files from SubRip scripts, recovering scripts from marked WAV files, and
//! inspecting marker chunks.

pub mod commands;
pub mod logging;
