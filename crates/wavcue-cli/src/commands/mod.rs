//! CLI command implementations

pub mod extract;
pub mod inspect;
pub mod regions;

use std::path::{Path, PathBuf};

/// `<dir>/<stem><suffix>` next to `input`.
pub(crate) fn sibling_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{stem}{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sibling_path() {
        assert_eq!(
            sibling_path(Path::new("/work/ep01.srt"), "_regions.wav"),
            PathBuf::from("/work/ep01_regions.wav")
        );
        assert_eq!(
            sibling_path(Path::new("mix.final.wav"), "_reconstructed.srt"),
            PathBuf::from("mix.final_reconstructed.srt")
        );
    }
}
