//! Audacity label-track export.

use std::fmt::Write as _;

use crate::cue::TimedRegion;

/// Renders regions as an Audacity label track: `start<TAB>end<TAB>text`,
/// times in seconds.
pub fn format(regions: &[TimedRegion]) -> String {
    let mut out = String::new();
    for region in regions {
        let _ = writeln!(
            out,
            "{:.6}\t{:.6}\t{}",
            region.start.as_secs_f64(),
            region.end.as_secs_f64(),
            region.text.replace(['\t', '\n'], " ")
        );
    }
    out
}
