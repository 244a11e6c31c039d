#![no_main]

use libfuzzer_sys::fuzz_target;
use wavcue_codec::{build_timeline, decode_cues, DecodeOptions, LtxtLayout, TimelineOptions};

fuzz_target!(|data: &[u8]| {
    for ltxt_layout in [LtxtLayout::Standard, LtxtLayout::Legacy] {
        let metadata = decode_cues(data, &DecodeOptions { ltxt_layout });
        let timeline = build_timeline(&metadata, &TimelineOptions::default());
        assert_eq!(timeline.len(), metadata.cues.len());
        assert!(timeline.windows(2).all(|w| w[0].start <= w[1].start));
        assert!(timeline.iter().all(|region| region.end >= region.start));
    }
});
