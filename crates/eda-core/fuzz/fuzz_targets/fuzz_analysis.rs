//! Fuzz target for the analysis pipeline.
//!
//! Whatever parses must analyze without panicking and score within [0, 1].

#![no_main]

use eda_core::{Eda, Parser, ReportOptions, render_markdown};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 50_000 {
        return;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(table) = Parser::new().parse_str(text) {
        let report = Eda::new().analyze_table(&table);
        assert!((0.0..=1.0).contains(&report.flags.quality_score));
        let _ = render_markdown(&report, &ReportOptions::default());
    }
});
