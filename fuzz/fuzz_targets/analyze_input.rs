#![no_main]

use libfuzzer_sys::fuzz_target;
use supplynet_analysis::analyze;
use supplynet_core::input::parse_relationships;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(relationships) = parse_relationships(text) else {
        return;
    };

    let report = analyze(&relationships);

    for score in report.risk_scores.provider_scores.values() {
        assert!((20..=100).contains(score));
    }
    let members: usize = report.communities.sizes().iter().sum();
    assert_eq!(members, report.risk_scores.provider_scores.len());
});
