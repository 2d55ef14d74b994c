#![no_main]

use libfuzzer_sys::fuzz_target;
use scholar_snapshot::{build_envelope, extract_records};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes as a profile page: extraction must never panic,
    // and the envelope it feeds must stay serializable and consistent.
    let html = String::from_utf8_lossy(data);
    let envelope = build_envelope(extract_records(&html));

    assert_eq!(envelope.count, envelope.publications.len());
    assert!(envelope.publications.iter().all(|p| !p.citations.is_empty()));
    serde_json::to_string(&envelope).expect("envelope serializes");
});
