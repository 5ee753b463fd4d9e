#![no_main]

use libfuzzer_sys::fuzz_target;
use relq::{run_all, Dataset, MemoryReporter, SampleConfig};

fuzz_target!(|data: &[u8]| {
    // Limit input size to prevent timeout
    if data.len() > 16 * 1024 {
        return;
    }
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };

    // Loading must never panic; a dataset that loads must survive every sample
    if let Ok(dataset) = Dataset::from_json(json) {
        let config = SampleConfig::default();
        let mut reporter = MemoryReporter::new();
        let _ = run_all(&dataset, &config, &mut reporter);

        // Whatever loaded also serializes and loads back unchanged
        if let Ok(text) = dataset.to_json() {
            assert_eq!(Dataset::from_json(&text).ok(), Some(dataset));
        }
    }
});
