//! Run the sample catalog.
//!
//! ```text
//! cargo run --example samples_demo                # every sample
//! cargo run --example samples_demo -- task05      # one sample
//! cargo run --example samples_demo -- --list      # the catalog
//! cargo run --example samples_demo -- all data.json
//! ```
//!
//! Thresholds and patterns can be overridden with `RELQ_*` variables, e.g.
//! `RELQ_MIN_CUSTOMER_TOTAL=2000`.

use relq::logging::LogConfig;
use relq::{catalog, run_all, run_sample, ConsoleReporter, Dataset, SampleConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = LogConfig::warn().init()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let target = args.first().map(String::as_str).unwrap_or("all");

    if target == "--list" {
        for sample in catalog() {
            println!("{:<10} {:<24} {}", sample.id, sample.category, sample.description);
        }
        return Ok(());
    }

    let dataset = match args.get(1) {
        Some(path) => Dataset::from_json_file(path)?,
        None => Dataset::sample(),
    };
    let config = SampleConfig::from_env()?;
    let mut reporter = ConsoleReporter::new();

    if target == "all" {
        let ran = run_all(&dataset, &config, &mut reporter)?;
        println!("\n{} samples run", ran);
    } else {
        run_sample(target, &dataset, &config, &mut reporter)?;
    }
    Ok(())
}
