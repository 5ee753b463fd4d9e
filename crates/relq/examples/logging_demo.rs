use relq::logging::{LogConfig, LogFormat};
use relq::{run_sample, Dataset, SampleConfig, TracingReporter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Trace level shows the engine's bucket, group and sort events
    let _guard = LogConfig::trace()
        .with_format(LogFormat::Compact)
        .init()?;

    println!("=== relq Logging Demo ===\n");

    let dataset = Dataset::sample();
    let config = SampleConfig::default();
    let mut reporter = TracingReporter::new();

    println!("1. Group-join (join buckets logged at debug)...");
    run_sample("task02_2", &dataset, &config, &mut reporter)?;

    println!("\n2. Nested grouping and ordering (group counts and sort sizes at trace)...");
    run_sample("task07", &dataset, &config, &mut reporter)?;

    println!("\n{} records reported", reporter.reported());
    Ok(())
}
