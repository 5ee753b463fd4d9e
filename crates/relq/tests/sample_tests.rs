/// Tests for the sample catalog and runner
use relq::{
    catalog, run_all, run_sample, Dataset, Error, MemoryReporter, SampleConfig, TracingReporter,
};
use rust_decimal_macros::dec;
use std::io::Write;
use tempfile::NamedTempFile;

fn run(id: &str, config: &SampleConfig) -> Vec<String> {
    let mut reporter = MemoryReporter::new();
    run_sample(id, &Dataset::sample(), config, &mut reporter).unwrap();
    // Drop the section header.
    reporter.take().into_iter().skip(1).collect()
}

#[test]
fn test_linq1_reports_numbers_in_source_order() {
    let lines = run("linq1", &SampleConfig::default());
    assert_eq!(lines, ["Numbers < 5:", "4", "1", "3", "2", "0"]);
}

#[test]
fn test_task01_threshold_comes_from_config() {
    let lines = run("task01", &SampleConfig::default());
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], format!("{:<40} : {}", "Alfreds Futterkiste", "2022.50"));

    let strict = SampleConfig::default().with_min_customer_total(dec!(2500));
    let lines = run("task01", &strict);
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("Split Rail Beer & Ale"));
}

#[test]
fn test_task02_grouping_and_join_report_the_same() {
    let config = SampleConfig::default();
    let grouped = run("task02_1", &config);
    let joined = run("task02_2", &config);
    assert_eq!(grouped, joined);
    assert_eq!(grouped[2], "AROUT: Exotic Liquids, Thames Valley Provisions");
    assert_eq!(grouped[4], "BONAP: (none)");
}

#[test]
fn test_task06_uses_configured_patterns() {
    let lines = run("task06", &SampleConfig::default());
    assert_eq!(lines.len(), 8);

    // Accept any phone and postal code: only the missing regions remain.
    let lenient = SampleConfig::default().with_patterns(".*", "");
    let lines = run("task06", &lenient);
    assert_eq!(lines.len(), 6);
}

#[test]
fn test_task10_has_three_sections() {
    let lines = run("task10", &SampleConfig::default());
    let sections: Vec<&String> = lines.iter().filter(|l| l.starts_with("==")).collect();
    assert_eq!(sections.len(), 3);
    assert!(lines.contains(&"1996: 10 orders, total 9878.31".to_string()));
}

#[test]
fn test_every_sample_runs() {
    let mut reporter = MemoryReporter::new();
    let ran = run_all(&Dataset::sample(), &SampleConfig::default(), &mut reporter).unwrap();
    assert_eq!(ran, catalog().len());

    let headers = reporter
        .lines()
        .iter()
        .filter(|l| l.starts_with("== Task") || l.starts_with("== Where"))
        .count();
    assert_eq!(headers, catalog().len());
}

#[test]
fn test_unknown_sample_and_bad_config() {
    let mut reporter = MemoryReporter::new();
    let dataset = Dataset::sample();

    let result = run_sample("task42", &dataset, &SampleConfig::default(), &mut reporter);
    assert!(matches!(result, Err(Error::Config(_))));

    let inverted = SampleConfig::default().with_price_bands(dec!(50), dec!(20));
    let result = run_sample("task08", &dataset, &inverted, &mut reporter);
    assert!(matches!(result, Err(Error::Config(_))));

    let bad_pattern = SampleConfig::default().with_patterns("(", "");
    let result = run_all(&dataset, &bad_pattern, &mut reporter);
    assert!(matches!(result, Err(Error::Pattern(_))));

    assert!(reporter.lines().is_empty());
}

#[test]
fn test_samples_over_a_loaded_dataset() {
    let json = r#"{
        "customers": [
            {
                "id": "C1", "company_name": "Only Customer", "city": "Lyon", "country": "France",
                "region": "ARA", "postal_code": "69001", "phone": "(4) 72 00 00 00",
                "orders": [
                    { "id": 1, "total": "1500.00", "order_date": "1998-01-05T10:30:00" },
                    { "id": 2, "total": "20.00", "order_date": "1998-02-01T00:00:00" }
                ]
            }
        ],
        "suppliers": [
            { "id": "S1", "supplier_name": "Lyon Foods", "city": "Lyon", "country": "France" }
        ],
        "products": []
    }"#;
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    let dataset = Dataset::from_json_file(file.path()).unwrap();

    let mut reporter = MemoryReporter::new();
    let config = SampleConfig::default();
    run_sample("task03", &dataset, &config, &mut reporter).unwrap();
    run_sample("task02_2", &dataset, &config, &mut reporter).unwrap();
    run_sample("task06", &dataset, &config, &mut reporter).unwrap();

    let lines = reporter.take();
    assert_eq!(lines.len(), 5);
    assert!(lines[1].starts_with("C1 Only Customer (Lyon, France)"));
    assert_eq!(lines[3], "C1: Lyon Foods");
}

#[test]
fn test_tracing_reporter_sees_every_record() {
    let mut reporter = TracingReporter::new();
    run_sample(
        "linq2",
        &Dataset::sample(),
        &SampleConfig::default(),
        &mut reporter,
    )
    .unwrap();
    assert_eq!(reporter.reported(), 8);
}

#[test]
fn test_totals_at_the_decimal_limit() {
    let customers = |second_total: &str| {
        format!(
            r#"{{
            "customers": [
                {{
                    "id": "C1", "company_name": "Big Spender", "city": "Lyon", "country": "France",
                    "orders": [
                        {{ "id": 1, "total": "79228162514264337593543950335", "order_date": "1998-01-05T00:00:00" }},
                        {{ "id": 2, "total": "{}", "order_date": "1998-02-01T00:00:00" }}
                    ]
                }},
                {{ "id": "C2", "company_name": "Window Shopper", "city": "Lyon", "country": "France" }}
            ]
        }}"#,
            second_total
        )
    };

    // Every sample sums or averages within the range a loaded dataset fits in.
    let dataset = Dataset::from_json(&customers("0")).unwrap();
    let mut reporter = MemoryReporter::new();
    let ran = run_all(&dataset, &SampleConfig::default(), &mut reporter).unwrap();
    assert_eq!(ran, catalog().len());
    assert!(reporter
        .lines()
        .iter()
        .any(|line| line.contains("79228162514264337593543950335")));

    // One cent more and the customer's turnover would not fit.
    let result = Dataset::from_json(&customers("0.01"));
    assert!(matches!(result, Err(Error::InvalidData(_))));
}
