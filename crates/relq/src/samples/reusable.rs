//! Reusable query: one definition, parameterized at execution time.

use crate::config::SampleConfig;
use crate::reporter::Reporter;
use indexmap::IndexMap;
use relq_core::{AsQuery, Execute, Result};
use relq_model::Dataset;
use rust_decimal::Decimal;

/// Company name to order total sum, for customers whose sum exceeds
/// `threshold`. Keys keep customer order.
///
/// Fails with `DuplicateKey` if two qualifying customers share a company name.
pub fn customer_totals(source: &Dataset, threshold: Decimal) -> Result<IndexMap<String, Decimal>> {
    source
        .customers()
        .query()
        .map(|c| (c, c.turnover()))
        .filter(move |(_, total)| *total > threshold)
        .to_map(|(c, _)| c.company_name.clone(), |(_, total)| total)
}

pub(crate) fn run_task01(
    dataset: &Dataset,
    config: &SampleConfig,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    let totals = dataset.execute(|source| customer_totals(source, config.min_customer_total))?;
    for (company, total) in &totals {
        reporter.report(&format_args!("{:<40} : {}", company, total));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_same_query_different_thresholds() {
        let dataset = Dataset::sample();

        let above_500 = dataset.execute(|s| customer_totals(s, dec!(500))).unwrap();
        let above_2000 = dataset.execute(|s| customer_totals(s, dec!(2000))).unwrap();

        assert_eq!(above_500.len(), 6);
        assert_eq!(
            above_2000.keys().map(String::as_str).collect::<Vec<_>>(),
            ["Alfreds Futterkiste", "Bon app'", "Split Rail Beer & Ale"]
        );
        assert_eq!(above_2000["Bon app'"], dec!(2524.68));
    }
}
