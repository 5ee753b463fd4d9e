//! Restriction samples: plain filters over one collection.

use crate::config::SampleConfig;
use crate::reporter::Reporter;
use relq_core::{AsQuery, Query, Result};
use relq_model::{ContactRules, Customer, Dataset, Product};
use rust_decimal::Decimal;

/// Input of the `linq1` sample.
pub const NUMBERS: [i32; 10] = [5, 4, 1, 3, 9, 8, 6, 7, 2, 0];

/// Numbers below five, in source order.
pub fn low_numbers(numbers: &[i32]) -> Query<'_, &i32> {
    numbers.query().filter(|n| **n < 5)
}

/// Products with at least one unit in stock.
pub fn products_in_stock(dataset: &Dataset) -> Query<'_, &Product> {
    dataset.products().query().filter(|p| p.units_in_stock > 0)
}

/// Customers with at least one order whose total exceeds `limit`.
pub fn customers_with_order_above(dataset: &Dataset, limit: Decimal) -> Query<'_, &Customer> {
    dataset
        .customers()
        .query()
        .filter(move |c| c.orders().any(|o| o.total > limit))
}

/// Customers whose contact record breaks any of `rules`.
pub fn malformed_contacts<'a>(
    dataset: &'a Dataset,
    rules: &ContactRules,
) -> Query<'a, &'a Customer> {
    dataset
        .customers()
        .query()
        .filter_by(&rules.malformed_contact())
}

pub(crate) fn run_linq1(_: &Dataset, _: &SampleConfig, reporter: &mut dyn Reporter) -> Result<()> {
    reporter.report(&"Numbers < 5:");
    low_numbers(&NUMBERS).for_each(|n| reporter.report(n));
    Ok(())
}

pub(crate) fn run_linq2(
    dataset: &Dataset,
    _: &SampleConfig,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    products_in_stock(dataset).for_each(|p| reporter.report(p));
    Ok(())
}

pub(crate) fn run_task03(
    dataset: &Dataset,
    config: &SampleConfig,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    let limit = config.large_order_total;
    customers_with_order_above(dataset, limit).for_each(|c| {
        let largest = c.orders().max(|o| o.total).unwrap_or_default();
        reporter.report(&format_args!("{} largest order {}", c, largest));
    });
    Ok(())
}

pub(crate) fn run_task06(
    dataset: &Dataset,
    config: &SampleConfig,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    let rules = config.contact_rules()?;
    malformed_contacts(dataset, &rules).for_each(|c| {
        reporter.report(&format_args!(
            "{} region={} postal_code={} phone={}",
            c,
            c.region().unwrap_or("-"),
            c.postal_code().unwrap_or("-"),
            c.phone().unwrap_or("-")
        ));
    });
    Ok(())
}
