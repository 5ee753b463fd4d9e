//! Ordering samples.

use super::aggregation::{first_orders, FirstOrder};
use crate::config::SampleConfig;
use crate::reporter::Reporter;
use relq_core::{Query, Result, SortSpec};
use relq_model::Dataset;

/// Year, then month ascending; busiest customer first within a month; ties
/// broken by company name.
pub fn first_order_spec<'a>() -> SortSpec<FirstOrder<'a>> {
    SortSpec::asc(|r: &FirstOrder<'_>| r.first.year)
        .then_asc(|r| r.first.month)
        .then_desc(|r| r.turnover)
        .then_asc_by_ref(|r| r.customer.company_name.as_str())
}

/// [`first_orders`] sorted by [`first_order_spec`].
pub fn first_orders_sorted(dataset: &Dataset) -> Query<'_, FirstOrder<'_>> {
    first_orders(dataset).order_by(first_order_spec())
}

pub(crate) fn run_task05(
    dataset: &Dataset,
    _: &SampleConfig,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    first_orders_sorted(dataset).for_each(|row| reporter.report(&row));
    Ok(())
}
