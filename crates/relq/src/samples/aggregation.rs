//! Aggregation samples.

use crate::config::SampleConfig;
use crate::reporter::Reporter;
use relq_core::{AsQuery, Query, Result, SortSpec};
use relq_model::{CountryCity, Customer, Dataset, Order, YearMonth};
use rust_decimal::Decimal;
use std::fmt;
use std::hash::Hash;

/// A customer with the month of its first order.
#[derive(Debug, Clone, PartialEq)]
pub struct FirstOrder<'a> {
    /// The customer
    pub customer: &'a Customer,
    /// Month of the earliest order
    pub first: YearMonth,
    /// Sum of all order totals
    pub turnover: Decimal,
}

impl fmt::Display for FirstOrder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<6} {:<40} since {} turnover {}",
            self.customer.id, self.customer.company_name, self.first, self.turnover
        )
    }
}

/// Customers with at least one order, with their first order month.
pub fn first_orders(dataset: &Dataset) -> Query<'_, FirstOrder<'_>> {
    dataset.customers().query().flat_map(|customer| {
        // No orders, no first month: the customer is skipped.
        customer.first_order_month().ok().map(|first| FirstOrder {
            customer,
            first,
            turnover: customer.turnover(),
        })
    })
}

/// Order statistics for one city.
#[derive(Debug, Clone, PartialEq)]
pub struct CityStats<'a> {
    /// The city
    pub location: CountryCity<'a>,
    /// Customers located there
    pub customers: usize,
    /// Orders placed by those customers
    pub orders: usize,
    /// Mean order total; `None` when the city has no orders
    pub average_order: Option<Decimal>,
    /// Mean number of orders per customer
    pub orders_per_customer: Decimal,
}

impl fmt::Display for CityStats<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} customers, {} orders, {} orders/customer, average order ",
            self.location,
            self.customers,
            self.orders,
            self.orders_per_customer.round_dp(2)
        )?;
        match self.average_order {
            Some(average) => write!(f, "{}", average.round_dp(2)),
            None => write!(f, "n/a"),
        }
    }
}

/// Profitability (mean order total) and intensity (orders per customer)
/// per city, cities in first-seen order.
pub fn city_statistics(dataset: &Dataset) -> Query<'_, CityStats<'_>> {
    dataset
        .customers()
        .query()
        .group_by_key(|c| c.location())
        .map(|city| CityStats {
            location: *city.key(),
            customers: city.len(),
            orders: city.sum(|c| c.orders.len()),
            average_order: city
                .query()
                .flat_map(|c| c.orders.iter())
                .average(|o| o.total)
                .ok(),
            orders_per_customer: city
                .average(|c| Decimal::from(c.orders.len()))
                .unwrap_or_default(),
        })
}

/// Order count and total for one period.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity<K> {
    /// Month, year or year/month
    pub period: K,
    /// Orders placed in the period
    pub orders: usize,
    /// Sum of their totals
    pub total: Decimal,
}

impl<K: fmt::Display> fmt::Display for Activity<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} orders, total {}",
            self.period, self.orders, self.total
        )
    }
}

fn activity<K>(dataset: &Dataset, period: fn(&Order) -> K) -> Query<'_, Activity<K>>
where
    K: Copy + Eq + Hash + Ord + 'static,
{
    dataset
        .orders()
        .group_by(move |(_, order)| period(order), |(_, order)| order.total)
        .map(|group| Activity {
            period: *group.key(),
            orders: group.len(),
            total: group.sum(|t| *t),
        })
        .order_by(SortSpec::asc(|a: &Activity<K>| a.period))
}

/// Activity per calendar month, all years combined.
pub fn activity_by_month(dataset: &Dataset) -> Query<'_, Activity<u32>> {
    activity(dataset, |o| o.year_month().month)
}

/// Activity per year.
pub fn activity_by_year(dataset: &Dataset) -> Query<'_, Activity<i32>> {
    activity(dataset, |o| o.year_month().year)
}

/// Activity per year and month.
pub fn activity_by_year_month(dataset: &Dataset) -> Query<'_, Activity<YearMonth>> {
    activity(dataset, Order::year_month)
}

pub(crate) fn run_task04(
    dataset: &Dataset,
    _: &SampleConfig,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    first_orders(dataset).for_each(|row| reporter.report(&row));
    Ok(())
}

pub(crate) fn run_task09(
    dataset: &Dataset,
    _: &SampleConfig,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    city_statistics(dataset).for_each(|row| reporter.report(&row));
    Ok(())
}

pub(crate) fn run_task10(
    dataset: &Dataset,
    _: &SampleConfig,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    reporter.section("by month");
    activity_by_month(dataset).for_each(|row| reporter.report(&row));
    reporter.section("by year");
    activity_by_year(dataset).for_each(|row| reporter.report(&row));
    reporter.section("by year and month");
    activity_by_year_month(dataset).for_each(|row| reporter.report(&row));
    Ok(())
}
