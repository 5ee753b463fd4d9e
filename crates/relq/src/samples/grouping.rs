//! Grouping samples.

use crate::config::SampleConfig;
use crate::reporter::Reporter;
use relq_core::{AsQuery, Grouping, Query, Result, SortSpec};
use relq_model::{Customer, Dataset, Product, Supplier};
use rust_decimal::Decimal;
use std::fmt;

/// A customer with the suppliers located in the same country and city.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerSuppliers<'a> {
    /// The customer
    pub customer: &'a Customer,
    /// Suppliers in supplier order; empty when none share the location
    pub suppliers: Vec<&'a Supplier>,
}

impl fmt::Display for CustomerSuppliers<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.customer.id)?;
        if self.suppliers.is_empty() {
            return write!(f, " (none)");
        }
        for (i, supplier) in self.suppliers.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{}{}", sep, supplier.supplier_name)?;
        }
        Ok(())
    }
}

/// Suppliers grouped by location, then attached to every customer whose
/// location matches a group key.
pub fn customer_suppliers_grouped(dataset: &Dataset) -> Query<'_, CustomerSuppliers<'_>> {
    let grouped = dataset
        .suppliers()
        .query()
        .group_by_key(|s| s.location());
    let customers = dataset.customers().query();
    Query::from_fn(move || {
        let groups = grouped.to_vec();
        customers.iter().map(move |customer| {
            let suppliers = groups
                .iter()
                .filter(|g| *g.key() == customer.location())
                .flat_map(|g| g.iter().copied())
                .collect();
            CustomerSuppliers {
                customer,
                suppliers,
            }
        })
    })
}

/// Price band of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PriceBand {
    /// At or below the cheap limit
    Cheap,
    /// Above the cheap limit, at or below the expensive limit
    Average,
    /// Above the expensive limit
    Expensive,
}

impl PriceBand {
    /// Classify `price` against the two limits.
    pub fn of(price: Decimal, cheap_limit: Decimal, expensive_limit: Decimal) -> Self {
        if price <= cheap_limit {
            PriceBand::Cheap
        } else if price <= expensive_limit {
            PriceBand::Average
        } else {
            PriceBand::Expensive
        }
    }
}

impl fmt::Display for PriceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PriceBand::Cheap => "cheap",
            PriceBand::Average => "average",
            PriceBand::Expensive => "expensive",
        };
        f.write_str(name)
    }
}

/// Category, then in-stock flag, then products sorted by unit price.
pub type CategoryStock<'a> = Grouping<&'a str, Grouping<bool, &'a Product>>;

/// Products by category; within each category by stock availability; within
/// that by ascending price.
pub fn products_by_category(dataset: &Dataset) -> Query<'_, CategoryStock<'_>> {
    dataset
        .products()
        .query()
        .group_by_key(|p| p.category.as_str())
        .map(|category| {
            let (name, products) = category.into_parts();
            let by_stock = Query::from_source(products)
                .group_by_key(|p| p.in_stock())
                .map(|group| {
                    let (in_stock, products) = group.into_parts();
                    let by_price = SortSpec::asc(|p: &&Product| p.unit_price);
                    let sorted = Query::from_source(products).order_by(by_price).to_vec();
                    Grouping::new(in_stock, sorted)
                })
                .to_vec();
            Grouping::new(name, by_stock)
        })
}

/// Products grouped into price bands, bands in first-seen order.
pub fn products_by_price_band<'a>(
    dataset: &'a Dataset,
    config: &SampleConfig,
) -> Query<'a, Grouping<PriceBand, &'a Product>> {
    let (cheap, expensive) = (config.cheap_price_limit, config.expensive_price_limit);
    dataset
        .products()
        .query()
        .group_by_key(move |p| PriceBand::of(p.unit_price, cheap, expensive))
}

pub(crate) fn run_task02_1(
    dataset: &Dataset,
    _: &SampleConfig,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    customer_suppliers_grouped(dataset).for_each(|row| reporter.report(&row));
    Ok(())
}

pub(crate) fn run_task07(
    dataset: &Dataset,
    _: &SampleConfig,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    products_by_category(dataset).for_each(|category| {
        reporter.report(category.key());
        for stock in category.iter() {
            let label = if *stock.key() { "in stock" } else { "out of stock" };
            reporter.report(&format_args!("  {}", label));
            for product in stock.iter() {
                reporter.report(&format_args!("    {}", product));
            }
        }
    });
    Ok(())
}

pub(crate) fn run_task08(
    dataset: &Dataset,
    config: &SampleConfig,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    products_by_price_band(dataset, config).for_each(|band| {
        reporter.report(&format_args!("{} ({})", band.key(), band.len()));
        for product in band.iter() {
            reporter.report(&format_args!("  {}", product));
        }
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_band_edges() {
        let (cheap, expensive) = (dec!(20), dec!(50));
        assert_eq!(PriceBand::of(dec!(20), cheap, expensive), PriceBand::Cheap);
        assert_eq!(PriceBand::of(dec!(20.01), cheap, expensive), PriceBand::Average);
        assert_eq!(PriceBand::of(dec!(50), cheap, expensive), PriceBand::Average);
        assert_eq!(PriceBand::of(dec!(50.01), cheap, expensive), PriceBand::Expensive);
    }

    #[test]
    fn test_display_without_suppliers() {
        let dataset = Dataset::sample();
        let bonap = dataset.customer("BONAP").unwrap();
        let row = CustomerSuppliers {
            customer: bonap,
            suppliers: Vec::new(),
        };
        assert_eq!(row.to_string(), "BONAP: (none)");
    }
}
