//! Join samples: customers and suppliers matched by location.

use super::grouping::CustomerSuppliers;
use crate::config::SampleConfig;
use crate::reporter::Reporter;
use relq_core::{AsQuery, Query, Result};
use relq_model::{Customer, Dataset, Supplier};

/// Every customer with its same-location suppliers, via a single group-join.
///
/// Same result as
/// [`customer_suppliers_grouped`](super::grouping::customer_suppliers_grouped).
pub fn customer_suppliers_joined(dataset: &Dataset) -> Query<'_, CustomerSuppliers<'_>> {
    dataset.customers().query().group_join(
        dataset.suppliers().query(),
        |c| c.location(),
        |s| s.location(),
        |customer, group| CustomerSuppliers {
            customer,
            suppliers: group.to_vec(),
        },
    )
}

/// One row per (customer, supplier) pair sharing a location. Customers
/// without a local supplier produce no rows.
pub fn customer_supplier_pairs(dataset: &Dataset) -> Query<'_, (&Customer, &Supplier)> {
    dataset.customers().query().join(
        dataset.suppliers().query(),
        |c| c.location(),
        |s| s.location(),
        |c, s| (*c, *s),
    )
}

pub(crate) fn run_task02_2(
    dataset: &Dataset,
    _: &SampleConfig,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    customer_suppliers_joined(dataset).for_each(|row| reporter.report(&row));
    Ok(())
}

pub(crate) fn run_task02_3(
    dataset: &Dataset,
    _: &SampleConfig,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    customer_supplier_pairs(dataset).for_each(|(customer, supplier)| {
        reporter.report(&format_args!(
            "{} - {} ({})",
            customer.id,
            supplier.supplier_name,
            customer.location()
        ));
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::grouping::customer_suppliers_grouped;

    #[test]
    fn test_join_and_grouping_agree() {
        let dataset = Dataset::sample();
        assert_eq!(
            customer_suppliers_joined(&dataset).to_vec(),
            customer_suppliers_grouped(&dataset).to_vec()
        );
    }

    #[test]
    fn test_pairs_only_for_matches() {
        let dataset = Dataset::sample();
        let pairs: Vec<_> = customer_supplier_pairs(&dataset)
            .map(|(c, s)| (c.id.as_str(), s.id.as_str()))
            .to_vec();
        assert_eq!(
            pairs,
            [
                ("ALFKI", "11"),
                ("AROUT", "1"),
                ("AROUT", "30"),
                ("BSBEV", "1"),
                ("BSBEV", "30"),
            ]
        );
    }
}
