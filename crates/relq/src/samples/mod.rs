//! Sample catalog
//!
//! Every sample is a row in a static table: an id, a category, a title, a
//! description, and the function that runs it against a dataset. The runner
//! wraps each sample in a tracing span and writes results to a [`Reporter`].

use crate::config::SampleConfig;
use crate::reporter::Reporter;
use relq_core::{Error, Result};
use relq_model::Dataset;
use std::fmt;
use std::time::Instant;
use tracing::{info, info_span, warn};

pub mod aggregation;
pub mod grouping;
pub mod join;
pub mod ordering;
pub mod restriction;
pub mod reusable;

/// Signature shared by every sample body.
pub type SampleFn = fn(&Dataset, &SampleConfig, &mut dyn Reporter) -> Result<()>;

/// One catalog entry.
#[derive(Clone, Copy)]
pub struct Sample {
    /// Unique id, e.g. `task02_1`
    pub id: &'static str,
    /// Category heading
    pub category: &'static str,
    /// Short title
    pub title: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Sample body
    pub run: SampleFn,
}

impl fmt::Debug for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sample")
            .field("id", &self.id)
            .field("category", &self.category)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

impl Sample {
    /// Run this sample: a section header, then its records.
    pub fn invoke(
        &self,
        dataset: &Dataset,
        config: &SampleConfig,
        reporter: &mut dyn Reporter,
    ) -> Result<()> {
        let span = info_span!("sample", id = self.id, category = self.category);
        let _enter = span.enter();

        reporter.section(&format!("{} - {}", self.title, self.description));
        let started = Instant::now();
        let result = (self.run)(dataset, config, reporter);
        match &result {
            Ok(()) => info!(elapsed_us = started.elapsed().as_micros() as u64, "sample done"),
            Err(e) => warn!(error = %e, "sample failed"),
        }
        result
    }
}

static CATALOG: [Sample; 14] = [
    Sample {
        id: "linq1",
        category: "Restriction Operators",
        title: "Where - Task 1",
        description: "Elements of an array with a value less than 5",
        run: restriction::run_linq1,
    },
    Sample {
        id: "linq2",
        category: "Restriction Operators",
        title: "Where - Task 2",
        description: "Products present in stock",
        run: restriction::run_linq2,
    },
    Sample {
        id: "task01",
        category: "My Tasks",
        title: "Task 01",
        description: "Reusable query: customers whose order totals exceed a threshold",
        run: reusable::run_task01,
    },
    Sample {
        id: "task02_1",
        category: "My Tasks",
        title: "Task 02.1",
        description: "Suppliers in the customer's country and city, with grouping",
        run: grouping::run_task02_1,
    },
    Sample {
        id: "task02_2",
        category: "My Tasks",
        title: "Task 02.2",
        description: "Suppliers in the customer's country and city, with a group-join",
        run: join::run_task02_2,
    },
    Sample {
        id: "task02_3",
        category: "My Tasks",
        title: "Task 02.3",
        description: "Customer and supplier pairs, without grouping",
        run: join::run_task02_3,
    },
    Sample {
        id: "task03",
        category: "My Tasks",
        title: "Task 03",
        description: "Customers with any single order above a threshold",
        run: restriction::run_task03,
    },
    Sample {
        id: "task04",
        category: "My Tasks",
        title: "Task 04",
        description: "Customers and the month they became customers",
        run: aggregation::run_task04,
    },
    Sample {
        id: "task05",
        category: "My Tasks",
        title: "Task 05",
        description: "Task 04 ordered by year, month, turnover (descending) and name",
        run: ordering::run_task05,
    },
    Sample {
        id: "task06",
        category: "My Tasks",
        title: "Task 06",
        description: "Customers with a malformed postal code, no region, or a phone without an area code",
        run: restriction::run_task06,
    },
    Sample {
        id: "task07",
        category: "My Tasks",
        title: "Task 07",
        description: "Products by category, then availability, then price",
        run: grouping::run_task07,
    },
    Sample {
        id: "task08",
        category: "My Tasks",
        title: "Task 08",
        description: "Products in cheap, average and expensive price bands",
        run: grouping::run_task08,
    },
    Sample {
        id: "task09",
        category: "My Tasks",
        title: "Task 09",
        description: "Average order total and orders per customer, per city",
        run: aggregation::run_task09,
    },
    Sample {
        id: "task10",
        category: "My Tasks",
        title: "Task 10",
        description: "Order activity per month, per year, and per year and month",
        run: aggregation::run_task10,
    },
];

/// Every sample, in catalog order.
pub fn catalog() -> &'static [Sample] {
    &CATALOG
}

/// Look up a sample by id.
pub fn find(id: &str) -> Option<&'static Sample> {
    CATALOG.iter().find(|s| s.id == id)
}

/// Run one sample by id.
///
/// An unknown id or an invalid `config` is an `Error::Config` raised before
/// anything is reported.
pub fn run_sample(
    id: &str,
    dataset: &Dataset,
    config: &SampleConfig,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    let sample = find(id).ok_or_else(|| Error::Config(format!("unknown sample: {}", id)))?;
    config.validate()?;
    sample.invoke(dataset, config, reporter)
}

/// Run the whole catalog in order, stopping at the first failure.
///
/// Returns the number of samples run.
pub fn run_all(
    dataset: &Dataset,
    config: &SampleConfig,
    reporter: &mut dyn Reporter,
) -> Result<usize> {
    config.validate()?;
    for sample in catalog() {
        sample.invoke(dataset, config, reporter)?;
    }
    Ok(CATALOG.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<_> = catalog().iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), catalog().len());
        assert!(find("task05").is_some());
        assert!(find("task99").is_none());
    }
}
