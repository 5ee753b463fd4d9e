//! # relq
//!
//! A lazy, in-memory relational query engine over typed records.
//!
//! ## Quick Start
//!
//! ```rust
//! use relq::{AsQuery, Dataset, SortSpec};
//!
//! let dataset = Dataset::sample();
//!
//! // Customers in London, biggest spenders first; turnover is computed once
//! // per customer rather than once per comparison
//! let london = dataset
//!     .customers()
//!     .query()
//!     .filter(|c| c.city == "London")
//!     .map(|c| (c, c.turnover()))
//!     .order_by(SortSpec::desc(|(_, turnover): &(&relq::Customer, _)| *turnover));
//!
//! for (customer, turnover) in london.iter() {
//!     println!("{} {}", customer.company_name, turnover);
//! }
//! // Queries are restartable: iterating again re-reads the dataset.
//! assert_eq!(london.count(), 2);
//! ```
//!
//! ## Group-join
//!
//! ```rust
//! use relq::{AsQuery, Dataset};
//!
//! let dataset = Dataset::sample();
//! let with_suppliers = dataset
//!     .customers()
//!     .query()
//!     .group_join(
//!         dataset.suppliers().query(),
//!         |c| c.location(),
//!         |s| s.location(),
//!         |c, suppliers| (c.id.as_str(), suppliers.len()),
//!     )
//!     .filter(|(_, n)| *n > 0)
//!     .to_vec();
//!
//! assert_eq!(with_suppliers, [("ALFKI", 1), ("AROUT", 2), ("BSBEV", 2)]);
//! ```
//!
//! ## Samples
//!
//! ```rust
//! use relq::{samples, Dataset, MemoryReporter, SampleConfig};
//!
//! let mut reporter = MemoryReporter::new();
//! samples::run_sample("linq1", &Dataset::sample(), &SampleConfig::default(), &mut reporter)?;
//! assert_eq!(&reporter.lines()[2..], ["4", "1", "3", "2", "0"]);
//! # Ok::<(), relq::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Re-export core types
pub use relq_core::{
    aggregate, execute, AsQuery, Direction, Error, Execute, Grouping, KeySelector, Predicate,
    Query, Result, SortSpec,
};

// Predicate constructors
pub use relq_core::query::predicate;

// Entity model
pub use relq_model::{
    ContactRules, CountryCity, Customer, Dataset, Order, Product, Supplier, YearMonth,
};

pub mod config;
pub mod logging;
pub mod reporter;
pub mod samples;

pub use config::SampleConfig;
pub use reporter::{ConsoleReporter, MemoryReporter, Reporter, TracingReporter};
pub use samples::{catalog, run_all, run_sample, Sample};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
