//! # relq Core
//!
//! Core types and the lazy query engine behind relq.
//!
//! A [`Query`] is a restartable, lazily evaluated sequence built over data
//! that is already resident in memory. Stages compose (`filter`, `map`,
//! `group_by`, `group_join`, `order_by`, ...) and nothing runs until the
//! caller iterates. Iterating again re-reads the source.
//!
//! ```rust
//! use relq_core::{AsQuery, Query};
//!
//! let numbers = [5, 4, 1, 3, 9, 8, 6, 7, 2, 0];
//! let low: Query<'_, &i32> = numbers.query().filter(|n| **n < 5);
//!
//! assert_eq!(low.iter().copied().collect::<Vec<_>>(), vec![4, 1, 3, 2, 0]);
//! // Restartable: a second pass sees the same elements.
//! assert_eq!(low.count(), 5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod execute;
pub mod query;

pub use error::{Error, Result};
pub use execute::{execute, Execute};
pub use query::{
    aggregate, AsQuery, Direction, Grouping, KeySelector, Predicate, Query, SortSpec,
};
