/// Query engine module
///
/// Lazy sequences plus the filter, aggregate, grouping, join and ordering
/// stages that compose over them.
/// Aggregation (sum, min, max, any, average, count)
pub mod aggregate;
/// Grouping by structural key
pub mod group;
/// Group-join and inner join
pub mod join;
/// Stable multi-key ordering
pub mod order;
/// Predicate combinators
pub mod predicate;
/// Restartable lazy sequence
#[allow(missing_docs)]
pub mod sequence;

// Re-export main types
pub use group::Grouping;
pub use order::{Direction, KeySelector, SortSpec};
pub use predicate::Predicate;
pub use sequence::{AsQuery, Query};
