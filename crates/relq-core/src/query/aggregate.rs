//! Aggregation over finite sequences.
//!
//! `sum` returns the additive identity for an empty input. `min`, `max` and
//! `average` have no meaningful value for an empty input and fail with
//! [`Error::EmptySequence`] instead of inventing a default. Decimal
//! accumulation in `checked_sum` and `average` fails with
//! [`Error::Overflow`] rather than panicking.

use crate::error::{Error, Result};
use rust_decimal::Decimal;
use std::iter::Sum;

/// Sum of `selector` over `items`.
pub fn sum<I, S, F>(items: I, selector: F) -> S
where
    I: IntoIterator,
    S: Sum<S>,
    F: FnMut(I::Item) -> S,
{
    items.into_iter().map(selector).sum()
}

/// Decimal sum of `selector` over `items`, failing once the running total
/// overflows.
pub fn checked_sum<I, F>(items: I, selector: F) -> Result<Decimal>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Decimal,
{
    items
        .into_iter()
        .map(selector)
        .try_fold(Decimal::ZERO, |total, value| {
            total.checked_add(value).ok_or(Error::Overflow("sum"))
        })
}

/// Smallest selected key.
pub fn min<I, K, F>(items: I, selector: F) -> Result<K>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(I::Item) -> K,
{
    items
        .into_iter()
        .map(selector)
        .min()
        .ok_or(Error::EmptySequence("min"))
}

/// Largest selected key.
pub fn max<I, K, F>(items: I, selector: F) -> Result<K>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(I::Item) -> K,
{
    items
        .into_iter()
        .map(selector)
        .max()
        .ok_or(Error::EmptySequence("max"))
}

/// True on the first element satisfying `predicate`; the rest is not visited.
pub fn any<I, F>(items: I, mut predicate: F) -> bool
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> bool,
{
    items.into_iter().any(|item| predicate(&item))
}

/// Arithmetic mean of `selector` over `items`.
pub fn average<I, F>(items: I, selector: F) -> Result<Decimal>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Decimal,
{
    let (total, count) = items.into_iter().map(selector).try_fold(
        (Decimal::ZERO, 0u64),
        |(total, count), value| {
            total
                .checked_add(value)
                .map(|total| (total, count + 1))
                .ok_or(Error::Overflow("average"))
        },
    )?;

    if count == 0 {
        return Err(Error::EmptySequence("average"));
    }
    Ok(total / Decimal::from(count))
}

/// Number of elements.
pub fn count<I: IntoIterator>(items: I) -> usize {
    items.into_iter().count()
}
