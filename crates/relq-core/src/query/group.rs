//! Grouping by structural key.
//!
//! Groups come out in first-seen key order; values inside a group keep their
//! source order and are never deduplicated.

use super::aggregate;
use super::sequence::{AsQuery, Query};
use crate::error::Result;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use std::hash::Hash;
use std::iter::Sum;
use std::rc::Rc;
use tracing::trace;

/// One key together with every value that mapped to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping<K, V> {
    key: K,
    values: Vec<V>,
}

impl<K, V> Grouping<K, V> {
    /// Build a group directly.
    pub fn new(key: K, values: Vec<V>) -> Self {
        Self { key, values }
    }

    /// The shared key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Values in source order.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Number of values in the group.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Never true for groups produced by `group_by`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate the values.
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.values.iter()
    }

    /// A restartable query over the values, for nested pipelines.
    pub fn query(&self) -> Query<'_, &V> {
        self.values.query()
    }

    /// Split into key and values.
    pub fn into_parts(self) -> (K, Vec<V>) {
        (self.key, self.values)
    }

    /// Keyed sum.
    pub fn sum<S, F>(&self, selector: F) -> S
    where
        S: Sum<S>,
        F: FnMut(&V) -> S,
    {
        aggregate::sum(&self.values, selector)
    }

    /// Keyed minimum.
    pub fn min<M, F>(&self, selector: F) -> Result<M>
    where
        M: Ord,
        F: FnMut(&V) -> M,
    {
        aggregate::min(&self.values, selector)
    }

    /// Keyed maximum.
    pub fn max<M, F>(&self, selector: F) -> Result<M>
    where
        M: Ord,
        F: FnMut(&V) -> M,
    {
        aggregate::max(&self.values, selector)
    }

    /// Keyed mean.
    pub fn average<F>(&self, selector: F) -> Result<Decimal>
    where
        F: FnMut(&V) -> Decimal,
    {
        aggregate::average(&self.values, selector)
    }

    /// Keyed existence check.
    pub fn any<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&V) -> bool,
    {
        self.values.iter().any(|v| predicate(v))
    }
}

impl<'g, K, V> IntoIterator for &'g Grouping<K, V> {
    type Item = &'g V;
    type IntoIter = std::slice::Iter<'g, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Bucket `items` by key, preserving first-seen key order.
pub(crate) fn bucket<I, K, V, KF, VF>(items: I, key: &KF, value: &VF) -> Vec<Grouping<K, V>>
where
    I: IntoIterator,
    K: Eq + Hash,
    KF: Fn(&I::Item) -> K + ?Sized,
    VF: Fn(I::Item) -> V + ?Sized,
{
    let mut index: IndexMap<K, Vec<V>> = IndexMap::new();
    for item in items {
        let k = key(&item);
        index.entry(k).or_default().push(value(item));
    }
    trace!(groups = index.len(), "bucketed sequence");
    index
        .into_iter()
        .map(|(key, values)| Grouping { key, values })
        .collect()
}

impl<'a, T: 'a> Query<'a, T> {
    /// Group elements by `key`, projecting each element through `value`.
    ///
    /// The source is scanned once per pass over the result.
    pub fn group_by<K, V, KF, VF>(self, key: KF, value: VF) -> Query<'a, Grouping<K, V>>
    where
        K: Eq + Hash + 'a,
        V: 'a,
        KF: Fn(&T) -> K + 'a,
        VF: Fn(T) -> V + 'a,
    {
        let key = Rc::new(key);
        let value = Rc::new(value);
        Query::from_fn(move || bucket(self.iter(), &*key, &*value))
    }

    /// Group whole elements by `key`.
    pub fn group_by_key<K, KF>(self, key: KF) -> Query<'a, Grouping<K, T>>
    where
        K: Eq + Hash + 'a,
        KF: Fn(&T) -> K + 'a,
    {
        self.group_by(key, |item| item)
    }
}
