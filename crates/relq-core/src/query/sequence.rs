/// Restartable lazy sequence
///
/// A `Query` owns a factory rather than an iterator. Every call to
/// [`Query::iter`] builds a fresh iterator chain over the (immutable) source,
/// so a query can be defined once and walked any number of times.
use super::aggregate;
use super::predicate::Predicate;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use std::fmt;
use std::hash::Hash;
use std::iter::Sum;
use std::rc::Rc;

type Factory<'a, T> = Rc<dyn Fn() -> Box<dyn Iterator<Item = T> + 'a> + 'a>;

/// A lazily evaluated, restartable sequence of `T`.
pub struct Query<'a, T> {
    factory: Factory<'a, T>,
}

impl<T> Clone for Query<'_, T> {
    fn clone(&self) -> Self {
        Self {
            factory: Rc::clone(&self.factory),
        }
    }
}

impl<T> fmt::Debug for Query<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query").finish_non_exhaustive()
    }
}

impl<'a, T: 'a> Query<'a, T> {
    /// Build a query from a function that yields a fresh source on each call.
    pub fn from_fn<F, I>(source: F) -> Self
    where
        F: Fn() -> I + 'a,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Self {
            factory: Rc::new(move || -> Box<dyn Iterator<Item = T> + 'a> {
                Box::new(source().into_iter())
            }),
        }
    }

    /// Build a query over a cloneable source (arrays, ranges, cloneable iterators).
    ///
    /// The source is cloned at the start of every iteration.
    pub fn from_source<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T> + Clone + 'a,
        I::IntoIter: 'a,
    {
        Self::from_fn(move || source.clone())
    }

    /// An empty query.
    pub fn empty() -> Self {
        Self::from_fn(std::iter::empty)
    }

    /// Start a new pass over the sequence.
    pub fn iter(&self) -> Box<dyn Iterator<Item = T> + 'a> {
        (self.factory)()
    }

    /// Keep only the elements for which `predicate` holds, in source order.
    pub fn filter<P>(self, predicate: P) -> Query<'a, T>
    where
        P: Fn(&T) -> bool + 'a,
    {
        let source = self.factory;
        let predicate = Rc::new(predicate);
        Query::from_fn(move || {
            let predicate = Rc::clone(&predicate);
            source().filter(move |item| predicate(item))
        })
    }

    /// Project every element through `selector`.
    pub fn map<U, F>(self, selector: F) -> Query<'a, U>
    where
        U: 'a,
        F: Fn(T) -> U + 'a,
    {
        let source = self.factory;
        let selector = Rc::new(selector);
        Query::from_fn(move || {
            let selector = Rc::clone(&selector);
            source().map(move |item| selector(item))
        })
    }

    /// Project every element into a sequence and flatten the results.
    pub fn flat_map<U, I, F>(self, selector: F) -> Query<'a, U>
    where
        U: 'a,
        I: IntoIterator<Item = U> + 'a,
        I::IntoIter: 'a,
        F: Fn(T) -> I + 'a,
    {
        let source = self.factory;
        let selector = Rc::new(selector);
        Query::from_fn(move || {
            let selector = Rc::clone(&selector);
            source().flat_map(move |item| selector(item))
        })
    }

    /// Skip the first `count` elements.
    pub fn skip(self, count: usize) -> Query<'a, T> {
        let source = self.factory;
        Query::from_fn(move || source().skip(count))
    }

    /// Yield at most `count` elements.
    pub fn take(self, count: usize) -> Query<'a, T> {
        let source = self.factory;
        Query::from_fn(move || source().take(count))
    }

    /// Materialize one pass into a vector.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Number of elements in one pass.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// True when the sequence yields nothing.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// First element, or [`Error::EmptySequence`].
    pub fn first(&self) -> Result<T> {
        self.iter().next().ok_or(Error::EmptySequence("first"))
    }

    /// Invoke `action` once per element, in iteration order.
    pub fn for_each<F>(&self, action: F)
    where
        F: FnMut(T),
    {
        self.iter().for_each(action)
    }

    /// Sum of `selector` over the sequence; zero when empty.
    pub fn sum<S, F>(&self, selector: F) -> S
    where
        S: Sum<S>,
        F: FnMut(T) -> S,
    {
        aggregate::sum(self.iter(), selector)
    }

    /// Decimal sum of `selector`; fails with [`Error::Overflow`] instead of
    /// panicking when the total is out of range.
    pub fn checked_sum<F>(&self, selector: F) -> Result<Decimal>
    where
        F: FnMut(T) -> Decimal,
    {
        aggregate::checked_sum(self.iter(), selector)
    }

    /// Smallest key; fails on an empty sequence.
    pub fn min<K, F>(&self, selector: F) -> Result<K>
    where
        K: Ord,
        F: FnMut(T) -> K,
    {
        aggregate::min(self.iter(), selector)
    }

    /// Largest key; fails on an empty sequence.
    pub fn max<K, F>(&self, selector: F) -> Result<K>
    where
        K: Ord,
        F: FnMut(T) -> K,
    {
        aggregate::max(self.iter(), selector)
    }

    /// Arithmetic mean of `selector`; fails on an empty sequence.
    pub fn average<F>(&self, selector: F) -> Result<Decimal>
    where
        F: FnMut(T) -> Decimal,
    {
        aggregate::average(self.iter(), selector)
    }

    /// True as soon as one element satisfies `predicate`.
    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        aggregate::any(self.iter(), predicate)
    }

    /// True when every element satisfies `predicate` (vacuously true when empty).
    pub fn all<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().all(|item| predicate(&item))
    }

    /// Collect into an insertion-ordered map.
    ///
    /// Fails with [`Error::DuplicateKey`] when two elements produce the same key.
    pub fn to_map<K, V, KF, VF>(&self, mut key: KF, mut value: VF) -> Result<IndexMap<K, V>>
    where
        K: Eq + Hash + fmt::Debug,
        KF: FnMut(&T) -> K,
        VF: FnMut(T) -> V,
    {
        let mut map = IndexMap::new();
        for item in self.iter() {
            let k = key(&item);
            if map.contains_key(&k) {
                return Err(Error::DuplicateKey(format!("{:?}", k)));
            }
            map.insert(k, value(item));
        }
        Ok(map)
    }
}

impl<'a, T: 'a> Query<'a, &'a T> {
    /// Build a query that borrows the elements of a slice.
    pub fn over(items: &'a [T]) -> Self {
        Query::from_fn(move || items.iter())
    }

    /// Keep only the elements accepted by a reusable [`Predicate`].
    pub fn filter_by(self, predicate: &Predicate<T>) -> Self {
        let predicate = predicate.clone();
        self.filter(move |item| predicate.test(item))
    }
}

impl<'a, T: Clone + 'a> Query<'a, &'a T> {
    /// Turn borrowed elements into owned clones.
    pub fn cloned(self) -> Query<'a, T> {
        self.map(T::clone)
    }
}

/// Entry point for building a [`Query`] over borrowed collections.
pub trait AsQuery<T> {
    /// Borrow `self` as a restartable query.
    fn query(&self) -> Query<'_, &T>;
}

impl<T> AsQuery<T> for [T] {
    fn query(&self) -> Query<'_, &T> {
        Query::over(self)
    }
}

impl<T> AsQuery<T> for Vec<T> {
    fn query(&self) -> Query<'_, &T> {
        Query::over(self.as_slice())
    }
}

impl<T, const N: usize> AsQuery<T> for [T; N] {
    fn query(&self) -> Query<'_, &T> {
        Query::over(self.as_slice())
    }
}
