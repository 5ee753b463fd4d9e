//! Stable multi-key ordering.
//!
//! A [`SortSpec`] is an ordered list of keys, each with its own direction.
//! Elements compare on the first key; ties fall through to the next key, and
//! elements equal on every key keep their input order.

use super::sequence::Query;
use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;
use tracing::trace;

/// Sort direction for one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Smallest first
    #[default]
    Ascending,
    /// Largest first
    Descending,
}

impl Direction {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

/// A type-erased key extractor, compared by the key's natural ordering.
pub struct KeySelector<T: ?Sized> {
    compare: Rc<dyn Fn(&T, &T) -> Ordering>,
}

impl<T: ?Sized> Clone for KeySelector<T> {
    fn clone(&self) -> Self {
        Self {
            compare: Rc::clone(&self.compare),
        }
    }
}

impl<T: ?Sized> KeySelector<T> {
    /// Wrap a key function.
    pub fn new<K, F>(key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        Self {
            compare: Rc::new(move |a: &T, b: &T| key(a).cmp(&key(b))),
        }
    }

    /// Wrap a key function that borrows its key from the element, so string
    /// and other heap keys compare without being cloned.
    pub fn by_ref<K, F>(key: F) -> Self
    where
        K: Ord + ?Sized,
        F: for<'x> Fn(&'x T) -> &'x K + 'static,
    {
        Self {
            compare: Rc::new(move |a: &T, b: &T| key(a).cmp(key(b))),
        }
    }
}

/// Ordered list of sort keys.
pub struct SortSpec<T: ?Sized> {
    keys: Vec<(KeySelector<T>, Direction)>,
}

impl<T: ?Sized> Clone for SortSpec<T> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for SortSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let directions: Vec<_> = self.keys.iter().map(|(_, d)| d).collect();
        f.debug_struct("SortSpec")
            .field("directions", &directions)
            .finish()
    }
}

impl<T: ?Sized> SortSpec<T> {
    /// Start with an ascending key.
    pub fn asc<K, F>(key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        Self {
            keys: vec![(KeySelector::new(key), Direction::Ascending)],
        }
    }

    /// Start with a descending key.
    pub fn desc<K, F>(key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        Self {
            keys: vec![(KeySelector::new(key), Direction::Descending)],
        }
    }

    /// Add an ascending tie-break key.
    pub fn then_asc<K, F>(mut self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        self.keys.push((KeySelector::new(key), Direction::Ascending));
        self
    }

    /// Add a descending tie-break key.
    pub fn then_desc<K, F>(mut self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        self.keys.push((KeySelector::new(key), Direction::Descending));
        self
    }

    /// Add an ascending tie-break on a borrowed key.
    pub fn then_asc_by_ref<K, F>(mut self, key: F) -> Self
    where
        K: Ord + ?Sized,
        F: for<'x> Fn(&'x T) -> &'x K + 'static,
    {
        self.keys.push((KeySelector::by_ref(key), Direction::Ascending));
        self
    }

    /// Add a descending tie-break on a borrowed key.
    pub fn then_desc_by_ref<K, F>(mut self, key: F) -> Self
    where
        K: Ord + ?Sized,
        F: for<'x> Fn(&'x T) -> &'x K + 'static,
    {
        self.keys.push((KeySelector::by_ref(key), Direction::Descending));
        self
    }

    /// Build from parallel lists of keys and directions.
    ///
    /// The lists must be non-empty and of equal length; anything else is a
    /// configuration error reported before any element is compared.
    pub fn from_parts(keys: Vec<KeySelector<T>>, directions: Vec<Direction>) -> Result<Self> {
        if keys.is_empty() {
            return Err(Error::Config("sort spec needs at least one key".into()));
        }
        if keys.len() != directions.len() {
            return Err(Error::Config(format!(
                "sort spec has {} keys but {} directions",
                keys.len(),
                directions.len()
            )));
        }
        Ok(Self {
            keys: keys.into_iter().zip(directions).collect(),
        })
    }
}

impl<T: ?Sized> SortSpec<T> {
    /// Number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false for a spec built through the public constructors.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Lexicographic comparison over all keys.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        for (key, direction) in &self.keys {
            let ordering = direction.apply((key.compare)(a, b));
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

impl<'a, T: 'a> Query<'a, T> {
    /// Stable sort by `spec`. The source is materialized once per pass.
    pub fn order_by(self, spec: SortSpec<T>) -> Query<'a, T> {
        let spec = Rc::new(spec);
        Query::from_fn(move || {
            let mut rows: Vec<T> = self.iter().collect();
            trace!(rows = rows.len(), keys = spec.len(), "sorting");
            // `sort_by` is stable: equal elements keep their input order.
            rows.sort_by(|a, b| spec.compare(a, b));
            rows
        })
    }
}
