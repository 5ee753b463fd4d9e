//! Reusable boolean predicates.
//!
//! A [`Predicate`] is a cheap-to-clone test over `&T`. Predicates compose with
//! [`Predicate::and`], [`Predicate::or`] and [`Predicate::not`], and the
//! constructors in this module cover the common shapes: threshold comparisons
//! on a selected field, null/empty string checks, and regular-expression
//! format checks. A field that is absent (`None`) is treated as an empty
//! string, never as an error.

use crate::error::Result;
use regex::Regex;
use std::fmt;
use std::rc::Rc;

/// A composable test over `&T`.
pub struct Predicate<T: ?Sized> {
    test: Rc<dyn Fn(&T) -> bool>,
}

impl<T: ?Sized> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            test: Rc::clone(&self.test),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}

impl<T: ?Sized> Predicate<T> {
    /// Evaluate against one element.
    pub fn test(&self, item: &T) -> bool {
        (self.test)(item)
    }
}

impl<T: ?Sized + 'static> Predicate<T> {
    /// Wrap a closure.
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&T) -> bool + 'static,
    {
        Self {
            test: Rc::new(test),
        }
    }

    /// Both predicates hold. Short-circuits on the left.
    pub fn and(self, other: Predicate<T>) -> Self {
        Self::new(move |item| self.test(item) && other.test(item))
    }

    /// Either predicate holds. Short-circuits on the left.
    pub fn or(self, other: Predicate<T>) -> Self {
        Self::new(move |item| self.test(item) || other.test(item))
    }

    /// Logical negation.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::new(move |item| !self.test(item))
    }

    /// Holds when any of `predicates` holds; false for an empty list.
    pub fn any_of<I>(predicates: I) -> Self
    where
        I: IntoIterator<Item = Predicate<T>>,
    {
        let predicates: Vec<_> = predicates.into_iter().collect();
        Self::new(move |item| predicates.iter().any(|p| p.test(item)))
    }

    /// Holds when all of `predicates` hold; true for an empty list.
    pub fn all_of<I>(predicates: I) -> Self
    where
        I: IntoIterator<Item = Predicate<T>>,
    {
        let predicates: Vec<_> = predicates.into_iter().collect();
        Self::new(move |item| predicates.iter().all(|p| p.test(item)))
    }
}

/// `selector(item) > bound`
pub fn gt<T, K, F>(selector: F, bound: K) -> Predicate<T>
where
    T: ?Sized + 'static,
    K: PartialOrd + 'static,
    F: Fn(&T) -> K + 'static,
{
    Predicate::new(move |item| selector(item) > bound)
}

/// `selector(item) >= bound`
pub fn ge<T, K, F>(selector: F, bound: K) -> Predicate<T>
where
    T: ?Sized + 'static,
    K: PartialOrd + 'static,
    F: Fn(&T) -> K + 'static,
{
    Predicate::new(move |item| selector(item) >= bound)
}

/// `selector(item) < bound`
pub fn lt<T, K, F>(selector: F, bound: K) -> Predicate<T>
where
    T: ?Sized + 'static,
    K: PartialOrd + 'static,
    F: Fn(&T) -> K + 'static,
{
    Predicate::new(move |item| selector(item) < bound)
}

/// `selector(item) <= bound`
pub fn le<T, K, F>(selector: F, bound: K) -> Predicate<T>
where
    T: ?Sized + 'static,
    K: PartialOrd + 'static,
    F: Fn(&T) -> K + 'static,
{
    Predicate::new(move |item| selector(item) <= bound)
}

/// `selector(item) == value`
pub fn eq<T, K, F>(selector: F, value: K) -> Predicate<T>
where
    T: ?Sized + 'static,
    K: PartialEq + 'static,
    F: Fn(&T) -> K + 'static,
{
    Predicate::new(move |item| selector(item) == value)
}

/// The selected field is `None` or the empty string.
pub fn is_blank<T, F>(selector: F) -> Predicate<T>
where
    T: ?Sized + 'static,
    F: for<'x> Fn(&'x T) -> Option<&'x str> + 'static,
{
    Predicate::new(move |item| selector(item).map_or(true, str::is_empty))
}

/// The selected field holds a non-empty string.
pub fn is_present<T, F>(selector: F) -> Predicate<T>
where
    T: ?Sized + 'static,
    F: for<'x> Fn(&'x T) -> Option<&'x str> + 'static,
{
    is_blank(selector).not()
}

/// The selected field matches `pattern`. An absent field is matched as "".
pub fn matches<T, F>(selector: F, pattern: Regex) -> Predicate<T>
where
    T: ?Sized + 'static,
    F: for<'x> Fn(&'x T) -> Option<&'x str> + 'static,
{
    Predicate::new(move |item| pattern.is_match(selector(item).unwrap_or_default()))
}

/// The selected field does not match `pattern`. An absent field is matched as "".
pub fn does_not_match<T, F>(selector: F, pattern: Regex) -> Predicate<T>
where
    T: ?Sized + 'static,
    F: for<'x> Fn(&'x T) -> Option<&'x str> + 'static,
{
    matches(selector, pattern).not()
}

/// Compile `pattern` and build a [`matches`] predicate.
///
/// An invalid pattern is reported here, before any element is tested.
pub fn matches_pattern<T, F>(selector: F, pattern: &str) -> Result<Predicate<T>>
where
    T: ?Sized + 'static,
    F: for<'x> Fn(&'x T) -> Option<&'x str> + 'static,
{
    Ok(matches(selector, Regex::new(pattern)?))
}
