//! Run a query function against a source.
//!
//! Lets a query be written once as a plain function of its source plus any
//! runtime parameters, then applied. Nothing is cached between calls.

/// Apply `query` to `source` and return its result.
///
/// The result may borrow from `source`.
pub fn execute<'s, S, R, F>(source: &'s S, query: F) -> R
where
    S: ?Sized,
    F: FnOnce(&'s S) -> R,
{
    query(source)
}

/// Method form of [`execute`], available on every type.
pub trait Execute {
    /// Apply `query` to `self` and return its result.
    fn execute<'s, R, F>(&'s self, query: F) -> R
    where
        F: FnOnce(&'s Self) -> R,
    {
        query(self)
    }
}

impl<T: ?Sized> Execute for T {}
