/// Join engine
///
/// Hash-based joins keyed by structural equality. The right side is bucketed
/// once per pass (build phase), then every left element probes its bucket
/// (probe phase), so a join costs O(L + R) rather than O(L * R).
use super::sequence::Query;
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;
use tracing::debug;

/// Build phase: bucket the right side by key, keeping source order per bucket.
fn build_buckets<I, K, KF>(items: I, key: &KF) -> HashMap<K, Vec<I::Item>>
where
    I: IntoIterator,
    K: Eq + Hash,
    KF: Fn(&I::Item) -> K + ?Sized,
{
    let mut buckets: HashMap<K, Vec<I::Item>> = HashMap::new();
    let mut rows = 0usize;
    for item in items {
        rows += 1;
        buckets.entry(key(&item)).or_default().push(item);
    }
    debug!(rows, buckets = buckets.len(), "built join buckets");
    buckets
}

impl<'a, T: 'a> Query<'a, T> {
    /// Group-join: one result per left element, paired with every right
    /// element whose key is equal.
    ///
    /// This is a left-outer join. A left element without a matching bucket is
    /// still passed to `result`, with an empty slice. Dropping such elements
    /// is up to the caller (e.g. a `filter` on the result).
    pub fn group_join<U, K, R, LK, RK, RF>(
        self,
        right: Query<'a, U>,
        left_key: LK,
        right_key: RK,
        result: RF,
    ) -> Query<'a, R>
    where
        U: 'a,
        K: Eq + Hash + 'a,
        R: 'a,
        LK: Fn(&T) -> K + 'a,
        RK: Fn(&U) -> K + 'a,
        RF: Fn(T, &[U]) -> R + 'a,
    {
        let left_key = Rc::new(left_key);
        let right_key = Rc::new(right_key);
        let result = Rc::new(result);
        Query::from_fn(move || {
            let buckets = build_buckets(right.iter(), &*right_key);
            let left_key = Rc::clone(&left_key);
            let result = Rc::clone(&result);
            self.iter().map(move |item| {
                let group = buckets
                    .get(&left_key(&item))
                    .map(Vec::as_slice)
                    .unwrap_or(&[]);
                result(item, group)
            })
        })
    }

    /// Inner join: one result per matching (left, right) pair, in left order
    /// and then right source order. Unmatched elements on either side produce
    /// nothing.
    pub fn join<U, K, R, LK, RK, RF>(
        self,
        right: Query<'a, U>,
        left_key: LK,
        right_key: RK,
        result: RF,
    ) -> Query<'a, R>
    where
        U: 'a,
        K: Eq + Hash + 'a,
        R: 'a,
        LK: Fn(&T) -> K + 'a,
        RK: Fn(&U) -> K + 'a,
        RF: Fn(&T, &U) -> R + 'a,
    {
        self.group_join(right, left_key, right_key, move |item, group| {
            group.iter().map(|other| result(&item, other)).collect::<Vec<_>>()
        })
        .flat_map(|rows| rows)
    }
}
