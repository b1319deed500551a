use std::hash::Hash;

use itertools::Itertools;

/// Lazy iterator over the first occurrence of each item.
pub type Distinct<I> = itertools::Unique<I>;

/// Lazy iterator over the first item for each derived key.
pub type DistinctBy<I, K, F> = itertools::UniqueBy<I, K, F>;

/// Removes duplicates from `iterable`, keeping the order in which items first appear.
///
/// Nothing is pulled from the source until the result is iterated.
/// Seen items are cloned into a set owned by the returned iterator.
pub fn distinct<I>(iterable: I) -> Distinct<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone + Eq + Hash,
{
    iterable.into_iter().unique()
}

/// Like [`distinct`], but two items are duplicates when `key` maps them to equal values.
pub fn distinct_by<I, K, F>(iterable: I, key: F) -> DistinctBy<I::IntoIter, K, F>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    iterable.into_iter().unique_by(key)
}
