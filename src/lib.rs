//! Cardinality-checked accessors over arbitrary iterables.
//!
//! Each accessor takes anything `IntoIterator`. Maps go through [`keys()`] so that
//! their keys, not their entries, form the sequence.

mod distinct;
mod error;
mod iter_util;
mod keys;

pub use distinct::{distinct, distinct_by, Distinct, DistinctBy};
pub use error::{SeqResult, SequenceError};
pub use iter_util::{Ends, Single};
pub use keys::{keys, Mapping};

/// The only item of `iterable`.
///
/// Pulls at most two items, so a single-pass or infinite source is fine.
pub fn single<I: IntoIterator>(iterable: I) -> SeqResult<I::Item> {
    iterable.into_iter().single()
}

/// The only item of `iterable`, or `None` if it is empty.
pub fn single_or_none<I: IntoIterator>(iterable: I) -> SeqResult<Option<I::Item>> {
    iterable.into_iter().single_or_none()
}

pub fn single_or_default<I: IntoIterator>(iterable: I, default: I::Item) -> SeqResult<I::Item> {
    iterable.into_iter().single_or_default(default)
}

pub fn single_or_else<I, F>(iterable: I, f: F) -> SeqResult<I::Item>
where
    I: IntoIterator,
    F: FnOnce() -> I::Item,
{
    iterable.into_iter().single_or_else(f)
}

/// The first item of `iterable`. Nothing past it is evaluated.
pub fn first<I: IntoIterator>(iterable: I) -> SeqResult<I::Item> {
    iterable.into_iter().first_item()
}

pub fn first_or_none<I: IntoIterator>(iterable: I) -> Option<I::Item> {
    iterable.into_iter().next()
}

pub fn first_or_default<I: IntoIterator>(iterable: I, default: I::Item) -> I::Item {
    first_or_none(iterable).unwrap_or(default)
}

pub fn first_or_else<I, F>(iterable: I, f: F) -> I::Item
where
    I: IntoIterator,
    F: FnOnce() -> I::Item,
{
    first_or_none(iterable).unwrap_or_else(f)
}

/// The last item of `iterable`, draining it to get there.
pub fn last<I: IntoIterator>(iterable: I) -> SeqResult<I::Item> {
    iterable.into_iter().last_item()
}

pub fn last_or_none<I: IntoIterator>(iterable: I) -> Option<I::Item> {
    iterable.into_iter().last()
}

pub fn last_or_default<I: IntoIterator>(iterable: I, default: I::Item) -> I::Item {
    last_or_none(iterable).unwrap_or(default)
}

pub fn last_or_else<I, F>(iterable: I, f: F) -> I::Item
where
    I: IntoIterator,
    F: FnOnce() -> I::Item,
{
    last_or_none(iterable).unwrap_or_else(f)
}
