use crate::error::*;

/// Iterator extension for extracting a single item
pub trait Single {
    type Item;

    /// Extract a single item from the iterator, erroring if there is less than or more than a single item in it.
    fn single(&mut self) -> SeqResult<Self::Item>;

    /// Extract zero or one item from the iterator, erroring if there is more than a single item in it.
    fn single_or_none(&mut self) -> SeqResult<Option<Self::Item>>;

    fn single_or_default(&mut self, default: Self::Item) -> SeqResult<Self::Item>
    where
        Self: Sized,
    {
        self.single_or_else(|| default)
    }

    fn single_or_else<F>(&mut self, f: F) -> SeqResult<Self::Item>
    where
        Self: Sized,
        F: FnOnce() -> Self::Item,
    {
        Ok(self.single_or_none()?.unwrap_or_else(f))
    }
}

impl<I: Iterator> Single for I {
    type Item = I::Item;

    fn single(&mut self) -> SeqResult<Self::Item> {
        match self.next() {
            None => Err(SequenceError::violation(SINGLE_NONE)),
            Some(item) => match self.next() {
                Some(_) => Err(SequenceError::violation(SINGLE_MANY)),
                None => Ok(item),
            },
        }
    }

    fn single_or_none(&mut self) -> SeqResult<Option<Self::Item>> {
        match self.next() {
            None => Ok(None),
            Some(item) => match self.next() {
                Some(_) => Err(SequenceError::violation(SINGLE_OR_NONE_MANY)),
                None => Ok(Some(item)),
            },
        }
    }
}

/// Iterator extension for the items at either end of a sequence.
///
/// `Iterator::last` already exists, hence the `_item` suffix.
pub trait Ends {
    type Item;

    /// Pulls exactly one item.
    fn first_item(&mut self) -> SeqResult<Self::Item>;

    /// Drains the iterator.
    fn last_item(self) -> SeqResult<Self::Item>;
}

impl<I: Iterator> Ends for I {
    type Item = I::Item;

    fn first_item(&mut self) -> SeqResult<Self::Item> {
        self.next().ok_or_else(|| SequenceError::violation(FIRST_NONE))
    }

    fn last_item(self) -> SeqResult<Self::Item> {
        self.last().ok_or_else(|| SequenceError::violation(LAST_NONE))
    }
}
