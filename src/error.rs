use std::borrow::Cow;

pub type SeqResult<T, E = SequenceError> = std::result::Result<T, E>;

pub(crate) const SINGLE_NONE: &str = "Expected exactly one item but the iterable contained none.";
pub(crate) const SINGLE_MANY: &str =
    "Expected exactly one item but the iterable contained more than one.";
pub(crate) const SINGLE_OR_NONE_MANY: &str =
    "Expected one or fewer items but the iterable contained more than one.";
pub(crate) const FIRST_NONE: &str = "Expected at least one item but the sequence contained none.";
pub(crate) const LAST_NONE: &str = "The sequence contained no elements.";

/// A sequence did not contain the number of items the caller expected.
///
/// Carries nothing but a human readable message.
#[derive(thiserror::Error, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[error("{message}")]
pub struct SequenceError {
    message: Cow<'static, str>,
}

impl SequenceError {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Cardinality violation detected by one of the accessors.
    pub(crate) fn violation(message: &'static str) -> Self {
        tracing::debug!(reason = message, "sequence cardinality violated");
        Self::new(message)
    }
}

impl From<&'static str> for SequenceError {
    fn from(message: &'static str) -> Self {
        Self::new(message)
    }
}

impl From<String> for SequenceError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
