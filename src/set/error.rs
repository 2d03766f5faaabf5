//! Error type for fallible [`Set`](super::Set) operations.

/// Errors returned by [`Set::remove`](super::Set::remove) and
/// [`Set::pop`](super::Set::pop).
///
/// # Examples
///
/// ```rust
/// use xtlib::set::{Set, SetError};
///
/// let mut set = Set::new();
/// set.add("hello");
///
/// assert_eq!(set.remove(&"invalid"), Err(SetError::NotFound));
/// assert_eq!(
///     SetError::NotFound.to_string(),
///     "value is not present in the set"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetError {
    /// No element of the set is equal to the requested value.
    NotFound,
}

impl std::fmt::Display for SetError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(formatter, "value is not present in the set"),
        }
    }
}

impl std::error::Error for SetError {}

static_assertions::assert_impl_all!(SetError: std::error::Error, Send, Sync, Copy);
