//! Error type for configuring a [`RandomString`](super::RandomString).

/// Errors returned when building a [`RandomString`](super::RandomString).
///
/// # Examples
///
/// ```rust
/// use xtlib::random::{RandomError, RandomString};
///
/// let result = RandomString::with_char_set(std::iter::empty());
/// assert_eq!(result.unwrap_err(), RandomError::EmptyCharSet);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RandomError {
    /// The character set has no characters to draw from.
    EmptyCharSet,
}

impl std::fmt::Display for RandomError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCharSet => write!(
                formatter,
                "character set must contain at least one character"
            ),
        }
    }
}

impl std::error::Error for RandomError {}
