//! The [`RandomString`] generator.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;

use super::RandomError;

/// Characters used by [`RandomString::new`]: ASCII lowercase followed by
/// ASCII uppercase.
pub const DEFAULT_CHAR_SET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generates cryptographically secure random strings.
///
/// The character set is fixed at construction and is never empty.
///
/// # Examples
///
/// ```rust
/// use xtlib::random::{RandomString, DEFAULT_CHAR_SET};
///
/// let generator = RandomString::new();
/// let value = generator.generate(12);
///
/// assert_eq!(value.chars().count(), 12);
/// assert!(value.chars().all(|c| DEFAULT_CHAR_SET.contains(c)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomString {
    char_set: Vec<char>,
}

impl RandomString {
    /// Creates a generator over [`DEFAULT_CHAR_SET`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            char_set: DEFAULT_CHAR_SET.chars().collect(),
        }
    }

    /// Creates a generator over a custom character set.
    ///
    /// Repeated characters are kept, which makes them proportionally more
    /// likely to be drawn.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::EmptyCharSet`] if `char_set` yields no
    /// characters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xtlib::random::RandomString;
    ///
    /// let hex = RandomString::with_char_set("0123456789abcdef".chars()).unwrap();
    /// assert!(hex.generate(8).chars().all(|c| c.is_ascii_hexdigit()));
    /// ```
    pub fn with_char_set<I>(char_set: I) -> Result<Self, RandomError>
    where
        I: IntoIterator<Item = char>,
    {
        let char_set: Vec<char> = char_set.into_iter().collect();
        if char_set.is_empty() {
            return Err(RandomError::EmptyCharSet);
        }
        Ok(Self { char_set })
    }

    /// Returns the characters this generator draws from.
    #[inline]
    #[must_use]
    pub fn char_set(&self) -> &[char] {
        &self.char_set
    }

    /// Generates a string of `length` characters.
    ///
    /// Each character is drawn uniformly and independently from the
    /// character set using the operating system's secure random source.
    ///
    /// # Panics
    ///
    /// Panics if the operating system's random source fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xtlib::random::RandomString;
    ///
    /// let generator = RandomString::new();
    /// assert_eq!(generator.generate(0), "");
    /// assert_eq!(generator.generate(6).chars().count(), 6);
    /// ```
    #[must_use]
    pub fn generate(&self, length: usize) -> String {
        let mut rng = OsRng;
        // `char_set` is never empty, so `choose` always yields a character.
        let generated: String = (0..length)
            .map(|_| self.char_set.choose(&mut rng).copied().unwrap_or_default())
            .collect();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            length,
            char_set_len = self.char_set.len(),
            "generated random string"
        );

        generated
    }
}

impl Default for RandomString {
    fn default() -> Self {
        Self::new()
    }
}
