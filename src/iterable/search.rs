//! Linear search primitives.

/// Sentinel returned by [`index`] when the value is absent.
pub const NOT_FOUND: isize = -1;

/// Returns `true` if some element of `source` equals `value`.
///
/// # Complexity
///
/// O(n)
///
/// # Examples
///
/// ```rust
/// use xtlib::iterable::contains;
///
/// let words = ["a", "b", "c", "d"];
/// assert!(contains(&words, &"c"));
/// assert!(!contains(&words, &"e"));
/// ```
#[inline]
pub fn contains<T: PartialEq>(source: &[T], value: &T) -> bool {
    source.iter().any(|element| element == value)
}

/// Returns the position of the first element equal to `value`, or `None`.
///
/// # Examples
///
/// ```rust
/// use xtlib::iterable::position;
///
/// assert_eq!(position(&[4, 5, 6], &5), Some(1));
/// assert_eq!(position(&[4, 5, 6], &7), None);
/// ```
#[inline]
pub fn position<T: PartialEq>(source: &[T], value: &T) -> Option<usize> {
    source.iter().position(|element| element == value)
}

/// Returns the index of the first element equal to `value`, or
/// [`NOT_FOUND`] (`-1`) if there is none.
///
/// Prefer [`position`] in new code; this form exists for callers that
/// compare against the `-1` sentinel.
///
/// # Examples
///
/// ```rust
/// use xtlib::iterable::{index, NOT_FOUND};
///
/// let values = [0, 1, 2, 3, 4];
/// if index(&values, &2) > NOT_FOUND {
///     assert_eq!(index(&values, &2), 2);
/// }
/// assert_eq!(index(&values, &5), NOT_FOUND);
/// ```
#[inline]
pub fn index<T: PartialEq>(source: &[T], value: &T) -> isize {
    position(source, value).map_or(NOT_FOUND, |found| {
        isize::try_from(found).unwrap_or(isize::MAX)
    })
}

/// Returns `true` if any element of `source` equals `value`.
///
/// Same answer as [`contains`].
///
/// # Examples
///
/// ```rust
/// use xtlib::iterable::any;
///
/// assert!(any(&[0, 0, 1, 0], &1));
/// assert!(!any::<i32>(&[], &1));
/// ```
#[inline]
pub fn any<T: PartialEq>(source: &[T], value: &T) -> bool {
    contains(source, value)
}

/// Returns `true` if every element of `source` equals `value`.
///
/// An empty slice vacuously satisfies this.
///
/// # Examples
///
/// ```rust
/// use xtlib::iterable::all;
///
/// assert!(all(&["a", "a", "a"], &"a"));
/// assert!(!all(&["a", "b", "a"], &"a"));
/// assert!(all::<i32>(&[], &7));
/// ```
#[inline]
pub fn all<T: PartialEq>(source: &[T], value: &T) -> bool {
    source.iter().all(|element| element == value)
}
