//! The [`Set`] type.

use smallvec::SmallVec;
use std::fmt;

use super::SetError;
use crate::iterable;

/// Number of elements stored inline before the backing storage spills to
/// the heap.
const INLINE_CAPACITY: usize = 8;

type Storage<T> = SmallVec<[T; INLINE_CAPACITY]>;

// =============================================================================
// Set Definition
// =============================================================================

/// An insertion-ordered set that only requires `PartialEq` on its elements.
///
/// No two elements of a `Set` are equal. Elements are kept in the order in
/// which they were first added, and every derived set (`union`,
/// `intersection`, ...) is built by adding elements in that order.
///
/// A `Set` owns its storage exclusively. [`Set::items`] hands out a
/// read-only view, and the algebraic operations borrow their inputs and
/// return a fresh set, so no result ever aliases an input.
///
/// # Type Parameters
///
/// * `T` - The element type. Only `PartialEq` is needed for membership;
///   operations that build a new set also need `Clone`.
///
/// # Examples
///
/// ```rust
/// use xtlib::set::Set;
///
/// let mut set = Set::new();
/// set.add("hello");
/// set.add("world");
/// set.add("hello");
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.items(), &["hello", "world"]);
/// ```
pub struct Set<T> {
    items: Storage<T>,
}

static_assertions::assert_impl_all!(Set<String>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(Set<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Construction and Inspection
// =============================================================================

impl<T> Set<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xtlib::set::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: SmallVec::new(),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xtlib::set::Set;
    ///
    /// let mut set = Set::new();
    /// assert_eq!(set.len(), 0);
    ///
    /// set.add("hello");
    /// assert_eq!(set.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the elements as a slice, in insertion order.
    ///
    /// The slice borrows the set's storage and cannot be used to modify it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xtlib::set::Set;
    ///
    /// let mut set = Set::new();
    /// set.add("hello");
    /// set.add("world");
    ///
    /// for item in set.items() {
    ///     println!("{item}");
    /// }
    /// assert_eq!(set.items(), &["hello", "world"]);
    /// ```
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over references to the elements, in insertion
    /// order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Removes every element from the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xtlib::set::Set;
    ///
    /// let mut set = Set::new();
    /// set.add("hello");
    /// assert_eq!(set.len(), 1);
    ///
    /// set.clear();
    /// assert_eq!(set.len(), 0);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Consumes the set, returning its elements in insertion order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items.into_vec()
    }
}

// =============================================================================
// Membership and Mutation
// =============================================================================

impl<T: PartialEq> Set<T> {
    /// Adds `value` to the end of the set unless an equal element is
    /// already present.
    ///
    /// Adding a value twice changes the set only the first time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xtlib::set::Set;
    ///
    /// let mut set = Set::new();
    /// set.add("hello");
    /// set.add("hello");
    /// assert_eq!(set.items(), &["hello"]);
    /// ```
    pub fn add(&mut self, value: T) {
        if !iterable::contains(&self.items, &value) {
            self.items.push(value);
        }
    }

    /// Removes the element equal to `value`.
    ///
    /// The remaining elements keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::NotFound`] if no element equals `value`; the set
    /// is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xtlib::set::{Set, SetError};
    ///
    /// let mut set = Set::new();
    /// set.add("hello");
    /// set.add("world");
    ///
    /// assert_eq!(set.remove(&"hello"), Ok(()));
    /// assert_eq!(set.remove(&"invalid"), Err(SetError::NotFound));
    /// assert_eq!(set.items(), &["world"]);
    /// ```
    pub fn remove(&mut self, value: &T) -> Result<(), SetError> {
        self.take(value, "remove").map(drop)
    }

    /// Removes the element equal to `value` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::NotFound`] if no element equals `value`; the set
    /// is left unchanged. Callers that want a fallback value can use
    /// `unwrap_or_default()` on the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xtlib::set::{Set, SetError};
    ///
    /// let mut set = Set::new();
    /// set.add(String::from("hello"));
    ///
    /// assert_eq!(set.pop(&String::from("hello")), Ok(String::from("hello")));
    /// assert_eq!(set.pop(&String::from("hello")), Err(SetError::NotFound));
    /// assert_eq!(set.pop(&String::from("hello")).unwrap_or_default(), "");
    /// ```
    pub fn pop(&mut self, value: &T) -> Result<T, SetError> {
        self.take(value, "pop")
    }

    /// Removes the element equal to `value` if there is one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xtlib::set::Set;
    ///
    /// let mut set = Set::new();
    /// set.add("hello");
    /// set.add("world");
    ///
    /// set.discard(&"hello");
    /// set.discard(&"invalid");
    /// assert_eq!(set.items(), &["world"]);
    /// ```
    pub fn discard(&mut self, value: &T) {
        if let Some(position) = iterable::position(&self.items, value) {
            self.items.remove(position);
        }
    }

    /// Returns `true` if an element equal to `value` is in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xtlib::set::Set;
    ///
    /// let mut set = Set::new();
    /// set.add("hello");
    ///
    /// assert!(set.contains(&"hello"));
    /// assert!(!set.contains(&"invalid"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        iterable::contains(&self.items, value)
    }

    /// Returns `true` if `self` and `other` have no elements in common.
    ///
    /// An empty set is disjoint from every set, itself included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xtlib::set::Set;
    ///
    /// let left: Set<i32> = [1, 2].into();
    /// let right: Set<i32> = [3, 4].into();
    /// assert!(left.is_disjoint(&right));
    /// ```
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        !self.iter().any(|element| other.contains(element))
    }

    /// Returns `true` if every element of `self` is in `other` and the two
    /// sets differ in length.
    ///
    /// The length condition makes this a strict test: a set is never a
    /// subset of itself or of any set with the same number of elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xtlib::set::Set;
    ///
    /// let small: Set<&str> = ["hello"].into();
    /// let large: Set<&str> = ["hello", "world"].into();
    ///
    /// assert!(small.is_subset(&large));
    /// assert!(!large.is_subset(&small));
    /// assert!(!small.is_subset(&small));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        // Strictness comes only from comparing lengths, not from finding an
        // element of `other` missing from `self`. Existing callers depend on
        // `s.is_subset(&s) == false`; keep it unless that contract changes.
        self.len() != other.len() && self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if every element of `other` is in `self` and the two
    /// sets differ in length.
    ///
    /// Mirror image of [`Set::is_subset`], with the same length rule.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xtlib::set::Set;
    ///
    /// let small: Set<&str> = ["hello"].into();
    /// let large: Set<&str> = ["hello", "world"].into();
    ///
    /// assert!(large.is_superset(&small));
    /// assert!(!small.is_superset(&large));
    /// assert!(!large.is_superset(&large));
    /// ```
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Shared search-and-delete behind `remove` and `pop`.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn take(&mut self, value: &T, operation: &'static str) -> Result<T, SetError> {
        match iterable::position(&self.items, value) {
            Some(position) => Ok(self.items.remove(position)),
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!(operation, len = self.len(), "value is not present in the set");
                Err(SetError::NotFound)
            }
        }
    }
}

// =============================================================================
// Set Algebra
// =============================================================================

impl<T: PartialEq + Clone> Set<T> {
    /// Returns the elements as an owned `Vec`, in insertion order.
    ///
    /// Unlike [`Set::items`], the result is independent of the set.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.items.to_vec()
    }

    /// Returns a new set holding every element of `self` followed by every
    /// element of each set in `others`.
    ///
    /// Elements appear in the order of first occurrence: the receiver's
    /// elements first, then each of `others` in argument order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xtlib::set::Set;
    ///
    /// let first: Set<&str> = ["hello"].into();
    /// let second: Set<&str> = ["world", "hello"].into();
    /// let third: Set<&str> = ["again"].into();
    ///
    /// let union = first.union(&[&second, &third]);
    /// assert_eq!(union.items(), &["hello", "world", "again"]);
    /// ```
    #[must_use]
    pub fn union(&self, others: &[&Self]) -> Self {
        let mut result = self.clone();
        for other in others {
            result.extend(other.iter().cloned());
        }
        result
    }

    /// Returns a new set of the elements of `self` that are found in every
    /// set in `others`.
    ///
    /// Passing no `others` yields an **empty** set, not a copy of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xtlib::set::Set;
    ///
    /// let first: Set<&str> = ["hello", "world"].into();
    /// let second: Set<&str> = ["hello", "again"].into();
    ///
    /// assert_eq!(first.intersection(&[&second]).items(), &["hello"]);
    /// assert!(first.intersection(&[]).is_empty());
    /// ```
    #[must_use]
    pub fn intersection(&self, others: &[&Self]) -> Self {
        // Intersecting with nothing gives nothing. This differs from the usual
        // "intersection of one set is that set", and callers already rely on
        // it, so changing it is a breaking change.
        if others.is_empty() {
            return Self::new();
        }

        self.iter()
            .filter(|element| others.iter().all(|other| other.contains(element)))
            .cloned()
            .collect()
    }

    /// Returns a new set of the elements of `self` that are found in none of
    /// the sets in `others`.
    ///
    /// Passing no `others` yields a copy of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xtlib::set::Set;
    ///
    /// let first: Set<&str> = ["hello", "world"].into();
    /// let second: Set<&str> = ["bye", "world"].into();
    ///
    /// assert_eq!(first.difference(&[&second]).items(), &["hello"]);
    /// assert_eq!(first.difference(&[]).items(), &["hello", "world"]);
    /// ```
    #[must_use]
    pub fn difference(&self, others: &[&Self]) -> Self {
        self.iter()
            .filter(|element| !others.iter().any(|other| other.contains(element)))
            .cloned()
            .collect()
    }

    /// Returns a new set of the elements found in exactly one of `self` and
    /// `other`.
    ///
    /// The receiver's exclusive elements come first, followed by `other`'s.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xtlib::set::Set;
    ///
    /// let first: Set<&str> = ["hello", "world"].into();
    /// let second: Set<&str> = ["hello", "bye"].into();
    ///
    /// let symmetric = first.symmetric_difference(&second);
    /// assert_eq!(symmetric.items(), &["world", "bye"]);
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut result = self.difference(&[other]);
        result.extend(
            other
                .iter()
                .filter(|element| !self.contains(element))
                .cloned(),
        );
        result
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Default for Set<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Set<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

/// Two sets are equal when they hold the same elements, whatever the order
/// in which those elements were added. Compare [`Set::items`] to take order
/// into account.
impl<T: PartialEq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl<T: Eq> Eq for Set<T> {}

impl<T> AsRef<[T]> for Set<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.items()
    }
}

impl<T: PartialEq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: PartialEq> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T: PartialEq, const N: usize> From<[T; N]> for Set<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<Set<T>> for Vec<T> {
    fn from(set: Set<T>) -> Self {
        set.into_vec()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = SetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        SetIntoIterator {
            inner: self.items.into_iter(),
        }
    }
}

/// An owning iterator over the elements of a [`Set`], in insertion order.
pub struct SetIntoIterator<T> {
    inner: smallvec::IntoIter<[T; INLINE_CAPACITY]>,
}

impl<T> Iterator for SetIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for SetIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for SetIntoIterator<T> {}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Set<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SetVisitor<T>
where
    T: serde::Deserialize<'de> + PartialEq,
{
    type Value = Set<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Duplicates in the input collapse onto their first occurrence.
        let mut set = Set::new();
        while let Some(element) = seq.next_element()? {
            set.add(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Set<T>
where
    T: serde::Deserialize<'de> + PartialEq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
