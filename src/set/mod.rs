//! Insertion-ordered set over equatable values.
//!
//! This module provides [`Set`], a set that only asks `PartialEq` of its
//! elements. Membership is decided by linear scan through
//! [`crate::iterable`], and elements keep the order in which they were first
//! added.
//!
//! - [`Set`]: the set itself
//! - [`SetError`]: the single failure of [`Set::remove`] and [`Set::pop`]
//! - [`SetIntoIterator`]: owning iterator in insertion order
//!
//! # Examples
//!
//! ```rust
//! use xtlib::set::Set;
//!
//! let mut first = Set::new();
//! first.add("hello");
//! first.add("world");
//!
//! let mut second = Set::new();
//! second.add("hello");
//! second.add("again");
//!
//! assert_eq!(first.union(&[&second]).items(), &["hello", "world", "again"]);
//! assert_eq!(first.intersection(&[&second]).items(), &["hello"]);
//! assert_eq!(first.difference(&[&second]).items(), &["world"]);
//! assert_eq!(
//!     first.symmetric_difference(&second).items(),
//!     &["world", "again"]
//! );
//! ```
//!
//! # Complexity
//!
//! | Operation                | Cost           |
//! |--------------------------|----------------|
//! | `add` / `contains`       | O(n)           |
//! | `remove` / `pop`         | O(n)           |
//! | `len` / `items`          | O(1)           |
//! | `union`                  | O((n + Σm)²)   |
//! | `intersection`           | O(n · Σm)      |
//! | `difference`             | O(n · Σm)      |
//! | `symmetric_difference`   | O(n · m)       |

mod error;
mod ordered;

pub use error::SetError;
pub use ordered::Set;
pub use ordered::SetIntoIterator;
