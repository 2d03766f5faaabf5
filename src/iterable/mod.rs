//! Equality-based search helpers over slices.
//!
//! These functions only require [`PartialEq`] on the element type; no
//! ordering or hashing is assumed. Every function is a single linear scan
//! that neither mutates nor allocates.
//!
//! - [`contains`]: is the value present?
//! - [`position`] / [`index`]: where is the first occurrence?
//! - [`any`]: does any element equal the value?
//! - [`all`]: does every element equal the value?
//!
//! # Examples
//!
//! ```rust
//! use xtlib::iterable::{all, any, contains, index};
//!
//! let values = [0, 1, 2, 3, 4];
//! assert!(contains(&values, &3));
//! assert_eq!(index(&values, &2), 2);
//! assert_eq!(index(&values, &9), -1);
//!
//! let flags = [true, true, false];
//! assert!(any(&flags, &false));
//! assert!(!all(&flags, &true));
//! ```

mod search;

pub use search::NOT_FOUND;
pub use search::all;
pub use search::any;
pub use search::contains;
pub use search::index;
pub use search::position;
