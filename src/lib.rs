//! # xtlib
//!
//! A small collection of generic utilities that the standard library does
//! not provide in quite this shape.
//!
//! ## Overview
//!
//! - **Iterable helpers**: equality-based search over slices (`contains`,
//!   `index`, `any`, `all`)
//! - **Set**: an insertion-ordered, deduplicating set that only requires
//!   `PartialEq` on its elements, with in-place mutation and set algebra
//! - **Random strings**: cryptographically secure random strings drawn from a
//!   configurable character set
//!
//! ## Feature Flags
//!
//! - `iterable`: Slice search helpers
//! - `set`: The [`Set`](crate::set::Set) type (implies `iterable`)
//! - `random`: Secure random string generation
//! - `serde`: `Serialize`/`Deserialize` for [`Set`](crate::set::Set)
//! - `tracing`: Emit `trace!` events from mutating operations
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use xtlib::prelude::*;
//!
//! let mut greetings = Set::new();
//! greetings.add("hello");
//! greetings.add("hello");
//! assert_eq!(greetings.items(), &["hello"]);
//!
//! assert!(contains(&[1, 2, 3], &2));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use xtlib::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "iterable")]
    pub use crate::iterable::*;

    #[cfg(feature = "set")]
    pub use crate::set::*;

    #[cfg(feature = "random")]
    pub use crate::random::*;
}

#[cfg(feature = "iterable")]
pub mod iterable;

#[cfg(feature = "set")]
pub mod set;

#[cfg(feature = "random")]
pub mod random;
