//! Cryptographically secure random strings.
//!
//! [`RandomString`] draws each character independently and uniformly from a
//! character set, using the operating system's entropy source
//! ([`rand::rngs::OsRng`]).
//!
//! # Examples
//!
//! ```rust
//! use xtlib::random::RandomString;
//!
//! let generator = RandomString::new();
//! let token = generator.generate(6);
//! assert_eq!(token.chars().count(), 6);
//!
//! let digits = RandomString::with_char_set("0123456789".chars()).unwrap();
//! assert!(digits.generate(5).chars().all(|c| c.is_ascii_digit()));
//! ```

mod error;
mod string;

pub use error::RandomError;
pub use string::DEFAULT_CHAR_SET;
pub use string::RandomString;
