//! Enums with compile-time spelling tables.
//!
//! One variant list drives the enum declaration, its name table and both
//! conversion directions, so the three can never drift apart. Two front-ends
//! produce the same [`Spelled`] implementation:
//!
//! * [`spelled_enum!`] declares the enum itself.
//! * `#[derive(Spelled)]` (feature `derive`, on by default) works on an enum you
//!   declared, with `#[spelled(rename_all = "...")]` and
//!   `#[spelled(rename = "...")]` to adjust spellings.
//!
//! ```
//! use enum_spelling::Spelled;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Spelled)]
//! #[spelled(rename_all = "lowercase")]
//! enum Colour {
//!     Red,
//!     Green,
//!     Blue,
//! }
//!
//! assert_eq!(Colour::Green.to_string(), "green");
//! assert_eq!("blue".parse::<Colour>(), Ok(Colour::Blue));
//! assert!(Colour::from_name("purple").is_err());
//! assert_eq!(Colour::COUNT, 3);
//! ```
//!
//! Reverse lookups never panic: unknown text comes back as
//! [`SpellingError::UnknownSpelling`].
//!
//! Malformed definitions are rejected at compile time. An empty list:
//!
//! ```compile_fail
//! enum_spelling::spelled_enum! {
//!     pub enum Nothing {}
//! }
//! ```
//!
//! Two variants with the same spelling:
//!
//! ```compile_fail
//! enum_spelling::spelled_enum! {
//!     pub enum Switch {
//!         On => "on",
//!         Enabled => "on",
//!     }
//! }
//! ```
//!
//! The same through the derive:
//!
//! ```compile_fail
//! use enum_spelling::Spelled;
//!
//! #[derive(Clone, Copy, PartialEq, Eq, Spelled)]
//! enum Switch {
//!     #[spelled(rename = "on")]
//!     On,
//!     #[spelled(rename = "on")]
//!     Enabled,
//! }
//! ```
//!
//! Explicit discriminants would break the ordinal/table alignment:
//!
//! ```compile_fail
//! use enum_spelling::Spelled;
//!
//! #[derive(Clone, Copy, PartialEq, Eq, Spelled)]
//! enum Sparse {
//!     One = 1,
//!     Ten = 10,
//! }
//! ```

extern crate self as enum_spelling;

mod errors;
mod macros;
mod spelled;
pub mod table;

#[cfg(feature = "serde")]
pub mod serde_support;

pub use errors::{SpellingError, SpellingResult, MAX_REPORTED_INPUT};
pub use spelled::{Spelled, Variants};

#[cfg(feature = "derive")]
pub use enum_spelling_derive::Spelled;

#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "serde")]
    pub use serde;
}

#[cfg(test)]
mod tests;
