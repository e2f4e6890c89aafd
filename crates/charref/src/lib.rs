//! Incremental decoding of HTML character references.
//!
//! The core of this crate is [`ReferenceMatcher`], which decodes a single
//! named (`&notin;`) or numeric (`&#x2603;`) character reference one
//! character at a time without ever looking back at consumed input. It is
//! meant to sit inside a tokenizer that has just seen an `&`:
//!
//! ```rust
//! use charref::{Decoded, ReferenceMatcher};
//!
//! let mut matcher = ReferenceMatcher::new();
//! let rest = "copy; 2025";
//! let mut consumed = 0;
//! for c in rest.chars() {
//!     if !matcher.feed(c) {
//!         break;
//!     }
//!     consumed += 1;
//! }
//! assert_eq!(consumed, 4);
//! assert_eq!(matcher.value(), Decoded::Named("\u{A9}"));
//! ```
//!
//! [`unescape`] and [`Unescaper`] drive a matcher over whole strings.

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod decoded;
mod error;
mod literal_buffer;
mod matcher;
pub mod named;
pub mod numeric;
mod options;
mod unescape;

#[cfg(test)]
mod tests;

pub use decoded::Decoded;
pub use error::ReferenceError;
pub use matcher::{Mode, ReferenceMatcher};
pub use options::{MatcherOptions, UnescapeOptions};
pub use unescape::{Unescaper, unescape, unescape_attribute};

/// The most characters a single reference may hold, `&` excluded.
pub const MAX_REFERENCE_LEN: usize = literal_buffer::CAPACITY - 1;
