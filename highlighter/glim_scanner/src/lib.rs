//! Language-agnostic scanner/classifier for code highlighting.
//!
//! Splits arbitrary source text into a lossless sequence of tagged
//! fragments (whitespace, punctuation, words, strings/regexes, and four
//! comment styles) and lets a caller transform each fragment before the
//! text is reassembled. The only language-awareness is a caller-supplied
//! [`KeywordSet`] and the per-category hooks of a [`TokenStyler`].
//!
//! The scanner is a single forward pass with one fetched character of
//! lookahead and a one-to-three character lookback window: no backtracking,
//! no grammar table, total over every input (unterminated literals are
//! force-closed at end of input rather than reported).
//!
//! # Example
//!
//! ```
//! use std::borrow::Cow;
//! use glim_scanner::{highlight_with, KeywordSet, TokenStyler};
//!
//! struct Upper;
//!
//! impl TokenStyler for Upper {
//!     fn keyword<'t>(&self, token: &'t str) -> Cow<'t, str> {
//!         Cow::Owned(token.to_uppercase())
//!     }
//! }
//!
//! let keywords = KeywordSet::new(["function", "console"]);
//! let out = highlight_with(
//!     r#"function test() { console.log("test")}"#,
//!     &keywords,
//!     &Upper,
//! );
//! assert_eq!(out, r#"FUNCTION test() { CONSOLE.log("test")}"#);
//! ```

mod compose;
mod cursor;
mod keywords;
mod scanner;
mod source_buffer;
mod tag;

pub use compose::{highlight_with, IdentityStyler, TokenStyler};
pub use cursor::Cursor;
pub use keywords::KeywordSet;
pub use scanner::{tokenize, Scanner};
pub use source_buffer::SourceBuffer;
pub use tag::{Category, Tag, Token};
