//! Callback composition: scans the text once and folds the transformed
//! fragments back together, in order, with no separators.

use std::borrow::Cow;

use crate::keywords::KeywordSet;
use crate::scanner::Scanner;
use crate::source_buffer::SourceBuffer;
use crate::tag::{Category, Tag};

/// Per-category transform hooks applied while reassembling scanned text.
///
/// Every hook defaults to an allocation-free identity, so an implementor
/// overrides only the categories it styles. Hooks must be pure and cheap:
/// they run inline on the scanning pass, exactly once per matching token,
/// in token order.
pub trait TokenStyler {
    /// Applied to word tokens that match the keyword set. Non-matching
    /// words bypass the hooks entirely.
    fn keyword<'t>(&self, token: &'t str) -> Cow<'t, str> {
        Cow::Borrowed(token)
    }

    /// Applied to operators and closing delimiters.
    fn punctuation<'t>(&self, token: &'t str) -> Cow<'t, str> {
        Cow::Borrowed(token)
    }

    /// Applied to regexes and quoted strings.
    fn string_or_regex<'t>(&self, token: &'t str) -> Cow<'t, str> {
        Cow::Borrowed(token)
    }

    /// Applied to all four comment styles.
    fn comment<'t>(&self, token: &'t str) -> Cow<'t, str> {
        Cow::Borrowed(token)
    }
}

/// Styler with every hook left at the identity default.
///
/// Highlighting with this styler reproduces the input exactly: the
/// lossless round-trip the scanner guarantees.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityStyler;

impl TokenStyler for IdentityStyler {}

/// Scan `text` once and rebuild it with each token passed through the hook
/// its category selects.
///
/// Trivia passes through with no hook consulted; word tokens consult the
/// hook only on a whole-token, case-insensitive keyword hit. Outputs are
/// concatenated in token order with nothing added or dropped in between,
/// so identity hooks reproduce `text` byte for byte.
///
/// Total over all inputs: unterminated strings, regexes, and comments are
/// force-closed at end of input and styled like complete ones.
pub fn highlight_with<S: TokenStyler>(text: &str, keywords: &KeywordSet, styler: &S) -> String {
    let buffer = SourceBuffer::new(text);
    let mut scanner = Scanner::new(buffer.cursor());
    let mut out = String::with_capacity(text.len());
    let mut pos = 0usize;
    loop {
        let token = scanner.next_token();
        if token.tag == Tag::Eof {
            break;
        }
        let end = pos + token.len as usize;
        let raw = &text[pos..end];
        pos = end;
        match token.tag.category() {
            Category::Plain => out.push_str(raw),
            Category::Word => {
                if keywords.contains(raw) {
                    out.push_str(&styler.keyword(raw));
                } else {
                    out.push_str(raw);
                }
            }
            Category::Punctuation => out.push_str(&styler.punctuation(raw)),
            Category::StringOrRegex => out.push_str(&styler.string_or_regex(raw)),
            Category::Comment => out.push_str(&styler.comment(raw)),
        }
    }
    out
}

#[cfg(test)]
mod tests;
