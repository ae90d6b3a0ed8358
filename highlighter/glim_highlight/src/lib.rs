//! Unicode code highlighting over the glim scanner.
//!
//! Wires the scanner's per-category hooks to the unicode style tables:
//! keywords come back bold, comments come back outlined, and everything
//! else passes through untouched. Because the styling lives entirely in
//! the characters themselves, the result still reads as plain text and can
//! be pasted anywhere unicode is accepted, with no markup and no terminal
//! escapes.
//!
//! Works for any language, since the keyword list is caller-supplied:
//!
//! ```
//! use glim_highlight::{highlight, KeywordSet};
//!
//! let keywords = KeywordSet::new(["fn", "let"]);
//! let styled = highlight("let x = 1; // tweak", &keywords);
//! assert_eq!(styled, "𝗹𝗲𝘁 x = 1; // 𝕥𝕨𝕖𝕒𝕜");
//! ```

use std::borrow::Cow;

use glim_scanner::{highlight_with, TokenStyler};
use glim_styles::{restyle, Style};

pub use glim_scanner::KeywordSet;
pub use glim_styles::Style as GlyphStyle;

/// Styler rendering keywords and comments in unicode alphabets.
///
/// Punctuation and string/regex tokens pass through unchanged, keeping the
/// styled output aligned with the source.
#[derive(Clone, Copy, Debug)]
pub struct UnicodeStyler {
    /// Alphabet applied to keyword tokens.
    pub keyword_style: Style,
    /// Alphabet applied to comment tokens.
    pub comment_style: Style,
}

impl Default for UnicodeStyler {
    /// Bold keywords, outlined comments.
    fn default() -> Self {
        Self {
            keyword_style: Style::BoldSans,
            comment_style: Style::DoubleStruck,
        }
    }
}

impl TokenStyler for UnicodeStyler {
    fn keyword<'t>(&self, token: &'t str) -> Cow<'t, str> {
        Cow::Owned(restyle(self.keyword_style, token))
    }

    fn comment<'t>(&self, token: &'t str) -> Cow<'t, str> {
        Cow::Owned(restyle(self.comment_style, token))
    }
}

/// Highlight `text` with the default styles: bold keywords, outlined
/// comments.
pub fn highlight(text: &str, keywords: &KeywordSet) -> String {
    highlight_styled(text, keywords, &UnicodeStyler::default())
}

/// Highlight `text` with an explicit [`UnicodeStyler`].
pub fn highlight_styled(text: &str, keywords: &KeywordSet, styler: &UnicodeStyler) -> String {
    tracing::debug!(
        len = text.len(),
        keywords = keywords.len(),
        "highlighting text"
    );
    highlight_with(text, keywords, styler)
}
