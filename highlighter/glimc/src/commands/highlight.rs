//! The `highlight` command: read, scan, style, print.

use glim_highlight::{highlight_styled, GlyphStyle, KeywordSet, UnicodeStyler};

use super::read_source;

/// Options accepted by `glim highlight`.
pub struct HighlightOptions {
    /// Keywords given directly on the command line.
    pub keywords: Vec<String>,
    /// Optional file of extra keywords, one per line.
    pub keywords_file: Option<String>,
    /// Alphabet for keyword tokens.
    pub keyword_style: GlyphStyle,
    /// Alphabet for comment tokens.
    pub comment_style: GlyphStyle,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            keywords_file: None,
            keyword_style: GlyphStyle::BoldSans,
            comment_style: GlyphStyle::DoubleStruck,
        }
    }
}

/// Highlight a file and print the styled text to stdout.
pub fn highlight_file(path: &str, options: &HighlightOptions) {
    let content = read_source(path);

    let mut words = options.keywords.clone();
    if let Some(file) = &options.keywords_file {
        let listed = read_source(file);
        words.extend(listed.split_whitespace().map(str::to_string));
    }

    let keywords = KeywordSet::new(&words);
    if keywords.is_empty() {
        tracing::debug!("no keywords supplied; only comments will be styled");
    }

    let styler = UnicodeStyler {
        keyword_style: options.keyword_style,
        comment_style: options.comment_style,
    };
    print!("{}", highlight_styled(&content, &keywords, &styler));
}
