//! Token tags, the coarse categories derived from them, and the `(tag, len)`
//! token pair produced by the scanner.

/// Fine-grained classification of a scanned fragment.
///
/// Discriminants are grouped into semantic ranges so a tag's class can be
/// read straight off its byte value:
///
/// - `0`: trivia (whitespace runs and unclassified characters)
/// - `16..=17`: punctuation
/// - `32`: words
/// - `48..=50`: string-like literals
/// - `64..=67`: comments
/// - `255`: end-of-input control tag (never part of the output text)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tag {
    /// Whitespace runs, plus any character no other rule claims. Emitted
    /// through the composition layer untouched.
    Other = 0,

    /// A single operator or opening-delimiter character, one of
    /// ``/ { } [ ( - + * = < > : ; | \ . , ? ! & @ ~``.
    ///
    /// Always exactly one character; runs like `==` scan as two tokens.
    Operator = 16,
    /// A closing `)` or `]`. Distinct from [`Tag::Operator`] because a `/`
    /// after one of these is division, never a regex start.
    CloseDelim = 17,

    /// Maximal run of `[A-Za-z0-9_$]`. Resolved against the keyword set
    /// only at emission time.
    Word = 32,

    /// `/…/` regex literal, including an unterminated one cut short by a
    /// newline or end of input.
    Regex = 48,
    /// `"…"` string literal.
    DoubleQuoted = 49,
    /// `'…'` string literal.
    SingleQuoted = 50,

    /// `<!-- … -->` comment.
    XmlComment = 64,
    /// `/* … */` comment.
    BlockComment = 65,
    /// `// …` comment, terminated by (and not including) a newline.
    LineComment = 66,
    /// `# …` comment, terminated by (and not including) a newline.
    HashComment = 67,

    /// End of input. Zero-length, repeatable, never emitted as a fragment.
    Eof = 255,
}

/// Coarse class used to pick the transform hook for an emitted token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    /// Passed through with no hook consulted.
    Plain,
    /// Word tokens: tested against the keyword set at emission; hits go
    /// through the keyword hook, misses pass through like [`Category::Plain`].
    Word,
    /// Operators and closing delimiters.
    Punctuation,
    /// Regexes and quoted strings.
    StringOrRegex,
    /// All four comment styles.
    Comment,
}

impl Tag {
    /// Returns `true` for the four comment tags.
    ///
    /// Comments never participate in escape masking and never update the
    /// scanner's last-significant-tag register.
    #[inline]
    pub fn is_comment(self) -> bool {
        matches!(
            self,
            Tag::XmlComment | Tag::BlockComment | Tag::LineComment | Tag::HashComment
        )
    }

    /// Returns `true` for tags recorded as the most recent significant
    /// token: everything except trivia, comments, and `Eof`.
    #[inline]
    pub fn is_significant(self) -> bool {
        matches!(
            self,
            Tag::Operator
                | Tag::CloseDelim
                | Tag::Word
                | Tag::Regex
                | Tag::DoubleQuoted
                | Tag::SingleQuoted
        )
    }

    /// The coarse category selecting this tag's transform hook.
    ///
    /// `Eof` maps to [`Category::Plain`]; it is zero-length, so emitting it
    /// through any hook would be a no-op anyway.
    pub fn category(self) -> Category {
        match self {
            Tag::Other | Tag::Eof => Category::Plain,
            Tag::Word => Category::Word,
            Tag::Operator | Tag::CloseDelim => Category::Punctuation,
            Tag::Regex | Tag::DoubleQuoted | Tag::SingleQuoted => Category::StringOrRegex,
            Tag::XmlComment | Tag::BlockComment | Tag::LineComment | Tag::HashComment => {
                Category::Comment
            }
        }
    }
}

/// A scanned token: its tag and its length in bytes.
///
/// Tokens carry no text of their own; the raw fragment is recovered by
/// slicing the source with a running offset. Token lengths partition the
/// source exactly: every byte belongs to exactly one token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub tag: Tag,
    /// Token length in bytes. Zero only for [`Tag::Eof`].
    pub len: u32,
}
