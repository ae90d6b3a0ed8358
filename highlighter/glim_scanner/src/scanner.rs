//! Hand-written single-pass scanner producing `(Tag, len)` tokens.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and classifies
//! every character with one character of lookahead already fetched and a
//! lookback window of the previous one to three characters. There is no
//! backtracking and no grammar table: each token's start is decided by a
//! fixed-priority rule list, and the token then grows until its tag's close
//! predicate fires against the upcoming character.
//!
//! # Design
//!
//! Start classification is a byte `match` in strict priority order; the
//! ordering is load-bearing (`//` and `/*` must win over the bare `/`
//! operator, `<!--` over `<`, the regex rule over division). Each arm calls
//! a focused method that consumes the token body and returns
//! `Token { tag, len }`. The sentinel byte (`0x00`) naturally terminates
//! every consume loop.
//!
//! # Escape masking
//!
//! A character consumed immediately after a backslash inside a non-comment
//! token is recorded in the lookback registers as [`NO_CHAR`], so an
//! escaped quote or slash never reads back as a token terminator. Comments
//! never mask: `\` has no special meaning inside them.
//!
//! # Regex vs. division
//!
//! A `/` after a value-producing token (word, closing delimiter, string) is
//! division; a `/` after an operator or opening delimiter, or at the start
//! of text, opens a regex literal. This is a heuristic over the most recent
//! significant tag, not grammar analysis, and whitespace and comments are
//! transparent to it.

use crate::cursor::Cursor;
use crate::source_buffer::SourceBuffer;
use crate::tag::{Tag, Token};

/// Lookback register value meaning "no character here": the start of text,
/// or a character hidden by escape masking.
const NO_CHAR: u8 = 0;

/// Pure, allocation-free scanner. Produces one token at a time.
///
/// All state is per-invocation: two scans never interfere, and the scanner
/// is a total function over its input; malformed code degrades to
/// best-effort tokens instead of erroring.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// Previous consumed character (its leading byte), or [`NO_CHAR`].
    prev1: u8,
    /// Character before `prev1`, or [`NO_CHAR`].
    prev2: u8,
    /// Character before `prev2`, or [`NO_CHAR`]. Only the `-->` close
    /// check reaches back this far.
    prev3: u8,
    /// Most recently closed non-trivia, non-comment tag. Drives the
    /// regex-vs-division decision; whitespace and comments retain the
    /// previous value.
    last_significant: Option<Tag>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self {
            cursor,
            prev1: NO_CHAR,
            prev2: NO_CHAR,
            prev3: NO_CHAR,
            last_significant: None,
        }
    }

    /// Produce the next token.
    ///
    /// Returns `Tag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> Token {
        if self.cursor.is_eof() {
            return Token {
                tag: Tag::Eof,
                len: 0,
            };
        }

        let start = self.cursor.pos();
        let tag = self.classify_start();
        let token = match tag {
            Tag::Other => self.other(start),
            Tag::Operator | Tag::CloseDelim => self.single(start, tag),
            Tag::Word => self.word(start),
            Tag::Regex => self.regex(start),
            Tag::DoubleQuoted => self.quoted(start, tag, b'"'),
            Tag::SingleQuoted => self.quoted(start, tag, b'\''),
            Tag::XmlComment => self.xml_comment(start),
            Tag::BlockComment => self.block_comment(start),
            Tag::LineComment | Tag::HashComment => self.line_comment(start, tag),
            Tag::Eof => unreachable!("classify_start never yields Eof"),
        };

        if token.tag.is_significant() {
            self.last_significant = Some(token.tag);
        }
        token
    }

    // ─── Start classification ────────────────────────────────────────────

    /// Determine the tag of the token starting at the cursor, in strict
    /// priority order. The first matching rule wins.
    fn classify_start(&self) -> Tag {
        match self.cursor.current() {
            b'#' => Tag::HashComment,
            b'/' => match self.cursor.peek() {
                b'/' => Tag::LineComment,
                b'*' => Tag::BlockComment,
                _ if self.regex_can_start() => Tag::Regex,
                _ => Tag::Operator,
            },
            b'<' if self.cursor.peek() == b'!'
                && self.cursor.peek2() == b'-'
                && self.cursor.peek3() == b'-' =>
            {
                Tag::XmlComment
            }
            b'"' => Tag::DoubleQuoted,
            b'\'' => Tag::SingleQuoted,
            b if is_word_byte(b) => Tag::Word,
            b')' | b']' => Tag::CloseDelim,
            b if is_operator_byte(b) => Tag::Operator,
            _ => Tag::Other,
        }
    }

    /// A `/` opens a regex only where division is impossible: at the start
    /// of text or right after an operator/opening delimiter, and never
    /// directly after a `<` (an XML closing tag, not a regex).
    fn regex_can_start(&self) -> bool {
        matches!(self.last_significant, None | Some(Tag::Operator)) && self.prev1 != b'<'
    }

    // ─── Character consumption ───────────────────────────────────────────

    /// Consume one full character (UTF-8 aware), shifting the lookback
    /// registers. A character consumed right after a backslash inside a
    /// non-comment token is recorded as [`NO_CHAR`].
    fn bump(&mut self, tag: Tag) {
        let lead = self.cursor.current();
        self.prev3 = self.prev2;
        self.prev2 = self.prev1;
        self.prev1 = if self.prev1 == b'\\' && !tag.is_comment() {
            NO_CHAR
        } else {
            lead
        };
        self.cursor.advance_char();
    }

    /// Reload the lookback registers from raw bytes after a bulk skip.
    ///
    /// Bulk-skipped content never contains a backslash (backslashes are
    /// always in the delimiter set), so raw bytes and masked register
    /// values agree wherever a later close check can observe them.
    fn resync_lookback(&mut self) {
        let pos = self.cursor.pos();
        self.prev1 = if pos >= 1 {
            self.cursor.byte_at(pos - 1)
        } else {
            NO_CHAR
        };
        self.prev2 = if pos >= 2 {
            self.cursor.byte_at(pos - 2)
        } else {
            NO_CHAR
        };
        self.prev3 = if pos >= 3 {
            self.cursor.byte_at(pos - 3)
        } else {
            NO_CHAR
        };
    }

    fn token(&self, tag: Tag, start: u32) -> Token {
        Token {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    // ─── Trivia ──────────────────────────────────────────────────────────

    /// Whitespace runs and unclaimed characters. The run closes at the
    /// next non-whitespace character, so an unclaimed character merges any
    /// whitespace that follows it.
    fn other(&mut self, start: u32) -> Token {
        self.bump(Tag::Other);
        while is_whitespace_byte(self.cursor.current()) {
            self.bump(Tag::Other);
        }
        self.token(Tag::Other, start)
    }

    // ─── Punctuation ─────────────────────────────────────────────────────

    /// Single-character token: operators and closing delimiters.
    fn single(&mut self, start: u32, tag: Tag) -> Token {
        self.bump(tag);
        self.token(tag, start)
    }

    // ─── Words ───────────────────────────────────────────────────────────

    #[inline]
    fn word(&mut self, start: u32) -> Token {
        self.bump(Tag::Word);
        while is_word_byte(self.cursor.current()) {
            self.bump(Tag::Word);
        }
        self.token(Tag::Word, start)
    }

    // ─── String-like literals ────────────────────────────────────────────

    /// Quoted string. Closes after an unescaped matching quote once the
    /// token is at least two characters long (so the opening quote alone
    /// never closes it); force-closes at end of input.
    #[allow(unused_assignments)]
    fn quoted(&mut self, start: u32, tag: Tag, quote: u8) -> Token {
        self.bump(tag); // opening quote
        let mut multichar = false;
        loop {
            if self.cursor.is_eof() {
                break;
            }
            if multichar && self.prev1 == quote {
                break;
            }
            // SIMD-accelerated skip past ordinary content; only the quote
            // and backslash can affect the close decision.
            if self.cursor.skip_to_delim2(quote, b'\\') > 0 {
                self.resync_lookback();
                multichar = true;
            }
            if self.cursor.is_eof() {
                break;
            }
            self.bump(tag); // consume the delimiter; escape masking applies
            multichar = true;
        }
        self.token(tag, start)
    }

    /// Regex literal. Closes after an unescaped `/` once at least two
    /// characters long, or after a newline (an unterminated regex keeps
    /// its newline); force-closes at end of input.
    #[allow(unused_assignments)]
    fn regex(&mut self, start: u32) -> Token {
        self.bump(Tag::Regex); // opening slash
        let mut multichar = false;
        loop {
            if self.cursor.is_eof() {
                break;
            }
            if multichar && (self.prev1 == b'/' || self.prev1 == b'\n') {
                break;
            }
            if self.cursor.skip_to_delim3(b'/', b'\\', b'\n') > 0 {
                self.resync_lookback();
                multichar = true;
            }
            if self.cursor.is_eof() {
                break;
            }
            self.bump(Tag::Regex);
            multichar = true;
        }
        self.token(Tag::Regex, start)
    }

    // ─── Comments ────────────────────────────────────────────────────────

    /// `<!-- … -->`. Closes once the previous three characters are `-->`;
    /// lookback that would reach before the start of text reads as
    /// no-match.
    fn xml_comment(&mut self, start: u32) -> Token {
        self.bump(Tag::XmlComment);
        loop {
            if self.cursor.is_eof() {
                break;
            }
            if self.prev1 == b'>' && self.prev2 == b'-' && self.prev3 == b'-' {
                break;
            }
            if self.cursor.skip_to_delim(b'>') > 0 {
                self.resync_lookback();
            }
            if self.cursor.is_eof() {
                break;
            }
            self.bump(Tag::XmlComment);
        }
        self.token(Tag::XmlComment, start)
    }

    /// `/* … */`. Closes once the previous two characters are `*/`.
    fn block_comment(&mut self, start: u32) -> Token {
        self.bump(Tag::BlockComment);
        loop {
            if self.cursor.is_eof() {
                break;
            }
            if self.prev1 == b'/' && self.prev2 == b'*' {
                break;
            }
            if self.cursor.skip_to_delim(b'/') > 0 {
                self.resync_lookback();
            }
            if self.cursor.is_eof() {
                break;
            }
            self.bump(Tag::BlockComment);
        }
        self.token(Tag::BlockComment, start)
    }

    /// `// …` and `# …`. The newline is not consumed; it starts the next
    /// (trivia) token.
    fn line_comment(&mut self, start: u32, tag: Tag) -> Token {
        self.bump(tag);
        loop {
            if self.cursor.is_eof() || self.cursor.current() == b'\n' {
                break;
            }
            // SIMD-accelerated scan to end of line.
            if self.cursor.skip_to_delim(b'\n') > 0 {
                self.resync_lookback();
            }
        }
        self.token(tag, start)
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let tok = self.next_token();
        if tok.tag == Tag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// Returns `true` for the word class `[A-Za-z0-9_$]`.
///
/// The sentinel byte (0x00) maps to `false`, naturally terminating loops.
#[inline]
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

/// Returns `true` for the operator/opening-delimiter class.
///
/// `/` and `<` are listed for completeness; both are claimed by
/// higher-priority rules when they open a comment or a regex. Note that
/// `}` sits in this class while `)` and `]` are closing delimiters, so a
/// `/` after `}` opens a regex (a block ends, no value precedes).
#[inline]
fn is_operator_byte(b: u8) -> bool {
    matches!(
        b,
        b'/' | b'{'
            | b'}'
            | b'['
            | b'('
            | b'-'
            | b'+'
            | b'*'
            | b'='
            | b'<'
            | b'>'
            | b':'
            | b';'
            | b'|'
            | b'\\'
            | b'.'
            | b','
            | b'?'
            | b'!'
            | b'&'
            | b'@'
            | b'~'
    )
}

/// Returns `true` for whitespace bytes: space, tab, LF, CR, and the
/// vertical-tab/form-feed pair. Non-ASCII whitespace is not recognized;
/// it scans as an unclaimed character, which lands in the same trivia
/// category.
#[inline]
fn is_whitespace_byte(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// Convenience function: tokenize a source string and collect all tokens.
///
/// Returns a `Vec<Token>` containing all tokens except the final `Eof`.
/// For streaming access, construct a `SourceBuffer` + `Scanner` directly.
pub fn tokenize(source: &str) -> Vec<Token> {
    let buf = SourceBuffer::new(source);
    let mut scanner = Scanner::new(buf.cursor());
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token();
        if tok.tag == Tag::Eof {
            break;
        }
        tokens.push(tok);
    }
    tokens
}
