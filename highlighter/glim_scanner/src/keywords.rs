//! Caller-supplied keyword set with whole-token, case-insensitive matching.
//!
//! The set is the only language-awareness the scanner layer has: a word
//! token is a keyword exactly when its full text matches an entry,
//! ASCII-case-insensitively. There is no substring matching; `functional`
//! never matches `function`.

use rustc_hash::FxHashSet;

/// A set of keywords matched as whole tokens, ignoring ASCII case.
///
/// Entries are stored lowercased. Lookups use the token's length as a
/// first-pass filter, so words longer than any keyword are rejected
/// without hashing (and an empty set rejects everything for free).
#[derive(Clone, Debug, Default)]
pub struct KeywordSet {
    words: FxHashSet<String>,
    max_len: usize,
}

impl KeywordSet {
    /// Build a set from any iterable of strings.
    ///
    /// Empty entries are dropped: a token is never empty, so they could
    /// never match.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = FxHashSet::default();
        let mut max_len = 0;
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            max_len = max_len.max(word.len());
            set.insert(word.to_ascii_lowercase());
        }
        Self {
            words: set,
            max_len,
        }
    }

    /// Whole-token membership test, ignoring ASCII case.
    pub fn contains(&self, token: &str) -> bool {
        if token.is_empty() || token.len() > self.max_len {
            return false;
        }
        self.words.contains(&token.to_ascii_lowercase())
    }

    /// Number of distinct keywords in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the set holds no keywords.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests;
