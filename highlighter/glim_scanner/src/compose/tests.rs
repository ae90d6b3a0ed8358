use std::borrow::Cow;
use std::cell::Cell;

use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Uppercases keywords, leaves everything else alone.
struct UpperKeywords;

impl TokenStyler for UpperKeywords {
    fn keyword<'t>(&self, token: &'t str) -> Cow<'t, str> {
        Cow::Owned(token.to_uppercase())
    }
}

/// Wraps every hooked category in distinct brackets, so the output shows
/// exactly which hook saw which token.
struct Brackets;

impl TokenStyler for Brackets {
    fn keyword<'t>(&self, token: &'t str) -> Cow<'t, str> {
        Cow::Owned(format!("[{token}]"))
    }

    fn punctuation<'t>(&self, token: &'t str) -> Cow<'t, str> {
        Cow::Owned(format!("({token})"))
    }

    fn string_or_regex<'t>(&self, token: &'t str) -> Cow<'t, str> {
        Cow::Owned(format!("{{{token}}}"))
    }

    fn comment<'t>(&self, token: &'t str) -> Cow<'t, str> {
        Cow::Owned(format!("<{token}>"))
    }
}

#[test]
fn keyword_scenario() {
    let keywords = KeywordSet::new(["function", "console"]);
    let out = highlight_with(
        "function test() { console.log(\"test\")}",
        &keywords,
        &UpperKeywords,
    );
    assert_eq!(out, "FUNCTION test() { CONSOLE.log(\"test\")}");
}

#[test]
fn block_comment_scenario() {
    struct WrapComments;
    impl TokenStyler for WrapComments {
        fn comment<'t>(&self, token: &'t str) -> Cow<'t, str> {
            Cow::Owned(format!("<{token}>"))
        }
    }
    let out = highlight_with("a /* c */ b", &KeywordSet::default(), &WrapComments);
    assert_eq!(out, "a </* c */> b");
}

#[test]
fn identity_round_trips() {
    let sources = [
        "",
        "function test() { console.log(\"test\")}",
        "// comment\nlet x = /re/;\n<!-- xml -->\n# hash",
        "\"unterminated",
        "λ → 1 / 2",
    ];
    for source in sources {
        let out = highlight_with(source, &KeywordSet::default(), &IdentityStyler);
        assert_eq!(out, source, "identity styler altered {source:?}");
    }
}

#[test]
fn trivia_bypasses_every_hook() {
    // Whitespace comes back bare even though every hook brackets its input.
    let out = highlight_with("a = 1", &KeywordSet::new(["a"]), &Brackets);
    assert_eq!(out, "[a] (=) 1");
}

#[test]
fn each_category_reaches_its_own_hook() {
    let out = highlight_with(
        "if (x) { \"s\" } // done",
        &KeywordSet::new(["if"]),
        &Brackets,
    );
    assert_eq!(out, "[if] (()x()) ({) {\"s\"} (}) <// done>");
}

#[test]
fn non_keyword_words_bypass_the_keyword_hook() {
    let out = highlight_with("foo bar", &KeywordSet::new(["foo"]), &Brackets);
    assert_eq!(out, "[foo] bar");
}

#[test]
fn keyword_hook_called_once_per_matching_token() {
    struct Counting<'a> {
        calls: &'a Cell<usize>,
    }
    impl TokenStyler for Counting<'_> {
        fn keyword<'t>(&self, token: &'t str) -> Cow<'t, str> {
            self.calls.set(self.calls.get() + 1);
            Cow::Borrowed(token)
        }
    }
    let calls = Cell::new(0);
    let styler = Counting { calls: &calls };
    let out = highlight_with("do x do y do", &KeywordSet::new(["do"]), &styler);
    assert_eq!(out, "do x do y do");
    assert_eq!(calls.get(), 3);
}

#[test]
fn empty_keyword_set_never_styles_words() {
    let out = highlight_with("function test", &KeywordSet::default(), &UpperKeywords);
    assert_eq!(out, "function test");
}

proptest! {
    #[test]
    fn identity_round_trips_arbitrary_text(source in ".*") {
        let out = highlight_with(&source, &KeywordSet::default(), &IdentityStyler);
        prop_assert_eq!(out, source);
    }

    #[test]
    fn identity_round_trips_with_keywords(source in "[ -~\t\r\n]{0,200}") {
        let keywords = KeywordSet::new(["let", "if", "fn", "function"]);
        let out = highlight_with(&source, &keywords, &IdentityStyler);
        prop_assert_eq!(out, source);
    }
}
