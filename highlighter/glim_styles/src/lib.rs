//! Unicode mathematical-alphanumeric substitution tables.
//!
//! Maps ASCII letters and digits onto their styled counterparts in the
//! Mathematical Alphanumeric Symbols block (U+1D400..U+1D7FF), so plain
//! text can carry a rudimentary visual style anywhere unicode text is
//! accepted: chat messages, terminals, plain-text fields. Characters
//! without a styled counterpart pass through unchanged, so restyling never
//! loses content.
//!
//! A handful of letters predate the block and live among the BMP
//! letterlike symbols (ℂ ℍ ℕ ℙ ℚ ℝ ℤ, and the Planck ℎ); the tables remap
//! those gaps to the legacy codepoints.

/// A visual style backed by a Mathematical Alphanumeric Symbols alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Style {
    /// 𝐁𝐨𝐥𝐝 serif letters and digits.
    BoldSerif,
    /// 𝗕𝗼𝗹𝗱 sans-serif letters and digits.
    BoldSans,
    /// 𝐼𝑡𝑎𝑙𝑖𝑐 serif letters. Digits have no italic alphabet and pass
    /// through unchanged.
    ItalicSerif,
    /// 𝕆𝕦𝕥𝕝𝕚𝕟𝕖𝕕 (double-struck) letters and digits.
    DoubleStruck,
    /// 𝚃𝚢𝚙𝚎𝚠𝚛𝚒𝚝𝚎𝚛 (monospace) letters and digits.
    Monospace,
}

impl Style {
    /// Parse a style from its command-line name.
    pub fn from_name(name: &str) -> Option<Style> {
        match name {
            "bold" => Some(Style::BoldSerif),
            "bold-sans" => Some(Style::BoldSans),
            "italic" => Some(Style::ItalicSerif),
            "double-struck" | "outline" => Some(Style::DoubleStruck),
            "monospace" => Some(Style::Monospace),
            _ => None,
        }
    }

    /// The canonical names accepted by [`Style::from_name`].
    pub fn names() -> &'static [&'static str] {
        &["bold", "bold-sans", "italic", "double-struck", "monospace"]
    }
}

/// Restyle a single character.
///
/// ASCII letters and digits map into the style's alphabet; every other
/// character (including already-styled ones) is returned unchanged.
pub fn restyle_char(style: Style, c: char) -> char {
    match c {
        'A'..='Z' => uppercase(style, c),
        'a'..='z' => lowercase(style, c),
        '0'..='9' => digit(style, c),
        _ => c,
    }
}

/// Restyle every character of `text` into a fresh string.
pub fn restyle(style: Style, text: &str) -> String {
    text.chars().map(|c| restyle_char(style, c)).collect()
}

/// Offset `c` from `base_ascii` into the alphabet starting at `base_styled`.
fn offset(c: char, base_ascii: char, base_styled: u32) -> char {
    let index = (c as u32) - (base_ascii as u32);
    char::from_u32(base_styled + index).unwrap_or(c)
}

fn uppercase(style: Style, c: char) -> char {
    match style {
        Style::BoldSerif => offset(c, 'A', 0x1D400),
        Style::BoldSans => offset(c, 'A', 0x1D5D4),
        Style::ItalicSerif => offset(c, 'A', 0x1D434),
        Style::DoubleStruck => match c {
            // Letterlike-symbols gaps in the double-struck alphabet.
            'C' => 'ℂ',
            'H' => 'ℍ',
            'N' => 'ℕ',
            'P' => 'ℙ',
            'Q' => 'ℚ',
            'R' => 'ℝ',
            'Z' => 'ℤ',
            _ => offset(c, 'A', 0x1D538),
        },
        Style::Monospace => offset(c, 'A', 0x1D670),
    }
}

fn lowercase(style: Style, c: char) -> char {
    match style {
        Style::BoldSerif => offset(c, 'a', 0x1D41A),
        Style::BoldSans => offset(c, 'a', 0x1D5EE),
        Style::ItalicSerif => {
            // The would-be italic h is the Planck constant, already in the BMP.
            if c == 'h' {
                'ℎ'
            } else {
                offset(c, 'a', 0x1D44E)
            }
        }
        Style::DoubleStruck => offset(c, 'a', 0x1D552),
        Style::Monospace => offset(c, 'a', 0x1D68A),
    }
}

fn digit(style: Style, c: char) -> char {
    match style {
        Style::BoldSerif => offset(c, '0', 0x1D7CE),
        Style::BoldSans => offset(c, '0', 0x1D7EC),
        // No italic digits exist; leave them plain.
        Style::ItalicSerif => c,
        Style::DoubleStruck => offset(c, '0', 0x1D7D8),
        Style::Monospace => offset(c, '0', 0x1D7F6),
    }
}
