// Copyright 2025 the Shakl Authors
// SPDX-License-Identifier: Apache-2.0

//! Presentation-form table for the 28 basic Arabic letters.
//!
//! Each row maps a base letter from the Arabic block (U+0621–U+064A) to the
//! four glyphs it takes in the Arabic Presentation Forms-B block
//! (U+FE70–U+FEFF). Letters that only join backward (alef, dal, thal, reh,
//! zain, waw) repeat their isolated and final glyphs in the initial and
//! medial columns.
//!
//! See: https://www.unicode.org/charts/PDF/UFE70.pdf

use super::PositionalForm;

/// Glyph variants of a single base letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LetterForms {
    /// Base code point in the Arabic block
    pub base: char,
    /// Unicode letter name without the `ARABIC LETTER` prefix
    pub name: &'static str,
    /// `[isolated, final, initial, medial]`
    pub forms: [char; 4],
}

impl LetterForms {
    const fn new(base: char, name: &'static str, forms: [char; 4]) -> Self {
        Self { base, name, forms }
    }

    /// The glyph for the given positional form.
    #[inline]
    pub fn glyph(&self, form: PositionalForm) -> char {
        self.forms[form.column()]
    }

    /// Can this letter join the letter that follows it?
    ///
    /// True when the initial or medial column carries a glyph of its own.
    #[inline]
    pub fn connects_to_next(&self) -> bool {
        self.forms[2] != self.forms[0] || self.forms[3] != self.forms[1]
    }

    /// Can this letter join the letter that precedes it?
    #[inline]
    pub fn connects_to_previous(&self) -> bool {
        self.forms[1] != self.forms[0] || self.forms[3] != self.forms[2]
    }
}

/// The glyph table, sorted by base code point.
#[rustfmt::skip]
pub static ARABIC_LETTERS: [LetterForms; 28] = [
    LetterForms::new('\u{0627}', "ALEF", ['\u{FE8D}', '\u{FE8E}', '\u{FE8D}', '\u{FE8E}']),
    LetterForms::new('\u{0628}', "BEH", ['\u{FE8F}', '\u{FE90}', '\u{FE91}', '\u{FE92}']),
    LetterForms::new('\u{062A}', "TEH", ['\u{FE95}', '\u{FE96}', '\u{FE97}', '\u{FE98}']),
    LetterForms::new('\u{062B}', "THEH", ['\u{FE99}', '\u{FE9A}', '\u{FE9B}', '\u{FE9C}']),
    LetterForms::new('\u{062C}', "JEEM", ['\u{FE9D}', '\u{FE9E}', '\u{FE9F}', '\u{FEA0}']),
    LetterForms::new('\u{062D}', "HAH", ['\u{FEA1}', '\u{FEA2}', '\u{FEA3}', '\u{FEA4}']),
    LetterForms::new('\u{062E}', "KHAH", ['\u{FEA5}', '\u{FEA6}', '\u{FEA7}', '\u{FEA8}']),
    LetterForms::new('\u{062F}', "DAL", ['\u{FEA9}', '\u{FEAA}', '\u{FEA9}', '\u{FEAA}']),
    LetterForms::new('\u{0630}', "THAL", ['\u{FEAB}', '\u{FEAC}', '\u{FEAB}', '\u{FEAC}']),
    LetterForms::new('\u{0631}', "REH", ['\u{FEAD}', '\u{FEAE}', '\u{FEAD}', '\u{FEAE}']),
    LetterForms::new('\u{0632}', "ZAIN", ['\u{FEAF}', '\u{FEB0}', '\u{FEAF}', '\u{FEB0}']),
    LetterForms::new('\u{0633}', "SEEN", ['\u{FEB1}', '\u{FEB2}', '\u{FEB3}', '\u{FEB4}']),
    LetterForms::new('\u{0634}', "SHEEN", ['\u{FEB5}', '\u{FEB6}', '\u{FEB7}', '\u{FEB8}']),
    LetterForms::new('\u{0635}', "SAD", ['\u{FEB9}', '\u{FEBA}', '\u{FEBB}', '\u{FEBC}']),
    LetterForms::new('\u{0636}', "DAD", ['\u{FEBD}', '\u{FEBE}', '\u{FEBF}', '\u{FEC0}']),
    LetterForms::new('\u{0637}', "TAH", ['\u{FEC1}', '\u{FEC2}', '\u{FEC3}', '\u{FEC4}']),
    LetterForms::new('\u{0638}', "ZAH", ['\u{FEC5}', '\u{FEC6}', '\u{FEC7}', '\u{FEC8}']),
    LetterForms::new('\u{0639}', "AIN", ['\u{FEC9}', '\u{FECA}', '\u{FECB}', '\u{FECC}']),
    LetterForms::new('\u{063A}', "GHAIN", ['\u{FECD}', '\u{FECE}', '\u{FECF}', '\u{FED0}']),
    LetterForms::new('\u{0641}', "FEH", ['\u{FED1}', '\u{FED2}', '\u{FED3}', '\u{FED4}']),
    LetterForms::new('\u{0642}', "QAF", ['\u{FED5}', '\u{FED6}', '\u{FED7}', '\u{FED8}']),
    LetterForms::new('\u{0643}', "KAF", ['\u{FED9}', '\u{FEDA}', '\u{FEDB}', '\u{FEDC}']),
    LetterForms::new('\u{0644}', "LAM", ['\u{FEDD}', '\u{FEDE}', '\u{FEDF}', '\u{FEE0}']),
    LetterForms::new('\u{0645}', "MEEM", ['\u{FEE1}', '\u{FEE2}', '\u{FEE3}', '\u{FEE4}']),
    LetterForms::new('\u{0646}', "NOON", ['\u{FEE5}', '\u{FEE6}', '\u{FEE7}', '\u{FEE8}']),
    LetterForms::new('\u{0647}', "HEH", ['\u{FEE9}', '\u{FEEA}', '\u{FEEB}', '\u{FEEC}']),
    LetterForms::new('\u{0648}', "WAW", ['\u{FEED}', '\u{FEEE}', '\u{FEED}', '\u{FEEE}']),
    LetterForms::new('\u{064A}', "YEH", ['\u{FEF1}', '\u{FEF2}', '\u{FEF3}', '\u{FEF4}']),
];

/// Look up the presentation forms for a base letter.
///
/// Returns `None` for anything outside the table: Latin text, digits,
/// whitespace, punctuation, diacritics and the Arabic letters the table
/// does not cover (hamza, teh marbuta, alef maksura, ...).
#[inline]
pub fn letter_forms(c: char) -> Option<&'static LetterForms> {
    ARABIC_LETTERS
        .binary_search_by_key(&c, |row| row.base)
        .ok()
        .map(|index| &ARABIC_LETTERS[index])
}
