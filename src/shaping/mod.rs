// Copyright 2025 the Shakl Authors
// SPDX-License-Identifier: Apache-2.0

//! Contextual glyph shaping for Arabic text.
//!
//! Arabic letters are cursive: the same letter is drawn differently
//! depending on whether it joins the letter before it, the letter after
//! it, both, or neither. Renderers without an OpenType shaping engine
//! (simple PDF writers, canvas text) can still draw connected Arabic when
//! every letter is first replaced by the matching pre-shaped code point
//! from the Arabic Presentation Forms-B block. That substitution is what
//! this module does.
//!
//! # Architecture
//!
//! - **glyph_table**: the fixed table of 28 base letters and their four
//!   presentation forms. Joining capability is read off the table.
//!
//! - **unicode_data**: joining types and character class helpers.
//!
//! - **arabic**: the single-pass shaping transform.
//!
//! The shaper only substitutes glyphs. It never reorders characters, so the
//! caller (or the renderer) is responsible for visual ordering.
//!
//! # Example
//!
//! ```
//! use shakl::shaping::shape;
//!
//! // beh + teh + theh
//! assert_eq!(shape("\u{0628}\u{062A}\u{062B}"), "\u{FE91}\u{FE98}\u{FE9A}");
//! assert_eq!(shape("Hello"), "Hello");
//! ```

pub mod arabic;
pub mod glyph_table;
pub mod unicode_data;

use serde::Serialize;

pub use arabic::{ArabicShaper, ShapeOptions};
pub use glyph_table::{ARABIC_LETTERS, LetterForms, letter_forms};
pub use unicode_data::{JoiningType, is_arabic, joining_type};

/// Shape `text` with the default options.
///
/// Every letter found in the glyph table is replaced by its isolated,
/// initial, medial or final presentation form; every other character is
/// copied unchanged. The output has exactly as many characters as the
/// input.
pub fn shape(text: &str) -> String {
    ArabicShaper::new().shape(text)
}

/// Positional forms for cursive scripts.
///
/// In cursive scripts, characters change shape depending on their position
/// within a connected sequence. This enum represents the four possible forms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionalForm {
    /// Standalone form - character not connected to neighbors
    #[default]
    Isolated,
    /// Beginning of a connected sequence
    Initial,
    /// Middle of a connected sequence
    Medial,
    /// End of a connected sequence
    Final,
}

impl PositionalForm {
    /// Column of this form in a glyph table row.
    ///
    /// Rows are laid out `[isolated, final, initial, medial]`.
    #[inline]
    pub fn column(&self) -> usize {
        match self {
            Self::Isolated => 0,
            Self::Final => 1,
            Self::Initial => 2,
            Self::Medial => 3,
        }
    }

    /// Get a human-readable name for this form.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Isolated => "isolated",
            Self::Initial => "initial",
            Self::Medial => "medial",
            Self::Final => "final",
        }
    }

    /// Pick the form from the joining state on each side.
    #[inline]
    pub fn from_joins(prev_joins: bool, next_joins: bool) -> Self {
        match (prev_joins, next_joins) {
            (false, false) => Self::Isolated,
            (false, true) => Self::Initial,
            (true, false) => Self::Final,
            (true, true) => Self::Medial,
        }
    }
}

/// Result of shaping a single character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ShapedChar {
    /// Character from the input
    pub source: char,
    /// Character written to the output
    pub glyph: char,
    /// Positional form, `None` when the character passed through unchanged
    pub form: Option<PositionalForm>,
    /// Joining behaviour of the source character
    pub joining: JoiningType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_form_column() {
        assert_eq!(PositionalForm::Isolated.column(), 0);
        assert_eq!(PositionalForm::Final.column(), 1);
        assert_eq!(PositionalForm::Initial.column(), 2);
        assert_eq!(PositionalForm::Medial.column(), 3);
    }

    #[test]
    fn test_positional_form_name() {
        assert_eq!(PositionalForm::Isolated.name(), "isolated");
        assert_eq!(PositionalForm::Initial.name(), "initial");
        assert_eq!(PositionalForm::Medial.name(), "medial");
        assert_eq!(PositionalForm::Final.name(), "final");
    }

    #[test]
    fn test_from_joins() {
        assert_eq!(PositionalForm::from_joins(false, false), PositionalForm::Isolated);
        assert_eq!(PositionalForm::from_joins(false, true), PositionalForm::Initial);
        assert_eq!(PositionalForm::from_joins(true, false), PositionalForm::Final);
        assert_eq!(PositionalForm::from_joins(true, true), PositionalForm::Medial);
    }

    #[test]
    fn test_shaped_char_serializes() {
        let shaped = ShapedChar {
            source: '\u{0628}',
            glyph: '\u{FE91}',
            form: Some(PositionalForm::Initial),
            joining: JoiningType::Dual,
        };
        let json = serde_json::to_value(&shaped).unwrap();
        assert_eq!(json["source"], "\u{0628}");
        assert_eq!(json["glyph"], "\u{FE91}");
        assert_eq!(json["form"], "initial");
        assert_eq!(json["joining"], "dual");
    }

    #[test]
    fn test_shape_free_function() {
        assert_eq!(shape(""), "");
        assert_eq!(shape("\u{0628}"), "\u{FE8F}");
    }
}
