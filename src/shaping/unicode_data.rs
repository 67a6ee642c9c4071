// Copyright 2025 the Shakl Authors
// SPDX-License-Identifier: Apache-2.0

//! Unicode character properties used by the shaper.
//!
//! Joining behaviour is derived from the glyph table rather than from a
//! second hand-maintained list, so the two can never disagree.

use serde::Serialize;
use unicode_general_category::{GeneralCategory, get_general_category};

use super::glyph_table::letter_forms;

/// How a character takes part in cursive joining.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum JoiningType {
    /// Dual-joining (D): can connect on both sides.
    /// Examples: beh, seen, meem, noon, yeh
    /// Has 4 forms: isolated, initial, medial, final
    Dual,

    /// Right-joining (R): connects only to the previous letter.
    /// Examples: alef, dal, reh, waw
    /// Has 2 forms: isolated, final
    Right,

    /// Non-joining (U): anything outside the glyph table.
    /// Examples: Latin letters, digits, punctuation, hamza
    #[default]
    NonJoining,

    /// Transparent (T): combining marks.
    /// Only skipped over when the shaper runs with transparent marks.
    Transparent,
}

impl JoiningType {
    /// Can this character connect to the character after it?
    #[inline]
    pub fn joins_forward(&self) -> bool {
        matches!(self, Self::Dual)
    }

    /// Can this character connect to the character before it?
    #[inline]
    pub fn joins_backward(&self) -> bool {
        matches!(self, Self::Dual | Self::Right)
    }

    #[inline]
    pub fn is_transparent(&self) -> bool {
        matches!(self, Self::Transparent)
    }

    /// Short lowercase name for reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dual => "dual",
            Self::Right => "right",
            Self::NonJoining => "non-joining",
            Self::Transparent => "transparent",
        }
    }
}

/// Get the joining type for a character.
pub fn joining_type(c: char) -> JoiningType {
    match letter_forms(c) {
        Some(row) if row.connects_to_next() => JoiningType::Dual,
        Some(_) => JoiningType::Right,
        None if is_combining_mark(c) => JoiningType::Transparent,
        None => JoiningType::NonJoining,
    }
}

/// Check if a character is a non-spacing or enclosing combining mark.
///
/// Covers the Arabic harakat (fatha, kasra, shadda, ...) as well as
/// combining marks of every other script.
#[inline]
pub fn is_combining_mark(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::NonspacingMark | GeneralCategory::EnclosingMark
    )
}

/// Check if a character is in the Arabic Unicode blocks.
///
/// Covers:
/// - Arabic (U+0600–U+06FF)
/// - Arabic Supplement (U+0750–U+077F)
/// - Arabic Extended-A (U+08A0–U+08FF)
#[inline]
pub fn is_arabic(c: char) -> bool {
    let cp = c as u32;
    (0x0600..=0x06FF).contains(&cp)
        || (0x0750..=0x077F).contains(&cp)
        || (0x08A0..=0x08FF).contains(&cp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alef_is_right_joining() {
        assert_eq!(joining_type('\u{0627}'), JoiningType::Right);
        assert!(!joining_type('\u{0627}').joins_forward());
        assert!(joining_type('\u{0627}').joins_backward());
    }

    #[test]
    fn test_beh_is_dual_joining() {
        assert_eq!(joining_type('\u{0628}'), JoiningType::Dual);
        assert!(joining_type('\u{0628}').joins_forward());
        assert!(joining_type('\u{0628}').joins_backward());
    }

    #[test]
    fn test_letters_outside_table_are_non_joining() {
        // Hamza, teh marbuta, alef maksura and tatweel are not in the table.
        for c in ['\u{0621}', '\u{0629}', '\u{0649}', '\u{0640}'] {
            assert_eq!(joining_type(c), JoiningType::NonJoining, "U+{:04X}", c as u32);
        }
    }

    #[test]
    fn test_harakat_are_transparent() {
        for c in '\u{064B}'..='\u{0652}' {
            assert!(joining_type(c).is_transparent(), "U+{:04X}", c as u32);
            assert!(is_combining_mark(c));
        }
        assert!(joining_type('\u{0670}').is_transparent()); // Superscript alef
        assert!(joining_type('\u{0301}').is_transparent()); // Combining acute
    }

    #[test]
    fn test_latin_is_non_joining() {
        assert_eq!(joining_type('A'), JoiningType::NonJoining);
        assert_eq!(joining_type('z'), JoiningType::NonJoining);
        assert_eq!(joining_type('5'), JoiningType::NonJoining);
        assert!(!is_combining_mark('A'));
    }

    #[test]
    fn test_is_arabic() {
        assert!(is_arabic('\u{0627}')); // Alef
        assert!(is_arabic('\u{0628}')); // Beh
        assert!(is_arabic('\u{064E}')); // Fatha mark
        assert!(is_arabic('\u{0660}')); // Arabic-indic digit zero
        assert!(!is_arabic('\u{FE8F}')); // Presentation form, not base block
        assert!(!is_arabic('A'));
        assert!(!is_arabic('5'));
    }

    #[test]
    fn test_joining_type_names() {
        assert_eq!(JoiningType::Dual.name(), "dual");
        assert_eq!(JoiningType::Right.name(), "right");
        assert_eq!(JoiningType::NonJoining.name(), "non-joining");
        assert_eq!(JoiningType::Transparent.name(), "transparent");
    }
}
