// Copyright 2025 the Shakl Authors
// SPDX-License-Identifier: Apache-2.0

//! Arabic shaping transform.
//!
//! Replaces every letter found in the glyph table with the presentation
//! form that matches its neighbours, in a single forward pass.
//!
//! # Algorithm
//!
//! For each character:
//!
//! 1. If it is not in the glyph table, copy it unchanged.
//! 2. Otherwise look at the previous character: does it exist, is it in the
//!    table, and can it join forward?
//! 3. Look at the next character: does it exist, is it in the table, and
//!    can it join backward?
//! 4. Both → medial, previous only → final, next only → initial,
//!    neither → isolated.
//!
//! A neighbour's joining capability is a fixed property of its table row,
//! not of the form it resolves to, so no decision depends on an earlier one
//! and a single scan is enough.
//!
//! By default every character outside the table, combining marks included,
//! breaks the join. [`ShapeOptions::transparent_marks`] makes the shaper
//! look through marks instead.

use super::glyph_table::{LetterForms, letter_forms};
use super::unicode_data::{is_combining_mark, joining_type};
use super::{PositionalForm, ShapedChar};

/// Options controlling neighbour lookup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShapeOptions {
    /// Skip over combining marks when looking for the previous and next
    /// letter. Off by default: a mark between two letters breaks the join.
    pub transparent_marks: bool,
}

/// Arabic shaping engine.
///
/// Stateless apart from its options; cheap to construct and safe to share
/// between threads.
///
/// # Example
///
/// ```
/// use shakl::shaping::ArabicShaper;
///
/// let shaper = ArabicShaper::new();
/// // seen + lam + alef + meem
/// assert_eq!(
///     shaper.shape("\u{0633}\u{0644}\u{0627}\u{0645}"),
///     "\u{FEB3}\u{FEE0}\u{FE8E}\u{FEE1}"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArabicShaper {
    options: ShapeOptions,
}

impl ArabicShaper {
    /// Create a shaper with default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ShapeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ShapeOptions {
        self.options
    }

    /// Shape a string. The result has the same number of characters.
    pub fn shape(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        tracing::trace!(
            chars = chars.len(),
            transparent_marks = self.options.transparent_marks,
            "shaping"
        );
        self.shape_chars(&chars).into_iter().collect()
    }

    /// Shape a sequence of characters.
    pub fn shape_chars(&self, text: &[char]) -> Vec<char> {
        (0..text.len()).map(|i| self.glyph_at(text, i)).collect()
    }

    /// Shape a string and report what happened to every character.
    pub fn analyze(&self, text: &str) -> Vec<ShapedChar> {
        let chars: Vec<char> = text.chars().collect();
        (0..chars.len())
            .map(|i| ShapedChar {
                source: chars[i],
                glyph: self.glyph_at(&chars, i),
                form: self.determine_form(&chars, i),
                joining: joining_type(chars[i]),
            })
            .collect()
    }

    /// Determine the positional form for the character at `index`.
    ///
    /// Returns `None` for characters outside the glyph table, which are
    /// never substituted. A letter that cannot join forward is reported as
    /// isolated or final, never initial or medial; its table row holds the
    /// same glyphs in those columns, so the output is unaffected.
    pub fn determine_form(&self, text: &[char], index: usize) -> Option<PositionalForm> {
        let row = letter_forms(*text.get(index)?)?;
        let form = PositionalForm::from_joins(
            self.prev_joins_forward(text, index),
            self.next_joins_backward(text, index),
        );
        Some(clamp_to_row(form, row))
    }

    fn glyph_at(&self, text: &[char], index: usize) -> char {
        let c = text[index];
        match (letter_forms(c), self.determine_form(text, index)) {
            (Some(row), Some(form)) => row.glyph(form),
            _ => c,
        }
    }

    /// Does the previous letter exist and join forward?
    fn prev_joins_forward(&self, text: &[char], index: usize) -> bool {
        let mut i = index;
        while i > 0 {
            i -= 1;
            if self.skips(text[i]) {
                continue;
            }
            return letter_forms(text[i]).is_some_and(LetterForms::connects_to_next);
        }
        false
    }

    /// Does the next letter exist and join backward?
    fn next_joins_backward(&self, text: &[char], index: usize) -> bool {
        text.iter()
            .skip(index + 1)
            .find(|&&c| !self.skips(c))
            .and_then(|&c| letter_forms(c))
            .is_some_and(LetterForms::connects_to_previous)
    }

    #[inline]
    fn skips(&self, c: char) -> bool {
        self.options.transparent_marks && is_combining_mark(c)
    }
}

fn clamp_to_row(form: PositionalForm, row: &LetterForms) -> PositionalForm {
    let form = if row.connects_to_next() {
        form
    } else {
        match form {
            PositionalForm::Initial => PositionalForm::Isolated,
            PositionalForm::Medial => PositionalForm::Final,
            other => other,
        }
    };
    if row.connects_to_previous() {
        form
    } else {
        match form {
            PositionalForm::Final => PositionalForm::Isolated,
            PositionalForm::Medial => PositionalForm::Initial,
            other => other,
        }
    }
}
