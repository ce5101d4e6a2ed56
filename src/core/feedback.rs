//! Per-letter feedback calculation and representation
//!
//! Each guessed letter is colored:
//! - Correct (green): right letter, right position
//! - Present (yellow): letter occurs elsewhere in the secret
//! - Absent (red): letter does not occur at the stated multiplicity

use super::word::{WORD_LEN, Word};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Color given to one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackColor {
    /// Letter is in the right position
    Correct,
    /// Letter occurs in the secret at another position
    Present,
    /// Letter does not occur (beyond the occurrences already credited)
    Absent,
}

impl FeedbackColor {
    /// Single-letter code used for parsing and compact display
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'R',
        }
    }

    /// Emoji square for this color
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '🟥',
        }
    }
}

/// Feedback for a whole guess, one color per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackRow([FeedbackColor; WORD_LEN]);

/// Error returned when a feedback string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "invalid feedback \"{0}\": expected {WORD_LEN} of G/Y/R (or -, or emoji squares)",
    WORD_LEN = WORD_LEN
)]
pub struct ParseFeedbackError(String);

impl FeedbackRow {
    /// All greens (the guess is the secret)
    pub const WIN: Self = Self([FeedbackColor::Correct; WORD_LEN]);

    /// Create a row from explicit colors
    #[must_use]
    pub const fn new(colors: [FeedbackColor; WORD_LEN]) -> Self {
        Self(colors)
    }

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the available pool
    /// 2. Second pass, left to right: mark letters still available in the pool
    ///    as present, removing one occurrence each
    /// 3. Everything left is absent
    ///
    /// A letter guessed more often than the secret contains it is credited
    /// only as many times as it occurs, exact matches first.
    ///
    /// # Examples
    /// ```
    /// use wordle_heuristic::core::{FeedbackRow, Word};
    ///
    /// let guess = Word::new("robot").unwrap();
    /// let secret = Word::new("abort").unwrap();
    /// let feedback = FeedbackRow::evaluate(&guess, &secret);
    ///
    /// assert_eq!(feedback.to_string(), "YYYRG");
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, secret: &Word) -> Self {
        let mut result = [None; WORD_LEN];
        let mut available = secret.letter_counts();

        // First pass: exact position matches
        for (i, slot) in result.iter_mut().enumerate() {
            let letter = guess.letter_at(i);
            if letter == secret.letter_at(i) {
                *slot = Some(FeedbackColor::Correct);
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present elsewhere, from what is left of the pool
        for (i, slot) in result.iter_mut().enumerate() {
            if slot.is_some() {
                continue;
            }
            if let Some(count) = available.get_mut(&guess.letter_at(i)) {
                if *count > 0 {
                    *slot = Some(FeedbackColor::Present);
                    *count -= 1;
                }
            }
        }

        Self(result.map(|color| color.unwrap_or(FeedbackColor::Absent)))
    }

    /// Colors by position
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[FeedbackColor; WORD_LEN] {
        &self.0
    }

    /// Color at a position (0-4)
    #[inline]
    #[must_use]
    pub const fn color_at(&self, position: usize) -> FeedbackColor {
        self.0[position]
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        *self == Self::WIN
    }

    /// Number of positions with the given color
    #[must_use]
    pub fn count(&self, color: FeedbackColor) -> usize {
        self.0.iter().filter(|&&c| c == color).count()
    }

    /// Positions marked absent, in ascending order
    #[must_use]
    pub fn absent_positions(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == FeedbackColor::Absent)
            .map(|(i, _)| i)
            .collect()
    }

    /// Parse a row from a string like "GY-RG" or "🟩🟨🟥🟥🟩"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - 'R'/'r'/'-'/'_'/🟥/⬜/⬛ for absent
    ///
    /// # Errors
    /// Returns `ParseFeedbackError` on a wrong length or an unknown symbol.
    ///
    /// # Examples
    /// ```
    /// use wordle_heuristic::core::FeedbackRow;
    ///
    /// let a = FeedbackRow::parse("GY-RG").unwrap();
    /// let b = FeedbackRow::parse("🟩🟨🟥⬜🟩").unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn parse(s: &str) -> Result<Self, ParseFeedbackError> {
        let error = || ParseFeedbackError(s.to_string());

        let mut colors = [FeedbackColor::Absent; WORD_LEN];
        let mut chars = s.trim().chars();
        for slot in &mut colors {
            *slot = match chars.next().ok_or_else(error)? {
                'G' | 'g' | '🟩' => FeedbackColor::Correct,
                'Y' | 'y' | '🟨' => FeedbackColor::Present,
                'R' | 'r' | '-' | '_' | '🟥' | '⬜' | '⬛' => FeedbackColor::Absent,
                _ => return Err(error()),
            };
        }

        if chars.next().is_some() {
            return Err(error());
        }

        Ok(Self(colors))
    }

    /// Convert the row to emoji squares
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl FromStr for FeedbackRow {
    type Err = ParseFeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FeedbackRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in self.0 {
            write!(f, "{}", color.code())?;
        }
        Ok(())
    }
}
