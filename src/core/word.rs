//! Word representation
//!
//! A Word stores a 5-letter uppercase word as fixed-size letter storage.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Number of letters in every word (the width of the board)
pub const WORD_LEN: usize = 5;

/// A 5-letter word in uppercase
///
/// Letters are stored as `char` so that word lists for languages with
/// accented letters (Portuguese, French, ...) load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    letters: [char; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {WORD_LEN} letters, got {0}", WORD_LEN = WORD_LEN)]
    InvalidLength(usize),
    #[error("word must contain only letters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input is uppercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 letters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_heuristic::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().to_uppercase();

        let count = text.chars().count();
        if count != WORD_LEN {
            return Err(WordError::InvalidLength(count));
        }

        if !text.chars().all(char::is_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }

        let mut letters = ['\0'; WORD_LEN];
        for (slot, letter) in letters.iter_mut().zip(text.chars()) {
            *slot = letter;
        }

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters of the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; WORD_LEN] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Number of times `letter` occurs in the word
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.letters.iter().filter(|&&l| l == letter).count()
    }

    /// Number of different letters in the word (5 means no repeats)
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.letters
            .iter()
            .enumerate()
            .filter(|&(i, l)| !self.letters[..i].contains(l))
            .count()
    }

    /// Get the count of each letter in the word
    ///
    /// Used as the depletable pool during feedback evaluation.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<char, u8> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl AsRef<Word> for Word {
    fn as_ref(&self) -> &Word {
        self
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
