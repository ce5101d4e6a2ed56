//! Language-tagged, read-only word list

use crate::core::Word;
use crate::error::SolverError;
use rand::Rng;
use rustc_hash::FxHashSet;

/// An ordered list of accepted words for one language
///
/// Order is kept exactly as supplied; the scorer resolves ties by it.
#[derive(Debug, Clone)]
pub struct Dictionary {
    lang: String,
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Dictionary {
    /// Create a dictionary from already-validated words
    ///
    /// # Errors
    /// Returns `SolverError::EmptyDictionary` if `words` is empty.
    pub fn new(lang: impl Into<String>, words: Vec<Word>) -> Result<Self, SolverError> {
        let lang = lang.into();
        if words.is_empty() {
            return Err(SolverError::EmptyDictionary(lang));
        }

        let index = words.iter().cloned().collect();
        Ok(Self { lang, words, index })
    }

    /// Language tag (e.g. "en", "pt")
    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// All words, in their original order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; an empty dictionary cannot be constructed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Parse `text` and check that it is an accepted word
    ///
    /// # Errors
    /// - `SolverError::InvalidGuess` if `text` is not a five-letter word
    /// - `SolverError::NotInDictionary` if it is not in this list
    pub fn lookup(&self, text: &str) -> Result<&Word, SolverError> {
        let word = Word::new(text).map_err(|source| SolverError::InvalidGuess {
            guess: text.trim().to_string(),
            source,
        })?;

        self.index
            .get(&word)
            .ok_or_else(|| SolverError::NotInDictionary {
                word: word.text().to_string(),
                lang: self.lang.clone(),
            })
    }

    /// Pick a random secret word
    pub fn choose_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }
}
