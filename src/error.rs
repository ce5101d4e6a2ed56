//! Errors produced by the game and the solver

use crate::core::{FeedbackRow, Word, WordError};
use thiserror::Error;

/// Errors that a game session or the decision engine can report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// The guess is not a well-formed five-letter word; no turn is recorded.
    #[error("invalid guess \"{guess}\": {source}")]
    InvalidGuess {
        guess: String,
        #[source]
        source: WordError,
    },

    /// The guess is well formed but not in the accepted word list; no turn
    /// is recorded.
    #[error("\"{word}\" is not in the {lang} word list")]
    NotInDictionary { word: String, lang: String },

    /// Filtering removed every candidate. The feedback is inconsistent with
    /// the secret or the word list, and the session cannot continue.
    #[error("no candidate words remain after {guess} {feedback}")]
    EmptyCandidateSet { guess: Word, feedback: FeedbackRow },

    /// A word list contained no usable five-letter words.
    #[error("the {0} word list has no five-letter words")]
    EmptyDictionary(String),

    /// A decision engine was handed a history shorter than one it already
    /// consumed. Engines belong to a single session.
    #[error("guess history has {got} turns but {applied} were already applied")]
    HistoryRewound { applied: usize, got: usize },

    /// The game already ended.
    #[error("the game is over after {0} attempts")]
    GameOver(usize),
}
