//! Core domain types for the game
//!
//! Words and per-letter feedback. Everything here is pure and deterministic.

mod feedback;
mod word;

pub use feedback::{FeedbackColor, FeedbackRow, ParseFeedbackError};
pub use word::{WORD_LEN, Word, WordError};

/// One completed turn: the guessed word and the feedback it received
pub type Turn = (Word, FeedbackRow);
