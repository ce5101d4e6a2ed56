//! One game: secret word, board, turn counter and win/lose detection
//!
//! The same session type serves interactive play (guesses typed by a person)
//! and automatic play (guesses proposed by a [`DecisionEngine`]).

use crate::core::{FeedbackRow, Turn, Word};
use crate::error::SolverError;
use crate::solver::{Decision, DecisionEngine, DecisionMode};
use crate::wordlists::Dictionary;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { attempts: usize },
    Lost { attempts: usize },
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// What the presentation side sees after each accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub guess: Word,
    pub feedback: FeedbackRow,
    pub won: bool,
    /// 1-based number of this attempt
    pub attempt: usize,
    /// How the guess was chosen, for automatic turns
    pub mode: Option<DecisionMode>,
}

/// A single game against a fixed secret
pub struct GameSession<'a> {
    dictionary: &'a Dictionary,
    secret: Word,
    history: Vec<Turn>,
    max_attempts: Option<usize>,
    status: GameStatus,
}

impl<'a> GameSession<'a> {
    /// Start a game. `max_attempts` of `None` means the game only ends on a win.
    #[must_use]
    pub const fn new(
        dictionary: &'a Dictionary,
        secret: Word,
        max_attempts: Option<usize>,
    ) -> Self {
        Self {
            dictionary,
            secret,
            history: Vec::new(),
            max_attempts,
            status: GameStatus::InProgress,
        }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Accepted guesses and their feedback, oldest first
    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Number of accepted guesses
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Play a guess typed by the player
    ///
    /// # Errors
    /// - `SolverError::GameOver` once the game has ended
    /// - `SolverError::InvalidGuess` for text that is not a five-letter word
    /// - `SolverError::NotInDictionary` for words outside the list
    ///
    /// A rejected guess leaves the history and the attempt counter untouched.
    pub fn submit(&mut self, text: &str) -> Result<TurnOutcome, SolverError> {
        self.ensure_in_progress()?;
        let guess = self.dictionary.lookup(text)?.clone();
        Ok(self.record(guess, None))
    }

    /// Play one automatic turn with the engine's proposal
    ///
    /// # Errors
    /// Propagates engine errors and the rejections of [`submit`](Self::submit).
    pub fn play_turn(
        &mut self,
        engine: &mut DecisionEngine<'_>,
    ) -> Result<TurnOutcome, SolverError> {
        self.ensure_in_progress()?;
        let Decision { word, mode } = engine.propose_guess(&self.history)?;

        if !self.dictionary.contains(word) {
            return Err(SolverError::NotInDictionary {
                word: word.text().to_string(),
                lang: self.dictionary.lang().to_string(),
            });
        }

        Ok(self.record(word.clone(), Some(mode)))
    }

    /// Play automatic turns until the game is won or lost
    ///
    /// # Errors
    /// Stops at the first error, e.g. `SolverError::EmptyCandidateSet`.
    pub fn play_out(&mut self, engine: &mut DecisionEngine<'_>) -> Result<GameStatus, SolverError> {
        while !self.status.is_over() {
            self.play_turn(engine)?;
        }
        Ok(self.status)
    }

    fn ensure_in_progress(&self) -> Result<(), SolverError> {
        if self.status.is_over() {
            return Err(SolverError::GameOver(self.attempts()));
        }
        Ok(())
    }

    fn record(&mut self, guess: Word, mode: Option<DecisionMode>) -> TurnOutcome {
        let feedback = FeedbackRow::evaluate(&guess, &self.secret);
        self.history.push((guess.clone(), feedback));

        let attempt = self.history.len();
        let won = feedback.is_win();
        if won {
            self.status = GameStatus::Won { attempts: attempt };
        } else if self.max_attempts.is_some_and(|max| attempt >= max) {
            self.status = GameStatus::Lost { attempts: attempt };
        }

        TurnOutcome {
            guess,
            feedback,
            won,
            attempt,
            mode,
        }
    }
}
