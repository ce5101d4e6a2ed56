//! Word solving command
//!
//! Lets the decision engine play against a known secret and returns the
//! solution path.

use crate::core::FeedbackRow;
use crate::error::SolverError;
use crate::game::GameSession;
use crate::solver::{DecisionConfig, DecisionEngine, DecisionMode};
use crate::wordlists::Dictionary;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    /// Give up after this many guesses; `None` plays until solved
    pub max_guesses: Option<usize>,
    pub decision: DecisionConfig,
}

impl SolveConfig {
    #[must_use]
    pub fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: None,
            decision: DecisionConfig::default(),
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub feedback: FeedbackRow,
    pub mode: DecisionMode,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific word from `dictionary`
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a five-letter word or not in the dictionary
/// - The engine runs out of candidates
pub fn solve_word(
    config: SolveConfig,
    dictionary: &Dictionary,
) -> Result<SolveResult, SolverError> {
    let secret = dictionary.lookup(&config.target)?.clone();
    let target = secret.text().to_string();

    let mut engine = DecisionEngine::new(dictionary, config.decision);
    let mut session = GameSession::new(dictionary, secret, config.max_guesses);
    let mut guesses = Vec::new();

    while !session.status().is_over() {
        engine.observe(session.history())?;
        let candidates_before = engine.candidates().len();

        let outcome = session.play_turn(&mut engine)?;

        engine.observe(session.history())?;
        guesses.push(GuessStep {
            word: outcome.guess.text().to_string(),
            feedback: outcome.feedback,
            mode: outcome.mode.unwrap_or(DecisionMode::Converging),
            candidates_before,
            candidates_after: engine.candidates().len(),
        });

        if outcome.won {
            return Ok(SolveResult {
                success: true,
                guesses,
                target,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target,
    })
}
