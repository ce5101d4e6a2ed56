//! Wordle Heuristic
//!
//! A five-letter word game with a rule-based solver. The solver filters the
//! candidate words after every guess, picks the most letter-diverse frequent
//! word, and switches to distinct-letter probes when only one or two letters
//! are missing but many words still fit.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_heuristic::core::{FeedbackRow, Word};
//!
//! let guess = Word::new("robot").unwrap();
//! let secret = Word::new("abort").unwrap();
//!
//! let feedback = FeedbackRow::evaluate(&guess, &secret);
//! assert_eq!(feedback.to_string(), "YYYRG");
//! ```
//!
//! Letting the engine play a full game:
//!
//! ```rust
//! use wordle_heuristic::game::{GameSession, GameStatus};
//! use wordle_heuristic::solver::{DecisionConfig, DecisionEngine};
//! use wordle_heuristic::wordlists::load_language;
//!
//! let dictionary = load_language("en", None).unwrap();
//! let secret = dictionary.lookup("abort").unwrap().clone();
//!
//! let mut engine = DecisionEngine::new(&dictionary, DecisionConfig::default());
//! let mut session = GameSession::new(&dictionary, secret, None);
//!
//! let status = session.play_out(&mut engine).unwrap();
//! assert!(matches!(status, GameStatus::Won { .. }));
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Game sessions
pub mod game;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::SolverError;
