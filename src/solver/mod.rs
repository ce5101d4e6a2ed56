//! Rule-based solver
//!
//! Candidate filtering, word scoring and the per-session decision engine.

mod engine;
pub mod filter;
pub mod scorer;

pub use engine::{Decision, DecisionConfig, DecisionEngine, DecisionMode, DecisionState};
pub use filter::{LetterConstraint, filter_candidates};
pub use scorer::{best, best_distinct};
