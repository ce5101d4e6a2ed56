//! Command implementations

pub mod assist;
mod console;
pub mod play;
pub mod solve;
pub mod tournament;

pub use assist::run_assist;
pub use play::{PlayConfig, run_play};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
pub use tournament::{
    GameRecord, TournamentConfig, TournamentResult, TournamentStats, run_tournament,
};
