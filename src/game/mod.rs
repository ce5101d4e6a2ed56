//! Game session driver shared by interactive play, solving and tournaments

mod session;

pub use session::{GameSession, GameStatus, TurnOutcome};
