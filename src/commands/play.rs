//! Play command
//!
//! A game against a secret word, typed by a person or played by the engine.

use super::console::{is_quit, read_input};
use crate::core::Word;
use crate::error::SolverError;
use crate::game::{GameSession, GameStatus, TurnOutcome};
use crate::output::formatters::{board_row, plural};
use crate::solver::{DecisionConfig, DecisionEngine};
use crate::wordlists::Dictionary;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Configuration for a game
#[derive(Debug, Clone, Default)]
pub struct PlayConfig {
    /// Secret word; random from the dictionary when `None`
    pub secret: Option<String>,
    /// `None` plays until the word is found
    pub max_attempts: Option<usize>,
    /// Let the engine play every turn
    pub auto: bool,
    pub decision: DecisionConfig,
}

/// Run one game, reading guesses from `input` and writing the board to `out`
///
/// Malformed guesses and words outside the dictionary are reported and the
/// player is asked again. Typing `hint` shows the engine's suggestion.
///
/// # Errors
///
/// Returns an error on I/O failure, for an unknown `secret`, or when the
/// engine cannot continue.
pub fn run_play<R: BufRead, W: Write>(
    dictionary: &Dictionary,
    config: &PlayConfig,
    input: &mut R,
    out: &mut W,
) -> Result<GameStatus> {
    let secret = pick_secret(dictionary, config.secret.as_deref())?;
    let mut engine = DecisionEngine::new(dictionary, config.decision);
    let mut session = GameSession::new(dictionary, secret, config.max_attempts);

    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        " {} ({} words, {})",
        "WORDLE".bright_cyan().bold(),
        dictionary.len(),
        dictionary.lang()
    )?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    if !config.auto {
        writeln!(out, "Type a five-letter word, 'hint' for a suggestion or 'quit' to give up.\n")?;
    }

    while !session.status().is_over() {
        if config.auto {
            let outcome = session.play_turn(&mut engine)?;
            print_turn(out, &outcome)?;
            continue;
        }

        let prompt = format!("Guess {}", session.attempts() + 1);
        let Some(line) = read_input(input, out, &prompt)? else {
            break;
        };
        let line = line.to_lowercase();

        if is_quit(&line) {
            break;
        }

        if line == "hint" {
            let decision = engine.propose_guess(session.history())?;
            writeln!(
                out,
                "💡 Try {} ({}, {} left)",
                decision.word.text().bright_yellow().bold(),
                decision.mode.label(),
                plural(engine.candidates().len(), "candidate", "candidates")
            )?;
            continue;
        }

        match session.submit(&line) {
            Ok(outcome) => print_turn(out, &outcome)?,
            Err(e @ (SolverError::InvalidGuess { .. } | SolverError::NotInDictionary { .. })) => {
                writeln!(out, "{}", format!("❌ {e}").red())?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    print_summary(out, &session)?;
    Ok(session.status())
}

fn pick_secret(dictionary: &Dictionary, secret: Option<&str>) -> Result<Word> {
    Ok(match secret {
        Some(text) => dictionary.lookup(text)?.clone(),
        None => dictionary.choose_secret(&mut rand::rng()).clone(),
    })
}

fn print_turn<W: Write>(out: &mut W, outcome: &TurnOutcome) -> std::io::Result<()> {
    let mode = outcome
        .mode
        .map(|mode| format!("  {}", mode.label().bright_black()))
        .unwrap_or_default();
    writeln!(
        out,
        "  {:>3}  {}{mode}",
        outcome.attempt,
        board_row(&outcome.guess, &outcome.feedback)
    )
}

fn print_summary<W: Write>(out: &mut W, session: &GameSession<'_>) -> std::io::Result<()> {
    writeln!(out)?;
    match session.status() {
        GameStatus::Won { attempts } => {
            writeln!(
                out,
                "{}",
                format!("🎉 Solved in {}!", plural(attempts, "guess", "guesses"))
                    .green()
                    .bold()
            )?;
            for (word, feedback) in session.history() {
                writeln!(out, "    {} {}", feedback.to_emoji(), word.text())?;
            }
        }
        GameStatus::Lost { attempts } => {
            writeln!(
                out,
                "{} The word was {}.",
                format!("❌ Out of attempts after {attempts}.").red().bold(),
                session.secret().text().bright_yellow().bold()
            )?;
        }
        GameStatus::InProgress => {
            writeln!(
                out,
                "👋 Game abandoned. The word was {}.",
                session.secret().text().bright_yellow().bold()
            )?;
        }
    }
    Ok(())
}
