//! Assist mode
//!
//! Suggests guesses for a game played elsewhere. The user reports the colors
//! they got back and the engine narrows the candidates.

use super::console::{is_quit, read_input};
use crate::core::{FeedbackRow, Turn, Word};
use crate::error::SolverError;
use crate::output::formatters::{board_row, plural};
use crate::solver::{DecisionConfig, DecisionEngine};
use crate::wordlists::Dictionary;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// What the user answered to a suggestion
enum Reply {
    Played(Turn),
    Undo,
    New,
    Quit,
}

/// Run the assistant loop until the user quits or input ends
///
/// # Errors
///
/// Returns an error on I/O failure or if the engine cannot propose a word.
#[allow(clippy::too_many_lines)] // Interactive loop with several commands
pub fn run_assist<R: BufRead, W: Write>(
    dictionary: &Dictionary,
    decision: DecisionConfig,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {}", "Wordle Assistant".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(out, "After each guess, enter the colors you got back:")?;
    writeln!(out, "  - G/g/🟩 for correct, Y/y/🟨 for present, R/r/-/🟥 for absent")?;
    writeln!(out, "  - Prefix a word if you played something else, e.g. 'slate gyrrr'")?;
    writeln!(out, "Commands: 'quit', 'new' for a new game, 'undo' to take back a guess\n")?;

    let mut history: Vec<Turn> = Vec::new();
    let mut engine = DecisionEngine::new(dictionary, decision);

    loop {
        let suggestion = engine.propose_guess(&history)?;
        let candidates = engine.candidates();

        writeln!(out, "{}", "─".repeat(60))?;
        writeln!(
            out,
            "Turn {}: {} remaining",
            history.len() + 1,
            plural(candidates.len(), "candidate", "candidates")
        )?;
        writeln!(
            out,
            "📊 Suggested guess: {} ({})",
            suggestion.word.text().bright_yellow().bold(),
            suggestion.mode.label()
        )?;
        if candidates.len() <= 10 {
            let list: Vec<&str> = candidates.iter().map(|w| w.text()).collect();
            writeln!(out, "   Candidates: {}", list.join(", "))?;
        }

        let reply = loop {
            let Some(line) = read_input(input, out, "Feedback")? else {
                break Reply::Quit;
            };
            match parse_reply(dictionary, suggestion.word, &line) {
                Ok(reply) => break reply,
                Err(message) => writeln!(out, "{}", format!("❌ {message}").red())?,
            }
        };

        match reply {
            Reply::Quit => {
                writeln!(out, "\n👋 Thanks for playing!")?;
                return Ok(());
            }
            Reply::New => {
                history.clear();
                engine = DecisionEngine::new(dictionary, decision);
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            Reply::Undo => {
                if history.pop().is_some() {
                    engine = replay(dictionary, decision, &history)?;
                    writeln!(out, "✓ Undone! Back to turn {}\n", history.len() + 1)?;
                } else {
                    writeln!(out, "Nothing to undo!\n")?;
                }
            }
            Reply::Played((word, feedback)) => {
                history.push((word, feedback));

                match engine.observe(&history) {
                    Ok(()) => {}
                    Err(e @ SolverError::EmptyCandidateSet { .. }) => {
                        history.pop();
                        engine = replay(dictionary, decision, &history)?;
                        writeln!(out, "{}", format!("❌ {e}").red())?;
                        writeln!(out, "   Check the colors and enter them again.\n")?;
                        continue;
                    }
                    Err(e) => return Err(e.into()),
                }

                if feedback.is_win() {
                    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
                    writeln!(
                        out,
                        "{}",
                        format!("🎉 Solved in {}!", plural(history.len(), "guess", "guesses"))
                            .bright_green()
                            .bold()
                    )?;
                    for (i, (word, feedback)) in history.iter().enumerate() {
                        writeln!(out, "  {}. {}", i + 1, board_row(word, feedback))?;
                    }
                    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;

                    let again = read_input(input, out, "Play again? (yes/no)")?
                        .map(|answer| answer.to_lowercase());
                    if !matches!(again.as_deref(), Some("yes" | "y")) {
                        writeln!(out, "\n👋 Thanks for playing!")?;
                        return Ok(());
                    }
                    history.clear();
                    engine = DecisionEngine::new(dictionary, decision);
                    writeln!(out, "\n🔄 New game started!\n")?;
                }
            }
        }
    }
}

/// Interpret one line typed at the feedback prompt
fn parse_reply(dictionary: &Dictionary, suggested: &Word, line: &str) -> Result<Reply, String> {
    let lower = line.to_lowercase();
    if is_quit(&lower) {
        return Ok(Reply::Quit);
    }
    match lower.as_str() {
        "new" | "n" => return Ok(Reply::New),
        "undo" | "u" => return Ok(Reply::Undo),
        "win" | "solved" => return Ok(Reply::Played((suggested.clone(), FeedbackRow::WIN))),
        _ => {}
    }

    let mut parts = line.split_whitespace();
    let (word, colors) = match (parts.next(), parts.next(), parts.next()) {
        (Some(colors), None, None) => (suggested.clone(), colors),
        (Some(word), Some(colors), None) => {
            let word = dictionary.lookup(word).map_err(|e| e.to_string())?;
            (word.clone(), colors)
        }
        _ => return Err("Enter the colors, or a word followed by its colors".to_string()),
    };

    let feedback = FeedbackRow::parse(colors).map_err(|e| e.to_string())?;
    Ok(Reply::Played((word, feedback)))
}

/// Rebuild an engine whose state matches having proposed every turn of `history`
fn replay<'a>(
    dictionary: &'a Dictionary,
    decision: DecisionConfig,
    history: &[Turn],
) -> Result<DecisionEngine<'a>, SolverError> {
    let mut engine = DecisionEngine::new(dictionary, decision);
    for turn in 0..history.len() {
        engine.propose_guess(&history[..turn])?;
    }
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::load_language;

    fn assist(keys: &str) -> String {
        let dictionary = load_language("en", None).unwrap();
        let mut input = keys.as_bytes();
        let mut out = Vec::new();
        run_assist(&dictionary, DecisionConfig::default(), &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn win_ends_session() {
        let out = assist("win\nno\n");

        assert!(out.contains("CRANE"));
        assert!(out.contains("Solved in 1 guess!"));
        assert!(out.contains("Thanks for playing"));
    }

    #[test]
    fn reported_feedback_narrows_candidates() {
        let out = assist("rrrgr\n");

        assert!(out.contains("Turn 2"));
        assert!(!out.contains("Turn 3"));
    }

    #[test]
    fn inconsistent_feedback_is_rejected() {
        // C cannot be both absent and present
        let out = assist("crane rrrrr\ncrane yrrrr\nquit\n");

        assert!(out.contains("no candidate words remain"));
        assert!(out.contains("Turn 2"));
        assert!(!out.contains("Turn 3"));
    }

    #[test]
    fn invalid_feedback_is_reprompted() {
        let out = assist("zzz\nslate gyrrrr\nquit\n");

        assert_eq!(out.matches("invalid feedback").count(), 2);
        assert!(!out.contains("Turn 2"));
    }

    #[test]
    fn undo_returns_to_previous_turn() {
        let out = assist("rrrrr\nundo\nundo\nquit\n");

        assert!(out.contains("Undone! Back to turn 1"));
        assert!(out.contains("Nothing to undo"));
        assert!(out.matches("CRANE").count() >= 3);
    }

    #[test]
    fn unknown_played_word_is_reported() {
        let out = assist("qqqqq rrrrr\nquit\n");
        assert!(out.contains("not in the en word list"));
    }

    #[test]
    fn replay_restores_probe_state() {
        let dictionary = load_language("en", None).unwrap();
        let secret = Word::new("wound").unwrap();
        let mut engine = DecisionEngine::new(&dictionary, DecisionConfig::default());
        let mut history = Vec::new();

        for _ in 0..2 {
            let word = engine.propose_guess(&history).unwrap().word.clone();
            let feedback = FeedbackRow::evaluate(&word, &secret);
            history.push((word, feedback));
        }

        let rebuilt = replay(&dictionary, DecisionConfig::default(), &history).unwrap();
        assert_eq!(rebuilt.state(), engine.state());
    }
}
