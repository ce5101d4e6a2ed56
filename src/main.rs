//! Wordle Heuristic - CLI
//!
//! Play the game, watch the rule-based solver work, get suggestions for an
//! outside game, or run a tournament over many random secrets.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use wordle_heuristic::{
    commands::{
        PlayConfig, SolveConfig, TournamentConfig, run_assist, run_play, run_tournament,
        solve_word,
    },
    output::{print_solve_result, print_tournament_result},
    solver::DecisionConfig,
    wordlists::{Dictionary, load_language},
};

#[derive(Parser)]
#[command(
    name = "wordle_heuristic",
    about = "Wordle game with a rule-based solver that probes with distinct-letter words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Language of the word list
    #[arg(short, long, global = true, default_value = "en")]
    lang: String,

    /// Directory containing words_<lang>.txt files (English is built in)
    #[arg(short = 'd', long, global = true)]
    words_dir: Option<PathBuf>,

    /// Candidates per red letter above which the solver probes
    #[arg(
        short = 't',
        long,
        global = true,
        default_value = "3",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    distinct_threshold: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against a random secret (default)
    Play {
        /// Let the solver play
        #[arg(short, long)]
        auto: bool,

        /// Use this secret instead of a random one
        #[arg(short, long)]
        secret: Option<String>,

        /// Lose after this many guesses
        #[arg(short, long)]
        max_attempts: Option<usize>,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts for every turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Suggest guesses for a game played elsewhere
    Assist,

    /// Play many games against random secrets and report statistics
    Tournament {
        /// Number of games
        #[arg(short = 'n', long, default_value = "500")]
        games: usize,

        /// Attempts after which a game counts as failed
        #[arg(short, long, default_value = "1000")]
        max_attempts: usize,

        /// Seed for secret selection
        #[arg(long)]
        seed: Option<u64>,

        /// Languages to draw games from, e.g. en,pt (default: --lang)
        #[arg(long, value_delimiter = ',')]
        langs: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let decision = DecisionConfig {
        distinct_threshold: cli.distinct_threshold,
        ..DecisionConfig::default()
    };
    let words_dir = cli.words_dir.as_deref();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        auto: false,
        secret: None,
        max_attempts: None,
    });

    match command {
        Commands::Play {
            auto,
            secret,
            max_attempts,
        } => {
            let dictionary = load_language(&cli.lang, words_dir)?;
            let config = PlayConfig {
                secret,
                max_attempts,
                auto,
                decision,
            };
            run_play(&dictionary, &config, &mut io::stdin().lock(), &mut io::stdout())?;
            Ok(())
        }
        Commands::Solve { word, verbose } => {
            let dictionary = load_language(&cli.lang, words_dir)?;
            let config = SolveConfig {
                decision,
                ..SolveConfig::new(word)
            };
            let result = solve_word(config, &dictionary)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Assist => {
            let dictionary = load_language(&cli.lang, words_dir)?;
            run_assist(&dictionary, decision, &mut io::stdin().lock(), &mut io::stdout())
        }
        Commands::Tournament {
            games,
            max_attempts,
            seed,
            langs,
        } => {
            let langs = if langs.is_empty() { vec![cli.lang] } else { langs };
            let dictionaries = load_dictionaries(&langs, words_dir)?;

            println!(
                "Running tournament: {games} games over {} ({max_attempts} max attempts)...",
                langs.join(", ")
            );

            let config = TournamentConfig {
                games,
                max_attempts,
                seed,
                show_progress: true,
            };
            let result = run_tournament(&dictionaries, &config, decision)?;
            print_tournament_result(&result);
            Ok(())
        }
    }
}

fn load_dictionaries(langs: &[String], dir: Option<&Path>) -> Result<Vec<Dictionary>> {
    langs
        .iter()
        .map(|lang| {
            load_language(lang, dir).with_context(|| format!("failed to load language '{lang}'"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_threshold_must_be_positive() {
        assert!(Cli::try_parse_from(["wordle_heuristic", "-t", "0", "solve", "crane"]).is_err());

        let cli = Cli::try_parse_from(["wordle_heuristic", "-t", "5", "solve", "crane"]).unwrap();
        assert_eq!(cli.distinct_threshold, 5);
    }

    #[test]
    fn tournament_languages_split_on_commas() {
        let cli = Cli::try_parse_from(["wordle_heuristic", "tournament", "--langs", "en,pt"])
            .unwrap();

        match cli.command {
            Some(Commands::Tournament { langs, games, .. }) => {
                assert_eq!(langs, ["en", "pt"]);
                assert_eq!(games, 500);
            }
            _ => panic!("expected the tournament subcommand"),
        }
    }
}
