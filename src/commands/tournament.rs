//! Tournament - batch evaluation of the solver
//!
//! Plays many independent games against random secrets from random languages
//! and measures how many attempts the solver needs.

use crate::core::Word;
use crate::error::SolverError;
use crate::game::{GameSession, GameStatus};
use crate::solver::{DecisionConfig, DecisionEngine};
use crate::wordlists::Dictionary;
use anyhow::{Result, ensure};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a tournament run
#[derive(Debug, Clone)]
pub struct TournamentConfig {
    /// Number of games to play (default: 500)
    pub games: usize,
    /// Attempts after which a game counts as failed (default: 1000)
    pub max_attempts: usize,
    /// Seed for secret selection; random when `None`
    pub seed: Option<u64>,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            games: 500,
            max_attempts: 1000,
            seed: None,
            show_progress: true,
        }
    }
}

/// Outcome of a single tournament game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub lang: String,
    pub secret: String,
    /// Attempts used; `max_attempts` for a failed game
    pub attempts: usize,
    pub won: bool,
    /// Set when the session aborted instead of running out of attempts
    pub error: Option<SolverError>,
}

/// Summary numbers over per-game attempt counts
#[derive(Debug, Clone, PartialEq)]
pub struct TournamentStats {
    pub mean: f64,
    pub median: usize,
    pub std_dev: f64,
    pub min: usize,
    pub max: usize,
}

impl TournamentStats {
    /// Mean, upper median, population standard deviation, min and max
    #[must_use]
    pub fn from_attempts(attempts: &[usize]) -> Self {
        if attempts.is_empty() {
            return Self {
                mean: 0.0,
                median: 0,
                std_dev: 0.0,
                min: 0,
                max: 0,
            };
        }

        let n = attempts.len() as f64;
        let mean = attempts.iter().sum::<usize>() as f64 / n;
        let variance = attempts
            .iter()
            .map(|&a| (a as f64 - mean).powi(2))
            .sum::<f64>()
            / n;

        let mut sorted = attempts.to_vec();
        sorted.sort_unstable();

        Self {
            mean,
            median: sorted[sorted.len() / 2],
            std_dev: variance.sqrt(),
            min: sorted[0],
            max: sorted[sorted.len() - 1],
        }
    }
}

/// Result of a tournament run
#[derive(Debug, Clone)]
pub struct TournamentResult {
    pub games: usize,
    pub max_attempts: usize,
    pub seed: u64,
    pub records: Vec<GameRecord>,
    pub stats: TournamentStats,
    pub failures: usize,
    pub duration: Duration,
}

impl TournamentResult {
    /// Number of won games per attempt count
    #[must_use]
    pub fn distribution(&self) -> BTreeMap<usize, usize> {
        let mut distribution = BTreeMap::new();
        for record in self.records.iter().filter(|r| r.won) {
            *distribution.entry(record.attempts).or_insert(0) += 1;
        }
        distribution
    }

    /// Per-language (games, failures), sorted by language
    #[must_use]
    pub fn by_language(&self) -> BTreeMap<&str, (usize, usize)> {
        let mut languages: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        for record in &self.records {
            let entry = languages.entry(record.lang.as_str()).or_default();
            entry.0 += 1;
            if !record.won {
                entry.1 += 1;
            }
        }
        languages
    }
}

/// Run a tournament over the given dictionaries
///
/// Secrets are drawn up front from a seeded generator, so a given seed always
/// plays the same games. Games then run in parallel, each with its own
/// decision engine.
///
/// # Errors
///
/// Returns an error if no dictionaries are given.
pub fn run_tournament(
    dictionaries: &[Dictionary],
    config: &TournamentConfig,
    decision: DecisionConfig,
) -> Result<TournamentResult> {
    ensure!(!dictionaries.is_empty(), "a tournament needs at least one word list");

    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let schedule: Vec<(&Dictionary, Word)> = (0..config.games)
        .map(|_| {
            let dictionary = &dictionaries[rng.random_range(0..dictionaries.len())];
            (dictionary, dictionary.choose_secret(&mut rng).clone())
        })
        .collect();

    let pb = progress_bar(config.games as u64, config.show_progress);
    let start = Instant::now();

    let records: Vec<GameRecord> = schedule
        .par_iter()
        .map(|(dictionary, secret)| {
            let record = play_game(dictionary, secret, config.max_attempts, decision);
            pb.inc(1);
            record
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let attempts: Vec<usize> = records.iter().map(|r| r.attempts).collect();
    let failures = records.iter().filter(|r| !r.won).count();

    Ok(TournamentResult {
        games: config.games,
        max_attempts: config.max_attempts,
        seed,
        stats: TournamentStats::from_attempts(&attempts),
        records,
        failures,
        duration,
    })
}

/// Play one game from scratch with a fresh engine
fn play_game(
    dictionary: &Dictionary,
    secret: &Word,
    max_attempts: usize,
    decision: DecisionConfig,
) -> GameRecord {
    let mut engine = DecisionEngine::new(dictionary, decision);
    let mut session = GameSession::new(dictionary, secret.clone(), Some(max_attempts));

    let (attempts, won, error) = match session.play_out(&mut engine) {
        Ok(GameStatus::Won { attempts }) => (attempts, true, None),
        Ok(GameStatus::Lost { .. } | GameStatus::InProgress) => (max_attempts, false, None),
        Err(e) => (max_attempts, false, Some(e)),
    };

    GameRecord {
        lang: dictionary.lang().to_string(),
        secret: secret.text().to_string(),
        attempts,
        won,
        error,
    }
}

fn progress_bar(len: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}
