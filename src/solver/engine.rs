//! Turn-by-turn decision engine
//!
//! Owns the candidate set and the carry-over state of one game session and
//! proposes the next guess from the guess history.

use super::filter::filter_candidates;
use super::scorer;
use crate::core::{FeedbackColor, FeedbackRow, Turn, Word};
use crate::error::SolverError;
use crate::wordlists::Dictionary;
use std::collections::{BTreeMap, BTreeSet};

/// Tunable limits for switching into probing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionConfig {
    /// Probe only while candidates and untried letters both exceed
    /// `distinct_threshold × red_count` (default: 3). Zero acts as one.
    pub distinct_threshold: usize,

    /// Probe only when the stored red count is between 1 and this (default: 2)
    pub max_probe_reds: usize,
}

impl DecisionConfig {
    /// Create a config with the given probing limits
    #[must_use]
    pub const fn new(distinct_threshold: usize, max_probe_reds: usize) -> Self {
        Self {
            distinct_threshold,
            max_probe_reds,
        }
    }
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self::new(3, 2)
    }
}

/// How a guess was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecisionMode {
    /// First turn: best word of the whole dictionary
    Opening,
    /// Best word of the remaining candidates
    Converging,
    /// Distinct-letter probe chosen from the whole dictionary
    Probing,
}

impl DecisionMode {
    /// Lowercase name for terminal output
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Opening => "opening",
            Self::Converging => "converging",
            Self::Probing => "probing",
        }
    }
}

/// State carried between turns of one session
///
/// Starts empty for every session and is never shared between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecisionState {
    closest: Option<FeedbackRow>,
    untried_letters: BTreeSet<char>,
    red_count: Option<usize>,
    /// Probe proposed for each recent turn index
    proposed_probes: BTreeMap<usize, Word>,
    last_mode: Option<DecisionMode>,
}

impl DecisionState {
    /// Feedback row whose red positions are being probed
    #[must_use]
    pub const fn closest(&self) -> Option<&FeedbackRow> {
        self.closest.as_ref()
    }

    /// Letters the remaining candidates still allow on the red positions
    #[must_use]
    pub const fn untried_letters(&self) -> &BTreeSet<char> {
        &self.untried_letters
    }

    /// Red count of the most recent non-probe guess
    #[must_use]
    pub const fn red_count(&self) -> Option<usize> {
        self.red_count
    }

    /// Whether the most recent decision was a probe
    #[must_use]
    pub const fn last_was_probe(&self) -> bool {
        matches!(self.last_mode, Some(DecisionMode::Probing))
    }

    /// A played turn counts as a probe only if it played the probe proposed
    /// for that turn
    fn played_probe(&self, turn: usize, word: &Word) -> bool {
        self.proposed_probes.get(&turn) == Some(word)
    }

    /// Mode of the most recent decision
    #[must_use]
    pub const fn last_mode(&self) -> Option<DecisionMode> {
        self.last_mode
    }
}

/// A proposed guess and how it was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision<'a> {
    pub word: &'a Word,
    pub mode: DecisionMode,
}

/// Per-session guess selection
///
/// Create one engine per game; the history passed in must only ever grow.
pub struct DecisionEngine<'a> {
    dictionary: &'a Dictionary,
    config: DecisionConfig,
    candidates: Vec<&'a Word>,
    applied: usize,
    state: DecisionState,
}

impl<'a> DecisionEngine<'a> {
    /// Create an engine whose candidates start as the whole dictionary
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, config: DecisionConfig) -> Self {
        Self {
            dictionary,
            config,
            candidates: dictionary.words().iter().collect(),
            applied: 0,
            state: DecisionState::default(),
        }
    }

    /// Words still consistent with every observed turn
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    #[must_use]
    pub const fn state(&self) -> &DecisionState {
        &self.state
    }

    #[must_use]
    pub const fn config(&self) -> &DecisionConfig {
        &self.config
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Narrow the candidates with every turn not seen yet
    ///
    /// # Errors
    /// - `SolverError::HistoryRewound` if `history` is shorter than what was
    ///   already applied
    /// - `SolverError::EmptyCandidateSet` if a turn rules out every candidate
    pub fn observe(&mut self, history: &[Turn]) -> Result<(), SolverError> {
        if history.len() < self.applied {
            return Err(SolverError::HistoryRewound {
                applied: self.applied,
                got: history.len(),
            });
        }

        for (guess, feedback) in &history[self.applied..] {
            let remaining = filter_candidates(&self.candidates, guess, feedback);
            if remaining.is_empty() {
                return Err(SolverError::EmptyCandidateSet {
                    guess: guess.clone(),
                    feedback: *feedback,
                });
            }
            self.candidates = remaining;
            self.applied += 1;
        }

        Ok(())
    }

    /// Propose the next guess
    ///
    /// The first guess is the best word of the whole dictionary. Afterwards
    /// the engine probes when one or two red letters remain but too many
    /// candidates share the solved positions, and otherwise picks the best
    /// remaining candidate.
    ///
    /// # Errors
    /// Propagates the errors of [`observe`](Self::observe).
    pub fn propose_guess(&mut self, history: &[Turn]) -> Result<Decision<'a>, SolverError> {
        self.observe(history)?;

        let Some((last_word, last_feedback)) = history.last() else {
            let dictionary = self.dictionary;
            let word = scorer::best(dictionary.words())
                .ok_or_else(|| SolverError::EmptyDictionary(dictionary.lang().to_string()))?;
            self.state.proposed_probes.clear();
            self.state.last_mode = Some(DecisionMode::Opening);
            return Ok(Decision {
                word,
                mode: DecisionMode::Opening,
            });
        };

        let turn = history.len();
        let after_probe = self.state.played_probe(turn - 1, last_word);
        self.state.proposed_probes.retain(|&at, _| at + 1 >= turn);

        // Probe feedback is exploratory and never replaces the stored count
        if self.state.red_count.is_none() || !after_probe {
            self.state.red_count = Some(last_feedback.count(FeedbackColor::Absent));
        }

        if let Some(word) = self.probe(last_word, last_feedback, after_probe) {
            self.state.proposed_probes.insert(turn, word.clone());
            self.state.last_mode = Some(DecisionMode::Probing);
            return Ok(Decision {
                word,
                mode: DecisionMode::Probing,
            });
        }

        self.state.proposed_probes.remove(&turn);
        self.state.last_mode = Some(DecisionMode::Converging);
        let word = scorer::best(&self.candidates).copied().ok_or_else(|| {
            SolverError::EmptyCandidateSet {
                guess: last_word.clone(),
                feedback: *last_feedback,
            }
        })?;

        Ok(Decision {
            word,
            mode: DecisionMode::Converging,
        })
    }

    /// Pick a distinct-letter probe if the red-letter stalemate conditions hold
    fn probe(
        &mut self,
        last_word: &Word,
        last_feedback: &FeedbackRow,
        after_probe: bool,
    ) -> Option<&'a Word> {
        let red_count = self
            .state
            .red_count
            .filter(|reds| (1..=self.config.max_probe_reds).contains(reds))?;
        let threshold = self.config.distinct_threshold.max(1) * red_count;

        if self.candidates.len() <= threshold {
            return None;
        }

        if self.state.closest.is_none() || !after_probe {
            self.state.closest = Some(*last_feedback);
        }
        let red_positions = self
            .state
            .closest
            .map(|row| row.absent_positions())
            .unwrap_or_default();

        let untried: BTreeSet<char> = red_positions
            .iter()
            .flat_map(|&position| self.candidates.iter().map(move |w| w.letter_at(position)))
            .collect();
        self.state.untried_letters = untried;

        if self.state.untried_letters.len() <= threshold {
            return None;
        }

        let dictionary = self.dictionary;
        scorer::best_distinct(
            last_word,
            &red_positions,
            &self.state.untried_letters,
            dictionary.words(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    /// Seven words share _OUND; FOUND leaves one red letter
    fn ound_dictionary() -> Dictionary {
        Dictionary::new(
            "en",
            words_from_slice(&[
                "found", "bound", "hound", "mound", "pound", "round", "sound", "wound", "chomp",
                "brash",
            ]),
        )
        .unwrap()
    }

    fn turn(guess: &str, secret: &str) -> Turn {
        let guess = Word::new(guess).unwrap();
        let feedback = FeedbackRow::evaluate(&guess, &Word::new(secret).unwrap());
        (guess, feedback)
    }

    #[test]
    fn opening_uses_whole_dictionary() {
        let dictionary = ound_dictionary();
        let mut engine = DecisionEngine::new(&dictionary, DecisionConfig::default());

        let decision = engine.propose_guess(&[]).unwrap();

        assert_eq!(decision.mode, DecisionMode::Opening);
        assert_eq!(decision.word, scorer::best(dictionary.words()).unwrap());
        assert_eq!(engine.candidates().len(), dictionary.len());
    }

    #[test]
    fn one_red_letter_with_many_candidates_probes() {
        let dictionary = ound_dictionary();
        let mut engine = DecisionEngine::new(&dictionary, DecisionConfig::default());
        let history = vec![turn("found", "sound")];

        let decision = engine.propose_guess(&history).unwrap();

        assert_eq!(engine.candidates().len(), 7);
        assert_eq!(engine.state().red_count(), Some(1));
        assert_eq!(
            engine.state().untried_letters(),
            &"BHMPRSW".chars().collect::<BTreeSet<_>>()
        );

        // BRASH tests four of the seven first letters; the frequency pick
        // would be a single _OUND word
        assert_eq!(decision.mode, DecisionMode::Probing);
        assert_eq!(decision.word.text(), "BRASH");
        assert_ne!(Some(&decision.word), scorer::best(engine.candidates()));
        assert!(engine.state().last_was_probe());
        assert_eq!(engine.state().last_mode(), Some(DecisionMode::Probing));
    }

    #[test]
    fn probe_feedback_does_not_replace_red_count() {
        let dictionary = ound_dictionary();
        let mut engine = DecisionEngine::new(&dictionary, DecisionConfig::default());
        let mut history = vec![turn("found", "sound")];

        let probe = engine.propose_guess(&history).unwrap();
        history.push(turn(probe.word.text(), "sound"));

        // BRASH scores four reds against SOUND
        assert_eq!(history[1].1.count(FeedbackColor::Absent), 4);

        let decision = engine.propose_guess(&history).unwrap();

        assert_eq!(engine.state().red_count(), Some(1));
        assert_eq!(engine.state().closest(), Some(&history[0].1));
        assert_eq!(decision.mode, DecisionMode::Converging);
        assert_eq!(decision.word.text(), "SOUND");
        assert!(!engine.state().last_was_probe());
    }

    #[test]
    fn declined_suggestion_counts_as_regular_turn() {
        let dictionary = ound_dictionary();
        let history = vec![turn("found", "sound"), turn("chomp", "sound")];

        // Shown BRASH, but CHOMP was played instead
        let mut hinted = DecisionEngine::new(&dictionary, DecisionConfig::default());
        assert_eq!(hinted.propose_guess(&history[..1]).unwrap().word.text(), "BRASH");
        let after_hint = hinted.propose_guess(&history).unwrap();

        let mut unhinted = DecisionEngine::new(&dictionary, DecisionConfig::default());
        let plain = unhinted.propose_guess(&history).unwrap();

        assert_eq!(after_hint, plain);
        assert_eq!(plain.mode, DecisionMode::Converging);
        assert_eq!(plain.word.text(), "BOUND");
        assert_eq!(hinted.state().red_count(), Some(4));
        assert_eq!(hinted.state().red_count(), unhinted.state().red_count());
    }

    #[test]
    fn repeated_proposals_agree() {
        let dictionary = ound_dictionary();
        let mut engine = DecisionEngine::new(&dictionary, DecisionConfig::default());
        let mut history = vec![turn("found", "sound")];

        let suggested = engine.propose_guess(&history).unwrap();
        history.push(turn(suggested.word.text(), "sound"));

        let first = engine.propose_guess(&history).unwrap();
        let state = engine.state().clone();
        let second = engine.propose_guess(&history).unwrap();

        assert_eq!(first, second);
        assert_eq!(engine.state(), &state);
        assert_eq!(engine.state().red_count(), Some(1));
    }

    #[test]
    fn zero_threshold_still_solves() {
        let dictionary = ound_dictionary();

        for secret in dictionary.words() {
            let mut engine = DecisionEngine::new(&dictionary, DecisionConfig::new(0, 2));
            let mut history: Vec<Turn> = Vec::new();

            while !history.last().is_some_and(|(_, feedback)| feedback.is_win()) {
                assert!(history.len() < 20, "no solution for {secret}");
                let word = engine.propose_guess(&history).unwrap().word.clone();
                let feedback = FeedbackRow::evaluate(&word, secret);
                history.push((word, feedback));
            }
        }
    }

    #[test]
    fn high_threshold_keeps_converging() {
        let dictionary = ound_dictionary();
        let mut engine = DecisionEngine::new(&dictionary, DecisionConfig::new(10, 2));

        let decision = engine.propose_guess(&[turn("found", "sound")]).unwrap();

        assert_eq!(decision.mode, DecisionMode::Converging);
        assert_eq!(decision.word.text(), "BOUND");
    }

    #[test]
    fn too_few_untried_letters_keeps_converging() {
        // Two red positions, nine candidates, but only six letters to try
        let dictionary = Dictionary::new(
            "xx",
            words_from_slice(&[
                "afcde", "agcde", "aicde", "bfcde", "bgcde", "bicde", "hfcde", "hgcde", "hicde",
                "qzcde",
            ]),
        )
        .unwrap();
        let mut engine = DecisionEngine::new(&dictionary, DecisionConfig::default());

        let decision = engine.propose_guess(&[turn("qzcde", "bgcde")]).unwrap();

        assert_eq!(engine.candidates().len(), 9);
        assert_eq!(engine.state().red_count(), Some(2));
        assert_eq!(engine.state().untried_letters().len(), 6);
        assert_eq!(decision.mode, DecisionMode::Converging);
    }

    #[test]
    fn many_reds_never_probe() {
        let dictionary = ound_dictionary();
        let mut engine = DecisionEngine::new(&dictionary, DecisionConfig::default());

        // CHOMP against SOUND: only O scores
        let decision = engine.propose_guess(&[turn("chomp", "sound")]).unwrap();

        assert_eq!(engine.state().red_count(), Some(4));
        assert_eq!(decision.mode, DecisionMode::Converging);
        assert!(engine.candidates().iter().any(|w| w.text() == "SOUND"));
    }

    #[test]
    fn candidates_shrink_monotonically() {
        let dictionary = ound_dictionary();
        let mut engine = DecisionEngine::new(&dictionary, DecisionConfig::default());
        let mut history = Vec::new();
        let mut previous = engine.candidates().len();

        for _ in 0..6 {
            let decision = engine.propose_guess(&history).unwrap();
            assert!(engine.candidates().len() <= previous);
            previous = engine.candidates().len();

            let t = turn(decision.word.text(), "wound");
            let won = t.1.is_win();
            history.push(t);
            if won {
                break;
            }
        }

        assert!(history.last().unwrap().1.is_win());
    }

    #[test]
    fn inconsistent_feedback_is_fatal() {
        let dictionary = ound_dictionary();
        let mut engine = DecisionEngine::new(&dictionary, DecisionConfig::default());
        let history = vec![(Word::new("zzzzz").unwrap(), FeedbackRow::WIN)];

        assert!(matches!(
            engine.propose_guess(&history),
            Err(SolverError::EmptyCandidateSet { .. })
        ));
    }

    #[test]
    fn rewound_history_is_rejected() {
        let dictionary = ound_dictionary();
        let mut engine = DecisionEngine::new(&dictionary, DecisionConfig::default());
        engine.propose_guess(&[turn("found", "sound")]).unwrap();

        assert_eq!(
            engine.propose_guess(&[]),
            Err(SolverError::HistoryRewound { applied: 1, got: 0 })
        );
    }

    #[test]
    fn engines_do_not_share_state() {
        let dictionary = ound_dictionary();
        let mut first = DecisionEngine::new(&dictionary, DecisionConfig::default());
        first.propose_guess(&[turn("found", "sound")]).unwrap();

        let mut second = DecisionEngine::new(&dictionary, DecisionConfig::default());
        assert_eq!(second.state(), &DecisionState::default());
        assert_eq!(second.propose_guess(&[]).unwrap().mode, DecisionMode::Opening);
        assert_eq!(second.candidates().len(), dictionary.len());
    }
}
