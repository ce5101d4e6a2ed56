//! Word scoring
//!
//! Two rankings:
//! - [`best`]: most distinct letters, then highest positional letter frequency
//! - [`best_distinct`]: the probe word covering the most untried letters
//!
//! Scoring runs in parallel; ties always go to the earliest word in the input
//! so results do not depend on thread scheduling.

use crate::core::{WORD_LEN, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::cmp::Reverse;
use std::collections::BTreeSet;

/// Per-position letter histograms over a list of words
#[derive(Debug, Clone, Default)]
pub struct PositionalFrequencies {
    counts: [FxHashMap<char, usize>; WORD_LEN],
}

impl PositionalFrequencies {
    /// Count, for each position, how often each letter occurs there
    #[must_use]
    pub fn from_words<W: AsRef<Word>>(words: &[W]) -> Self {
        let mut frequencies = Self::default();
        for word in words {
            for (position, &letter) in word.as_ref().letters().iter().enumerate() {
                *frequencies.counts[position].entry(letter).or_insert(0) += 1;
            }
        }
        frequencies
    }

    /// Number of words with `letter` at `position`
    #[must_use]
    pub fn get(&self, position: usize, letter: char) -> usize {
        self.counts[position].get(&letter).copied().unwrap_or(0)
    }

    /// Sum of the frequencies of the word's letters at their positions
    #[must_use]
    pub fn score(&self, word: &Word) -> usize {
        word.letters()
            .iter()
            .enumerate()
            .map(|(position, &letter)| self.get(position, letter))
            .sum()
    }
}

/// Select the best word to guess from `words`
///
/// Key, highest first: number of distinct letters, then positional frequency
/// score computed over `words` itself. Returns `None` for an empty input.
///
/// # Examples
/// ```
/// use wordle_heuristic::core::Word;
/// use wordle_heuristic::solver::scorer::best;
///
/// let words: Vec<Word> = ["sassy", "salty", "sadly"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// // SASSY repeats S; SALTY and SADLY tie on frequency, SALTY comes first
/// assert_eq!(best(&words).unwrap().text(), "SALTY");
/// ```
#[must_use]
pub fn best<W: AsRef<Word> + Sync>(words: &[W]) -> Option<&W> {
    let frequencies = PositionalFrequencies::from_words(words);

    words
        .par_iter()
        .enumerate()
        .max_by_key(|&(index, word)| {
            let word = word.as_ref();
            (
                word.distinct_letters(),
                frequencies.score(word),
                Reverse(index),
            )
        })
        .map(|(_, word)| word)
}

/// Score of a probe candidate; compared lexicographically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DistinctScore {
    /// Coverage of untried letters, rewarding more copies than the last guess
    pub untried_coverage: isize,
    /// Untried letters sitting on red positions
    pub red_hits: usize,
    /// Number of different letters
    pub distinct: usize,
}

impl DistinctScore {
    /// Score `word` as a probe following `last_word`
    #[must_use]
    pub fn of(
        word: &Word,
        last_word: &Word,
        red_positions: &[usize],
        untried_letters: &BTreeSet<char>,
    ) -> Self {
        let untried_coverage = untried_letters
            .iter()
            .map(|&letter| {
                if last_word.contains(letter) {
                    word.count(letter) as isize - last_word.count(letter) as isize
                } else {
                    isize::from(word.contains(letter))
                }
            })
            .sum();

        let red_hits = red_positions
            .iter()
            .filter(|&&position| untried_letters.contains(&word.letter_at(position)))
            .count();

        Self {
            untried_coverage,
            red_hits,
            distinct: word.distinct_letters(),
        }
    }
}

/// Select the probe word from the whole dictionary
///
/// Unlike [`best`], this deliberately looks outside the candidate set: the
/// aim is to test as many untried letters as possible in one guess.
/// Returns `None` for an empty dictionary.
#[must_use]
pub fn best_distinct<'a>(
    last_word: &Word,
    red_positions: &[usize],
    untried_letters: &BTreeSet<char>,
    dictionary: &'a [Word],
) -> Option<&'a Word> {
    dictionary
        .par_iter()
        .enumerate()
        .max_by_key(|&(index, word)| {
            (
                DistinctScore::of(word, last_word, red_positions, untried_letters),
                Reverse(index),
            )
        })
        .map(|(_, word)| word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn letters(s: &str) -> BTreeSet<char> {
        s.chars().collect()
    }

    #[test]
    fn frequencies_count_per_position() {
        let words = words_from_slice(&["crane", "crate", "slate"]);
        let frequencies = PositionalFrequencies::from_words(&words);

        assert_eq!(frequencies.get(0, 'C'), 2);
        assert_eq!(frequencies.get(0, 'S'), 1);
        assert_eq!(frequencies.get(4, 'E'), 3);
        assert_eq!(frequencies.get(2, 'Z'), 0);

        // C2 + R2 + A3 + T2 + E3
        assert_eq!(frequencies.score(&word("crate")), 12);
    }

    #[test]
    fn best_prefers_distinct_letters_over_frequency() {
        let words = words_from_slice(&["aabcd", "efghi", "aabce"]);

        // AABCD and AABCE score 9 on frequency but repeat A
        assert_eq!(best(&words).unwrap().text(), "EFGHI");
    }

    #[test]
    fn best_uses_frequency_between_equally_distinct_words() {
        let words = words_from_slice(&["crane", "crate", "slate", "grate"]);

        // CRATE: C2 R3 A4 T3 E4 = 16 beats GRATE (15) and CRANE (14)
        assert_eq!(best(&words).unwrap().text(), "CRATE");
    }

    #[test]
    fn best_breaks_ties_by_input_order() {
        let words = words_from_slice(&["abcde", "fghij", "klmno"]);
        assert_eq!(best(&words).unwrap().text(), "ABCDE");

        let reversed = words_from_slice(&["klmno", "fghij", "abcde"]);
        assert_eq!(best(&reversed).unwrap().text(), "KLMNO");
    }

    #[test]
    fn best_accepts_references() {
        let words = words_from_slice(&["crane", "crate"]);
        let refs: Vec<&Word> = words.iter().collect();
        assert_eq!(best(&refs).map(|w| w.text()), Some("CRANE"));
    }

    #[test]
    fn best_of_nothing() {
        let words: Vec<Word> = Vec::new();
        assert!(best(&words).is_none());
    }

    #[test]
    fn distinct_score_new_letters() {
        let untried = letters("BHMPRSW");
        let score = DistinctScore::of(&word("brash"), &word("found"), &[0], &untried);

        assert_eq!(
            score,
            DistinctScore {
                untried_coverage: 4,
                red_hits: 1,
                distinct: 5
            }
        );
    }

    #[test]
    fn distinct_score_rewards_extra_copies_of_guessed_letters() {
        // T was already guessed once: three T's gain two, none loses one
        let untried = letters("T");
        let last = word("stage");

        let three = DistinctScore::of(&word("tatty"), &last, &[], &untried);
        let none = DistinctScore::of(&word("brick"), &last, &[], &untried);

        assert_eq!(three.untried_coverage, 2);
        assert_eq!(none.untried_coverage, -1);
    }

    #[test]
    fn best_distinct_maximizes_coverage() {
        let dictionary = words_from_slice(&["bound", "chomp", "brash", "whomp"]);
        let untried = letters("BHMPRSW");

        let probe = best_distinct(&word("found"), &[0], &untried, &dictionary).unwrap();

        // BRASH and WHOMP both cover 4 and hit position 0; BRASH comes first
        assert_eq!(probe.text(), "BRASH");
    }

    #[test]
    fn best_distinct_uses_red_positions_as_tiebreak() {
        let dictionary = words_from_slice(&["abxyz", "xyzab"]);
        let untried = letters("AB");

        let probe = best_distinct(&word("qqqqq"), &[3, 4], &untried, &dictionary).unwrap();
        assert_eq!(probe.text(), "XYZAB");
    }
}
