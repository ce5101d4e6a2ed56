//! Candidate filtering
//!
//! Turns one (guess, feedback) row into a predicate per position and keeps
//! the candidates that satisfy all of them.

use crate::core::{FeedbackColor, FeedbackRow, WORD_LEN, Word};
use rustc_hash::FxHashMap;

/// What one position of a feedback row says about the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterConstraint {
    /// `letter` is at `position`
    Fixed { position: usize, letter: char },
    /// `letter` is not at `position` and occurs at least `min` times
    Elsewhere {
        position: usize,
        letter: char,
        min: usize,
    },
    /// `letter` is not at `position` and occurs exactly `count` times
    Exactly {
        position: usize,
        letter: char,
        count: usize,
    },
}

impl LetterConstraint {
    /// Check whether `word` satisfies this constraint
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        match *self {
            Self::Fixed { position, letter } => word.letter_at(position) == letter,
            Self::Elsewhere {
                position,
                letter,
                min,
            } => word.letter_at(position) != letter && word.count(letter) >= min,
            Self::Exactly {
                position,
                letter,
                count,
            } => word.letter_at(position) != letter && word.count(letter) == count,
        }
    }
}

/// Derive the per-position constraints from one guess and its feedback
///
/// For every letter of the guess, the number of positions where it was marked
/// correct or present is its non-absent count. A present letter must occur at
/// least that many times; an absent letter exactly that many times (zero when
/// the letter never scored).
#[must_use]
pub fn constraints(guess: &Word, feedback: &FeedbackRow) -> [LetterConstraint; WORD_LEN] {
    let mut non_absent: FxHashMap<char, usize> = FxHashMap::default();
    for (&letter, &color) in guess.letters().iter().zip(feedback.colors()) {
        let count = non_absent.entry(letter).or_insert(0);
        if color != FeedbackColor::Absent {
            *count += 1;
        }
    }

    std::array::from_fn(|position| {
        let letter = guess.letter_at(position);
        let scored = non_absent[&letter];
        match feedback.color_at(position) {
            FeedbackColor::Correct => LetterConstraint::Fixed { position, letter },
            FeedbackColor::Present => LetterConstraint::Elsewhere {
                position,
                letter,
                min: scored,
            },
            FeedbackColor::Absent => LetterConstraint::Exactly {
                position,
                letter,
                count: scored,
            },
        }
    })
}

/// Keep the candidates consistent with `feedback` for `guess`
///
/// Order is preserved. The result never grows, and filtering again with the
/// same row changes nothing.
///
/// # Examples
/// ```
/// use wordle_heuristic::core::{FeedbackRow, Word};
/// use wordle_heuristic::solver::filter_candidates;
///
/// let words: Vec<Word> = ["crane", "trace", "slate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let refs: Vec<&Word> = words.iter().collect();
///
/// let guess = Word::new("crane").unwrap();
/// let feedback = FeedbackRow::evaluate(&guess, &words[1]);
///
/// let remaining = filter_candidates(&refs, &guess, &feedback);
/// assert_eq!(remaining, vec![&words[1]]);
/// ```
#[must_use]
pub fn filter_candidates<'a>(
    candidates: &[&'a Word],
    guess: &Word,
    feedback: &FeedbackRow,
) -> Vec<&'a Word> {
    let constraints = constraints(guess, feedback);

    candidates
        .iter()
        .copied()
        .filter(|word| constraints.iter().all(|c| c.admits(word)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use proptest::prelude::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn texts(words: &[&Word]) -> Vec<String> {
        words.iter().map(|w| w.text().to_string()).collect()
    }

    #[test]
    fn constraints_from_mixed_duplicate_letter() {
        // SPEED vs ABIDE: first E present, second E absent
        let guess = word("speed");
        let feedback = FeedbackRow::evaluate(&guess, &word("abide"));
        let constraints = constraints(&guess, &feedback);

        assert_eq!(
            constraints[2],
            LetterConstraint::Elsewhere {
                position: 2,
                letter: 'E',
                min: 1
            }
        );
        assert_eq!(
            constraints[3],
            LetterConstraint::Exactly {
                position: 3,
                letter: 'E',
                count: 1
            }
        );
        assert_eq!(
            constraints[0],
            LetterConstraint::Exactly {
                position: 0,
                letter: 'S',
                count: 0
            }
        );
    }

    #[test]
    fn absent_duplicate_caps_letter_count() {
        let words = words_from_slice(&["abide", "elide", "diode", "sided"]);
        let refs: Vec<&Word> = words.iter().collect();

        let guess = word("speed");
        let feedback = FeedbackRow::evaluate(&guess, &word("abide"));
        let remaining = filter_candidates(&refs, &guess, &feedback);

        // ELIDE has two E's, SIDED has an S
        assert_eq!(texts(&remaining), ["ABIDE", "DIODE"]);
    }

    #[test]
    fn crane_feedback_keeps_trace() {
        let words = words_from_slice(&["crane", "slate", "trace", "brace", "react", "grace"]);
        let refs: Vec<&Word> = words.iter().collect();

        let guess = word("crane");
        let feedback = FeedbackRow::evaluate(&guess, &word("trace"));
        let remaining = filter_candidates(&refs, &guess, &feedback);

        // Needs _RA_E with a C somewhere other than position 0 and no N
        assert_eq!(texts(&remaining), ["TRACE", "BRACE", "GRACE"]);
        assert!(remaining.contains(&&words[2]));
    }

    #[test]
    fn correct_feedback_leaves_only_the_guess() {
        let words = words_from_slice(&["crane", "slate", "trace"]);
        let refs: Vec<&Word> = words.iter().collect();

        let remaining = filter_candidates(&refs, &words[1], &FeedbackRow::WIN);
        assert_eq!(texts(&remaining), ["SLATE"]);
    }

    #[test]
    fn inconsistent_feedback_empties_the_set() {
        let words = words_from_slice(&["crane", "slate", "trace"]);
        let refs: Vec<&Word> = words.iter().collect();

        let remaining = filter_candidates(&refs, &word("zzzzz"), &FeedbackRow::WIN);
        assert!(remaining.is_empty());
    }

    proptest! {
        #[test]
        fn filtering_is_sound_monotone_and_idempotent(
            pool in prop::collection::vec("[A-E]{5}", 1..40),
            guess in "[A-E]{5}",
            secret_index in any::<prop::sample::Index>(),
        ) {
            let words: Vec<Word> = pool.iter().map(|w| Word::new(w).unwrap()).collect();
            let refs: Vec<&Word> = words.iter().collect();
            let secret = &words[secret_index.index(words.len())];
            let guess = Word::new(&guess).unwrap();
            let feedback = FeedbackRow::evaluate(&guess, secret);

            let once = filter_candidates(&refs, &guess, &feedback);
            prop_assert!(once.len() <= refs.len());
            prop_assert!(once.contains(&secret));

            let twice = filter_candidates(&once, &guess, &feedback);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn survivors_reproduce_the_feedback(
            pool in prop::collection::vec("[A-E]{5}", 1..40),
            guess in "[A-E]{5}",
            secret in "[A-E]{5}",
        ) {
            let words: Vec<Word> = pool.iter().map(|w| Word::new(w).unwrap()).collect();
            let refs: Vec<&Word> = words.iter().collect();
            let guess = Word::new(&guess).unwrap();
            let feedback = FeedbackRow::evaluate(&guess, &Word::new(&secret).unwrap());

            for survivor in filter_candidates(&refs, &guess, &feedback) {
                prop_assert_eq!(FeedbackRow::evaluate(&guess, survivor), feedback);
            }
        }
    }
}
