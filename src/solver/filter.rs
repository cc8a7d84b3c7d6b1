//! Constraint-propagation filtering of the candidate pool
//!
//! Feedback is applied in three passes (exact, present, absent). The later
//! passes read the letter state already narrowed by the earlier ones, and every
//! exclusion is scoped to a single position: a letter marked absent at one slot
//! may still be exact at another, which the evaluator has already encoded.

use super::{AdmissibleLetters, CandidatePool, SolverError};
use crate::core::{Feedback, Verdict, Word};

/// A pruning strategy applied after every guess
pub trait Filter {
    /// Prune `pool` with the feedback received for `guess`
    ///
    /// Returns the new pool and letter state; the inputs are left untouched.
    ///
    /// # Errors
    /// Returns a `SolverError` when the feedback contradicts earlier feedback or
    /// cannot be looked up by the strategy.
    fn apply(
        &self,
        pool: &CandidatePool,
        letters: &AdmissibleLetters,
        guess: &Word,
        feedback: Feedback,
    ) -> Result<(CandidatePool, AdmissibleLetters), SolverError>;
}

/// Filter that narrows per-position admissible letters
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintFilter;

impl ConstraintFilter {
    /// Exact rule
    ///
    /// Removes the guess itself, pins every exact position and drops each word
    /// that disagrees with one of the pinned letters.
    ///
    /// # Errors
    /// `ConflictingExact` or `Inconsistent` when a pin contradicts the letter state.
    pub fn apply_exact(
        pool: &CandidatePool,
        letters: &mut AdmissibleLetters,
        guess: &Word,
        feedback: Feedback,
    ) -> Result<CandidatePool, SolverError> {
        let positions: Vec<usize> = feedback.positions_of(Verdict::Exact).collect();
        for &i in &positions {
            letters.pin(i, guess.char_at(i))?;
        }

        Ok(pool.retain(|word| {
            word != guess
                && positions
                    .iter()
                    .all(|&i| word.char_at(i) == guess.char_at(i))
        }))
    }

    /// Present rule
    ///
    /// Rules the letter out at its position and drops words that either lack the
    /// letter or hold it at that position.
    ///
    /// # Errors
    /// `Inconsistent` when the letter is the one pinned at that position.
    pub fn apply_present(
        pool: &CandidatePool,
        letters: &mut AdmissibleLetters,
        guess: &Word,
        feedback: Feedback,
    ) -> Result<CandidatePool, SolverError> {
        let positions: Vec<usize> = feedback.positions_of(Verdict::Present).collect();
        for &i in &positions {
            letters.exclude(i, guess.char_at(i))?;
        }

        let letters = *letters;
        Ok(pool.retain(|word| {
            positions.iter().all(|&i| {
                let letter = guess.char_at(i);
                word.has_letter(letter) && letters.allows(i, word.char_at(i))
            })
        }))
    }

    /// Absent rule
    ///
    /// Rules the guessed letter out at its own position only, then drops words
    /// whose letter at that position is no longer admissible.
    ///
    /// # Errors
    /// `Inconsistent` when the letter is the one pinned at that position.
    pub fn apply_absent(
        pool: &CandidatePool,
        letters: &mut AdmissibleLetters,
        guess: &Word,
        feedback: Feedback,
    ) -> Result<CandidatePool, SolverError> {
        let positions: Vec<usize> = feedback.positions_of(Verdict::Absent).collect();
        for &i in &positions {
            letters.exclude(i, guess.char_at(i))?;
        }

        let letters = *letters;
        Ok(pool.retain(|word| {
            positions
                .iter()
                .all(|&i| letters.allows(i, word.char_at(i)))
        }))
    }
}

impl Filter for ConstraintFilter {
    fn apply(
        &self,
        pool: &CandidatePool,
        letters: &AdmissibleLetters,
        guess: &Word,
        feedback: Feedback,
    ) -> Result<(CandidatePool, AdmissibleLetters), SolverError> {
        let mut letters = *letters;
        let before = pool.len();

        let pool = Self::apply_exact(pool, &mut letters, guess, feedback)?;
        let pool = Self::apply_present(&pool, &mut letters, guess, feedback)?;
        let pool = Self::apply_absent(&pool, &mut letters, guess, feedback)?;

        log::debug!(
            "{guess} {feedback}: {before} -> {} candidates, letters {letters}",
            pool.len()
        );
        Ok((pool, letters))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{ScoringMethod, score_words};
    use crate::wordlists::GOAL_WORDS;
    use crate::wordlists::loader::words_from_slice;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn filter_once(pool: &CandidatePool, guess: &Word, target: &Word) -> CandidatePool {
        let feedback = Feedback::evaluate(guess, target);
        ConstraintFilter
            .apply(pool, &AdmissibleLetters::new(), guess, feedback)
            .unwrap()
            .0
    }

    #[test]
    fn crane_against_trace_scenario() {
        let list = words(&["CRANE", "SLATE", "TRACE"]);
        let pool = score_words(&list, ScoringMethod::Occurrence);
        let guess = word("CRANE");
        let feedback = Feedback::evaluate(&guess, &word("TRACE"));

        assert_eq!(feedback.to_string(), "yggwg");

        let (pruned, letters) = ConstraintFilter
            .apply(&pool, &AdmissibleLetters::new(), &guess, feedback)
            .unwrap();

        let remaining: Vec<&str> = pruned.words().map(Word::text).collect();
        assert_eq!(remaining, ["TRACE"]);
        assert_eq!(letters.pinned(1), Some(b'R'));
        assert_eq!(letters.pinned(2), Some(b'A'));
        assert_eq!(letters.pinned(4), Some(b'E'));
        assert!(!letters.allows(0, b'C'));
        assert!(!letters.allows(3, b'N'));
    }

    #[test]
    fn exact_rule_pins_and_removes_guess() {
        let pool = score_words(&words(&["CRANE", "TRACE", "GRACE", "SLATE"]), ScoringMethod::Occurrence);
        let mut letters = AdmissibleLetters::new();
        let guess = word("CRANE");
        let feedback: Feedback = "wggwg".parse().unwrap();

        let pruned = ConstraintFilter::apply_exact(&pool, &mut letters, &guess, feedback).unwrap();

        let mut remaining: Vec<&str> = pruned.words().map(Word::text).collect();
        remaining.sort_unstable();
        assert_eq!(remaining, ["GRACE", "TRACE"]);
        assert_eq!(letters.pinned(1), Some(b'R'));
    }

    #[test]
    fn present_rule_requires_letter_elsewhere() {
        let pool = score_words(&words(&["TRACE", "SLATE", "CLOTH", "BUMPY"]), ScoringMethod::Occurrence);
        let mut letters = AdmissibleLetters::new();
        let guess = word("CHIPS");
        // C present at position 0 only
        let feedback: Feedback = "ywwww".parse().unwrap();

        let pruned = ConstraintFilter::apply_present(&pool, &mut letters, &guess, feedback).unwrap();

        // CLOTH holds C at the forbidden slot, SLATE and BUMPY lack C
        let remaining: Vec<&str> = pruned.words().map(Word::text).collect();
        assert_eq!(remaining, ["TRACE"]);
        assert!(!letters.allows(0, b'C'));
    }

    #[test]
    fn absent_rule_is_position_scoped() {
        // SPEED against ERASE: P and D absent, the E's and S present
        let pool = score_words(&words(&["ERASE", "DRAPE", "SPADE"]), ScoringMethod::Occurrence);
        let mut letters = AdmissibleLetters::new();
        let guess = word("SPEED");
        let feedback = Feedback::evaluate(&guess, &word("ERASE"));

        let pruned = ConstraintFilter::apply_absent(&pool, &mut letters, &guess, feedback).unwrap();

        // SPADE has P at slot 1 and is dropped; DRAPE keeps D and P elsewhere
        let remaining: Vec<&str> = pruned.words().map(Word::text).collect();
        assert!(remaining.contains(&"ERASE"));
        assert!(remaining.contains(&"DRAPE"));
        assert!(!remaining.contains(&"SPADE"));
        assert!(!letters.allows(1, b'P'));
        assert!(letters.allows(0, b'P'));
    }

    #[test]
    fn absent_duplicate_does_not_exclude_letter_globally() {
        // ALLOT against DOLLY: first L present, second L exact, T absent
        let pool = score_words(&words(&["DOLLY", "TALLY"]), ScoringMethod::Occurrence);
        let guess = word("ALLOT");
        let target = word("DOLLY");

        let pruned = filter_once(&pool, &guess, &target);
        assert!(pruned.contains(&target));
    }

    #[test]
    fn conflicting_exact_feedback_is_an_error() {
        let pool = score_words(&words(&["TRACE", "GRACE"]), ScoringMethod::Occurrence);
        let letters = AdmissibleLetters::new();

        let (pool, letters) = ConstraintFilter
            .apply(&pool, &letters, &word("CRANE"), "wggwg".parse().unwrap())
            .unwrap();

        // Claim a different exact letter at position 1
        let result = ConstraintFilter.apply(&pool, &letters, &word("GLOBE"), "wgwwg".parse().unwrap());
        assert_eq!(
            result,
            Err(SolverError::ConflictingExact {
                position: 1,
                pinned: 'R',
                letter: 'L'
            })
        );
    }

    #[test]
    fn absent_on_pinned_letter_is_an_error() {
        let pool = score_words(&words(&["TRACE"]), ScoringMethod::Occurrence);
        let (pool, letters) = ConstraintFilter
            .apply(&pool, &AdmissibleLetters::new(), &word("CRANE"), "wggwg".parse().unwrap())
            .unwrap();

        let result = ConstraintFilter.apply(&pool, &letters, &word("DRONE"), "wwwwW".parse().unwrap());
        assert!(matches!(result, Err(SolverError::Inconsistent { position: 1, letter: 'R' })));
    }

    #[test]
    fn filter_never_drops_true_target() {
        let list = words_from_slice(GOAL_WORDS);
        let pool = score_words(&list, ScoringMethod::Occurrence);
        let guesses = words(&["CRANE", "SPEED", "ALLOT", "EERIE", "MAMMA"]);

        for target in list.iter().step_by(7) {
            for guess in &guesses {
                if guess == target {
                    continue;
                }
                let pruned = filter_once(&pool, guess, target);
                assert!(pruned.contains(target), "{guess} dropped {target}");
            }
        }
    }

    #[test]
    fn filter_keeps_target_over_several_guesses() {
        let list = words_from_slice(GOAL_WORDS);
        let mut pool = score_words(&list, ScoringMethod::Positional);
        let mut letters = AdmissibleLetters::new();
        let target = list[list.len() / 2].clone();

        for guess in words(&["ROATE", "CLINK", "SHUMP"]) {
            if guess == target {
                break;
            }
            let feedback = Feedback::evaluate(&guess, &target);
            (pool, letters) = ConstraintFilter.apply(&pool, &letters, &guess, feedback).unwrap();
            assert!(pool.contains(&target));
        }
    }

    #[test]
    fn reapplying_same_feedback_is_idempotent() {
        let list = words_from_slice(GOAL_WORDS);
        let pool = score_words(&list, ScoringMethod::Occurrence);
        let guess = word("CRANE");
        let target = list[3].clone();
        let feedback = Feedback::evaluate(&guess, &target);

        let (once, letters_once) = ConstraintFilter
            .apply(&pool, &AdmissibleLetters::new(), &guess, feedback)
            .unwrap();
        let (twice, letters_twice) = ConstraintFilter
            .apply(&once, &letters_once, &guess, feedback)
            .unwrap();

        assert_eq!(once, twice);
        assert_eq!(letters_once, letters_twice);
    }

    #[test]
    fn inputs_are_left_untouched() {
        let pool = score_words(&words(&["CRANE", "SLATE", "TRACE"]), ScoringMethod::Occurrence);
        let letters = AdmissibleLetters::new();
        let snapshot = pool.clone();

        let _ = ConstraintFilter
            .apply(&pool, &letters, &word("CRANE"), "yggwg".parse().unwrap())
            .unwrap();

        assert_eq!(pool, snapshot);
        assert_eq!(letters, AdmissibleLetters::new());
    }
}
