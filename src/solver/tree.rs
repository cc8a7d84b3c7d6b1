//! Precomputed guess/feedback tree
//!
//! For a fixed word list, evaluates every guess against every other word once and
//! groups the targets by the feedback they produce. Pruning after a guess is then
//! a single bucket lookup instead of re-deriving letter constraints.
//!
//! Building costs O(n²) evaluations and memory, so the tree is built once and
//! shared read-only across games.

use super::{AdmissibleLetters, CandidatePool, Filter, SolverError};
use crate::core::{Feedback, Word};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

type Buckets = FxHashMap<Feedback, Vec<Word>>;

/// Mapping guess → feedback → words consistent with that outcome
#[derive(Debug, Clone, Default)]
pub struct FeedbackTree {
    buckets: FxHashMap<Word, Buckets>,
}

impl FeedbackTree {
    /// Precompute the tree for a word list
    ///
    /// A word is never bucketed under itself; buckets keep list order.
    ///
    /// # Examples
    /// ```
    /// use wordle_greedy::core::{Feedback, Word};
    /// use wordle_greedy::solver::FeedbackTree;
    ///
    /// let words: Vec<Word> = ["CRANE", "SLATE", "TRACE"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let tree = FeedbackTree::build(&words);
    ///
    /// let feedback = Feedback::evaluate(&words[0], &words[2]);
    /// assert_eq!(tree.bucket(&words[0], feedback).unwrap(), &words[2..]);
    /// ```
    #[must_use]
    pub fn build(words: &[Word]) -> Self {
        let buckets: FxHashMap<Word, Buckets> = words
            .par_iter()
            .map(|guess| {
                let mut by_feedback = Buckets::default();
                for target in words.iter().filter(|&target| target != guess) {
                    by_feedback
                        .entry(Feedback::evaluate(guess, target))
                        .or_default()
                        .push(target.clone());
                }
                (guess.clone(), by_feedback)
            })
            .collect();

        log::debug!(
            "built feedback tree over {} words ({} buckets)",
            buckets.len(),
            buckets.values().map(FxHashMap::len).sum::<usize>()
        );
        Self { buckets }
    }

    /// Number of guesses in the tree
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    #[must_use]
    pub fn contains(&self, guess: &Word) -> bool {
        self.buckets.contains_key(guess)
    }

    /// Words that produce `feedback` when `guess` is played against them
    ///
    /// # Errors
    /// - `GuessNotInTree` if the guess was not part of the precomputed list
    /// - `UnknownOutcome` if no precomputed word produces that feedback
    pub fn bucket(&self, guess: &Word, feedback: Feedback) -> Result<&[Word], SolverError> {
        let by_feedback = self
            .buckets
            .get(guess)
            .ok_or_else(|| SolverError::GuessNotInTree(guess.clone()))?;

        by_feedback
            .get(&feedback)
            .map(Vec::as_slice)
            .ok_or_else(|| SolverError::UnknownOutcome {
                guess: guess.clone(),
                feedback,
            })
    }

    /// Intersect `pool` with the bucket for `(guess, feedback)`, keeping pool order
    ///
    /// # Errors
    /// Same as [`FeedbackTree::bucket`].
    pub fn apply(
        &self,
        pool: &CandidatePool,
        guess: &Word,
        feedback: Feedback,
    ) -> Result<CandidatePool, SolverError> {
        let bucket: FxHashSet<&Word> = self.bucket(guess, feedback)?.iter().collect();
        Ok(pool.retain(|word| bucket.contains(word)))
    }
}

/// Adapts a shared [`FeedbackTree`] to the [`Filter`] trait
///
/// The letter state is passed through unchanged.
#[derive(Debug, Clone, Copy)]
pub struct TreeFilter<'a> {
    tree: &'a FeedbackTree,
}

impl<'a> TreeFilter<'a> {
    #[must_use]
    pub const fn new(tree: &'a FeedbackTree) -> Self {
        Self { tree }
    }
}

impl Filter for TreeFilter<'_> {
    fn apply(
        &self,
        pool: &CandidatePool,
        letters: &AdmissibleLetters,
        guess: &Word,
        feedback: Feedback,
    ) -> Result<(CandidatePool, AdmissibleLetters), SolverError> {
        let pruned = self.tree.apply(pool, guess, feedback)?;
        log::debug!(
            "{guess} {feedback}: {} -> {} candidates (tree)",
            pool.len(),
            pruned.len()
        );
        Ok((pruned, *letters))
    }
}
