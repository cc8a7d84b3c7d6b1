//! Solver error kinds

use crate::core::{Feedback, Word};
use thiserror::Error;

/// Contract violations surfaced by the filters and the solve loop
///
/// Running out of attempts is not an error; it ends a game as
/// [`GameOutcome::Exhausted`](super::GameOutcome::Exhausted).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Two exact verdicts disagree about the letter at one position
    #[error("position {position} is already pinned to '{pinned}', feedback claims '{letter}'")]
    ConflictingExact {
        position: usize,
        pinned: char,
        letter: char,
    },
    /// Feedback contradicts letters already ruled in or out at a position
    #[error("feedback on '{letter}' at position {position} contradicts earlier feedback")]
    Inconsistent { position: usize, letter: char },
    /// The guess was never precomputed in the feedback tree
    #[error("guess {0} is not part of the precomputed tree")]
    GuessNotInTree(Word),
    /// No precomputed target produces this feedback for the guess
    #[error("no precomputed target gives feedback {feedback} for guess {guess}")]
    UnknownOutcome { guess: Word, feedback: Feedback },
    /// Every candidate has been pruned before the target was found
    #[error("no possible words remain")]
    NoCandidates,
    /// The game already reached a terminal phase
    #[error("the game is already over")]
    GameOver,
}
