//! Word solving command
//!
//! Solves a specific target word and returns the solution path.

use crate::core::{Feedback, Word};
use crate::solver::{Filter, Phase, Solver, SolverError};

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: Word,
    pub solved: bool,
    pub steps: Vec<GuessStep>,
}

/// A single guess in the solution path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve `target` step by step, recording pool sizes around every guess
///
/// # Errors
/// Returns a `SolverError` if the pool runs dry or the filter rejects the
/// feedback. Hitting the attempt cap is reported through `solved: false`.
pub fn solve_word<F: Filter>(
    solver: &Solver<'_, F>,
    target: &Word,
) -> Result<SolveResult, SolverError> {
    let mut game = solver.new_game(target);
    let mut steps = Vec::new();
    let mut candidates_before = game.pool().len();

    loop {
        if let Phase::Filtering { guess, feedback } = game.step()? {
            log::debug!("{guess} -> {feedback} ({candidates_before} candidates)");
        }

        if let Some(record) = game.guesses().get(steps.len()) {
            steps.push(GuessStep {
                guess: record.guess.clone(),
                feedback: record.feedback,
                candidates_before,
                candidates_after: record.remaining,
            });
            candidates_before = record.remaining;
        }

        if game.phase().is_terminal() {
            break;
        }
    }

    Ok(SolveResult {
        target: target.clone(),
        solved: matches!(game.phase(), Phase::Solved),
        steps,
    })
}
