//! Greedy Wordle solving
//!
//! Scoring ranks the candidate pool, a filter prunes it after every guess and
//! the engine drives the loop until the target is found.

mod engine;
mod error;
mod filter;
mod letters;
mod pool;
mod scoring;
mod tree;

pub use engine::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_OPENING, FilterType, Game, GameOutcome, GuessRecord, Phase,
    Solver, SolverConfig,
};
pub use error::SolverError;
pub use filter::{ConstraintFilter, Filter};
pub use letters::AdmissibleLetters;
pub use pool::CandidatePool;
pub use scoring::{
    ScoringMethod, best_opening, letter_occurrences, positional_frequencies, score_words,
};
pub use tree::{FeedbackTree, TreeFilter};
