//! Command implementations

pub mod simulate;
pub mod solve;
pub mod train;

pub use simulate::{SimulationConfig, SimulationSummary, TrialResult, run_simulations};
pub use solve::{GuessStep, SolveResult, solve_word};
pub use train::run_training;
