//! Wordle Greedy
//!
//! A greedy Wordle solver: candidates are ranked by letter frequency and the pool
//! is pruned after every guess by propagating per-position letter constraints,
//! or by lookup in a precomputed guess/feedback tree.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_greedy::core::{Feedback, Word};
//! use wordle_greedy::solver::{FilterType, Solver, SolverConfig};
//!
//! let words: Vec<Word> = ["CRANE", "SLATE", "TRACE"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//!
//! let feedback = Feedback::evaluate(&words[0], &words[2]);
//! assert_eq!(feedback.to_string(), "yggwg");
//!
//! let solver = Solver::new(FilterType::constraint(), &words, SolverConfig::default());
//! let outcome = solver.play(&words[2]).unwrap();
//! assert!(outcome.is_solved());
//! assert_eq!(outcome.attempts(), 2);
//! ```

// Core domain types
pub mod core;

// Scoring, filtering and the game loop
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Clustering and Q-learning guesser
pub mod learning;
