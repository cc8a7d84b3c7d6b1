//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_opening, print_simulation_summary, print_solve_result, print_training_report,
};
