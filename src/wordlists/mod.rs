//! Word lists for Wordle solving
//!
//! Provides the default goal and accepted lists embedded in the binary, plus a
//! loader for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{ACCEPTED_WORDS, ACCEPTED_WORDS_COUNT, GOAL_WORDS, GOAL_WORDS_COUNT};
