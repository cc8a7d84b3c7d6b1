//! Core domain types for Wordle
//!
//! Words, per-letter verdicts and packed feedback. Everything here is pure:
//! no I/O, no shared state, no dependency on the solver.

mod feedback;
mod word;

pub use feedback::{Feedback, Verdict};
pub use word::{ALPHABET_SIZE, WORD_LENGTH, Word, WordError, letter_bit, letter_index};
