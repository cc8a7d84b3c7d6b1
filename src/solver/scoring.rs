//! Letter-frequency scoring of candidate words
//!
//! Two interchangeable heuristics rank a word list:
//! - Occurrence: how many words contain each of the word's distinct letters
//! - Positional: how many words share each of the word's letters at the same position

use super::CandidatePool;
use crate::core::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_index};
use std::fmt;
use std::str::FromStr;

/// Heuristic used to rank candidates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScoringMethod {
    /// Sum of global letter occurrence over distinct letters
    #[default]
    Occurrence,
    /// Sum of per-position letter frequency
    Positional,
}

impl ScoringMethod {
    /// Create a scoring method from its name ("occurrence" or "positional")
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "occurrence" | "occ" => Some(Self::Occurrence),
            "positional" | "position" | "pos" => Some(Self::Positional),
            _ => None,
        }
    }
}

impl fmt::Display for ScoringMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Occurrence => write!(f, "occurrence"),
            Self::Positional => write!(f, "positional"),
        }
    }
}

impl FromStr for ScoringMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("Unknown scoring method: {s}"))
    }
}

/// Number of words containing each letter at least once
#[must_use]
pub fn letter_occurrences(words: &[Word]) -> [u32; ALPHABET_SIZE] {
    let mut counts = [0u32; ALPHABET_SIZE];
    for word in words {
        for letter in word.distinct_letters() {
            counts[letter_index(letter)] += 1;
        }
    }
    counts
}

/// Letter × position frequency table
#[must_use]
pub fn positional_frequencies(words: &[Word]) -> [[u32; WORD_LENGTH]; ALPHABET_SIZE] {
    let mut table = [[0u32; WORD_LENGTH]; ALPHABET_SIZE];
    for word in words {
        for (position, &letter) in word.chars().iter().enumerate() {
            table[letter_index(letter)][position] += 1;
        }
    }
    table
}

/// Score every word of the list and rank them best-first
///
/// # Examples
/// ```
/// use wordle_greedy::core::Word;
/// use wordle_greedy::solver::{ScoringMethod, score_words};
///
/// let words: Vec<Word> = ["AAAAA", "BBBBB", "ABABA"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let pool = score_words(&words, ScoringMethod::Occurrence);
/// assert_eq!(pool.top().unwrap().text(), "ABABA");
/// ```
#[must_use]
pub fn score_words(words: &[Word], method: ScoringMethod) -> CandidatePool {
    let scored: Vec<(Word, u32)> = match method {
        ScoringMethod::Occurrence => {
            let occurrences = letter_occurrences(words);
            words
                .iter()
                .map(|word| {
                    let score = word
                        .distinct_letters()
                        .map(|letter| occurrences[letter_index(letter)])
                        .sum();
                    (word.clone(), score)
                })
                .collect()
        }
        ScoringMethod::Positional => {
            let table = positional_frequencies(words);
            words
                .iter()
                .map(|word| {
                    let score = word
                        .chars()
                        .iter()
                        .enumerate()
                        .map(|(position, &letter)| table[letter_index(letter)][position])
                        .sum();
                    (word.clone(), score)
                })
                .collect()
        }
    };

    CandidatePool::ranked(scored)
}

/// The highest-ranked word of a list, used to pick an opening guess offline
#[must_use]
pub fn best_opening(words: &[Word], method: ScoringMethod) -> Option<Word> {
    score_words(words, method).top().cloned()
}
