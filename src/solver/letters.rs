//! Admissible-letter state
//!
//! Per position, the set of letters not yet ruled out, stored as a 26-bit mask.
//! Starts as the full alphabet and only ever shrinks.

use super::SolverError;
use crate::core::{WORD_LENGTH, Word, letter_bit};
use std::fmt;

const FULL_ALPHABET: u32 = (1 << 26) - 1;

/// Letters still possible at each of the five positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdmissibleLetters {
    slots: [u32; WORD_LENGTH],
    pinned: [Option<u8>; WORD_LENGTH],
}

impl Default for AdmissibleLetters {
    fn default() -> Self {
        Self::new()
    }
}

impl AdmissibleLetters {
    /// Every letter allowed everywhere
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [FULL_ALPHABET; WORD_LENGTH],
            pinned: [None; WORD_LENGTH],
        }
    }

    /// Whether `letter` is still possible at `position`
    #[inline]
    #[must_use]
    pub const fn allows(&self, position: usize, letter: u8) -> bool {
        self.slots[position] & letter_bit(letter) != 0
    }

    /// Letter confirmed exact at `position`, if any
    #[inline]
    #[must_use]
    pub const fn pinned(&self, position: usize) -> Option<u8> {
        self.pinned[position]
    }

    /// Number of letters still possible at `position`
    #[must_use]
    pub const fn count(&self, position: usize) -> u32 {
        self.slots[position].count_ones()
    }

    /// Letters still possible at `position`, alphabetical
    pub fn letters_at(&self, position: usize) -> impl Iterator<Item = u8> + '_ {
        (b'A'..=b'Z').filter(move |&letter| self.allows(position, letter))
    }

    /// Whether every letter of `word` is admissible at its position
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        word.chars()
            .iter()
            .enumerate()
            .all(|(position, &letter)| self.allows(position, letter))
    }

    /// Narrow `position` to the single letter `letter`
    ///
    /// # Errors
    /// - `ConflictingExact` if the position is already pinned to another letter
    /// - `Inconsistent` if `letter` was already ruled out at the position
    pub fn pin(&mut self, position: usize, letter: u8) -> Result<(), SolverError> {
        match self.pinned[position] {
            Some(existing) if existing == letter => return Ok(()),
            Some(existing) => {
                return Err(SolverError::ConflictingExact {
                    position,
                    pinned: existing as char,
                    letter: letter as char,
                });
            }
            None => {}
        }

        if !self.allows(position, letter) {
            return Err(SolverError::Inconsistent {
                position,
                letter: letter as char,
            });
        }

        self.slots[position] = letter_bit(letter);
        self.pinned[position] = Some(letter);
        Ok(())
    }

    /// Rule `letter` out at `position` only
    ///
    /// # Errors
    /// `Inconsistent` if the removal would leave the position without any letter,
    /// which only happens when `letter` is the one pinned there.
    pub fn exclude(&mut self, position: usize, letter: u8) -> Result<(), SolverError> {
        let remaining = self.slots[position] & !letter_bit(letter);
        if remaining == 0 {
            return Err(SolverError::Inconsistent {
                position,
                letter: letter as char,
            });
        }
        self.slots[position] = remaining;
        Ok(())
    }
}

impl fmt::Display for AdmissibleLetters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for position in 0..WORD_LENGTH {
            if position > 0 {
                write!(f, " ")?;
            }
            match self.pinned[position] {
                Some(letter) => write!(f, "[{}]", letter as char)?,
                None => write!(f, "{}", self.count(position))?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_full_alphabet() {
        let letters = AdmissibleLetters::new();
        for position in 0..WORD_LENGTH {
            assert_eq!(letters.count(position), 26);
            assert!(letters.allows(position, b'A'));
            assert!(letters.allows(position, b'Z'));
            assert_eq!(letters.pinned(position), None);
        }
    }

    #[test]
    fn pin_narrows_to_one_letter() {
        let mut letters = AdmissibleLetters::new();
        letters.pin(2, b'A').unwrap();

        assert_eq!(letters.count(2), 1);
        assert_eq!(letters.pinned(2), Some(b'A'));
        assert_eq!(letters.letters_at(2).collect::<Vec<_>>(), b"A");
        assert_eq!(letters.count(1), 26);
    }

    #[test]
    fn repinning_same_letter_is_fine() {
        let mut letters = AdmissibleLetters::new();
        letters.pin(0, b'C').unwrap();
        assert_eq!(letters.pin(0, b'C'), Ok(()));
    }

    #[test]
    fn conflicting_pin_is_rejected() {
        let mut letters = AdmissibleLetters::new();
        letters.pin(0, b'C').unwrap();

        assert_eq!(
            letters.pin(0, b'T'),
            Err(SolverError::ConflictingExact {
                position: 0,
                pinned: 'C',
                letter: 'T'
            })
        );
        assert_eq!(letters.pinned(0), Some(b'C'));
    }

    #[test]
    fn pinning_excluded_letter_is_rejected() {
        let mut letters = AdmissibleLetters::new();
        letters.exclude(3, b'S').unwrap();

        assert_eq!(
            letters.pin(3, b'S'),
            Err(SolverError::Inconsistent {
                position: 3,
                letter: 'S'
            })
        );
    }

    #[test]
    fn exclude_is_position_scoped() {
        let mut letters = AdmissibleLetters::new();
        letters.exclude(1, b'R').unwrap();

        assert!(!letters.allows(1, b'R'));
        assert!(letters.allows(0, b'R'));
        assert_eq!(letters.count(1), 25);
    }

    #[test]
    fn excluding_pinned_letter_would_empty_slot() {
        let mut letters = AdmissibleLetters::new();
        letters.pin(4, b'E').unwrap();

        assert!(letters.exclude(4, b'E').is_err());
        assert!(letters.allows(4, b'E'));
        // Excluding some other letter from a pinned slot is a no-op
        assert_eq!(letters.exclude(4, b'Z'), Ok(()));
        assert_eq!(letters.count(4), 1);
    }

    #[test]
    fn admits_checks_every_position() {
        let mut letters = AdmissibleLetters::new();
        letters.pin(1, b'R').unwrap();
        letters.exclude(0, b'C').unwrap();

        assert!(letters.admits(&Word::new("trace").unwrap()));
        assert!(!letters.admits(&Word::new("crane").unwrap()));
        assert!(!letters.admits(&Word::new("slate").unwrap()));
    }

    #[test]
    fn display_summarises_slots() {
        let mut letters = AdmissibleLetters::new();
        letters.pin(1, b'R').unwrap();
        letters.exclude(0, b'C').unwrap();
        assert_eq!(letters.to_string(), "25 [R] 26 26 26");
    }
}
