//! Wordle feedback evaluation and representation
//!
//! Feedback is stored packed in base-3:
//! - 0 = Absent (letter not in word, or all its occurrences already accounted for)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Exact (letter in correct position)
//!
//! The packed value is a single u8 (0-242), where each position contributes
//! digit × 3^position to the total.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Verdict for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Absent,
    Present,
    Exact,
}

impl Verdict {
    /// Base-3 digit used in the packed encoding
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Exact => 2,
        }
    }

    #[inline]
    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Exact,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Display symbol: `g` (exact), `y` (present), `w` (absent)
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => 'g',
            Self::Present => 'y',
            Self::Absent => 'w',
        }
    }

    /// Parse a display symbol
    ///
    /// Accepts `g`/`y`/`w` in either case, plus `-`/`_` for absent.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'g' | 'G' => Some(Self::Exact),
            'y' | 'Y' => Some(Self::Present),
            'w' | 'W' | '-' | '_' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback for a whole guess
///
/// Five verdicts packed into one byte. Value range: 0-242 (3^5 = 243 outcomes),
/// which makes it a cheap map key for the precomputed tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback(u8);

impl Feedback {
    /// All exact (guess equals target)
    pub const SOLVED: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Number of distinct feedback values
    pub const COUNT: usize = 243;

    /// Create feedback from a raw packed value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Feedback value must be < 243");
        Self(value)
    }

    /// Get the raw packed value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if every letter is exact
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.0 == Self::SOLVED.0
    }

    /// Pack five verdicts
    #[must_use]
    pub fn from_verdicts(verdicts: [Verdict; WORD_LENGTH]) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for verdict in verdicts {
            value += verdict.digit() * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(value)
    }

    /// Verdict at a position (0-4)
    #[must_use]
    pub fn verdict(self, position: usize) -> Verdict {
        debug_assert!(position < WORD_LENGTH);
        let divisor = 3u8.pow(position as u32);
        Verdict::from_digit((self.0 / divisor) % 3)
    }

    /// Unpack into five verdicts
    #[must_use]
    pub fn verdicts(self) -> [Verdict; WORD_LENGTH] {
        let mut verdicts = [Verdict::Absent; WORD_LENGTH];
        let mut val = self.0;
        for verdict in &mut verdicts {
            *verdict = Verdict::from_digit(val % 3);
            val /= 3;
        }
        verdicts
    }

    /// Positions carrying the given verdict, in increasing order
    pub fn positions_of(self, wanted: Verdict) -> impl Iterator<Item = usize> {
        self.verdicts()
            .into_iter()
            .enumerate()
            .filter_map(move |(i, verdict)| (verdict == wanted).then_some(i))
    }

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// This implements Wordle's feedback rules, including duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark every exact match and consume that target position
    /// 2. Second pass: for each remaining guess letter, scan target positions
    ///    left to right and take the first unconsumed equal letter as present
    ///
    /// The exact pass always completes before the present pass, so an exact match
    /// is never stolen by an earlier misplaced copy of the same letter.
    ///
    /// # Examples
    /// ```
    /// use wordle_greedy::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("trace").unwrap();
    ///
    /// // C(present) R(exact) A(exact) N(absent) E(exact)
    /// assert_eq!(Feedback::evaluate(&guess, &target).to_string(), "yggwg");
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let guess = guess.chars();
        let target = target.chars();
        let mut verdicts = [Verdict::Absent; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];

        // Index needed to touch guess, target, verdicts and consumed together
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == target[i] {
                verdicts[i] = Verdict::Exact;
                consumed[i] = true;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if verdicts[i] == Verdict::Exact {
                continue;
            }
            if let Some(j) = (0..WORD_LENGTH).find(|&j| !consumed[j] && target[j] == guess[i]) {
                verdicts[i] = Verdict::Present;
                consumed[j] = true;
            }
        }

        Self::from_verdicts(verdicts)
    }

    /// Count the number of exact verdicts
    #[must_use]
    pub fn count_exact(self) -> usize {
        self.positions_of(Verdict::Exact).count()
    }

    /// Count the number of present verdicts
    #[must_use]
    pub fn count_present(self) -> usize {
        self.positions_of(Verdict::Present).count()
    }

    /// Count the number of absent verdicts
    #[must_use]
    pub fn count_absent(self) -> usize {
        self.positions_of(Verdict::Absent).count()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in self.verdicts() {
            write!(f, "{}", verdict.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        let verdicts: [Verdict; WORD_LENGTH] = chars
            .iter()
            .map(|&ch| Verdict::from_symbol(ch))
            .collect::<Option<Vec<_>>>()
            .and_then(|v| v.try_into().ok())
            .ok_or_else(|| format!("Invalid feedback string: {s}"))?;
        Ok(Self::from_verdicts(verdicts))
    }
}
