//! Main Wordle solver interface
//!
//! A game moves through `Guessing -> Scoring -> Filtering` until every letter
//! comes back exact or the attempt cap is reached.

use super::{
    AdmissibleLetters, CandidatePool, ConstraintFilter, FeedbackTree, Filter, ScoringMethod,
    SolverError, TreeFilter, score_words,
};
use crate::core::{Feedback, Word};

/// Default opening guess
pub const DEFAULT_OPENING: &str = "CRANE";

/// Default attempt cap
pub const DEFAULT_MAX_ATTEMPTS: usize = 12;

/// Solver configuration
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Fixed first guess
    pub opening: Word,
    /// Heuristic used to rank the pool
    pub scoring: ScoringMethod,
    /// A game stops after this many guesses without solving
    pub max_attempts: usize,
}

impl SolverConfig {
    #[must_use]
    pub const fn new(opening: Word, scoring: ScoringMethod, max_attempts: usize) -> Self {
        Self {
            opening,
            scoring,
            max_attempts,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            opening: Word::new(DEFAULT_OPENING).expect("default opening is a valid word"),
            scoring: ScoringMethod::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Enum wrapper for the available filters
///
/// Allows runtime selection of the filter while maintaining static dispatch.
#[derive(Debug, Clone, Copy)]
pub enum FilterType<'a> {
    /// Per-position constraint propagation
    Constraint(ConstraintFilter),
    /// Bucket lookup in a precomputed tree
    Tree(TreeFilter<'a>),
}

impl<'a> FilterType<'a> {
    #[must_use]
    pub const fn constraint() -> Self {
        Self::Constraint(ConstraintFilter)
    }

    #[must_use]
    pub const fn tree(tree: &'a FeedbackTree) -> Self {
        Self::Tree(TreeFilter::new(tree))
    }
}

impl Filter for FilterType<'_> {
    fn apply(
        &self,
        pool: &CandidatePool,
        letters: &AdmissibleLetters,
        guess: &Word,
        feedback: Feedback,
    ) -> Result<(CandidatePool, AdmissibleLetters), SolverError> {
        match self {
            Self::Constraint(f) => f.apply(pool, letters, guess, feedback),
            Self::Tree(f) => f.apply(pool, letters, guess, feedback),
        }
    }
}

/// One played guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub feedback: Feedback,
    /// Pool size after filtering with this feedback (0 once solved)
    pub remaining: usize,
}

/// How a finished game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    /// The last guess was all exact
    Solved { guesses: Vec<GuessRecord> },
    /// The attempt cap was reached first
    Exhausted { guesses: Vec<GuessRecord> },
}

impl GameOutcome {
    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        match self {
            Self::Solved { guesses } | Self::Exhausted { guesses } => guesses,
        }
    }

    #[must_use]
    pub fn attempts(&self) -> usize {
        self.guesses().len()
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved { .. })
    }
}

/// Phase of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Ready to pick the next guess
    Guessing,
    /// A guess has been picked and awaits feedback
    Scoring { guess: Word },
    /// Feedback has been received and awaits filtering
    Filtering { guess: Word, feedback: Feedback },
    Solved,
    Exhausted,
}

impl Phase {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}

/// Main Wordle solver
///
/// Holds the guess list, the ranked pool derived from it and the filter. Each
/// game gets its own copy of the pool and a fresh letter state, so one solver
/// can drive many games, in parallel if needed.
pub struct Solver<'a, F: Filter> {
    filter: F,
    guess_words: &'a [Word],
    ranked: CandidatePool,
    config: SolverConfig,
}

impl<'a, F: Filter> Solver<'a, F> {
    /// Create a new solver
    ///
    /// # Parameters
    /// - `filter`: Pruning strategy applied after each guess
    /// - `guess_words`: Words the solver may guess; scored once up front
    /// - `config`: Opening word, scoring method and attempt cap
    #[must_use]
    pub fn new(filter: F, guess_words: &'a [Word], config: SolverConfig) -> Self {
        let ranked = score_words(guess_words, config.scoring);
        Self {
            filter,
            guess_words,
            ranked,
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[must_use]
    pub const fn guess_words(&self) -> &'a [Word] {
        self.guess_words
    }

    /// The ranked pool every game starts from
    #[must_use]
    pub const fn initial_pool(&self) -> &CandidatePool {
        &self.ranked
    }

    /// Start a game against a target known to the caller
    #[must_use]
    pub fn new_game<'s>(&'s self, target: &'s Word) -> Game<'s, 'a, F> {
        Game {
            solver: self,
            target,
            pool: self.ranked.clone(),
            letters: AdmissibleLetters::new(),
            guesses: Vec::new(),
            phase: Phase::Guessing,
        }
    }

    /// Play a full game against `target`
    ///
    /// # Errors
    /// Returns a `SolverError` if the pool runs dry before the target is found or
    /// the filter rejects the feedback.
    pub fn play(&self, target: &Word) -> Result<GameOutcome, SolverError> {
        self.new_game(target).play()
    }
}

/// A single game in progress
pub struct Game<'s, 'a, F: Filter> {
    solver: &'s Solver<'a, F>,
    target: &'s Word,
    pool: CandidatePool,
    letters: AdmissibleLetters,
    guesses: Vec<GuessRecord>,
    phase: Phase,
}

impl<F: Filter> Game<'_, '_, F> {
    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub const fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    #[must_use]
    pub const fn letters(&self) -> &AdmissibleLetters {
        &self.letters
    }

    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    /// Advance one transition and return the new phase
    ///
    /// # Errors
    /// - `GameOver` if the game already ended
    /// - `NoCandidates` if there is nothing left to guess
    /// - Any filter error
    pub fn step(&mut self) -> Result<&Phase, SolverError> {
        if self.phase.is_terminal() {
            return Err(SolverError::GameOver);
        }

        self.phase = match std::mem::replace(&mut self.phase, Phase::Guessing) {
            Phase::Guessing => {
                let guess = if self.guesses.is_empty() {
                    self.solver.config.opening.clone()
                } else {
                    self.pool.top().cloned().ok_or(SolverError::NoCandidates)?
                };
                Phase::Scoring { guess }
            }
            Phase::Scoring { guess } => {
                let feedback = Feedback::evaluate(&guess, self.target);
                Phase::Filtering { guess, feedback }
            }
            Phase::Filtering { guess, feedback } => self.filter(guess, feedback)?,
            terminal @ (Phase::Solved | Phase::Exhausted) => terminal,
        };
        Ok(&self.phase)
    }

    fn filter(&mut self, guess: Word, feedback: Feedback) -> Result<Phase, SolverError> {
        if feedback.is_solved() {
            self.guesses.push(GuessRecord {
                guess,
                feedback,
                remaining: 0,
            });
            return Ok(Phase::Solved);
        }

        let (pool, letters) = self
            .solver
            .filter
            .apply(&self.pool, &self.letters, &guess, feedback)?;
        self.pool = pool;
        self.letters = letters;
        self.guesses.push(GuessRecord {
            guess,
            feedback,
            remaining: self.pool.len(),
        });

        if self.guesses.len() >= self.solver.config.max_attempts {
            Ok(Phase::Exhausted)
        } else {
            Ok(Phase::Guessing)
        }
    }

    /// Run until the game ends
    ///
    /// # Errors
    /// See [`Game::step`].
    pub fn play(mut self) -> Result<GameOutcome, SolverError> {
        while !self.step()?.is_terminal() {}

        log::debug!(
            "{} after {} guesses: {:?}",
            self.target,
            self.guesses.len(),
            self.phase
        );
        Ok(match self.phase {
            Phase::Solved => GameOutcome::Solved {
                guesses: self.guesses,
            },
            _ => GameOutcome::Exhausted {
                guesses: self.guesses,
            },
        })
    }
}
