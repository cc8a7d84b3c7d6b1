//! Tabular Q-learning over word clusters
//!
//! States and actions are both cluster labels. After every guess the corpus is
//! narrowed with the constraint filter, then the agent picks the cluster of its
//! next guess and draws a random surviving word from it.

use super::{ClusterAssignment, DistanceMatrix, cluster_words};
use crate::core::{Feedback, Word};
use crate::solver::{AdmissibleLetters, CandidatePool, ConstraintFilter, Filter, SolverError};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rustc_hash::{FxHashMap, FxHashSet};
use std::time::{Duration, Instant};

/// Guesses above this count a game as lost
pub const WIN_LIMIT: usize = 6;

/// Feedback reduced to how many positions fell in each category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterTally {
    pub exact: usize,
    pub present: usize,
    pub absent: usize,
}

impl From<Feedback> for LetterTally {
    fn from(feedback: Feedback) -> Self {
        Self {
            exact: feedback.count_exact(),
            present: feedback.count_present(),
            absent: feedback.count_absent(),
        }
    }
}

/// Reward for moving from the `previous` tally to the `current` one
///
/// Each category contributes `previous - current`, weighted 10 for exact,
/// 5 for present and -1 for absent.
#[must_use]
pub fn reward(previous: LetterTally, current: LetterTally) -> f64 {
    let delta = |before: usize, after: usize| before as f64 - after as f64;
    10.0 * delta(previous.exact, current.exact) + 5.0 * delta(previous.present, current.present)
        - delta(previous.absent, current.absent)
}

/// Cluster-to-cluster action values
#[derive(Debug, Clone, PartialEq)]
pub struct QTable {
    values: Array2<f64>,
}

impl QTable {
    /// All-zero table for `clusters` states and actions
    #[must_use]
    pub fn new(clusters: usize) -> Self {
        Self {
            values: Array2::zeros((clusters, clusters)),
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.values.nrows()
    }

    #[must_use]
    pub fn get(&self, state: usize, action: usize) -> f64 {
        self.values[[state, action]]
    }

    /// Best value reachable from `state`
    #[must_use]
    pub fn max_value(&self, state: usize) -> f64 {
        self.values
            .row(state)
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Whether every action from `state` still has the same value
    #[must_use]
    pub fn is_uniform(&self, state: usize) -> bool {
        let row = self.values.row(state);
        row.iter().all(|&v| (v - row[0]).abs() < f64::EPSILON)
    }

    /// Highest-valued action among `allowed`, first one on ties
    #[must_use]
    pub fn best_action(&self, state: usize, allowed: &[usize]) -> Option<usize> {
        allowed.iter().copied().reduce(|best, action| {
            if self.get(state, action) > self.get(state, best) {
                action
            } else {
                best
            }
        })
    }

    /// `Q ← (1−α)Q + α(r + γ·max Q[action] − Q)`
    pub fn update(
        &mut self,
        state: usize,
        action: usize,
        reward: f64,
        learning_rate: f64,
        discount: f64,
    ) {
        let current = self.get(state, action);
        let future = self.max_value(action);
        self.values[[state, action]] = (1.0 - learning_rate) * current
            + learning_rate * (reward + discount * future - current);
    }
}

/// Hyperparameters of a training run
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    pub episodes: usize,
    pub clusters: usize,
    pub learning_rate: f64,
    pub exploration_rate: f64,
    pub discount: f64,
    pub seed: u64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            episodes: 100,
            clusters: 10,
            learning_rate: 0.1,
            exploration_rate: 0.9,
            discount: 0.9,
            seed: 0,
        }
    }
}

/// One finished episode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeResult {
    pub goal: Word,
    /// Guesses made, the opening included
    pub steps: usize,
    pub visited: Vec<Word>,
    pub solved: bool,
}

/// Q-learning agent over a clustered corpus
pub struct Learner<'a> {
    words: &'a [Word],
    assignment: ClusterAssignment,
    index: FxHashMap<&'a Word, usize>,
    q: QTable,
    opening: Word,
    config: TrainingConfig,
    rng: StdRng,
}

impl<'a> Learner<'a> {
    /// Cluster `words` and start from an all-zero table
    #[must_use]
    pub fn new(words: &'a [Word], opening: Word, config: TrainingConfig) -> Self {
        let matrix = DistanceMatrix::build(words);
        let assignment = cluster_words(&matrix, config.clusters);
        Self::with_assignment(words, assignment, opening, config)
    }

    /// Start from a precomputed clustering
    #[must_use]
    pub fn with_assignment(
        words: &'a [Word],
        assignment: ClusterAssignment,
        opening: Word,
        config: TrainingConfig,
    ) -> Self {
        let index = words.iter().enumerate().map(|(i, w)| (w, i)).collect();
        Self {
            words,
            q: QTable::new(assignment.clusters().max(1)),
            assignment,
            index,
            opening,
            rng: StdRng::seed_from_u64(config.seed),
            config,
        }
    }

    #[must_use]
    pub const fn q_table(&self) -> &QTable {
        &self.q
    }

    #[must_use]
    pub const fn assignment(&self) -> &ClusterAssignment {
        &self.assignment
    }

    fn cluster_of(&self, word: &Word) -> usize {
        self.index
            .get(word)
            .map_or(0, |&i| self.assignment.label(i))
    }

    /// Play one episode towards `goal`, updating the table as it goes
    ///
    /// # Errors
    /// Propagates filter errors; `NoCandidates` if the goal is not in the corpus.
    pub fn run_episode(&mut self, goal: &Word) -> Result<EpisodeResult, SolverError> {
        let mut current = self.opening.clone();
        let mut state = self.cluster_of(&current);
        let mut visited = Vec::new();
        let mut pool: CandidatePool = self.words.iter().map(|w| (w.clone(), 0)).collect();
        let mut letters = AdmissibleLetters::new();
        let mut epsilon = self.config.exploration_rate;
        let mut steps = 1;

        loop {
            visited.push(current.clone());
            let feedback = Feedback::evaluate(&current, goal);
            if feedback.is_solved() {
                return Ok(EpisodeResult {
                    goal: goal.clone(),
                    steps,
                    visited,
                    solved: true,
                });
            }
            if steps >= self.words.len() {
                return Ok(EpisodeResult {
                    goal: goal.clone(),
                    steps,
                    visited,
                    solved: false,
                });
            }

            (pool, letters) = ConstraintFilter.apply(&pool, &letters, &current, feedback)?;

            let mut remaining: Vec<usize> = pool
                .words()
                .map(|w| self.cluster_of(w))
                .collect::<FxHashSet<_>>()
                .into_iter()
                .collect();
            remaining.sort_unstable();
            if remaining.is_empty() {
                return Err(SolverError::NoCandidates);
            }

            epsilon /= (steps * steps) as f64;
            let explore = self.rng.random::<f64>() < epsilon || self.q.is_uniform(state);
            let choice = if explore {
                if remaining.len() > 1 {
                    remaining.retain(|&c| c != state);
                }
                remaining.choose(&mut self.rng).copied()
            } else {
                self.q.best_action(state, &remaining)
            };
            let action = choice.ok_or(SolverError::NoCandidates)?;

            let members: Vec<&Word> = pool
                .words()
                .filter(|w| self.cluster_of(w) == action)
                .collect();
            let next = (*members
                .choose(&mut self.rng)
                .ok_or(SolverError::NoCandidates)?)
            .clone();

            let gain = reward(
                Feedback::evaluate(&current, goal).into(),
                Feedback::evaluate(&next, goal).into(),
            );
            self.q.update(
                state,
                action,
                gain,
                self.config.learning_rate,
                self.config.discount,
            );
            log::trace!("{current} -> {next} (cluster {state} -> {action}, reward {gain})");

            state = action;
            current = next;
            steps += 1;
        }
    }
}

/// Outcome of a training run
#[derive(Debug, Clone)]
pub struct TrainingReport {
    pub episodes: Vec<EpisodeResult>,
    pub clusters: usize,
    pub mean_guesses: f64,
    /// Episodes needing more than six guesses or never solving
    pub losses: usize,
    pub win_rate: f64,
    pub clustering_time: Duration,
    pub learning_time: Duration,
}

/// Cluster `words` and run `config.episodes` episodes against random goals
///
/// `on_episode` is called after every episode, e.g. to tick a progress bar.
///
/// # Errors
/// Propagates the first episode error.
pub fn train(
    words: &[Word],
    opening: Word,
    config: TrainingConfig,
    mut on_episode: impl FnMut(&EpisodeResult),
) -> Result<TrainingReport, SolverError> {
    let clustering_start = Instant::now();
    let assignment = cluster_words(&DistanceMatrix::build(words), config.clusters);
    let clustering_time = clustering_start.elapsed();
    log::info!(
        "clustered {} words into {} clusters in {clustering_time:.2?}",
        words.len(),
        assignment.clusters()
    );

    let clusters = assignment.clusters();
    let episode_count = config.episodes;
    let mut goal_rng = StdRng::seed_from_u64(config.seed.wrapping_add(1));
    let mut learner = Learner::with_assignment(words, assignment, opening, config);

    let learning_start = Instant::now();
    let mut episodes = Vec::with_capacity(episode_count);
    for _ in 0..episode_count {
        let Some(goal) = words.choose(&mut goal_rng) else {
            break;
        };
        let result = learner.run_episode(goal)?;
        on_episode(&result);
        episodes.push(result);
    }
    let learning_time = learning_start.elapsed();

    let total = episodes.len();
    let losses = episodes
        .iter()
        .filter(|e| !e.solved || e.steps > WIN_LIMIT)
        .count();
    let (mean_guesses, win_rate) = if total == 0 {
        (0.0, 0.0)
    } else {
        (
            episodes.iter().map(|e| e.steps).sum::<usize>() as f64 / total as f64,
            (total - losses) as f64 / total as f64 * 100.0,
        )
    };

    Ok(TrainingReport {
        episodes,
        clusters,
        mean_guesses,
        losses,
        win_rate,
        clustering_time,
        learning_time,
    })
}
