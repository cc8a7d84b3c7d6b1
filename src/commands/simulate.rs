//! Simulation command
//!
//! Plays many games against randomly drawn goal words and summarises how the
//! solver performed.

use crate::core::Word;
use crate::solver::{Filter, Solver, SolverError};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Simulation parameters
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub trials: usize,
    /// Base seed; trial `i` draws its target from a generator seeded with `seed + i`
    pub seed: u64,
    /// Games taking more guesses than this count as losses
    pub win_limit: usize,
    pub show_progress: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: 1000,
            seed: 0,
            win_limit: 6,
            show_progress: true,
        }
    }
}

/// Result of a single game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialResult {
    pub target: Word,
    pub attempts: usize,
    pub solved: bool,
}

/// Aggregate statistics of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationSummary {
    pub trials: usize,
    pub elapsed: Duration,
    pub mean_attempts: f64,
    /// Percentage of games solved within the win limit
    pub win_rate: f64,
    /// Games unsolved or over the win limit
    pub losses: usize,
    /// Games that hit the attempt cap
    pub exhausted: usize,
    /// Attempts → number of games
    pub distribution: BTreeMap<usize, usize>,
    pub min_attempts: usize,
    pub max_attempts: usize,
    pub win_limit: usize,
}

impl SimulationSummary {
    /// Summarise finished trials
    #[must_use]
    pub fn from_results(results: &[TrialResult], elapsed: Duration, win_limit: usize) -> Self {
        let trials = results.len();
        let mut distribution = BTreeMap::new();
        for result in results {
            *distribution.entry(result.attempts).or_insert(0) += 1;
        }

        let losses = results
            .iter()
            .filter(|r| !r.solved || r.attempts > win_limit)
            .count();
        let exhausted = results.iter().filter(|r| !r.solved).count();

        let (mean_attempts, win_rate) = if trials == 0 {
            (0.0, 0.0)
        } else {
            (
                results.iter().map(|r| r.attempts).sum::<usize>() as f64 / trials as f64,
                (trials - losses) as f64 / trials as f64 * 100.0,
            )
        };

        Self {
            trials,
            elapsed,
            mean_attempts,
            win_rate,
            losses,
            exhausted,
            distribution,
            min_attempts: results.iter().map(|r| r.attempts).min().unwrap_or(0),
            max_attempts: results.iter().map(|r| r.attempts).max().unwrap_or(0),
            win_limit,
        }
    }
}

/// Play `config.trials` games in parallel against goals drawn from `goal_words`
///
/// # Errors
/// Returns the first `SolverError` raised by any game, e.g. `NoCandidates`
/// when a goal word is missing from the solver's guess list.
///
/// # Panics
/// Panics if the progress bar template is malformed.
pub fn run_simulations<F: Filter + Sync>(
    solver: &Solver<'_, F>,
    goal_words: &[Word],
    config: &SimulationConfig,
) -> Result<SimulationSummary, SolverError> {
    let start = Instant::now();
    if goal_words.is_empty() {
        log::warn!("goal list is empty, nothing to simulate");
        return Ok(SimulationSummary::from_results(
            &[],
            start.elapsed(),
            config.win_limit,
        ));
    }

    let pb = if config.show_progress {
        ProgressBar::new(config.trials as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("progress template is valid")
            .progress_chars("█▓▒░"),
    );

    let results = (0..config.trials)
        .into_par_iter()
        .map(|trial| {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(trial as u64));
            let target = goal_words
                .choose(&mut rng)
                .ok_or(SolverError::NoCandidates)?;
            let outcome = solver.play(target)?;
            pb.inc(1);
            Ok(TrialResult {
                target: target.clone(),
                attempts: outcome.attempts(),
                solved: outcome.is_solved(),
            })
        })
        .collect::<Result<Vec<_>, SolverError>>()?;

    pb.finish_with_message("done");

    let summary = SimulationSummary::from_results(&results, start.elapsed(), config.win_limit);
    log::info!(
        "{} trials in {:.2?}: mean {:.3} attempts, win rate {:.1}%",
        summary.trials,
        summary.elapsed,
        summary.mean_attempts,
        summary.win_rate
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FeedbackTree, FilterType, SolverConfig};
    use crate::wordlists::GOAL_WORDS;
    use crate::wordlists::loader::words_from_slice;

    fn quiet(trials: usize, seed: u64) -> SimulationConfig {
        SimulationConfig {
            trials,
            seed,
            show_progress: false,
            ..SimulationConfig::default()
        }
    }

    fn trial(attempts: usize, solved: bool) -> TrialResult {
        TrialResult {
            target: Word::new("CRANE").unwrap(),
            attempts,
            solved,
        }
    }

    #[test]
    fn summary_counts_losses_over_win_limit() {
        let results = [
            trial(1, true),
            trial(3, true),
            trial(7, true),
            trial(12, false),
        ];
        let summary = SimulationSummary::from_results(&results, Duration::ZERO, 6);

        assert_eq!(summary.trials, 4);
        assert_eq!(summary.losses, 2);
        assert_eq!(summary.exhausted, 1);
        assert!((summary.win_rate - 50.0).abs() < f64::EPSILON);
        assert!((summary.mean_attempts - 23.0 / 4.0).abs() < f64::EPSILON);
        assert_eq!(summary.min_attempts, 1);
        assert_eq!(summary.max_attempts, 12);
        assert_eq!(summary.distribution.values().sum::<usize>(), 4);
    }

    #[test]
    fn empty_goal_list_gives_empty_summary() {
        let words = words_from_slice(&GOAL_WORDS[..20]);
        let solver = Solver::new(FilterType::constraint(), &words, SolverConfig::default());

        let summary = run_simulations(&solver, &[], &quiet(50, 0)).unwrap();
        assert_eq!(summary.trials, 0);
        assert!(summary.win_rate.abs() < f64::EPSILON);
        assert!(summary.distribution.is_empty());
    }

    #[test]
    fn simulation_runs_every_trial() {
        let words = words_from_slice(&GOAL_WORDS[..150]);
        let config = SolverConfig {
            max_attempts: words.len() + 1,
            ..SolverConfig::default()
        };
        let solver = Solver::new(FilterType::constraint(), &words, config);

        let summary = run_simulations(&solver, &words, &quiet(40, 3)).unwrap();
        assert_eq!(summary.trials, 40);
        assert_eq!(summary.exhausted, 0);
        assert!(summary.mean_attempts >= 1.0);
        assert!(summary.mean_attempts >= summary.min_attempts as f64);
        assert!(summary.mean_attempts <= summary.max_attempts as f64);
    }

    #[test]
    fn simulation_is_reproducible() {
        let words = words_from_slice(&GOAL_WORDS[..100]);
        let tree = FeedbackTree::build(&words);
        let config = SolverConfig {
            opening: words[0].clone(),
            ..SolverConfig::default()
        };
        let solver = Solver::new(FilterType::tree(&tree), &words, config);

        let first = run_simulations(&solver, &words, &quiet(30, 11)).unwrap();
        let second = run_simulations(&solver, &words, &quiet(30, 11)).unwrap();
        assert_eq!(first.distribution, second.distribution);
        assert!((first.mean_attempts - second.mean_attempts).abs() < f64::EPSILON);
    }

    #[test]
    fn goal_outside_guess_list_is_an_error() {
        let words = words_from_slice(&GOAL_WORDS[..20]);
        let outsiders = words_from_slice(&GOAL_WORDS[500..510]);
        let config = SolverConfig {
            max_attempts: words.len() + 2,
            ..SolverConfig::default()
        };
        let solver = Solver::new(FilterType::constraint(), &words, config);

        let result = run_simulations(&solver, &outsiders, &quiet(5, 0));
        assert_eq!(result.unwrap_err(), SolverError::NoCandidates);
    }
}
