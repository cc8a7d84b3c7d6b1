//! Training command
//!
//! Runs the clustering and Q-learning guesser with a progress bar.

use crate::core::Word;
use crate::learning::{TrainingConfig, TrainingReport, train};
use crate::solver::SolverError;
use indicatif::{ProgressBar, ProgressStyle};

/// Train on `words` for `config.episodes` episodes
///
/// # Errors
/// Propagates the first episode error.
///
/// # Panics
/// Panics if the progress bar template is malformed.
pub fn run_training(
    words: &[Word],
    opening: Word,
    config: TrainingConfig,
    show_progress: bool,
) -> Result<TrainingReport, SolverError> {
    let pb = if show_progress {
        ProgressBar::new(config.episodes as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} episodes | {msg}")
            .expect("progress template is valid")
            .progress_chars("█▓▒░"),
    );

    let mut total_steps = 0;
    let mut finished = 0;
    let report = train(words, opening, config, |episode| {
        total_steps += episode.steps;
        finished += 1;
        if finished % 10 == 0 {
            pb.set_message(format!("Avg: {:.2}", total_steps as f64 / finished as f64));
        }
        pb.inc(1);
    })?;

    pb.finish_with_message("Complete!");
    Ok(report)
}
