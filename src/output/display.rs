//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_tiles, feedback_to_emoji};
use crate::commands::{SimulationSummary, SolveResult};
use crate::core::Word;
use crate::learning::TrainingReport;
use crate::solver::ScoringMethod;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            feedback_tiles(&step.guess, step.feedback),
            feedback_to_emoji(step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if step.candidates_after > 0 {
                println!(
                    "  Reduction:  {:.1}x",
                    step.candidates_before as f64 / step.candidates_after as f64
                );
            }
        }
    }

    println!();
    if result.solved {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print a simulation summary
pub fn print_simulation_summary(summary: &SimulationSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", summary.trials);
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", summary.mean_attempts)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", summary.win_rate).green()
    );
    if summary.losses > 0 {
        println!(
            "   Losses (>{}):      {}",
            summary.win_limit,
            summary.losses.to_string().red()
        );
    }
    if summary.exhausted > 0 {
        println!(
            "   Unsolved:         {}",
            summary.exhausted.to_string().red()
        );
    }
    println!(
        "   Best case:        {}",
        summary.min_attempts.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        summary.max_attempts.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", summary.elapsed.as_secs_f64());

    if summary.trials == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&attempts, &count) in &summary.distribution {
        let pct = count as f64 / summary.trials as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        let bar = if attempts > summary.win_limit {
            bar.red()
        } else {
            bar.green()
        };
        println!("   {attempts:2}: {bar} {count:5} ({pct:5.1}%)");
    }
}

/// Print the outcome of a training run
pub fn print_training_report(report: &TrainingReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "Q-LEARNING RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n🧠 {}", "Training:".bright_cyan().bold());
    println!("   Episodes:         {}", report.episodes.len());
    println!("   Clusters:         {}", report.clusters);
    println!(
        "   Clustering time:  {:.2}s",
        report.clustering_time.as_secs_f64()
    );
    println!(
        "   Learning time:    {:.2}s",
        report.learning_time.as_secs_f64()
    );

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", report.mean_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", report.win_rate).green()
    );
    println!("   Losses (>6):      {}", report.losses);
}

/// Print the best opening for a word list
pub fn print_opening(opening: Option<&Word>, method: ScoringMethod) {
    match opening {
        Some(word) => println!(
            "Best opening ({method} scoring): {}",
            word.text().bright_green().bold()
        ),
        None => println!("{}", "Word list is empty".red()),
    }
}
