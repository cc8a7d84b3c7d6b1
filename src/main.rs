//! Wordle Greedy - CLI
//!
//! Greedy constraint-propagation Wordle solver with simulation and a
//! clustering/Q-learning variant.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use wordle_greedy::{
    commands::{SimulationConfig, run_simulations, run_training, solve_word},
    core::Word,
    learning::TrainingConfig,
    output::{print_opening, print_simulation_summary, print_solve_result, print_training_report},
    solver::{
        DEFAULT_MAX_ATTEMPTS, DEFAULT_OPENING, FeedbackTree, FilterType, ScoringMethod, Solver,
        SolverConfig, best_opening,
    },
    wordlists::{ACCEPTED_WORDS, GOAL_WORDS, loader::load_from_file, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_greedy",
    about = "Greedy constraint-propagation Wordle solver with letter-frequency scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Scoring: occurrence (default) or positional
    #[arg(short, long, global = true, default_value = "occurrence")]
    scoring: String,

    /// Pruning after each guess
    #[arg(short, long, global = true, value_enum, default_value_t = FilterKind::Constraint)]
    filter: FilterKind,

    /// Goal word list (default: embedded list)
    #[arg(long, global = true)]
    goal_words: Option<String>,

    /// Guess word list (default: embedded list)
    #[arg(long, global = true)]
    guess_words: Option<String>,

    /// First guess of every game
    #[arg(short, long, global = true, default_value = DEFAULT_OPENING)]
    opening: String,

    /// Random seed for target selection and training
    #[arg(long, global = true, default_value = "0")]
    seed: u64,

    /// Stop a game after this many guesses
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,
}

#[derive(Clone, Copy, ValueEnum)]
enum FilterKind {
    /// Per-position admissible letters
    Constraint,
    /// Precomputed guess/feedback tree
    Tree,
}

#[derive(Subcommand)]
enum Commands {
    /// Play many games against random goal words
    Simulate {
        /// Number of games
        #[arg(short = 'n', long, default_value = "1000")]
        trials: usize,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts for each guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Train the clustering/Q-learning guesser
    Train {
        /// Number of episodes
        #[arg(short = 'n', long, default_value = "100")]
        episodes: usize,

        /// Number of word clusters
        #[arg(short, long, default_value = "10")]
        clusters: usize,

        #[arg(long, default_value = "0.1")]
        learning_rate: f64,

        #[arg(long, default_value = "0.9")]
        exploration_rate: f64,

        #[arg(long, default_value = "0.9")]
        discount: f64,
    },

    /// Print the best-scoring opening word
    Opening,
}

/// Load a word list from `path`, or fall back to the embedded one
fn load_words(path: Option<&str>, embedded: &[&str]) -> Result<Vec<Word>> {
    match path {
        Some(path) => {
            load_from_file(path).with_context(|| format!("failed to read word list {path}"))
        }
        None => Ok(words_from_slice(embedded)),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let goal_words = load_words(cli.goal_words.as_deref(), GOAL_WORDS)?;
    let guess_words = load_words(cli.guess_words.as_deref(), ACCEPTED_WORDS)?;
    let scoring: ScoringMethod = cli.scoring.parse().map_err(anyhow::Error::msg)?;
    let opening = Word::new(&cli.opening).context("invalid opening word")?;
    log::info!(
        "{} goal words, {} guess words, {scoring} scoring",
        goal_words.len(),
        guess_words.len()
    );

    let config = SolverConfig::new(opening.clone(), scoring, cli.max_attempts);
    let needs_tree = matches!(cli.filter, FilterKind::Tree)
        && matches!(cli.command, Commands::Simulate { .. } | Commands::Solve { .. });
    let tree = needs_tree.then(|| FeedbackTree::build(&guess_words));
    let filter = tree
        .as_ref()
        .map_or_else(FilterType::constraint, FilterType::tree);

    match cli.command {
        Commands::Simulate { trials } => {
            let config_sim = SimulationConfig {
                trials,
                seed: cli.seed,
                ..SimulationConfig::default()
            };
            let solver = Solver::new(filter, &guess_words, config);
            let summary = run_simulations(&solver, &goal_words, &config_sim)?;
            print_simulation_summary(&summary);
        }
        Commands::Solve { word, verbose } => {
            let target = Word::new(&word).with_context(|| format!("invalid target word {word}"))?;
            let solver = Solver::new(filter, &guess_words, config);
            let result = solve_word(&solver, &target)?;
            print_solve_result(&result, verbose);
        }
        Commands::Train {
            episodes,
            clusters,
            learning_rate,
            exploration_rate,
            discount,
        } => {
            let training = TrainingConfig {
                episodes,
                clusters,
                learning_rate,
                exploration_rate,
                discount,
                seed: cli.seed,
            };
            let report = run_training(&goal_words, opening, training, true)?;
            print_training_report(&report);
        }
        Commands::Opening => {
            print_opening(best_opening(&guess_words, scoring).as_ref(), scoring);
        }
    }

    Ok(())
}
