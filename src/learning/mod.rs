//! Clustering and Q-learning guesser
//!
//! An alternative to the greedy solver: words are grouped by edit distance and
//! an agent learns which cluster to guess from next.

mod cluster;
mod qlearning;

pub use cluster::{ClusterAssignment, DistanceMatrix, cluster_words, levenshtein};
pub use qlearning::{
    EpisodeResult, Learner, LetterTally, QTable, TrainingConfig, TrainingReport, WIN_LIMIT,
    reward, train,
};
