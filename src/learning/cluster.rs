//! Edit-distance clustering of a word list
//!
//! Words are grouped bottom-up with average-linkage agglomerative clustering
//! over their Levenshtein distances. Merging follows the nearest-neighbour
//! chain, which yields the same hierarchy as the naive closest-pair search
//! for average linkage in O(n²) time.

use crate::core::{WORD_LENGTH, Word};
use ndarray::Array2;

/// Minimum number of single-letter edits turning `a` into `b`
#[must_use]
pub fn levenshtein(a: &Word, b: &Word) -> usize {
    let a = a.chars();
    let b = b.chars();
    let mut previous: [usize; WORD_LENGTH + 1] = std::array::from_fn(|j| j);

    for (i, &ca) in a.iter().enumerate() {
        let mut current = [0; WORD_LENGTH + 1];
        current[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        previous = current;
    }

    previous[WORD_LENGTH]
}

/// Symmetric pairwise edit distances
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    values: Array2<f64>,
}

impl DistanceMatrix {
    /// Compute distances between every pair of words
    #[must_use]
    pub fn build(words: &[Word]) -> Self {
        let n = words.len();
        let mut values = Array2::zeros((n, n));
        for i in 0..n {
            for j in (i + 1)..n {
                let distance = levenshtein(&words[i], &words[j]) as f64;
                values[[i, j]] = distance;
                values[[j, i]] = distance;
            }
        }
        Self { values }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.nrows()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[[i, j]]
    }
}

/// Cluster label of every word, labels numbered 0..clusters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterAssignment {
    labels: Vec<usize>,
    clusters: usize,
}

impl ClusterAssignment {
    #[must_use]
    pub fn label(&self, index: usize) -> usize {
        self.labels[index]
    }

    #[must_use]
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Number of distinct clusters
    #[must_use]
    pub const fn clusters(&self) -> usize {
        self.clusters
    }

    /// Indices of the words in `cluster`
    pub fn members(&self, cluster: usize) -> impl Iterator<Item = usize> + '_ {
        self.labels
            .iter()
            .enumerate()
            .filter_map(move |(i, &label)| (label == cluster).then_some(i))
    }
}

/// Agglomerative clustering with average linkage down to `clusters` groups
///
/// `clusters` is clamped to `1..=n`. Labels are numbered in order of first
/// appearance in the word list.
///
/// # Examples
/// ```
/// use wordle_greedy::core::Word;
/// use wordle_greedy::learning::{DistanceMatrix, cluster_words};
///
/// let words: Vec<Word> = ["BATCH", "CATCH", "MATCH", "PLUMB", "PLUMP"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let assignment = cluster_words(&DistanceMatrix::build(&words), 2);
/// assert_eq!(assignment.labels(), &[0, 0, 0, 1, 1]);
/// ```
#[must_use]
pub fn cluster_words(matrix: &DistanceMatrix, clusters: usize) -> ClusterAssignment {
    let n = matrix.len();
    if n == 0 {
        return ClusterAssignment {
            labels: Vec::new(),
            clusters: 0,
        };
    }
    let target = clusters.clamp(1, n);

    let mut distances = matrix.values.clone();
    let mut active = vec![true; n];
    let mut sizes = vec![1usize; n];
    let mut parent: Vec<usize> = (0..n).collect();
    let mut remaining = n;
    let mut chain: Vec<usize> = Vec::with_capacity(n);

    while remaining > target {
        if chain.is_empty() {
            if let Some(start) = active.iter().position(|&a| a) {
                chain.push(start);
            }
        }
        let Some(&tip) = chain.last() else { break };
        let previous = chain.len().checked_sub(2).map(|i| chain[i]);

        // Prefer the previous link on ties so the chain always terminates
        let mut nearest = previous;
        let mut nearest_distance = previous.map_or(f64::INFINITY, |p| distances[[tip, p]]);
        for candidate in (0..n).filter(|&c| active[c] && c != tip) {
            let distance = distances[[tip, candidate]];
            if distance < nearest_distance {
                nearest = Some(candidate);
                nearest_distance = distance;
            }
        }
        let Some(nearest) = nearest else { break };

        if Some(nearest) == previous {
            chain.truncate(chain.len() - 2);
            let (keep, absorb) = (tip.min(nearest), tip.max(nearest));
            let (keep_size, absorb_size) = (sizes[keep] as f64, sizes[absorb] as f64);
            for other in (0..n).filter(|&o| active[o] && o != keep && o != absorb) {
                let merged = (keep_size * distances[[keep, other]]
                    + absorb_size * distances[[absorb, other]])
                    / (keep_size + absorb_size);
                distances[[keep, other]] = merged;
                distances[[other, keep]] = merged;
            }
            active[absorb] = false;
            sizes[keep] += sizes[absorb];
            parent[absorb] = keep;
            remaining -= 1;
        } else {
            chain.push(nearest);
        }
    }

    let root = |mut i: usize| {
        while parent[i] != i {
            i = parent[i];
        }
        i
    };

    let mut numbering = vec![usize::MAX; n];
    let mut next = 0;
    let labels = (0..n)
        .map(|i| {
            let r = root(i);
            if numbering[r] == usize::MAX {
                numbering[r] = next;
                next += 1;
            }
            numbering[r]
        })
        .collect();

    ClusterAssignment {
        labels,
        clusters: next,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn levenshtein_distances() {
        let w = words(&["CRANE", "TRACE", "CRANE", "SPEED", "CRANK"]);
        assert_eq!(levenshtein(&w[0], &w[2]), 0);
        assert_eq!(levenshtein(&w[0], &w[4]), 1);
        // C->T, N->C
        assert_eq!(levenshtein(&w[0], &w[1]), 2);
        assert_eq!(levenshtein(&w[0], &w[3]), 5);
    }

    #[test]
    fn levenshtein_is_symmetric() {
        let w = words(&["ABBEY", "BABEL", "ALLOT", "DOLLY"]);
        for a in &w {
            for b in &w {
                assert_eq!(levenshtein(a, b), levenshtein(b, a));
            }
        }
    }

    #[test]
    fn matrix_is_symmetric_with_zero_diagonal() {
        let w = words(&["CRANE", "TRACE", "SLATE"]);
        let matrix = DistanceMatrix::build(&w);
        assert_eq!(matrix.len(), 3);
        for i in 0..3 {
            assert!(matrix.get(i, i).abs() < f64::EPSILON);
            for j in 0..3 {
                assert!((matrix.get(i, j) - matrix.get(j, i)).abs() < f64::EPSILON);
            }
        }
    }

    #[test]
    fn clusters_group_similar_words() {
        let w = words(&["BATCH", "PLUMB", "CATCH", "PLUMP", "MATCH", "SLUMP"]);
        let assignment = cluster_words(&DistanceMatrix::build(&w), 2);

        assert_eq!(assignment.clusters(), 2);
        assert_eq!(assignment.labels(), &[0, 1, 0, 1, 0, 1]);
        assert_eq!(assignment.members(1).collect::<Vec<_>>(), [1, 3, 5]);
    }

    #[test]
    fn cluster_count_is_clamped() {
        let w = words(&["CRANE", "TRACE", "SLATE"]);
        let matrix = DistanceMatrix::build(&w);

        assert_eq!(cluster_words(&matrix, 10).labels(), &[0, 1, 2]);
        assert_eq!(cluster_words(&matrix, 0).labels(), &[0, 0, 0]);
    }

    #[test]
    fn empty_list_has_no_clusters() {
        let assignment = cluster_words(&DistanceMatrix::build(&[]), 4);
        assert_eq!(assignment.clusters(), 0);
        assert!(assignment.labels().is_empty());
    }
}
