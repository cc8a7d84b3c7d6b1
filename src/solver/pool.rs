//! Ranked candidate pool
//!
//! The working set of words still consistent with every feedback seen so far,
//! each carrying its heuristic score. Entries are ordered best-first and are only
//! ever removed; the first remaining entry is the next guess.

use crate::core::Word;

/// Words ranked by descending score
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePool {
    entries: Vec<(Word, u32)>,
}

impl CandidatePool {
    /// Build a pool from scored words, ranking by descending score
    ///
    /// The sort is stable, so equal scores keep their input order.
    #[must_use]
    pub fn ranked(mut entries: Vec<(Word, u32)>) -> Self {
        entries.sort_by(|(_, a), (_, b)| b.cmp(a));
        Self { entries }
    }

    /// The highest-ranked remaining word
    #[must_use]
    pub fn top(&self) -> Option<&Word> {
        self.entries.first().map(|(word, _)| word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.entries.iter().any(|(w, _)| w == word)
    }

    /// Score of a word, if it is still in the pool
    #[must_use]
    pub fn score_of(&self, word: &Word) -> Option<u32> {
        self.entries
            .iter()
            .find_map(|(w, score)| (w == word).then_some(*score))
    }

    /// Words in rank order
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.entries.iter().map(|(word, _)| word)
    }

    /// `(word, score)` pairs in rank order
    pub fn iter(&self) -> impl Iterator<Item = &(Word, u32)> {
        self.entries.iter()
    }

    /// New snapshot keeping only the words matching `keep`, ranking untouched
    #[must_use]
    pub fn retain(&self, mut keep: impl FnMut(&Word) -> bool) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(word, _)| keep(word))
                .cloned()
                .collect(),
        }
    }

    /// New snapshot without `word`
    #[must_use]
    pub fn without(&self, word: &Word) -> Self {
        self.retain(|w| w != word)
    }
}

impl FromIterator<(Word, u32)> for CandidatePool {
    fn from_iter<I: IntoIterator<Item = (Word, u32)>>(iter: I) -> Self {
        Self::ranked(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(entries: &[(&str, u32)]) -> CandidatePool {
        entries
            .iter()
            .map(|&(text, score)| (Word::new(text).unwrap(), score))
            .collect()
    }

    #[test]
    fn ranked_orders_by_descending_score() {
        let pool = pool(&[("SLATE", 3), ("CRANE", 9), ("TRACE", 5)]);
        let order: Vec<&str> = pool.words().map(Word::text).collect();
        assert_eq!(order, ["CRANE", "TRACE", "SLATE"]);
        assert_eq!(pool.top().unwrap().text(), "CRANE");
    }

    #[test]
    fn ties_keep_input_order() {
        let pool = pool(&[("SLATE", 4), ("CRANE", 4), ("TRACE", 4)]);
        let order: Vec<&str> = pool.words().map(Word::text).collect();
        assert_eq!(order, ["SLATE", "CRANE", "TRACE"]);
    }

    #[test]
    fn retain_returns_new_snapshot() {
        let original = pool(&[("SLATE", 3), ("CRANE", 9), ("TRACE", 5)]);
        let crane = Word::new("crane").unwrap();

        let pruned = original.without(&crane);

        assert_eq!(original.len(), 3);
        assert!(original.contains(&crane));
        assert_eq!(pruned.len(), 2);
        assert!(!pruned.contains(&crane));
        assert_eq!(pruned.top().unwrap().text(), "TRACE");
    }

    #[test]
    fn score_lookup() {
        let pool = pool(&[("SLATE", 3)]);
        assert_eq!(pool.score_of(&Word::new("slate").unwrap()), Some(3));
        assert_eq!(pool.score_of(&Word::new("crane").unwrap()), None);
    }

    #[test]
    fn empty_pool_has_no_top() {
        let pool = CandidatePool::default();
        assert!(pool.is_empty());
        assert!(pool.top().is_none());
    }
}
