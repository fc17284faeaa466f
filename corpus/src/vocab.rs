//! Corpus-wide term frequencies and their deterministic ranking.
//!
//! Ranks start at [`FIRST_TERM_RANK`]; 0 and 1 are reserved for the padding and
//! unknown tokens of downstream sequence encoders. Terms are ordered by descending
//! count, and equal counts are ordered by the term's bytes, ascending, so the same
//! input always produces the same ranking.

use crate::tokenizer::word_tokenize;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const PAD_RANK: u32 = 0;
pub const UNKNOWN_RANK: u32 = 1;
pub const FIRST_TERM_RANK: u32 = 2;

/// Raw token counts, case preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFrequencies {
    counts: HashMap<String, u64>,
}

impl TermFrequencies {
    pub fn new() -> Self { Self::default() }

    /// Tokenize `text` and count every token.
    pub fn add_text(&mut self, text: &str) {
        for token in word_tokenize(text) {
            self.add_token(token);
        }
    }

    pub fn add_token(&mut self, token: &str) {
        match self.counts.get_mut(token) {
            Some(count) => *count += 1,
            None => { self.counts.insert(token.to_string(), 1); }
        }
    }

    pub fn get(&self, term: &str) -> u64 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize { self.counts.len() }

    pub fn is_empty(&self) -> bool { self.counts.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(t, c)| (t.as_str(), *c))
    }

    /// Sum another table into this one.
    pub fn merge(&mut self, other: TermFrequencies) {
        for (term, count) in other.counts {
            *self.counts.entry(term).or_insert(0) += count;
        }
    }

    pub fn rank(&self) -> RankedVocabulary {
        let mut sorted: Vec<(&String, u64)> = self.counts.iter().map(|(t, c)| (t, *c)).collect();
        sorted.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        let entries: Vec<RankedTerm> = sorted
            .into_iter()
            .zip(FIRST_TERM_RANK..)
            .map(|((term, count), rank)| RankedTerm { term: term.clone(), count, rank })
            .collect();
        RankedVocabulary::from(entries)
    }
}

impl FromIterator<(String, u64)> for TermFrequencies {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut tf = TermFrequencies::new();
        for (term, count) in iter {
            *tf.counts.entry(term).or_insert(0) += count;
        }
        tf
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedTerm {
    pub term: String,
    pub count: u64,
    pub rank: u32,
}

/// Terms in rank order, each with its corpus count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<RankedTerm>", into = "Vec<RankedTerm>")]
pub struct RankedVocabulary {
    entries: Vec<RankedTerm>,
    positions: HashMap<String, usize>,
}

impl RankedVocabulary {
    pub fn iter(&self) -> std::slice::Iter<'_, RankedTerm> { self.entries.iter() }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn entries(&self) -> &[RankedTerm] { &self.entries }

    pub fn rank_of(&self, term: &str) -> Option<u32> {
        self.lookup(term).map(|e| e.rank)
    }

    pub fn count_of(&self, term: &str) -> Option<u64> {
        self.lookup(term).map(|e| e.count)
    }

    fn lookup(&self, term: &str) -> Option<&RankedTerm> {
        self.positions.get(term).and_then(|&i| self.entries.get(i))
    }
}

impl From<Vec<RankedTerm>> for RankedVocabulary {
    fn from(entries: Vec<RankedTerm>) -> Self {
        let positions = entries.iter().enumerate().map(|(i, e)| (e.term.clone(), i)).collect();
        RankedVocabulary { entries, positions }
    }
}

impl From<RankedVocabulary> for Vec<RankedTerm> {
    fn from(ranked: RankedVocabulary) -> Self { ranked.entries }
}

impl<'a> IntoIterator for &'a RankedVocabulary {
    type Item = &'a RankedTerm;
    type IntoIter = std::slice::Iter<'a, RankedTerm>;

    fn into_iter(self) -> Self::IntoIter { self.entries.iter() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, u64)]) -> TermFrequencies {
        pairs.iter().map(|(t, c)| (t.to_string(), *c)).collect()
    }

    #[test]
    fn ties_break_lexicographically() {
        let tf = table(&[("the", 10), ("cat", 10), ("dog", 5)]);
        let ranked = tf.rank();
        assert_eq!(ranked.rank_of("cat"), Some(2));
        assert_eq!(ranked.rank_of("the"), Some(3));
        assert_eq!(ranked.rank_of("dog"), Some(4));
        assert_eq!(ranked.count_of("dog"), Some(5));
        assert!(ranked.iter().all(|e| e.rank != PAD_RANK && e.rank != UNKNOWN_RANK));
    }

    #[test]
    fn ranking_is_reproducible() {
        let pairs: Vec<(String, u64)> = (0..200).map(|i| (format!("w{i}"), (i % 7) as u64)).collect();
        let a = pairs.iter().cloned().collect::<TermFrequencies>().rank();
        let b = pairs.into_iter().rev().collect::<TermFrequencies>().rank();
        assert_eq!(a.entries(), b.entries());
    }

    #[test]
    fn counts_tokens_case_sensitively() {
        let mut tf = TermFrequencies::new();
        tf.add_text("The cat saw the cat.");
        assert_eq!(tf.get("cat"), 2);
        assert_eq!(tf.get("The"), 1);
        assert_eq!(tf.get("the"), 1);
        assert_eq!(tf.get("."), 1);
        assert_eq!(tf.get("dog"), 0);
    }

    #[test]
    fn merge_sums_counts() {
        let mut a = table(&[("x", 2), ("y", 1)]);
        a.merge(table(&[("y", 4), ("z", 1)]));
        assert_eq!(a, table(&[("x", 2), ("y", 5), ("z", 1)]));
    }

    #[test]
    fn empty_table_ranks_empty() {
        assert!(TermFrequencies::new().rank().is_empty());
    }
}
