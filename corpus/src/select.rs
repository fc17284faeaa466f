use crate::normalize::Normalizer;
use crate::vocab::RankedVocabulary;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Normalized term -> dense index in `[0, capacity)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SelectedVocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl SelectedVocabulary {
    pub fn get(&self, term: &str) -> Option<usize> { self.index.get(term).copied() }

    pub fn contains(&self, term: &str) -> bool { self.index.contains_key(term) }

    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    /// Terms in index order.
    pub fn terms(&self) -> &[String] { &self.terms }

    pub fn as_map(&self) -> &HashMap<String, usize> { &self.index }

    fn push(&mut self, term: String) {
        self.index.insert(term.clone(), self.terms.len());
        self.terms.push(term);
    }
}

impl From<Vec<String>> for SelectedVocabulary {
    fn from(terms: Vec<String>) -> Self {
        let mut vocab = SelectedVocabulary::default();
        for term in terms {
            if !vocab.contains(&term) {
                vocab.push(term);
            }
        }
        vocab
    }
}

impl From<SelectedVocabulary> for Vec<String> {
    fn from(vocab: SelectedVocabulary) -> Self { vocab.terms }
}

/// Walk `ranked` in rank order and keep up to `capacity` distinct normalized terms.
///
/// Terms that normalize to an empty string, or to a term already kept, are skipped
/// without using capacity, so the result can be smaller than `capacity`.
pub fn select_vocabulary<N: Normalizer + ?Sized>(
    ranked: &RankedVocabulary,
    capacity: usize,
    stem: bool,
    normalizer: &N,
) -> SelectedVocabulary {
    let mut vocab = SelectedVocabulary::default();
    for entry in ranked {
        if vocab.len() >= capacity { break; }
        let clean = normalizer.normalize(&entry.term, stem);
        if clean.is_empty() || vocab.contains(&clean) { continue; }
        vocab.push(clean);
    }
    tracing::debug!(capacity, selected = vocab.len(), candidates = ranked.len(), "selected vocabulary");
    vocab
}
