use crate::config::PipelineConfig;
use crate::error::Result;
use crate::ingest::{ingest_directory, Corpus};
use crate::normalize::Normalizer;
use crate::select::{select_vocabulary, SelectedVocabulary};
use crate::vocab::RankedVocabulary;
use std::path::Path;

#[derive(Debug)]
pub struct PipelineOutput {
    pub corpus: Corpus,
    pub ranked: RankedVocabulary,
    pub vocabulary: SelectedVocabulary,
}

/// Ingest `dir`, rank its terms, and select the capped vocabulary in one pass.
pub fn run_pipeline<N: Normalizer + ?Sized>(dir: impl AsRef<Path>, config: &PipelineConfig, normalizer: &N) -> Result<PipelineOutput> {
    let corpus = ingest_directory(dir, &config.ingest)?;
    let ranked = corpus.term_frequencies.rank();
    let vocabulary = select_vocabulary(&ranked, config.vocab_capacity, config.stem, normalizer);
    tracing::info!(ranked = ranked.len(), selected = vocabulary.len(), capacity = config.vocab_capacity, "vocabulary ready");
    Ok(PipelineOutput { corpus, ranked, vocabulary })
}
