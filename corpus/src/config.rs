/// Vocabulary size used when the caller does not pick one.
pub const DEFAULT_VOCAB_CAPACITY: usize = 500;

/// What to do with a line that does not parse as a document record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Stop the run at the first malformed line.
    #[default]
    Abort,
    /// Skip the line, record it in `Corpus::failures`, and keep going.
    SkipAndReport,
}

#[derive(Debug, Clone, Default)]
pub struct IngestConfig {
    /// Descend into subdirectories instead of reading only the top level.
    pub recursive: bool,
    pub malformed: MalformedPolicy,
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub ingest: IngestConfig,
    pub vocab_capacity: usize,
    /// Passed through to the normalizer.
    pub stem: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { ingest: IngestConfig::default(), vocab_capacity: DEFAULT_VOCAB_CAPACITY, stem: false }
    }
}
