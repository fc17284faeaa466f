//! Directory ingestion of line-delimited JSON document records.

use crate::config::{IngestConfig, MalformedPolicy};
use crate::error::{CorpusError, Result};
use crate::escape::repair_escapes;
use crate::vocab::TermFrequencies;
use crate::{ClusterSet, DocumentRecord, Identifier, Order, OrderIndex, Position};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Only files whose name ends with this are read.
pub const JSON_SUFFIX: &str = ".json";

/// A line skipped under [`MalformedPolicy::SkipAndReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFailure {
    pub path: PathBuf,
    /// 1-based line number within `path`.
    pub line: usize,
    pub reason: String,
}

/// Everything collected from one ingestion run.
#[derive(Debug, Default)]
pub struct Corpus {
    /// Records in ingestion order; the index is the record's position.
    pub documents: Vec<DocumentRecord>,
    pub clusters: ClusterSet,
    pub order_index: OrderIndex,
    pub term_frequencies: TermFrequencies,
    pub failures: Vec<LineFailure>,
}

impl Corpus {
    pub fn len(&self) -> usize { self.documents.len() }

    pub fn is_empty(&self) -> bool { self.documents.is_empty() }

    /// Records of one cluster in arrival order (by `order`, then position).
    pub fn cluster_documents<'a>(&'a self, cluster_id: &Identifier) -> impl Iterator<Item = (Order, &'a DocumentRecord)> + 'a {
        self.order_index
            .get(cluster_id)
            .into_iter()
            .flatten()
            .filter_map(|&(order, pos)| self.documents.get(pos).map(|doc| (order, doc)))
    }
}

/// Accumulates records from any number of files into a single [`Corpus`].
#[derive(Debug, Default)]
pub struct CorpusAccumulator {
    corpus: Corpus,
    policy: MalformedPolicy,
}

impl CorpusAccumulator {
    pub fn new(policy: MalformedPolicy) -> Self {
        Self { corpus: Corpus::default(), policy }
    }

    /// Add a parsed record and return its position.
    pub fn push_record(&mut self, record: DocumentRecord) -> Position {
        let position = self.corpus.documents.len();
        self.corpus.clusters.insert(record.cluster_id.clone());
        self.corpus
            .order_index
            .entry(record.cluster_id.clone())
            .or_default()
            .insert((record.order, position));
        self.corpus.term_frequencies.add_text(&record.body_text);
        self.corpus.documents.push(record);
        position
    }

    /// Repair and parse one line. `Ok(None)` means the line was skipped and reported.
    pub fn ingest_line(&mut self, path: &Path, line_no: usize, line: &str) -> Result<Option<Position>> {
        match serde_json::from_str::<DocumentRecord>(&repair_escapes(line)) {
            Ok(record) => Ok(Some(self.push_record(record))),
            Err(source) => self.reject(CorpusError::Malformed { path: path.to_path_buf(), line: line_no, source }),
        }
    }

    /// Apply the malformed-line policy to a line that could not become a record.
    fn reject(&mut self, err: CorpusError) -> Result<Option<Position>> {
        let (path, line) = match &err {
            CorpusError::Malformed { path, line, .. } | CorpusError::Encoding { path, line, .. } => (path.clone(), *line),
            _ => return Err(err),
        };
        match self.policy {
            MalformedPolicy::Abort => Err(err),
            MalformedPolicy::SkipAndReport => {
                warn!(path = %path.display(), line, error = %err, "skipping malformed record");
                self.corpus.failures.push(LineFailure { path, line, reason: err.to_string() });
                Ok(None)
            }
        }
    }

    /// Ingest every non-blank line of `path`; returns how many records were added.
    pub fn ingest_file(&mut self, path: &Path) -> Result<usize> {
        let io_err = |source| CorpusError::Io { path: path.to_path_buf(), source };
        let mut reader = BufReader::new(File::open(path).map_err(io_err)?);
        let mut buf = Vec::new();
        let mut line_no = 0;
        let mut added = 0;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).map_err(io_err)? == 0 { break; }
            line_no += 1;
            let line = match String::from_utf8(std::mem::take(&mut buf)) {
                Ok(line) => line,
                Err(source) => {
                    self.reject(CorpusError::Encoding { path: path.to_path_buf(), line: line_no, source })?;
                    continue;
                }
            };
            if line.trim().is_empty() {
                debug!(path = %path.display(), line = line_no, "skipping blank line");
                continue;
            }
            if self.ingest_line(path, line_no, &line)?.is_some() {
                added += 1;
            }
        }
        debug!(path = %path.display(), added, "ingested file");
        Ok(added)
    }

    pub fn finish(self) -> Corpus { self.corpus }
}

/// Ingest every `*.json` file in `dir`.
///
/// Files are visited in file-name order. Consumers must still use each record's
/// `order` field for arrival order, never its position.
pub fn ingest_directory(dir: impl AsRef<Path>, config: &IngestConfig) -> Result<Corpus> {
    let dir = dir.as_ref();
    let dir_err = |source| CorpusError::DirectoryAccess { path: dir.to_path_buf(), source };
    let meta = fs::metadata(dir).map_err(dir_err)?;
    if !meta.is_dir() {
        return Err(dir_err(io::Error::new(io::ErrorKind::InvalidInput, "not a directory")));
    }

    let max_depth = if config.recursive { usize::MAX } else { 1 };
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(max_depth).sort_by_file_name() {
        let entry = entry.map_err(|e| CorpusError::DirectoryAccess {
            path: e.path().unwrap_or(dir).to_path_buf(),
            source: e.into(),
        })?;
        let p = entry.path();
        let is_json = entry.file_name().to_str().is_some_and(|name| name.ends_with(JSON_SUFFIX));
        if is_json && p.is_file() {
            files.push(p.to_path_buf());
        }
    }

    let mut acc = CorpusAccumulator::new(config.malformed);
    for file in &files {
        acc.ingest_file(file)?;
    }
    let corpus = acc.finish();
    info!(
        dir = %dir.display(),
        files = files.len(),
        documents = corpus.documents.len(),
        clusters = corpus.clusters.len(),
        terms = corpus.term_frequencies.len(),
        skipped = corpus.failures.len(),
        "ingested corpus"
    );
    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(cluster: i64, order: i64, body: &str) -> String {
        serde_json::json!({
            "corpus": "c", "cluster_id": cluster, "post_id": format!("p{order}"),
            "order": order, "body_text": body, "novelty": false,
        })
        .to_string()
    }

    #[test]
    fn positions_are_sequential_and_indexed_by_cluster() {
        let mut acc = CorpusAccumulator::default();
        let path = Path::new("mem.json");
        for (i, l) in [line(7, 2, "b"), line(9, 1, "x"), line(7, 1, "a")].iter().enumerate() {
            assert_eq!(acc.ingest_line(path, i + 1, l).unwrap(), Some(i));
        }
        let corpus = acc.finish();
        assert_eq!(corpus.clusters.len(), 2);
        let seven = &corpus.order_index[&Identifier::Int(7)];
        assert_eq!(seven.iter().copied().collect::<Vec<_>>(), vec![(1, 2), (2, 0)]);
        let bodies: Vec<&str> = corpus.cluster_documents(&Identifier::Int(7)).map(|(_, d)| d.body_text.as_str()).collect();
        assert_eq!(bodies, vec!["a", "b"]);
    }

    #[test]
    fn missing_field_aborts_by_default() {
        let mut acc = CorpusAccumulator::default();
        let err = acc.ingest_line(Path::new("f.json"), 3, r#"{"corpus":"c","cluster_id":1}"#).unwrap_err();
        assert!(matches!(err, CorpusError::Malformed { line: 3, .. }));
    }

    #[test]
    fn extra_field_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(&line(1, 1, "x")).unwrap();
        value["title"] = "extra".into();
        let mut acc = CorpusAccumulator::default();
        assert!(acc.ingest_line(Path::new("f.json"), 1, &value.to_string()).is_err());
    }

    #[test]
    fn skip_policy_reports_failures() {
        let mut acc = CorpusAccumulator::new(MalformedPolicy::SkipAndReport);
        let path = Path::new("f.json");
        assert_eq!(acc.ingest_line(path, 1, "not json").unwrap(), None);
        assert_eq!(acc.ingest_line(path, 2, &line(1, 1, "ok")).unwrap(), Some(0));
        let corpus = acc.finish();
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.failures.len(), 1);
        assert_eq!(corpus.failures[0].line, 1);
    }

    #[test]
    fn string_and_integer_ids_both_parse() {
        let mut acc = CorpusAccumulator::default();
        let l = r#"{"corpus":"c","cluster_id":"story-1","post_id":42,"order":0,"body_text":"","novelty":true}"#;
        acc.ingest_line(Path::new("f.json"), 1, l).unwrap();
        let corpus = acc.finish();
        assert!(corpus.clusters.contains(&Identifier::from("story-1")));
        assert_eq!(corpus.documents[0].post_id, Identifier::Int(42));
    }
}
