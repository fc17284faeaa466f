use crate::select::SelectedVocabulary;
use crate::vocab::RankedVocabulary;
use crate::DocumentRecord;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaFile {
    pub num_docs: usize,
    pub num_clusters: usize,
    pub vocab_size: usize,
    pub created_at: String,
    pub version: u32,
}

pub struct OutputPaths {
    pub root: PathBuf,
}

impl OutputPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }
    fn vocab(&self) -> PathBuf { self.root.join("vocab.json") }
    fn ranked(&self) -> PathBuf { self.root.join("ranked.bin") }
    fn documents(&self) -> PathBuf { self.root.join("documents.jsonl") }
    fn meta(&self) -> PathBuf { self.root.join("meta.json") }
}

fn write_bytes(path: PathBuf, bytes: &[u8]) -> Result<()> {
    let mut f = File::create(path)?;
    f.write_all(bytes)?;
    Ok(())
}

fn read_bytes(path: PathBuf) -> Result<Vec<u8>> {
    let mut f = File::open(path)?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf)?;
    Ok(buf)
}

/// Selected terms as a JSON array in index order.
pub fn save_vocabulary(paths: &OutputPaths, vocab: &SelectedVocabulary) -> Result<()> {
    create_dir_all(&paths.root)?;
    let json = serde_json::to_string_pretty(vocab)?;
    write_bytes(paths.vocab(), json.as_bytes())
}

pub fn load_vocabulary(paths: &OutputPaths) -> Result<SelectedVocabulary> {
    let buf = read_bytes(paths.vocab())?;
    Ok(serde_json::from_slice(&buf)?)
}

pub fn save_ranked(paths: &OutputPaths, ranked: &RankedVocabulary) -> Result<()> {
    create_dir_all(&paths.root)?;
    write_bytes(paths.ranked(), &bincode::serialize(ranked)?)
}

pub fn load_ranked(paths: &OutputPaths) -> Result<RankedVocabulary> {
    let buf = read_bytes(paths.ranked())?;
    Ok(bincode::deserialize(&buf)?)
}

/// Records as line-delimited JSON in position order. Identifiers are untagged,
/// which bincode cannot decode, so this file stays JSON.
pub fn save_documents(paths: &OutputPaths, docs: &[DocumentRecord]) -> Result<()> {
    create_dir_all(&paths.root)?;
    let mut w = BufWriter::new(File::create(paths.documents())?);
    for doc in docs {
        serde_json::to_writer(&mut w, doc)?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

pub fn load_documents(paths: &OutputPaths) -> Result<Vec<DocumentRecord>> {
    let reader = BufReader::new(File::open(paths.documents())?);
    let mut docs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        docs.push(serde_json::from_str(&line)?);
    }
    Ok(docs)
}

pub fn save_meta(paths: &OutputPaths, meta: &MetaFile) -> Result<()> {
    create_dir_all(&paths.root)?;
    let json = serde_json::to_string_pretty(meta)?;
    write_bytes(paths.meta(), json.as_bytes())
}

pub fn load_meta(paths: &OutputPaths) -> Result<MetaFile> {
    let mut f = File::open(paths.meta())?;
    let mut buf = String::new();
    f.read_to_string(&mut buf)?;
    let meta: MetaFile = serde_json::from_str(&buf)?;
    Ok(meta)
}
