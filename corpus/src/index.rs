use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Position of a record in the document collection (ingestion order across all files).
pub type Position = usize;
/// Arrival sequence of a record within its cluster.
pub type Order = i64;

/// A `cluster_id` or `post_id`: the input carries either JSON strings or integers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Int(i64),
    Str(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Int(n) => write!(f, "{n}"),
            Identifier::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Identifier {
    fn from(n: i64) -> Self { Identifier::Int(n) }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self { Identifier::Str(s.to_string()) }
}

/// One line of input. Every field is required and unknown fields are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentRecord {
    pub corpus: String,
    pub cluster_id: Identifier,
    pub post_id: Identifier,
    pub order: Order,
    pub body_text: String,
    pub novelty: bool,
}

pub type ClusterSet = BTreeSet<Identifier>;

/// cluster_id -> {(order, position)}; position indexes the document collection.
pub type OrderIndex = BTreeMap<Identifier, BTreeSet<(Order, Position)>>;
