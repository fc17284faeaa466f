pub mod config;
pub mod error;
pub mod escape;
mod index;
pub mod ingest;
pub mod normalize;
pub mod persist;
pub mod pipeline;
pub mod select;
pub mod tokenizer;
pub mod vocab;

pub use error::{CorpusError, Result};
pub use index::*;
