//! Term-frequency statistics over a small fixed corpus.
//!
//! Pipeline: tokenize, normalize, stem, filter stopwords, aggregate, rank, report.

pub mod analysis;
pub mod corpus;
pub mod error;
pub mod report;
pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;

use serde::Serialize;
use std::collections::BTreeSet;

pub use analysis::{Analysis, Analyzer, AnalyzerOptions};
pub use corpus::{Corpus, Document};
pub use error::{ConfigError, Result};
pub use report::{Report, ReportOptions};
pub use stemmer::{StemmerKind, TermStemmer};
pub use stopwords::StopwordSet;

/// 0-based position of a document in the corpus enumeration.
pub type DocId = u32;

/// Aggregate for one distinct term surviving filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermRecord {
    pub term: String,
    /// Occurrences across all documents.
    pub count: u64,
    /// Documents the term occurs in at least once.
    pub documents: BTreeSet<DocId>,
}

impl TermRecord {
    pub fn new(term: String, doc_id: DocId) -> Self {
        Self { term, count: 1, documents: BTreeSet::from([doc_id]) }
    }

    pub fn record(&mut self, doc_id: DocId) {
        self.count += 1;
        self.documents.insert(doc_id);
    }

    /// Number of documents containing the term.
    pub fn df(&self) -> usize { self.documents.len() }
}
