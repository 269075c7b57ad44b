use crate::corpus::Corpus;
use crate::error::Result;
use crate::stemmer::{StemmerKind, TermStemmer};
use crate::stopwords::StopwordSet;
use crate::tokenizer::{normalize, raw_tokens};
use crate::{DocId, TermRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerOptions {
    pub stemmer: StemmerKind,
    /// NFKD-decompose tokens before stripping non-word characters.
    pub fold_diacritics: bool,
    /// Filter the stemmed form of each stopword as well as the surface form.
    pub stem_stopwords: bool,
}

/// Turns documents into per-term aggregates.
pub struct Analyzer {
    stemmer: TermStemmer,
    stopwords: StopwordSet,
    fold_diacritics: bool,
}

impl Analyzer {
    pub fn new(stopwords: StopwordSet, options: &AnalyzerOptions) -> Self {
        let stemmer = TermStemmer::new(options.stemmer);
        let stopwords = if options.stem_stopwords { stopwords.with_stems(&stemmer) } else { stopwords };
        Self { stemmer, stopwords, fold_diacritics: options.fold_diacritics }
    }

    pub fn from_stopwords_file<P: AsRef<Path>>(path: P, options: &AnalyzerOptions) -> Result<Self> {
        let stopwords = StopwordSet::load(path, options.fold_diacritics)?;
        Ok(Self::new(stopwords, options))
    }

    /// Normalize and stem one raw token; `None` if it is empty or a stopword.
    pub fn analyze_token(&self, raw: &str) -> Option<String> {
        let normalized = normalize(raw, self.fold_diacritics);
        let term = self.stemmer.stem(&normalized).into_owned();
        if term.is_empty() || self.stopwords.contains(&term) {
            return None;
        }
        Some(term)
    }

    /// Read and aggregate every document of `corpus` in id order.
    pub fn analyze_corpus(&self, corpus: &Corpus) -> Result<Analysis> {
        let mut acc = Accumulator::default();
        for doc in &corpus.documents {
            let text = doc.read_text()?;
            let words = self.ingest(&mut acc, doc.id, &text);
            tracing::debug!(doc_id = doc.id, path = %doc.path.display(), words, "ingested document");
        }
        let analysis = acc.finish(corpus.len());
        tracing::info!(num_docs = analysis.document_count, num_terms = analysis.terms.len(), total_words = analysis.total_word_count, "aggregated corpus");
        Ok(analysis)
    }

    /// Aggregate in-memory documents; the i-th text gets document id i.
    pub fn analyze_texts<I, S>(&self, texts: I) -> Analysis
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut acc = Accumulator::default();
        let mut n = 0;
        for (i, text) in texts.into_iter().enumerate() {
            self.ingest(&mut acc, i as DocId, text.as_ref());
            n += 1;
        }
        acc.finish(n)
    }

    fn ingest(&self, acc: &mut Accumulator, doc_id: DocId, text: &str) -> u64 {
        let mut words = 0;
        for raw in raw_tokens(text) {
            words += 1;
            if let Some(term) = self.analyze_token(raw) {
                acc.add(term, doc_id);
            }
        }
        acc.total_words += words;
        words
    }
}

/// Term table under construction. Records keep first-encounter order.
#[derive(Default)]
struct Accumulator {
    index: HashMap<String, usize>,
    records: Vec<TermRecord>,
    total_words: u64,
}

impl Accumulator {
    fn add(&mut self, term: String, doc_id: DocId) {
        match self.index.get(&term) {
            Some(&i) => self.records[i].record(doc_id),
            None => {
                self.index.insert(term.clone(), self.records.len());
                self.records.push(TermRecord::new(term, doc_id));
            }
        }
    }

    fn finish(self, document_count: usize) -> Analysis {
        Analysis { document_count, total_word_count: self.total_words, terms: self.records, index: self.index }
    }
}

/// Finished aggregates. Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub document_count: usize,
    /// Raw tokens seen, including those filtered out.
    pub total_word_count: u64,
    /// One record per surviving term, in first-encounter order.
    pub terms: Vec<TermRecord>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Analysis {
    pub fn unique_term_count(&self) -> usize { self.terms.len() }

    pub fn single_occurrence_count(&self) -> usize {
        self.terms.iter().filter(|t| t.count == 1).count()
    }

    pub fn term(&self, term: &str) -> Option<&TermRecord> {
        self.index.get(term).map(|&i| &self.terms[i])
    }

    /// All terms by descending count; equal counts keep first-encounter order.
    pub fn ranked(&self) -> Vec<&TermRecord> {
        let mut ranked: Vec<&TermRecord> = self.terms.iter().collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    /// log10(N / df). 0 for a record with no documents.
    pub fn idf(&self, record: &TermRecord) -> f64 {
        let df = record.df();
        if df == 0 {
            return 0.0;
        }
        (self.document_count as f64 / df as f64).log10()
    }

    /// count / total words, or 0 when no words were read.
    pub fn probability(&self, record: &TermRecord) -> f64 {
        if self.total_word_count == 0 {
            return 0.0;
        }
        record.count as f64 / self.total_word_count as f64
    }

    /// Words per document. `legacy` divides by `document_count + 1`.
    pub fn average_words_per_document(&self, legacy: bool) -> f64 {
        let divisor = if legacy { self.document_count + 1 } else { self.document_count };
        if divisor == 0 {
            return 0.0;
        }
        self.total_word_count as f64 / divisor as f64
    }
}
