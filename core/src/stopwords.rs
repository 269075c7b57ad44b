//! Stopword set loaded from a whitespace-separated word list.

use crate::error::{ConfigError, Result};
use crate::stemmer::TermStemmer;
use crate::tokenizer::{normalize, raw_tokens};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Read every whitespace-separated entry of `path`. Entries are normalized
    /// the same way document tokens are; entries that normalize to nothing are
    /// dropped.
    pub fn load<P: AsRef<Path>>(path: P, fold_diacritics: bool) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| ConfigError::Stopwords { path: path.to_path_buf(), source })?;
        let text = String::from_utf8_lossy(&bytes);
        let set = Self::from_words(raw_tokens(&text).map(|w| normalize(w, fold_diacritics)));
        tracing::debug!(path = %path.display(), num_stopwords = set.len(), "loaded stopwords");
        Ok(set)
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words.into_iter().map(|w| -> String { w.into() }).filter(|w| !w.is_empty()).collect();
        Self { words }
    }

    /// Also insert the stemmed form of every entry, so stopwords whose stem
    /// differs from the surface form are still caught after stemming.
    pub fn with_stems(mut self, stemmer: &TermStemmer) -> Self {
        let stems: Vec<String> = self
            .words
            .iter()
            .map(|w| stemmer.stem(w).into_owned())
            .filter(|s| !s.is_empty())
            .collect();
        self.words.extend(stems);
        self
    }

    pub fn contains(&self, term: &str) -> bool { self.words.contains(term) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}
