//! Rendering of the summary and top-term table.
//!
//! The report is rendered to a `String` in full before anything is printed,
//! so a failure never leaves a partial report on stdout.

use crate::analysis::Analysis;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

pub const DEFAULT_TOP_N: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    pub top_n: usize,
    /// Divide the average by `documents + 1`.
    pub legacy_average: bool,
    /// Fixed decimals for floating columns; shortest round-trip form if unset.
    pub precision: Option<usize>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { top_n: DEFAULT_TOP_N, legacy_average: false, precision: None }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermRow {
    pub term: String,
    pub tf: u64,
    pub df: usize,
    pub idf: f64,
    pub tf_idf: f64,
    pub probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub document_count: usize,
    pub total_word_count: u64,
    pub unique_term_count: usize,
    pub single_occurrence_count: usize,
    pub average_words_per_document: f64,
    pub rows: Vec<TermRow>,
    #[serde(skip)]
    precision: Option<usize>,
}

impl Report {
    pub fn build(analysis: &Analysis, options: &ReportOptions) -> Self {
        let rows = analysis
            .ranked()
            .into_iter()
            .take(options.top_n)
            .map(|rec| {
                let idf = analysis.idf(rec);
                let tf = rec.count;
                TermRow {
                    term: rec.term.clone(),
                    tf,
                    df: rec.df(),
                    idf,
                    tf_idf: tf as f64 * idf,
                    probability: analysis.probability(rec),
                }
            })
            .collect();
        Self {
            document_count: analysis.document_count,
            total_word_count: analysis.total_word_count,
            unique_term_count: analysis.unique_term_count(),
            single_occurrence_count: analysis.single_occurrence_count(),
            average_words_per_document: analysis.average_words_per_document(options.legacy_average),
            rows,
            precision: options.precision,
        }
    }

    fn num(&self, v: f64) -> String {
        match self.precision {
            Some(p) => format!("{v:.p$}"),
            None => format!("{v}"),
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out).expect("writing to a String");
        out
    }

    fn write_text(&self, out: &mut String) -> fmt::Result {
        writeln!(out, "Total number of words in all documents: {}", self.total_word_count)?;
        writeln!(out, "Total number of unique words: {}", self.unique_term_count)?;
        writeln!(out, "Words with only 1 occurrence across all documents: {}", self.single_occurrence_count)?;
        writeln!(out, "Average words per document: {}", self.num(self.average_words_per_document))?;
        writeln!(out)?;
        writeln!(out, "WORD\tTF\tIDF\tTF*IDF\tProbability")?;
        for row in &self.rows {
            writeln!(
                out,
                "{}\t{}\t{}\t{}\t{}",
                row.term,
                row.tf,
                self.num(row.idf),
                self.num(row.tf_idf),
                self.num(row.probability)
            )?;
        }
        Ok(())
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
