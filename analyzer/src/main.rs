use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use termstat_core::report::DEFAULT_TOP_N;
use termstat_core::tokenizer::normalize;
use termstat_core::{Analyzer, AnalyzerOptions, Corpus, Report, ReportOptions, StemmerKind, TermStemmer};
use tracing_subscriber::{fmt, EnvFilter};

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "termstat")]
#[command(about = "Term frequency, IDF and TF*IDF statistics over a directory of documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a corpus directory and print the top terms
    Report {
        /// Directory of plain-text documents
        #[arg(long, default_value = "src/transcripts/")]
        corpus: PathBuf,
        /// Whitespace-separated stopword list
        #[arg(long, default_value = "src/stopwords.txt")]
        stopwords: PathBuf,
        /// JSON file with analyzer options; flags below override it
        #[arg(long)]
        options: Option<PathBuf>,
        /// Number of table rows
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top: usize,
        /// porter (default), snowball or porter2
        #[arg(long)]
        stemmer: Option<StemmerKind>,
        /// Keep base letters of accented characters
        #[arg(long, default_value_t = false)]
        fold_diacritics: bool,
        /// Also filter stemmed forms of stopwords
        #[arg(long, default_value_t = false)]
        stem_stopwords: bool,
        /// Divide the average by documents + 1 (legacy transcript reports)
        #[arg(long, default_value_t = false)]
        legacy_average: bool,
        /// Fixed decimal places for IDF, TF*IDF and probability
        #[arg(long)]
        precision: Option<usize>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print the normalized stem of each word
    Stem {
        #[arg(long, default_value = "porter")]
        stemmer: StemmerKind,
        #[arg(long, default_value_t = false)]
        fold_diacritics: bool,
        #[arg(required = true)]
        words: Vec<String>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Report { corpus, stopwords, options, top, stemmer, fold_diacritics, stem_stopwords, legacy_average, precision, format } => {
            let mut analyzer_opts = match options {
                Some(path) => load_options(&path)?,
                None => AnalyzerOptions::default(),
            };
            if let Some(s) = stemmer { analyzer_opts.stemmer = s; }
            analyzer_opts.fold_diacritics |= fold_diacritics;
            analyzer_opts.stem_stopwords |= stem_stopwords;
            let report_opts = ReportOptions { top_n: top, legacy_average, precision };
            run_report(&corpus, &stopwords, &analyzer_opts, &report_opts, format)
        }
        Commands::Stem { stemmer, fold_diacritics, words } => {
            let stemmer = TermStemmer::new(stemmer);
            let mut out = String::new();
            for word in &words {
                let normalized = normalize(word, fold_diacritics);
                out.push_str(&format!("{word}\t{}\n", stemmer.stem(&normalized)));
            }
            io::stdout().write_all(out.as_bytes())?;
            Ok(())
        }
    }
}

fn load_options(path: &Path) -> Result<AnalyzerOptions> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading options file {}", path.display()))?;
    let opts = serde_json::from_str(&raw).with_context(|| format!("parsing options file {}", path.display()))?;
    Ok(opts)
}

fn run_report(corpus: &Path, stopwords: &Path, analyzer_opts: &AnalyzerOptions, report_opts: &ReportOptions, format: Format) -> Result<()> {
    let analyzer = Analyzer::from_stopwords_file(stopwords, analyzer_opts).context("loading stopwords")?;
    let corpus = Corpus::open(corpus).context("opening corpus")?;
    tracing::info!(num_docs = corpus.len(), root = %corpus.root.display(), stemmer = ?analyzer_opts.stemmer, "analyzing corpus");

    let analysis = analyzer.analyze_corpus(&corpus).context("reading documents")?;
    let report = Report::build(&analysis, report_opts);
    let rendered = match format {
        Format::Text => report.render_text(),
        Format::Json => {
            let mut s = report.render_json()?;
            s.push('\n');
            s
        }
    };

    io::stdout().write_all(rendered.as_bytes())?;
    Ok(())
}
