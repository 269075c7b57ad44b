use std::io;
use std::path::PathBuf;

/// Fatal input errors. Any of these aborts the run before a report is produced.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Stopwords file is missing or could not be read.
    #[error("cannot read stopwords file {}: {source}", .path.display())]
    Stopwords {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Corpus path does not exist or is not a directory.
    #[error("corpus directory {} does not exist or is not a directory", .path.display())]
    CorpusNotFound { path: PathBuf },
    /// Directory listing failed part way.
    #[error("cannot list corpus directory {}: {source}", .path.display())]
    CorpusListing {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    /// A document was enumerated but could not be opened or read.
    #[error("cannot read document {}: {source}", .path.display())]
    Document {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
