//! Document enumeration.
//!
//! Only regular files directly inside the corpus directory are documents.
//! Entries are sorted by file name before ids are assigned, so ids do not
//! depend on the platform's directory listing order.

use crate::error::{ConfigError, Result};
use crate::DocId;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct Document {
    pub id: DocId,
    pub path: PathBuf,
}

impl Document {
    /// Read the whole document. Invalid UTF-8 is replaced rather than
    /// rejected; the file handle is closed before this returns.
    pub fn read_text(&self) -> Result<String> {
        let bytes = fs::read(&self.path).map_err(|source| ConfigError::Document { path: self.path.clone(), source })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[derive(Debug, Clone)]
pub struct Corpus {
    pub root: PathBuf,
    pub documents: Vec<Document>,
}

impl Corpus {
    /// Capture the document list of `root`. Fails if `root` is not a directory;
    /// an empty directory gives an empty corpus.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(ConfigError::CorpusNotFound { path: root.to_path_buf() });
        }

        let mut documents = Vec::new();
        let walker = WalkDir::new(root).min_depth(1).max_depth(1).follow_links(true).sort_by_file_name();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // a dangling symlink inside the corpus
                Err(err) if err.depth() > 0 && err.io_error().map(|e| e.kind()) == Some(io::ErrorKind::NotFound) => {
                    tracing::warn!(path = ?err.path(), "skipping unreadable corpus entry");
                    continue;
                }
                Err(source) => return Err(ConfigError::CorpusListing { path: root.to_path_buf(), source }),
            };
            if !entry.file_type().is_file() {
                tracing::debug!(path = %entry.path().display(), "skipping non-file entry");
                continue;
            }
            let id = documents.len() as DocId;
            documents.push(Document { id, path: entry.into_path() });
        }

        if documents.is_empty() {
            tracing::warn!(path = %root.display(), "corpus directory has no documents");
        }
        Ok(Self { root: root.to_path_buf(), documents })
    }

    pub fn len(&self) -> usize { self.documents.len() }

    pub fn is_empty(&self) -> bool { self.documents.is_empty() }
}
