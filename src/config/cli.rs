use crate::core::WordSource;
use crate::domain::model::WordList;
use crate::utils::error::{PassgenError, Result};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-backed word source. The expected format is one entry per line,
/// `<index><TAB><word>`; the index is ignored, the word is trimmed.
#[derive(Debug, Clone)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileWordSource {
    fn load(&self) -> Result<WordList> {
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound | ErrorKind::PermissionDenied => PassgenError::NotFoundError {
                path: self.path.display().to_string(),
            },
            _ => PassgenError::IoError(e),
        })?;

        // Tab-delimited, no header row. Quoting is disabled so words may
        // contain quote characters; flexible lets the field-count check below
        // report the offending line instead of a generic length error.
        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .quoting(false)
            .flexible(true)
            .from_reader(file);

        let mut words = Vec::new();
        for (i, record) in reader.records().enumerate() {
            let record = record?;
            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or((i + 1) as u64);

            if record.len() != 2 {
                return Err(PassgenError::FormatError {
                    path: self.path.display().to_string(),
                    line,
                    reason: format!(
                        "expected '<index><TAB><word>', found {} field(s)",
                        record.len()
                    ),
                });
            }

            words.push(record[1].trim().to_string());
        }

        tracing::debug!("Imported {} words from {}", words.len(), self.path.display());
        Ok(WordList::new(words))
    }
}
