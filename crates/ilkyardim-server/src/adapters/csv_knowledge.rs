//! CSV Knowledge Base
//!
//! Reads the `keyword,response` table from disk on every lookup, so edits
//! to the file take effect without a restart.

use async_trait::async_trait;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use ilkyardim::{DomainError, KnowledgeBase, KnowledgeEntry};

const KEYWORD_COLUMN: &str = "keyword";
const RESPONSE_COLUMN: &str = "response";

#[derive(Deserialize)]
struct Row {
    keyword: String,
    response: String,
}

/// File-backed implementation of KnowledgeBase
pub struct CsvKnowledgeBase {
    path: PathBuf,
}

impl CsvKnowledgeBase {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl KnowledgeBase for CsvKnowledgeBase {
    async fn entries(&self) -> Result<Vec<KnowledgeEntry>, DomainError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(DomainError::KnowledgeBase(format!(
                    "CSV file not found: {}",
                    self.path.display()
                )));
            }
            Err(e) => {
                return Err(DomainError::KnowledgeBase(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        parse_entries(&bytes)
    }
}

/// Parse CSV bytes into entries, in file order. Rows that fail to parse
/// are logged and skipped.
fn parse_entries(bytes: &[u8]) -> Result<Vec<KnowledgeEntry>, DomainError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| DomainError::KnowledgeBase(format!("Unreadable CSV header: {e}")))?;
    for column in [KEYWORD_COLUMN, RESPONSE_COLUMN] {
        if !headers.iter().any(|h| h == column) {
            return Err(DomainError::KnowledgeBase(format!(
                "CSV header is missing the '{column}' column"
            )));
        }
    }

    let mut entries = Vec::new();
    for record in reader.deserialize::<Row>() {
        match record {
            Ok(row) => entries.push(KnowledgeEntry::new(row.keyword, row.response)),
            Err(e) => tracing::warn!("Skipping malformed knowledge row: {}", e),
        }
    }

    Ok(entries)
}
