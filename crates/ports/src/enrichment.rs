// crates/ports/src/enrichment.rs
use serde::{Deserialize, Serialize};
use textfolio_domain::FileStats;
use textfolio_shared_kernel::Result;

/// The projection of per-file statistics handed to the enrichment
/// collaborator. Character count is deliberately absent from the report shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRecord {
    pub filename: String,
    pub word_count: usize,
    pub line_count: usize,
    pub unique_words: usize,
    pub avg_word_length: f64,
}

impl From<&FileStats> for ReportRecord {
    fn from(stats: &FileStats) -> Self {
        Self {
            filename: stats.filename.clone(),
            word_count: stats.words.value(),
            line_count: stats.lines.value(),
            unique_words: stats.unique_words.value(),
            avg_word_length: stats.avg_word_length.value(),
        }
    }
}

/// Sentiment and complexity labels for one file, as produced by the
/// collaborator. Opaque strings; the core never interprets them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLabels {
    pub sentiment: String,
    pub complexity: String,
}

/// Port for the external enrichment collaborator.
///
/// Input is the ordered record batch plus a folder identifier; output is one
/// label pair per record, in the same order.
pub trait Enricher: Send + Sync {
    fn enrich(&self, folder: &str, records: &[ReportRecord]) -> Result<Vec<FileLabels>>;
}
