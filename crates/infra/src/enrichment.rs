// crates/infra/src/enrichment.rs
use textfolio_ports::enrichment::{Enricher, FileLabels, ReportRecord};
use textfolio_shared_kernel::Result;

/// Deterministic enrichment adapter.
///
/// Stands in for the external sentiment/complexity service and answers every
/// record with the same fixed label pair. The real collaborator would be
/// another [`Enricher`] implementation; nothing above this layer can tell the
/// difference.
#[derive(Debug, Clone)]
pub struct StaticEnricher {
    sentiment: String,
    complexity: String,
}

impl StaticEnricher {
    pub fn new(sentiment: impl Into<String>, complexity: impl Into<String>) -> Self {
        Self { sentiment: sentiment.into(), complexity: complexity.into() }
    }
}

impl Default for StaticEnricher {
    fn default() -> Self {
        Self::new("neutral", "moderate")
    }
}

impl Enricher for StaticEnricher {
    fn enrich(&self, folder: &str, records: &[ReportRecord]) -> Result<Vec<FileLabels>> {
        log::debug!("labeling {} records from '{folder}'", records.len());
        Ok(records
            .iter()
            .map(|_| FileLabels {
                sentiment: self.sentiment.clone(),
                complexity: self.complexity.clone(),
            })
            .collect())
    }
}
