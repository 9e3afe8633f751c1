// crates/usecase/src/report.rs
use textfolio_domain::FileStats;
use textfolio_ports::enrichment::{Enricher, ReportRecord};
use textfolio_shared_kernel::{ApplicationError, ErrorContext, Result};

pub const CSV_HEADER: &str =
    "Filename,Word Count,Line Count,Unique Words,Avg Word Length,Sentiment,Complexity";

/// Build the enriched CSV report for a batch of per-file statistics.
///
/// The record order is preserved end to end: the enricher receives the rows
/// in input order and must answer with one label pair per row, in the same
/// order. Fields are joined with literal commas and no quoting, so embedded
/// commas in a filename or label shift the columns of that row.
pub struct BuildReport<'a> {
    enricher: &'a dyn Enricher,
}

impl<'a> BuildReport<'a> {
    pub fn new(enricher: &'a dyn Enricher) -> Self {
        Self { enricher }
    }

    pub fn run(&self, folder: &str, stats: &[FileStats]) -> Result<String> {
        if stats.is_empty() {
            return Err(ApplicationError::EmptyReportInput.into());
        }

        let records: Vec<ReportRecord> = stats.iter().map(ReportRecord::from).collect();
        let labels =
            self.enricher.enrich(folder, &records).context("invoking the enrichment collaborator")?;
        if labels.len() != records.len() {
            return Err(ApplicationError::EnrichmentFailed {
                reason: format!(
                    "expected {} label pairs, collaborator returned {}",
                    records.len(),
                    labels.len()
                ),
                source: None,
            }
            .into());
        }

        let mut lines = Vec::with_capacity(records.len() + 1);
        lines.push(CSV_HEADER.to_owned());
        for (record, label) in records.iter().zip(&labels) {
            lines.push(format!(
                "{},{},{},{},{},{},{}",
                record.filename,
                record.word_count,
                record.line_count,
                record.unique_words,
                record.avg_word_length,
                label.sentiment,
                label.complexity
            ));
        }
        Ok(lines.join("\n"))
    }
}
