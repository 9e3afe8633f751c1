// crates/infra/src/analysis.rs
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use textfolio_domain::{FileStats, TextFile, analyze};
use textfolio_shared_kernel::Result;
#[cfg(feature = "parallel")]
use textfolio_shared_kernel::InfrastructureError;

/// Below this batch size the pool setup costs more than it saves.
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 10;

/// Analyze a batch of entries, preserving input order.
///
/// Each file is an independent unit of work; analysis itself cannot fail, so
/// the only error path is pool construction. `jobs` caps the worker count
/// when the `parallel` feature is enabled and is ignored otherwise.
pub fn analyze_entries(entries: &[TextFile], jobs: usize) -> Result<Vec<FileStats>> {
    analyze_all(entries, jobs)
}

#[cfg(feature = "parallel")]
fn analyze_all(entries: &[TextFile], jobs: usize) -> Result<Vec<FileStats>> {
    if entries.len() < PARALLEL_THRESHOLD || jobs == 1 {
        return Ok(analyze_sequential(entries));
    }

    let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build().map_err(|e| {
        InfrastructureError::ThreadPoolCreation { details: e.to_string() }
    })?;

    Ok(pool.install(|| {
        entries.par_iter().map(|entry| analyze(&entry.name, &entry.content)).collect()
    }))
}

#[cfg(not(feature = "parallel"))]
fn analyze_all(entries: &[TextFile], jobs: usize) -> Result<Vec<FileStats>> {
    let _ = jobs;
    Ok(analyze_sequential(entries))
}

fn analyze_sequential(entries: &[TextFile]) -> Vec<FileStats> {
    entries.iter().map(|entry| analyze(&entry.name, &entry.content)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, content: &str) -> TextFile {
        TextFile { path: name.into(), name: name.into(), content: content.into() }
    }

    #[test]
    fn output_order_matches_input_order() {
        let entries: Vec<TextFile> =
            (0..16).map(|i| entry(&format!("{i:02}.txt"), "some words here")).collect();

        let stats = analyze_entries(&entries, 4).expect("analysis succeeds");
        assert_eq!(stats.len(), 16);
        for (stat, entry) in stats.iter().zip(&entries) {
            assert_eq!(stat.filename, entry.name);
            assert_eq!(stat.words.value(), 3);
        }
    }

    #[test]
    fn small_batches_and_single_job_still_work() {
        let entries = vec![entry("a.txt", "one"), entry("b.txt", "one two")];

        let stats = analyze_entries(&entries, 1).expect("analysis succeeds");
        assert_eq!(stats[0].words.value(), 1);
        assert_eq!(stats[1].words.value(), 2);
    }

    #[test]
    fn empty_batch_yields_empty_stats() {
        assert!(analyze_entries(&[], 4).expect("analysis succeeds").is_empty());
    }
}
