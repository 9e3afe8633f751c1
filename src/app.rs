// src/app.rs
use anyhow::{Context, Result};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use textfolio_domain::XorCipher;
use textfolio_infra::{
    analysis::analyze_entries,
    enrichment::StaticEnricher,
    filesystem::DiskTextFileSource,
    persistence::{FileReader, FileWriter},
};
use textfolio_shared_kernel::PresentationError;
use textfolio_usecase::{BuildReport, ScanFolder};

use crate::args::{AnalyzeArgs, Cli, Command, LockerArgs, ReportArgs};
use crate::presentation;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Analyze(args) => run_analyze(&args),
        Command::Lock(args) => run_locker(&args, Direction::Lock),
        Command::Unlock(args) => run_locker(&args, Direction::Unlock),
        Command::Report(args) => run_report(&args),
    }
}

fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    let source = DiskTextFileSource::new();
    let entries = ScanFolder::new(&source).run(&args.folder)?;
    let jobs = args.jobs.unwrap_or_else(num_cpus::get);
    log::debug!("analyzing {} files with {jobs} workers", entries.len());

    let mut stats = analyze_entries(&entries, jobs)?;
    presentation::sort_stats(&mut stats, args.sort, args.desc);
    presentation::print_stats(&args.folder.display().to_string(), &stats, args.format)
}

fn run_report(args: &ReportArgs) -> Result<()> {
    let source = DiskTextFileSource::new();
    let entries = ScanFolder::new(&source).run(&args.folder)?;
    let jobs = args.jobs.unwrap_or_else(num_cpus::get);

    let stats = analyze_entries(&entries, jobs)?;
    let enricher = StaticEnricher::default();
    let csv = BuildReport::new(&enricher).run(&args.folder.display().to_string(), &stats)?;

    match &args.output {
        Some(path) => {
            FileWriter::atomic_write(path, csv.as_bytes())?;
            log::info!("report written to '{}'", path.display());
        }
        None => println!("{csv}"),
    }
    Ok(())
}

/// Lock and unlock run the same transform; they differ only in which side of
/// the text/base64 boundary the terminal-facing value sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Lock,
    Unlock,
}

fn run_locker(args: &LockerArgs, direction: Direction) -> Result<()> {
    let data = locker_input(args, direction)?;
    let transformed = XorCipher::new(&args.key).apply(&data);
    locker_output(args, direction, transformed)
}

fn locker_input(args: &LockerArgs, direction: Direction) -> Result<Vec<u8>> {
    if let Some(path) = &args.input {
        return FileReader::read_to_end(path)
            .with_context(|| format!("failed to read '{}'", path.display()));
    }

    // The clap group guarantees TEXT is present when --input is absent.
    let text = args.text.as_deref().unwrap_or_default();
    match direction {
        Direction::Lock => Ok(text.as_bytes().to_vec()),
        Direction::Unlock => Ok(BASE64.decode(text).map_err(|e| {
            anyhow::Error::new(PresentationError::InvalidValue {
                flag: "TEXT".into(),
                value: text.into(),
                reason: format!("not valid base64: {e}"),
            })
        })?),
    }
}

fn locker_output(args: &LockerArgs, direction: Direction, bytes: Vec<u8>) -> Result<()> {
    if let Some(path) = &args.output {
        FileWriter::atomic_write(path, &bytes)?;
        log::info!("{} bytes written to '{}'", bytes.len(), path.display());
        return Ok(());
    }

    match direction {
        Direction::Lock => println!("{}", BASE64.encode(&bytes)),
        Direction::Unlock => {
            let text = String::from_utf8(bytes).map_err(|_| {
                anyhow::Error::new(PresentationError::InvalidValue {
                    flag: "--key".into(),
                    value: "<provided>".into(),
                    reason: "unlocked bytes are not valid UTF-8 (wrong key?)".into(),
                })
            })?;
            println!("{text}");
        }
    }
    Ok(())
}
