// src/presentation.rs
use std::cmp::Ordering;
use std::fmt::Write;

use anyhow::Result;
use serde::Serialize;
use textfolio_domain::{FileStats, Summary};
use textfolio_shared_kernel::InfrastructureError;

use crate::options::{OutputFormat, SortKey};

pub fn sort_stats(stats: &mut [FileStats], key: SortKey, desc: bool) {
    stats.sort_by(|a, b| {
        let order = match key {
            SortKey::Name => a.filename.cmp(&b.filename),
            SortKey::Words => a.words.cmp(&b.words),
            SortKey::Lines => a.lines.cmp(&b.lines),
            SortKey::Chars => a.chars.cmp(&b.chars),
        };
        // Equal keys fall back to name order.
        let order = if order == Ordering::Equal { a.filename.cmp(&b.filename) } else { order };
        if desc { order.reverse() } else { order }
    });
}

pub fn print_stats(folder: &str, stats: &[FileStats], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print!("{}", render_table(folder, stats)),
        OutputFormat::Csv => print!("{}", render_delimited(stats, ',')),
        OutputFormat::Tsv => print!("{}", render_delimited(stats, '\t')),
        OutputFormat::Json => println!("{}", render_json(folder, stats)?),
    }
    Ok(())
}

fn render_table(folder: &str, stats: &[FileStats]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "textfolio v{} · {folder}", crate::VERSION);
    let _ = writeln!(out);
    let _ = writeln!(out, "    WORDS\t    LINES\t CHARACTERS\t   UNIQUE\t  AVG LEN\tFILE");
    for s in stats {
        let _ = writeln!(
            out,
            "{:>9}\t{:>9}\t{:>11}\t{:>9}\t{:>9}\t{}",
            s.words.value(),
            s.lines.value(),
            s.chars.value(),
            s.unique_words.value(),
            s.avg_word_length.value(),
            s.filename
        );
    }
    let summary = Summary::from_stats(stats);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} files, {} words, {} lines, {} characters",
        summary.files, summary.words, summary.lines, summary.chars
    );
    out
}

fn render_delimited(stats: &[FileStats], sep: char) -> String {
    let mut out = String::new();
    let header =
        ["filename", "words", "lines", "chars", "unique_words", "avg_word_length"];
    let _ = writeln!(out, "{}", header.join(&sep.to_string()));
    for s in stats {
        let _ = writeln!(
            out,
            "{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}",
            s.filename, s.words, s.lines, s.chars, s.unique_words, s.avg_word_length
        );
    }
    out
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    version: &'static str,
    folder: &'a str,
    files: &'a [FileStats],
    summary: Summary,
}

fn render_json(folder: &str, stats: &[FileStats]) -> Result<String> {
    let output = JsonOutput {
        version: crate::VERSION,
        folder,
        files: stats,
        summary: Summary::from_stats(stats),
    };
    Ok(serde_json::to_string_pretty(&output).map_err(InfrastructureError::from)?)
}
