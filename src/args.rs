// src/args.rs
use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueHint};

use crate::options::{OutputFormat, SortKey};

#[derive(Parser, Debug)]
#[command(
    name = "textfolio",
    version,
    about = "Folder text statistics, a reversible XOR locker, and enriched CSV reports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze the .txt files of a folder
    Analyze(AnalyzeArgs),
    /// Obfuscate text with a key-cycling XOR transform
    Lock(LockerArgs),
    /// Reverse a lock with the same key
    Unlock(LockerArgs),
    /// Generate the sentiment/complexity CSV report for a folder
    Report(ReportArgs),
}

#[derive(ClapArgs, Debug)]
pub struct AnalyzeArgs {
    /// Folder containing the .txt files
    #[arg(value_hint = ValueHint::DirPath)]
    pub folder: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Sort key
    #[arg(long, value_enum, default_value = "name")]
    pub sort: SortKey,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Worker threads (default: all cores)
    #[arg(long)]
    pub jobs: Option<usize>,
}

#[derive(ClapArgs, Debug)]
#[command(group(
    clap::ArgGroup::new("source")
        .args(["text", "input"])
        .required(true)
))]
pub struct LockerArgs {
    /// Text to transform (base64 when unlocking)
    pub text: Option<String>,

    /// Transform key; an empty key leaves the input unchanged
    #[arg(long, short)]
    pub key: String,

    /// Read raw bytes from this file instead of TEXT
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Write raw bytes to this file instead of stdout
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct ReportArgs {
    /// Folder containing the .txt files
    #[arg(value_hint = ValueHint::DirPath)]
    pub folder: PathBuf,

    /// Write the CSV here instead of stdout
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Worker threads (default: all cores)
    #[arg(long)]
    pub jobs: Option<usize>,
}
