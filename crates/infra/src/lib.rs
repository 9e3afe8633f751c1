//! # Infrastructure
//!
//! Adapters behind the port traits plus the file I/O helpers:
//!
//! - [`filesystem`]: Disk-backed [`textfolio_ports::filesystem::TextFileSource`]
//! - [`analysis`]: Batch analysis runner, optionally parallel
//! - [`enrichment`]: Deterministic stand-in for the external collaborator
//! - [`persistence`]: File read/write helpers

// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod analysis;
pub mod enrichment;
pub mod filesystem;
pub mod persistence;
