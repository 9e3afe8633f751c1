//! # textfolio
//!
//! Text statistics over a folder of `.txt` files, a reversible XOR locker,
//! and an enriched CSV report. The heavy lifting lives in the workspace
//! crates; this crate is the CLI surface and output rendering.

// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod args;
pub mod options;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
