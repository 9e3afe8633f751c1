// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, ApplicationResult, ErrorContext, InfraResult, InfrastructureError,
    PresentationError, PresentationResult, Result, TextfolioError,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{AvgWordLength, CharCount, LineCount, UniqueWordCount, WordCount};
