//! Core types, configuration, and error handling for lexis.
//!
//! This crate provides the shared foundation used by the other lexis crates:
//! - [`LexisError`] — unified error type using `thiserror`
//! - [`LexisConfig`] — configuration loaded from `.lexis.toml`
//! - [`OutputFormat`] — report rendering format

mod config;
mod error;
mod types;

pub use config::{AnalysisConfig, LexisConfig, OutputConfig, DEFAULT_CONFIG_FILE, DEFAULT_FILE};
pub use error::LexisError;
pub use types::OutputFormat;

/// A convenience `Result` type for lexis operations.
pub type Result<T> = std::result::Result<T, LexisError>;
