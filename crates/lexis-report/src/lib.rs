//! Orchestration and rendering for lexis reports.
//!
//! [`pipeline`] ties a [`lexis_history::RevisionStore`] to the text
//! analyzer; [`render`] turns the resulting [`pipeline::Report`] into text,
//! JSON, or Markdown.

pub mod pipeline;
pub mod render;

pub use pipeline::{analyze_latest, compare_revisions, run, Comparison, LatestAnalysis, Report};
pub use render::render;
