//! Text analysis: tokenization, word frequencies, and vocabulary diffs.
//!
//! Turns raw text into lowercase word tokens, counts them in
//! first-occurrence order, summarizes the counts, and compares the
//! vocabularies of two snapshots.

pub mod diff;
pub mod frequency;
pub mod tokenize;

pub use diff::{diff, VocabularyDiff};
pub use frequency::{frequency, summarize, Statistics, WordFrequency};
pub use tokenize::tokenize;
