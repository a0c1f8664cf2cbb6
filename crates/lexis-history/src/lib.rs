//! Revision-addressed file access.
//!
//! The [`RevisionStore`] trait is the seam between text analysis and version
//! control: look up the head revision, list the revisions that touched a
//! path, and read a file as it was at a revision. [`GitStore`] backs it with
//! git2; [`MemoryStore`] keeps snapshots in memory.

pub mod git;
pub mod memory;
pub mod revision;
pub mod store;

pub use git::GitStore;
pub use memory::MemoryStore;
pub use revision::Revision;
pub use store::RevisionStore;
