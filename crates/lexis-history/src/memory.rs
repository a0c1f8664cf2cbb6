//! In-memory revision store.

use std::collections::BTreeMap;

use lexis_core::{LexisError, Result};

use crate::revision::Revision;
use crate::store::RevisionStore;

/// A linear history of file snapshots held in memory.
///
/// Each [`MemoryStore::commit`] records the full set of files at a new
/// revision; files not listed are absent from it.
///
/// # Examples
///
/// ```
/// use lexis_history::{MemoryStore, Revision, RevisionStore};
///
/// let mut store = MemoryStore::new();
/// store.commit("r1", [("document.txt", "alpha beta")]);
/// store.commit("r2", [("document.txt", "beta gamma")]);
///
/// assert_eq!(store.latest_revision().unwrap(), Revision::new("r2"));
/// assert_eq!(
///     store.revisions_touching("document.txt").unwrap(),
///     vec![Revision::new("r2"), Revision::new("r1")]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshots: Vec<(Revision, BTreeMap<String, String>)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot on top of the current head.
    pub fn commit<I, P, C>(&mut self, revision: impl Into<Revision>, files: I) -> &mut Self
    where
        I: IntoIterator<Item = (P, C)>,
        P: Into<String>,
        C: Into<String>,
    {
        let files = files
            .into_iter()
            .map(|(path, content)| (path.into(), content.into()))
            .collect();
        self.snapshots.push((revision.into(), files));
        self
    }

    fn snapshot(&self, revision: &Revision) -> Option<&BTreeMap<String, String>> {
        self.snapshots
            .iter()
            .find(|(rev, _)| rev == revision)
            .map(|(_, files)| files)
    }
}

impl RevisionStore for MemoryStore {
    fn latest_revision(&self) -> Result<Revision> {
        self.snapshots
            .last()
            .map(|(rev, _)| rev.clone())
            .ok_or_else(|| LexisError::Git("history has no commits".into()))
    }

    fn revisions_touching(&self, path: &str) -> Result<Vec<Revision>> {
        let mut previous: Option<&String> = None;
        let mut touched = Vec::new();
        for (rev, files) in &self.snapshots {
            let current = files.get(path);
            if current != previous {
                touched.push(rev.clone());
            }
            previous = current;
        }
        touched.reverse();
        Ok(touched)
    }

    fn read_blob(&self, revision: &Revision, path: &str) -> Result<Vec<u8>> {
        let files = self
            .snapshot(revision)
            .ok_or_else(|| LexisError::RevisionNotFound(revision.to_string()))?;
        files
            .get(path)
            .map(|content| content.as_bytes().to_vec())
            .ok_or_else(|| LexisError::PathNotFound {
                revision: revision.to_string(),
                path: path.to_string(),
            })
    }
}
