//! The version-control collaborator seam.

use lexis_core::Result;
use tracing::debug;

use crate::revision::Revision;

/// Read access to a commit-addressable file history.
///
/// Implementors provide the raw lookups. [`RevisionStore::fetch_file_at`]
/// layers the "missing means empty" policy on top of [`RevisionStore::read_blob`].
pub trait RevisionStore {
    /// Head of the current branch.
    ///
    /// # Errors
    ///
    /// Returns [`lexis_core::LexisError::Git`] when there is no head commit.
    fn latest_revision(&self) -> Result<Revision>;

    /// Revisions that changed `path`, newest first. May be empty.
    fn revisions_touching(&self, path: &str) -> Result<Vec<Revision>>;

    /// Raw bytes of `path` at `revision`.
    ///
    /// # Errors
    ///
    /// Returns [`lexis_core::LexisError::RevisionNotFound`] when the revision
    /// does not resolve, [`lexis_core::LexisError::PathNotFound`] when the
    /// path is absent from it, and any other variant for real read failures.
    fn read_blob(&self, revision: &Revision, path: &str) -> Result<Vec<u8>>;

    /// Text of `path` at `revision`, or `""` when either does not exist.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    ///
    /// # Errors
    ///
    /// Only failures other than "not found" propagate.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexis_history::{MemoryStore, Revision, RevisionStore};
    ///
    /// let mut store = MemoryStore::new();
    /// store.commit("r1", [("document.txt", "hello")]);
    ///
    /// let r1 = Revision::new("r1");
    /// assert_eq!(store.fetch_file_at(&r1, "document.txt").unwrap(), "hello");
    /// assert_eq!(store.fetch_file_at(&r1, "other.txt").unwrap(), "");
    /// assert_eq!(store.fetch_file_at(&Revision::new("nope"), "document.txt").unwrap(), "");
    /// ```
    fn fetch_file_at(&self, revision: &Revision, path: &str) -> Result<String> {
        match self.read_blob(revision, path) {
            Ok(bytes) => {
                debug!(%revision, path, bytes = bytes.len(), "fetched file content");
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            Err(e) if e.is_not_found() => {
                debug!(%revision, path, reason = %e, "no content, treating as empty");
                Ok(String::new())
            }
            Err(e) => Err(e),
        }
    }
}
