//! Git-backed revision store via git2.
//!
//! Opens a repository once and serves head lookup, path history, and
//! file-at-revision reads from it.

use std::collections::{BinaryHeap, HashSet};
use std::path::{Path, PathBuf};

use git2::{Commit, ErrorCode, ObjectType, Oid, Repository};
use lexis_core::{LexisError, Result};
use tracing::debug;

use crate::revision::Revision;
use crate::store::RevisionStore;

/// A git repository opened for reading.
///
/// The handle is owned by the caller and passed to whatever needs it; there
/// is no process-wide repository.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use lexis_history::{GitStore, RevisionStore};
///
/// let store = GitStore::open(Path::new(".")).unwrap();
/// let head = store.latest_revision().unwrap();
/// let text = store.fetch_file_at(&head, "document.txt").unwrap();
/// println!("{head}: {} bytes", text.len());
/// ```
pub struct GitStore {
    repo: Repository,
}

impl GitStore {
    /// Open the repository containing `path`, searching parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`LexisError::RepositoryNotFound`] if no repository is found.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path).map_err(|e| LexisError::RepositoryNotFound {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })?;
        debug!(git_dir = %repo.path().display(), "opened repository");
        Ok(Self { repo })
    }

    /// Working directory of the repository, if it is not bare.
    pub fn workdir(&self) -> Option<PathBuf> {
        self.repo.workdir().map(Path::to_path_buf)
    }

    fn find_commit(&self, revision: &Revision) -> Result<Commit<'_>> {
        self.repo
            .revparse_single(revision.as_str())
            .and_then(|object| object.peel_to_commit())
            .map_err(|_| LexisError::RevisionNotFound(revision.to_string()))
    }

    /// Blob id of `path` in `commit`'s tree, `None` when absent or not a file.
    fn entry_id(&self, commit: &Commit<'_>, path: &Path) -> Result<Option<Oid>> {
        let tree = commit
            .tree()
            .map_err(|e| LexisError::Git(format!("failed to get commit tree: {e}")))?;
        match tree.get_path(path) {
            Ok(entry) if entry.kind() == Some(ObjectType::Blob) => Ok(Some(entry.id())),
            Ok(_) => Ok(None),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
            Err(e) => Err(LexisError::Git(format!(
                "failed to look up {}: {e}",
                path.display()
            ))),
        }
    }
}

impl RevisionStore for GitStore {
    fn latest_revision(&self) -> Result<Revision> {
        let head = self
            .repo
            .head()
            .map_err(|e| LexisError::Git(format!("failed to resolve HEAD: {}", e.message())))?;
        let commit = head
            .peel_to_commit()
            .map_err(|e| LexisError::Git(format!("HEAD is not a commit: {}", e.message())))?;
        Ok(Revision::from(commit.id()))
    }

    /// Walks from HEAD with git's default history simplification: a commit
    /// whose file matches one of its parents is skipped, and only that parent
    /// is followed, so side-branch edits a merge discarded never appear.
    fn revisions_touching(&self, path: &str) -> Result<Vec<Revision>> {
        let path = normalize_path(path);

        let head = self
            .repo
            .head()
            .and_then(|head| head.peel_to_commit())
            .map_err(|e| LexisError::Git(format!("failed to resolve HEAD: {}", e.message())))?;

        let mut frontier: BinaryHeap<(i64, Oid)> = BinaryHeap::new();
        let mut queued: HashSet<Oid> = HashSet::new();
        frontier.push((head.time().seconds(), head.id()));
        queued.insert(head.id());

        let mut touched = Vec::new();
        while let Some((_, oid)) = frontier.pop() {
            let commit = self
                .repo
                .find_commit(oid)
                .map_err(|e| LexisError::Git(format!("failed to find commit: {e}")))?;
            let current = self.entry_id(&commit, &path)?;

            let mut same_parent = None;
            for parent in commit.parents() {
                if self.entry_id(&parent, &path)? == current {
                    same_parent = Some(parent);
                    break;
                }
            }

            let next: Vec<Commit<'_>> = match same_parent {
                Some(parent) => vec![parent],
                None => {
                    if commit.parent_count() > 0 || current.is_some() {
                        touched.push(Revision::from(oid));
                    }
                    commit.parents().collect()
                }
            };

            for parent in next {
                if queued.insert(parent.id()) {
                    frontier.push((parent.time().seconds(), parent.id()));
                }
            }
        }

        debug!(path = %path.display(), revisions = touched.len(), "collected path history");
        Ok(touched)
    }

    fn read_blob(&self, revision: &Revision, path: &str) -> Result<Vec<u8>> {
        let commit = self.find_commit(revision)?;
        let path = normalize_path(path);
        let not_found = || LexisError::PathNotFound {
            revision: revision.to_string(),
            path: path.display().to_string(),
        };

        let Some(id) = self.entry_id(&commit, &path)? else {
            return Err(not_found());
        };
        let blob = self
            .repo
            .find_blob(id)
            .map_err(|e| LexisError::Git(format!("failed to read blob {id}: {e}")))?;
        Ok(blob.content().to_vec())
    }
}

/// Repo-relative path with `./` prefixes and backslashes removed.
fn normalize_path(path: &str) -> PathBuf {
    let unified = path.replace('\\', "/");
    let trimmed = unified.trim_start_matches("./").trim_start_matches('/');
    PathBuf::from(trimmed)
}
