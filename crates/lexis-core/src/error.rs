use std::path::PathBuf;

use miette::Diagnostic;

/// Errors that can occur across lexis.
///
/// Library crates use this type directly; the binary converts to
/// `miette::Report` at the boundary.
///
/// [`LexisError::RevisionNotFound`] and [`LexisError::PathNotFound`] are the
/// two lookup failures a content read treats as "no content". Everything else
/// is a real failure.
///
/// # Examples
///
/// ```
/// use lexis_core::LexisError;
///
/// let err = LexisError::PathNotFound {
///     revision: "abc123".into(),
///     path: "document.txt".into(),
/// };
/// assert!(err.is_not_found());
/// assert!(err.to_string().contains("document.txt"));
/// ```
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum LexisError {
    /// Filesystem I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or unreadable configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Git operation failure.
    #[error("git error: {0}")]
    Git(String),

    /// No repository at or above the given directory.
    #[error("failed to open repository at {}: {message}", .path.display())]
    #[diagnostic(help("run lexis from inside a git repository, or pass --path to one"))]
    RepositoryNotFound {
        /// Directory the search started from.
        path: PathBuf,
        /// Underlying git2 message.
        message: String,
    },

    /// The revision does not resolve to a commit.
    #[error("revision not found: {0}")]
    RevisionNotFound(String),

    /// The path does not exist in the given revision's tree.
    #[error("path '{path}' not found at revision {revision}")]
    PathNotFound {
        /// Revision that was searched.
        revision: String,
        /// Repo-relative path that was missing.
        path: String,
    },

    /// JSON serialization failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML deserialization failure.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A required file was not found.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),
}

impl LexisError {
    /// Whether this error means "nothing at that revision/path" rather than
    /// a broken repository.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LexisError::RevisionNotFound(_) | LexisError::PathNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: LexisError = io_err.into();
        assert!(err.to_string().contains("gone"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn git_error_displays_message() {
        let err = LexisError::Git("failed to open repository".into());
        assert_eq!(err.to_string(), "git error: failed to open repository");
        assert!(!err.is_not_found());
    }

    #[test]
    fn only_open_failure_carries_repository_hint() {
        let open = LexisError::RepositoryNotFound {
            path: PathBuf::from("/tmp/elsewhere"),
            message: "could not find repository".into(),
        };
        assert!(open.to_string().contains("/tmp/elsewhere"));
        assert!(open.help().is_some());
        assert!(!open.is_not_found());

        let head = LexisError::Git("failed to resolve HEAD: reference not found".into());
        assert!(head.help().is_none());
    }

    #[test]
    fn lookup_errors_are_not_found() {
        assert!(LexisError::RevisionNotFound("deadbeef".into()).is_not_found());
        assert!(LexisError::PathNotFound {
            revision: "deadbeef".into(),
            path: "a.txt".into(),
        }
        .is_not_found());
    }

    #[test]
    fn path_not_found_shows_revision_and_path() {
        let err = LexisError::PathNotFound {
            revision: "0123abc".into(),
            path: "notes/doc.txt".into(),
        };
        assert_eq!(
            err.to_string(),
            "path 'notes/doc.txt' not found at revision 0123abc"
        );
    }

    #[test]
    fn file_not_found_shows_path() {
        let err = LexisError::FileNotFound(PathBuf::from("/tmp/.lexis.toml"));
        assert!(err.to_string().contains("/tmp/.lexis.toml"));
    }
}
