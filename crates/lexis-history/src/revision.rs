use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a repository snapshot (a full commit hash for git).
///
/// # Examples
///
/// ```
/// use lexis_history::Revision;
///
/// let rev = Revision::new("3f2a9c1d0b8e7f6a5b4c3d2e1f0a9b8c7d6e5f4a");
/// assert_eq!(rev.short(), "3f2a9c1");
/// assert_eq!(rev.to_string(), rev.as_str());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Revision(String);

impl Revision {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First seven characters, the usual abbreviated form.
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(7) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<git2::Oid> for Revision {
    fn from(oid: git2::Oid) -> Self {
        Self(oid.to_string())
    }
}

impl From<&str> for Revision {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_form_of_short_id_is_whole_id() {
        assert_eq!(Revision::new("abc").short(), "abc");
        assert_eq!(Revision::new("").short(), "");
    }

    #[test]
    fn from_oid_is_full_hex() {
        let oid = git2::Oid::from_str("0123456789abcdef0123456789abcdef01234567").unwrap();
        let rev = Revision::from(oid);
        assert_eq!(rev.as_str().len(), 40);
        assert_eq!(rev.short(), "0123456");
    }
}
