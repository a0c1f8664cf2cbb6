//! Vocabulary differencing between two snapshots.

use std::collections::BTreeSet;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::frequency::WordFrequency;

/// Tokens that appeared and disappeared between two snapshots.
///
/// Only presence matters; counts are ignored. Sets are sorted so output is
/// stable. The serialized `addedCount`/`removedCount` are always the current
/// set sizes.
///
/// # Examples
///
/// ```
/// use lexis_vocab::{diff, frequency};
///
/// let d = diff(&frequency("alpha beta"), &frequency("beta gamma"));
/// assert_eq!(d.added_count(), 1);
/// assert_eq!(d.removed_count(), 1);
/// assert!(d.added.contains("gamma"));
/// assert!(d.removed.contains("alpha"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabularyDiff {
    /// Tokens in the newer snapshot only.
    pub added: BTreeSet<String>,
    /// Tokens in the older snapshot only.
    pub removed: BTreeSet<String>,
}

impl VocabularyDiff {
    /// Build a diff from explicit sets.
    pub fn new(added: BTreeSet<String>, removed: BTreeSet<String>) -> Self {
        Self { added, removed }
    }

    pub fn added_count(&self) -> usize {
        self.added.len()
    }

    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }

    /// True when both snapshots share the same vocabulary.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    /// The diff in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self::new(self.removed.clone(), self.added.clone())
    }
}

impl Serialize for VocabularyDiff {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("VocabularyDiff", 4)?;
        state.serialize_field("added", &self.added)?;
        state.serialize_field("removed", &self.removed)?;
        state.serialize_field("addedCount", &self.added_count())?;
        state.serialize_field("removedCount", &self.removed_count())?;
        state.end()
    }
}

/// Compare the vocabularies of `older` and `newer`.
pub fn diff(older: &WordFrequency, newer: &WordFrequency) -> VocabularyDiff {
    let added = newer
        .vocabulary()
        .filter(|token| !older.contains(token))
        .map(str::to_string)
        .collect();
    let removed = older
        .vocabulary()
        .filter(|token| !newer.contains(token))
        .map(str::to_string)
        .collect();
    VocabularyDiff::new(added, removed)
}
