use lexis_core::Result;
use lexis_history::{Revision, RevisionStore};
use lexis_vocab::{Statistics, VocabularyDiff, WordFrequency};
use serde::Serialize;
use tracing::debug;

/// Word statistics for the file at the head revision.
///
/// # Examples
///
/// ```
/// use lexis_history::MemoryStore;
/// use lexis_report::analyze_latest;
///
/// let mut store = MemoryStore::new();
/// store.commit("r1", [("document.txt", "to be or not to be")]);
///
/// let latest = analyze_latest(&store, "document.txt").unwrap();
/// assert_eq!(latest.revision.as_str(), "r1");
/// assert_eq!(latest.frequency.get("be"), 2);
/// assert_eq!(latest.statistics.unwrap().total_unique, 4);
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestAnalysis {
    /// Head revision that was analyzed.
    pub revision: Revision,
    /// Token counts in first-occurrence order.
    pub frequency: WordFrequency,
    /// `None` when the file is empty or missing.
    pub statistics: Option<Statistics>,
}

/// Vocabulary change between the two most recent revisions of the file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub older: Revision,
    pub newer: Revision,
    pub diff: VocabularyDiff,
}

/// Everything a run produces.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Repo-relative path of the analyzed file.
    pub path: String,
    pub latest: LatestAnalysis,
    /// Present only when at least two revisions touched the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,
}

/// Analyze `path` at the store's latest revision.
///
/// # Errors
///
/// Fails if the head revision cannot be resolved or the read fails for a
/// reason other than "not found".
pub fn analyze_latest<S>(store: &S, path: &str) -> Result<LatestAnalysis>
where
    S: RevisionStore + ?Sized,
{
    let revision = store.latest_revision()?;
    let text = store.fetch_file_at(&revision, path)?;
    let frequency = WordFrequency::from_text(&text);
    let statistics = frequency.summarize();
    debug!(%revision, unique = frequency.len(), "analyzed latest revision");

    Ok(LatestAnalysis {
        revision,
        frequency,
        statistics,
    })
}

/// Diff the vocabulary of `path` between `older` and `newer`.
///
/// A revision where the file is missing contributes an empty vocabulary.
///
/// # Examples
///
/// ```
/// use lexis_history::{MemoryStore, Revision};
/// use lexis_report::compare_revisions;
///
/// let mut store = MemoryStore::new();
/// store.commit("a", [("document.txt", "alpha beta")]);
/// store.commit("b", [("document.txt", "beta gamma")]);
///
/// let diff = compare_revisions(&store, "document.txt", &Revision::new("a"), &Revision::new("b")).unwrap();
/// assert_eq!(diff.added_count(), 1);
/// assert_eq!(diff.removed_count(), 1);
/// ```
pub fn compare_revisions<S>(
    store: &S,
    path: &str,
    older: &Revision,
    newer: &Revision,
) -> Result<VocabularyDiff>
where
    S: RevisionStore + ?Sized,
{
    let before = WordFrequency::from_text(&store.fetch_file_at(older, path)?);
    let after = WordFrequency::from_text(&store.fetch_file_at(newer, path)?);
    Ok(lexis_vocab::diff(&before, &after))
}

/// Analyze the latest revision and, when the file has at least two
/// revisions, compare the two most recent ones.
///
/// # Errors
///
/// Propagates any failure from the store other than missing content.
pub fn run<S>(store: &S, path: &str) -> Result<Report>
where
    S: RevisionStore + ?Sized,
{
    let latest = analyze_latest(store, path)?;

    let revisions = store.revisions_touching(path)?;
    debug!(path, revisions = revisions.len(), "file history");
    let comparison = match revisions.as_slice() {
        [newer, older, ..] => Some(Comparison {
            diff: compare_revisions(store, path, older, newer)?,
            older: older.clone(),
            newer: newer.clone(),
        }),
        _ => None,
    };

    Ok(Report {
        path: path.to_string(),
        latest,
        comparison,
    })
}
