//! Report rendering.

use std::collections::BTreeSet;
use std::fmt::Write;

use lexis_core::{LexisError, OutputFormat};

use crate::pipeline::{Comparison, LatestAnalysis, Report};

/// Render `report` in the requested format.
///
/// # Errors
///
/// Returns [`LexisError::Serialization`] if JSON encoding fails.
///
/// # Examples
///
/// ```
/// use lexis_core::OutputFormat;
/// use lexis_history::MemoryStore;
/// use lexis_report::{render, run};
///
/// let mut store = MemoryStore::new();
/// store.commit("r1", [("document.txt", "hello hello world")]);
/// let report = run(&store, "document.txt").unwrap();
///
/// let text = render(&report, OutputFormat::Text).unwrap();
/// assert!(text.contains("Most frequent word: (hello, 2)"));
/// ```
pub fn render(report: &Report, format: OutputFormat) -> Result<String, LexisError> {
    match format {
        OutputFormat::Text => Ok(format_text(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Markdown => Ok(format_markdown(report)),
    }
}

/// Plain-text report.
pub fn format_text(report: &Report) -> String {
    let mut out = String::new();
    write_latest_text(&mut out, &report.latest);
    if let Some(comparison) = &report.comparison {
        write_comparison_text(&mut out, comparison);
    }
    out
}

fn write_latest_text(out: &mut String, latest: &LatestAnalysis) {
    let _ = writeln!(out, "Latest version analysis:");
    let _ = writeln!(out, "Revision: {}", latest.revision);
    match &latest.statistics {
        Some(stats) => {
            let _ = writeln!(out, "Total unique words: {}", stats.total_unique);
            let (word, count) = &stats.most_common;
            let _ = writeln!(out, "Most frequent word: ({word}, {count})");
            let (word, count) = &stats.least_common;
            let _ = writeln!(out, "Least frequent word: ({word}, {count})");
        }
        None => {
            let _ = writeln!(out, "No words found.");
        }
    }

    let _ = writeln!(out, "\nWord frequency:");
    for (word, count) in latest.frequency.iter() {
        let _ = writeln!(out, "{word}: {count}");
    }
}

fn write_comparison_text(out: &mut String, comparison: &Comparison) {
    let diff = &comparison.diff;
    let _ = writeln!(
        out,
        "\nComparison between the last two revisions ({}..{}):",
        comparison.older.short(),
        comparison.newer.short()
    );
    let _ = writeln!(
        out,
        "Added words ({}): {}",
        diff.added_count(),
        format_set(&diff.added)
    );
    let _ = writeln!(
        out,
        "Removed words ({}): {}",
        diff.removed_count(),
        format_set(&diff.removed)
    );
}

/// `{a, b, c}`; `{}` when empty.
fn format_set(words: &BTreeSet<String>) -> String {
    let joined: Vec<&str> = words.iter().map(String::as_str).collect();
    format!("{{{}}}", joined.join(", "))
}

/// GitHub-flavored Markdown report.
pub fn format_markdown(report: &Report) -> String {
    let mut out = String::new();
    let latest = &report.latest;

    let _ = writeln!(out, "# Word statistics for `{}`\n", report.path);
    let _ = writeln!(out, "**Revision:** `{}`\n", latest.revision);
    match &latest.statistics {
        Some(stats) => {
            let _ = writeln!(out, "- Total unique words: {}", stats.total_unique);
            let _ = writeln!(
                out,
                "- Most frequent word: `{}` ({})",
                stats.most_common.0, stats.most_common.1
            );
            let _ = writeln!(
                out,
                "- Least frequent word: `{}` ({})",
                stats.least_common.0, stats.least_common.1
            );
        }
        None => {
            let _ = writeln!(out, "_No words found._");
        }
    }

    if !latest.frequency.is_empty() {
        let _ = writeln!(out, "\n## Word frequency\n");
        let _ = writeln!(out, "| Word | Count |");
        let _ = writeln!(out, "|------|------:|");
        for (word, count) in latest.frequency.iter() {
            let _ = writeln!(out, "| {word} | {count} |");
        }
    }

    if let Some(comparison) = &report.comparison {
        let diff = &comparison.diff;
        let _ = writeln!(
            out,
            "\n## Changes `{}`..`{}`\n",
            comparison.older.short(),
            comparison.newer.short()
        );
        let _ = writeln!(
            out,
            "- Added ({}): {}",
            diff.added_count(),
            format_code_list(&diff.added)
        );
        let _ = writeln!(
            out,
            "- Removed ({}): {}",
            diff.removed_count(),
            format_code_list(&diff.removed)
        );
    }

    out
}

fn format_code_list(words: &BTreeSet<String>) -> String {
    if words.is_empty() {
        return "_none_".into();
    }
    words
        .iter()
        .map(|w| format!("`{w}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use lexis_history::MemoryStore;

    use super::*;
    use crate::pipeline::run;

    fn report_for(snapshots: &[(&str, &str)]) -> Report {
        let mut store = MemoryStore::new();
        for (rev, text) in snapshots {
            store.commit(*rev, [("document.txt", *text)]);
        }
        run(&store, "document.txt").unwrap()
    }

    #[test]
    fn text_report_for_single_revision() {
        let report = report_for(&[("r1", "The cat sat on the mat. The cat ran.")]);
        let text = format_text(&report);
        let expected = "\
Latest version analysis:
Revision: r1
Total unique words: 6
Most frequent word: (the, 3)
Least frequent word: (sat, 1)

Word frequency:
the: 3
cat: 2
sat: 1
on: 1
mat: 1
ran: 1
";
        assert_eq!(text, expected);
    }

    #[test]
    fn text_report_includes_comparison() {
        let report = report_for(&[("aaaaaaaaaa", "alpha beta"), ("bbbbbbbbbb", "beta gamma")]);
        let text = format_text(&report);
        assert!(text.contains("\nComparison between the last two revisions (aaaaaaa..bbbbbbb):\n"));
        assert!(text.contains("Added words (1): {gamma}\n"));
        assert!(text.contains("Removed words (1): {alpha}\n"));
    }

    #[test]
    fn text_report_for_empty_file() {
        let report = report_for(&[("r1", "  ...  ")]);
        let text = format_text(&report);
        assert!(text.contains("No words found.\n"));
        assert!(!text.contains("Most frequent"));
        assert!(text.ends_with("Word frequency:\n"));
    }

    #[test]
    fn empty_sets_render_as_braces() {
        let report = report_for(&[("r1", "a b"), ("r2", "b a a")]);
        let text = format_text(&report);
        assert!(text.contains("Added words (0): {}"));
        assert!(text.contains("Removed words (0): {}"));
    }

    #[test]
    fn json_report_uses_camel_case() {
        let report = report_for(&[("r1", "alpha beta"), ("r2", "beta gamma")]);
        let json = render(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["path"], "document.txt");
        assert_eq!(value["latest"]["revision"], "r2");
        assert_eq!(value["latest"]["frequency"]["gamma"], 1);
        assert_eq!(value["latest"]["statistics"]["totalUnique"], 2);
        assert_eq!(value["comparison"]["diff"]["addedCount"], 1);
        assert_eq!(value["comparison"]["older"], "r1");
    }

    #[test]
    fn json_report_omits_missing_comparison() {
        let report = report_for(&[("r1", "solo")]);
        let json = render(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("comparison").is_none());
    }

    #[test]
    fn markdown_report_has_table_and_changes() {
        let report = report_for(&[("r1", "alpha beta"), ("r2", "beta gamma")]);
        let md = render(&report, OutputFormat::Markdown).unwrap();
        assert!(md.starts_with("# Word statistics for `document.txt`"));
        assert!(md.contains("| beta | 1 |"));
        assert!(md.contains("- Added (1): `gamma`"));
        assert!(md.contains("- Removed (1): `alpha`"));
    }

    #[test]
    fn format_set_is_sorted() {
        let words: BTreeSet<String> = ["zeta", "alpha", "mid"].iter().map(|w| w.to_string()).collect();
        assert_eq!(format_set(&words), "{alpha, mid, zeta}");
    }
}
