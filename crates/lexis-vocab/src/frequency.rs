//! Word frequency counting and summary statistics.

use indexmap::IndexMap;
use serde::Serialize;

use crate::tokenize::tokenize;

/// Token → occurrence count for one text snapshot.
///
/// Iterates in first-occurrence order, which is also the order used to
/// break ties in [`WordFrequency::summarize`].
///
/// # Examples
///
/// ```
/// use lexis_vocab::WordFrequency;
///
/// let freq = WordFrequency::from_text("to be or not to be");
/// assert_eq!(freq.get("to"), 2);
/// assert_eq!(freq.get("question"), 0);
/// assert_eq!(freq.len(), 4);
/// assert_eq!(freq.total_tokens(), 6);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordFrequency {
    counts: IndexMap<String, usize>,
}

impl WordFrequency {
    /// Tokenize `text` and count each distinct token.
    pub fn from_text(text: &str) -> Self {
        tokenize(text).into_iter().collect()
    }

    /// Occurrences of `token` (0 when absent).
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Whether `token` occurs at least once.
    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total_tokens(&self) -> usize {
        self.counts.values().sum()
    }

    /// `(token, count)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(token, count)| (token.as_str(), *count))
    }

    /// Distinct tokens in first-occurrence order.
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// Summary statistics, or `None` for an empty map.
    ///
    /// Ties on the maximum or minimum count go to the token seen first.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexis_vocab::WordFrequency;
    ///
    /// let stats = WordFrequency::from_text("b a a c").summarize().unwrap();
    /// assert_eq!(stats.total_unique, 3);
    /// assert_eq!(stats.most_common, ("a".to_string(), 2));
    /// assert_eq!(stats.least_common, ("b".to_string(), 1));
    ///
    /// assert!(WordFrequency::default().summarize().is_none());
    /// ```
    pub fn summarize(&self) -> Option<Statistics> {
        let mut entries = self.iter();
        let (first_token, first_count) = entries.next()?;

        let mut most = (first_token, first_count);
        let mut least = (first_token, first_count);
        for (token, count) in entries {
            if count > most.1 {
                most = (token, count);
            }
            if count < least.1 {
                least = (token, count);
            }
        }

        Some(Statistics {
            total_unique: self.len(),
            most_common: (most.0.to_string(), most.1),
            least_common: (least.0.to_string(), least.1),
        })
    }
}

impl FromIterator<String> for WordFrequency {
    fn from_iter<I: IntoIterator<Item = String>>(tokens: I) -> Self {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for token in tokens {
            *counts.entry(token).or_default() += 1;
        }
        Self { counts }
    }
}

/// Derived summary of a non-empty [`WordFrequency`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Number of distinct tokens.
    pub total_unique: usize,
    /// Token with the highest count, first-seen on ties.
    pub most_common: (String, usize),
    /// Token with the lowest count, first-seen on ties.
    pub least_common: (String, usize),
}

/// Shorthand for [`WordFrequency::from_text`].
pub fn frequency(text: &str) -> WordFrequency {
    WordFrequency::from_text(text)
}

/// Shorthand for [`WordFrequency::summarize`].
pub fn summarize(freq: &WordFrequency) -> Option<Statistics> {
    freq.summarize()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAT_TEXT: &str = "The cat sat on the mat. The cat ran.";

    #[test]
    fn counts_match_reference_sentence() {
        let freq = frequency(CAT_TEXT);
        let pairs: Vec<_> = freq.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("the", 3),
                ("cat", 2),
                ("sat", 1),
                ("on", 1),
                ("mat", 1),
                ("ran", 1),
            ]
        );
    }

    #[test]
    fn value_sum_equals_token_count() {
        let text = "One fish, two fish; red fish, blue fish!";
        let freq = frequency(text);
        assert_eq!(freq.total_tokens(), tokenize(text).len());
        assert_eq!(freq.total_tokens(), 8);
        assert_eq!(freq.get("fish"), 4);
    }

    #[test]
    fn keys_are_distinct_lowercase_tokens() {
        let freq = frequency("Word word WORD wOrD");
        assert_eq!(freq.vocabulary().collect::<Vec<_>>(), vec!["word"]);
        assert_eq!(freq.get("word"), 4);
        assert!(!freq.contains("Word"));
    }

    #[test]
    fn empty_text_gives_empty_map() {
        let freq = frequency("");
        assert!(freq.is_empty());
        assert_eq!(freq.total_tokens(), 0);
    }

    #[test]
    fn summarize_empty_is_none() {
        assert_eq!(summarize(&WordFrequency::default()), None);
    }

    #[test]
    fn summarize_reference_sentence() {
        let stats = summarize(&frequency(CAT_TEXT)).unwrap();
        assert_eq!(stats.total_unique, 6);
        assert_eq!(stats.most_common, ("the".to_string(), 3));
        assert_eq!(stats.least_common, ("sat".to_string(), 1));
    }

    #[test]
    fn ties_go_to_first_seen_token() {
        let stats = summarize(&frequency("zeta alpha zeta alpha mid")).unwrap();
        assert_eq!(stats.most_common, ("zeta".to_string(), 2));
        assert_eq!(stats.least_common, ("mid".to_string(), 1));

        let stats = summarize(&frequency("b a c")).unwrap();
        assert_eq!(stats.most_common, ("b".to_string(), 1));
        assert_eq!(stats.least_common, ("b".to_string(), 1));
    }

    #[test]
    fn most_common_never_below_least_common() {
        for text in ["a", "a a b", "x y z x y x", "hello, hello; bye"] {
            let stats = summarize(&frequency(text)).unwrap();
            assert!(stats.most_common.1 >= stats.least_common.1, "text: {text}");
        }
    }

    #[test]
    fn serializes_as_ordered_object() {
        let json = serde_json::to_string(&frequency("b a b")).unwrap();
        assert_eq!(json, r#"{"b":2,"a":1}"#);

        let stats = summarize(&frequency("b a b")).unwrap();
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["totalUnique"], 2);
        assert_eq!(json["mostCommon"][0], "b");
        assert_eq!(json["leastCommon"][1], 1);
    }
}
