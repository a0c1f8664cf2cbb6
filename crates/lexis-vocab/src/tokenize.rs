//! Word tokenization.
//!
//! A token is a maximal run of Unicode word characters (letters, marks,
//! digits, connector punctuation such as `_`) in the lowercased text.
//! Everything else separates tokens.

use std::sync::LazyLock;

use regex::Regex;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("word pattern"));

/// Split `text` into lowercase word tokens, in order of appearance.
///
/// # Examples
///
/// ```
/// use lexis_vocab::tokenize;
///
/// let tokens = tokenize("Hello, WORLD! snake_case x2");
/// assert_eq!(tokens, vec!["hello", "world", "snake_case", "x2"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
