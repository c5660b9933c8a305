//! Text normalization

use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s]").expect("Invalid normalization regex"));

/// Text holding only lowercase ASCII letters, digits and whitespace.
///
/// The only way to build one is [`normalize`], so every value upholds that
/// invariant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whitespace-delimited tokens in document order, duplicates included.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for NormalizedText {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Lower-case the text and delete every character outside `[a-z0-9\s]`.
pub fn normalize(text: &str) -> NormalizedText {
    let lowered = text.to_lowercase();
    NormalizedText(NON_ALPHANUMERIC.replace_all(&lowered, "").into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only_allowed_chars(text: &NormalizedText) -> bool {
        text.as_str()
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
    }

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let normalized = normalize("Python Developer, with SQL & C++ skills!");
        assert_eq!(normalized.as_str(), "python developer with sql  c skills");
    }

    #[test]
    fn test_deletes_rather_than_substitutes() {
        assert_eq!(normalize("Node.js").as_str(), "nodejs");
        assert_eq!(normalize("e-mail@host.com").as_str(), "emailhostcom");
    }

    #[test]
    fn test_non_ascii_letters_removed() {
        assert_eq!(normalize("Café Résumé").as_str(), "caf rsum");
    }

    #[test]
    fn test_whitespace_preserved() {
        assert_eq!(normalize("Rust\n\tGo").as_str(), "rust\n\tgo");
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize("").is_empty());
        assert!(normalize("!!! ???").tokens().next().is_none());
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "Senior Rust Engineer (Remote) — 5+ yrs",
            "ÄÖÜ straße 42",
            "   ",
            "already normalized text 123",
        ];
        for sample in samples {
            let once = normalize(sample);
            let twice = normalize(once.as_str());
            assert_eq!(once, twice, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_output_alphabet() {
        let samples = ["Hello, World!", "İstanbul ǅemal", "tabs\tand\nnewlines", "#1 C# dev"];
        for sample in samples {
            assert!(only_allowed_chars(&normalize(sample)), "bad output for {:?}", sample);
        }
    }

    #[test]
    fn test_tokens() {
        let normalized = normalize("Rust  rust\nGo");
        let tokens: Vec<&str> = normalized.tokens().collect();
        assert_eq!(tokens, vec!["rust", "rust", "go"]);
    }
}
