use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Looks up a clue for a word.
pub trait DefinitionSource {
    /// Returns the definition of `word`, or `None` if it is unknown.
    fn define(&self, word: &str) -> Option<String>;
}

impl<S> DefinitionSource for &S
where
    S: DefinitionSource + ?Sized,
{
    fn define(&self, word: &str) -> Option<String> {
        (**self).define(word)
    }
}

/// Definition used when no source knows the word: `"A {word}"`, lowercased.
#[must_use]
pub fn fallback_definition(word: &str) -> String {
    format!("A {}", word.to_lowercase())
}

/// Source that knows no words.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDefinitions;

impl DefinitionSource for NoDefinitions {
    fn define(&self, _word: &str) -> Option<String> {
        None
    }
}

/// Word-to-definition map with case-insensitive lookup.
///
/// Deserializes from a JSON object such as
/// `{"python": "A programming language"}`. Keys are folded to lowercase. When
/// several keys of a map fold to the same word, the key that sorts last wins
/// (`"python"` over `"Python"`); with [`Glossary::insert`] and
/// [`FromIterator`] the last inserted one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HashMap<String, String>", into = "HashMap<String, String>")]
pub struct Glossary {
    entries: HashMap<String, String>,
}

impl Glossary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn insert(&mut self, word: &str, definition: impl Into<String>) {
        self.entries.insert(word.to_lowercase(), definition.into());
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(&word.to_lowercase()).map(String::as_str)
    }
}

impl DefinitionSource for Glossary {
    fn define(&self, word: &str) -> Option<String> {
        self.get(word).map(str::to_owned)
    }
}

impl From<HashMap<String, String>> for Glossary {
    fn from(map: HashMap<String, String>) -> Self {
        let mut entries: Vec<_> = map.into_iter().collect();
        entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        entries.into_iter().collect()
    }
}

impl From<Glossary> for HashMap<String, String> {
    fn from(glossary: Glossary) -> Self {
        glossary.entries
    }
}

impl<K, V> FromIterator<(K, V)> for Glossary
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut glossary = Self::new();
        for (word, definition) in iter {
            glossary.insert(word.as_ref(), definition);
        }
        glossary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_definition() {
        assert_eq!(fallback_definition("PYTHON"), "A python");
        assert_eq!(fallback_definition("web"), "A web");
    }

    #[test]
    fn test_no_definitions() {
        assert_eq!(NoDefinitions.define("python"), None);
    }

    #[test]
    fn test_glossary_is_case_insensitive() {
        let mut glossary = Glossary::new();
        assert!(glossary.is_empty());
        glossary.insert("Flask", "A narrow-necked bottle");
        assert_eq!(glossary.len(), 1);
        assert_eq!(glossary.get("FLASK"), Some("A narrow-necked bottle"));
        assert_eq!(
            glossary.define("flask").as_deref(),
            Some("A narrow-necked bottle")
        );
        assert_eq!(glossary.define("bottle"), None);
    }

    #[test]
    fn test_glossary_from_json() {
        let json = r#"{"Python": "A programming language", "web": "A network"}"#;
        let glossary: Glossary = serde_json::from_str(json).unwrap();
        assert_eq!(glossary.len(), 2);
        assert_eq!(glossary.get("python"), Some("A programming language"));
        assert_eq!(glossary.get("WEB"), Some("A network"));

        assert!(serde_json::from_str::<Glossary>(r#"["python"]"#).is_err());

        let value = serde_json::to_value(&glossary).unwrap();
        assert_eq!(value["python"], "A programming language");
    }

    #[test]
    fn test_folded_key_collision_is_deterministic() {
        let json = r#"{"Python": "upper", "python": "lower", "PYTHON": "shout"}"#;
        for _ in 0..10 {
            let glossary: Glossary = serde_json::from_str(json).unwrap();
            assert_eq!(glossary.len(), 1);
            assert_eq!(glossary.get("python"), Some("lower"));
        }

        let glossary: Glossary = [("web", "first"), ("WEB", "second")].into_iter().collect();
        assert_eq!(glossary.get("web"), Some("second"));
    }

    #[test]
    fn test_source_through_reference() {
        fn lookup<S: DefinitionSource>(source: S, word: &str) -> Option<String> {
            source.define(word)
        }

        let glossary: Glossary = [("app", "A program")].into_iter().collect();
        assert_eq!(lookup(&glossary, "APP").as_deref(), Some("A program"));
    }
}
