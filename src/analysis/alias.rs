//! Term alias tables.
//!
//! An [`AliasMap`] replaces a term with another string before it is counted.
//! The vectorizer keeps two of them: one consulted on the raw token text
//! (case-sensitive) and one consulted after casing and stemming
//! (case-insensitive). Mapping a term to the empty string drops it; this is
//! how ignored terms are implemented.
//!
//! Lookups go through the term hash. By default two terms with the same
//! hash are treated as the same term; in strict mode the stored text is
//! compared as well.

use ahash::AHashMap;

use crate::util::hash::term_hash;

#[derive(Debug, Clone)]
struct AliasEntry {
    term: String,
    replacement: String,
}

/// Hash-keyed term replacement table.
#[derive(Debug, Clone, Default)]
pub struct AliasMap {
    entries: AHashMap<u64, AliasEntry>,
    strict: bool,
}

impl AliasMap {
    pub fn new(strict: bool) -> Self {
        AliasMap {
            entries: AHashMap::new(),
            strict,
        }
    }

    /// Build a table from `(term, replacement)` pairs; later pairs win.
    pub fn from_pairs<I, K, V>(pairs: I, strict: bool) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = AliasMap::new(strict);
        for (term, replacement) in pairs {
            map.insert(term, replacement);
        }
        map
    }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, term: K, replacement: V) {
        let term = term.into();
        self.entries.insert(
            term_hash(&term),
            AliasEntry {
                term,
                replacement: replacement.into(),
            },
        );
    }

    /// Replacement for `term`, if any.
    pub fn resolve(&self, term: &str) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let entry = self.entries.get(&term_hash(term))?;
        if self.strict && entry.term != term {
            return None;
        }
        Some(entry.replacement.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        let aliases = AliasMap::from_pairs([("colour", "color"), ("the", "")], false);
        assert_eq!(aliases.resolve("colour"), Some("color"));
        assert_eq!(aliases.resolve("the"), Some(""));
        assert_eq!(aliases.resolve("color"), None);
        assert_eq!(aliases.len(), 2);
    }

    #[test]
    fn test_later_pairs_win() {
        let aliases = AliasMap::from_pairs([("a", "x"), ("a", "y")], true);
        assert_eq!(aliases.resolve("a"), Some("y"));
        assert_eq!(aliases.len(), 1);
    }

    #[test]
    fn test_case_sensitive() {
        let aliases = AliasMap::from_pairs([("US", "united_states")], true);
        assert_eq!(aliases.resolve("US"), Some("united_states"));
        assert_eq!(aliases.resolve("us"), None);
    }
}
