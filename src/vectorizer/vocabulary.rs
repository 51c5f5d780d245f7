//! Vocabulary index.
//!
//! Maps term hashes to column indices. Entries containing the n-gram
//! separator are split on it and their parts hashed with the same
//! order-sensitive combine the n-gram window uses, so the entry `new_york`
//! matches the bigram `new`, `york`. When two entries share a hash the later
//! one wins.

use ahash::AHashMap;

use crate::analysis::ngram::{NGRAM_SEPARATOR, NGram, Term};
use crate::util::hash::joined_hash;

/// Hash-keyed lookup from terms to vocabulary positions.
#[derive(Debug, Clone, Default)]
pub struct VocabularyIndex {
    terms: Vec<String>,
    index: AHashMap<u64, usize>,
    strict: bool,
}

impl VocabularyIndex {
    /// Build an index over `terms`, in order.
    pub fn new<I, S>(terms: I, strict: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms: Vec<String> = terms.into_iter().map(Into::into).collect();
        let mut index = AHashMap::with_capacity(terms.len());
        for (position, term) in terms.iter().enumerate() {
            index.insert(joined_hash(term, NGRAM_SEPARATOR), position);
        }
        VocabularyIndex {
            terms,
            index,
            strict,
        }
    }

    /// Number of columns (vocabulary entries, duplicates included).
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Entries in column order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn get(&self, position: usize) -> Option<&str> {
        self.terms.get(position).map(String::as_str)
    }

    /// Column for a raw hash.
    #[inline]
    pub fn lookup(&self, hash: u64) -> Option<usize> {
        self.index.get(&hash).copied()
    }

    /// Column for a single term.
    pub fn lookup_term(&self, term: &Term) -> Option<usize> {
        let position = self.lookup(term.hash())?;
        if self.strict && self.terms[position] != term.text() {
            return None;
        }
        Some(position)
    }

    /// Column for an n-gram.
    pub fn lookup_ngram(&self, ngram: &NGram<'_>) -> Option<usize> {
        let position = self.lookup(ngram.hash())?;
        if self.strict && !ngram.matches_joined(&self.terms[position]) {
            return None;
        }
        Some(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_terms_and_ngrams() {
        let vocabulary = VocabularyIndex::new(["quick", "brown", "quick_brown"], false);
        assert_eq!(vocabulary.len(), 3);
        assert_eq!(vocabulary.lookup_term(&Term::new("brown")), Some(1));
        assert_eq!(vocabulary.lookup_term(&Term::new("fox")), None);

        let terms = [Term::new("quick"), Term::new("brown")];
        assert_eq!(vocabulary.lookup_ngram(&NGram::new(&terms)), Some(2));

        let reversed = [Term::new("brown"), Term::new("quick")];
        assert_eq!(vocabulary.lookup_ngram(&NGram::new(&reversed)), None);
    }

    #[test]
    fn test_duplicate_entries_last_wins() {
        let vocabulary = VocabularyIndex::new(["a", "b", "a"], false);
        assert_eq!(vocabulary.len(), 3);
        assert_eq!(vocabulary.lookup_term(&Term::new("a")), Some(2));
        assert_eq!(vocabulary.get(0), Some("a"));
    }

    #[test]
    fn test_strict_mode_checks_text() {
        let vocabulary = VocabularyIndex::new(["new_york"], true);
        let terms = [Term::new("new"), Term::new("york")];
        assert_eq!(vocabulary.lookup_ngram(&NGram::new(&terms)), Some(0));
        assert_eq!(vocabulary.lookup_term(&Term::new("new")), None);
    }

    #[test]
    fn test_empty_vocabulary() {
        let vocabulary = VocabularyIndex::new(Vec::<String>::new(), false);
        assert!(vocabulary.is_empty());
        assert_eq!(vocabulary.lookup(42), None);
    }
}
