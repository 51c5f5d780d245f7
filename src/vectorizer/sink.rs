//! Output containers for the document pipeline.
//!
//! The pipeline is generic over a [`DocumentSink`]; four containers exist:
//!
//! | sink | holds |
//! |---|---|
//! | `Vec<String>` | every kept term and n-gram, in order |
//! | [`DocumentVector`] | counts per vocabulary column |
//! | `Vec<Vec<String>>` | terms per sentence group |
//! | `Vec<DocumentVector>` | counts per sentence group |
//!
//! Token-list sinks record everything; count sinks record only terms found
//! in the vocabulary.

use ahash::AHashMap;

use crate::analysis::ngram::{NGram, Term};
use crate::vectorizer::vocabulary::VocabularyIndex;

/// Receiver of the terms produced for one document.
pub trait DocumentSink: Default + Send {
    /// A unigram passed every filter.
    fn put_term(&mut self, term: &Term, vocabulary: &VocabularyIndex);

    /// An n-gram of two or more terms was formed.
    fn put_ngram(&mut self, ngram: &NGram<'_>, vocabulary: &VocabularyIndex);

    /// A new sentence group begins.
    fn new_sentence(&mut self) {}
}

/// Sparse term counts of one document (or one sentence group).
#[derive(Debug, Clone, Default)]
pub struct DocumentVector {
    counts: AHashMap<usize, u32>,
}

impl DocumentVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of column `column`.
    pub fn increment(&mut self, column: usize) {
        *self.counts.entry(column).or_insert(0) += 1;
    }

    /// Count for `column`, zero when absent.
    pub fn get(&self, column: usize) -> u32 {
        self.counts.get(&column).copied().unwrap_or(0)
    }

    /// Number of distinct columns.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `(column, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.counts.iter().map(|(&column, &count)| (column, count))
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&count| u64::from(count)).sum()
    }
}

impl PartialEq for DocumentVector {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(column, count)| other.get(column) == count)
    }
}

impl Eq for DocumentVector {}

impl FromIterator<(usize, u32)> for DocumentVector {
    fn from_iter<I: IntoIterator<Item = (usize, u32)>>(iter: I) -> Self {
        let mut vector = DocumentVector::new();
        for (column, count) in iter {
            if count > 0 {
                *vector.counts.entry(column).or_insert(0) += count;
            }
        }
        vector
    }
}

fn current_group<T: Default>(groups: &mut Vec<T>) -> &mut T {
    if groups.is_empty() {
        groups.push(T::default());
    }
    let last = groups.len() - 1;
    &mut groups[last]
}

impl DocumentSink for Vec<String> {
    fn put_term(&mut self, term: &Term, _vocabulary: &VocabularyIndex) {
        self.push(term.text().to_string());
    }

    fn put_ngram(&mut self, ngram: &NGram<'_>, _vocabulary: &VocabularyIndex) {
        self.push(ngram.joined());
    }
}

impl DocumentSink for DocumentVector {
    fn put_term(&mut self, term: &Term, vocabulary: &VocabularyIndex) {
        if let Some(column) = vocabulary.lookup_term(term) {
            self.increment(column);
        }
    }

    fn put_ngram(&mut self, ngram: &NGram<'_>, vocabulary: &VocabularyIndex) {
        if let Some(column) = vocabulary.lookup_ngram(ngram) {
            self.increment(column);
        }
    }
}

impl DocumentSink for Vec<Vec<String>> {
    fn put_term(&mut self, term: &Term, vocabulary: &VocabularyIndex) {
        current_group(self).put_term(term, vocabulary);
    }

    fn put_ngram(&mut self, ngram: &NGram<'_>, vocabulary: &VocabularyIndex) {
        current_group(self).put_ngram(ngram, vocabulary);
    }

    fn new_sentence(&mut self) {
        self.push(Vec::new());
    }
}

impl DocumentSink for Vec<DocumentVector> {
    fn put_term(&mut self, term: &Term, vocabulary: &VocabularyIndex) {
        current_group(self).put_term(term, vocabulary);
    }

    fn put_ngram(&mut self, ngram: &NGram<'_>, vocabulary: &VocabularyIndex) {
        current_group(self).put_ngram(ngram, vocabulary);
    }

    fn new_sentence(&mut self) {
        self.push(DocumentVector::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> VocabularyIndex {
        VocabularyIndex::new(["a", "b", "a_b"], false)
    }

    #[test]
    fn test_token_list_records_everything() {
        let vocabulary = vocabulary();
        let mut sink: Vec<String> = Vec::new();
        let terms = [Term::new("a"), Term::new("zzz")];
        sink.put_term(&terms[0], &vocabulary);
        sink.put_term(&terms[1], &vocabulary);
        sink.put_ngram(&NGram::new(&terms), &vocabulary);
        assert_eq!(sink, vec!["a", "zzz", "a_zzz"]);
    }

    #[test]
    fn test_document_vector_counts_vocabulary_only() {
        let vocabulary = vocabulary();
        let mut sink = DocumentVector::new();
        let terms = [Term::new("a"), Term::new("b")];
        sink.put_term(&terms[0], &vocabulary);
        sink.put_term(&terms[0], &vocabulary);
        sink.put_term(&Term::new("c"), &vocabulary);
        sink.put_ngram(&NGram::new(&terms), &vocabulary);

        assert_eq!(sink.get(0), 2);
        assert_eq!(sink.get(1), 0);
        assert_eq!(sink.get(2), 1);
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.total(), 3);
    }

    #[test]
    fn test_sentence_sinks() {
        let vocabulary = vocabulary();
        let mut tokens: Vec<Vec<String>> = Vec::new();
        let mut counts: Vec<DocumentVector> = Vec::new();
        tokens.new_sentence();
        counts.new_sentence();
        tokens.put_term(&Term::new("a"), &vocabulary);
        counts.put_term(&Term::new("a"), &vocabulary);
        tokens.new_sentence();
        counts.new_sentence();
        tokens.new_sentence();
        counts.new_sentence();
        tokens.put_term(&Term::new("b"), &vocabulary);
        counts.put_term(&Term::new("b"), &vocabulary);

        assert_eq!(tokens, vec![vec!["a"], vec![], vec!["b"]]);
        assert_eq!(counts.len(), 3);
        assert!(counts[1].is_empty());
        assert_eq!(counts[2].get(1), 1);
    }

    #[test]
    fn test_document_vector_equality() {
        let left: DocumentVector = [(0, 2), (3, 1)].into_iter().collect();
        let right: DocumentVector = [(3, 1), (0, 1), (0, 1)].into_iter().collect();
        assert_eq!(left, right);
    }
}
