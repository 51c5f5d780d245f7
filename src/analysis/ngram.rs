//! Word n-gram generation.
//!
//! An [`NGramWindow`] receives the terms of one sentence group in order and
//! emits, for every term, the n-grams that end with it: lengths `2..=size`,
//! shortest first. Unigrams are handled by the caller. The window is reset
//! at every sentence-group boundary so n-grams never span two groups.
//!
//! # Examples
//!
//! ```
//! use textvec::analysis::ngram::{NGramWindow, Term};
//!
//! let mut window = NGramWindow::new(3).unwrap();
//! let mut emitted = Vec::new();
//! for word in ["a", "b", "c"] {
//!     window.push(&Term::new(word), |ngram| emitted.push(ngram.joined()));
//! }
//! assert_eq!(emitted, vec!["a_b", "b_c", "a_b_c"]);
//! ```

use crate::error::{Result, TextVecError};
use crate::util::hash::{combined_hash, term_hash};

/// Separator between the parts of a multi-term entry.
pub const NGRAM_SEPARATOR: char = '_';

/// A processed term and its hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term {
    text: String,
    hash: u64,
}

impl Term {
    pub fn new<S: Into<String>>(text: S) -> Self {
        let text = text.into();
        let hash = term_hash(&text);
        Term { text, hash }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn hash(&self) -> u64 {
        self.hash
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// A run of two or more consecutive terms.
#[derive(Debug, Clone, Copy)]
pub struct NGram<'a> {
    terms: &'a [Term],
    hash: u64,
}

impl<'a> NGram<'a> {
    pub fn new(terms: &'a [Term]) -> Self {
        let hash = combined_hash(terms.iter().map(Term::hash));
        NGram { terms, hash }
    }

    pub fn terms(&self) -> &'a [Term] {
        self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Order-sensitive combination of the term hashes.
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Terms joined with [`NGRAM_SEPARATOR`].
    pub fn joined(&self) -> String {
        let mut joined = String::with_capacity(self.terms.iter().map(|t| t.text.len() + 1).sum());
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                joined.push(NGRAM_SEPARATOR);
            }
            joined.push_str(&term.text);
        }
        joined
    }

    /// Check the terms against the parts of a separator-joined entry.
    pub fn matches_joined(&self, joined: &str) -> bool {
        let mut parts = joined.split(NGRAM_SEPARATOR);
        self.terms
            .iter()
            .all(|term| parts.next() == Some(term.text.as_str()))
            && parts.next().is_none()
    }
}

/// Sliding window over the terms of one sentence group.
#[derive(Debug, Clone)]
pub enum NGramWindow {
    /// `size == 1`: emits nothing.
    Unigram,
    /// `size == 2`: remembers the previous term only.
    Bigram { previous: Option<Term> },
    /// `size > 2`: keeps the last `size` terms.
    General { size: usize, buffer: Vec<Term> },
}

impl NGramWindow {
    /// Create a window for n-grams up to `size` terms.
    pub fn new(size: usize) -> Result<Self> {
        match size {
            0 => Err(TextVecError::invalid_argument(
                "ngram size must be at least 1",
            )),
            1 => Ok(NGramWindow::Unigram),
            2 => Ok(NGramWindow::Bigram { previous: None }),
            size => Ok(NGramWindow::General {
                size,
                buffer: Vec::with_capacity(size),
            }),
        }
    }

    pub fn size(&self) -> usize {
        match self {
            NGramWindow::Unigram => 1,
            NGramWindow::Bigram { .. } => 2,
            NGramWindow::General { size, .. } => *size,
        }
    }

    /// Add `term` and emit every n-gram ending with it.
    pub fn push<F>(&mut self, term: &Term, mut emit: F)
    where
        F: FnMut(&NGram<'_>),
    {
        match self {
            NGramWindow::Unigram => {}
            NGramWindow::Bigram { previous } => match previous.take() {
                Some(before) => {
                    let pair = [before, term.clone()];
                    emit(&NGram::new(&pair));
                    let [_, newest] = pair;
                    *previous = Some(newest);
                }
                None => *previous = Some(term.clone()),
            },
            NGramWindow::General { size, buffer } => {
                if buffer.len() == *size {
                    buffer.remove(0);
                }
                buffer.push(term.clone());
                for start in (0..buffer.len().saturating_sub(1)).rev() {
                    emit(&NGram::new(&buffer[start..]));
                }
            }
        }
    }

    /// Forget all buffered terms.
    pub fn reset(&mut self) {
        match self {
            NGramWindow::Unigram => {}
            NGramWindow::Bigram { previous } => *previous = None,
            NGramWindow::General { buffer, .. } => buffer.clear(),
        }
    }
}
