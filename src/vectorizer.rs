//! Bag-of-n-grams vectorization.
//!
//! A [`Vectorizer`] is built once from a [`VectorizerConfig`] and then
//! applied to batches of documents. Each document is segmented, filtered,
//! normalized and counted against the vocabulary; the results come back as
//! token lists or as compressed sparse column matrices.
//!
//! # Examples
//!
//! ```
//! use textvec::vectorizer::build_vectorizer;
//!
//! let vectorizer = build_vectorizer(
//!     &["quick", "fox", "quick_brown"],
//!     &[],
//!     "lower",
//!     &[],
//!     &[],
//!     2,
//!     1,
//!     "",
//!     &["Lu", "Ll"],
//!     &[],
//!     "en",
//! )
//! .unwrap();
//!
//! let matrix = vectorizer
//!     .vectorize(&["The quick brown fox."], false, true)
//!     .unwrap();
//! assert_eq!(matrix.dims, (1, 3));
//! assert_eq!(matrix.x, vec![1, 1, 1]);
//! ```

pub mod config;
pub mod engine;
pub mod pipeline;
pub mod registry;
pub mod sink;
pub mod vocabulary;

pub use config::{EncodingErrorPolicy, VectorizerBuilder, VectorizerConfig};
pub use engine::Vectorizer;
pub use registry::{VectorizerHandle, VectorizerRegistry};
pub use sink::{DocumentSink, DocumentVector};
pub use vocabulary::VocabularyIndex;

use crate::error::Result;

/// Positional form of [`VectorizerBuilder`]; other settings keep their defaults.
#[allow(clippy::too_many_arguments)]
pub fn build_vectorizer<S: AsRef<str>>(
    vocabulary: &[S],
    ignored_terms: &[S],
    casing: &str,
    case_sensitive_aliases: &[(S, S)],
    case_insensitive_aliases: &[(S, S)],
    ngram_size: usize,
    min_term_length: usize,
    stemmer: &str,
    word_categories: &[S],
    non_word_categories: &[S],
    locale: &str,
) -> Result<Vectorizer> {
    let mut builder = Vectorizer::builder()
        .vocabulary(vocabulary.iter().map(S::as_ref))
        .ignored_terms(ignored_terms.iter().map(S::as_ref))
        .casing(casing)
        .ngram_size(ngram_size)
        .min_term_length(min_term_length)
        .stemmer(stemmer)
        .word_categories(word_categories.iter().map(S::as_ref))
        .non_word_categories(non_word_categories.iter().map(S::as_ref))
        .locale(locale);
    for (term, replacement) in case_sensitive_aliases {
        builder = builder.case_sensitive_alias(S::as_ref(term), S::as_ref(replacement));
    }
    for (term, replacement) in case_insensitive_aliases {
        builder = builder.case_insensitive_alias(S::as_ref(term), S::as_ref(replacement));
    }
    builder.build()
}
