//! Property-based tests for segmentation and matrix assembly.
//!
//! These tests verify the invariants callers rely on:
//! - Partition: word tokens and sentences cover the text with no gaps
//! - Ordering: token spans are in source order and in bounds
//! - Determinism: parallel and sequential vectorization agree
//! - CSC structure: column pointers and per-column sums are consistent

use proptest::prelude::*;
use textvec::analysis::segmenter::{Segmenter, SegmenterBackend};
use textvec::analysis::split::sentence_spans;
use textvec::vectorizer::Vectorizer;

// =============================================================================
// Test Generators
// =============================================================================

/// Arbitrary text, including combining marks, newlines and non-Latin scripts.
fn arbitrary_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 .,!?'\"()\\-_\\r\\n\u{0301}\u{00AD}éßアイ\u{05D0}\u{1F1FA}\u{1F1F8}]{0,80}")
        .unwrap()
}

/// Sentence-like text built from a small vocabulary.
fn sentence_like_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["alpha", "beta", "Gamma", "delta", "Mr", "x"]),
            prop::sample::select(vec![" ", " ", ". ", "! ", ", ", "\n"]),
        ),
        0..25,
    )
    .prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(word, sep)| format!("{word}{sep}"))
            .collect()
    })
}

fn backends() -> Vec<Box<dyn Segmenter>> {
    vec![
        SegmenterBackend::Uax29.create(),
        SegmenterBackend::UnicodeSegmentation.create(),
    ]
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_word_tokens_partition_text(text in arbitrary_text()) {
        let chars: Vec<char> = text.chars().collect();
        for segmenter in backends() {
            let mut expected_start = 0;
            for token in segmenter.segment(&chars) {
                prop_assert_eq!(token.start, expected_start);
                prop_assert!(token.end > token.start);
                prop_assert!(token.end <= chars.len());
                expected_start = token.end;
            }
            prop_assert_eq!(expected_start, chars.len());
        }
    }

    #[test]
    fn prop_sentences_reconstruct_text(text in arbitrary_text()) {
        let chars: Vec<char> = text.chars().collect();
        for segmenter in backends() {
            let spans = sentence_spans(segmenter.as_ref(), &chars);
            let rebuilt: String = spans
                .iter()
                .flat_map(|span| chars[span.clone()].iter())
                .collect();
            prop_assert_eq!(&rebuilt, &text);
            prop_assert!(spans.iter().all(|span| !span.is_empty()));
        }
    }

    #[test]
    fn prop_parallel_matches_sequential(
        texts in prop::collection::vec(sentence_like_text(), 0..30)
    ) {
        let vectorizer = Vectorizer::builder()
            .vocabulary(["alpha", "beta", "gamma", "alpha_beta", "beta_gamma_delta"])
            .casing("lower")
            .ngram_size(3)
            .word_categories(["Lu", "Ll"])
            .threads(2)
            .min_chunk_len(1)
            .build()
            .unwrap();

        let sequential = vectorizer.vectorize(&texts, false, false).unwrap();
        let parallel = vectorizer.vectorize(&texts, true, false).unwrap();
        prop_assert_eq!(&sequential, &parallel);

        let sentences_seq = vectorizer.tokenize_sentences(&texts, false).unwrap();
        let sentences_par = vectorizer.tokenize_sentences(&texts, true).unwrap();
        prop_assert_eq!(sentences_seq, sentences_par);
    }

    #[test]
    fn prop_csc_invariants(texts in prop::collection::vec(sentence_like_text(), 0..20)) {
        let vocabulary = ["alpha", "beta", "gamma", "mr", "x", "alpha_beta"];
        let vectorizer = Vectorizer::builder()
            .vocabulary(vocabulary)
            .casing("lower")
            .ngram_size(2)
            .word_categories(["Lu", "Ll"])
            .build()
            .unwrap();

        let matrix = vectorizer.vectorize(&texts, false, false).unwrap();
        prop_assert!(matrix.validate().is_ok());
        prop_assert_eq!(matrix.p[0], 0);
        prop_assert_eq!(*matrix.p.last().unwrap(), matrix.nnz());
        prop_assert!(matrix.p.windows(2).all(|w| w[0] <= w[1]));

        let tokens = vectorizer.tokenize(&texts, false).unwrap();
        for (col, term) in vocabulary.iter().enumerate() {
            let column_sum: u64 = matrix.x[matrix.p[col]..matrix.p[col + 1]]
                .iter()
                .map(|&v| u64::from(v))
                .sum();
            let occurrences = tokens
                .iter()
                .flatten()
                .filter(|token| token.as_str() == *term)
                .count() as u64;
            prop_assert_eq!(column_sum, occurrences);
        }
    }

    #[test]
    fn prop_joined_unigrams_match_vocabulary_ngram(
        words in prop::collection::vec("[a-z]{1,8}", 1..6)
    ) {
        let text = words.join(" ");
        let unigrams = Vectorizer::builder()
            .word_categories(["Ll"])
            .build()
            .unwrap()
            .tokenize(&[text.as_str()], false)
            .unwrap();
        let joined = unigrams[0].join("_");

        let vectorizer = Vectorizer::builder()
            .vocabulary([joined])
            .ngram_size(words.len())
            .word_categories(["Ll"])
            .build()
            .unwrap();
        let documents = vectorizer.vectorize_documents(&[text.as_str()], false).unwrap();
        prop_assert!(documents[0].get(0) >= 1);
    }
}
