//! Standalone splitting helpers.
//!
//! These run a [`Segmenter`] directly over strings without a vectorizer:
//! [`split_sentences`] cuts each text into sentence strings that concatenate
//! back to the input, and [`split_words`] keeps the word segments that pass
//! a category filter.
//!
//! # Examples
//!
//! ```
//! use textvec::analysis::segmenter::SegmenterBackend;
//! use textvec::analysis::split::{WordSplitOptions, split_words};
//!
//! let segmenter = SegmenterBackend::Uax29.create();
//! let words = split_words(&["Hello, World!"], segmenter.as_ref(), &WordSplitOptions::words());
//! assert_eq!(words, vec![vec!["Hello", "World"]]);
//! ```

use std::ops::Range;

use crate::analysis::segmenter::Segmenter;
use crate::error::Result;
use crate::unicode::category::{GeneralCategory, category_mask};
use crate::unicode::casing::CasingTransform;

/// Code point ranges of the sentences of `text`.
///
/// The ranges are contiguous and cover the whole text; an empty text has no
/// sentences.
pub fn sentence_spans(segmenter: &dyn Segmenter, text: &[char]) -> Vec<Range<usize>> {
    let mut spans: Vec<Range<usize>> = Vec::new();
    for token in segmenter.segment(text) {
        match spans.last_mut() {
            Some(span) if !token.starts_new_sentence => span.end = token.end,
            _ => spans.push(token.start..token.end),
        }
    }
    spans
}

/// Split every text into its sentences.
pub fn split_sentences<T: AsRef<str>>(texts: &[T], segmenter: &dyn Segmenter) -> Vec<Vec<String>> {
    texts
        .iter()
        .map(|text| {
            let chars: Vec<char> = text.as_ref().chars().collect();
            sentence_spans(segmenter, &chars)
                .into_iter()
                .map(|span| chars[span].iter().collect())
                .collect()
        })
        .collect()
}

/// Filter settings for [`split_words`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSplitOptions {
    /// A segment needs at least one of these category bits.
    pub word_mask: u64,
    /// A segment with any of these category bits is dropped.
    pub non_word_mask: u64,
    /// Casing applied to kept segments.
    pub casing: CasingTransform,
}

impl Default for WordSplitOptions {
    fn default() -> Self {
        WordSplitOptions {
            word_mask: GeneralCategory::ALL_MASK,
            non_word_mask: 0,
            casing: CasingTransform::Preserve,
        }
    }
}

impl WordSplitOptions {
    /// Keep segments containing letters or digits.
    pub fn words() -> Self {
        WordSplitOptions {
            word_mask: GeneralCategory::Lu.bit()
                | GeneralCategory::Ll.bit()
                | GeneralCategory::Lt.bit()
                | GeneralCategory::Lm.bit()
                | GeneralCategory::Lo.bit()
                | GeneralCategory::Nd.bit(),
            ..Self::default()
        }
    }

    /// Build options from category names.
    ///
    /// An empty `word_categories` list selects every category.
    pub fn from_names<S: AsRef<str>>(
        word_categories: &[S],
        non_word_categories: &[S],
        casing: CasingTransform,
    ) -> Result<Self> {
        let word_mask = if word_categories.is_empty() {
            GeneralCategory::ALL_MASK
        } else {
            category_mask(word_categories)?
        };
        Ok(WordSplitOptions {
            word_mask,
            non_word_mask: category_mask(non_word_categories)?,
            casing,
        })
    }
}

/// Split every text into the word segments accepted by `options`.
pub fn split_words<T: AsRef<str>>(
    texts: &[T],
    segmenter: &dyn Segmenter,
    options: &WordSplitOptions,
) -> Vec<Vec<String>> {
    texts
        .iter()
        .map(|text| {
            let chars: Vec<char> = text.as_ref().chars().collect();
            segmenter
                .segment(&chars)
                .filter(|token| token.matches_categories(options.word_mask, options.non_word_mask))
                .filter_map(|token| token.to_text(&chars))
                .map(|word| options.casing.apply(&word))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::segmenter::SegmenterBackend;

    #[test]
    fn test_split_sentences_reconstructs_text() {
        let segmenter = SegmenterBackend::Uax29.create();
        let texts = ["Mr. Smith went to Washington. He left.", "", "One. Two."];
        let sentences = split_sentences(&texts, segmenter.as_ref());

        assert_eq!(
            sentences[0],
            vec!["Mr. Smith went to Washington. ", "He left."]
        );
        assert!(sentences[1].is_empty());
        assert_eq!(sentences[2], vec!["One. ", "Two."]);
        for (text, parts) in texts.iter().zip(&sentences) {
            assert_eq!(parts.concat(), *text);
        }
    }

    #[test]
    fn test_split_words_filters_and_lowercases() {
        let segmenter = SegmenterBackend::Uax29.create();
        let options = WordSplitOptions {
            casing: CasingTransform::Lower,
            ..WordSplitOptions::words()
        };
        let words = split_words(&["Hello, World! 42 times."], segmenter.as_ref(), &options);
        assert_eq!(words, vec![vec!["hello", "world", "42", "times"]]);
    }

    #[test]
    fn test_options_from_names() {
        let options =
            WordSplitOptions::from_names(&["Lu", "Ll"], &["Nd"], CasingTransform::Preserve)
                .unwrap();
        assert_eq!(
            options.word_mask,
            GeneralCategory::Lu.bit() | GeneralCategory::Ll.bit()
        );
        assert_eq!(options.non_word_mask, GeneralCategory::Nd.bit());

        let empty: [&str; 0] = [];
        let all = WordSplitOptions::from_names(&empty, &empty, CasingTransform::Preserve).unwrap();
        assert_eq!(all.word_mask, GeneralCategory::ALL_MASK);

        assert!(WordSplitOptions::from_names(&["Zz"], &empty, CasingTransform::Preserve).is_err());
    }
}
