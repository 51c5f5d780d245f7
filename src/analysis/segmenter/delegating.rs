//! Segmenter backed by the `unicode-segmentation` crate.
//!
//! Word and sentence boundaries come from
//! [`UnicodeSegmentation::split_word_bound_indices`] and
//! [`UnicodeSegmentation::split_sentence_bound_indices`]. Byte offsets are
//! mapped back to code point offsets, sentence boundaries are filtered
//! through the abbreviation suppressions, and tokens are flagged the same
//! way as the built-in engine flags them.

use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::segmenter::Segmenter;
use crate::analysis::segmenter::suppression::SentenceBreakSuppressions;
use crate::analysis::token::{Token, TokenStream};
use crate::unicode::char_class::classify;

/// A segmenter that delegates boundary detection to `unicode-segmentation`.
#[derive(Debug, Clone, Default)]
pub struct UnicodeSegmentationSegmenter {
    suppressions: Option<Arc<SentenceBreakSuppressions>>,
}

impl UnicodeSegmentationSegmenter {
    pub fn new() -> Self {
        UnicodeSegmentationSegmenter { suppressions: None }
    }

    pub fn with_suppressions(suppressions: Option<Arc<SentenceBreakSuppressions>>) -> Self {
        UnicodeSegmentationSegmenter { suppressions }
    }
}

/// Convert the segment start byte offsets of `text` to code point offsets.
fn boundaries(text: &str, offsets: impl Iterator<Item = usize>) -> Vec<usize> {
    let mut boundaries = Vec::new();
    let mut byte = 0;
    let mut code_points = 0;
    for offset in offsets {
        code_points += text[byte..offset].chars().count();
        byte = offset;
        if offset > 0 {
            boundaries.push(code_points);
        }
    }
    if !text.is_empty() {
        boundaries.push(code_points + text[byte..].chars().count());
    }
    boundaries
}

impl Segmenter for UnicodeSegmentationSegmenter {
    fn segment<'a>(&'a self, text: &'a [char]) -> TokenStream<'a> {
        if text.is_empty() {
            return Box::new(std::iter::empty());
        }

        let joined: String = text.iter().collect();
        let word_ends = boundaries(&joined, joined.split_word_bound_indices().map(|(i, _)| i));
        let mut sentence_ends = boundaries(
            &joined,
            joined.split_sentence_bound_indices().map(|(i, _)| i),
        );
        if let Some(suppressions) = self.suppressions.as_deref() {
            sentence_ends.retain(|&end| end == text.len() || !suppressions.suppresses(text, end));
        }

        let mut tokens = Vec::with_capacity(word_ends.len());
        let mut sentence_ends = sentence_ends.into_iter().peekable();
        let mut start = 0;
        let mut starts_new_sentence = false;
        for end in word_ends {
            let category_mask = text[start..end]
                .iter()
                .fold(0u64, |mask, &c| mask | classify(c).category_mask());
            tokens.push(Token::new(start, end, category_mask, starts_new_sentence));

            starts_new_sentence = false;
            while let Some(&sentence_end) = sentence_ends.peek() {
                if sentence_end > end {
                    break;
                }
                starts_new_sentence = true;
                sentence_ends.next();
            }
            start = end;
        }

        Box::new(tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "unicode_segmentation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_boundaries_are_code_points() {
        let text = "né à";
        let ends = boundaries(text, text.split_word_bound_indices().map(|(i, _)| i));
        assert_eq!(ends, vec![2, 3, 4]);
    }

    #[test]
    fn test_partition_and_sentences() {
        let text = chars("Hello there. Bye now.");
        let segmenter = UnicodeSegmentationSegmenter::new();
        let tokens: Vec<Token> = segmenter.segment(&text).collect();

        assert_eq!(tokens.first().map(|t| t.start), Some(0));
        assert_eq!(tokens.last().map(|t| t.end), Some(text.len()));
        let flagged: Vec<String> = tokens
            .iter()
            .filter(|t| t.starts_new_sentence)
            .filter_map(|t| t.to_text(&text))
            .collect();
        assert_eq!(flagged, vec!["Bye"]);
    }

    #[test]
    fn test_abbreviation_suppression() {
        let text = chars("Dr. Who arrived. Then left.");
        let plain = UnicodeSegmentationSegmenter::new();
        let suppressed = UnicodeSegmentationSegmenter::with_suppressions(Some(Arc::new(
            SentenceBreakSuppressions::default(),
        )));

        let count = |segmenter: &UnicodeSegmentationSegmenter| {
            segmenter
                .segment(&text)
                .filter(|t| t.starts_new_sentence)
                .count()
        };
        assert_eq!(count(&plain), 2);
        assert_eq!(count(&suppressed), 1);
    }

    #[test]
    fn test_empty() {
        let text: Vec<char> = Vec::new();
        assert_eq!(UnicodeSegmentationSegmenter::new().segment(&text).count(), 0);
    }
}
