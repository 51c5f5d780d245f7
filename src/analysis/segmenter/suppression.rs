//! Abbreviation-aware sentence-break suppression.
//!
//! A full stop after a title such as "Mr" does not end a sentence even when
//! the next word is capitalized. [`SentenceBreakSuppressions`] holds a set of
//! such abbreviations and vetoes a candidate sentence boundary when the text
//! immediately before it reads `<abbreviation>.` optionally followed by
//! closing punctuation and spaces.

use ahash::AHashSet;

use crate::unicode::char_class::{CharClass, classify};

/// Longest abbreviation considered, in code points.
const MAX_ABBREVIATION_LEN: usize = 16;

/// Abbreviations that never end a sentence.
pub const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "Mr", "Mrs", "Ms", "Mx", "Dr", "Prof", "St", "Jr", "Sr", "Mt", "Rev", "Hon", "Gen", "Col",
    "Capt", "Lt", "Sgt", "Gov", "Sen", "Rep", "Messrs", "vs", "etc", "e.g", "i.e", "cf", "approx",
];

/// A set of abbreviations that suppress sentence breaks.
#[derive(Debug, Clone)]
pub struct SentenceBreakSuppressions {
    words: AHashSet<Vec<char>>,
}

impl Default for SentenceBreakSuppressions {
    fn default() -> Self {
        Self::from_words(DEFAULT_ABBREVIATIONS.iter().copied())
    }
}

impl SentenceBreakSuppressions {
    /// A set that suppresses nothing.
    pub fn empty() -> Self {
        SentenceBreakSuppressions {
            words: AHashSet::new(),
        }
    }

    /// Build a set from abbreviations written without their final full stop.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim_end_matches('.').chars().collect::<Vec<char>>())
            .filter(|w| !w.is_empty() && w.len() <= MAX_ABBREVIATION_LEN)
            .collect();
        SentenceBreakSuppressions { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check whether a sentence boundary before `text[boundary]` should be
    /// dropped.
    pub fn suppresses(&self, text: &[char], boundary: usize) -> bool {
        if self.words.is_empty() || boundary == 0 || boundary > text.len() {
            return false;
        }

        // Skip trailing spaces, then closing punctuation.
        let mut end = boundary;
        while end > 0 && classify(text[end - 1]).is_sp() {
            end -= 1;
        }
        while end > 0 && classify(text[end - 1]).is_close() {
            end -= 1;
        }
        if end == 0 || !classify(text[end - 1]).is_aterm() {
            return false;
        }
        let word_end = end - 1;

        let mut start = word_end;
        while start > 0 && word_end - start < MAX_ABBREVIATION_LEN {
            let class = classify(text[start - 1]);
            if class.is_ahletter() || (class.is_aterm() && start < word_end) {
                start -= 1;
            } else {
                break;
            }
        }
        if start == word_end {
            return false;
        }
        if start > 0 && classify(text[start - 1]).any(CharClass::AHLETTER | CharClass::NUMERIC) {
            return false;
        }

        self.words.contains(&text[start..word_end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_title_suppresses() {
        let suppressions = SentenceBreakSuppressions::default();
        let text = chars("Mr. Smith");
        assert!(suppressions.suppresses(&text, 4));
    }

    #[test]
    fn test_regular_word_does_not_suppress() {
        let suppressions = SentenceBreakSuppressions::default();
        let text = chars("Washington. He");
        assert!(!suppressions.suppresses(&text, 12));
    }

    #[test]
    fn test_suffix_of_longer_word_does_not_suppress() {
        let suppressions = SentenceBreakSuppressions::default();
        let text = chars("Dr. Stmr. Next");
        assert!(suppressions.suppresses(&text, 4));
        assert!(!suppressions.suppresses(&text, 10));
    }

    #[test]
    fn test_dotted_abbreviation_and_close() {
        let suppressions = SentenceBreakSuppressions::default();
        let text = chars("(see e.g.) Later");
        assert!(suppressions.suppresses(&text, 11));
    }

    #[test]
    fn test_empty_set() {
        let suppressions = SentenceBreakSuppressions::empty();
        let text = chars("Mr. Smith");
        assert!(!suppressions.suppresses(&text, 4));
        assert!(suppressions.is_empty());
    }

    #[test]
    fn test_custom_words() {
        let suppressions = SentenceBreakSuppressions::from_words(["Fig.", "No"]);
        assert_eq!(suppressions.len(), 2);
        let text = chars("See Fig. Two");
        assert!(suppressions.suppresses(&text, 9));
    }
}
