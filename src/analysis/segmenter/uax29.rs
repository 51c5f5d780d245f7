//! Built-in UAX #29 word and sentence boundary engine.
//!
//! [`Uax29Segmenter`] yields word-break segments while tracking sentence
//! boundaries in the same pass. The engine keeps a small sliding window of
//! character classes around the read position (`previous`, `current`,
//! `next`, `next_next`) plus a four-slot history of the sentence-relevant
//! classes seen so far, and evaluates the word rules WB3 to WB16 and the
//! sentence rules SB3 to SB11 against it.
//!
//! Extend and Format characters are absorbed into the character before them
//! (WB4/SB5): they never become `current`, so rules that look one character
//! back see through them. A hard break (CR, LF, Newline, paragraph
//! separator) never absorbs.
//!
//! # Examples
//!
//! ```
//! use textvec::analysis::segmenter::{Segmenter, Uax29Segmenter};
//!
//! let segmenter = Uax29Segmenter::new();
//! let text: Vec<char> = "can't stop".chars().collect();
//! let words: Vec<String> = segmenter
//!     .segment(&text)
//!     .map(|t| text[t.start..t.end].iter().collect())
//!     .collect();
//! assert_eq!(words, vec!["can't", " ", "stop"]);
//! ```

use std::sync::Arc;

use crate::analysis::segmenter::Segmenter;
use crate::analysis::segmenter::suppression::SentenceBreakSuppressions;
use crate::analysis::token::{Token, TokenStream};
use crate::unicode::char_class::{CharClass, classify};

/// Rule-based UAX #29 segmenter.
#[derive(Debug, Clone, Default)]
pub struct Uax29Segmenter {
    suppressions: Option<Arc<SentenceBreakSuppressions>>,
}

impl Uax29Segmenter {
    /// Create a segmenter without abbreviation suppression.
    pub fn new() -> Self {
        Uax29Segmenter { suppressions: None }
    }

    /// Create a segmenter that consults `suppressions` before reporting a
    /// sentence boundary.
    pub fn with_suppressions(suppressions: Option<Arc<SentenceBreakSuppressions>>) -> Self {
        Uax29Segmenter { suppressions }
    }
}

impl Segmenter for Uax29Segmenter {
    fn segment<'a>(&'a self, text: &'a [char]) -> TokenStream<'a> {
        Box::new(Uax29Tokens::new(text, self.suppressions.as_deref()))
    }

    fn name(&self) -> &'static str {
        "uax29"
    }
}

/// The four most recent sentence-significant classes.
///
/// Runs of Close and of Sp collapse to one entry and Extend/Format never
/// enter, so the SATerm Close* Sp* patterns of SB8 to SB11 reduce to fixed
/// slot comparisons.
#[derive(Debug, Clone, Copy)]
struct SentenceHistory {
    slots: [CharClass; 4],
    head: usize,
}

impl SentenceHistory {
    fn new() -> Self {
        SentenceHistory {
            slots: [CharClass::UNKNOWN; 4],
            head: 0,
        }
    }

    /// Class pushed `age` entries ago; `0` is the newest.
    #[inline]
    fn get(&self, age: usize) -> CharClass {
        self.slots[(self.head + 4 - (age & 3)) & 3]
    }

    fn push(&mut self, class: CharClass) {
        let newest = self.get(0);
        let significant = !class
            .any(CharClass::CLOSE | CharClass::SP | CharClass::EXTEND | CharClass::FORMAT)
            || (class.is_sp() && !newest.is_sp())
            || (class.is_close() && !newest.is_close());
        if significant {
            self.head = (self.head + 1) & 3;
            self.slots[self.head] = class;
        }
    }

    /// `X Close* Sp*` ending at the newest entry, where `X` matches `term`.
    fn ends_with_term_close_sp(&self, term: u64) -> bool {
        let (s0, s1, s2) = (self.get(0), self.get(1), self.get(2));
        s0.any(term)
            || (s1.any(term) && (s0.is_close() || s0.is_sp()))
            || (s2.any(term) && s1.is_close() && s0.is_sp())
    }

    /// `X Close*` ending at the newest entry.
    fn ends_with_term_close(&self, term: u64) -> bool {
        let (s0, s1) = (self.get(0), self.get(1));
        s0.any(term) || (s1.any(term) && s0.is_close())
    }
}

/// Iterator over the word-break segments of one document.
pub struct Uax29Tokens<'a> {
    text: &'a [char],
    suppressions: Option<&'a SentenceBreakSuppressions>,
    /// Number of code points consumed.
    position: usize,
    previous: CharClass,
    current: CharClass,
    next: CharClass,
    next_next: CharClass,
    history: SentenceHistory,
    /// Length of the regional indicator run ending at `current`.
    regional_run: usize,
    /// A sentence boundary was seen since the last token was emitted.
    new_sentence: bool,
}

impl<'a> Uax29Tokens<'a> {
    pub fn new(text: &'a [char], suppressions: Option<&'a SentenceBreakSuppressions>) -> Self {
        let mut tokens = Uax29Tokens {
            text,
            suppressions,
            position: 0,
            previous: CharClass::UNKNOWN,
            current: CharClass::UNKNOWN,
            next: CharClass::UNKNOWN,
            next_next: CharClass::UNKNOWN,
            history: SentenceHistory::new(),
            regional_run: 0,
            new_sentence: false,
        };
        tokens.next = tokens.class_at(0);
        tokens.next_next = tokens.class_at(1);
        tokens
    }

    #[inline]
    fn class_at(&self, index: usize) -> CharClass {
        self.text
            .get(index)
            .map_or(CharClass::UNKNOWN, |&c| classify(c))
    }

    /// Consume one code point and return its raw class.
    fn read_char(&mut self) -> CharClass {
        let raw = self.next;
        let absorbed = self.position > 0 && raw.is_ignorable() && !self.current.is_hard_break();
        if !absorbed {
            self.previous = self.current;
            self.current = raw;
            self.history.push(raw);
            if raw.is_regional_indicator() {
                self.regional_run += 1;
            } else {
                self.regional_run = 0;
            }
        }

        self.next = self.next_next;
        self.next_next = self.class_at(self.position + 2);
        self.position += 1;
        raw
    }

    /// First class after `next` that is not Extend/Format.
    fn next_significant(&self) -> CharClass {
        if !self.next_next.is_ignorable() {
            return self.next_next;
        }
        self.text
            .iter()
            .skip(self.position + 2)
            .map(|&c| classify(c))
            .find(|class| !class.is_ignorable())
            .unwrap_or(CharClass::UNKNOWN)
    }

    /// Is there a word boundary between `current` and `next`?
    fn is_word_break(&self) -> bool {
        let current = self.current;
        let next = self.next;
        let hard = CharClass::NEWLINE | CharClass::CR | CharClass::LF;

        // WB3
        if current.is_cr() && next.is_lf() {
            return false;
        }
        // WB3a, WB3b
        if current.any(hard) || next.any(hard) {
            return true;
        }
        // WB3d
        if current.is_wseg_space() && next.is_wseg_space() {
            return false;
        }
        // WB4
        if next.is_ignorable() {
            return false;
        }

        let previous = self.previous;
        let mid_letter = CharClass::MID_LETTER | CharClass::MID_NUM_LET_Q;
        let mid_num = CharClass::MID_NUM | CharClass::MID_NUM_LET_Q;

        // WB5
        if current.is_ahletter() && next.is_ahletter() {
            return false;
        }
        // WB7
        if previous.is_ahletter() && current.any(mid_letter) && next.is_ahletter() {
            return false;
        }
        // WB7a
        if current.is_hebrew_letter() && next.is_single_quote() {
            return false;
        }
        // WB7c
        if previous.is_hebrew_letter() && current.is_double_quote() && next.is_hebrew_letter() {
            return false;
        }
        // WB8, WB9
        if current.any(CharClass::NUMERIC | CharClass::AHLETTER) && next.is_numeric() {
            return false;
        }
        // WB10
        if current.is_numeric() && next.is_ahletter() {
            return false;
        }
        // WB11
        if previous.is_numeric() && current.any(mid_num) && next.is_numeric() {
            return false;
        }
        // WB13
        if current.is_katakana() && next.is_katakana() {
            return false;
        }
        // WB13a
        if current.any(
            CharClass::AHLETTER | CharClass::NUMERIC | CharClass::KATAKANA | CharClass::EXTEND_NUM_LET,
        ) && next.is_extend_num_let()
        {
            return false;
        }
        // WB13b
        if current.is_extend_num_let()
            && next.any(CharClass::AHLETTER | CharClass::NUMERIC | CharClass::KATAKANA)
        {
            return false;
        }
        // WB15, WB16
        if current.is_regional_indicator()
            && next.is_regional_indicator()
            && self.regional_run % 2 == 1
        {
            return false;
        }

        // Rules that need the class after `next`.
        if next.any(mid_letter | mid_num | CharClass::DOUBLE_QUOTE) {
            let next2 = self.next_significant();
            // WB6
            if current.is_ahletter() && next.any(mid_letter) && next2.is_ahletter() {
                return false;
            }
            // WB7b
            if current.is_hebrew_letter() && next.is_double_quote() && next2.is_hebrew_letter() {
                return false;
            }
            // WB12
            if current.is_numeric() && next.any(mid_num) && next2.is_numeric() {
                return false;
            }
        }

        // WB999
        true
    }

    /// Is there a sentence boundary between `current` and `next`?
    fn is_sentence_break(&self) -> bool {
        let current = self.current;
        let next = self.next;

        // SB3
        if current.is_cr() && next.is_lf() {
            return false;
        }
        // SB4
        if current.is_para_sep() {
            return true;
        }
        // SB5
        if next.is_ignorable() {
            return false;
        }
        // SB6
        if current.is_aterm() && next.is_numeric() {
            return false;
        }
        // SB7
        if self.previous.any(CharClass::UPPER | CharClass::LOWER)
            && current.is_aterm()
            && next.is_upper()
        {
            return false;
        }

        let history = &self.history;
        // SB8
        if history.ends_with_term_close_sp(CharClass::ATERM) && self.lookahead_is_lower() {
            return false;
        }
        let saterm_close_sp = history.ends_with_term_close_sp(CharClass::SATERM);
        // SB8a
        if saterm_close_sp && next.any(CharClass::SCONTINUE | CharClass::SATERM) {
            return false;
        }
        // SB9
        if history.ends_with_term_close(CharClass::SATERM)
            && next.any(CharClass::CLOSE | CharClass::SP | CharClass::PARA_SEP)
        {
            return false;
        }
        // SB10
        if saterm_close_sp && next.any(CharClass::SP | CharClass::PARA_SEP) {
            return false;
        }
        // SB11
        if saterm_close_sp {
            return !self.is_suppressed();
        }

        // SB998
        false
    }

    /// SB8 lookahead: skip everything that is not a letter, a paragraph
    /// separator or a terminator, and report whether a lowercase letter
    /// comes first.
    fn lookahead_is_lower(&self) -> bool {
        self.text
            .iter()
            .skip(self.position)
            .map(|&c| classify(c))
            .find(|class| class.any(CharClass::SB8_STOP))
            .is_some_and(|class| class.is_lower())
    }

    fn is_suppressed(&self) -> bool {
        self.suppressions
            .is_some_and(|suppressions| suppressions.suppresses(self.text, self.position))
    }
}

impl Iterator for Uax29Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.position >= self.text.len() {
            return None;
        }

        let start = self.position;
        let starts_new_sentence = self.new_sentence;
        self.new_sentence = false;
        let mut category_mask = 0u64;

        while self.position < self.text.len() {
            let raw = self.read_char();
            category_mask |= raw.category_mask();
            if !self.new_sentence && self.is_sentence_break() {
                self.new_sentence = true;
            }
            if self.is_word_break() {
                break;
            }
        }

        Some(Token::new(
            start,
            self.position,
            category_mask,
            starts_new_sentence,
        ))
    }
}
