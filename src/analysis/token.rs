//! Token types produced by segmenters.
//!
//! A [`Token`] does not own its text. It records a half-open range of code
//! point offsets into the decoded document together with the union of the
//! general categories of the code points it covers, and whether a sentence
//! boundary fell before it.
//!
//! # Examples
//!
//! ```
//! use textvec::analysis::token::Token;
//!
//! let text: Vec<char> = "hello world".chars().collect();
//! let token = Token::new(6, 11, 0, false);
//! assert_eq!(token.to_text(&text).as_deref(), Some("world"));
//! ```

use crate::error::{Result, TextVecError};

/// A word-break segment of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    /// Offset of the first code point.
    pub start: usize,
    /// Offset one past the last code point.
    pub end: usize,
    /// Bitwise OR of the general category bits of every covered code point.
    pub category_mask: u64,
    /// A sentence boundary occurred inside or at the end of the previous token.
    pub starts_new_sentence: bool,
}

impl Token {
    /// Create a token covering `start..end`.
    pub fn new(start: usize, end: usize, category_mask: u64, starts_new_sentence: bool) -> Self {
        Token {
            start,
            end,
            category_mask,
            starts_new_sentence,
        }
    }

    /// Number of code points in the token.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check whether the token covers no code points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check the category filter: at least one word category and no
    /// non-word category.
    #[inline]
    pub fn matches_categories(&self, word_mask: u64, non_word_mask: u64) -> bool {
        self.category_mask & word_mask != 0 && self.category_mask & non_word_mask == 0
    }

    /// View of the token inside `source`, if the range fits.
    pub fn span<'a>(&self, source: &'a [char]) -> Option<TextSpan<'a>> {
        TextSpan::new(source, self.start, self.len()).ok()
    }

    /// Copy the token text out of `source`.
    pub fn to_text(&self, source: &[char]) -> Option<String> {
        self.span(source).map(|span| span.to_string())
    }
}

/// Type alias for a stream of tokens.
pub type TokenStream<'a> = Box<dyn Iterator<Item = Token> + 'a>;

/// A bounds-checked window over a code point buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSpan<'a> {
    buffer: &'a [char],
    start: usize,
    len: usize,
}

impl<'a> TextSpan<'a> {
    /// Create a span of `len` code points starting at `start`.
    pub fn new(buffer: &'a [char], start: usize, len: usize) -> Result<Self> {
        match start.checked_add(len) {
            Some(end) if end <= buffer.len() => Ok(TextSpan { buffer, start, len }),
            _ => Err(TextVecError::invalid_argument(format!(
                "span {start}+{len} exceeds buffer of {} code points",
                buffer.len()
            ))),
        }
    }

    /// Span over a whole buffer.
    pub fn whole(buffer: &'a [char]) -> Self {
        TextSpan {
            buffer,
            start: 0,
            len: buffer.len(),
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The covered code points.
    pub fn as_chars(&self) -> &'a [char] {
        &self.buffer[self.start..self.start + self.len]
    }

    /// Drop `n` code points from the front.
    pub fn trim_start(&self, n: usize) -> Result<Self> {
        if n > self.len {
            return Err(TextVecError::invalid_argument(format!(
                "cannot trim {n} code points from a span of {}",
                self.len
            )));
        }
        Ok(TextSpan {
            buffer: self.buffer,
            start: self.start + n,
            len: self.len - n,
        })
    }

    /// Drop `n` code points from the back.
    pub fn trim_end(&self, n: usize) -> Result<Self> {
        if n > self.len {
            return Err(TextVecError::invalid_argument(format!(
                "cannot trim {n} code points from a span of {}",
                self.len
            )));
        }
        Ok(TextSpan {
            buffer: self.buffer,
            start: self.start,
            len: self.len - n,
        })
    }
}

impl std::fmt::Display for TextSpan<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in self.as_chars() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
