//! Word and sentence segmentation.
//!
//! A [`Segmenter`] walks a decoded document and yields every word-break
//! segment as a [`Token`](crate::analysis::token::Token), in text order and
//! partitioning the document exactly. Each token also carries the sentence
//! information the vectorizer needs: whether a sentence boundary fell inside
//! or at the end of the token before it.
//!
//! # Available Segmenters
//!
//! - [`uax29::Uax29Segmenter`] - Built-in UAX #29 rule engine (default)
//! - [`delegating::UnicodeSegmentationSegmenter`] - Delegates boundary
//!   detection to the `unicode-segmentation` crate
//!
//! # Examples
//!
//! ```
//! use textvec::analysis::segmenter::{Segmenter, SegmenterBackend};
//!
//! let segmenter = SegmenterBackend::Uax29.create();
//! let text: Vec<char> = "Hi there. Bye.".chars().collect();
//! let tokens: Vec<_> = segmenter.segment(&text).collect();
//! assert_eq!(tokens.first().map(|t| t.start), Some(0));
//! assert_eq!(tokens.last().map(|t| t.end), Some(text.len()));
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::token::TokenStream;
use crate::error::{Result, TextVecError};

pub mod delegating;
pub mod suppression;
pub mod uax29;

pub use delegating::UnicodeSegmentationSegmenter;
pub use suppression::SentenceBreakSuppressions;
pub use uax29::Uax29Segmenter;

/// Trait for segmenters that split decoded text into word-break segments.
///
/// Implementations hold no per-call state and can be shared across threads;
/// each call to [`segment`](Segmenter::segment) gets its own iterator.
pub trait Segmenter: Send + Sync {
    /// Segment `text` into tokens that partition it in order.
    fn segment<'a>(&'a self, text: &'a [char]) -> TokenStream<'a>;

    /// Get the name of this segmenter.
    fn name(&self) -> &'static str;
}

/// Which boundary engine a vectorizer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmenterBackend {
    /// Built-in rule engine.
    #[default]
    Uax29,
    /// The `unicode-segmentation` crate.
    UnicodeSegmentation,
}

impl SegmenterBackend {
    /// Build a segmenter with the default abbreviation suppressions.
    pub fn create(self) -> Box<dyn Segmenter> {
        self.create_with(Some(Arc::new(SentenceBreakSuppressions::default())))
    }

    /// Build a segmenter with explicit sentence-break suppressions.
    pub fn create_with(
        self,
        suppressions: Option<Arc<SentenceBreakSuppressions>>,
    ) -> Box<dyn Segmenter> {
        match self {
            SegmenterBackend::Uax29 => Box::new(Uax29Segmenter::with_suppressions(suppressions)),
            SegmenterBackend::UnicodeSegmentation => {
                Box::new(UnicodeSegmentationSegmenter::with_suppressions(suppressions))
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SegmenterBackend::Uax29 => "uax29",
            SegmenterBackend::UnicodeSegmentation => "unicode_segmentation",
        }
    }
}

impl fmt::Display for SegmenterBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SegmenterBackend {
    type Err = TextVecError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" | "uax29" => Ok(SegmenterBackend::Uax29),
            "unicode_segmentation" | "unicode-segmentation" => {
                Ok(SegmenterBackend::UnicodeSegmentation)
            }
            other => Err(TextVecError::invalid_argument(format!(
                "unknown segmenter backend: '{other}'"
            ))),
        }
    }
}
