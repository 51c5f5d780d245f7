//! # textvec
//!
//! Unicode text segmentation and bag-of-n-grams document vectorization.
//!
//! ## Features
//!
//! - UAX #29 word and sentence segmentation over any Unicode text
//! - General-category token filters, casing, stemming and term aliases
//! - Word n-grams that never cross sentence boundaries
//! - Documents-by-vocabulary count matrices in compressed sparse column form
//! - Parallel batch processing on a dedicated worker pool
//!
//! ## Example
//!
//! ```
//! use textvec::vectorizer::Vectorizer;
//!
//! let vectorizer = Vectorizer::builder()
//!     .vocabulary(["cat", "dog", "black_cat"])
//!     .casing("lower")
//!     .ngram_size(2)
//!     .word_categories(["Lu", "Ll"])
//!     .build()
//!     .unwrap();
//!
//! let matrix = vectorizer
//!     .vectorize(&["The black cat.", "A dog and a cat."], false, false)
//!     .unwrap();
//! assert_eq!(matrix.dims, (2, 3));
//! assert_eq!(matrix.get(0, 2), 1);
//! assert_eq!(matrix.get(1, 1), 1);
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod matrix;
pub mod unicode;
pub mod util;
pub mod vectorizer;

pub mod prelude {
    pub use crate::analysis::segmenter::{Segmenter, SegmenterBackend};
    pub use crate::analysis::split::{WordSplitOptions, split_sentences, split_words};
    pub use crate::error::{Result, TextVecError};
    pub use crate::matrix::CscMatrix;
    pub use crate::unicode::{general_category_names, unicode_version};
    pub use crate::vectorizer::{
        Vectorizer, VectorizerBuilder, VectorizerConfig, VectorizerRegistry, build_vectorizer,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
