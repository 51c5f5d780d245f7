//! Snowball stemmers from the `rust-stemmers` crate.

use std::fmt;

use crate::analysis::stem::{Stemmer, StemmerLanguage};

/// A Snowball stemming algorithm for one language.
pub struct SnowballStemmer {
    language: StemmerLanguage,
    inner: rust_stemmers::Stemmer,
}

impl fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("language", &self.language)
            .finish()
    }
}

impl SnowballStemmer {
    /// Create a stemmer; `None` for [`StemmerLanguage::None`].
    pub fn new(language: StemmerLanguage) -> Option<Self> {
        let algorithm = language.algorithm()?;
        Some(SnowballStemmer {
            language,
            inner: rust_stemmers::Stemmer::create(algorithm),
        })
    }

    pub fn language(&self) -> StemmerLanguage {
        self.language
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(word).into_owned()
    }

    fn name(&self) -> &'static str {
        "snowball"
    }
}
