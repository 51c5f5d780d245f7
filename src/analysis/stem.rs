//! Stemming.
//!
//! A stemmer reduces a word to its root form after casing and before the
//! case-insensitive alias lookup. [`StemmerLanguage`] names the available
//! algorithms; the empty identifier selects the [`IdentityStemmer`].
//!
//! Stemmer instances are cheap to build and are created once per worker, so
//! no stemmer state is ever shared between threads.
//!
//! # Examples
//!
//! ```
//! use textvec::analysis::stem::create_stemmer;
//!
//! let stemmer = create_stemmer("english").unwrap();
//! assert_eq!(stemmer.stem("running"), "run");
//!
//! let identity = create_stemmer("").unwrap();
//! assert_eq!(identity.stem("running"), "running");
//! ```

use std::fmt;
use std::str::FromStr;

use rust_stemmers::Algorithm;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TextVecError};

pub mod identity;
pub mod snowball;

pub use identity::IdentityStemmer;
pub use snowball::SnowballStemmer;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

/// A validated stemmer identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StemmerLanguage {
    /// No stemming.
    #[default]
    #[serde(rename = "")]
    None,
    Arabic,
    Danish,
    Dutch,
    English,
    Finnish,
    French,
    German,
    Greek,
    Hungarian,
    Italian,
    Norwegian,
    Portuguese,
    Romanian,
    Russian,
    Spanish,
    Swedish,
    Tamil,
    Turkish,
}

impl StemmerLanguage {
    /// Every language with a stemming algorithm.
    pub const SUPPORTED: [StemmerLanguage; 18] = [
        StemmerLanguage::Arabic,
        StemmerLanguage::Danish,
        StemmerLanguage::Dutch,
        StemmerLanguage::English,
        StemmerLanguage::Finnish,
        StemmerLanguage::French,
        StemmerLanguage::German,
        StemmerLanguage::Greek,
        StemmerLanguage::Hungarian,
        StemmerLanguage::Italian,
        StemmerLanguage::Norwegian,
        StemmerLanguage::Portuguese,
        StemmerLanguage::Romanian,
        StemmerLanguage::Russian,
        StemmerLanguage::Spanish,
        StemmerLanguage::Swedish,
        StemmerLanguage::Tamil,
        StemmerLanguage::Turkish,
    ];

    /// The identifier accepted by [`FromStr`].
    pub fn id(self) -> &'static str {
        match self {
            StemmerLanguage::None => "",
            StemmerLanguage::Arabic => "arabic",
            StemmerLanguage::Danish => "danish",
            StemmerLanguage::Dutch => "dutch",
            StemmerLanguage::English => "english",
            StemmerLanguage::Finnish => "finnish",
            StemmerLanguage::French => "french",
            StemmerLanguage::German => "german",
            StemmerLanguage::Greek => "greek",
            StemmerLanguage::Hungarian => "hungarian",
            StemmerLanguage::Italian => "italian",
            StemmerLanguage::Norwegian => "norwegian",
            StemmerLanguage::Portuguese => "portuguese",
            StemmerLanguage::Romanian => "romanian",
            StemmerLanguage::Russian => "russian",
            StemmerLanguage::Spanish => "spanish",
            StemmerLanguage::Swedish => "swedish",
            StemmerLanguage::Tamil => "tamil",
            StemmerLanguage::Turkish => "turkish",
        }
    }

    pub(crate) fn algorithm(self) -> Option<Algorithm> {
        let algorithm = match self {
            StemmerLanguage::None => return None,
            StemmerLanguage::Arabic => Algorithm::Arabic,
            StemmerLanguage::Danish => Algorithm::Danish,
            StemmerLanguage::Dutch => Algorithm::Dutch,
            StemmerLanguage::English => Algorithm::English,
            StemmerLanguage::Finnish => Algorithm::Finnish,
            StemmerLanguage::French => Algorithm::French,
            StemmerLanguage::German => Algorithm::German,
            StemmerLanguage::Greek => Algorithm::Greek,
            StemmerLanguage::Hungarian => Algorithm::Hungarian,
            StemmerLanguage::Italian => Algorithm::Italian,
            StemmerLanguage::Norwegian => Algorithm::Norwegian,
            StemmerLanguage::Portuguese => Algorithm::Portuguese,
            StemmerLanguage::Romanian => Algorithm::Romanian,
            StemmerLanguage::Russian => Algorithm::Russian,
            StemmerLanguage::Spanish => Algorithm::Spanish,
            StemmerLanguage::Swedish => Algorithm::Swedish,
            StemmerLanguage::Tamil => Algorithm::Tamil,
            StemmerLanguage::Turkish => Algorithm::Turkish,
        };
        Some(algorithm)
    }

    /// Build a fresh stemmer instance.
    pub fn create(self) -> Box<dyn Stemmer> {
        match SnowballStemmer::new(self) {
            Some(stemmer) => Box::new(stemmer),
            None => Box::new(IdentityStemmer::new()),
        }
    }
}

impl fmt::Display for StemmerLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for StemmerLanguage {
    type Err = TextVecError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Ok(StemmerLanguage::None);
        }
        StemmerLanguage::SUPPORTED
            .iter()
            .copied()
            .find(|language| language.id() == s)
            .ok_or_else(|| TextVecError::unsupported_language(s))
    }
}

/// Ids of every supported stemmer, excluding the empty identity id.
pub fn supported_languages() -> Vec<&'static str> {
    StemmerLanguage::SUPPORTED.iter().map(|l| l.id()).collect()
}

/// Resolve a stemmer id and build the stemmer.
///
/// Fails with [`TextVecError::UnsupportedLanguage`] for unknown ids.
pub fn create_stemmer(language: &str) -> Result<Box<dyn Stemmer>> {
    Ok(language.parse::<StemmerLanguage>()?.create())
}
