//! Configuration for vectorizers.
//!
//! [`VectorizerConfig`] holds every construction parameter of a
//! [`Vectorizer`](crate::vectorizer::Vectorizer). It can be deserialized from
//! JSON (missing fields take their defaults) or assembled with
//! [`VectorizerBuilder`]. Nothing is validated here; validation happens when
//! the vectorizer is built.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::segmenter::SegmenterBackend;
use crate::error::Result;
use crate::vectorizer::engine::Vectorizer;

/// What a batch call does with a document that is not valid UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodingErrorPolicy {
    /// Log a warning and produce an empty result for that document.
    #[default]
    Skip,
    /// Fail the whole call.
    Fail,
}

/// Construction parameters of a vectorizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorizerConfig {
    /// Terms and `_`-joined n-grams that become matrix columns, in order.
    pub vocabulary: Vec<String>,

    /// Terms dropped after stemming.
    pub ignored_terms: Vec<String>,

    /// Casing transform: `""`/`"preserve"` or `"lower"`.
    pub casing: String,

    /// Replacements applied to raw token text.
    pub case_sensitive_aliases: BTreeMap<String, String>,

    /// Replacements applied after casing and stemming.
    pub case_insensitive_aliases: BTreeMap<String, String>,

    /// Longest n-gram emitted; `1` means unigrams only.
    pub ngram_size: usize,

    /// Minimum length in code points, measured before casing, for a unigram
    /// to be counted.
    pub min_term_length: usize,

    /// Stemmer id; empty for none.
    pub stemmer: String,

    /// General categories that make a token a word; empty means all.
    pub word_categories: Vec<String>,

    /// General categories that disqualify a token.
    pub non_word_categories: Vec<String>,

    /// BCP-47-like locale tag; empty for the root locale.
    pub locale: String,

    /// Boundary engine.
    pub backend: SegmenterBackend,

    /// Keep sentences together across title abbreviations such as "Mr.".
    pub suppress_abbreviations: bool,

    /// Compare term text on hash hits instead of trusting the hash.
    pub strict_hashing: bool,

    /// Handling of invalid UTF-8 input.
    pub on_invalid_encoding: EncodingErrorPolicy,

    /// Worker threads for parallel calls.
    /// If None, uses the number of CPU cores.
    pub threads: Option<usize>,

    /// Smallest number of documents handed to one worker at a time.
    pub min_chunk_len: usize,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            vocabulary: Vec::new(),
            ignored_terms: Vec::new(),
            casing: String::new(),
            case_sensitive_aliases: BTreeMap::new(),
            case_insensitive_aliases: BTreeMap::new(),
            ngram_size: 1,
            min_term_length: 1,
            stemmer: String::new(),
            word_categories: Vec::new(),
            non_word_categories: Vec::new(),
            locale: String::new(),
            backend: SegmenterBackend::Uax29,
            suppress_abbreviations: true,
            strict_hashing: false,
            on_invalid_encoding: EncodingErrorPolicy::Skip,
            threads: None,
            min_chunk_len: 100,
        }
    }
}

impl VectorizerConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Parse a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the configuration to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Fluent builder for [`Vectorizer`].
///
/// # Examples
///
/// ```
/// use textvec::vectorizer::VectorizerBuilder;
///
/// let vectorizer = VectorizerBuilder::new()
///     .vocabulary(["quick", "fox", "quick_brown"])
///     .casing("lower")
///     .ngram_size(2)
///     .word_categories(["Lu", "Ll", "Nd"])
///     .build()
///     .unwrap();
/// assert_eq!(vectorizer.vocabulary().len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct VectorizerBuilder {
    config: VectorizerConfig,
}

impl VectorizerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: VectorizerConfig) -> Self {
        VectorizerBuilder { config }
    }

    pub fn vocabulary<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.vocabulary = terms.into_iter().map(Into::into).collect();
        self
    }

    pub fn ignored_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.ignored_terms = terms.into_iter().map(Into::into).collect();
        self
    }

    pub fn casing<S: Into<String>>(mut self, casing: S) -> Self {
        self.config.casing = casing.into();
        self
    }

    pub fn case_sensitive_alias<K: Into<String>, V: Into<String>>(
        mut self,
        term: K,
        replacement: V,
    ) -> Self {
        self.config
            .case_sensitive_aliases
            .insert(term.into(), replacement.into());
        self
    }

    pub fn case_insensitive_alias<K: Into<String>, V: Into<String>>(
        mut self,
        term: K,
        replacement: V,
    ) -> Self {
        self.config
            .case_insensitive_aliases
            .insert(term.into(), replacement.into());
        self
    }

    pub fn ngram_size(mut self, size: usize) -> Self {
        self.config.ngram_size = size;
        self
    }

    pub fn min_term_length(mut self, length: usize) -> Self {
        self.config.min_term_length = length;
        self
    }

    pub fn stemmer<S: Into<String>>(mut self, language: S) -> Self {
        self.config.stemmer = language.into();
        self
    }

    pub fn word_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.word_categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn non_word_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.non_word_categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn locale<S: Into<String>>(mut self, locale: S) -> Self {
        self.config.locale = locale.into();
        self
    }

    pub fn backend(mut self, backend: SegmenterBackend) -> Self {
        self.config.backend = backend;
        self
    }

    pub fn suppress_abbreviations(mut self, enabled: bool) -> Self {
        self.config.suppress_abbreviations = enabled;
        self
    }

    pub fn strict_hashing(mut self, enabled: bool) -> Self {
        self.config.strict_hashing = enabled;
        self
    }

    pub fn on_invalid_encoding(mut self, policy: EncodingErrorPolicy) -> Self {
        self.config.on_invalid_encoding = policy;
        self
    }

    pub fn threads(mut self, threads: usize) -> Self {
        self.config.threads = Some(threads);
        self
    }

    pub fn min_chunk_len(mut self, len: usize) -> Self {
        self.config.min_chunk_len = len;
        self
    }

    /// The configuration assembled so far.
    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }

    /// Validate the configuration and build the vectorizer.
    pub fn build(self) -> Result<Vectorizer> {
        Vectorizer::new(self.config)
    }
}
