//! Per-document processing.
//!
//! [`PipelineSettings`] is the validated, read-only form of a
//! [`VectorizerConfig`]; it is shared by every worker. Each worker owns a
//! [`DocumentPipeline`] holding its private segmenter, stemmer and n-gram
//! window, and feeds every document through these stages:
//!
//! 1. segment into word tokens, opening a new sentence group (and resetting
//!    the n-gram window) whenever a token starts a new sentence
//! 2. drop tokens failing the category filter
//! 3. case-sensitive alias on the raw text
//! 4. record the length for the minimum-length check
//! 5. casing, then stemming
//! 6. case-insensitive alias; an empty result drops the token
//! 7. emit the unigram if it is long enough, then push it through the
//!    n-gram window
//!
//! Short tokens are still pushed through the window, so they take part in
//! n-grams even when they are not counted alone.

use std::sync::{Arc, LazyLock};

use log::debug;
use regex::Regex;

use crate::analysis::alias::AliasMap;
use crate::analysis::ngram::{NGramWindow, Term};
use crate::analysis::segmenter::{Segmenter, SegmenterBackend, SentenceBreakSuppressions};
use crate::analysis::stem::{Stemmer, StemmerLanguage};
use crate::error::{Result, TextVecError};
use crate::unicode::casing::CasingTransform;
use crate::unicode::category::{GeneralCategory, category_mask};
use crate::vectorizer::config::{EncodingErrorPolicy, VectorizerConfig};
use crate::vectorizer::sink::DocumentSink;
use crate::vectorizer::vocabulary::VocabularyIndex;

static LOCALE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}([_-][A-Za-z0-9]{1,8})*$").expect("locale pattern")
});

/// Check a locale tag. The empty string is the root locale.
pub fn validate_locale(locale: &str) -> Result<()> {
    if locale.is_empty() || LOCALE.is_match(locale) {
        Ok(())
    } else {
        Err(TextVecError::invalid_argument(format!(
            "invalid locale: '{locale}'"
        )))
    }
}

/// Validated settings shared by all workers of a vectorizer.
#[derive(Debug)]
pub struct PipelineSettings {
    pub vocabulary: VocabularyIndex,
    pub case_sensitive_aliases: AliasMap,
    pub case_insensitive_aliases: AliasMap,
    pub casing: CasingTransform,
    pub ngram_size: usize,
    /// Empty window of the validated size; each worker clones it.
    pub window: NGramWindow,
    pub min_term_length: usize,
    pub stemmer: StemmerLanguage,
    pub word_mask: u64,
    pub non_word_mask: u64,
    pub locale: String,
    pub backend: SegmenterBackend,
    pub suppressions: Option<Arc<SentenceBreakSuppressions>>,
    pub on_invalid_encoding: EncodingErrorPolicy,
}

impl PipelineSettings {
    /// Validate `config`.
    ///
    /// Fails with [`TextVecError::InvalidArgument`] for an unknown casing
    /// mode, category name or malformed locale, or a zero n-gram size, and
    /// with [`TextVecError::UnsupportedLanguage`] for an unknown stemmer.
    pub fn from_config(config: &VectorizerConfig) -> Result<Self> {
        let casing: CasingTransform = config.casing.parse()?;
        let stemmer: StemmerLanguage = config.stemmer.parse()?;
        let window = NGramWindow::new(config.ngram_size)?;
        validate_locale(&config.locale)?;

        let word_mask = if config.word_categories.is_empty() {
            GeneralCategory::ALL_MASK
        } else {
            category_mask(&config.word_categories)?
        };
        let non_word_mask = category_mask(&config.non_word_categories)?;

        let strict = config.strict_hashing;
        let vocabulary = VocabularyIndex::new(config.vocabulary.iter().cloned(), strict);
        let case_sensitive_aliases = AliasMap::from_pairs(
            config
                .case_sensitive_aliases
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
            strict,
        );
        let mut case_insensitive_aliases = AliasMap::from_pairs(
            config
                .case_insensitive_aliases
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
            strict,
        );

        // Ignored terms are matched in stemmed form.
        let ignored_stemmer = stemmer.create();
        for term in &config.ignored_terms {
            case_insensitive_aliases.insert(ignored_stemmer.stem(term), "");
        }

        let suppressions = config
            .suppress_abbreviations
            .then(|| Arc::new(SentenceBreakSuppressions::default()));

        debug!(
            "vectorizer settings: {} vocabulary terms, ngram_size={}, stemmer='{}', backend={}, locale='{}'",
            vocabulary.len(),
            config.ngram_size,
            stemmer,
            config.backend,
            config.locale
        );

        Ok(PipelineSettings {
            vocabulary,
            case_sensitive_aliases,
            case_insensitive_aliases,
            casing,
            ngram_size: window.size(),
            window,
            min_term_length: config.min_term_length,
            stemmer,
            word_mask,
            non_word_mask,
            locale: config.locale.clone(),
            backend: config.backend,
            suppressions,
            on_invalid_encoding: config.on_invalid_encoding,
        })
    }
}

/// Worker-private processing state.
pub struct DocumentPipeline<'s> {
    settings: &'s PipelineSettings,
    segmenter: Box<dyn Segmenter>,
    stemmer: Box<dyn Stemmer>,
    window: NGramWindow,
}

impl<'s> DocumentPipeline<'s> {
    pub fn new(settings: &'s PipelineSettings) -> Self {
        DocumentPipeline {
            settings,
            segmenter: settings.backend.create_with(settings.suppressions.clone()),
            stemmer: settings.stemmer.create(),
            window: settings.window.clone(),
        }
    }

    /// Run one decoded document through every stage.
    pub fn process<S: DocumentSink>(&mut self, text: &[char]) -> S {
        let mut document = S::default();
        if text.is_empty() {
            return document;
        }

        let DocumentPipeline {
            settings,
            segmenter,
            stemmer,
            window,
        } = self;
        let settings: &PipelineSettings = settings;
        let vocabulary = &settings.vocabulary;

        window.reset();
        document.new_sentence();

        for token in segmenter.segment(text) {
            if token.starts_new_sentence {
                document.new_sentence();
                window.reset();
            }
            if token.is_empty()
                || !token.matches_categories(settings.word_mask, settings.non_word_mask)
            {
                continue;
            }
            let Some(raw) = token.to_text(text) else {
                continue;
            };

            let aliased = match settings.case_sensitive_aliases.resolve(&raw) {
                Some(replacement) => replacement.to_string(),
                None => raw,
            };
            let initial_length = aliased.chars().count();

            let stemmed = stemmer.stem(&settings.casing.apply(&aliased));
            let resolved = match settings.case_insensitive_aliases.resolve(&stemmed) {
                Some(replacement) => replacement.to_string(),
                None => stemmed,
            };
            if resolved.is_empty() {
                continue;
            }

            let term = Term::new(resolved);
            if initial_length >= settings.min_term_length {
                document.put_term(&term, vocabulary);
            }
            window.push(&term, |ngram| document.put_ngram(ngram, vocabulary));
        }

        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorizer::sink::DocumentVector;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    fn settings(config: VectorizerConfig) -> PipelineSettings {
        PipelineSettings::from_config(&config).unwrap()
    }

    #[test]
    fn test_validation_errors() {
        let bad_casing = VectorizerConfig {
            casing: "upper".into(),
            ..Default::default()
        };
        assert!(matches!(
            PipelineSettings::from_config(&bad_casing),
            Err(TextVecError::InvalidArgument(_))
        ));

        let bad_stemmer = VectorizerConfig {
            stemmer: "klingon".into(),
            ..Default::default()
        };
        assert!(matches!(
            PipelineSettings::from_config(&bad_stemmer),
            Err(TextVecError::UnsupportedLanguage(_))
        ));

        let bad_ngram = VectorizerConfig {
            ngram_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            PipelineSettings::from_config(&bad_ngram),
            Err(TextVecError::InvalidArgument(ref msg)) if msg.contains("ngram size")
        ));

        let bad_category = VectorizerConfig {
            non_word_categories: vec!["Xx".into()],
            ..Default::default()
        };
        assert!(PipelineSettings::from_config(&bad_category).is_err());
    }

    #[test]
    fn test_locale_validation() {
        assert!(validate_locale("").is_ok());
        assert!(validate_locale("en").is_ok());
        assert!(validate_locale("en_US").is_ok());
        assert!(validate_locale("zh-Hant-TW").is_ok());
        assert!(validate_locale("e").is_err());
        assert!(validate_locale("en US").is_err());
        assert!(validate_locale("12").is_err());
    }

    #[test]
    fn test_worker_window_matches_configured_size() {
        for size in [1, 2, 5] {
            let settings = settings(VectorizerConfig {
                ngram_size: size,
                ..Default::default()
            });
            assert_eq!(settings.ngram_size, size);
            assert_eq!(settings.window.size(), size);

            let pipeline = DocumentPipeline::new(&settings);
            assert_eq!(pipeline.window.size(), size);
        }
    }

    #[test]
    fn test_token_list_pipeline() {
        let settings = settings(VectorizerConfig {
            casing: "lower".into(),
            word_categories: vec!["Lu".into(), "Ll".into()],
            ngram_size: 2,
            ..Default::default()
        });
        let mut pipeline = DocumentPipeline::new(&settings);
        let tokens: Vec<String> = pipeline.process(&chars("The Quick fox"));
        assert_eq!(tokens, vec!["the", "quick", "the_quick", "fox", "quick_fox"]);
    }

    #[test]
    fn test_empty_document() {
        let settings = settings(VectorizerConfig::default());
        let mut pipeline = DocumentPipeline::new(&settings);
        let sentences: Vec<Vec<String>> = pipeline.process(&[]);
        assert!(sentences.is_empty());
    }

    #[test]
    fn test_aliases_and_ignored_terms() {
        let mut config = VectorizerConfig {
            vocabulary: vec!["color".into(), "usa".into()],
            casing: "lower".into(),
            stemmer: "english".into(),
            ignored_terms: vec!["running".into()],
            word_categories: vec!["Lu".into(), "Ll".into()],
            ..Default::default()
        };
        config
            .case_sensitive_aliases
            .insert("US".into(), "usa".into());
        config
            .case_insensitive_aliases
            .insert("colour".into(), "color".into());
        let settings = settings(config);
        let mut pipeline = DocumentPipeline::new(&settings);

        let tokens: Vec<String> = pipeline.process(&chars("US colour runs us"));
        assert_eq!(tokens, vec!["usa", "color", "us"]);

        let counts: DocumentVector = pipeline.process(&chars("US Colour colour"));
        assert_eq!(counts.get(0), 2);
        assert_eq!(counts.get(1), 1);
    }

    #[test]
    fn test_short_terms_still_form_ngrams() {
        let settings = settings(VectorizerConfig {
            min_term_length: 3,
            ngram_size: 2,
            word_categories: vec!["Ll".into()],
            ..Default::default()
        });
        let mut pipeline = DocumentPipeline::new(&settings);
        let tokens: Vec<String> = pipeline.process(&chars("a cat"));
        assert_eq!(tokens, vec!["cat", "a_cat"]);
    }

    #[test]
    fn test_sentence_groups_reset_ngrams() {
        let settings = settings(VectorizerConfig {
            ngram_size: 2,
            word_categories: vec!["Lu".into(), "Ll".into()],
            ..Default::default()
        });
        let mut pipeline = DocumentPipeline::new(&settings);
        let groups: Vec<Vec<String>> = pipeline.process(&chars("One two. Three four."));
        assert_eq!(
            groups,
            vec![vec!["One", "two", "One_two"], vec!["Three", "four", "Three_four"]]
        );
    }
}
