use std::fs;

use tempfile::TempDir;
use textvec::analysis::segmenter::SegmenterBackend;
use textvec::error::TextVecError;
use textvec::vectorizer::{EncodingErrorPolicy, Vectorizer, VectorizerConfig};

#[test]
fn test_load_full_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("vectorizer.json");
    fs::write(
        &path,
        r#"{
            "vocabulary": ["run", "walk", "run_fast"],
            "ignored_terms": ["the"],
            "casing": "lower",
            "case_sensitive_aliases": {"NYC": "New_York"},
            "case_insensitive_aliases": {"jog": "run"},
            "ngram_size": 2,
            "min_term_length": 2,
            "stemmer": "english",
            "word_categories": ["Lu", "Ll"],
            "locale": "en_US",
            "backend": "unicode_segmentation",
            "suppress_abbreviations": false,
            "on_invalid_encoding": "fail",
            "threads": 2
        }"#,
    )
    .unwrap();

    let config = VectorizerConfig::from_json_file(&path).unwrap();
    assert_eq!(config.vocabulary, vec!["run", "walk", "run_fast"]);
    assert_eq!(config.casing, "lower");
    assert_eq!(config.case_sensitive_aliases.get("NYC").map(String::as_str), Some("New_York"));
    assert_eq!(config.ngram_size, 2);
    assert_eq!(config.backend, SegmenterBackend::UnicodeSegmentation);
    assert!(!config.suppress_abbreviations);
    assert_eq!(config.on_invalid_encoding, EncodingErrorPolicy::Fail);
    assert_eq!(config.threads, Some(2));
    assert_eq!(config.min_chunk_len, 100);

    let vectorizer = Vectorizer::new(config).unwrap();
    assert_eq!(vectorizer.locale(), "en_US");
    let matrix = vectorizer
        .vectorize(&["Running fast, the walkers jog."], false, false)
        .unwrap();
    assert_eq!(matrix.dims, (1, 3));
    // "running" and "jog" both resolve to "run".
    assert_eq!(matrix.get(0, 0), 2);
    assert_eq!(matrix.get(0, 2), 1);
}

#[test]
fn test_partial_config_uses_defaults() {
    let config = VectorizerConfig::from_json_str(r#"{"vocabulary": ["a"]}"#).unwrap();
    let defaults = VectorizerConfig::default();

    assert_eq!(config.vocabulary, vec!["a"]);
    assert_eq!(config.ngram_size, defaults.ngram_size);
    assert_eq!(config.backend, SegmenterBackend::Uax29);
    assert!(config.suppress_abbreviations);
    assert!(!config.strict_hashing);
    assert_eq!(config.threads, None);
}

#[test]
fn test_config_json_round_trip_through_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("saved.json");

    let config = Vectorizer::builder()
        .vocabulary(["alpha", "beta"])
        .casing("lower")
        .ngram_size(3)
        .config()
        .clone();
    fs::write(&path, config.to_json_string().unwrap()).unwrap();

    let loaded = VectorizerConfig::from_json_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_malformed_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, "{\"vocabulary\": [\"a\",").unwrap();

    let result = VectorizerConfig::from_json_file(&path);
    assert!(matches!(result, Err(TextVecError::Json(_))));

    fs::write(&path, r#"{"ngram_size": "two"}"#).unwrap();
    let result = VectorizerConfig::from_json_file(&path);
    assert!(matches!(result, Err(TextVecError::Json(_))));
}

#[test]
fn test_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = VectorizerConfig::from_json_file(temp_dir.path().join("absent.json"));
    assert!(matches!(result, Err(TextVecError::Io(_))));
}

#[test]
fn test_loaded_config_is_validated_on_build() {
    let config = VectorizerConfig::from_json_str(r#"{"stemmer": "klingon"}"#).unwrap();
    let error = Vectorizer::new(config).unwrap_err();
    assert!(matches!(error, TextVecError::UnsupportedLanguage(ref name) if name == "klingon"));
}
