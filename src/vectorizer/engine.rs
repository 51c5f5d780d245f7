//! Batch vectorization engine.
//!
//! A [`Vectorizer`] is immutable after construction and can be shared
//! between threads. Every batch call decodes each input as UTF-8, runs it
//! through a [`DocumentPipeline`] and collects the per-document results in
//! input order. Parallel calls split the batch across a dedicated rayon
//! pool; each worker builds its own pipeline once and reuses it for every
//! document it handles.

use std::sync::Arc;
use std::time::Instant;

use log::{trace, warn};
use parking_lot::Mutex;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{Result, TextVecError};
use crate::matrix::csc::{CscMatrix, SparseMatrixBuilder};
use crate::unicode::decode::decode_utf8;
use crate::vectorizer::config::{EncodingErrorPolicy, VectorizerBuilder, VectorizerConfig};
use crate::vectorizer::pipeline::{DocumentPipeline, PipelineSettings};
use crate::vectorizer::sink::{DocumentSink, DocumentVector};
use crate::vectorizer::vocabulary::VocabularyIndex;

/// Turns batches of documents into token lists or count matrices.
pub struct Vectorizer {
    /// Configuration the vectorizer was built from.
    config: VectorizerConfig,

    /// Validated settings shared by all workers.
    settings: PipelineSettings,

    /// Worker pool, built on the first parallel call.
    thread_pool: Mutex<Option<Arc<ThreadPool>>>,
}

impl std::fmt::Debug for Vectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vectorizer")
            .field("vocabulary", &self.settings.vocabulary.len())
            .field("ngram_size", &self.settings.ngram_size)
            .field("backend", &self.settings.backend)
            .finish()
    }
}

impl Vectorizer {
    /// Validate `config` and create a vectorizer.
    pub fn new(config: VectorizerConfig) -> Result<Self> {
        if config.threads == Some(0) {
            return Err(TextVecError::invalid_argument(
                "threads must be at least 1",
            ));
        }
        let settings = PipelineSettings::from_config(&config)?;
        Ok(Vectorizer {
            config,
            settings,
            thread_pool: Mutex::new(None),
        })
    }

    /// Start a [`VectorizerBuilder`].
    pub fn builder() -> VectorizerBuilder {
        VectorizerBuilder::new()
    }

    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }

    pub fn vocabulary(&self) -> &VocabularyIndex {
        &self.settings.vocabulary
    }

    pub fn locale(&self) -> &str {
        &self.settings.locale
    }

    /// Kept terms and n-grams of every document.
    pub fn tokenize<T>(&self, texts: &[T], parallel: bool) -> Result<Vec<Vec<String>>>
    where
        T: AsRef<[u8]> + Sync,
    {
        self.process_batch(texts, parallel)
    }

    /// Kept terms and n-grams of every sentence group of every document.
    pub fn tokenize_sentences<T>(
        &self,
        texts: &[T],
        parallel: bool,
    ) -> Result<Vec<Vec<Vec<String>>>>
    where
        T: AsRef<[u8]> + Sync,
    {
        self.process_batch(texts, parallel)
    }

    /// Vocabulary counts of every document.
    pub fn vectorize_documents<T>(&self, texts: &[T], parallel: bool) -> Result<Vec<DocumentVector>>
    where
        T: AsRef<[u8]> + Sync,
    {
        self.process_batch(texts, parallel)
    }

    /// Vocabulary counts of every sentence group of every document.
    pub fn vectorize_sentences<T>(
        &self,
        texts: &[T],
        parallel: bool,
    ) -> Result<Vec<Vec<DocumentVector>>>
    where
        T: AsRef<[u8]> + Sync,
    {
        self.process_batch(texts, parallel)
    }

    /// Documents-by-vocabulary count matrix.
    ///
    /// With `with_labels` the vocabulary terms become column labels.
    pub fn vectorize<T>(&self, texts: &[T], parallel: bool, with_labels: bool) -> Result<CscMatrix>
    where
        T: AsRef<[u8]> + Sync,
    {
        let documents = self.vectorize_documents(texts, parallel)?;
        Ok(self.to_matrix(&documents, with_labels))
    }

    /// One sentences-by-vocabulary count matrix per document.
    pub fn sentence_vectorize<T>(
        &self,
        texts: &[T],
        parallel: bool,
        with_labels: bool,
    ) -> Result<Vec<CscMatrix>>
    where
        T: AsRef<[u8]> + Sync,
    {
        let documents = self.vectorize_sentences(texts, parallel)?;
        Ok(documents
            .iter()
            .map(|sentences| self.to_matrix(sentences, with_labels))
            .collect())
    }

    fn to_matrix(&self, rows: &[DocumentVector], with_labels: bool) -> CscMatrix {
        let matrix = SparseMatrixBuilder::new(self.settings.vocabulary.len()).build(rows);
        if with_labels {
            matrix.with_col_labels(self.settings.vocabulary.terms().to_vec())
        } else {
            matrix
        }
    }

    /// Get the worker pool, building it on first use.
    fn thread_pool(&self) -> Result<Arc<ThreadPool>> {
        let mut slot = self.thread_pool.lock();
        if let Some(pool) = slot.as_ref() {
            return Ok(Arc::clone(pool));
        }

        let thread_pool_size = self.config.threads.unwrap_or_else(num_cpus::get);
        let pool = ThreadPoolBuilder::new()
            .num_threads(thread_pool_size)
            .thread_name(|i| format!("textvec-worker-{i}"))
            .build()
            .map_err(|e| TextVecError::thread_pool(format!("Failed to create thread pool: {e}")))?;
        let pool = Arc::new(pool);
        *slot = Some(Arc::clone(&pool));
        Ok(pool)
    }

    fn process_batch<S, T>(&self, texts: &[T], parallel: bool) -> Result<Vec<S>>
    where
        S: DocumentSink,
        T: AsRef<[u8]> + Sync,
    {
        let started = Instant::now();
        let results = if parallel && texts.len() > 1 {
            let pool = self.thread_pool()?;
            let min_len = self.config.min_chunk_len.max(1);
            pool.install(|| {
                texts
                    .par_iter()
                    .enumerate()
                    .with_min_len(min_len)
                    .map_init(
                        || DocumentPipeline::new(&self.settings),
                        |pipeline, (index, text)| self.process_one(pipeline, index, text.as_ref()),
                    )
                    .collect::<Result<Vec<S>>>()
            })?
        } else {
            let mut pipeline = DocumentPipeline::new(&self.settings);
            texts
                .iter()
                .enumerate()
                .map(|(index, text)| self.process_one(&mut pipeline, index, text.as_ref()))
                .collect::<Result<Vec<S>>>()?
        };

        trace!(
            "processed {} documents (parallel={parallel}) in {:?}",
            texts.len(),
            started.elapsed()
        );
        Ok(results)
    }

    fn process_one<S: DocumentSink>(
        &self,
        pipeline: &mut DocumentPipeline<'_>,
        index: usize,
        bytes: &[u8],
    ) -> Result<S> {
        match decode_utf8(bytes) {
            Ok(text) => Ok(pipeline.process(&text)),
            Err(error) => match self.settings.on_invalid_encoding {
                EncodingErrorPolicy::Skip => {
                    warn!("skipping document {index}: {error}");
                    Ok(S::default())
                }
                EncodingErrorPolicy::Fail => Err(error.in_document(index)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words() -> Vec<String> {
        vec!["Lu".into(), "Ll".into(), "Lt".into(), "Lo".into(), "Nd".into()]
    }

    #[test]
    fn test_rejects_zero_threads() {
        let config = VectorizerConfig {
            threads: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            Vectorizer::new(config),
            Err(TextVecError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_vectorize_counts() {
        let vectorizer = Vectorizer::builder()
            .vocabulary(["the", "cat", "the_cat"])
            .casing("lower")
            .ngram_size(2)
            .word_categories(words())
            .build()
            .unwrap();

        let matrix = vectorizer
            .vectorize(&["The cat saw the cat.", "", "dog"], false, true)
            .unwrap();
        assert_eq!(matrix.dims, (3, 3));
        assert_eq!(matrix.get(0, 0), 2);
        assert_eq!(matrix.get(0, 1), 2);
        assert_eq!(matrix.get(0, 2), 2);
        assert_eq!(matrix.nnz(), 3);
        assert_eq!(
            matrix.col_labels,
            Some(vec!["the".to_string(), "cat".to_string(), "the_cat".to_string()])
        );
        assert!(matrix.validate().is_ok());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let vectorizer = Vectorizer::builder()
            .vocabulary(["alpha", "beta", "alpha_beta"])
            .ngram_size(2)
            .word_categories(words())
            .threads(3)
            .min_chunk_len(1)
            .build()
            .unwrap();

        let texts: Vec<String> = (0..50)
            .map(|i| "alpha beta ".repeat(i % 7) + "gamma")
            .collect();
        let sequential = vectorizer.vectorize(&texts, false, false).unwrap();
        let parallel = vectorizer.vectorize(&texts, true, false).unwrap();
        assert_eq!(sequential, parallel);

        let tokens_seq = vectorizer.tokenize(&texts, false).unwrap();
        let tokens_par = vectorizer.tokenize(&texts, true).unwrap();
        assert_eq!(tokens_seq, tokens_par);
    }

    #[test]
    fn test_invalid_encoding_policies() {
        let texts: Vec<Vec<u8>> = vec![b"ok".to_vec(), vec![b'a', 0xff], b"fine".to_vec()];

        let skipping = Vectorizer::builder().build().unwrap();
        let tokens = skipping.tokenize(&texts, false).unwrap();
        assert_eq!(tokens[0], vec!["ok"]);
        assert!(tokens[1].is_empty());
        assert_eq!(tokens[2], vec!["fine"]);

        let failing = Vectorizer::builder()
            .on_invalid_encoding(EncodingErrorPolicy::Fail)
            .build()
            .unwrap();
        match failing.tokenize(&texts, false) {
            Err(TextVecError::InvalidEncoding { document, offset }) => {
                assert_eq!(document, Some(1));
                assert_eq!(offset, 1);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_sentence_vectorize() {
        let vectorizer = Vectorizer::builder()
            .vocabulary(["one", "two"])
            .casing("lower")
            .word_categories(words())
            .build()
            .unwrap();
        let matrices = vectorizer
            .sentence_vectorize(&["One two. Two two! One.", ""], false, false)
            .unwrap();

        assert_eq!(matrices.len(), 2);
        assert_eq!(matrices[0].dims, (3, 2));
        assert_eq!(
            matrices[0].to_dense(),
            vec![vec![1, 1], vec![0, 2], vec![1, 0]]
        );
        assert_eq!(matrices[1].dims, (0, 2));
    }
}
