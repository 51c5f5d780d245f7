//! Handle-based access to vectorizers.
//!
//! [`VectorizerRegistry`] owns built vectorizers and hands out copyable
//! [`VectorizerHandle`]s, for callers that cannot hold Rust references
//! across calls. Released slots are never reused, so a stale handle reports
//! [`TextVecError::NullHandle`] instead of reaching a different vectorizer.

use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TextVecError};
use crate::matrix::csc::CscMatrix;
use crate::vectorizer::config::VectorizerConfig;
use crate::vectorizer::engine::Vectorizer;

/// Opaque reference to a registered vectorizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VectorizerHandle(usize);

impl VectorizerHandle {
    /// Rebuild a handle from its raw index.
    pub fn from_index(index: usize) -> Self {
        VectorizerHandle(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Table of registered vectorizers.
#[derive(Debug, Default)]
pub struct VectorizerRegistry {
    slots: RwLock<Vec<Option<Arc<Vectorizer>>>>,
}

impl VectorizerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vectorizer from `config` and register it.
    pub fn build_vectorizer(&self, config: VectorizerConfig) -> Result<VectorizerHandle> {
        let vectorizer = Vectorizer::new(config)?;
        Ok(self.register(vectorizer))
    }

    /// Register an already built vectorizer.
    pub fn register(&self, vectorizer: Vectorizer) -> VectorizerHandle {
        let mut slots = self.slots.write();
        slots.push(Some(Arc::new(vectorizer)));
        let handle = VectorizerHandle(slots.len() - 1);
        debug!("registered vectorizer {}", handle.0);
        handle
    }

    /// Look up a vectorizer.
    pub fn get(&self, handle: VectorizerHandle) -> Result<Arc<Vectorizer>> {
        let slots = self.slots.read();
        match slots.get(handle.0) {
            None => Err(TextVecError::IndexOutOfRange {
                index: handle.0,
                len: slots.len(),
            }),
            Some(None) => Err(TextVecError::NullHandle(handle.0)),
            Some(Some(vectorizer)) => Ok(Arc::clone(vectorizer)),
        }
    }

    /// Remove a vectorizer from the table.
    ///
    /// Calls already running on it finish normally.
    pub fn release(&self, handle: VectorizerHandle) -> Result<()> {
        let mut slots = self.slots.write();
        let len = slots.len();
        match slots.get_mut(handle.0) {
            None => Err(TextVecError::IndexOutOfRange {
                index: handle.0,
                len,
            }),
            Some(slot) => match slot.take() {
                Some(_) => {
                    debug!("released vectorizer {}", handle.0);
                    Ok(())
                }
                None => Err(TextVecError::NullHandle(handle.0)),
            },
        }
    }

    /// Number of live vectorizers.
    pub fn len(&self) -> usize {
        self.slots.read().iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn tokenize<T>(
        &self,
        handle: VectorizerHandle,
        texts: &[T],
        parallel: bool,
    ) -> Result<Vec<Vec<String>>>
    where
        T: AsRef<[u8]> + Sync,
    {
        self.get(handle)?.tokenize(texts, parallel)
    }

    pub fn tokenize_sentences<T>(
        &self,
        handle: VectorizerHandle,
        texts: &[T],
        parallel: bool,
    ) -> Result<Vec<Vec<Vec<String>>>>
    where
        T: AsRef<[u8]> + Sync,
    {
        self.get(handle)?.tokenize_sentences(texts, parallel)
    }

    pub fn vectorize<T>(
        &self,
        handle: VectorizerHandle,
        texts: &[T],
        parallel: bool,
        with_labels: bool,
    ) -> Result<CscMatrix>
    where
        T: AsRef<[u8]> + Sync,
    {
        self.get(handle)?.vectorize(texts, parallel, with_labels)
    }

    pub fn sentence_vectorize<T>(
        &self,
        handle: VectorizerHandle,
        texts: &[T],
        parallel: bool,
        with_labels: bool,
    ) -> Result<Vec<CscMatrix>>
    where
        T: AsRef<[u8]> + Sync,
    {
        self.get(handle)?
            .sentence_vectorize(texts, parallel, with_labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_use() {
        let registry = VectorizerRegistry::new();
        let handle = registry
            .build_vectorizer(VectorizerConfig {
                vocabulary: vec!["hello".into()],
                casing: "lower".into(),
                ..Default::default()
            })
            .unwrap();

        let matrix = registry.vectorize(handle, &["Hello hello"], false, false).unwrap();
        assert_eq!(matrix.get(0, 0), 2);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_released_handle_is_null() {
        let registry = VectorizerRegistry::new();
        let handle = registry.build_vectorizer(VectorizerConfig::default()).unwrap();
        registry.release(handle).unwrap();

        assert!(matches!(
            registry.tokenize(handle, &["x"], false),
            Err(TextVecError::NullHandle(0))
        ));
        assert!(matches!(
            registry.release(handle),
            Err(TextVecError::NullHandle(0))
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unknown_handle_is_out_of_range() {
        let registry = VectorizerRegistry::new();
        let handle = VectorizerHandle::from_index(5);
        assert!(matches!(
            registry.get(handle),
            Err(TextVecError::IndexOutOfRange { index: 5, len: 0 })
        ));
    }

    #[test]
    fn test_failed_build_registers_nothing() {
        let registry = VectorizerRegistry::new();
        let result = registry.build_vectorizer(VectorizerConfig {
            stemmer: "klingon".into(),
            ..Default::default()
        });
        assert!(result.is_err());
        assert!(registry.is_empty());
    }
}
