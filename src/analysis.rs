//! Text analysis for textvec.
//!
//! This module turns decoded text into the token streams consumed by the
//! vectorizer: word and sentence segmentation, stemming, alias resolution
//! and n-gram generation.

pub mod alias;
pub mod ngram;
pub mod segmenter;
pub mod split;
pub mod stem;
pub mod token;
