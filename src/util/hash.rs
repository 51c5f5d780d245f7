//! Term hashing.
//!
//! Every term is reduced to a 64-bit key before it reaches a vocabulary or
//! alias table. Single terms are hashed with [`ahash`]; multi-term n-grams
//! fold the per-term keys with an order-sensitive combine so that `a_b` and
//! `b_a` land on different keys.
//!
//! Keys are stable within a process only. They are never persisted.

use std::hash::{Hash, Hasher};

use ahash::AHasher;

/// Additive constant mixed into every combine step.
pub const GOLDEN_RATIO: u64 = 0x9e37_79b9;

/// Hash a single term.
#[inline]
pub fn term_hash(term: &str) -> u64 {
    let mut hasher = AHasher::default();
    term.hash(&mut hasher);
    hasher.finish()
}

/// Mix `value` into `seed`.
#[inline]
pub fn hash_combine(seed: u64, value: u64) -> u64 {
    seed ^ value
        .wrapping_add(GOLDEN_RATIO)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2)
}

/// Combine an ordered sequence of term hashes into one key.
///
/// A sequence of one hash returns that hash unchanged, so a one-part
/// vocabulary entry and a unigram token agree on their key.
pub fn combined_hash<I>(hashes: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    let mut hashes = hashes.into_iter();
    let Some(first) = hashes.next() else {
        return 0;
    };
    match hashes.next() {
        None => first,
        Some(second) => {
            let seed = hash_combine(hash_combine(0, first), second);
            hashes.fold(seed, hash_combine)
        }
    }
}

/// Hash a `separator`-joined n-gram string, part by part.
pub fn joined_hash(joined: &str, separator: char) -> u64 {
    combined_hash(joined.split(separator).map(term_hash))
}
