//! UTF-8 to code point decoding.
//!
//! Text is decoded once into a `Vec<char>` before segmentation so that every
//! later stage addresses code points by index.

use crate::error::{Result, TextVecError};

/// Decode UTF-8 bytes into code points.
///
/// Fails with [`TextVecError::InvalidEncoding`] carrying the byte offset of
/// the first malformed sequence.
///
/// # Examples
///
/// ```
/// use textvec::unicode::decode::decode_utf8;
///
/// assert_eq!(decode_utf8("héllo".as_bytes()).unwrap().len(), 5);
/// assert!(decode_utf8(&[b'a', 0xFF]).is_err());
/// ```
pub fn decode_utf8(bytes: &[u8]) -> Result<Vec<char>> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| TextVecError::invalid_encoding(e.valid_up_to()))?;
    Ok(text.chars().collect())
}

/// Collect a span of code points back into a `String`.
pub fn encode_utf8(code_points: &[char]) -> String {
    code_points.iter().collect()
}
