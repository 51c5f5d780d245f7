//! Unicode character data used by segmentation and token filtering.
//!
//! - [`category`] - general categories as bit masks
//! - [`char_class`] - the per-code-point classifier
//! - [`casing`] - casing transforms
//! - [`decode`] - UTF-8 decoding into code points
//! - [`version`] - Unicode data versions

pub mod casing;
pub mod category;
pub mod char_class;
pub mod decode;
pub mod version;

pub use casing::CasingTransform;
pub use category::{GeneralCategory, category_mask, general_category_names};
pub use char_class::{CharClass, classify, classify_code_point};
pub use decode::{decode_utf8, encode_utf8};
pub use version::{UnicodeInfo, UnicodeVersion, unicode_info, unicode_version};
