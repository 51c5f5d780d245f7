//! Versions of the Unicode data behind each segmentation backend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unicode version of the ICU4X property data compiled into `icu_properties` 1.5.
const PROPERTY_DATA_VERSION: UnicodeVersion = UnicodeVersion::new(15, 1, 0);

/// A `major.minor.update` Unicode version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnicodeVersion {
    pub major: u8,
    pub minor: u8,
    pub update: u8,
}

impl UnicodeVersion {
    pub const fn new(major: u8, minor: u8, update: u8) -> Self {
        UnicodeVersion {
            major,
            minor,
            update,
        }
    }
}

impl From<(u8, u8, u8)> for UnicodeVersion {
    fn from((major, minor, update): (u8, u8, u8)) -> Self {
        UnicodeVersion::new(major, minor, update)
    }
}

impl fmt::Display for UnicodeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.update)
    }
}

/// Unicode version of the character data used by the classifier and the
/// built-in UAX #29 engine.
pub fn unicode_version() -> UnicodeVersion {
    PROPERTY_DATA_VERSION
}

/// Unicode data versions of both segmentation backends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnicodeInfo {
    /// Data behind [`classify`](crate::unicode::classify) and the `uax29` backend.
    pub unicode_version: UnicodeVersion,
    /// Data behind the `unicode_segmentation` backend.
    pub unicode_segmentation_version: UnicodeVersion,
}

pub fn unicode_info() -> UnicodeInfo {
    UnicodeInfo {
        unicode_version: unicode_version(),
        unicode_segmentation_version: {
            let (major, minor, update) = unicode_segmentation::UNICODE_VERSION;
            UnicodeVersion::new(major as u8, minor as u8, update as u8)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_version() {
        let version = unicode_version();
        assert_eq!(version.to_string(), "15.1.0");
        assert!(version >= UnicodeVersion::new(15, 0, 0));
    }

    #[test]
    fn test_unicode_info() {
        let info = unicode_info();
        assert_eq!(info.unicode_version, unicode_version());
        assert!(info.unicode_segmentation_version.major >= 15);

        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("\"unicode_version\":{\"major\":15"));
    }
}
