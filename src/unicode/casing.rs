//! Casing transforms applied to tokens before stemming.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TextVecError};

/// How token characters are cased before stemming and vocabulary lookup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CasingTransform {
    /// Keep characters as they appear in the source text.
    #[default]
    Preserve,
    /// Map every character to its lowercase form.
    Lower,
}

impl CasingTransform {
    /// Apply the transform character by character, appending to `out`.
    pub fn apply_into(self, token: &str, out: &mut String) {
        match self {
            CasingTransform::Preserve => out.push_str(token),
            CasingTransform::Lower => {
                for c in token.chars() {
                    out.extend(c.to_lowercase());
                }
            }
        }
    }

    /// Apply the transform, returning a new string.
    pub fn apply(self, token: &str) -> String {
        let mut out = String::with_capacity(token.len());
        self.apply_into(token, &mut out);
        out
    }
}

impl FromStr for CasingTransform {
    type Err = TextVecError;

    /// Accepts `""` and `"preserve"` for the identity and `"lower"` for lowercasing.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" | "preserve" => Ok(CasingTransform::Preserve),
            "lower" => Ok(CasingTransform::Lower),
            other => Err(TextVecError::invalid_argument(format!(
                "invalid casing transformation: '{other}'"
            ))),
        }
    }
}

impl fmt::Display for CasingTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CasingTransform::Preserve => write!(f, "preserve"),
            CasingTransform::Lower => write!(f, "lower"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("".parse::<CasingTransform>().unwrap(), CasingTransform::Preserve);
        assert_eq!("lower".parse::<CasingTransform>().unwrap(), CasingTransform::Lower);

        let err = "upper".parse::<CasingTransform>().unwrap_err();
        assert!(matches!(err, TextVecError::InvalidArgument(_)));
        assert!(err.to_string().contains("upper"));
    }

    #[test]
    fn test_apply() {
        assert_eq!(CasingTransform::Preserve.apply("New York"), "New York");
        assert_eq!(CasingTransform::Lower.apply("New York"), "new york");
        assert_eq!(CasingTransform::Lower.apply("ÉCOLE"), "école");
    }
}
