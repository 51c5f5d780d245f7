//! Unicode general categories encoded as single bits.
//!
//! Every code point belongs to exactly one general category. Each category is
//! assigned its own bit so that the categories spanned by a token can be
//! accumulated with a bitwise OR and tested against a caller-supplied filter
//! mask in one comparison.
//!
//! # Examples
//!
//! ```
//! use textvec::unicode::category::{GeneralCategory, category_mask};
//!
//! let mask = category_mask(["Lu", "Ll"]).unwrap();
//! assert_eq!(mask, GeneralCategory::Lu.bit() | GeneralCategory::Ll.bit());
//! assert!(category_mask(["Xx"]).is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use icu_properties::GeneralCategory as IcuGeneralCategory;

use crate::error::{Result, TextVecError};

/// A Unicode general category, plus `Unknown` for unassigned code points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u64)]
pub enum GeneralCategory {
    Cc = 1 << 0,
    Zs = 1 << 1,
    Po = 1 << 2,
    Sc = 1 << 3,
    Ps = 1 << 4,
    Pe = 1 << 5,
    Sm = 1 << 6,
    Pd = 1 << 7,
    Nd = 1 << 8,
    Lu = 1 << 9,
    Sk = 1 << 10,
    Pc = 1 << 11,
    Ll = 1 << 12,
    So = 1 << 13,
    Lo = 1 << 14,
    Pi = 1 << 15,
    Cf = 1 << 16,
    No = 1 << 17,
    Pf = 1 << 18,
    Lt = 1 << 19,
    Lm = 1 << 20,
    Mn = 1 << 21,
    Me = 1 << 22,
    Mc = 1 << 23,
    Nl = 1 << 24,
    Zl = 1 << 25,
    Zp = 1 << 26,
    Cs = 1 << 27,
    Co = 1 << 28,
    Unknown = 1 << 29,
}

impl GeneralCategory {
    /// All categories, in bit order.
    pub const ALL: [GeneralCategory; 30] = [
        GeneralCategory::Cc,
        GeneralCategory::Zs,
        GeneralCategory::Po,
        GeneralCategory::Sc,
        GeneralCategory::Ps,
        GeneralCategory::Pe,
        GeneralCategory::Sm,
        GeneralCategory::Pd,
        GeneralCategory::Nd,
        GeneralCategory::Lu,
        GeneralCategory::Sk,
        GeneralCategory::Pc,
        GeneralCategory::Ll,
        GeneralCategory::So,
        GeneralCategory::Lo,
        GeneralCategory::Pi,
        GeneralCategory::Cf,
        GeneralCategory::No,
        GeneralCategory::Pf,
        GeneralCategory::Lt,
        GeneralCategory::Lm,
        GeneralCategory::Mn,
        GeneralCategory::Me,
        GeneralCategory::Mc,
        GeneralCategory::Nl,
        GeneralCategory::Zl,
        GeneralCategory::Zp,
        GeneralCategory::Cs,
        GeneralCategory::Co,
        GeneralCategory::Unknown,
    ];

    /// Mask with every category bit set.
    pub const ALL_MASK: u64 = (1 << 30) - 1;

    /// The single bit representing this category.
    pub const fn bit(self) -> u64 {
        self as u64
    }

    /// The two-letter Unicode alias of this category (`"Unknown"` for unassigned).
    pub const fn name(self) -> &'static str {
        match self {
            GeneralCategory::Cc => "Cc",
            GeneralCategory::Zs => "Zs",
            GeneralCategory::Po => "Po",
            GeneralCategory::Sc => "Sc",
            GeneralCategory::Ps => "Ps",
            GeneralCategory::Pe => "Pe",
            GeneralCategory::Sm => "Sm",
            GeneralCategory::Pd => "Pd",
            GeneralCategory::Nd => "Nd",
            GeneralCategory::Lu => "Lu",
            GeneralCategory::Sk => "Sk",
            GeneralCategory::Pc => "Pc",
            GeneralCategory::Ll => "Ll",
            GeneralCategory::So => "So",
            GeneralCategory::Lo => "Lo",
            GeneralCategory::Pi => "Pi",
            GeneralCategory::Cf => "Cf",
            GeneralCategory::No => "No",
            GeneralCategory::Pf => "Pf",
            GeneralCategory::Lt => "Lt",
            GeneralCategory::Lm => "Lm",
            GeneralCategory::Mn => "Mn",
            GeneralCategory::Me => "Me",
            GeneralCategory::Mc => "Mc",
            GeneralCategory::Nl => "Nl",
            GeneralCategory::Zl => "Zl",
            GeneralCategory::Zp => "Zp",
            GeneralCategory::Cs => "Cs",
            GeneralCategory::Co => "Co",
            GeneralCategory::Unknown => "Unknown",
        }
    }

    /// Convert from the ICU4X property value.
    pub(crate) fn from_icu(category: IcuGeneralCategory) -> Self {
        match category {
            IcuGeneralCategory::Control => GeneralCategory::Cc,
            IcuGeneralCategory::SpaceSeparator => GeneralCategory::Zs,
            IcuGeneralCategory::OtherPunctuation => GeneralCategory::Po,
            IcuGeneralCategory::CurrencySymbol => GeneralCategory::Sc,
            IcuGeneralCategory::OpenPunctuation => GeneralCategory::Ps,
            IcuGeneralCategory::ClosePunctuation => GeneralCategory::Pe,
            IcuGeneralCategory::MathSymbol => GeneralCategory::Sm,
            IcuGeneralCategory::DashPunctuation => GeneralCategory::Pd,
            IcuGeneralCategory::DecimalNumber => GeneralCategory::Nd,
            IcuGeneralCategory::UppercaseLetter => GeneralCategory::Lu,
            IcuGeneralCategory::ModifierSymbol => GeneralCategory::Sk,
            IcuGeneralCategory::ConnectorPunctuation => GeneralCategory::Pc,
            IcuGeneralCategory::LowercaseLetter => GeneralCategory::Ll,
            IcuGeneralCategory::OtherSymbol => GeneralCategory::So,
            IcuGeneralCategory::OtherLetter => GeneralCategory::Lo,
            IcuGeneralCategory::InitialPunctuation => GeneralCategory::Pi,
            IcuGeneralCategory::Format => GeneralCategory::Cf,
            IcuGeneralCategory::OtherNumber => GeneralCategory::No,
            IcuGeneralCategory::FinalPunctuation => GeneralCategory::Pf,
            IcuGeneralCategory::TitlecaseLetter => GeneralCategory::Lt,
            IcuGeneralCategory::ModifierLetter => GeneralCategory::Lm,
            IcuGeneralCategory::NonspacingMark => GeneralCategory::Mn,
            IcuGeneralCategory::EnclosingMark => GeneralCategory::Me,
            IcuGeneralCategory::SpacingMark => GeneralCategory::Mc,
            IcuGeneralCategory::LetterNumber => GeneralCategory::Nl,
            IcuGeneralCategory::LineSeparator => GeneralCategory::Zl,
            IcuGeneralCategory::ParagraphSeparator => GeneralCategory::Zp,
            IcuGeneralCategory::Surrogate => GeneralCategory::Cs,
            IcuGeneralCategory::PrivateUse => GeneralCategory::Co,
            _ => GeneralCategory::Unknown,
        }
    }

    /// Recover the category from a mask holding exactly one category bit.
    pub fn from_bit(bit: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.bit() == bit)
    }
}

impl fmt::Display for GeneralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeneralCategory {
    type Err = TextVecError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.name() == s)
            .ok_or_else(|| TextVecError::invalid_argument(format!("Unknown general category '{s}'")))
    }
}

/// Names of every accepted category, in bit order.
pub fn general_category_names() -> Vec<&'static str> {
    GeneralCategory::ALL.iter().map(|c| c.name()).collect()
}

/// OR together the bits of the named categories.
///
/// Fails with [`TextVecError::InvalidArgument`] naming the first unknown category.
pub fn category_mask<I, S>(names: I) -> Result<u64>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names.into_iter().try_fold(0u64, |mask, name| {
        let category: GeneralCategory = name.as_ref().parse()?;
        Ok(mask | category.bit())
    })
}

/// Names of the categories set in `mask`.
pub fn category_names(mask: u64) -> Vec<&'static str> {
    GeneralCategory::ALL
        .iter()
        .filter(|c| mask & c.bit() != 0)
        .map(|c| c.name())
        .collect()
}
