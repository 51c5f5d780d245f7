//! Per-code-point segmentation properties.
//!
//! [`classify`] maps any code point to a [`CharClass`]: an immutable bit set
//! holding the general category bit (see [`GeneralCategory`]) in the low 30
//! bits and the word/sentence break flags used by the segmentation rules in
//! the high bits. Property values come from the ICU4X Unicode data tables.
//!
//! The Basic Multilingual Plane is classified once into a process-wide table
//! on first use; supplementary planes are classified on demand. Both paths
//! are pure and never mutate shared state after initialization.

use std::fmt;
use std::sync::LazyLock;

use icu_properties::{SentenceBreak, WordBreak, maps};

use crate::unicode::category::GeneralCategory;

/// Segmentation properties of a single code point.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharClass(u64);

const FLAG_SHIFT: u32 = 32;

macro_rules! flags {
    ($($(#[$doc:meta])* $name:ident = $bit:expr, $getter:ident;)*) => {
        impl CharClass {
            $(
                $(#[$doc])*
                pub const $name: u64 = 1 << (FLAG_SHIFT + $bit);
            )*

            $(
                #[inline]
                pub const fn $getter(self) -> bool {
                    self.0 & Self::$name != 0
                }
            )*
        }

        const FLAG_NAMES: &[(u64, &str)] = &[$((CharClass::$name, stringify!($name)),)*];
    };
}

flags! {
    /// Carriage return (WB/SB `CR`).
    CR = 0, is_cr;
    /// Line feed (WB/SB `LF`).
    LF = 1, is_lf;
    /// WB `Newline`: vertical tab, form feed, NEL, line/paragraph separators.
    NEWLINE = 2, is_newline;
    /// SB `ParaSep`: `Sep | CR | LF`.
    PARA_SEP = 3, is_para_sep;
    /// WB/SB `Extend` (including WB `ZWJ`).
    EXTEND = 4, is_extend;
    /// WB/SB `Format`.
    FORMAT = 5, is_format;
    /// SB `ATerm` (full stop and friends).
    ATERM = 6, is_aterm;
    /// SB `SATerm`: `STerm | ATerm`.
    SATERM = 7, is_saterm;
    /// SB `SContinue`.
    SCONTINUE = 8, is_scontinue;
    /// SB `Close`.
    CLOSE = 9, is_close;
    /// SB `Sp`.
    SP = 10, is_sp;
    /// WB `WSegSpace`.
    WSEG_SPACE = 11, is_wseg_space;
    /// SB `Upper`.
    UPPER = 12, is_upper;
    /// SB `Lower`.
    LOWER = 13, is_lower;
    /// SB `OLetter`.
    OLETTER = 14, is_oletter;
    /// WB `AHLetter`: `ALetter | Hebrew_Letter`.
    AHLETTER = 15, is_ahletter;
    /// WB `MidLetter`.
    MID_LETTER = 16, is_mid_letter;
    /// WB `MidNum`.
    MID_NUM = 17, is_mid_num;
    /// WB `MidNumLetQ`: `MidNumLet | Single_Quote`.
    MID_NUM_LET_Q = 18, is_mid_num_let_q;
    /// WB `Hebrew_Letter`.
    HEBREW_LETTER = 19, is_hebrew_letter;
    /// WB `Single_Quote`.
    SINGLE_QUOTE = 20, is_single_quote;
    /// WB `Double_Quote`.
    DOUBLE_QUOTE = 21, is_double_quote;
    /// WB `Numeric`.
    NUMERIC = 22, is_numeric;
    /// WB `Katakana`.
    KATAKANA = 23, is_katakana;
    /// WB `ExtendNumLet`.
    EXTEND_NUM_LET = 24, is_extend_num_let;
    /// WB `Regional_Indicator`.
    REGIONAL_INDICATOR = 25, is_regional_indicator;
}

impl CharClass {
    /// Class of unassigned code points and of positions outside the text.
    pub const UNKNOWN: CharClass = CharClass(GeneralCategory::Unknown as u64);

    /// Terminates the SB8 lookahead: `OLetter | Upper | Lower | ParaSep | SATerm`.
    pub const SB8_STOP: u64 =
        Self::OLETTER | Self::UPPER | Self::LOWER | Self::PARA_SEP | Self::SATERM;

    /// Build a class from a category and a set of flag bits.
    pub const fn new(category: GeneralCategory, flags: u64) -> Self {
        CharClass(category as u64 | (flags & !GeneralCategory::ALL_MASK))
    }

    /// The general category bit of this code point.
    #[inline]
    pub const fn category_mask(self) -> u64 {
        self.0 & GeneralCategory::ALL_MASK
    }

    /// The general category of this code point.
    pub fn category(self) -> GeneralCategory {
        GeneralCategory::from_bit(self.category_mask()).unwrap_or(GeneralCategory::Unknown)
    }

    /// True when any of the given flag bits is set.
    #[inline]
    pub const fn any(self, flags: u64) -> bool {
        self.0 & flags != 0
    }

    /// `Extend | Format`: absorbed into the preceding character by WB4/SB5.
    #[inline]
    pub const fn is_ignorable(self) -> bool {
        self.any(Self::EXTEND | Self::FORMAT)
    }

    /// `Newline | CR | LF | ParaSep`: never absorbs following Extend/Format.
    #[inline]
    pub const fn is_hard_break(self) -> bool {
        self.any(Self::NEWLINE | Self::CR | Self::LF | Self::PARA_SEP)
    }

    /// Raw bit representation.
    pub const fn bits(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags: Vec<&str> = FLAG_NAMES
            .iter()
            .filter(|(bit, _)| self.0 & bit != 0)
            .map(|(_, name)| *name)
            .collect();
        f.debug_struct("CharClass")
            .field("category", &self.category())
            .field("flags", &flags)
            .finish()
    }
}

static BMP_TABLE: LazyLock<Box<[CharClass]>> =
    LazyLock::new(|| (0u32..0x1_0000).map(compute_class).collect());

/// Classify a code point.
#[inline]
pub fn classify(c: char) -> CharClass {
    classify_code_point(c as u32)
}

/// Classify a raw scalar value; total over `u32` (surrogates and values past
/// `U+10FFFF` included).
pub fn classify_code_point(code: u32) -> CharClass {
    match BMP_TABLE.get(code as usize) {
        Some(class) => *class,
        None => compute_class(code),
    }
}

fn compute_class(code: u32) -> CharClass {
    if code > 0x10_FFFF {
        return CharClass::UNKNOWN;
    }

    let category = GeneralCategory::from_icu(maps::general_category().get32(code));
    if category == GeneralCategory::Unknown {
        return CharClass::UNKNOWN;
    }

    let wb = maps::word_break().get32(code);
    let sb = maps::sentence_break().get32(code);
    let mut flags = 0u64;

    if wb == WordBreak::CR {
        flags |= CharClass::CR;
    }
    if wb == WordBreak::LF {
        flags |= CharClass::LF;
    }
    if wb == WordBreak::Newline {
        flags |= CharClass::NEWLINE;
    }
    if wb == WordBreak::Extend || wb == WordBreak::ZWJ || sb == SentenceBreak::Extend {
        flags |= CharClass::EXTEND;
    }
    if wb == WordBreak::Format || sb == SentenceBreak::Format {
        flags |= CharClass::FORMAT;
    }
    if wb == WordBreak::WSegSpace {
        flags |= CharClass::WSEG_SPACE;
    }
    if wb == WordBreak::ALetter || wb == WordBreak::HebrewLetter {
        flags |= CharClass::AHLETTER;
    }
    if wb == WordBreak::HebrewLetter {
        flags |= CharClass::HEBREW_LETTER;
    }
    if wb == WordBreak::MidLetter {
        flags |= CharClass::MID_LETTER;
    }
    if wb == WordBreak::MidNum {
        flags |= CharClass::MID_NUM;
    }
    if wb == WordBreak::MidNumLet || wb == WordBreak::SingleQuote {
        flags |= CharClass::MID_NUM_LET_Q;
    }
    if wb == WordBreak::SingleQuote {
        flags |= CharClass::SINGLE_QUOTE;
    }
    if wb == WordBreak::DoubleQuote {
        flags |= CharClass::DOUBLE_QUOTE;
    }
    if wb == WordBreak::Numeric {
        flags |= CharClass::NUMERIC;
    }
    if wb == WordBreak::Katakana {
        flags |= CharClass::KATAKANA;
    }
    if wb == WordBreak::ExtendNumLet {
        flags |= CharClass::EXTEND_NUM_LET;
    }
    if wb == WordBreak::RegionalIndicator {
        flags |= CharClass::REGIONAL_INDICATOR;
    }

    if sb == SentenceBreak::Sep || sb == SentenceBreak::CR || sb == SentenceBreak::LF {
        flags |= CharClass::PARA_SEP;
    }
    if sb == SentenceBreak::ATerm {
        flags |= CharClass::ATERM | CharClass::SATERM;
    }
    if sb == SentenceBreak::STerm {
        flags |= CharClass::SATERM;
    }
    if sb == SentenceBreak::SContinue {
        flags |= CharClass::SCONTINUE;
    }
    if sb == SentenceBreak::Close {
        flags |= CharClass::CLOSE;
    }
    if sb == SentenceBreak::Sp {
        flags |= CharClass::SP;
    }
    if sb == SentenceBreak::Upper {
        flags |= CharClass::UPPER;
    }
    if sb == SentenceBreak::Lower {
        flags |= CharClass::LOWER;
    }
    if sb == SentenceBreak::OLetter {
        flags |= CharClass::OLETTER;
    }

    CharClass::new(category, flags)
}
