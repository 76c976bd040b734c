//! Plural-form selection rules
//!
//! A locale's translated plural entries are stored as an ordered list of
//! variants. The rules in this module map a quantity to the index of the
//! variant to display. Each supported language family is one [`PluralFamily`]
//! value, chosen once when a locale is loaded.

use crate::error::{I18nError, I18nResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Slavic three-form rule: `0` for one, `1` for few, `2` for many/other.
///
/// Quantities ending in 1 select `0` except 11; quantities ending in 2-4
/// select `1` except 12-14; everything else, including 0, selects `2`.
#[must_use]
pub const fn select_plural_variant(n: u64) -> usize {
    let mod10 = n % 10;
    let mod100 = n % 100;

    if mod10 == 1 && mod100 != 11 {
        0
    } else if mod10 >= 2 && mod10 <= 4 && (mod100 < 10 || mod100 >= 20) {
        1
    } else {
        2
    }
}

/// CLDR plural categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// Get the CLDR name of this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pluralization families, one per distinct plural rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralFamily {
    /// No plural distinction (Japanese, Chinese, Korean, ...)
    Invariant,
    /// `one` for exactly 1, `other` for everything else
    #[default]
    Germanic,
    /// `one` for 0 and 1, `other` for everything else
    Romance,
    /// one / few / many by the last one and two digits
    Slavic,
    /// Like Slavic, but only exactly 1 is `one`
    Polish,
    /// `one` for 1, `few` for 2-4, `other` for everything else
    Czech,
    /// Six forms: zero, one, two, few, many, other
    Arabic,
}

const INVARIANT: &[PluralCategory] = &[PluralCategory::Other];
const ONE_OTHER: &[PluralCategory] = &[PluralCategory::One, PluralCategory::Other];
const ONE_FEW_MANY: &[PluralCategory] = &[
    PluralCategory::One,
    PluralCategory::Few,
    PluralCategory::Many,
];
const ONE_FEW_OTHER: &[PluralCategory] = &[
    PluralCategory::One,
    PluralCategory::Few,
    PluralCategory::Other,
];
const ARABIC: &[PluralCategory] = &[
    PluralCategory::Zero,
    PluralCategory::One,
    PluralCategory::Two,
    PluralCategory::Few,
    PluralCategory::Many,
    PluralCategory::Other,
];

impl PluralFamily {
    /// Get the index of the plural variant to use for `n`
    #[must_use]
    pub const fn variant_index(self, n: u64) -> usize {
        match self {
            Self::Invariant => 0,
            Self::Germanic => (n != 1) as usize,
            Self::Romance => (n > 1) as usize,
            Self::Slavic => select_plural_variant(n),
            Self::Polish => {
                let mod10 = n % 10;
                let mod100 = n % 100;
                if n == 1 {
                    0
                } else if mod10 >= 2 && mod10 <= 4 && (mod100 < 10 || mod100 >= 20) {
                    1
                } else {
                    2
                }
            }
            Self::Czech => match n {
                1 => 0,
                2..=4 => 1,
                _ => 2,
            },
            Self::Arabic => match (n, n % 100) {
                (0, _) => 0,
                (1, _) => 1,
                (2, _) => 2,
                (_, 3..=10) => 3,
                (_, 11..=99) => 4,
                _ => 5,
            },
        }
    }

    /// Number of plural variants a table entry needs for this family
    #[must_use]
    pub fn forms(self) -> usize {
        self.categories().len()
    }

    /// CLDR categories in variant-index order
    #[must_use]
    pub fn categories(self) -> &'static [PluralCategory] {
        match self {
            Self::Invariant => INVARIANT,
            Self::Germanic | Self::Romance => ONE_OTHER,
            Self::Slavic | Self::Polish => ONE_FEW_MANY,
            Self::Czech => ONE_FEW_OTHER,
            Self::Arabic => ARABIC,
        }
    }

    /// Get the CLDR category for `n`
    #[must_use]
    pub fn category(self, n: u64) -> PluralCategory {
        self.categories()[self.variant_index(n)]
    }

    /// Check if the family distinguishes more than singular and plural
    #[must_use]
    pub fn has_complex_pluralization(self) -> bool {
        self.forms() > 2
    }

    /// Select the family for a primary language subtag and optional region.
    ///
    /// Unknown languages fall back to [`PluralFamily::Germanic`].
    #[must_use]
    pub fn for_language(language: &str, region: Option<&str>) -> Self {
        match (language.to_ascii_lowercase().as_str(), region) {
            ("pt", Some(r)) if r.eq_ignore_ascii_case("br") => Self::Romance,
            ("ja" | "zh" | "ko" | "vi" | "th" | "id" | "ms", _) => Self::Invariant,
            ("fr" | "hi" | "bn", _) => Self::Romance,
            ("ru" | "uk" | "be" | "sr" | "hr" | "bs", _) => Self::Slavic,
            ("pl", _) => Self::Polish,
            ("cs" | "sk", _) => Self::Czech,
            ("ar", _) => Self::Arabic,
            _ => Self::Germanic,
        }
    }

    /// Get the lowercase name used in configuration and data files
    pub fn name(&self) -> &'static str {
        match self {
            Self::Invariant => "invariant",
            Self::Germanic => "germanic",
            Self::Romance => "romance",
            Self::Slavic => "slavic",
            Self::Polish => "polish",
            Self::Czech => "czech",
            Self::Arabic => "arabic",
        }
    }
}

impl fmt::Display for PluralFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PluralFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "invariant" => Ok(Self::Invariant),
            "germanic" => Ok(Self::Germanic),
            "romance" => Ok(Self::Romance),
            "slavic" => Ok(Self::Slavic),
            "polish" => Ok(Self::Polish),
            "czech" => Ok(Self::Czech),
            "arabic" => Ok(Self::Arabic),
            other => Err(format!("unknown plural family '{other}'")),
        }
    }
}

/// What to do with a signed quantity below zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NegativeQuantityPolicy {
    /// Return [`I18nError::NegativeQuantity`]
    #[default]
    Reject,
    /// Use the absolute value
    Magnitude,
}

impl NegativeQuantityPolicy {
    /// Turn a signed quantity into the non-negative domain of the plural rules
    pub fn normalize(self, n: i64) -> I18nResult<u64> {
        match (self, u64::try_from(n)) {
            (_, Ok(n)) => Ok(n),
            (Self::Magnitude, Err(_)) => Ok(n.unsigned_abs()),
            (Self::Reject, Err(_)) => Err(I18nError::NegativeQuantity(n)),
        }
    }
}
