//! Pairwise phonetic comparison of names

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::algorithms::{DoubleMetaphone, PhoneticCode, PhoneticEncoder};
use crate::name::Name;

/// How two code pairs matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Primary and secondary codes are identical on both sides
    Exact,
    /// Primary codes are identical
    Primary,
    /// One side's primary code equals the other side's secondary code
    Secondary,
}

/// Errors raised when reading a serialized [`ComparisonResult`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComparisonError {
    #[error("isMatch is {stored} but the phonetic codes give {computed}")]
    InconsistentMatch { stored: bool, computed: bool },
}

/// Full record of one name comparison.
///
/// Deserializing checks `isMatch` against the codes, so a record read back
/// always satisfies `is_match == codes_match(&codes_a, &codes_b)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ComparisonRecord")]
pub struct ComparisonResult {
    pub primary_name: Name,
    pub variation_name: Name,
    pub codes_a: PhoneticCode,
    pub codes_b: PhoneticCode,
    pub is_match: bool,
}

/// Unchecked wire form of [`ComparisonResult`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ComparisonRecord {
    primary_name: Name,
    variation_name: Name,
    codes_a: PhoneticCode,
    codes_b: PhoneticCode,
    is_match: bool,
}

impl TryFrom<ComparisonRecord> for ComparisonResult {
    type Error = ComparisonError;

    fn try_from(record: ComparisonRecord) -> Result<Self, Self::Error> {
        let computed = codes_match(&record.codes_a, &record.codes_b);
        if record.is_match != computed {
            return Err(ComparisonError::InconsistentMatch {
                stored: record.is_match,
                computed,
            });
        }

        Ok(Self {
            primary_name: record.primary_name,
            variation_name: record.variation_name,
            codes_a: record.codes_a,
            codes_b: record.codes_b,
            is_match: computed,
        })
    }
}

impl ComparisonResult {
    /// Classify the match, `None` when the names do not match.
    #[must_use]
    pub fn match_kind(&self) -> Option<MatchKind> {
        match_kind(&self.codes_a, &self.codes_b)
    }
}

/// The phonetic match predicate.
///
/// Matches when the primary codes agree, or when one side's primary code
/// agrees with the other side's secondary code. Secondary codes are never
/// compared with each other.
#[must_use]
pub fn codes_match(a: &PhoneticCode, b: &PhoneticCode) -> bool {
    a.primary == b.primary || a.primary == b.secondary || a.secondary == b.primary
}

/// Classify how two code pairs match.
#[must_use]
pub fn match_kind(a: &PhoneticCode, b: &PhoneticCode) -> Option<MatchKind> {
    if a.primary == b.primary {
        if a.secondary == b.secondary {
            Some(MatchKind::Exact)
        } else {
            Some(MatchKind::Primary)
        }
    } else if a.primary == b.secondary || a.secondary == b.primary {
        Some(MatchKind::Secondary)
    } else {
        None
    }
}

/// Compare two names using the default Double Metaphone encoder.
///
/// Returns `None` when either name is empty or whitespace-only.
///
/// # Examples
/// ```
/// use namesake::compare;
///
/// let result = compare("Muhammad", "Mohammed").unwrap();
/// assert!(result.is_match);
/// assert_eq!(result.codes_a.primary, "MHMT");
///
/// assert!(!compare("John", "Mary").unwrap().is_match);
/// assert!(compare("John", "  ").is_none());
/// ```
#[must_use]
pub fn compare(primary: &str, variation: &str) -> Option<ComparisonResult> {
    compare_with(&DoubleMetaphone::default(), primary, variation)
}

/// Compare two names using any phonetic encoder.
#[must_use]
pub fn compare_with<E: PhoneticEncoder + ?Sized>(
    encoder: &E,
    primary: &str,
    variation: &str,
) -> Option<ComparisonResult> {
    let primary_name = Name::parse(primary).ok()?;
    let variation_name = Name::parse(variation).ok()?;
    Some(compare_names(encoder, primary_name, variation_name))
}

/// Compare two already validated names.
#[must_use]
pub fn compare_names<E: PhoneticEncoder + ?Sized>(
    encoder: &E,
    primary_name: Name,
    variation_name: Name,
) -> ComparisonResult {
    let codes_a = encoder.encode(primary_name.as_str()).unwrap_or_else(empty_code);
    let codes_b = encoder.encode(variation_name.as_str()).unwrap_or_else(empty_code);
    let is_match = codes_match(&codes_a, &codes_b);

    ComparisonResult {
        primary_name,
        variation_name,
        codes_a,
        codes_b,
        is_match,
    }
}

// A validated Name always encodes; this only keeps the signature total.
fn empty_code() -> PhoneticCode {
    PhoneticCode::new("", "")
}
