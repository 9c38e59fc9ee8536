//! Batch comparison of primary names against their spelling variations
//!
//! A batch is a list of rows, each pairing one primary name with the
//! variations to check against it. Every (row, variation) pair produces one
//! [`ComparisonResult`], in input order. Blank primaries and blank
//! variations are skipped without failing the batch.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::algorithms::{DoubleMetaphone, PhoneticEncoder, DEFAULT_MAX_LENGTH};
use crate::compare::{compare_names, ComparisonResult};
use crate::name::Name;

/// Minimum number of comparisons before a batch is processed in parallel.
///
/// For smaller batches, sequential processing is faster due to the overhead
/// of thread pool coordination.
pub const PARALLEL_THRESHOLD: usize = 100;

/// One primary name and the variations to compare against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRow {
    pub primary_name: String,
    pub variations: Vec<String>,
}

impl BatchRow {
    #[must_use]
    pub fn new<I, S>(primary_name: impl Into<String>, variations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            primary_name: primary_name.into(),
            variations: variations.into_iter().map(Into::into).collect(),
        }
    }
}

/// Batch processing settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Maximum length of each phonetic code
    pub max_code_length: usize,
    /// Comparison count at which the batch switches to parallel processing
    pub parallel_threshold: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_code_length: DEFAULT_MAX_LENGTH,
            parallel_threshold: PARALLEL_THRESHOLD,
        }
    }
}

/// Ordered comparison records produced by a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchResult {
    pub comparisons: Vec<ComparisonResult>,
}

/// Match counts over a batch result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub total: usize,
    pub matched: usize,
    pub not_matched: usize,
}

/// Match status selector for [`ResultFilter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    All,
    Matched,
    NotMatched,
}

/// Filter over batch results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultFilter {
    /// Case-insensitive substring matched against either name
    pub query: Option<String>,
    pub status: MatchStatus,
}

impl ResultFilter {
    #[must_use]
    pub fn status(status: MatchStatus) -> Self {
        Self {
            query: None,
            status,
        }
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    fn accepts(&self, result: &ComparisonResult, needle: Option<&str>) -> bool {
        let status_ok = match self.status {
            MatchStatus::All => true,
            MatchStatus::Matched => result.is_match,
            MatchStatus::NotMatched => !result.is_match,
        };
        if !status_ok {
            return false;
        }

        match needle {
            Some(needle) => {
                result.primary_name.as_str().to_lowercase().contains(needle)
                    || result.variation_name.as_str().to_lowercase().contains(needle)
            }
            None => true,
        }
    }
}

impl BatchResult {
    #[must_use]
    pub fn len(&self) -> usize {
        self.comparisons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.comparisons.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ComparisonResult> {
        self.comparisons.iter()
    }

    /// Count matches and non-matches.
    #[must_use]
    pub fn summary(&self) -> BatchSummary {
        let matched = self.comparisons.iter().filter(|r| r.is_match).count();
        BatchSummary {
            total: self.comparisons.len(),
            matched,
            not_matched: self.comparisons.len() - matched,
        }
    }

    /// Results accepted by `filter`, in batch order.
    #[must_use]
    pub fn filter(&self, filter: &ResultFilter) -> Vec<&ComparisonResult> {
        let needle = filter
            .query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);

        self.comparisons
            .iter()
            .filter(|r| filter.accepts(r, needle.as_deref()))
            .collect()
    }
}

impl IntoIterator for BatchResult {
    type Item = ComparisonResult;
    type IntoIter = std::vec::IntoIter<ComparisonResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.comparisons.into_iter()
    }
}

impl<'a> IntoIterator for &'a BatchResult {
    type Item = &'a ComparisonResult;
    type IntoIter = std::slice::Iter<'a, ComparisonResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.comparisons.iter()
    }
}

/// Compare every variation of every row against the row's primary name.
///
/// # Examples
/// ```
/// use namesake::{process_batch, BatchRow};
///
/// let rows = vec![BatchRow::new("Ahmad", ["Ahmed", "", "Ahmat"])];
/// let result = process_batch(&rows);
///
/// let variations: Vec<&str> = result.iter().map(|r| r.variation_name.as_str()).collect();
/// assert_eq!(variations, ["Ahmed", "Ahmat"]);
/// ```
#[must_use]
pub fn process_batch(rows: &[BatchRow]) -> BatchResult {
    process_batch_with(rows, &BatchConfig::default())
}

/// Compare a batch using explicit settings.
///
/// Uses parallel processing once the number of comparisons reaches
/// `config.parallel_threshold`; the output order is the input order either way.
#[must_use]
pub fn process_batch_with(rows: &[BatchRow], config: &BatchConfig) -> BatchResult {
    let encoder = DoubleMetaphone::with_max_length(config.max_code_length);
    process_batch_with_encoder(rows, &encoder, config.parallel_threshold)
}

/// Compare a batch with any phonetic encoder.
#[must_use]
pub fn process_batch_with_encoder<E: PhoneticEncoder + ?Sized>(
    rows: &[BatchRow],
    encoder: &E,
    parallel_threshold: usize,
) -> BatchResult {
    let pairs = collect_pairs(rows);

    let comparisons: Vec<ComparisonResult> = if pairs.len() >= parallel_threshold {
        pairs
            .into_par_iter()
            .map(|(primary, variation)| compare_names(encoder, primary, variation))
            .collect()
    } else {
        pairs
            .into_iter()
            .map(|(primary, variation)| compare_names(encoder, primary, variation))
            .collect()
    };

    trace!(
        encoder = encoder.name(),
        rows = rows.len(),
        comparisons = comparisons.len(),
        "batch processed"
    );

    BatchResult { comparisons }
}

/// Validate names and flatten rows into (primary, variation) pairs in order.
fn collect_pairs(rows: &[BatchRow]) -> Vec<(Name, Name)> {
    let mut pairs = Vec::with_capacity(rows.iter().map(|r| r.variations.len()).sum());

    for (row_index, row) in rows.iter().enumerate() {
        let Ok(primary) = Name::parse(&row.primary_name) else {
            debug!(row = row_index, "skipping row with blank primary name");
            continue;
        };

        for (variation_index, raw) in row.variations.iter().enumerate() {
            match Name::parse(raw) {
                Ok(variation) => pairs.push((primary.clone(), variation)),
                Err(_) => debug!(
                    row = row_index,
                    variation = variation_index,
                    "skipping blank variation"
                ),
            }
        }
    }

    pairs
}
