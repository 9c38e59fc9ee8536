//! Python bindings
//!
//! Exposes encoding, comparison, batch processing and phonetic grouping as
//! the `_core` extension module.

use pyo3::create_exception;
use pyo3::prelude::*;

use crate::algorithms::phonetic;
use crate::batch::{self, BatchConfig, BatchRow};
use crate::compare::{self, MatchKind};
use crate::groups;

// ============================================================================
// Custom Python Exceptions
// ============================================================================

create_exception!(namesake, NamesakeError, pyo3::exceptions::PyException);
create_exception!(namesake, ValidationError, NamesakeError);

fn validate_max_length(max_length: usize) -> PyResult<()> {
    if max_length == 0 {
        return Err(ValidationError::new_err(
            "max_length must be at least 1, got 0".to_string(),
        ));
    }
    Ok(())
}

fn kind_label(kind: MatchKind) -> &'static str {
    match kind {
        MatchKind::Exact => "exact",
        MatchKind::Primary => "primary",
        MatchKind::Secondary => "secondary",
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// Result of comparing a primary name with one variation.
#[pyclass(name = "ComparisonResult", frozen)]
#[derive(Clone, Debug)]
pub struct PyComparisonResult {
    #[pyo3(get)]
    pub primary_name: String,
    #[pyo3(get)]
    pub variation_name: String,
    /// (primary, secondary) codes of the primary name
    #[pyo3(get)]
    pub codes_a: (String, String),
    /// (primary, secondary) codes of the variation
    #[pyo3(get)]
    pub codes_b: (String, String),
    #[pyo3(get)]
    pub is_match: bool,
    /// "exact", "primary", "secondary", or None
    #[pyo3(get)]
    pub match_kind: Option<String>,
}

impl From<compare::ComparisonResult> for PyComparisonResult {
    fn from(result: compare::ComparisonResult) -> Self {
        let match_kind = result.match_kind().map(|kind| kind_label(kind).to_string());
        Self {
            primary_name: result.primary_name.into_string(),
            variation_name: result.variation_name.into_string(),
            codes_a: (result.codes_a.primary, result.codes_a.secondary),
            codes_b: (result.codes_b.primary, result.codes_b.secondary),
            is_match: result.is_match,
            match_kind,
        }
    }
}

#[pymethods]
impl PyComparisonResult {
    fn __repr__(&self) -> String {
        format!(
            "ComparisonResult(primary_name='{}', variation_name='{}', codes_a={:?}, codes_b={:?}, is_match={})",
            self.primary_name,
            self.variation_name,
            self.codes_a,
            self.codes_b,
            if self.is_match { "True" } else { "False" }
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.primary_name == other.primary_name
            && self.variation_name == other.variation_name
            && self.codes_a == other.codes_a
            && self.codes_b == other.codes_b
    }
}

// ============================================================================
// Functions
// ============================================================================

/// Encode a name using the Double Metaphone algorithm.
///
/// Returns a tuple of (primary, secondary) codes, or None for a blank name.
/// The secondary code equals the primary code when there is only one
/// pronunciation.
///
/// # Example
/// ```python
/// >>> double_metaphone("Schmidt")
/// ('XMT', 'SMT')  # German and Anglicized pronunciations
/// >>> double_metaphone("Smith")
/// ('SM0', 'XMT')  # 0 represents the TH sound
/// ```
#[pyfunction]
#[pyo3(signature = (text, max_length=4))]
fn double_metaphone(text: &str, max_length: usize) -> PyResult<Option<(String, String)>> {
    validate_max_length(max_length)?;
    Ok(phonetic::DoubleMetaphone::with_max_length(max_length)
        .encode(text)
        .map(|code| (code.primary, code.secondary)))
}

/// Compare two names phonetically. Returns None if either name is blank.
#[pyfunction]
fn compare_names(primary: &str, variation: &str) -> Option<PyComparisonResult> {
    compare::compare(primary, variation).map(Into::into)
}

/// Compare each row's variations against its primary name.
///
/// Args:
///     rows: List of (primary_name, [variation, ...]) tuples
///     max_length: Maximum length of phonetic codes (default: 4)
///     parallel_threshold: Comparison count at which work runs in parallel
///
/// Returns:
///     Comparison results in row/variation order, blank names skipped
#[pyfunction]
#[pyo3(signature = (rows, max_length=4, parallel_threshold=100))]
fn process_batch(
    py: Python<'_>,
    rows: Vec<(String, Vec<String>)>,
    max_length: usize,
    parallel_threshold: usize,
) -> PyResult<Vec<PyComparisonResult>> {
    validate_max_length(max_length)?;

    let rows = batch_rows(rows);
    let config = BatchConfig {
        max_code_length: max_length,
        parallel_threshold,
    };

    let result = py.allow_threads(|| batch::process_batch_with(&rows, &config));
    Ok(result.into_iter().map(Into::into).collect())
}

fn batch_rows(rows: Vec<(String, Vec<String>)>) -> Vec<BatchRow> {
    rows.into_iter()
        .map(|(primary_name, variations)| BatchRow {
            primary_name,
            variations,
        })
        .collect()
}

/// Group names sharing a primary code.
///
/// Returns a list of (code, [(name, primary, secondary), ...]) for every
/// code shared by two or more names.
#[pyfunction]
fn phonetic_groups(names: Vec<String>) -> Vec<(String, Vec<(String, String, String)>)> {
    groups::group_by_code(&names)
        .into_iter()
        .map(|group| {
            let members = group
                .members
                .into_iter()
                .map(|m| (m.name.into_string(), m.codes.primary, m.codes.secondary))
                .collect();
            (group.code, members)
        })
        .collect()
}

/// Find names that sound like `query`.
///
/// Returns a list of (name, primary, secondary, match_kind) tuples.
#[pyfunction]
fn search_names(query: &str, names: Vec<String>) -> Vec<(String, String, String, &'static str)> {
    groups::search(query, &names)
        .into_iter()
        .map(|hit| {
            (
                hit.name.into_string(),
                hit.codes.primary,
                hit.codes.secondary,
                kind_label(hit.kind),
            )
        })
        .collect()
}

// ============================================================================
// Python Module
// ============================================================================

#[pymodule]
fn _core(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("NamesakeError", py.get_type::<NamesakeError>())?;
    m.add("ValidationError", py.get_type::<ValidationError>())?;

    m.add_class::<PyComparisonResult>()?;

    m.add_function(wrap_pyfunction!(double_metaphone, m)?)?;
    m.add_function(wrap_pyfunction!(compare_names, m)?)?;
    m.add_function(wrap_pyfunction!(process_batch, m)?)?;
    m.add_function(wrap_pyfunction!(phonetic_groups, m)?)?;
    m.add_function(wrap_pyfunction!(search_names, m)?)?;

    Ok(())
}
