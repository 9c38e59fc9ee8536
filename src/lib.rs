//! Namesake - phonetic personal-name comparison
//!
//! Decides whether two differently spelled names are likely pronunciations
//! of the same name ("Muhammad" / "Mohammed"), using Double Metaphone codes.
//!
//! # Features
//! - Full Double Metaphone encoder with primary and secondary codes
//! - Pairwise comparison with a three-way code match predicate
//! - Ordered, optionally parallel batch comparison
//! - Phonetic grouping and search over name lists
//! - Python bindings (enabled with the `python` feature)

pub mod algorithms;
pub mod batch;
pub mod compare;
pub mod groups;
pub mod name;

// Python bindings (enabled with the `python` feature)
#[cfg(feature = "python")]
mod python;

pub use algorithms::{
    double_metaphone, encode, DoubleMetaphone, PhoneticCode, PhoneticEncoder, DEFAULT_MAX_LENGTH,
};
pub use batch::{
    process_batch, process_batch_with, process_batch_with_encoder, BatchConfig, BatchResult,
    BatchRow, BatchSummary, MatchStatus, ResultFilter, PARALLEL_THRESHOLD,
};
pub use compare::{
    codes_match, compare, compare_with, ComparisonError, ComparisonResult, MatchKind,
};
pub use groups::{group_by_code, name_stats, search, EncodedName, NameStats, PhoneticGroup, SearchHit};
pub use name::{Name, NameError};
