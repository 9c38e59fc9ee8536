//! Phonetic encoding algorithms
//!
//! Each algorithm is implemented as a standalone function for composability,
//! plus a trait-based interface for extensibility.

pub mod normalize;
pub mod phonetic;

pub use phonetic::*;

/// Trait for phonetic encoders producing a primary/secondary code pair.
pub trait PhoneticEncoder: Send + Sync {
    /// Encode a name. Returns `None` for empty or whitespace-only input.
    fn encode(&self, name: &str) -> Option<PhoneticCode>;

    /// Name of the algorithm, recorded in batch logs
    fn name(&self) -> &'static str;
}
