//! Error types for quadrature rule construction.
//!
//! Rule lookup is a closed catalog: asking for an index outside the published
//! set is a configuration error with no fallback. A rule that turns out to be
//! less exact than claimed is *not* an error here; the verification helpers in
//! [`crate::check`] surface that as a returned degree instead.

use thiserror::Error;

/// Errors that can occur while constructing a quadrature rule.
#[derive(Debug, Error)]
pub enum QuadratureError {
    /// The requested rule index is not in the published catalog.
    #[error("no {family} rule with index {index} (available: 1..={max})")]
    UnknownIndex {
        /// Rule family name, e.g. "Felippa wedge"
        family: &'static str,
        /// The index that was requested
        index: usize,
        /// Largest catalogued index
        max: usize,
    },

    /// A rule needs at least one sample point.
    #[error("{family} rule needs at least one point (got n = {n})")]
    InvalidPointCount {
        /// Rule family name
        family: &'static str,
        /// The invalid point count
        n: usize,
    },

    /// An embedded coefficient table failed to deserialize.
    #[error("malformed {family} table {index}: {source}")]
    BadTable {
        /// Rule family name
        family: &'static str,
        /// Table index within the family
        index: usize,
        /// Underlying deserialization error
        #[source]
        source: serde_json::Error,
    },
}

/// A specialized `Result` type for rule construction.
pub type Result<T> = std::result::Result<T, QuadratureError>;
