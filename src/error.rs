//! Error types for ranking and unranking.

use num_bigint::BigUint;
use thiserror::Error;

/// Error variants for spec construction, ranking, and unranking.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The parameters do not describe a valid combinatorial family.
    #[error("invalid spec: {0}")]
    InvalidSpec(String),

    /// An index was passed to `unrank` that is not below the cardinality.
    #[error("index {index} out of range for cardinality {cardinality}")]
    IndexOutOfRange {
        /// The offending index.
        index: BigUint,
        /// The cardinality of the spec.
        cardinality: BigUint,
    },

    /// An object passed to `rank` does not belong to the spec's family.
    #[error("invalid object: {0}")]
    InvalidObject(String),

    /// A division that must be exact left a remainder.
    ///
    /// This is an implementation bug, never a caller error.
    #[error("arithmetic invariant violated: {0}")]
    ArithmeticInvariant(&'static str),

    /// An enumerated object did not rank back to the index it came from.
    #[error("rank mismatch: unranked {expected} but re-ranked to {actual}")]
    RankMismatch {
        /// The index that was unranked.
        expected: BigUint,
        /// The rank computed from the unranked object.
        actual: BigUint,
    },
}

/// A specialized Result type for ranking operations.
pub type Result<T> = std::result::Result<T, Error>;
