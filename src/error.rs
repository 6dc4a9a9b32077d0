//! Crate error taxonomy.

use thiserror::Error;

/// Errors raised while building an [`Instance`](crate::instance::Instance).
///
/// Both variants are fatal to instance construction: the builder is
/// consumed and no partial instance is ever handed to the compiler.
/// Solver-side outcomes (infeasible, unbounded, timeout) are not errors;
/// they are reported through
/// [`SolveStatus`](crate::solver::SolveStatus).
#[derive(Debug, Error)]
pub enum BuildError {
    /// A token in the edge stream could not be parsed as a number.
    #[error("malformed numeric token '{token}' in edge record {record}")]
    Parse {
        /// The offending token, as read.
        token: String,
        /// Zero-based index of the record the token belongs to.
        record: usize,
    },

    /// A node id referenced a position outside the declared node range.
    #[error("node id {id} outside the declared range 0..{limit}")]
    IndexOutOfRange {
        /// The offending id.
        id: usize,
        /// Exclusive upper bound of the valid range.
        limit: usize,
    },
}
