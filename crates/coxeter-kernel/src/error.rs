//! Error types for Coxeter kernel operations.

/// Errors arising from contract violations at the kernel boundary.
///
/// Every variant names the contract a caller broke. None of them is a
/// transient condition: retrying with the same inputs yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoxeterError {
    /// A word references a generator index outside `0..rank`.
    #[error("invalid generator {index}: system has rank {rank}")]
    InvalidGenerator { index: usize, rank: usize },

    /// Indexed access beyond the end of a word or inversion sequence.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The bond-order table is not a Coxeter matrix.
    #[error("malformed coxeter matrix at ({row}, {col}): {reason}")]
    MalformedCoxeterMatrix {
        row: usize,
        col: usize,
        reason: String,
    },

    /// A reduced-word-only operation was asked about a non-reduced word.
    #[error("precondition violated in {operation}: {reason}")]
    PreconditionViolated {
        operation: &'static str,
        reason: String,
    },

    /// The generator table does not satisfy the relations of the matrix.
    #[error("generator table violates relation {relation}")]
    RelationViolated { relation: String },

    /// The generator table and the matrix disagree on the rank.
    #[error("rank mismatch: matrix has rank {expected}, generator table has {actual} entries")]
    RankMismatch { expected: usize, actual: usize },

    /// A rank or bond order beyond what the kernel will build.
    #[error("{what} {value} exceeds the limit of {limit}")]
    LimitExceeded {
        what: &'static str,
        value: u64,
        limit: u64,
    },

    /// A Cartan-type name could not be parsed.
    #[error("unknown cartan type: {0}")]
    UnknownCartanType(String),
}

pub type Result<T, E = CoxeterError> = std::result::Result<T, E>;
