//! Error types for qsym-core

use thiserror::Error;

/// Result alias for simulator operations
pub type QsymResult<T> = Result<T, QsymError>;

/// Errors raised by matrix algebra, circuit construction and measurement
#[derive(Debug, Clone, Error)]
pub enum QsymError {
    #[error("Dimension mismatch in {op}: left is {}x{}, right is {}x{}", lhs.0, lhs.1, rhs.0, rhs.1)]
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("Malformed construction: a {rows}x{cols} matrix needs {expected} values, got {actual}")]
    MalformedConstruction {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Lane {lane} out of range for a circuit of depth {depth}")]
    OutOfRangeLane { lane: usize, depth: usize },

    #[error("Not a single-qubit gate: expected 2x2, got {rows}x{cols}")]
    NotSingleQubitGate { rows: usize, cols: usize },

    #[error("Measurement error: expected a column vector, got {cols} columns")]
    NotAColumnVector { cols: usize },

    #[error("Measurement error: state height {0} is not a power of two")]
    InvalidStateHeight(usize),

    #[error("State not normalized: total probability {total}")]
    NotNormalized { total: f64 },

    #[error("Invalid qubit count {count}: must be within 1..={max}")]
    InvalidQubitCount { count: usize, max: usize },

    #[error("Unknown gate: {0}")]
    UnknownGate(String),
}
