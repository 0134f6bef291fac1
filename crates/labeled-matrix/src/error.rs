use thiserror::Error;

/// Errors raised by `Matrix` operations and the delimited-text reader/writer.
///
/// A failed operation never leaves the matrix it was invoked on partially
/// modified.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// Row length, label count or operand shape disagrees with the matrix.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
    /// A row or column label lookup found nothing.
    #[error("label not found: '{0}'")]
    LabelNotFound(String),
    /// Validation found the same label twice on one axis.
    #[error("duplicate {axis} label: '{label}'")]
    DuplicateLabel { axis: Axis, label: String },
    #[error("{axis} index {index} out of range for length {len}")]
    IndexOutOfRange { axis: Axis, index: usize, len: usize },
    /// A field could not be converted to the requested numeric type.
    #[error("cannot parse '{value}' at line {line}, field {field}: {message}")]
    ParseFault {
        line: usize,
        field: usize,
        value: String,
        message: String,
    },
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("delimited text error: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid format config: {0}")]
    Config(#[from] serde_json::Error),
}

/// The two labeled axes of a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

pub type Result<T> = std::result::Result<T, MatrixError>;
