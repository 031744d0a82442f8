use std::fmt;

/// Result type for Argand operations
pub type Result<T> = std::result::Result<T, ArgandError>;

/// Main error type for the Argand library
#[derive(Debug, Clone)]
pub enum ArgandError {
    /// Invalid dimensions for operations
    DimensionMismatch {
        expected: String,
        actual: String,
    },

    /// Invalid parameter value
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// Numerical computation errors
    NumericalError(String),

    /// IO errors (file operations)
    IoError(String),

    /// Serialization/deserialization errors
    SerializationError(String),
}

impl fmt::Display for ArgandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgandError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {}, got {}", expected, actual)
            }
            ArgandError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            ArgandError::NumericalError(msg) => write!(f, "Numerical error: {}", msg),
            ArgandError::IoError(msg) => write!(f, "IO error: {}", msg),
            ArgandError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ArgandError {}

// Conversion from std::io::Error
impl From<std::io::Error> for ArgandError {
    fn from(err: std::io::Error) -> Self {
        ArgandError::IoError(err.to_string())
    }
}

// Conversion from bincode::Error
impl From<bincode::Error> for ArgandError {
    fn from(err: bincode::Error) -> Self {
        ArgandError::SerializationError(err.to_string())
    }
}

// Helper functions for common error patterns
impl ArgandError {
    pub fn dimension_mismatch<E: Into<String>, A: Into<String>>(expected: E, actual: A) -> Self {
        ArgandError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_parameter<N: Into<String>, R: Into<String>>(name: N, reason: R) -> Self {
        ArgandError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
