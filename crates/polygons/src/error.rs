//! Error type shared by polygons and sequences.

use std::fmt;

/// Errors surfaced by construction, mutation and sequence access.
#[derive(Clone, Debug, PartialEq)]
pub enum PolygonError {
    /// A value of the right kind but outside its domain (e.g. `edge_count < 3`).
    Validation { reason: String },
    /// A value of the wrong kind (complex or textual where a real is required).
    Type { reason: String },
    /// Sequence index outside `[-len, len)`.
    Index { index: isize, len: usize },
}

impl PolygonError {
    pub(crate) fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    pub(crate) fn type_mismatch(reason: impl Into<String>) -> Self {
        Self::Type {
            reason: reason.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn is_type(&self) -> bool {
        matches!(self, Self::Type { .. })
    }

    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index { .. })
    }
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation { reason } => write!(f, "invalid value: {reason}"),
            Self::Type { reason } => write!(f, "wrong type: {reason}"),
            Self::Index { index, len } => {
                write!(f, "index {index} out of range for sequence of length {len}")
            }
        }
    }
}

impl std::error::Error for PolygonError {}

pub type Result<T> = std::result::Result<T, PolygonError>;
