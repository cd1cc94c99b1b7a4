//! Error taxonomy for one resultant calculation.

use std::fmt;

/// Errors surfaced by `compute` and the string-polygon solver.
#[derive(Clone, Debug, PartialEq)]
pub enum CalcError {
    /// The force list is missing, empty, or holds a segment with non-finite coordinates.
    InvalidInput { reason: String },
    /// A line intersection hit parallel (or zero-length) lines.
    DegenerateGeometry { stage: String },
}

impl CalcError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn degenerate(stage: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            stage: stage.into(),
        }
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => write!(f, "invalid force system: {reason}"),
            Self::DegenerateGeometry { stage } => {
                write!(f, "degenerate geometry at {stage}: lines are parallel")
            }
        }
    }
}

impl std::error::Error for CalcError {}
