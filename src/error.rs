//! Error types for physics operations.

use core::fmt;

/// Errors that can occur during physics operations.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Chains need at least one segment.
    InvalidSegmentCount,
    /// Segment length must be positive and finite.
    InvalidSegmentLength,
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidSegmentCount => {
                write!(f, "chain needs at least one segment")
            }
            PhysicsError::InvalidSegmentLength => {
                write!(f, "segment length must be positive and finite")
            }
        }
    }
}
