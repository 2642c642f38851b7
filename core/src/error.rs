//! Error type for container operations.
//!
//! Every failure is caused by the arguments of a single call, so none of these
//! are worth retrying with the same input. The container is never modified by a
//! call that returns an error.

use dyncontainer_raw_slots::AllocError;
use thiserror::Error;

use crate::fmt;

/// Which index range an operation accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOp {
    /// Reading or removing an existing element: `[0, len)`.
    Access,
    /// Inserting before an element or at the end: `[0, len]`.
    Insert,
}

// Renders the closing bracket of the valid range.
impl fmt::Display for IndexOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexOp::Access => write!(f, ")"),
            IndexOp::Insert => write!(f, "]"),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerError {
    /// A container was requested with no slots at all.
    #[error("invalid capacity {capacity}: capacity must be a positive number")]
    InvalidCapacity { capacity: usize },

    #[error(
        "index {index} out of bounds for container of size {len} (valid range: [0, {len}{op})"
    )]
    IndexOutOfBounds { index: usize, len: usize, op: IndexOp },

    /// The requested capacity does not fit in memory addressing limits.
    #[error("capacity overflow")]
    CapacityOverflow,

    #[error("failed to allocate storage for {capacity} elements")]
    AllocationFailed { capacity: usize },
}

impl ContainerError {
    pub(crate) fn out_of_bounds(index: usize, len: usize, op: IndexOp) -> Self {
        ContainerError::IndexOutOfBounds { index, len, op }
    }
}

impl From<AllocError> for ContainerError {
    fn from(err: AllocError) -> Self {
        match err {
            AllocError::CapacityOverflow => ContainerError::CapacityOverflow,
            AllocError::AllocFailed { capacity } => ContainerError::AllocationFailed { capacity },
        }
    }
}
