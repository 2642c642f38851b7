//! Capacity growth policy.

use crate::error::ContainerError;

/// Capacity of a container built with [`Container::new`](crate::Container::new).
pub const DEFAULT_CAPACITY: usize = 10;

/// Computes the capacity to grow to when `required` slots are needed.
///
/// Returns `None` when `capacity` already covers `required`. Otherwise the
/// result is `max(ceil(capacity * 1.5), required)`.
pub fn next_capacity(capacity: usize, required: usize) -> Result<Option<usize>, ContainerError> {
    if required <= capacity {
        return Ok(None);
    }
    let scaled = capacity
        .checked_add(capacity.div_ceil(2))
        .ok_or(ContainerError::CapacityOverflow)?;
    Ok(Some(scaled.max(required)))
}
