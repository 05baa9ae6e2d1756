//! Error types for OWT payload construction.

#![deny(static_mut_refs)]

use crate::types::{Braking, CompositePrimitive};
use thiserror::Error;

/// Errors returned while building or finalizing an OWT payload.
///
/// Every error aborts the construction of the current payload; no partially
/// written buffer is ever handed to a caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Cs40l26Error {
    /// The fixed-capacity payload buffer has no room for another flush group.
    #[error("OWT buffer full: {capacity} byte capacity reached")]
    CapacityExceeded {
        /// Buffer capacity in bytes.
        capacity: usize,
    },

    /// A numeric input fell outside its documented firmware bound.
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    ValueOutOfRange {
        /// Field name.
        field: &'static str,
        /// The rejected value.
        value: f32,
        /// Minimum allowed value.
        min: f32,
        /// Maximum allowed value.
        max: f32,
    },

    /// The primitive's capability bit is absent from the device bitmask.
    #[error("primitive {0:?} is not supported by this device")]
    UnsupportedPrimitive(CompositePrimitive),

    /// The braking kind is not supported by this device.
    #[error("braking kind {0:?} is not supported by this device")]
    UnsupportedBraking(Braking),

    /// Structurally invalid effect sequence.
    #[error("malformed effect sequence: {0}")]
    MalformedSequence(&'static str),
}

/// Convenience result alias for OWT encoding operations.
pub type Result<T> = core::result::Result<T, Cs40l26Error>;
