//! CS40L26 haptic waveform protocol: OWT payload encoding and effect sequencing.
//!
//! This crate is intentionally I/O-free. It turns symbolic effect sequences
//! (composite primitives, PWLE envelopes) into the bit-packed on-the-fly
//! waveform payloads the CS40L26 DSP consumes, and can be tested without a
//! device or kernel force-feedback plumbing.

#![deny(static_mut_refs)]

pub mod chunk;
pub mod compose;
pub mod device;
pub mod error;
pub mod pwle;
pub mod types;
pub mod writer;

// Flat re-exports so callers can use `haptic_cs40l26_protocol::Foo`.
pub use chunk::{
    ComposeChunk, FF_CUSTOM_DATA_LEN_MAX_COMP, FF_CUSTOM_DATA_LEN_MAX_PWLE, OwtPayload,
    PWLE_AMP_REG_BIT, PWLE_BRAKE_BIT, PWLE_CHIRP_BIT, PwleChunk, WT_DURATION_MAX_MS, WT_LEN_CALCD,
    WaveformKind,
};
pub use compose::compose_effects;
pub use device::{CalibratedDevice, EFFECT_DURATIONS_MS, HapticDevice, primitive_details};
pub use error::{Cs40l26Error, Result};
pub use pwle::compose_pwle;
pub use types::{
    ActivePwle, Braking, BrakingPwle, COMPOSE_DELAY_MAX_MS, COMPOSE_PWLE_PRIMITIVE_DURATION_MAX_MS,
    COMPOSE_PWLE_SIZE_MAX, COMPOSE_SIZE_MAX, CS40L26_PWLE_LEVEL_MAX, CS40L26_PWLE_LEVEL_MIN,
    ComposedOwt, CompositeEffect, CompositePrimitive, MAX_COLD_START_LATENCY_MS,
    PWLE_FREQUENCY_MAX_HZ, PWLE_FREQUENCY_MIN_HZ, PWLE_FREQUENCY_RESOLUTION_HZ, PWLE_LEVEL_MAX,
    PWLE_LEVEL_MIN, PwlePrimitive, waveform_index,
};
pub use writer::OwtUploader;
