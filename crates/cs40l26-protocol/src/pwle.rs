//! PWLE sequencing: an ordered list of ramp and braking segments becomes one
//! envelope-kind OWT payload.
//!
//! The sequencer tracks the previous segment's end amplitude/frequency. When
//! a ramp does not start where the previous one ended, a zero-duration snap
//! segment is inserted so the firmware transitions state before ramping.
//! Braking resets that state: braking discontinuities cannot be snap-merged.

#![deny(static_mut_refs)]

use crate::chunk::PwleChunk;
use crate::device::HapticDevice;
use crate::error::{Cs40l26Error, Result};
use crate::types::{
    CS40L26_PWLE_LEVEL_MAX, COMPOSE_PWLE_PRIMITIVE_DURATION_MAX_MS, COMPOSE_PWLE_SIZE_MAX,
    ComposedOwt, MAX_COLD_START_LATENCY_MS, PWLE_FREQUENCY_MAX_HZ, PWLE_FREQUENCY_MIN_HZ,
    PWLE_LEVEL_MAX, PWLE_LEVEL_MIN, PwlePrimitive,
};
use tracing::{debug, warn};

fn check_range(field: &'static str, value: f32, min: f32, max: f32) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(Cs40l26Error::ValueOutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

fn check_duration(duration_ms: u32) -> Result<()> {
    if duration_ms > COMPOSE_PWLE_PRIMITIVE_DURATION_MAX_MS {
        return Err(Cs40l26Error::ValueOutOfRange {
            field: "duration",
            value: duration_ms as f32,
            min: 0.0,
            max: COMPOSE_PWLE_PRIMITIVE_DURATION_MAX_MS as f32,
        });
    }
    Ok(())
}

/// Build an envelope-kind OWT payload from an ordered PWLE sequence.
///
/// Amplitudes are validated against the generic `[0.0, 1.0]` range but
/// silently capped at the chip maximum; frequencies and durations are
/// rejected outright when out of bounds. The returned predicted duration
/// includes the cold-start latency allowance.
///
/// # Errors
///
/// `MalformedSequence` for an empty or over-length sequence, a running
/// section count past the firmware ceiling, or a total duration past the
/// wlength field width; `ValueOutOfRange` for amplitude, frequency, or
/// duration bounds; `UnsupportedBraking` for an unavailable braking kind.
pub fn compose_pwle(
    device: &impl HapticDevice,
    primitives: &[PwlePrimitive],
) -> Result<ComposedOwt> {
    if primitives.is_empty() {
        return Err(Cs40l26Error::MalformedSequence("empty PWLE composition"));
    }
    if primitives.len() > COMPOSE_PWLE_SIZE_MAX {
        return Err(Cs40l26Error::MalformedSequence(
            "PWLE composition exceeds the maximum entry count",
        ));
    }
    debug!(entries = primitives.len(), "composing PWLE sequence");

    let mut chunk = PwleChunk::new()?;
    let mut section_count: usize = 0;
    let mut total_duration_ms: u32 = 0;
    // End state of the previous segment; None until the first ramp completes
    // and after every braking segment.
    let mut prev_end: Option<(f32, f32)> = None;

    for primitive in primitives {
        match primitive {
            PwlePrimitive::Active(active) => {
                check_duration(active.duration_ms)?;
                check_range(
                    "start amplitude",
                    active.start_amplitude,
                    PWLE_LEVEL_MIN,
                    PWLE_LEVEL_MAX,
                )?;
                check_range(
                    "end amplitude",
                    active.end_amplitude,
                    PWLE_LEVEL_MIN,
                    PWLE_LEVEL_MAX,
                )?;
                // Cap, never reject, above the chip ceiling; the strict
                // rejection above guards the generic range only.
                let start_amplitude = active.start_amplitude.min(CS40L26_PWLE_LEVEL_MAX);
                let end_amplitude = active.end_amplitude.min(CS40L26_PWLE_LEVEL_MAX);
                check_range(
                    "start frequency",
                    active.start_frequency_hz,
                    PWLE_FREQUENCY_MIN_HZ,
                    PWLE_FREQUENCY_MAX_HZ,
                )?;
                check_range(
                    "end frequency",
                    active.end_frequency_hz,
                    PWLE_FREQUENCY_MIN_HZ,
                    PWLE_FREQUENCY_MAX_HZ,
                )?;

                // Exact comparison intentionally; the firmware snaps on any
                // state discontinuity, however small.
                #[allow(clippy::float_cmp, reason = "wire-exact state comparison")]
                let continuous =
                    prev_end == Some((start_amplitude, active.start_frequency_hz));
                if !continuous {
                    chunk.push_active(0, start_amplitude, active.start_frequency_hz, false)?;
                    section_count += 1;
                }

                #[allow(clippy::float_cmp, reason = "wire-exact chirp detection")]
                let chirp = active.start_frequency_hz != active.end_frequency_hz;
                chunk.push_active(
                    active.duration_ms,
                    end_amplitude,
                    active.end_frequency_hz,
                    chirp,
                )?;
                section_count += 1;

                prev_end = Some((end_amplitude, active.end_frequency_hz));
                total_duration_ms += active.duration_ms;
            }
            PwlePrimitive::Braking(braking) => {
                if !device.supports_braking(braking.braking) {
                    return Err(Cs40l26Error::UnsupportedBraking(braking.braking));
                }
                check_duration(braking.duration_ms)?;

                // Zero-duration initiator, then the braking segment proper.
                chunk.push_braking(0, braking.braking)?;
                section_count += 1;
                chunk.push_braking(braking.duration_ms, braking.braking)?;
                section_count += 1;

                prev_end = None;
                total_duration_ms += braking.duration_ms;
            }
        }

        // Checked incrementally: the nibble-split header count field is a
        // hard firmware ceiling.
        if section_count > COMPOSE_PWLE_SIZE_MAX {
            warn!(section_count, "too many PWLE sections");
            return Err(Cs40l26Error::MalformedSequence(
                "PWLE section count exceeds the firmware ceiling",
            ));
        }
    }

    total_duration_ms += MAX_COLD_START_LATENCY_MS;
    let payload = chunk.finalize(total_duration_ms, section_count)?;
    debug!(
        bytes = payload.len(),
        sections = section_count,
        predicted_ms = total_duration_ms,
        "composed PWLE payload"
    );
    Ok(ComposedOwt {
        payload,
        predicted_duration_ms: total_duration_ms,
    })
}
