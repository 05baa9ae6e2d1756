//! Composite effect sequencing: an ordered list of primitive pulses becomes
//! one compose-kind OWT payload.
//!
//! A leading delay on the first entry is materialized as a zero-effect
//! segment so the firmware waits before the first pulse; every other delay
//! rides in the preceding segment's delay field.

#![deny(static_mut_refs)]

use crate::chunk::ComposeChunk;
use crate::device::{HapticDevice, primitive_details};
use crate::error::{Cs40l26Error, Result};
use crate::types::{COMPOSE_DELAY_MAX_MS, COMPOSE_SIZE_MAX, ComposedOwt, CompositeEffect,
    CompositePrimitive};
use tracing::debug;

fn checked_delay(delay_ms: u32) -> Result<u16> {
    if delay_ms > COMPOSE_DELAY_MAX_MS {
        return Err(Cs40l26Error::ValueOutOfRange {
            field: "delay",
            value: delay_ms as f32,
            min: 0.0,
            max: COMPOSE_DELAY_MAX_MS as f32,
        });
    }
    Ok(delay_ms as u16)
}

/// Build a compose-kind OWT payload from an ordered effect sequence.
///
/// Each entry's scale is validated against `[0.0, 1.0]`, clamped to the
/// per-primitive safety bounds, and converted to a firmware volume level via
/// the device calibration. The returned predicted duration aggregates fixed
/// effect durations and inter-effect delays; playback timing itself is
/// firmware-controlled.
///
/// # Errors
///
/// `MalformedSequence` for an empty or over-length sequence and for an entry
/// with neither effect content nor a following delay; `ValueOutOfRange` for
/// scale or delay bounds; `UnsupportedPrimitive` when a primitive's
/// capability bit is absent.
pub fn compose_effects(
    device: &impl HapticDevice,
    effects: &[CompositeEffect],
) -> Result<ComposedOwt> {
    if effects.is_empty() {
        return Err(Cs40l26Error::MalformedSequence("empty composition"));
    }
    if effects.len() > COMPOSE_SIZE_MAX {
        return Err(Cs40l26Error::MalformedSequence(
            "composition exceeds the maximum entry count",
        ));
    }
    debug!(entries = effects.len(), "composing OWT effect sequence");

    let mut total_duration_ms: u32 = 0;

    // A wait before the first effect costs one extra section.
    let leading_delay = match effects.first() {
        Some(first) => checked_delay(first.delay_ms)?,
        None => 0,
    };
    total_duration_ms += u32::from(leading_delay);
    let section_count = if leading_delay > 0 {
        effects.len() + 1
    } else {
        effects.len()
    };

    let mut chunk = ComposeChunk::new()?;
    if leading_delay > 0 {
        chunk.push_segment(0, 0, 0, 0, leading_delay)?;
    }

    for (i, entry) in effects.iter().enumerate() {
        if !(0.0..=1.0).contains(&entry.scale) {
            return Err(Cs40l26Error::ValueOutOfRange {
                field: "scale",
                value: entry.scale,
                min: 0.0,
                max: 1.0,
            });
        }

        let mut effect_index = 0u32;
        let mut vol_level = 0u32;
        if entry.primitive != CompositePrimitive::Noop {
            effect_index = primitive_details(device, entry.primitive)?;
            let (min_scale, max_scale) = device.scale_bounds(entry.primitive);
            let scale = entry.scale.clamp(min_scale, max_scale);
            vol_level = device.vol_level(scale, effect_index);
            total_duration_ms += device.effect_duration_ms(effect_index);
        }

        // The delay of the following entry rides in this segment.
        let next_delay = match effects.get(i + 1) {
            Some(next) => checked_delay(next.delay_ms)?,
            None => 0,
        };
        total_duration_ms += u32::from(next_delay);

        if effect_index == 0 && next_delay == 0 {
            return Err(Cs40l26Error::MalformedSequence(
                "segment carries neither effect content nor delay",
            ));
        }
        chunk.push_segment(vol_level, effect_index, 0, 0, next_delay)?;
    }

    let payload = chunk.finalize(section_count)?;
    debug!(
        bytes = payload.len(),
        sections = section_count,
        predicted_ms = total_duration_ms,
        "composed OWT payload"
    );
    Ok(ComposedOwt {
        payload,
        predicted_duration_ms: total_duration_ms,
    })
}
