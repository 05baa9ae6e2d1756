//! Device capability and calibration collaborators consumed by the sequencers.
//!
//! The encoder never touches hardware; everything chip- or
//! calibration-specific comes in through [`HapticDevice`].
//! [`CalibratedDevice`] is the concrete implementation backed by the values a
//! calibration pass produces.

#![deny(static_mut_refs)]

use crate::error::{Cs40l26Error, Result};
use crate::types::{Braking, CompositePrimitive, waveform_index};

/// Fixed playback durations of the physical waveform bank, in milliseconds,
/// indexed by physical waveform index.
pub const EFFECT_DURATIONS_MS: [u32; 14] = [
    1000, 100, 12, 1000, 300, 130, 150, 500, 100, 5, 12, 1000, 1000, 1000,
];

/// Device capability and calibration queries.
///
/// Implementations must be cheap and infallible; the sequencers call these
/// per effect entry.
pub trait HapticDevice {
    /// Bitmask of supported composite primitives, one bit per
    /// [`CompositePrimitive`] discriminant.
    fn supported_primitive_bits(&self) -> u16;

    /// Whether the device supports the given braking kind.
    fn supports_braking(&self, braking: Braking) -> bool;

    /// Firmware-derived `(min, max)` clamp applied to a primitive's scale
    /// before the calibration lookup. The bounds prevent overcurrent on the
    /// high end and imperceptible output on the low end.
    fn scale_bounds(&self, primitive: CompositePrimitive) -> (f32, f32);

    /// Calibration-table lookup from a clamped intensity in `[0.0, 1.0]` to a
    /// firmware volume level in `0..=100`.
    fn vol_level(&self, intensity: f32, effect_index: u32) -> u32;

    /// Fixed playback duration of a physical waveform, in milliseconds.
    fn effect_duration_ms(&self, effect_index: u32) -> u32;
}

/// Resolve a primitive to its physical waveform index, honoring the device's
/// capability bitmask.
///
/// # Errors
///
/// `UnsupportedPrimitive` when the capability bit is absent and
/// `MalformedSequence` for [`CompositePrimitive::Noop`], which has no
/// physical waveform.
pub fn primitive_details(
    device: &impl HapticDevice,
    primitive: CompositePrimitive,
) -> Result<u32> {
    if primitive.bit() & device.supported_primitive_bits() == 0 {
        return Err(Cs40l26Error::UnsupportedPrimitive(primitive));
    }
    match primitive.physical_index() {
        Some(index) => Ok(index),
        None => Err(Cs40l26Error::MalformedSequence(
            "NOOP primitive has no physical waveform index",
        )),
    }
}

/// Calibration-backed device description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalibratedDevice {
    /// `[min, max]` volume levels for tick-class effects.
    pub tick_effect_vol: [u32; 2],
    /// `[min, max]` volume levels for click-class effects.
    pub click_effect_vol: [u32; 2],
    /// `[min, max]` volume levels for long-vibration-class effects.
    pub long_effect_vol: [u32; 2],
    /// Supported-primitive capability bits.
    pub supported_primitive_bits: u16,
    /// Whether closed-loop active braking is available.
    pub clab_braking: bool,
}

impl Default for CalibratedDevice {
    /// All primitives supported, full volume span, CLAB unavailable.
    fn default() -> Self {
        let mut bits = 0u16;
        for p in CompositePrimitive::ALL {
            bits |= p.bit();
        }
        Self {
            tick_effect_vol: [1, 100],
            click_effect_vol: [1, 100],
            long_effect_vol: [1, 100],
            supported_primitive_bits: bits,
            clab_braking: false,
        }
    }
}

impl HapticDevice for CalibratedDevice {
    fn supported_primitive_bits(&self) -> u16 {
        self.supported_primitive_bits
    }

    fn supports_braking(&self, braking: Braking) -> bool {
        match braking {
            Braking::None => true,
            Braking::Clab => self.clab_braking,
        }
    }

    fn scale_bounds(&self, primitive: CompositePrimitive) -> (f32, f32) {
        // Firmware-derived safety table, per primitive.
        match primitive {
            CompositePrimitive::Noop => (0.0, 1.0),
            CompositePrimitive::Click => (0.01, 0.95),
            CompositePrimitive::Thud => (0.11, 0.75),
            CompositePrimitive::Spin => (0.23, 0.9),
            CompositePrimitive::QuickRise => (0.0, 1.0),
            CompositePrimitive::SlowRise => (0.25, 1.0),
            CompositePrimitive::QuickFall => (0.02, 1.0),
            CompositePrimitive::LightTick => (0.03, 0.75),
            CompositePrimitive::LowTick => (0.16, 0.75),
        }
    }

    fn vol_level(&self, intensity: f32, effect_index: u32) -> u32 {
        let span = match effect_index {
            waveform_index::LIGHT_TICK => self.tick_effect_vol,
            waveform_index::QUICK_RISE | waveform_index::QUICK_FALL => self.long_effect_vol,
            _ => self.click_effect_vol,
        };
        (intensity * (span[1] - span[0]) as f32).round() as u32 + span[0]
    }

    fn effect_duration_ms(&self, effect_index: u32) -> u32 {
        EFFECT_DURATIONS_MS
            .get(effect_index as usize)
            .copied()
            .unwrap_or(0)
    }
}
