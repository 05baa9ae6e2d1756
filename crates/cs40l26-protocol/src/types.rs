//! Effect primitives, PWLE segment descriptors, and firmware limits.

#![deny(static_mut_refs)]

use crate::chunk::OwtPayload;

/// Maximum number of entries in a composite effect sequence.
///
/// The section-count header field is 8 bits and one section is reserved for
/// a delay before the first effect.
pub const COMPOSE_SIZE_MAX: usize = 254;

/// Maximum delay between composite effects in milliseconds.
pub const COMPOSE_DELAY_MAX_MS: u32 = 10_000;

/// Maximum number of entries in a PWLE composition.
///
/// Hard firmware ceiling; the PWLE header stores the section count nibble-split
/// across two header bytes.
pub const COMPOSE_PWLE_SIZE_MAX: usize = 127;

/// Maximum duration of a single PWLE segment in milliseconds.
pub const COMPOSE_PWLE_PRIMITIVE_DURATION_MAX_MS: u32 = 16_383;

/// Generic PWLE amplitude bounds accepted from callers.
pub const PWLE_LEVEL_MIN: f32 = 0.0;
/// See [`PWLE_LEVEL_MIN`].
pub const PWLE_LEVEL_MAX: f32 = 1.0;

/// Chip-native PWLE amplitude bounds (signed-range chip units / 2048).
pub const CS40L26_PWLE_LEVEL_MIN: f32 = -1.0;
/// Amplitudes above this are silently capped, not rejected.
pub const CS40L26_PWLE_LEVEL_MAX: f32 = 0.999_511_8;

/// PWLE frequency bounds in Hz.
pub const PWLE_FREQUENCY_MIN_HZ: f32 = 1.0;
/// See [`PWLE_FREQUENCY_MIN_HZ`].
pub const PWLE_FREQUENCY_MAX_HZ: f32 = 1000.0;
/// Frequency step the firmware can represent.
pub const PWLE_FREQUENCY_RESOLUTION_HZ: f32 = 1.0;

/// DSP wake-up allowance added to every PWLE composition's predicted duration
/// (I2C transaction + return-from-standby).
pub const MAX_COLD_START_LATENCY_MS: u32 = 6;

/// Physical waveform indices baked into the firmware RAM bank.
pub mod waveform_index {
    /// Long vibration effect.
    pub const LONG_VIBRATION: u32 = 0;
    /// Reserved slot.
    pub const RESERVED_1: u32 = 1;
    /// Click effect.
    pub const CLICK: u32 = 2;
    /// Short vibration effect.
    pub const SHORT_VIBRATION: u32 = 3;
    /// Thud effect.
    pub const THUD: u32 = 4;
    /// Spin effect.
    pub const SPIN: u32 = 5;
    /// Quick rise effect.
    pub const QUICK_RISE: u32 = 6;
    /// Slow rise effect.
    pub const SLOW_RISE: u32 = 7;
    /// Quick fall effect.
    pub const QUICK_FALL: u32 = 8;
    /// Light tick effect.
    pub const LIGHT_TICK: u32 = 9;
    /// Low tick effect.
    pub const LOW_TICK: u32 = 10;
    /// Highest valid physical index (three manufacturer slots follow LOW_TICK).
    pub const MAX_PHYSICAL: u32 = 14;
}

/// Symbolic composite effect primitives.
///
/// Discriminants are the capability bit positions in the device's
/// supported-primitive bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CompositePrimitive {
    /// Bare delay marker; carries no physical waveform.
    Noop = 0,
    /// Click pulse.
    Click = 1,
    /// Thud pulse.
    Thud = 2,
    /// Spin pulse.
    Spin = 3,
    /// Quick rising sweep.
    QuickRise = 4,
    /// Slow rising sweep.
    SlowRise = 5,
    /// Quick falling sweep.
    QuickFall = 6,
    /// Light tick pulse.
    LightTick = 7,
    /// Low-pitch tick pulse.
    LowTick = 8,
}

impl CompositePrimitive {
    /// All primitives, in capability-bit order.
    pub const ALL: [Self; 9] = [
        Self::Noop,
        Self::Click,
        Self::Thud,
        Self::Spin,
        Self::QuickRise,
        Self::SlowRise,
        Self::QuickFall,
        Self::LightTick,
        Self::LowTick,
    ];

    /// Capability bit for this primitive.
    pub const fn bit(self) -> u16 {
        1 << (self as u16)
    }

    /// Physical waveform index for this primitive, `None` for [`Self::Noop`].
    pub const fn physical_index(self) -> Option<u32> {
        match self {
            Self::Noop => None,
            Self::Click => Some(waveform_index::CLICK),
            Self::Thud => Some(waveform_index::THUD),
            Self::Spin => Some(waveform_index::SPIN),
            Self::QuickRise => Some(waveform_index::QUICK_RISE),
            Self::SlowRise => Some(waveform_index::SLOW_RISE),
            Self::QuickFall => Some(waveform_index::QUICK_FALL),
            Self::LightTick => Some(waveform_index::LIGHT_TICK),
            Self::LowTick => Some(waveform_index::LOW_TICK),
        }
    }
}

/// Post-ramp braking behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Braking {
    /// Let the actuator ring down on its own.
    None = 0,
    /// Closed-loop active braking.
    Clab = 1,
}

/// One entry of a composite effect sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeEffect {
    /// Primitive to play; [`CompositePrimitive::Noop`] marks a bare delay.
    pub primitive: CompositePrimitive,
    /// Strength scale in `[0.0, 1.0]`, clamped per-primitive before the
    /// calibration lookup.
    pub scale: f32,
    /// Delay in milliseconds before this entry plays.
    pub delay_ms: u32,
}

/// A continuous amplitude/frequency ramp segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivePwle {
    /// Amplitude at the start of the ramp, `[0.0, 1.0]`.
    pub start_amplitude: f32,
    /// Frequency at the start of the ramp in Hz.
    pub start_frequency_hz: f32,
    /// Amplitude at the end of the ramp, `[0.0, 1.0]`.
    pub end_amplitude: f32,
    /// Frequency at the end of the ramp in Hz.
    pub end_frequency_hz: f32,
    /// Ramp duration in milliseconds.
    pub duration_ms: u32,
}

/// A hold/brake segment arresting actuator motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrakingPwle {
    /// Braking behavior.
    pub braking: Braking,
    /// Braking duration in milliseconds.
    pub duration_ms: u32,
}

/// One entry of a PWLE composition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PwlePrimitive {
    /// Ramp segment.
    Active(ActivePwle),
    /// Braking segment.
    Braking(BrakingPwle),
}

/// A finalized OWT payload plus its predicted playback duration.
///
/// The duration is an aggregate of per-effect fixed durations and delays and
/// is intended for telemetry and logging; playback timing itself is
/// firmware-controlled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedOwt {
    /// The finalized wire payload.
    pub payload: OwtPayload,
    /// Predicted playback duration in milliseconds.
    pub predicted_duration_ms: u32,
}
