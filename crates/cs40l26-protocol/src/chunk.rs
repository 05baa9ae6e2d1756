//! Bit-packed OWT chunk builders for the CS40L26 DSP wire format.
//!
//! An OWT (on-the-fly waveform) payload is a fixed-format header followed by
//! tightly bit-packed segments. Field widths (8, 12, 16, 24 bits) do not align
//! to byte boundaries, so writes go through a 24-bit accumulator: 24 is the
//! smallest flush unit the chip protocol assumes. Every full accumulator is
//! stored as a big-endian `u32` whose top byte is zero, which is why one
//! 48-bit segment occupies 8 payload bytes and each header occupies 4.
//!
//! ## Compose header (one group)
//!
//! | Bits | Field |
//! |------|-------|
//! | 8 | padding |
//! | 8 | section count (patched by [`ComposeChunk::finalize`]) |
//! | 8 | repeat |
//!
//! ## PWLE header
//!
//! | Bits | Field |
//! |------|-------|
//! | 24 | waveform length (patched by [`PwleChunk::finalize`]) |
//! | 8 | repeat |
//! | 12 | wait time between repeats |
//! | 8 | section count, nibble-split across bytes 7 and 9 when patched |
//!
//! Chunks follow an explicit two-phase protocol: push segments, then
//! `finalize` exactly once to flush the accumulator and patch the reserved
//! header fields. A finalized [`OwtPayload`] is immutable.

#![deny(static_mut_refs)]

use crate::error::{Cs40l26Error, Result};
use crate::types::{
    Braking, CS40L26_PWLE_LEVEL_MAX, CS40L26_PWLE_LEVEL_MIN, COMPOSE_PWLE_PRIMITIVE_DURATION_MAX_MS,
    COMPOSE_PWLE_SIZE_MAX, COMPOSE_SIZE_MAX, PWLE_FREQUENCY_MAX_HZ, PWLE_FREQUENCY_MIN_HZ,
    waveform_index,
};

/// Compose payload capacity: `(COMPOSE_SIZE_MAX + 1) * 8 + 4` bytes.
pub const FF_CUSTOM_DATA_LEN_MAX_COMP: usize = 2044;
/// PWLE payload capacity in bytes.
pub const FF_CUSTOM_DATA_LEN_MAX_PWLE: usize = 2302;

/// Marker bit in the PWLE waveform-length field for a host-calculated length.
pub const WT_LEN_CALCD: u32 = 0x0080_0000;
/// Maximum total duration representable by the 19-bit wlength field, in ms.
pub const WT_DURATION_MAX_MS: u32 = 0x7_FFFF;

/// PWLE segment flag: frequency changes over the segment.
pub const PWLE_CHIRP_BIT: u8 = 0x8;
/// PWLE segment flag: CLAB braking segment.
pub const PWLE_BRAKE_BIT: u8 = 0x4;
/// PWLE segment flag: back-EMF amplitude regulation; a 24-bit target follows.
pub const PWLE_AMP_REG_BIT: u8 = 0x2;

const GROUP_BITS: u8 = 24;
const GROUP_BYTES: usize = 4;

const COMPOSE_HEADER_BYTES: usize = 4;
const COMPOSE_NSECTIONS_OFFSET: usize = 2;
const PWLE_NSECTIONS_HI_OFFSET: usize = 7;
const PWLE_NSECTIONS_LO_OFFSET: usize = 9;

/// The two OWT payload kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveformKind {
    /// Discrete, named-index, volume-scaled pulses with inter-pulse delays.
    Compose,
    /// Continuous amplitude/frequency envelope segments.
    Pwle,
}

/// A finalized, immutable OWT wire payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwtPayload {
    kind: WaveformKind,
    bytes: Vec<u8>,
}

impl OwtPayload {
    /// Payload kind.
    pub fn kind(&self) -> WaveformKind {
        self.kind
    }

    /// Raw wire bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the payload, yielding the wire bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when the payload holds no bytes (never the case for a finalized chunk).
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Decode the patched section count from the header.
    pub fn section_count(&self) -> u8 {
        match self.kind {
            WaveformKind::Compose => self
                .bytes
                .get(COMPOSE_NSECTIONS_OFFSET)
                .copied()
                .unwrap_or(0),
            WaveformKind::Pwle => {
                let hi = self.bytes.get(PWLE_NSECTIONS_HI_OFFSET).map_or(0, |b| b & 0x0F);
                let lo = self
                    .bytes
                    .get(PWLE_NSECTIONS_LO_OFFSET)
                    .map_or(0, |b| (b & 0xF0) >> 4);
                (hi << 4) | lo
            }
        }
    }

    /// Decode the patched 24-bit waveform-length field; `None` for compose payloads.
    pub fn wlength_field(&self) -> Option<u32> {
        match self.kind {
            WaveformKind::Compose => None,
            WaveformKind::Pwle => match self.bytes.first_chunk::<4>() {
                Some(word) => Some(u32::from_be_bytes(*word)),
                None => None,
            },
        }
    }
}

const fn low_bits(nbits: u8) -> u32 {
    if nbits >= 32 {
        u32::MAX
    } else {
        (1u32 << nbits) - 1
    }
}

/// MSB-first bit accumulator over an owned, fixed-capacity byte buffer.
#[derive(Debug, Clone)]
struct BitPacker {
    buf: Vec<u8>,
    capacity: usize,
    cache: u32,
    cache_bits: u8,
}

impl BitPacker {
    fn new(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            capacity,
            cache: 0,
            cache_bits: 0,
        }
    }

    /// Append the low `nbits` of `value`, MSB first.
    ///
    /// The accumulator is emitted as a 4-byte group whenever it fills to
    /// exactly 24 bits; a full buffer fails with `CapacityExceeded`.
    fn write(&mut self, nbits: u8, value: u32) -> Result<()> {
        debug_assert!(nbits <= GROUP_BITS, "field wider than one flush group");
        let mut nbits = nbits;
        let mut value = value & low_bits(nbits);
        loop {
            let take = (GROUP_BITS - self.cache_bits).min(nbits);
            self.cache <<= take;
            self.cache |= value >> (nbits - take);
            self.cache_bits += take;
            nbits -= take;

            if self.cache_bits == GROUP_BITS {
                if self.buf.len() + GROUP_BYTES > self.capacity {
                    return Err(Cs40l26Error::CapacityExceeded {
                        capacity: self.capacity,
                    });
                }
                let group = self.cache & 0x00FF_FFFF;
                self.buf.extend_from_slice(&group.to_be_bytes());
                self.cache = 0;
                self.cache_bits = 0;
            }

            if nbits == 0 {
                return Ok(());
            }
            value &= low_bits(nbits);
        }
    }

    /// Zero-pad the accumulator to the group boundary and emit it.
    ///
    /// No-op when the accumulator is empty.
    fn flush(&mut self) -> Result<()> {
        if self.cache_bits == 0 {
            return Ok(());
        }
        let pad = GROUP_BITS - self.cache_bits;
        self.write(pad, 0)
    }

    /// Overwrite the masked bits of an already-flushed byte.
    fn patch(&mut self, offset: usize, mask: u8, value: u8) -> Result<()> {
        match self.buf.get_mut(offset) {
            Some(byte) => {
                *byte = (*byte & !mask) | (value & mask);
                Ok(())
            }
            None => Err(Cs40l26Error::MalformedSequence(
                "header bytes not flushed before finalize",
            )),
        }
    }

    fn len(&self) -> usize {
        self.buf.len()
    }

    fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Builder for a compose-kind OWT payload.
#[derive(Debug, Clone)]
pub struct ComposeChunk {
    packer: BitPacker,
}

impl ComposeChunk {
    /// Create a chunk with the compose header placeholders written.
    pub fn new() -> Result<Self> {
        let mut packer = BitPacker::new(FF_CUSTOM_DATA_LEN_MAX_COMP);
        packer.write(8, 0)?; // padding
        packer.write(8, 0)?; // nsections placeholder
        packer.write(8, 0)?; // repeat
        Ok(Self { packer })
    }

    /// Append one 48-bit compose segment.
    ///
    /// # Errors
    ///
    /// `ValueOutOfRange` when `vol_level` exceeds 100 or `effect_index`
    /// exceeds the maximum physical waveform index.
    pub fn push_segment(
        &mut self,
        vol_level: u32,
        effect_index: u32,
        repeat: u8,
        flags: u8,
        next_delay_ms: u16,
    ) -> Result<()> {
        if vol_level > 100 {
            return Err(Cs40l26Error::ValueOutOfRange {
                field: "volume level",
                value: vol_level as f32,
                min: 0.0,
                max: 100.0,
            });
        }
        if effect_index > waveform_index::MAX_PHYSICAL {
            return Err(Cs40l26Error::ValueOutOfRange {
                field: "effect index",
                value: effect_index as f32,
                min: 0.0,
                max: waveform_index::MAX_PHYSICAL as f32,
            });
        }
        self.packer.write(8, vol_level)?; // amplitude
        self.packer.write(8, effect_index)?; // index
        self.packer.write(8, u32::from(repeat))?; // repeat
        self.packer.write(8, u32::from(flags))?; // flags
        self.packer.write(16, u32::from(next_delay_ms))?; // delay
        Ok(())
    }

    /// Number of payload bytes flushed so far.
    pub fn byte_len(&self) -> usize {
        self.packer.len()
    }

    /// Flush and patch the section count into the header.
    ///
    /// # Errors
    ///
    /// `MalformedSequence` when the count exceeds the header limit
    /// (`COMPOSE_SIZE_MAX + 1`, the extra section being a leading delay)
    /// or when no segment beyond the header was written.
    pub fn finalize(mut self, section_count: usize) -> Result<OwtPayload> {
        self.packer.flush()?;
        if section_count > COMPOSE_SIZE_MAX + 1 {
            return Err(Cs40l26Error::MalformedSequence(
                "section count exceeds the compose header limit",
            ));
        }
        if self.packer.len() == COMPOSE_HEADER_BYTES {
            return Err(Cs40l26Error::MalformedSequence(
                "composition contains no segments",
            ));
        }
        self.packer
            .patch(COMPOSE_NSECTIONS_OFFSET, 0xFF, section_count as u8)?;
        Ok(OwtPayload {
            kind: WaveformKind::Compose,
            bytes: self.packer.into_bytes(),
        })
    }
}

/// Builder for a PWLE-kind OWT payload.
#[derive(Debug, Clone)]
pub struct PwleChunk {
    packer: BitPacker,
}

impl PwleChunk {
    /// Create a chunk with the PWLE header placeholders written.
    pub fn new() -> Result<Self> {
        let mut packer = BitPacker::new(FF_CUSTOM_DATA_LEN_MAX_PWLE);
        packer.write(24, 0)?; // waveform length placeholder
        packer.write(8, 0)?; // repeat
        packer.write(12, 0)?; // wait time between repeats
        packer.write(8, 0)?; // nsections placeholder
        Ok(Self { packer })
    }

    /// Append one active (ramp) segment.
    ///
    /// Values are converted to their fixed-point encodings by
    /// round-to-nearest scaling; out-of-range inputs are rejected, not
    /// clamped.
    pub fn push_active(
        &mut self,
        duration_ms: u32,
        amplitude: f32,
        frequency_hz: f32,
        chirp: bool,
    ) -> Result<()> {
        let delay = duration_to_field(duration_ms)?;
        let amp = scaled_chip_units(
            amplitude,
            2048.0,
            CS40L26_PWLE_LEVEL_MIN,
            CS40L26_PWLE_LEVEL_MAX,
            "amplitude",
        )?;
        let freq = scaled_chip_units(
            frequency_hz,
            4.0,
            PWLE_FREQUENCY_MIN_HZ,
            PWLE_FREQUENCY_MAX_HZ,
            "frequency",
        )?;
        let flags = if chirp { PWLE_CHIRP_BIT } else { 0 };
        self.push_pwle_segment(delay, amp, freq, flags, 0)
    }

    /// Append one braking segment.
    ///
    /// The frequency field carries the encoded minimum frequency and the
    /// amplitude field is zero; the brake flag is set unless the braking
    /// kind is [`Braking::None`].
    pub fn push_braking(&mut self, duration_ms: u32, braking: Braking) -> Result<()> {
        let delay = duration_to_field(duration_ms)?;
        let freq = scaled_chip_units(
            PWLE_FREQUENCY_MIN_HZ,
            4.0,
            PWLE_FREQUENCY_MIN_HZ,
            PWLE_FREQUENCY_MAX_HZ,
            "frequency",
        )?;
        let flags = match braking {
            Braking::None => 0,
            Braking::Clab => PWLE_BRAKE_BIT,
        };
        self.push_pwle_segment(delay, 0, freq, flags, 0)
    }

    fn push_pwle_segment(
        &mut self,
        delay: u16,
        amplitude: u16,
        frequency: u16,
        flags: u8,
        vbemf_target: u32,
    ) -> Result<()> {
        self.packer.write(16, u32::from(delay))?;
        self.packer.write(12, u32::from(amplitude))?;
        self.packer.write(12, u32::from(frequency))?;
        // Feature flags controlling chirp, CLAB braking, and back-EMF
        // amplitude regulation; the firmware reads them from the high nibble.
        self.packer.write(8, u32::from((flags | 1) << 4))?;
        if flags & PWLE_AMP_REG_BIT != 0 {
            self.packer.write(24, vbemf_target)?; // target back-EMF voltage
        }
        Ok(())
    }

    /// Number of payload bytes flushed so far.
    pub fn byte_len(&self) -> usize {
        self.packer.len()
    }

    /// Flush and patch the waveform length and section count into the header.
    ///
    /// The length field is `total_duration_ms` in 0.125 ms units (wlength
    /// plays back at 8 kHz) with [`WT_LEN_CALCD`] set. The section count is
    /// nibble-split across two non-contiguous header bytes.
    pub fn finalize(mut self, total_duration_ms: u32, section_count: usize) -> Result<OwtPayload> {
        self.packer.flush()?;
        if total_duration_ms > WT_DURATION_MAX_MS {
            return Err(Cs40l26Error::MalformedSequence(
                "total duration exceeds the 19-bit wlength field",
            ));
        }
        let wlength = total_duration_ms * 8 | WT_LEN_CALCD;
        let word = wlength.to_be_bytes();
        for (offset, byte) in word.iter().enumerate() {
            self.packer.patch(offset, 0xFF, *byte)?;
        }

        if section_count > COMPOSE_PWLE_SIZE_MAX {
            return Err(Cs40l26Error::MalformedSequence(
                "section count exceeds the PWLE header limit",
            ));
        }
        let count = section_count as u8;
        self.packer
            .patch(PWLE_NSECTIONS_HI_OFFSET, 0x0F, (count & 0xF0) >> 4)?;
        self.packer
            .patch(PWLE_NSECTIONS_LO_OFFSET, 0xF0, (count & 0x0F) << 4)?;
        Ok(OwtPayload {
            kind: WaveformKind::Pwle,
            bytes: self.packer.into_bytes(),
        })
    }
}

fn duration_to_field(duration_ms: u32) -> Result<u16> {
    if duration_ms > COMPOSE_PWLE_PRIMITIVE_DURATION_MAX_MS {
        return Err(Cs40l26Error::ValueOutOfRange {
            field: "duration",
            value: duration_ms as f32,
            min: 0.0,
            max: COMPOSE_PWLE_PRIMITIVE_DURATION_MAX_MS as f32,
        });
    }
    Ok((duration_ms * 4) as u16) // unit: 0.25 ms
}

fn scaled_chip_units(
    value: f32,
    scale: f32,
    min: f32,
    max: f32,
    field: &'static str,
) -> Result<u16> {
    if !(min..=max).contains(&value) {
        return Err(Cs40l26Error::ValueOutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    // Negative chip units wrap into the 12-bit field, matching the DSP's
    // two's-complement reading.
    let raw = (value * scale).round() as i32;
    Ok((raw & 0xFFFF) as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_header_is_one_group() {
        let ch = ComposeChunk::new().expect("header fits");
        assert_eq!(ch.byte_len(), COMPOSE_HEADER_BYTES);
    }

    #[test]
    fn test_compose_segment_is_two_groups() {
        let mut ch = ComposeChunk::new().expect("header fits");
        ch.push_segment(70, waveform_index::CLICK, 0, 0, 0)
            .expect("segment fits");
        assert_eq!(ch.byte_len(), COMPOSE_HEADER_BYTES + 8);
    }

    #[test]
    fn test_compose_segment_byte_layout() {
        let mut ch = ComposeChunk::new().expect("header fits");
        ch.push_segment(70, waveform_index::CLICK, 0, 0, 0)
            .expect("segment fits");
        let payload = ch.finalize(1).expect("finalize");
        assert_eq!(
            payload.as_bytes(),
            &[
                0x00, 0x00, 0x01, 0x00, // header: pad, padding, nsections, repeat
                0x00, 0x46, 0x02, 0x00, // vol=70, index=2, repeat=0
                0x00, 0x00, 0x00, 0x00, // flags=0, delay=0
            ]
        );
        assert_eq!(payload.section_count(), 1);
    }

    #[test]
    fn test_compose_rejects_vol_level_above_100() {
        let mut ch = ComposeChunk::new().expect("header fits");
        let err = ch.push_segment(101, 2, 0, 0, 0);
        assert!(matches!(
            err,
            Err(Cs40l26Error::ValueOutOfRange { field: "volume level", .. })
        ));
    }

    #[test]
    fn test_compose_rejects_effect_index_above_physical_max() {
        let mut ch = ComposeChunk::new().expect("header fits");
        let err = ch.push_segment(50, waveform_index::MAX_PHYSICAL + 1, 0, 0, 0);
        assert!(matches!(
            err,
            Err(Cs40l26Error::ValueOutOfRange { field: "effect index", .. })
        ));
    }

    #[test]
    fn test_compose_finalize_without_segments_is_malformed() {
        let ch = ComposeChunk::new().expect("header fits");
        assert_eq!(
            ch.finalize(0),
            Err(Cs40l26Error::MalformedSequence(
                "composition contains no segments"
            ))
        );
    }

    #[test]
    fn test_compose_capacity_holds_exactly_max_sections() {
        // 255 sections (254 effects + leading delay) fill the buffer exactly.
        let mut ch = ComposeChunk::new().expect("header fits");
        for _ in 0..COMPOSE_SIZE_MAX + 1 {
            ch.push_segment(100, waveform_index::CLICK, 0, 0, 10)
                .expect("segment fits");
        }
        assert_eq!(ch.byte_len(), FF_CUSTOM_DATA_LEN_MAX_COMP);
        let overflow = ch.push_segment(100, waveform_index::CLICK, 0, 0, 10);
        assert_eq!(
            overflow,
            Err(Cs40l26Error::CapacityExceeded {
                capacity: FF_CUSTOM_DATA_LEN_MAX_COMP
            })
        );
    }

    #[test]
    fn test_pwle_header_layout_and_patches() {
        let mut ch = PwleChunk::new().expect("header fits");
        ch.push_active(100, 0.5, 50.0, false).expect("segment fits");
        let payload = ch.finalize(106, 0x5A).expect("finalize");
        let bytes = payload.as_bytes();

        // wlength: 106 ms * 8 | WT_LEN_CALCD, big-endian at bytes 0..4.
        let wlength = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        assert_eq!(wlength, 106 * 8 | WT_LEN_CALCD);
        assert_eq!(payload.wlength_field(), Some(wlength));

        // Section count 0x5A nibble-split: high nibble in byte 7, low in byte 9.
        assert_eq!(bytes[7] & 0x0F, 0x5);
        assert_eq!(bytes[9] & 0xF0, 0xA0);
        assert_eq!(payload.section_count(), 0x5A);
    }

    #[test]
    fn test_pwle_segment_fixed_point_scaling() {
        let mut ch = PwleChunk::new().expect("header fits");
        // 100 ms -> 400; amp 0.5 -> 1024; freq 50 Hz -> 200; flags -> 0x10.
        ch.push_active(100, 0.5, 50.0, false).expect("segment fits");
        let payload = ch.finalize(0, 1).expect("finalize");
        let bytes = payload.as_bytes();
        // Stream after the 4-bit nsections-low placeholder:
        // delay[15:12] in byte 9, delay[11:4] in byte 10, delay[3:0]+amp[11:8]
        // in byte 11, amp[7:0] in byte 13.
        assert_eq!(bytes[9] & 0x0F, 0x0); // delay 400 = 0x0190
        assert_eq!(bytes[10], 0x19);
        assert_eq!(bytes[11], 0x04); // delay low nibble 0, amp 1024 = 0x400
        assert_eq!(bytes[13], 0x00);
    }

    #[test]
    fn test_pwle_rejects_amplitude_above_chip_max() {
        let mut ch = PwleChunk::new().expect("header fits");
        let err = ch.push_active(100, 0.9999, 50.0, false);
        assert!(matches!(
            err,
            Err(Cs40l26Error::ValueOutOfRange { field: "amplitude", .. })
        ));
    }

    #[test]
    fn test_pwle_rejects_frequency_out_of_bounds() {
        let mut ch = PwleChunk::new().expect("header fits");
        assert!(ch.push_active(100, 0.5, 0.5, false).is_err());
        assert!(ch.push_active(100, 0.5, 1000.5, false).is_err());
    }

    #[test]
    fn test_pwle_rejects_duration_above_max() {
        let mut ch = PwleChunk::new().expect("header fits");
        let err = ch.push_active(COMPOSE_PWLE_PRIMITIVE_DURATION_MAX_MS + 1, 0.5, 50.0, false);
        assert!(matches!(
            err,
            Err(Cs40l26Error::ValueOutOfRange { field: "duration", .. })
        ));
    }

    #[test]
    fn test_pwle_finalize_rejects_duration_over_wlength_field() {
        let mut ch = PwleChunk::new().expect("header fits");
        ch.push_active(100, 0.5, 50.0, false).expect("segment fits");
        assert_eq!(
            ch.finalize(WT_DURATION_MAX_MS + 1, 1),
            Err(Cs40l26Error::MalformedSequence(
                "total duration exceeds the 19-bit wlength field"
            ))
        );
    }

    #[test]
    fn test_pwle_finalize_rejects_section_count_over_limit() {
        let mut ch = PwleChunk::new().expect("header fits");
        ch.push_active(100, 0.5, 50.0, false).expect("segment fits");
        assert_eq!(
            ch.finalize(100, COMPOSE_PWLE_SIZE_MAX + 1),
            Err(Cs40l26Error::MalformedSequence(
                "section count exceeds the PWLE header limit"
            ))
        );
    }

    #[test]
    fn test_braking_segment_sets_brake_flag_only_for_clab() {
        let mut none = PwleChunk::new().expect("header fits");
        none.push_braking(0, Braking::None).expect("segment fits");
        let none = none.finalize(0, 1).expect("finalize");

        let mut clab = PwleChunk::new().expect("header fits");
        clab.push_braking(0, Braking::Clab).expect("segment fits");
        let clab = clab.finalize(0, 1).expect("finalize");

        // The flag byte straddles a group boundary: its high nibble is the low
        // nibble of byte 15, its low nibble the high nibble of byte 17.
        // Wire value is (flags | 1) << 4: 0x10 for None, 0x50 for Clab.
        let none_flags = ((none.as_bytes()[15] & 0x0F) << 4) | (none.as_bytes()[17] >> 4);
        let clab_flags = ((clab.as_bytes()[15] & 0x0F) << 4) | (clab.as_bytes()[17] >> 4);
        assert_eq!(none_flags, 0x10);
        assert_eq!(clab_flags, 0x50);
    }

    #[test]
    fn test_amplitude_at_chip_max_encodes_full_scale() {
        let mut ch = PwleChunk::new().expect("header fits");
        ch.push_active(0, CS40L26_PWLE_LEVEL_MAX, 50.0, false)
            .expect("segment fits");
        let payload = ch.finalize(0, 1).expect("finalize");
        let bytes = payload.as_bytes();
        // amp = round(0.9995118 * 2048) = 2047 = 0x7FF. The amplitude field
        // crosses a group boundary: amp[11:8] in byte 11, the group pad byte
        // at 12, amp[7:0] in byte 13.
        let amp = u16::from(bytes[11] & 0x0F) << 8 | u16::from(bytes[13]);
        assert_eq!(bytes[12], 0x00);
        assert_eq!(amp, 0x7FF);
    }
}
