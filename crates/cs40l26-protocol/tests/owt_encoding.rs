//! End-to-end encoding tests through the public API: symbolic sequences in,
//! exact wire bytes out, plus the uploader seam a caller would drive.

use haptic_cs40l26_protocol::{
    ActivePwle, Braking, BrakingPwle, CalibratedDevice, CompositeEffect, CompositePrimitive,
    OwtPayload, OwtUploader, PwlePrimitive, WT_LEN_CALCD, WaveformKind, compose_effects,
    compose_pwle,
};

#[derive(Default)]
struct RecordingUploader {
    uploads: Vec<(WaveformKind, Vec<u8>)>,
}

impl OwtUploader for RecordingUploader {
    fn upload_owt(&mut self, payload: &OwtPayload) -> Result<u32, Box<dyn std::error::Error>> {
        self.uploads.push((payload.kind(), payload.as_bytes().to_vec()));
        Ok(self.uploads.len() as u32 - 1)
    }

    fn erase_owt(&mut self, _handle: u32) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}

#[test]
fn compose_scenario_encodes_exact_wire_image() {
    let device = CalibratedDevice::default();
    let composed = compose_effects(
        &device,
        &[
            CompositeEffect {
                primitive: CompositePrimitive::Click,
                scale: 0.7,
                delay_ms: 20,
            },
            CompositeEffect {
                primitive: CompositePrimitive::LightTick,
                scale: 1.0,
                delay_ms: 30,
            },
        ],
    )
    .expect("valid composition");

    // Three sections: synthetic 20 ms leading delay, click at vol 70 with the
    // next entry's 30 ms delay, light tick clamped to 0.75 scale (vol 75).
    assert_eq!(
        composed.payload.as_bytes(),
        &[
            0x00, 0x00, 0x03, 0x00, // header, nsections = 3
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x14, // leading 20 ms
            0x00, 0x46, 0x02, 0x00, 0x00, 0x00, 0x00, 0x1E, // click, delay 30
            0x00, 0x4B, 0x09, 0x00, 0x00, 0x00, 0x00, 0x00, // light tick
        ]
    );
    // 20 leading + 12 (click) + 30 + 5 (light tick).
    assert_eq!(composed.predicted_duration_ms, 67);
}

#[test]
fn pwle_scenario_header_reflects_duration_and_sections() {
    let device = CalibratedDevice::default();
    let composed = compose_pwle(
        &device,
        &[
            PwlePrimitive::Active(ActivePwle {
                start_amplitude: 0.2,
                start_frequency_hz: 80.0,
                end_amplitude: 0.8,
                end_frequency_hz: 160.0,
                duration_ms: 250,
            }),
            PwlePrimitive::Braking(BrakingPwle {
                braking: Braking::None,
                duration_ms: 40,
            }),
        ],
    )
    .expect("valid PWLE composition");

    // Snap + chirp ramp + brake initiator + brake.
    assert_eq!(composed.payload.section_count(), 4);
    assert_eq!(composed.predicted_duration_ms, 296); // 250 + 40 + 6 cold start
    assert_eq!(composed.payload.wlength_field(), Some(296 * 8 | WT_LEN_CALCD));
}

#[test]
fn payloads_flow_through_the_uploader_seam() {
    let device = CalibratedDevice::default();
    let compose = compose_effects(
        &device,
        &[CompositeEffect {
            primitive: CompositePrimitive::Thud,
            scale: 0.5,
            delay_ms: 0,
        }],
    )
    .expect("valid composition");
    let pwle = compose_pwle(
        &device,
        &[PwlePrimitive::Active(ActivePwle {
            start_amplitude: 0.0,
            start_frequency_hz: 50.0,
            end_amplitude: 0.5,
            end_frequency_hz: 50.0,
            duration_ms: 100,
        })],
    )
    .expect("valid PWLE composition");

    let mut uploader = RecordingUploader::default();
    let first = uploader.upload_owt(&compose.payload).expect("upload compose");
    let second = uploader.upload_owt(&pwle.payload).expect("upload pwle");

    assert_ne!(first, second);
    assert_eq!(uploader.uploads[0].0, WaveformKind::Compose);
    assert_eq!(uploader.uploads[1].0, WaveformKind::Pwle);
    assert_eq!(uploader.uploads[0].1, compose.payload.as_bytes());
    assert_eq!(uploader.uploads[1].1, pwle.payload.as_bytes());
}
