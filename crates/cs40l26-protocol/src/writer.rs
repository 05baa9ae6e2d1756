//! Upload seam between the encoder and whatever owns the kernel interface.

#![deny(static_mut_refs)]

use crate::chunk::OwtPayload;

/// Abstraction for handing finalized OWT payloads to the driver.
///
/// Implementations must be `Send` but are not required to be `Sync`. The
/// payload bytes are the `custom_data` of a periodic force-feedback effect;
/// how they reach the driver (ioctl, uinput, a test double) is the
/// implementation's business.
pub trait OwtUploader: Send {
    /// Upload one payload, returning the slot handle the driver assigned.
    fn upload_owt(&mut self, payload: &OwtPayload) -> Result<u32, Box<dyn std::error::Error>>;

    /// Release a previously assigned slot.
    fn erase_owt(&mut self, handle: u32) -> Result<(), Box<dyn std::error::Error>>;
}
