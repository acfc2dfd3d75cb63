use usb_device::bus::UsbBus;
use usbd_human_interface_device::{
    device::keyboard::NKROBootKeyboard, page::Keyboard, UsbHidError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EmitError {
    /// The host has not read the previous report yet, try again later
    WouldBlock,
    Failed,
}

/// Sends a full keyboard report, every key in `keys` down and the rest up.
pub trait KeyEmitter {
    fn write_keys(&mut self, keys: &[Keyboard]) -> Result<(), EmitError>;
}

impl<B: UsbBus> KeyEmitter for NKROBootKeyboard<'_, B> {
    fn write_keys(&mut self, keys: &[Keyboard]) -> Result<(), EmitError> {
        match self.write_report(keys.iter().copied()) {
            Ok(()) | Err(UsbHidError::Duplicate) => Ok(()),
            Err(UsbHidError::WouldBlock) => Err(EmitError::WouldBlock),
            Err(_) => Err(EmitError::Failed),
        }
    }
}
