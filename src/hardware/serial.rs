use usb_device::bus::UsbBus;
use usbd_serial::SerialPort;

/// The command link to the host.
pub trait ByteStream {
    fn read_byte(&mut self) -> Option<u8>;

    fn write_reply(&mut self, text: &str);
}

impl<B: UsbBus> ByteStream for SerialPort<'_, B> {
    fn read_byte(&mut self) -> Option<u8> {
        let mut byte = [0u8; 1];
        match self.read(&mut byte) {
            Ok(1) => Some(byte[0]),
            _ => None,
        }
    }

    fn write_reply(&mut self, text: &str) {
        let mut bytes = text.as_bytes();
        while !bytes.is_empty() {
            match self.write(bytes) {
                Ok(n) if n > 0 => bytes = &bytes[n..],
                _ => {
                    crate::warn!("serial reply cut, {} bytes left", bytes.len());
                    return;
                }
            }
        }
    }
}
