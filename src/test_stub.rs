extern crate std;

use std::{collections::VecDeque, string::String, vec::Vec};

use usbd_human_interface_device::page::Keyboard;

use crate::hardware::{
    keyboard::{EmitError, KeyEmitter},
    serial::ByteStream,
    Indicators,
};
use crate::software::switch::{RgbColor, SwitchId};

/// Keeps every LED write so tests can check what the switches look like.
#[derive(Default)]
pub struct RecordingLeds {
    pub writes: Vec<(u8, RgbColor)>,
    pub dimming: Vec<Option<u8>>,
}

impl RecordingLeds {
    pub fn shown(&self, switch: u8) -> Option<RgbColor> {
        self.writes
            .iter()
            .rev()
            .find(|(n, _)| *n == switch)
            .map(|(_, c)| *c)
    }

    pub fn clear(&mut self) {
        self.writes.clear();
        self.dimming.clear();
    }
}

impl Indicators for RecordingLeds {
    fn show(&mut self, switch: SwitchId, color: RgbColor) {
        self.writes.push((switch.number(), color));
    }

    fn set_dimming(&mut self, level: Option<u8>) {
        self.dimming.push(level);
    }
}

#[derive(Default)]
pub struct FakeSerial {
    pub input: VecDeque<u8>,
    pub output: String,
}

impl FakeSerial {
    pub fn send(&mut self, text: &str) {
        self.input.extend(text.bytes());
    }

    pub fn take_output(&mut self) -> String {
        core::mem::take(&mut self.output)
    }
}

impl ByteStream for FakeSerial {
    fn read_byte(&mut self) -> Option<u8> {
        self.input.pop_front()
    }

    fn write_reply(&mut self, text: &str) {
        self.output.push_str(text);
    }
}

#[derive(Default)]
pub struct FakeKeyboard {
    pub reports: Vec<Vec<Keyboard>>,
    pub busy: usize,
}

impl KeyEmitter for FakeKeyboard {
    fn write_keys(&mut self, keys: &[Keyboard]) -> Result<(), EmitError> {
        if self.busy > 0 {
            self.busy -= 1;
            return Err(EmitError::WouldBlock);
        }
        self.reports.push(keys.to_vec());
        Ok(())
    }
}

/// Records every I2C write as `(address, bytes)`.
#[derive(Default)]
pub struct FakeI2c {
    pub writes: Vec<(u8, Vec<u8>)>,
    pub fail: bool,
}

#[derive(Debug)]
pub struct FakeI2cError;

impl embedded_hal::i2c::Error for FakeI2cError {
    fn kind(&self) -> embedded_hal::i2c::ErrorKind {
        embedded_hal::i2c::ErrorKind::Other
    }
}

impl embedded_hal::i2c::ErrorType for FakeI2c {
    type Error = FakeI2cError;
}

impl embedded_hal::i2c::I2c for FakeI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [embedded_hal::i2c::Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.fail {
            return Err(FakeI2cError);
        }
        for op in operations {
            if let embedded_hal::i2c::Operation::Write(bytes) = op {
                self.writes.push((address, bytes.to_vec()));
            }
        }
        Ok(())
    }
}

/// Input level driven by the test.
#[derive(Default)]
pub struct FakePin {
    pub high: bool,
}

impl embedded_hal::digital::ErrorType for FakePin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::InputPin for FakePin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high)
    }
}

impl embedded_hal::digital::OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        Ok(())
    }
}

pub struct NoDelay;

impl embedded_hal::delay::DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}
