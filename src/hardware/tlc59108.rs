use embedded_hal::{delay::DelayNs, digital::OutputPin, i2c::I2c};

pub const CHANNEL_COUNT: u8 = 8;

#[repr(u8)]
#[derive(Clone, Copy)]
enum Register {
    Mode1 = 0x00,
    Pwm0 = 0x02,
    GrpPwm = 0x0a,
    LedOut0 = 0x0c,
    LedOut1 = 0x0d,
}

// Oscillator running, answers the all-call address
const MODE1_NORMAL: u8 = 0x01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputMode {
    /// Each channel uses its own PWM register
    Individual,
    /// Own PWM register scaled by the shared GRPPWM one
    Grouped,
}

impl OutputMode {
    // Two bits per channel, four channels per LEDOUT register
    fn ledout(self) -> u8 {
        match self {
            OutputMode::Individual => 0b1010_1010,
            OutputMode::Grouped => 0b1111_1111,
        }
    }
}

/// TI TLC59108 8 channel I2C LED driver.
///
/// Only holds the address, the bus is handed in on every call so that several chips can share
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tlc59108 {
    address: u8,
}

impl Tlc59108 {
    pub const fn new(address: u8) -> Self {
        Tlc59108 { address }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Pulse the active low reset line shared by the chips.
    pub fn hardware_reset<P: OutputPin, D: DelayNs>(
        reset: &mut P,
        delay: &mut D,
    ) -> Result<(), P::Error> {
        reset.set_low()?;
        delay.delay_us(10);
        reset.set_high()?;
        delay.delay_us(10);
        Ok(())
    }

    pub fn init<I: I2c>(&self, i2c: &mut I) -> Result<(), I::Error> {
        self.write(i2c, Register::Mode1, MODE1_NORMAL)
    }

    pub fn set_brightness<I: I2c>(
        &self,
        i2c: &mut I,
        channel: u8,
        value: u8,
    ) -> Result<(), I::Error> {
        debug_assert!(channel < CHANNEL_COUNT);
        self.write_at(i2c, Register::Pwm0 as u8 + channel, value)
    }

    pub fn set_output_mode<I: I2c>(&self, i2c: &mut I, mode: OutputMode) -> Result<(), I::Error> {
        self.write(i2c, Register::LedOut0, mode.ledout())?;
        self.write(i2c, Register::LedOut1, mode.ledout())
    }

    pub fn set_group_dimming<I: I2c>(&self, i2c: &mut I, value: u8) -> Result<(), I::Error> {
        self.write(i2c, Register::GrpPwm, value)
    }

    fn write<I: I2c>(&self, i2c: &mut I, register: Register, value: u8) -> Result<(), I::Error> {
        self.write_at(i2c, register as u8, value)
    }

    fn write_at<I: I2c>(&self, i2c: &mut I, address: u8, value: u8) -> Result<(), I::Error> {
        i2c.write(self.address, &[address, value])
    }
}

#[cfg(test)]
#[path = "tlc59108_test.rs"]
mod test;
