use embedded_hal::i2c::I2c;

use crate::options::SWITCH_COUNT;
use crate::software::switch::{RgbColor, SwitchId};

use super::tlc59108::{OutputMode, Tlc59108};
use super::Indicators;

/// Which chip and first channel (red, then green and blue) drive each switch.
///
/// ```text
/// chip 0: 0-2 switch 2   3-5 switch 1   6-7 unused
/// chip 1: 0-2 switch 4   3-5 switch 3   6-7 unused
/// ```
const CHANNEL_WINDOWS: [(usize, u8); SWITCH_COUNT] = [(0, 3), (0, 0), (1, 3), (1, 0)];

/// The two TLC59108 chips on one I2C bus.
pub struct LedBank<I2C> {
    i2c: I2C,
    chips: [Tlc59108; 2],
}

impl<I2C: I2c> LedBank<I2C> {
    pub fn new(i2c: I2C, chips: [Tlc59108; 2]) -> Self {
        LedBank { i2c, chips }
    }

    /// Wake both chips up in individual brightness mode.
    pub fn init(&mut self) -> Result<(), I2C::Error> {
        for chip in self.chips.iter() {
            chip.init(&mut self.i2c)?;
            chip.set_output_mode(&mut self.i2c, OutputMode::Individual)?;
        }
        Ok(())
    }

    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> Indicators for LedBank<I2C> {
    fn show(&mut self, switch: SwitchId, color: RgbColor) {
        let (chip, base) = CHANNEL_WINDOWS[switch.index()];
        let chip = self.chips[chip];

        for (offset, value) in [color.r, color.g, color.b].into_iter().enumerate() {
            if chip
                .set_brightness(&mut self.i2c, base + offset as u8, value)
                .is_err()
            {
                crate::warn!("led write failed on chip {}", chip.address());
            }
        }
    }

    fn set_dimming(&mut self, level: Option<u8>) {
        for chip in self.chips.iter() {
            let written = match level {
                Some(pwm) => chip
                    .set_output_mode(&mut self.i2c, OutputMode::Grouped)
                    .and_then(|()| chip.set_group_dimming(&mut self.i2c, pwm)),
                None => chip.set_output_mode(&mut self.i2c, OutputMode::Individual),
            };
            if written.is_err() {
                crate::warn!("dimming update failed on chip {}", chip.address());
            }
        }
    }
}

#[cfg(test)]
#[path = "leds_test.rs"]
mod test;
