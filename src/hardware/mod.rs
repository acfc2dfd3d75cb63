pub mod button;
pub mod keyboard;
pub mod leds;
pub mod serial;
pub mod tlc59108;

use crate::software::switch::{RgbColor, SwitchId};

/// The switch LEDs as seen by the command and blink code.
pub trait Indicators {
    fn show(&mut self, switch: SwitchId, color: RgbColor);

    /// `None` switches back to individual brightness, `Some` dims every channel together.
    fn set_dimming(&mut self, level: Option<u8>);
}
