use cfg_if::cfg_if;
use core::iter::once;
use smart_leds::{brightness, SmartLedsWrite};
use waveshare_rp2040_zero::hal::{
    gpio::{bank0::Gpio16, FunctionPio0, Pin, PullDown},
    pac::PIO0,
    pio::SM0,
    timer::CountDown,
};
use ws2812_pio::Ws2812;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Ready,
    Typing,
    Error,
}

cfg_if! {
    // RP2040-zero is GRB while most boards are RGB
    if #[cfg(feature = "zero")] {
        fn wire_order([r, g, b]: [u8; 3]) -> [u8; 3] {
            [g, r, b]
        }
    } else {
        fn wire_order(rgb: [u8; 3]) -> [u8; 3] {
            rgb
        }
    }
}

type Neopixel<'a> = Ws2812<PIO0, SM0, CountDown<'a>, Pin<Gpio16, FunctionPio0, PullDown>>;

/// On-board NeoPixel, only rewritten when the status changes.
pub struct StatusLed<'a> {
    neopixel: &'a mut Neopixel<'a>,
    current: Option<StatusColor>,
}

impl StatusLed<'_> {
    pub fn new<'a>(neopixel: &'a mut Neopixel<'a>) -> StatusLed<'a> {
        StatusLed {
            neopixel,
            current: None,
        }
    }

    pub fn show(&mut self, color: StatusColor) {
        if self.current == Some(color) {
            return;
        }
        self.current = Some(color);

        let rgb = match color {
            StatusColor::Ready => [0, 255, 0],
            StatusColor::Typing => [0, 0, 255],
            StatusColor::Error => [255, 0, 0],
        };

        if self
            .neopixel
            .write(brightness(once(wire_order(rgb).into()), 10))
            .is_err()
        {
            defmt::warn!("status led write failed");
        }
    }
}
