use embedded_hal::digital::InputPin;

use crate::software::buttons::{Debouncer, Edge};

/// Active high button, wired with an external pull-down.
///
/// A new level has to hold for `delay` milliseconds before it is reported.
pub struct PinDebouncer<P> {
    pin: P,
    delay: u32,
    pressed: bool,
    candidate: bool,
    since: u32,
}

impl<P: InputPin> PinDebouncer<P> {
    pub fn new(pin: P, delay: u32) -> Self {
        PinDebouncer {
            pin,
            delay,
            pressed: false,
            candidate: false,
            since: 0,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

impl<P: InputPin> Debouncer for PinDebouncer<P> {
    fn poll(&mut self, now: u32) -> Option<Edge> {
        let level = self.pin.is_high().unwrap_or(self.candidate);

        if level != self.candidate {
            self.candidate = level;
            self.since = now;
            return None;
        }

        if level == self.pressed || now.wrapping_sub(self.since) < self.delay {
            return None;
        }

        self.pressed = level;
        Some(if level { Edge::Pressed } else { Edge::Released })
    }
}

#[cfg(test)]
#[path = "button_test.rs"]
mod test;
