use super::switch::RgbColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkMode {
    Disabled,
    On,
    Off,
    Single,
}

/// What a switch has to light after a blink step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Show(RgbColor),
    /// Back to the switch's own color
    Restore,
}

/// Non-blocking blink state for one switch.
///
/// Times are wrapping millisecond ticks. A periodic blink is lit during `[0, on_time)` of each
/// `on_time + off_time` period counted from the anchor; a single shot is lit during the first
/// `on_time` and then disables itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blink {
    mode: BlinkMode,
    color: RgbColor,
    on_time: u32,
    off_time: u32,
    anchor: u32,
}

impl Blink {
    pub const fn disabled() -> Self {
        Blink {
            mode: BlinkMode::Disabled,
            color: RgbColor::BLACK,
            on_time: 0,
            off_time: 0,
            anchor: 0,
        }
    }

    pub fn single(color: RgbColor, on_time: u32, off_time: u32, now: u32) -> Self {
        Blink {
            mode: BlinkMode::Single,
            color,
            on_time,
            off_time,
            anchor: now,
        }
    }

    /// Starts dark so the first tick lights it up.
    pub fn periodic(color: RgbColor, on_time: u32, off_time: u32, now: u32) -> Self {
        Blink {
            mode: BlinkMode::Off,
            color,
            on_time,
            off_time,
            anchor: now,
        }
    }

    pub fn mode(&self) -> BlinkMode {
        self.mode
    }

    pub fn color(&self) -> RgbColor {
        self.color
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.mode != BlinkMode::Disabled
    }

    pub(crate) fn initial_paint(&self) -> Option<Paint> {
        match self.mode {
            BlinkMode::Disabled => Some(Paint::Restore),
            BlinkMode::Single => Some(Paint::Show(self.color)),
            BlinkMode::On | BlinkMode::Off => None,
        }
    }

    pub fn tick(&mut self, now: u32) -> Option<Paint> {
        let elapsed = now.wrapping_sub(self.anchor);

        match self.mode {
            BlinkMode::Disabled => None,

            BlinkMode::Single => {
                if elapsed < self.on_time {
                    return None;
                }
                self.mode = BlinkMode::Disabled;
                self.anchor = now;
                Some(Paint::Restore)
            }

            BlinkMode::On | BlinkMode::Off => {
                let period = self.on_time.saturating_add(self.off_time);
                if period == 0 {
                    return None;
                }

                let lit = elapsed % period < self.on_time;
                match (self.mode, lit) {
                    (BlinkMode::On, false) => {
                        self.mode = BlinkMode::Off;
                        Some(Paint::Restore)
                    }
                    (BlinkMode::Off, true) => {
                        self.mode = BlinkMode::On;
                        Some(Paint::Show(self.color))
                    }
                    _ => None,
                }
            }
        }
    }
}

impl Default for Blink {
    fn default() -> Self {
        Self::disabled()
    }
}

#[cfg(test)]
#[path = "blink_test.rs"]
mod test;
