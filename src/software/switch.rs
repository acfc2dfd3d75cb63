use crate::hardware::Indicators;
use crate::options::SWITCH_COUNT;

use super::blink::{Blink, Paint};

/// One of the four button + LED units, numbered 1 to 4 like on the case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchId(u8);

impl SwitchId {
    pub const ALL: [SwitchId; SWITCH_COUNT] = [SwitchId(1), SwitchId(2), SwitchId(3), SwitchId(4)];

    pub fn new(number: u8) -> Option<Self> {
        (1..=SWITCH_COUNT as u8)
            .contains(&number)
            .then_some(SwitchId(number))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const BLACK: RgbColor = RgbColor::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        RgbColor { r, g, b }
    }
}

pub struct Switch {
    id: SwitchId,
    color: RgbColor,
    blink: Blink,
}

impl Switch {
    fn new(id: SwitchId) -> Self {
        Switch {
            id,
            color: RgbColor::BLACK,
            blink: Blink::disabled(),
        }
    }

    pub fn id(&self) -> SwitchId {
        self.id
    }

    /// The last color set with COL, shown again whenever a blink goes dark or ends.
    pub fn color(&self) -> RgbColor {
        self.color
    }

    pub fn blink(&self) -> &Blink {
        &self.blink
    }

    pub fn set_color<L: Indicators>(&mut self, color: RgbColor, leds: &mut L) {
        leds.show(self.id, color);
        self.color = color;
    }

    /// Replace the whole blink state and apply its initial paint right away.
    pub fn set_blink<L: Indicators>(&mut self, blink: Blink, leds: &mut L) {
        self.blink = blink;
        if let Some(paint) = self.blink.initial_paint() {
            self.paint(paint, leds);
        }
    }

    pub fn tick<L: Indicators>(&mut self, now: u32, leds: &mut L) {
        if let Some(paint) = self.blink.tick(now) {
            self.paint(paint, leds);
        }
    }

    fn paint<L: Indicators>(&self, paint: Paint, leds: &mut L) {
        match paint {
            Paint::Show(color) => leds.show(self.id, color),
            Paint::Restore => leds.show(self.id, self.color),
        }
    }
}

pub struct SwitchBank {
    switches: [Switch; SWITCH_COUNT],
}

impl SwitchBank {
    pub fn new() -> Self {
        SwitchBank {
            switches: SwitchId::ALL.map(Switch::new),
        }
    }

    pub fn get(&self, id: SwitchId) -> &Switch {
        &self.switches[id.index()]
    }

    pub fn get_mut(&mut self, id: SwitchId) -> &mut Switch {
        &mut self.switches[id.index()]
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &Switch> {
        self.switches.iter()
    }

    /// Advance every blink state machine once.
    pub fn tick<L: Indicators>(&mut self, now: u32, leds: &mut L) {
        for switch in self.switches.iter_mut() {
            switch.tick(now, leds);
        }
    }
}

impl Default for SwitchBank {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "switch_test.rs"]
mod test;
