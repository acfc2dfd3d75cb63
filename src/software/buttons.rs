use heapless::Vec;

use crate::options::SWITCH_COUNT;

use super::switch::SwitchId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Pressed,
    Released,
}

/// A button input that only reports confirmed changes.
pub trait Debouncer {
    fn poll(&mut self, now: u32) -> Option<Edge>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressEvent {
    pub switch: SwitchId,
}

/// The four buttons, in switch order.
pub struct ButtonEventSource<D> {
    buttons: [D; SWITCH_COUNT],
}

impl<D: Debouncer> ButtonEventSource<D> {
    pub fn new(buttons: [D; SWITCH_COUNT]) -> Self {
        ButtonEventSource { buttons }
    }

    pub fn poll(&mut self, now: u32) -> Vec<PressEvent, SWITCH_COUNT> {
        let mut events = Vec::new();
        for (button, switch) in self.buttons.iter_mut().zip(SwitchId::ALL) {
            if button.poll(now) == Some(Edge::Pressed) {
                events.push(PressEvent { switch }).ok();
            }
        }
        events
    }
}

#[cfg(test)]
#[path = "buttons_test.rs"]
mod test;
