use heapless::{Deque, Vec};
use usbd_human_interface_device::page::Keyboard;

use crate::hardware::keyboard::{EmitError, KeyEmitter};
use crate::options::{KEY_BUFFER_LENGTH, KEY_CASE_LENGTH, KEY_HOLD_TIME, SWITCH_COUNT};

use super::switch::SwitchId;

// --------------------------------------------------------------------------------------
pub const SWITCH_KEYS: [[Keyboard; 2]; SWITCH_COUNT] = [
    [Keyboard::LeftGUI, Keyboard::F9],
    [Keyboard::LeftGUI, Keyboard::F10],
    [Keyboard::LeftGUI, Keyboard::F11],
    [Keyboard::LeftGUI, Keyboard::F12],
];

// --------------------------------------------------------------------------------------
// One keyboard report and how long it stays before the next one is sent.
#[derive(Debug, PartialEq, Default)]
pub struct BuffCase {
    pub key_code: Vec<Keyboard, KEY_CASE_LENGTH>,
    pub tempo: u32,
}

/// Keyboard reports waiting for the USB side.
///
/// A press is two reports, the switch keys held for [`KEY_HOLD_TIME`] then an empty one to
/// release everything.
pub struct KeyBuffer {
    keys: Deque<BuffCase, KEY_BUFFER_LENGTH>,
    last_report: u32,
    hold: u32,
}

impl KeyBuffer {
    pub fn new() -> Self {
        KeyBuffer {
            keys: Deque::new(),
            last_report: 0,
            hold: 0,
        }
    }

    pub fn press(&mut self, switch: SwitchId) {
        if self.keys.capacity() - self.keys.len() < 2 {
            crate::warn!("key buffer full, switch {} dropped", switch.number());
            return;
        }

        let mut key_code = Vec::new();
        key_code.extend_from_slice(&SWITCH_KEYS[switch.index()]).ok();
        self.keys
            .push_back(BuffCase {
                key_code,
                tempo: KEY_HOLD_TIME,
            })
            .ok();
        self.keys.push_back(BuffCase::default()).ok();
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Send the next report if the previous one has been held long enough.
    pub fn emit<K: KeyEmitter>(&mut self, now: u32, keyboard: &mut K) {
        if self.keys.is_empty() {
            self.hold = 0;
            return;
        }
        if now.wrapping_sub(self.last_report) < self.hold {
            return;
        }

        if let Some(case) = self.keys.pop_front() {
            match keyboard.write_keys(&case.key_code) {
                Ok(()) => {
                    self.last_report = now;
                    self.hold = case.tempo;
                }
                Err(EmitError::WouldBlock) => {
                    self.keys.push_front(case).ok();
                }
                Err(EmitError::Failed) => {
                    crate::warn!("keyboard report lost");
                }
            }
        }
    }
}

impl Default for KeyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "keys_test.rs"]
mod test;
