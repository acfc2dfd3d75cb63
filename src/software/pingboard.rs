use crate::hardware::{keyboard::KeyEmitter, serial::ByteStream, Indicators};
use crate::options::SWITCH_COUNT;

use super::{
    buttons::{ButtonEventSource, Debouncer},
    command::{reply, Dispatcher},
    keys::KeyBuffer,
    line::LineReader,
    switch::SwitchBank,
};

/// Everything the keypad does between two USB polls.
///
/// One [`iterate`](Pingboard::iterate) services, in this order, the buttons, at most one serial
/// command and the blink state machines. Nothing in it waits.
pub struct Pingboard<D> {
    buttons: ButtonEventSource<D>,
    reader: LineReader,
    dispatcher: Dispatcher,
    bank: SwitchBank,
    keys: KeyBuffer,
}

impl<D: Debouncer> Pingboard<D> {
    pub fn new(buttons: [D; SWITCH_COUNT]) -> Self {
        Pingboard {
            buttons: ButtonEventSource::new(buttons),
            reader: LineReader::new(),
            dispatcher: Dispatcher::new(),
            bank: SwitchBank::new(),
            keys: KeyBuffer::new(),
        }
    }

    pub fn iterate<S, L>(&mut self, now: u32, serial: &mut S, leds: &mut L)
    where
        S: ByteStream,
        L: Indicators,
    {
        for event in self.buttons.poll(now) {
            crate::debug!("switch {} pressed", event.switch.number());
            self.keys.press(event.switch);
        }

        self.check_serial(now, serial, leds);

        self.bank.tick(now, leds);
    }

    /// Hand the waiting keyboard reports to the USB side.
    pub fn emit_keys<K: KeyEmitter>(&mut self, now: u32, keyboard: &mut K) {
        self.keys.emit(now, keyboard);
    }

    pub fn bank(&self) -> &SwitchBank {
        &self.bank
    }

    pub fn dim_level(&self) -> Option<u8> {
        self.dispatcher.dim_level()
    }

    pub fn keys(&self) -> &KeyBuffer {
        &self.keys
    }

    fn check_serial<S, L>(&mut self, now: u32, serial: &mut S, leds: &mut L)
    where
        S: ByteStream,
        L: Indicators,
    {
        while let Some(byte) = serial.read_byte() {
            if let Some(line) = self.reader.feed(byte) {
                let result = self
                    .dispatcher
                    .dispatch(&line, &mut self.bank, leds, now);
                serial.write_reply(reply(&result));
                return;
            }
        }
    }
}

#[cfg(test)]
#[path = "pingboard_test.rs"]
mod test;
