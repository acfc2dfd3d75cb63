//! Serial commands.
//!
//! ```text
//! COL <switch> <red> <green> <blue>         switch 1-4, colors as three digits 000-255
//! DIM [<brightness>]                        no brightness disables dimming
//! BLNK <switch> <mode> <red> <green> <blue> mode SINGLE, SHORT, LONG or OFF
//! ```
//!
//! Every command answers a single line, `OK` or one of the [`CommandError`] messages.

use core::fmt;

use crate::hardware::Indicators;
use crate::options::{BLINK_LONG, BLINK_SHORT};

use super::{
    blink::Blink,
    line::CommandLine,
    number::{decimal_u8, digit, three_digits},
    switch::{RgbColor, SwitchBank, SwitchId},
};

pub const REPLY_OK: &str = "OK\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    UnknownCommand,
    ColUsage,
    SwitchRange,
    ColorFormat,
    DimUsage,
    BlnkUsage,
    BlnkMode,
}

impl CommandError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::UnknownCommand => "Unknown command!\n",
            Self::ColUsage => "COL requires 4 arguments: <switch> <red> <green> <blue>!\n",
            Self::SwitchRange => "Switch number must be between 1 and 4.\n",
            Self::ColorFormat => "Color values must be three digits between 000 and 255.\n",
            Self::DimUsage => "DIM can only handle up to one argument: <brightness>!\n",
            Self::BlnkUsage => {
                "BLNK requires 5 arguments: <switch> <mode> <red> <green> <blue>!\n"
            }
            Self::BlnkMode => "Mode must be one of SINGLE, SHORT, LONG, OFF.\n",
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message().trim_end())
    }
}

/// The line written back for a dispatched command.
pub fn reply(result: &Result<(), CommandError>) -> &'static str {
    match result {
        Ok(()) => REPLY_OK,
        Err(e) => e.message(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    Col,
    Dim,
    Blnk,
}

impl Command {
    pub fn from_keyword(keyword: &[u8]) -> Option<Self> {
        match keyword {
            b"COL" => Some(Command::Col),
            b"DIM" => Some(Command::Dim),
            b"BLNK" => Some(Command::Blnk),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkPattern {
    Single,
    Short,
    Long,
    Off,
}

impl BlinkPattern {
    pub fn from_token(token: &[u8]) -> Option<Self> {
        match token {
            b"SINGLE" => Some(BlinkPattern::Single),
            b"SHORT" => Some(BlinkPattern::Short),
            b"LONG" => Some(BlinkPattern::Long),
            b"OFF" => Some(BlinkPattern::Off),
            _ => None,
        }
    }

    pub fn build(self, color: RgbColor, now: u32) -> Blink {
        match self {
            BlinkPattern::Single => Blink::single(color, BLINK_LONG, BLINK_LONG, now),
            BlinkPattern::Short => Blink::periodic(color, BLINK_SHORT, BLINK_SHORT, now),
            BlinkPattern::Long => Blink::periodic(color, BLINK_LONG, BLINK_LONG, now),
            BlinkPattern::Off => Blink::disabled(),
        }
    }
}

/// Runs serial commands against the switches and the LED drivers.
///
/// Keeps the shared dimming level, `None` while the chips run in individual PWM mode.
pub struct Dispatcher {
    dim: Option<u8>,
}

impl Dispatcher {
    pub const fn new() -> Self {
        Dispatcher { dim: None }
    }

    pub fn dim_level(&self) -> Option<u8> {
        self.dim
    }

    pub fn dispatch<L: Indicators>(
        &mut self,
        line: &CommandLine,
        bank: &mut SwitchBank,
        leds: &mut L,
        now: u32,
    ) -> Result<(), CommandError> {
        let result = match Command::from_keyword(line.keyword()) {
            Some(Command::Col) => col(line, bank, leds),
            Some(Command::Dim) => self.dim(line, leds),
            Some(Command::Blnk) => blnk(line, bank, leds, now),
            None => Err(CommandError::UnknownCommand),
        };

        if let Err(e) = result {
            crate::debug!("command rejected: {}", e.message());
        }
        result
    }

    // No argument turns dimming off and still answers with the usage error.
    fn dim<L: Indicators>(
        &mut self,
        line: &CommandLine,
        leds: &mut L,
    ) -> Result<(), CommandError> {
        if line.arg_count() == 0 {
            self.dim = None;
            leds.set_dimming(None);
        }
        if line.arg_count() != 1 {
            return Err(CommandError::DimUsage);
        }

        let pwm = decimal_u8(arg(line, 0));
        self.dim = Some(pwm);
        leds.set_dimming(Some(pwm));
        Ok(())
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn col<L: Indicators>(
    line: &CommandLine,
    bank: &mut SwitchBank,
    leds: &mut L,
) -> Result<(), CommandError> {
    if line.arg_count() != 4 {
        return Err(CommandError::ColUsage);
    }
    let switch = switch(line)?;

    let channel = |i| three_digits(arg(line, i)).ok_or(CommandError::ColorFormat);
    let color = RgbColor::new(channel(1)?, channel(2)?, channel(3)?);

    bank.get_mut(switch).set_color(color, leds);
    Ok(())
}

fn blnk<L: Indicators>(
    line: &CommandLine,
    bank: &mut SwitchBank,
    leds: &mut L,
    now: u32,
) -> Result<(), CommandError> {
    if line.arg_count() != 5 {
        return Err(CommandError::BlnkUsage);
    }
    let switch = switch(line)?;
    let pattern = BlinkPattern::from_token(arg(line, 1)).ok_or(CommandError::BlnkMode)?;
    let color = RgbColor::new(
        decimal_u8(arg(line, 2)),
        decimal_u8(arg(line, 3)),
        decimal_u8(arg(line, 4)),
    );

    bank.get_mut(switch).set_blink(pattern.build(color, now), leds);
    Ok(())
}

fn switch(line: &CommandLine) -> Result<SwitchId, CommandError> {
    digit(arg(line, 0))
        .and_then(SwitchId::new)
        .ok_or(CommandError::SwitchRange)
}

// Argument counts are checked before any access.
fn arg(line: &CommandLine, index: usize) -> &[u8] {
    line.argument(index).unwrap_or_default()
}

#[cfg(test)]
#[path = "command_test.rs"]
mod test;
