//! Serial command lines.
//!
//! Commands are one per line, `<command>[ <arg 1>[ <arg 2>[...]]]`, with every single space
//! (0x20) separating two tokens.

use core::{mem, ops::Range};

use heapless::Vec;

use crate::options::{SERIAL_BUF_SIZE, SERIAL_MAX_ARGS};

/// A completed line split into a keyword and its arguments.
///
/// Two consecutive spaces give an empty token and a trailing space gives an empty last argument.
/// Arguments past [`SERIAL_MAX_ARGS`] are dropped.
#[derive(Debug, Default)]
pub struct CommandLine {
    buf: Vec<u8, SERIAL_BUF_SIZE>,
    keyword_end: usize,
    args: Vec<Range<usize>, SERIAL_MAX_ARGS>,
}

impl CommandLine {
    /// Bytes past the buffer capacity are cut off.
    pub fn new(bytes: &[u8]) -> Self {
        let mut buf = Vec::new();
        buf.extend_from_slice(&bytes[..bytes.len().min(SERIAL_BUF_SIZE)])
            .ok();
        Self::from_buffer(buf)
    }

    fn from_buffer(buf: Vec<u8, SERIAL_BUF_SIZE>) -> Self {
        let mut line = CommandLine {
            buf,
            keyword_end: 0,
            args: Vec::new(),
        };
        line.tokenize();
        line
    }

    fn tokenize(&mut self) {
        let len = self.buf.len();
        let mut token_start = 0;
        let mut in_keyword = true;

        for pos in 0..=len {
            if pos < len && self.buf[pos] != b' ' {
                continue;
            }

            if in_keyword {
                self.keyword_end = pos;
                in_keyword = false;
            } else if self.args.push(token_start..pos).is_err() {
                break;
            }
            token_start = pos + 1;
        }
    }

    pub fn keyword(&self) -> &[u8] {
        &self.buf[..self.keyword_end]
    }

    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    pub fn argument(&self, index: usize) -> Option<&[u8]> {
        self.args.get(index).map(|range| &self.buf[range.clone()])
    }

    #[cfg(test)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}

/// Accumulates serial bytes until a line is complete.
pub struct LineReader {
    buf: Vec<u8, SERIAL_BUF_SIZE>,
}

impl LineReader {
    pub const fn new() -> Self {
        LineReader { buf: Vec::new() }
    }

    /// Returns a line on `\n`, or when a byte arrives while the buffer is already full. In that
    /// case the full buffer is handed out as is and the new byte starts the next line.
    pub fn feed(&mut self, byte: u8) -> Option<CommandLine> {
        if byte == b'\n' {
            return Some(self.take());
        }

        if self.buf.is_full() {
            crate::warn!("serial line longer than {} bytes, cut", SERIAL_BUF_SIZE);
            let line = self.take();
            self.buf.push(byte).ok();
            return Some(line);
        }

        self.buf.push(byte).ok();
        None
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    fn take(&mut self) -> CommandLine {
        CommandLine::from_buffer(mem::take(&mut self.buf))
    }
}

impl Default for LineReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "line_test.rs"]
mod test;
