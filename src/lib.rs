#![cfg_attr(not(test), no_std)]

#[macro_use]
mod macros;

pub mod hardware;
pub mod options;
pub mod software;

#[cfg(test)]
pub(crate) mod test_stub;

pub use software::pingboard::Pingboard;
