pub mod blink;
pub mod buttons;
pub mod command;
pub mod keys;
pub mod line;
pub mod number;
pub mod pingboard;
pub mod switch;
