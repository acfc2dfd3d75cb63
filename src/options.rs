// Serial command line
pub const SERIAL_BUF_SIZE: usize = 64;
pub const SERIAL_MAX_ARGS: usize = 10;

// Switches
pub const SWITCH_COUNT: usize = 4;

// Milliseconds
pub const BUTTON_DEBOUNCE_DELAY: u32 = 50;
pub const KEY_HOLD_TIME: u32 = 5;
pub const TIMER_MAIN_LOOP: u32 = 1;

// 1 Hz for long and 4 Hz for short blinks as NASA suggests
// https://colorusage.arc.nasa.gov/flashing.php
pub const BLINK_SHORT: u32 = 250;
pub const BLINK_LONG: u32 = 1_000;

pub const KEY_BUFFER_LENGTH: usize = 16;
pub const KEY_CASE_LENGTH: usize = 4;

// TLC59108 chips
pub const LED1_I2C_ADDR: u8 = 0x41;
pub const LED2_I2C_ADDR: u8 = 0x43;
pub const I2C_FREQUENCY_KHZ: u32 = 400;
