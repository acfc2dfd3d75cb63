#![no_std]
#![no_main]

mod status;

use pingboard::{
    hardware::{button::PinDebouncer, leds::LedBank, tlc59108::Tlc59108},
    options::{
        BUTTON_DEBOUNCE_DELAY, I2C_FREQUENCY_KHZ, LED1_I2C_ADDR, LED2_I2C_ADDR, TIMER_MAIN_LOOP,
    },
    Pingboard,
};
use status::{StatusColor, StatusLed};
use usbd_serial::SerialPort;

use waveshare_rp2040_zero as bsp;

use bsp::hal::{
    clocks::{init_clocks_and_plls, Clock},
    entry,
    gpio::{
        bank0::{Gpio0, Gpio1},
        FunctionI2C, Pin, PullUp,
    },
    pac,
    pio::PIOExt,
    timer::Timer,
    usb,
    watchdog::Watchdog,
    Sio, I2C,
};
use cortex_m::prelude::*;
use defmt_rtt as _;

use fugit::{ExtU32, RateExtU32};
use panic_probe as _;
use ws2812_pio::Ws2812;

use usb_device::class_prelude::*;
use usb_device::prelude::*;
use usbd_human_interface_device::device::keyboard::NKROBootKeyboard;
use usbd_human_interface_device::prelude::*;

#[entry]
fn main() -> ! {
    let mut pac = pac::Peripherals::take().unwrap();

    let mut watchdog = Watchdog::new(pac.WATCHDOG);
    let clocks = init_clocks_and_plls(
        bsp::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let mut delay = timer;

    let sio = Sio::new(pac.SIO);
    let pins = bsp::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let (mut pio, sm0, _, _, _) = pac.PIO0.split(&mut pac.RESETS);

    // USB --
    let usb_bus = UsbBusAllocator::new(usb::UsbBus::new(
        pac.USBCTRL_REGS,
        pac.USBCTRL_DPRAM,
        clocks.usb_clock,
        true,
        &mut pac.RESETS,
    ));

    let mut serial = SerialPort::new(&usb_bus);
    let mut keyboard = UsbHidClassBuilder::new()
        .add_device(
            usbd_human_interface_device::device::keyboard::NKROBootKeyboardConfig::default(),
        )
        .build(&usb_bus);

    let mut usb_dev = UsbDeviceBuilder::new(&usb_bus, UsbVidPid(0x1209, 0x0001))
        .strings(&[StringDescriptors::default()
            .manufacturer("Pingboard")
            .product("Pingboard Macro Keypad")
            .serial_number("01")])
        .unwrap()
        .composite_with_iads()
        .build();

    // Led --
    let mut neopixel = Ws2812::new(
        // The onboard NeoPixel is attached to GPIO pin #16 on the Waveshare RP2040-Zero.
        pins.neopixel.into_function(),
        &mut pio,
        sm0,
        clocks.peripheral_clock.freq(),
        timer.count_down(),
    );
    let mut status = StatusLed::new(&mut neopixel);

    // LED drivers --
    // Both chips share the reset line on GP9, pulsing it once resets them together.
    let mut led_reset = pins.gp9.into_push_pull_output();
    Tlc59108::hardware_reset(&mut led_reset, &mut delay).ok();

    let sda_pin: Pin<Gpio0, FunctionI2C, PullUp> = pins.gp0.reconfigure();
    let scl_pin: Pin<Gpio1, FunctionI2C, PullUp> = pins.gp1.reconfigure();
    let i2c = I2C::i2c0(
        pac.I2C0,
        sda_pin,
        scl_pin,
        I2C_FREQUENCY_KHZ.kHz(),
        &mut pac.RESETS,
        clocks.system_clock.freq(),
    );

    let mut leds = LedBank::new(
        i2c,
        [Tlc59108::new(LED1_I2C_ADDR), Tlc59108::new(LED2_I2C_ADDR)],
    );
    let ready = match leds.init() {
        Ok(()) => {
            defmt::info!("LED drivers ready");
            StatusColor::Ready
        }
        Err(e) => {
            defmt::error!("LED drivers not answering: {}", defmt::Debug2Format(&e));
            StatusColor::Error
        }
    };
    status.show(ready);

    // Buttons --
    // Switch 1 to 4, active high with external pull-downs.
    let mut pingboard = Pingboard::new([
        PinDebouncer::new(pins.gp2.into_pull_down_input().into_dyn_pin(), BUTTON_DEBOUNCE_DELAY),
        PinDebouncer::new(pins.gp3.into_pull_down_input().into_dyn_pin(), BUTTON_DEBOUNCE_DELAY),
        PinDebouncer::new(pins.gp4.into_pull_down_input().into_dyn_pin(), BUTTON_DEBOUNCE_DELAY),
        PinDebouncer::new(pins.gp5.into_pull_down_input().into_dyn_pin(), BUTTON_DEBOUNCE_DELAY),
    ]);

    // Timers --
    let mut tick_count_down = timer.count_down();
    tick_count_down.start(1.millis());

    let mut main_count_down = timer.count_down();
    main_count_down.start(TIMER_MAIN_LOOP.millis());

    // --
    let mut ticks: u32 = 0;

    loop {
        // Tick once per ms -------------------------------------------------------------
        if tick_count_down.wait().is_ok() {
            ticks = ticks.wrapping_add(1);
            match keyboard.tick() {
                Err(UsbHidError::WouldBlock) => {}
                Ok(_) => {}
                Err(e) => defmt::warn!("keyboard tick failed: {}", defmt::Debug2Format(&e)),
            };
        }

        // Buttons, serial commands and blinking ------------------------------------------
        if main_count_down.wait().is_ok() {
            pingboard.iterate(ticks, &mut serial, &mut leds);
            pingboard.emit_keys(ticks, keyboard.device::<NKROBootKeyboard<'_, _>, _>());

            status.show(if pingboard.keys().is_empty() {
                ready
            } else {
                StatusColor::Typing
            });
        }

        // USB --------------------------------------------------------------------------
        if usb_dev.poll(&mut [&mut keyboard, &mut serial]) {
            match keyboard
                .device::<NKROBootKeyboard<'_, _>, _>()
                .read_report()
            {
                Err(UsbError::WouldBlock) => {}
                Err(e) => defmt::warn!("keyboard read failed: {}", defmt::Debug2Format(&e)),
                Ok(_leds) => {}
            }
        }
    }
}
