//! Demo for a 4-digit 7-segment LED module on a Raspberry Pi I2C bus.
//! Enable I2C on the Pi first (raspi-config, Interfaces, I2C).

use std::thread::sleep;
use std::time::Duration;

use i2c_7seg_led::SevenSegLed;
use linux_embedded_hal::{Delay, I2cdev};

const LED_ADDRESS: u8 = 0x03; // set by the module's address jumpers
const NUM_DIGITS: u8 = 4;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let i2c = I2cdev::new("/dev/i2c-1")?;
    let mut led: SevenSegLed<_, _, NUM_DIGITS> = SevenSegLed::new(i2c, Delay, LED_ADDRESS);
    led.init().map_err(|e| format!("init failed: {e:?}"))?;

    loop {
        // typical readouts
        led.clear().ok();
        led.write_str("T=72").ok();
        sleep(Duration::from_secs(1));
        led.clear().ok();
        led.write_str("7.02").ok();
        sleep(Duration::from_secs(1));

        // decimal points attach to the digit written before them
        for text in [".678", "5.678", "56.78", "567.8", "5678."] {
            led.clear().ok();
            led.write_str(text).ok();
            sleep(Duration::from_secs(1));
        }

        // cursor home rewrites in place
        led.clear().ok();
        led.write_str("HOME").ok();
        sleep(Duration::from_secs(1));
        led.home();
        for c in [b'1', b'2', b'3', b'4'] {
            led.write_byte(c).ok();
            sleep(Duration::from_millis(500));
        }

        // overwrite a single digit
        led.clear().ok();
        led.write_str("MOVE").ok();
        sleep(Duration::from_secs(1));
        led.cursor_move(4);
        led.write_byte(b'D').ok();
        sleep(Duration::from_secs(1));

        // brightness sweep
        led.clear().ok();
        led.write_number(8888u32).ok();
        for value in (0..=15).rev() {
            led.set_brightness(value).ok();
            sleep(Duration::from_millis(200));
        }
        led.set_brightness(15).ok();

        led.display_off().ok();
        sleep(Duration::from_secs(1));
        led.display_on().ok();
        sleep(Duration::from_secs(1));
    }
}
