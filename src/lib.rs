//! Driver for 7-segment LED display modules built around the AMS AS1115
//! I2C LED controller, generic over [`embedded_hal::i2c::I2c`] and
//! [`embedded_hal::delay::DelayNs`].
//!
//! Characters are written through a virtual cursor: each non-dot
//! character lands on the digit at the cursor and advances it, while a
//! `'.'` merges into the previously written digit so that `"1.2"` only
//! occupies two digit positions. The driver keeps a write-through mirror
//! of every digit's segment data; the chip is never read back.
//!
//! ```no_run
//! # use embedded_hal::{delay::DelayNs, i2c::I2c};
//! # fn demo<I: I2c, D: DelayNs>(i2c: I, delay: D) {
//! use i2c_7seg_led::SevenSegLed;
//!
//! let mut led: SevenSegLed<_, _, 4> = SevenSegLed::new(i2c, delay, 0x03);
//! led.init().unwrap();
//! led.write_str("72.5").unwrap();
//! # }
//! ```

#![no_std]

mod constants;
pub mod font;

pub use constants::*;
use embedded_hal::{delay::DelayNs, i2c::I2c};
use num_traits::ToPrimitive;

/// Outcome of the address-claiming phase of [`SevenSegLed::init`].
///
/// Chips power up listening on the shared default address 0x00, and the
/// init sequence broadcasts there to move each chip onto its
/// jumper-configured address. A nack on those broadcasts is the normal
/// case once a chip has already moved off 0x00, so it is reported as
/// [`Bootstrap::AlreadyAddressed`] rather than as an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bootstrap {
    /// Both default-address broadcasts were acknowledged.
    Claimed,
    /// At least one broadcast was nacked; the chip had already been
    /// moved onto its own address.
    AlreadyAddressed,
}

/// Decode-mode register settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeMode {
    /// Segments are driven directly from digit data. The driver's font
    /// table assumes this mode.
    NoDigits,
    /// All digits go through the chip's built-in BCD/HEX decoder.
    AllDigits,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    I2cError(E),
    InvalidValue,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Error::I2cError(error)
    }
}

/// Driver for one display module with `NUM_DIGITS` digits (1 to 8).
///
/// Digits are 1-based, matching the chip's digit data registers
/// 0x01..0x08. All bus traffic is best-effort: a failed register write
/// is reported through the returned `Result`, but multi-step operations
/// still run to completion and the local mirror and cursor update as if
/// the write had succeeded, since there is no hardware read-back to
/// reconcile against.
pub struct SevenSegLed<I2C, D, const NUM_DIGITS: u8> {
    i2c: I2C,
    delay: D,
    address: u8,
    segments: [u8; (MAX_DIGITS + 1) as usize], // index 0 unused
    cursor: u8,
}

impl<I2C, D, E, const NUM_DIGITS: u8> SevenSegLed<I2C, D, NUM_DIGITS>
where
    I2C: I2c<Error = E>,
    D: DelayNs,
{
    const DIGITS_IN_RANGE: () = assert!(NUM_DIGITS >= 1 && NUM_DIGITS <= MAX_DIGITS);

    /// Creates a driver for the display at `address`. No bus traffic
    /// happens until [`init`](Self::init).
    pub fn new(i2c: I2C, delay: D, address: u8) -> Self {
        #[allow(clippy::let_unit_value)]
        let _ = Self::DIGITS_IN_RANGE;
        Self {
            i2c,
            delay,
            address,
            segments: [0; (MAX_DIGITS + 1) as usize],
            cursor: 1,
        }
    }

    /// Releases the bus and delay handles.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    /// Bootstraps the chip and brings the display into a known state:
    /// all digits active and blank, full brightness, direct segment
    /// drive (no BCD/HEX decoding), all optional features off, cursor
    /// at digit 1.
    ///
    /// The first two writes go to the shared default address 0x00 to
    /// wake whatever chip still sits there and tell it to read its
    /// address jumpers; each is followed by a fixed settle delay. A
    /// real-address write failure later in the sequence is returned as
    /// an error, but the remaining steps are still attempted.
    pub fn init(&mut self) -> Result<Bootstrap, Error<E>> {
        let wake = self.write_register_to_addr(
            DEFAULT_ADDRESS,
            register::SHUTDOWN,
            register::shutdown::NORMAL,
        );
        self.delay.delay_ms(SETTLE_DELAY_MS);

        let claim = self.write_register_to_addr(
            DEFAULT_ADDRESS,
            register::SELF_ADDRESSING,
            register::self_addressing::USER_SET_ADDR,
        );
        self.delay.delay_ms(SETTLE_DELAY_MS);

        let bootstrap = if wake.is_ok() && claim.is_ok() {
            Bootstrap::Claimed
        } else {
            Bootstrap::AlreadyAddressed
        };

        let mut result = Ok(());
        for (reg, value) in [
            (register::SHUTDOWN, register::shutdown::NORMAL_AND_RESET),
            (register::GLOBAL_INTENSITY, MAX_INTENSITY),
            (register::SCAN_LIMIT, NUM_DIGITS - 1),
            (register::DECODE_MODE, register::decode_mode::NO_DIGITS),
            (register::FEATURE, 0x00),
        ] {
            keep_first(&mut result, self.write_register(reg, value));
        }
        keep_first(&mut result, self.clear());

        result.map(|_| bootstrap)
    }

    /// Writes a segment mask to one digit and records it in the mirror.
    /// Digits outside `1..=NUM_DIGITS` are silently ignored.
    pub fn set_segments(&mut self, digit: u8, mask: u8) -> Result<(), Error<E>> {
        if digit < 1 || digit > NUM_DIGITS {
            return Ok(());
        }
        let result = self.write_register(register::DIGIT_OFFSET + digit - 1, mask);
        self.segments[digit as usize] = mask;
        result
    }

    /// Blanks every digit and homes the cursor. All digits are
    /// attempted even if one write fails; the first failure is
    /// returned afterwards.
    pub fn clear(&mut self) -> Result<(), Error<E>> {
        let mut result = Ok(());
        for digit in 1..=NUM_DIGITS {
            keep_first(&mut result, self.set_segments(digit, 0x00));
        }
        self.cursor = 1;
        result
    }

    /// Moves the cursor to digit 1.
    pub fn home(&mut self) {
        self.cursor_move(1);
    }

    /// Moves the cursor so the next character lands on `digit`.
    /// Out-of-range digits are silently ignored.
    pub fn cursor_move(&mut self, digit: u8) {
        if digit >= 1 && digit <= NUM_DIGITS {
            self.cursor = digit;
        }
    }

    /// Lights the decimal point of one digit, leaving the other
    /// segments as mirrored. Out-of-range digits are silently ignored.
    pub fn set_decimal_point(&mut self, digit: u8) -> Result<(), Error<E>> {
        if digit < 1 || digit > NUM_DIGITS {
            return Ok(());
        }
        let mask = self.segments[digit as usize] | DECIMAL_POINT_MASK;
        self.set_segments(digit, mask)
    }

    /// Turns off the decimal point of one digit. Out-of-range digits
    /// are silently ignored.
    pub fn clear_decimal_point(&mut self, digit: u8) -> Result<(), Error<E>> {
        if digit < 1 || digit > NUM_DIGITS {
            return Ok(());
        }
        let mask = self.segments[digit as usize] & !DECIMAL_POINT_MASK;
        self.set_segments(digit, mask)
    }

    /// Writes one ASCII character at the cursor.
    ///
    /// A `'.'` attaches to the digit written just before it without
    /// consuming a digit slot, except at cursor position 1 where
    /// nothing precedes it and the dot takes digit 1 by itself. Once
    /// the cursor is past the last digit, further characters are
    /// dropped. Bytes above 0x7F render blank.
    pub fn write_byte(&mut self, code: u8) -> Result<(), Error<E>> {
        if self.cursor > NUM_DIGITS {
            return Ok(());
        }
        if code == b'.' {
            if self.cursor == 1 {
                let result = self.set_decimal_point(1);
                self.cursor = 2;
                result
            } else {
                self.set_decimal_point(self.cursor - 1)
            }
        } else {
            let result = self.set_segments(self.cursor, font::lookup(code));
            self.cursor += 1;
            result
        }
    }

    /// Writes a string left to right via [`write_byte`](Self::write_byte).
    /// Multi-byte characters are written byte by byte.
    pub fn write_str(&mut self, text: &str) -> Result<(), Error<E>> {
        self.write_ascii(text.as_bytes())
    }

    /// Writes a byte slice left to right. Every byte is attempted even
    /// if a bus write fails along the way.
    pub fn write_ascii(&mut self, bytes: &[u8]) -> Result<(), Error<E>> {
        let mut result = Ok(());
        for &code in bytes {
            keep_first(&mut result, self.write_byte(code));
        }
        result
    }

    /// Writes an unsigned integer in decimal at the cursor. Values that
    /// do not convert to `u32` are rejected.
    pub fn write_number<T>(&mut self, number: T) -> Result<(), Error<E>>
    where
        T: ToPrimitive,
    {
        let num = number.to_u32().ok_or(Error::InvalidValue)?;
        let mut divisor = 1u32;
        while num / divisor >= 10 {
            divisor *= 10;
        }
        let mut result = Ok(());
        while divisor > 0 {
            let digit = (num / divisor % 10) as u8;
            keep_first(&mut result, self.write_byte(b'0' + digit));
            divisor /= 10;
        }
        result
    }

    /// Sets the global brightness, 0 (dimmest) to 15.
    pub fn set_brightness(&mut self, value: u8) -> Result<(), Error<E>> {
        if value > MAX_INTENSITY {
            return Err(Error::InvalidValue);
        }
        self.write_register(register::GLOBAL_INTENSITY, value)
    }

    /// Turns the display back on after [`display_off`](Self::display_off).
    pub fn display_on(&mut self) -> Result<(), Error<E>> {
        self.write_register(register::SHUTDOWN, register::shutdown::NORMAL)
    }

    /// Shuts the display down to save power. Register contents are
    /// retained, so [`display_on`](Self::display_on) restores the image.
    pub fn display_off(&mut self) -> Result<(), Error<E>> {
        self.write_register(register::SHUTDOWN, register::shutdown::SHUTDOWN)
    }

    /// Writes the feature register. Bit values are in
    /// [`register::feature`].
    pub fn set_feature(&mut self, bits: u8) -> Result<(), Error<E>> {
        self.write_register(register::FEATURE, bits)
    }

    /// Selects between direct segment drive and the chip's built-in
    /// decoder. [`init`](Self::init) selects [`DecodeMode::NoDigits`],
    /// which the font table assumes.
    pub fn set_decode_mode(&mut self, mode: DecodeMode) -> Result<(), Error<E>> {
        let value = match mode {
            DecodeMode::NoDigits => register::decode_mode::NO_DIGITS,
            DecodeMode::AllDigits => register::decode_mode::ALL_DIGITS,
        };
        self.write_register(register::DECODE_MODE, value)
    }

    /// Last segment mask commanded to a digit, from the local mirror
    /// (the chip is never read back). Returns 0 for out-of-range digits.
    pub fn segments(&self, digit: u8) -> u8 {
        if digit < 1 || digit > NUM_DIGITS {
            return 0;
        }
        self.segments[digit as usize]
    }

    /// Digit the next non-dot character will land on; `NUM_DIGITS + 1`
    /// once the display is full.
    pub fn cursor(&self) -> u8 {
        self.cursor
    }

    /// The display's bus address.
    pub fn address(&self) -> u8 {
        self.address
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Error<E>> {
        self.write_register_to_addr(self.address, register, value)
    }

    fn write_register_to_addr(
        &mut self,
        address: u8,
        register: u8,
        value: u8,
    ) -> Result<(), Error<E>> {
        self.i2c.write(address, &[register, value])?;
        Ok(())
    }
}

fn keep_first<E>(result: &mut Result<(), Error<E>>, next: Result<(), Error<E>>) {
    if result.is_ok() {
        *result = next;
    }
}
