pub const DEFAULT_ADDRESS: u8 = 0x00;
pub const MAX_DIGITS: u8 = 8;
pub const MAX_INTENSITY: u8 = 15; // 4 bits
pub const DECIMAL_POINT_MASK: u8 = 0x80;
pub const SETTLE_DELAY_MS: u32 = 20;

#[allow(dead_code)]
pub mod register {
    pub const DIGIT_OFFSET: u8 = 0x01; // digit 1..8 data registers are 0x01..0x08
    pub const DECODE_MODE: u8 = 0x09;
    pub const GLOBAL_INTENSITY: u8 = 0x0A;
    pub const SCAN_LIMIT: u8 = 0x0B;
    pub const SHUTDOWN: u8 = 0x0C;
    pub const FEATURE: u8 = 0x0E;
    pub const SELF_ADDRESSING: u8 = 0x2D;

    pub mod decode_mode {
        pub const NO_DIGITS: u8 = 0x00; // segments driven directly from digit data
        pub const ALL_DIGITS: u8 = 0xFF; // BCD/HEX decoding for digits 7:0
    }

    pub mod shutdown {
        pub const SHUTDOWN_AND_RESET: u8 = 0x00; // shutdown, reset feature register
        pub const SHUTDOWN: u8 = 0x80; // shutdown, keep feature register
        pub const NORMAL_AND_RESET: u8 = 0x01; // normal operation, reset feature register
        pub const NORMAL: u8 = 0x81; // normal operation, keep feature register
    }

    pub mod self_addressing {
        pub const FACTORY_SET_ADDR: u8 = 0x00; // keep the factory address 0x00
        pub const USER_SET_ADDR: u8 = 0x01; // read the hardware jumpers for the address
    }

    pub mod feature {
        pub const CLK_EN: u8 = 0x01; // bit 0: external clock active
        pub const REG_RESET: u8 = 0x02; // bit 1: resets all control registers except feature
        pub const DECODE_SEL: u8 = 0x04; // bit 2: 0 = Code-B decoding, 1 = HEX decoding
        pub const BLINK_EN: u8 = 0x10; // bit 4: enables blinking
        pub const BLINK_FREQ_SEL: u8 = 0x20; // bit 5: low-frequency blink
        pub const SYNC: u8 = 0x40; // bit 6: synchronizes blinking across devices
        pub const BLINK_START: u8 = 0x80; // bit 7: blink starts with display phase enabled
    }
}
