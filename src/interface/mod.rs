//! Bus interface abstraction for the LIS2HH12 driver.
//!
//! Every method issues exactly one bus transaction. Bus locking and
//! chip-select handling belong to the transport: an `embedded-hal`
//! `SpiDevice` holds the bus and asserts chip-select for the whole
//! transaction and releases both on every exit path, including errors.

pub mod spi;

/// Number of bytes spanning the X, Y and Z output registers.
pub const TRIPLET_BYTES: usize = 6;

/// Abstraction over the low-level bus access required by the driver.
pub trait Lis2hh12Interface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Writes a single register.
    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error>;

    /// Reads a single register.
    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error>;

    /// Reads multiple consecutive registers into the provided buffer.
    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error>;

    /// Writes multiple consecutive registers from the provided buffer.
    fn write_many(&mut self, register: u8, data: &[u8]) -> core::result::Result<(), Self::Error>;

    /// Reads a little-endian signed 16-bit value starting at `register`.
    fn read_word(&mut self, register: u8) -> core::result::Result<i16, Self::Error> {
        let mut raw = [0u8; 2];
        self.read_many(register, &mut raw)?;
        Ok(i16::from_le_bytes(raw))
    }

    /// Reads three consecutive little-endian signed 16-bit values in one transaction.
    fn read_word_triplet(&mut self, register: u8) -> core::result::Result<[i16; 3], Self::Error> {
        let mut raw = [0u8; TRIPLET_BYTES];
        self.read_many(register, &mut raw)?;
        Ok(decode_triplet(&raw))
    }

    /// Writes a little-endian signed 16-bit value starting at `register`.
    fn write_word(&mut self, register: u8, value: i16) -> core::result::Result<(), Self::Error> {
        self.write_many(register, &value.to_le_bytes())
    }
}

/// Decodes six output bytes into `[x, y, z]`.
pub fn decode_triplet(raw: &[u8; TRIPLET_BYTES]) -> [i16; 3] {
    [
        i16::from_le_bytes([raw[0], raw[1]]),
        i16::from_le_bytes([raw[2], raw[3]]),
        i16::from_le_bytes([raw[4], raw[5]]),
    ]
}
