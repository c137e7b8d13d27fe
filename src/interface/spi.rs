//! SPI interface implementation built on top of `embedded-hal` `SpiDevice`.

use embedded_hal::spi::{Operation, SpiDevice};

use super::Lis2hh12Interface;

/// Read flag carried in bit 7 of the command byte.
const READ_FLAG: u8 = 0x80;

/// SPI-based interface implementation for the LIS2HH12 driver.
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Creates a new interface from the provided SPI device abstraction.
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Builds the command byte used to address registers over SPI.
    fn command_byte(register: u8, is_read: bool) -> u8 {
        let command = register & 0x7F;
        if is_read { command | READ_FLAG } else { command }
    }

    /// Provides mutable access to the wrapped SPI device.
    pub fn spi_mut(&mut self) -> &mut SPI {
        &mut self.spi
    }

    /// Consumes the interface and returns the owned SPI device.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> Lis2hh12Interface for SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    type Error = SPI::Error;

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        self.write_many(register, core::slice::from_ref(&value))
    }

    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.read_many(register, &mut value)?;
        Ok(value[0])
    }

    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error> {
        if buf.is_empty() {
            return Ok(());
        }

        let command = [Self::command_byte(register, true)];
        let mut operations = [Operation::Write(&command), Operation::Read(buf)];
        self.spi.transaction(&mut operations)
    }

    fn write_many(&mut self, register: u8, data: &[u8]) -> core::result::Result<(), Self::Error> {
        if data.is_empty() {
            return Ok(());
        }

        let command = [Self::command_byte(register, false)];
        let mut operations = [Operation::Write(&command), Operation::Write(data)];
        self.spi.transaction(&mut operations)
    }
}

#[cfg(test)]
mod tests {
    use super::SpiInterface;
    use crate::interface::Lis2hh12Interface;
    use embedded_hal::spi::{Error, ErrorKind, ErrorType, Operation, SpiDevice};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Fault;

    impl Error for Fault {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    struct MockDevice<'a> {
        expectations: &'a [TransactionExpectation<'a>],
        index: usize,
    }

    impl<'a> MockDevice<'a> {
        fn new(expectations: &'a [TransactionExpectation<'a>]) -> Self {
            Self { expectations, index: 0 }
        }
    }

    impl<'a> Drop for MockDevice<'a> {
        fn drop(&mut self) {
            assert_eq!(
                self.index,
                self.expectations.len(),
                "not all SPI expectations consumed"
            );
        }
    }

    impl<'a> ErrorType for MockDevice<'a> {
        type Error = Fault;
    }

    impl<'a> SpiDevice for MockDevice<'a> {
        fn transaction<'b>(
            &mut self,
            operations: &mut [Operation<'b, u8>],
        ) -> Result<(), Self::Error> {
            let expected = self
                .expectations
                .get(self.index)
                .expect("unexpected SPI transaction");
            self.index += 1;

            assert_eq!(operations.len(), 2, "expected command+payload operations");
            let (first, rest) = operations.split_first_mut().expect("missing first op");
            let command = match first {
                Operation::Write(data) => {
                    assert_eq!(data.len(), 1, "command length mismatch");
                    data[0]
                }
                _ => panic!("first operation must be write"),
            };
            let second = rest.first_mut().expect("missing second op");

            match *expected {
                TransactionExpectation::Read { command: expected_command, response } => {
                    assert_eq!(command, expected_command, "command byte mismatch");
                    match second {
                        Operation::Read(buf) => {
                            assert_eq!(buf.len(), response.len(), "response length mismatch");
                            buf.copy_from_slice(response);
                        }
                        _ => panic!("second operation must be read"),
                    }
                }
                TransactionExpectation::Write { command: expected_command, payload } => {
                    assert_eq!(command, expected_command, "command byte mismatch");
                    match second {
                        Operation::Write(data) => {
                            assert_eq!(*data, payload, "payload mismatch");
                        }
                        _ => panic!("second operation must be write"),
                    }
                }
                TransactionExpectation::Fault { command: expected_command } => {
                    assert_eq!(command, expected_command, "command byte mismatch");
                    return Err(Fault);
                }
            }

            Ok(())
        }
    }

    #[derive(Clone, Copy)]
    enum TransactionExpectation<'a> {
        Read { command: u8, response: &'a [u8] },
        Write { command: u8, payload: &'a [u8] },
        Fault { command: u8 },
    }

    #[test]
    fn read_register_sets_read_flag() {
        let expectations = [TransactionExpectation::Read {
            command: 0x8F,
            response: &[0x41],
        }];
        let mock = MockDevice::new(&expectations);
        let mut interface = SpiInterface::new(mock);

        assert_eq!(interface.read_register(0x0F).unwrap(), 0x41);
    }

    #[test]
    fn write_register_clears_read_flag() {
        let expectations = [TransactionExpectation::Write {
            command: 0x24,
            payload: &[0x43],
        }];
        let mock = MockDevice::new(&expectations);
        let mut interface = SpiInterface::new(mock);

        interface.write_register(0x24, 0x43).unwrap();
    }

    #[test]
    fn read_word_decodes_little_endian() {
        let expectations = [TransactionExpectation::Read {
            command: 0x8B,
            response: &[0x00, 0xFF],
        }];
        let mock = MockDevice::new(&expectations);
        let mut interface = SpiInterface::new(mock);

        assert_eq!(interface.read_word(0x0B).unwrap(), -256);
    }

    #[test]
    fn read_word_triplet_uses_single_six_byte_transaction() {
        let expectations = [TransactionExpectation::Read {
            command: 0xA8,
            response: &[0x00, 0x01, 0x00, 0x02, 0x00, 0x03],
        }];
        let mock = MockDevice::new(&expectations);
        let mut interface = SpiInterface::new(mock);

        assert_eq!(interface.read_word_triplet(0x28).unwrap(), [256, 512, 768]);
    }

    #[test]
    fn write_word_sends_low_byte_first() {
        let expectations = [TransactionExpectation::Write {
            command: 0x2E,
            payload: &[0x34, 0x12],
        }];
        let mock = MockDevice::new(&expectations);
        let mut interface = SpiInterface::new(mock);

        interface.write_word(0x2E, 0x1234).unwrap();
    }

    #[test]
    fn fault_is_propagated_without_partial_data() {
        let expectations = [TransactionExpectation::Fault { command: 0xA8 }];
        let mock = MockDevice::new(&expectations);
        let mut interface = SpiInterface::new(mock);

        assert_eq!(interface.read_word_triplet(0x28), Err(Fault));
    }

    #[test]
    fn read_many_ignores_empty_buffer() {
        let expectations: [TransactionExpectation; 0] = [];
        let mock = MockDevice::new(&expectations);
        let mut interface = SpiInterface::new(mock);

        interface.read_many(0x28, &mut []).unwrap();
    }

    #[test]
    fn write_many_ignores_empty_payload() {
        let expectations: [TransactionExpectation; 0] = [];
        let mock = MockDevice::new(&expectations);
        let mut interface = SpiInterface::new(mock);

        interface.write_many(0x20, &[]).unwrap();
    }
}
