//! High-level LIS2HH12 device driver implementation.
//!
//! The driver has no explicit uninitialized state: [`Lis2hh12::new`] either
//! returns a validated, configured device or an error. Every method takes
//! `&mut self`, so a configuration change can never interleave with a
//! measurement on the same handle.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::interface::spi::SpiInterface;
use crate::interface::Lis2hh12Interface;
use crate::params::{DataRate, FullScale, ScaleUnit};
use crate::registers::{
    Ctrl1,
    Ctrl4,
    Register,
    Status,
    CTRL1_POWER_UP,
    CTRL2_POWER_UP,
    CTRL4_POWER_UP,
    CTRL5_POWER_UP,
    EXPECTED_WHO_AM_I,
    REG_CTRL1,
    REG_CTRL2,
    REG_CTRL4,
    REG_CTRL5,
    REG_OUT_X_L,
    REG_TEMP_L,
    REG_WHO_AM_I,
};
use embedded_hal::delay::DelayNs;
use embedded_hal::spi::{Mode, SpiDevice, MODE_3};

/// SPI mode expected by the device (CPOL = 1, CPHA = 1).
pub const SPI_MODE: Mode = MODE_3;
/// Recommended SPI clock frequency in hertz.
pub const SPI_CLOCK_HZ: u32 = 5_000_000;

// Settle time after the CTRL5 power-up write (milliseconds).
const POWER_UP_SETTLE_DELAY_MS: u32 = 100;
// Temperature output is an offset from 25 °C in 1/256 °C steps.
const TEMPERATURE_OFFSET_C: f32 = 25.0;
const TEMPERATURE_LSB_PER_C: f32 = 256.0;

/// High-level synchronous driver for the LIS2HH12 accelerometer.
pub struct Lis2hh12<IFACE> {
    interface: IFACE,
    config: Config,
    // Raw digit to configured unit multiplier, always derived from `config`.
    scale: f32,
}

impl<IFACE> Lis2hh12<IFACE> {
    // ==================================================================
    // == Ownership =====================================================
    // ==================================================================
    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> IFACE {
        self.interface
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Changes the unit reported by [`acceleration`](Self::acceleration).
    ///
    /// No bus traffic is generated.
    pub fn set_scale_unit(&mut self, unit: ScaleUnit) {
        self.config.unit = unit;
        self.scale = self.config.scale_factor();
    }
}

impl<SPI> Lis2hh12<SpiInterface<SPI>>
where
    SPI: SpiDevice,
{
    /// Convenience constructor for SPI transports.
    pub fn new_spi(
        spi: SPI,
        config: Config,
        delay: &mut impl DelayNs,
    ) -> Result<Self, SPI::Error> {
        Self::new(SpiInterface::new(spi), config, delay)
    }

    /// Releases the driver, returning the SPI device.
    pub fn release_spi(self) -> SPI {
        self.release().release()
    }
}

impl<IFACE, CommE> Lis2hh12<IFACE>
where
    IFACE: Lis2hh12Interface<Error = CommE>,
{
    // ==================================================================
    // == Construction ==================================================
    // ==================================================================
    /// Verifies the device identity, runs the power-up sequence and applies `config`.
    ///
    /// No register is written when `WHO_AM_I` does not match; the error carries
    /// the value that was read.
    pub fn new(interface: IFACE, config: Config, delay: &mut impl DelayNs) -> Result<Self, CommE> {
        let mut device = Self {
            interface,
            config,
            scale: config.scale_factor(),
        };

        let who_am_i = device.identity()?;
        if who_am_i != EXPECTED_WHO_AM_I {
            warn!("unexpected WHO_AM_I {=u8:#x}", who_am_i);
            return Err(Error::DeviceNotFound(who_am_i));
        }

        device.interface.write_register(REG_CTRL5, CTRL5_POWER_UP)?;
        delay.delay_ms(POWER_UP_SETTLE_DELAY_MS);
        device.interface.write_register(REG_CTRL4, CTRL4_POWER_UP)?;
        device.interface.write_register(REG_CTRL2, CTRL2_POWER_UP)?;
        device.interface.write_register(REG_CTRL1, CTRL1_POWER_UP)?;

        device.set_output_data_rate(config.odr)?;
        device.set_full_scale(config.full_scale)?;

        debug!("LIS2HH12 ready: {}", config);
        Ok(device)
    }

    // ==================================================================
    // == Identification & Status =======================================
    // ==================================================================
    /// Reads the `WHO_AM_I` register.
    pub fn identity(&mut self) -> Result<u8, CommE> {
        self.interface
            .read_register(REG_WHO_AM_I)
            .map_err(Error::from)
    }

    /// Reads the `STATUS` register.
    pub fn status(&mut self) -> Result<Status, CommE> {
        self.read::<Status>()
    }

    /// Returns `true` when a new sample is available on all three axes.
    pub fn data_ready(&mut self) -> Result<bool, CommE> {
        Ok(self.status()?.zyxda())
    }

    // ==================================================================
    // == Configuration =================================================
    // ==================================================================
    /// Updates `CTRL1.ODR`, preserving every other `CTRL1` bit.
    pub fn set_output_data_rate(&mut self, odr: DataRate) -> Result<(), CommE> {
        self.modify::<Ctrl1, _>(|ctrl1| ctrl1.set_odr(odr))?;
        self.config.odr = odr;
        Ok(())
    }

    /// Updates `CTRL4.FS` and the matching sensitivity, preserving every other `CTRL4` bit.
    ///
    /// The cached sensitivity only changes once the register write succeeded.
    pub fn set_full_scale(&mut self, full_scale: FullScale) -> Result<(), CommE> {
        self.modify::<Ctrl4, _>(|ctrl4| ctrl4.set_fs(full_scale))?;
        self.config.full_scale = full_scale;
        self.scale = self.config.scale_factor();
        Ok(())
    }

    // ==================================================================
    // == Data Acquisition ==============================================
    // ==================================================================
    /// Reads a raw acceleration triplet in one bus transaction.
    pub fn acceleration_raw(&mut self) -> Result<[i16; 3], CommE> {
        self.interface
            .read_word_triplet(REG_OUT_X_L)
            .map_err(Error::from)
    }

    /// Returns `[x, y, z]` acceleration in the configured unit.
    pub fn acceleration(&mut self) -> Result<[f32; 3], CommE> {
        let raw = self.acceleration_raw()?;
        Ok(raw.map(|axis| f32::from(axis) * self.scale))
    }

    /// Reads the raw temperature word.
    pub fn temperature_raw(&mut self) -> Result<i16, CommE> {
        self.interface.read_word(REG_TEMP_L).map_err(Error::from)
    }

    /// Returns the die temperature in degrees Celsius.
    pub fn temperature(&mut self) -> Result<f32, CommE> {
        let raw = self.temperature_raw()?;
        Ok(f32::from(raw) / TEMPERATURE_LSB_PER_C + TEMPERATURE_OFFSET_C)
    }

    // ==================================================================
    // == Internal Register Helpers =====================================
    // ==================================================================
    fn read<R>(&mut self) -> Result<R, CommE>
    where
        R: Register<Raw = u8> + From<u8>,
    {
        let raw = self
            .interface
            .read_register(R::ADDRESS)
            .map_err(Error::from)?;
        Ok(R::from(raw))
    }

    // Read-modify-write of a single register; untouched fields keep their bits.
    fn modify<R, F>(&mut self, mutate: F) -> Result<R, CommE>
    where
        R: Register<Raw = u8> + From<u8> + Copy,
        u8: From<R>,
        F: FnOnce(&mut R),
    {
        let mut value = self.read::<R>()?;
        mutate(&mut value);
        self.interface
            .write_register(R::ADDRESS, u8::from(value))
            .map_err(Error::from)?;
        Ok(value)
    }
}
