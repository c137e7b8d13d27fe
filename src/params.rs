//! Strongly typed parameter enumerations for the LIS2HH12 driver.
//!
//! These enums map directly to datasheet field encodings and are used across
//! [`Config`](crate::config::Config) and the high-level driver APIs. Prefer these
//! types over raw integers to keep configuration values valid and explicit.
//!
//! # Examples
//!
//! ```rust
//! use lis2hh12::params::{DataRate, FullScale, ScaleUnit};
//!
//! let odr = DataRate::Hz400;
//! let fs = FullScale::G8;
//! assert_eq!(odr.hz(), 400);
//! assert_eq!(fs.range_g(), 8);
//! let _ = ScaleUnit::G;
//! ```

use modular_bitfield::prelude::Specifier;

use crate::config::ConfigError;

/// Output data rate selections (`CTRL1.ODR`, bits 6:4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 3]
pub enum DataRate {
    /// Power-down mode, no new samples.
    PowerDown = 0b000,
    /// 10 Hz output data rate.
    Hz10 = 0b001,
    /// 50 Hz output data rate.
    Hz50 = 0b010,
    /// 100 Hz output data rate.
    Hz100 = 0b011,
    /// 200 Hz output data rate.
    Hz200 = 0b100,
    /// 400 Hz output data rate.
    Hz400 = 0b101,
    /// 800 Hz output data rate.
    Hz800 = 0b110,
}

impl DataRate {
    /// Returns the ODR in hertz, zero when powered down.
    pub const fn hz(self) -> u32 {
        match self {
            Self::PowerDown => 0,
            Self::Hz10 => 10,
            Self::Hz50 => 50,
            Self::Hz100 => 100,
            Self::Hz200 => 200,
            Self::Hz400 => 400,
            Self::Hz800 => 800,
        }
    }
}

impl TryFrom<u8> for DataRate {
    type Error = ConfigError;

    /// Converts the 3-bit field code (not the shifted register value).
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0b000 => Ok(Self::PowerDown),
            0b001 => Ok(Self::Hz10),
            0b010 => Ok(Self::Hz50),
            0b011 => Ok(Self::Hz100),
            0b100 => Ok(Self::Hz200),
            0b101 => Ok(Self::Hz400),
            0b110 => Ok(Self::Hz800),
            _ => Err(ConfigError::InvalidDataRate(code)),
        }
    }
}

/// Full-scale range selections (`CTRL4.FS`, bits 5:4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum FullScale {
    /// ±2g range.
    G2 = 0b00,
    /// ±4g range.
    G4 = 0b10,
    /// ±8g range.
    G8 = 0b11,
}

impl FullScale {
    /// Per-LSB sensitivity in milli-g per digit.
    pub const fn sensitivity_mg(self) -> f32 {
        match self {
            Self::G2 => 0.061,
            Self::G4 => 0.122,
            Self::G8 => 0.244,
        }
    }

    /// Returns the symmetric range limit in g.
    pub const fn range_g(self) -> u8 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
        }
    }
}

impl TryFrom<u8> for FullScale {
    type Error = ConfigError;

    /// Converts the 2-bit field code; `0b01` is reserved by the datasheet.
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0b00 => Ok(Self::G2),
            0b10 => Ok(Self::G4),
            0b11 => Ok(Self::G8),
            _ => Err(ConfigError::InvalidFullScale(code)),
        }
    }
}

/// Standard gravity in m/s² per g.
pub const STANDARD_GRAVITY: f32 = 9.806_65;

/// Physical unit reported by acceleration readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScaleUnit {
    /// Standard gravity units (g).
    G,
    /// SI units (m/s²).
    #[default]
    MetersPerSecondSquared,
}

impl ScaleUnit {
    /// Conversion factor from one milli-g to this unit.
    pub const fn per_milli_g(self) -> f32 {
        match self {
            Self::G => 0.001,
            Self::MetersPerSecondSquared => 0.009_806_65,
        }
    }
}
