//! Configuration primitives for the LIS2HH12 driver.

use crate::params::{DataRate, FullScale, ScaleUnit};

/// User-facing configuration for the LIS2HH12 sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Output data rate selection.
    pub odr: DataRate,
    /// Full-scale range selection.
    pub full_scale: FullScale,
    /// Unit reported by acceleration readings.
    pub unit: ScaleUnit,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Builds a configuration from raw datasheet field codes.
    ///
    /// `odr` is the 3-bit `CTRL1.ODR` code and `full_scale` the 2-bit
    /// `CTRL4.FS` code, both unshifted.
    pub fn from_codes(odr: u8, full_scale: u8, unit: ScaleUnit) -> Result<Self, ConfigError> {
        Ok(Self {
            odr: DataRate::try_from(odr)?,
            full_scale: FullScale::try_from(full_scale)?,
            unit,
        })
    }

    /// Combined multiplier from raw digits to the configured unit.
    pub fn scale_factor(&self) -> f32 {
        self.full_scale.sensitivity_mg() * self.unit.per_milli_g()
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the output data rate.
    pub fn odr(mut self, odr: DataRate) -> Self {
        self.config.odr = odr;
        self
    }

    /// Overrides the full-scale range.
    pub fn full_scale(mut self, full_scale: FullScale) -> Self {
        self.config.full_scale = full_scale;
        self
    }

    /// Overrides the reported unit.
    pub fn unit(mut self, unit: ScaleUnit) -> Self {
        self.config.unit = unit;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            odr: DataRate::Hz100,
            full_scale: FullScale::G2,
            unit: ScaleUnit::MetersPerSecondSquared,
        }
    }
}

/// Validation errors generated while converting raw field codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The 3-bit ODR code is reserved.
    InvalidDataRate(u8),
    /// The 2-bit full-scale code is reserved.
    InvalidFullScale(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = Config::new()
            .odr(DataRate::Hz800)
            .full_scale(FullScale::G4)
            .unit(ScaleUnit::G)
            .build();

        assert_eq!(config.odr, DataRate::Hz800);
        assert_eq!(config.full_scale, FullScale::G4);
        assert_eq!(config.unit, ScaleUnit::G);
    }

    #[test]
    fn defaults_match_power_on_recommendation() {
        let config = Config::default();
        assert_eq!(config.odr, DataRate::Hz100);
        assert_eq!(config.full_scale, FullScale::G2);
        assert_eq!(config.unit, ScaleUnit::MetersPerSecondSquared);
    }

    #[test]
    fn from_codes_rejects_reserved_values() {
        assert_eq!(
            Config::from_codes(0b111, 0b00, ScaleUnit::G),
            Err(ConfigError::InvalidDataRate(0b111))
        );
        assert_eq!(
            Config::from_codes(0b001, 0b01, ScaleUnit::G),
            Err(ConfigError::InvalidFullScale(0b01))
        );
        assert_eq!(
            Config::from_codes(0b101, 0b11, ScaleUnit::G).map(|c| c.full_scale),
            Ok(FullScale::G8)
        );
    }
}
