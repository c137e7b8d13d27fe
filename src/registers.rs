//! Register map definitions for the LIS2HH12 accelerometer.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::{DataRate, FullScale};

/// Register address of `TEMP_L`.
pub const REG_TEMP_L: u8 = 0x0B;
/// Register address of `TEMP_H`.
pub const REG_TEMP_H: u8 = 0x0C;
/// Register address of `WHO_AM_I`.
pub const REG_WHO_AM_I: u8 = 0x0F;
/// Register address of `CTRL1`.
pub const REG_CTRL1: u8 = 0x20;
/// Register address of `CTRL2`.
pub const REG_CTRL2: u8 = 0x21;
/// Register address of `CTRL3`.
pub const REG_CTRL3: u8 = 0x22;
/// Register address of `CTRL4`.
pub const REG_CTRL4: u8 = 0x23;
/// Register address of `CTRL5`.
pub const REG_CTRL5: u8 = 0x24;
/// Register address of `CTRL6`.
pub const REG_CTRL6: u8 = 0x25;
/// Register address of `CTRL7`.
pub const REG_CTRL7: u8 = 0x26;
/// Register address of `STATUS`.
pub const REG_STATUS: u8 = 0x27;
/// Register address of `OUT_X_L`.
pub const REG_OUT_X_L: u8 = 0x28;
/// Register address of `OUT_X_H`.
pub const REG_OUT_X_H: u8 = 0x29;
/// Register address of `OUT_Y_L`.
pub const REG_OUT_Y_L: u8 = 0x2A;
/// Register address of `OUT_Y_H`.
pub const REG_OUT_Y_H: u8 = 0x2B;
/// Register address of `OUT_Z_L`.
pub const REG_OUT_Z_L: u8 = 0x2C;
/// Register address of `OUT_Z_H`.
pub const REG_OUT_Z_H: u8 = 0x2D;

/// Fixed `WHO_AM_I` content.
pub const EXPECTED_WHO_AM_I: u8 = 0x41;

// Power-up sequence values, written in this order with a settle delay after CTRL5.
/// `CTRL5` power-up value (soft reset, active-low open-drain interrupts).
pub const CTRL5_POWER_UP: u8 = 0x43;
/// `CTRL4` power-up value (address auto-increment, I²C disabled).
pub const CTRL4_POWER_UP: u8 = 0x06;
/// `CTRL2` power-up value (high-pass cutoff selection).
pub const CTRL2_POWER_UP: u8 = 0x40;
/// `CTRL1` power-up value (high resolution, 100 Hz, block data update, XYZ enabled).
pub const CTRL1_POWER_UP: u8 = 0xBF;

/// `CTRL1.ODR` field mask.
pub const ODR_MASK: u8 = 0b0111_0000;
/// `CTRL4.FS` field mask.
pub const FS_MASK: u8 = 0b0011_0000;

/// Access permissions encoded for each register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAccess {
    /// Read-only register.
    ReadOnly,
    /// Write-only register.
    WriteOnly,
    /// Read/write register.
    ReadWrite,
}

/// Minimal metadata exposed by every register value type.
pub trait Register {
    /// Raw storage backing the register payload.
    type Raw: Copy;
    /// Register address as documented in the datasheet.
    const ADDRESS: u8;
    /// Access permission classification.
    const ACCESS: RegisterAccess;
    /// Optional reset/default value defined by the datasheet.
    const RESET_VALUE: Option<Self::Raw>;
}

/// Bitfield representation of the `CTRL1` register (address `0x20`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ctrl1 {
    // X-axis enable (bit 0).
    pub xen: bool,
    // Y-axis enable (bit 1).
    pub yen: bool,
    // Z-axis enable (bit 2).
    pub zen: bool,
    // Block data update (bit 3).
    pub bdu: bool,
    // Output data rate selection (bits 6:4).
    pub odr: DataRate,
    // High resolution mode (bit 7).
    pub hr: bool,
}

impl From<u8> for Ctrl1 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Ctrl1> for u8 {
    fn from(value: Ctrl1) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `CTRL4` register (address `0x23`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ctrl4 {
    // SPI 3-wire mode (bit 0).
    pub sim: bool,
    // I²C interface disable (bit 1).
    pub i2c_disable: bool,
    // Register address auto-increment on multi-byte access (bit 2).
    pub if_add_inc: bool,
    // Anti-aliasing bandwidth follows ODR (bit 3).
    pub bw_scale_odr: bool,
    // Full-scale selection (bits 5:4).
    pub fs: FullScale,
    // Anti-aliasing filter bandwidth (bits 7:6).
    pub bw: B2,
}

impl From<u8> for Ctrl4 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Ctrl4> for u8 {
    fn from(value: Ctrl4) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `STATUS` register (address `0x27`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    // New X-axis data available (bit 0).
    pub xda: bool,
    // New Y-axis data available (bit 1).
    pub yda: bool,
    // New Z-axis data available (bit 2).
    pub zda: bool,
    // New data available on all axes (bit 3).
    pub zyxda: bool,
    // X-axis data overrun (bit 4).
    pub xor: bool,
    // Y-axis data overrun (bit 5).
    pub yor: bool,
    // Z-axis data overrun (bit 6).
    pub zor: bool,
    // Overrun on any axis (bit 7).
    pub zyxor: bool,
}

impl From<u8> for Status {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Status> for u8 {
    fn from(value: Status) -> Self {
        value.into_bytes()[0]
    }
}

impl Register for Ctrl1 {
    type Raw = u8;
    const ADDRESS: u8 = REG_CTRL1;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x07);
}

impl Register for Ctrl4 {
    type Raw = u8;
    const ADDRESS: u8 = REG_CTRL4;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x04);
}

impl Register for Status {
    type Raw = u8;
    const ADDRESS: u8 = REG_STATUS;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: Option<Self::Raw> = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl1_odr_occupies_bits_6_to_4() {
        let ctrl1 = Ctrl1::new().with_odr(DataRate::Hz800);
        assert_eq!(u8::from(ctrl1), 0b0110_0000);
        assert_eq!(u8::from(ctrl1) & !ODR_MASK, 0);
    }

    #[test]
    fn ctrl1_power_up_value_decodes() {
        let ctrl1 = Ctrl1::from(CTRL1_POWER_UP);
        assert!(ctrl1.hr());
        assert!(ctrl1.bdu());
        assert!(ctrl1.xen() && ctrl1.yen() && ctrl1.zen());
        assert_eq!(ctrl1.odr(), DataRate::Hz100);
    }

    #[test]
    fn ctrl4_fs_occupies_bits_5_to_4() {
        let ctrl4 = Ctrl4::new().with_fs(FullScale::G8);
        assert_eq!(u8::from(ctrl4), FS_MASK);

        let ctrl4 = Ctrl4::from(CTRL4_POWER_UP).with_fs(FullScale::G4);
        assert_eq!(u8::from(ctrl4), 0b0010_0110);
        assert!(ctrl4.if_add_inc());
        assert!(ctrl4.i2c_disable());
    }

    #[test]
    fn status_layout_matches_datasheet() {
        let status = Status::from(0b1000_1000);
        assert!(status.zyxda());
        assert!(status.zyxor());
        assert!(!status.xda());
        assert!(!status.zor());
    }
}
