#![cfg_attr(not(test), no_std)]

#[macro_use]
mod log;

mod error;

pub mod config;
pub mod device;
pub mod interface;
pub mod params;
pub mod registers;

pub use crate::config::Config;
pub use crate::device::{Lis2hh12, SPI_CLOCK_HZ, SPI_MODE};
pub use crate::error::{Error, Result};
