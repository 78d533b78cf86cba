#![no_std]
#![doc = include_str!("../README.md")]

pub mod driver;
pub mod prelude;
pub mod register;
pub mod sensor;

pub use driver::*;
pub use sensor::{Accelerometer, Feature, Gyroscope, MotionEvents};

/// Convert raw data from the ±2 g full scale to mg.
///
/// # Arguments
///
/// * `lsb`: The value in LSB to convert.
pub fn from_fs2g_to_mg(lsb: i16) -> f32 {
    lsb as f32 * 0.061
}

/// Convert raw data from the ±4 g full scale to mg.
///
/// # Arguments
///
/// * `lsb`: The value in LSB to convert.
pub fn from_fs4g_to_mg(lsb: i16) -> f32 {
    lsb as f32 * 0.122
}

/// Convert raw data from the ±8 g full scale to mg.
///
/// # Arguments
///
/// * `lsb`: The value in LSB to convert.
pub fn from_fs8g_to_mg(lsb: i16) -> f32 {
    lsb as f32 * 0.244
}

/// Convert raw data from the ±16 g full scale to mg.
///
/// # Arguments
///
/// * `lsb`: The value in LSB to convert.
pub fn from_fs16g_to_mg(lsb: i16) -> f32 {
    lsb as f32 * 0.488
}

/// Convert raw data from the ±125 dps full scale to mdps.
///
/// # Arguments
///
/// * `lsb`: The value in LSB to convert.
pub fn from_fs125dps_to_mdps(lsb: i16) -> f32 {
    lsb as f32 * 4.375
}

/// Convert raw data from the ±245 dps full scale to mdps.
///
/// # Arguments
///
/// * `lsb`: The value in LSB to convert.
pub fn from_fs245dps_to_mdps(lsb: i16) -> f32 {
    lsb as f32 * 8.75
}

/// Convert raw data from the ±500 dps full scale to mdps.
///
/// # Arguments
///
/// * `lsb`: The value in LSB to convert.
pub fn from_fs500dps_to_mdps(lsb: i16) -> f32 {
    lsb as f32 * 17.50
}

/// Convert raw data from the ±1000 dps full scale to mdps.
///
/// # Arguments
///
/// * `lsb`: The value in LSB to convert.
pub fn from_fs1000dps_to_mdps(lsb: i16) -> f32 {
    lsb as f32 * 35.0
}

/// Convert raw data from the ±2000 dps full scale to mdps.
///
/// # Arguments
///
/// * `lsb`: The value in LSB to convert.
pub fn from_fs2000dps_to_mdps(lsb: i16) -> f32 {
    lsb as f32 * 70.0
}

/// Convert the temperature output from LSB to Celsius.
///
/// # Arguments
///
/// * `lsb`: The value in LSB to convert.
pub fn from_lsb_to_celsius(lsb: i16) -> f32 {
    (lsb as f32 / 256.0) + 25.0
}

#[repr(u8)]
#[derive(Clone, Copy, PartialEq)]
pub enum I2CAddress {
    /// I²C address when the SA0 pin is low.
    I2cAddL = 0x6A,

    /// I²C address when the SA0 pin is high.
    I2cAddH = 0x6B,
}

///
/// LSM6DSL Device ID.
///
pub const LSM6DSL_ID: u8 = 0x6A;

pub const PROPERTY_ENABLE: u8 = 1;
pub const PROPERTY_DISABLE: u8 = 0;
