//! Raw sample decoding and sensitivity scaling.

use crate::common::mock_bus::USER_BANK;
use crate::common::{BusFault, create_initialized_driver};
use lsm6dsl_rs::prelude::Reg;
use lsm6dsl_rs::{Error, from_lsb_to_celsius};

#[test]
fn axis_bytes_decode_little_endian_signed() {
    let (mut driver, bus) = create_initialized_driver();
    bus.set_registers(
        USER_BANK,
        Reg::OutxLXl as u8,
        &[0x10, 0x00, 0x00, 0x01, 0xFF, 0xFF],
    );

    assert_eq!(driver.acceleration_raw_get().unwrap(), [16, 256, -1]);
}

#[test]
fn acceleration_scales_by_the_active_full_scale() {
    let (mut driver, bus) = create_initialized_driver();
    // (1000, -1000, 16384) LSB
    bus.set_registers(
        USER_BANK,
        Reg::OutxLXl as u8,
        &[0xE8, 0x03, 0x18, 0xFC, 0x00, 0x40],
    );

    // ±2 g after init: 0.061 mg/LSB, truncated to integer mg
    assert_eq!(driver.acceleration_mg_get().unwrap(), [61, -61, 999]);
}

#[test]
fn sensitivity_follows_a_range_changed_behind_the_driver() {
    let (mut driver, bus) = create_initialized_driver();
    bus.set_registers(
        USER_BANK,
        Reg::OutxLXl as u8,
        &[0xE8, 0x03, 0x18, 0xFC, 0x00, 0x40],
    );

    // A feature-arming sequence may have reprogrammed the full scale;
    // the sensitivity must come from the device, not from a cache.
    bus.set_register(USER_BANK, Reg::Ctrl1Xl as u8, 0x04); // ±16 g

    assert_eq!(driver.acceleration_mg_get().unwrap(), [488, -488, 7995]);
}

#[test]
fn angular_rate_scales_by_the_active_full_scale() {
    let (mut driver, bus) = create_initialized_driver();
    // (100, -100, 1000) LSB
    bus.set_registers(
        USER_BANK,
        Reg::OutxLG as u8,
        &[0x64, 0x00, 0x9C, 0xFF, 0xE8, 0x03],
    );

    // 2000 dps after init: 70 mdps/LSB
    assert_eq!(driver.angular_rate_mdps_get().unwrap(), [7000, -7000, 70000]);

    // The FS_125 bit takes precedence over the full-scale field
    bus.set_register(USER_BANK, Reg::Ctrl2G as u8, 0x02);
    assert_eq!(driver.angular_rate_mdps_get().unwrap(), [437, -437, 4375]);
}

#[test]
fn reserved_rate_code_reads_back_as_an_error() {
    let (mut driver, bus) = create_initialized_driver();

    bus.set_register(USER_BANK, Reg::Ctrl1Xl as u8, 0xB0);
    assert_eq!(driver.xl_data_rate_get(), Err(Error::UnexpectedValue));

    bus.set_register(USER_BANK, Reg::Ctrl2G as u8, 0xF0);
    assert_eq!(driver.gy_data_rate_get(), Err(Error::UnexpectedValue));
}

#[test]
fn transport_failure_aborts_a_sample_read() {
    let (mut driver, bus) = create_initialized_driver();
    bus.fail_read_from(Some(Reg::OutxLXl as u8));

    assert_eq!(driver.acceleration_raw_get(), Err(Error::Bus(BusFault)));
}

#[test]
fn temperature_decodes_and_converts() {
    let (mut driver, bus) = create_initialized_driver();
    bus.set_registers(USER_BANK, Reg::OutTempL as u8, &[0x00, 0x02]); // 512 LSB

    let raw = driver.temperature_raw_get().unwrap();

    assert_eq!(raw, 512);
    assert_eq!(from_lsb_to_celsius(raw), 27.0);
}

#[test]
fn data_ready_flags_track_the_status_register() {
    let (mut driver, bus) = create_initialized_driver();

    assert_eq!(driver.xl_flag_data_ready_get().unwrap(), 0);

    bus.set_register(USER_BANK, Reg::StatusReg as u8, 0x07);

    assert_eq!(driver.xl_flag_data_ready_get().unwrap(), 1);
    assert_eq!(driver.gy_flag_data_ready_get().unwrap(), 1);
    assert_eq!(driver.temp_flag_data_ready_get().unwrap(), 1);
}
