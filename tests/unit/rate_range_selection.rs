//! Output data rate and full-scale selection rules.
//!
//! Requests are in physical units; the driver picks the smallest
//! supported setting not below the request and clamps at the table
//! maximum.

use crate::common::create_initialized_driver;
use crate::common::mock_bus::USER_BANK;
use lsm6dsl_rs::prelude::Reg;

#[test]
fn rate_request_rounds_up_to_next_supported() {
    let (mut driver, bus) = create_initialized_driver();
    driver.xl_enable().unwrap();

    driver.xl_data_rate_set(100.0).unwrap();

    assert_eq!(bus.register(USER_BANK, Reg::Ctrl1Xl as u8) >> 4, 0x4);
    assert_eq!(driver.xl_data_rate_get().unwrap(), 104.0);
}

#[test]
fn rate_request_above_table_clamps_to_maximum() {
    let (mut driver, bus) = create_initialized_driver();
    driver.xl_enable().unwrap();

    driver.xl_data_rate_set(7000.0).unwrap();

    assert_eq!(bus.register(USER_BANK, Reg::Ctrl1Xl as u8) >> 4, 0xA);
    assert_eq!(driver.xl_data_rate_get().unwrap(), 6660.0);
}

#[test]
fn exact_rate_request_is_kept() {
    let (mut driver, _bus) = create_initialized_driver();
    driver.xl_enable().unwrap();

    driver.xl_data_rate_set(208.0).unwrap();

    assert_eq!(driver.xl_data_rate_get().unwrap(), 208.0);
}

#[test]
fn rate_selection_applies_to_the_gyroscope() {
    let (mut driver, bus) = create_initialized_driver();
    driver.gy_enable().unwrap();

    driver.gy_data_rate_set(50.0).unwrap();

    assert_eq!(bus.register(USER_BANK, Reg::Ctrl2G as u8) >> 4, 0x3);
    assert_eq!(driver.gy_data_rate_get().unwrap(), 52.0);
}

#[test]
fn rate_set_while_disabled_defers_the_register_write() {
    let (mut driver, bus) = create_initialized_driver();

    driver.xl_data_rate_set(208.0).unwrap();
    assert_eq!(bus.register(USER_BANK, Reg::Ctrl1Xl as u8) >> 4, 0x0);

    driver.xl_enable().unwrap();
    assert_eq!(bus.register(USER_BANK, Reg::Ctrl1Xl as u8) >> 4, 0x5);
}

#[test]
fn accel_range_selection_is_monotonic() {
    let (mut driver, _bus) = create_initialized_driver();

    let mut previous = 0.0;
    for request in [1.0, 2.0, 3.0, 5.0, 9.0, 16.0, 50.0] {
        driver.xl_full_scale_set(request).unwrap();
        let selected = driver.xl_full_scale_get().unwrap();

        assert!(selected >= request || selected == 16.0);
        assert!(selected >= previous);
        previous = selected;
    }
}

#[test]
fn accel_range_rounds_up_and_clamps() {
    let (mut driver, _bus) = create_initialized_driver();

    driver.xl_full_scale_set(3.0).unwrap();
    assert_eq!(driver.xl_full_scale_get().unwrap(), 4.0);

    driver.xl_full_scale_set(100.0).unwrap();
    assert_eq!(driver.xl_full_scale_get().unwrap(), 16.0);
}

#[test]
fn gyro_range_rounds_up_and_clamps() {
    let (mut driver, _bus) = create_initialized_driver();

    driver.gy_full_scale_set(300.0).unwrap();
    assert_eq!(driver.gy_full_scale_get().unwrap(), 500.0);

    driver.gy_full_scale_set(5000.0).unwrap();
    assert_eq!(driver.gy_full_scale_get().unwrap(), 2000.0);
}

#[test]
fn gyro_range_at_or_below_125_uses_the_dedicated_mode() {
    let (mut driver, bus) = create_initialized_driver();

    driver.gy_full_scale_set(100.0).unwrap();

    assert_eq!(bus.register(USER_BANK, Reg::Ctrl2G as u8) & 0x02, 0x02);
    assert_eq!(driver.gy_full_scale_get().unwrap(), 125.0);
}

#[test]
fn range_writes_are_not_deferred_while_disabled() {
    let (mut driver, bus) = create_initialized_driver();

    driver.xl_full_scale_set(8.0).unwrap();

    assert_eq!(bus.register(USER_BANK, Reg::Ctrl1Xl as u8) >> 2 & 0x3, 0x3);
}
