//! Event decoding against the interrupt routing configuration.
//!
//! A source bit counts as an event only when the matching routing bit is
//! set; hardware asserts source bits even for functions that were never
//! armed.

use crate::common::create_initialized_driver;
use crate::common::mock_bus::USER_BANK;
use lsm6dsl_rs::prelude::Reg;

#[test]
fn source_bit_without_routing_reports_no_event() {
    let (mut driver, bus) = create_initialized_driver();
    bus.set_register(USER_BANK, Reg::WakeUpSrc as u8, 0x20); // FF_IA

    let events = driver.event_status_get().unwrap();

    assert!(!events.free_fall);
}

#[test]
fn source_and_routing_bits_together_report_the_event() {
    let (mut driver, bus) = create_initialized_driver();
    bus.set_register(USER_BANK, Reg::WakeUpSrc as u8, 0x20); // FF_IA
    bus.set_register(USER_BANK, Reg::Md1Cfg as u8, 0x10); // INT1_FF

    let events = driver.event_status_get().unwrap();

    assert!(events.free_fall);
    assert!(!events.wake_up);
    assert!(!events.single_tap);
    assert!(!events.double_tap);
    assert!(!events.six_d_orientation);
    assert!(!events.step_detected);
    assert!(!events.tilt);
}

#[test]
fn each_feature_checks_its_own_routing_bit() {
    let (mut driver, bus) = create_initialized_driver();

    // Every source bit asserted, nothing routed
    bus.set_register(USER_BANK, Reg::WakeUpSrc as u8, 0x28); // FF_IA | WU_IA
    bus.set_register(USER_BANK, Reg::TapSrc as u8, 0x30); // SINGLE | DOUBLE
    bus.set_register(USER_BANK, Reg::D6dSrc as u8, 0x40); // D6D_IA
    bus.set_register(USER_BANK, Reg::FuncSrc1 as u8, 0x30); // STEP | TILT

    let events = driver.event_status_get().unwrap();
    assert_eq!(events, Default::default());

    // Route them one register at a time
    bus.set_register(USER_BANK, Reg::Md1Cfg as u8, 0x5E); // tilt|6d|double|ff|single
    bus.set_register(USER_BANK, Reg::Md2Cfg as u8, 0x20); // wake-up on INT2
    bus.set_register(USER_BANK, Reg::Int1Ctrl as u8, 0x80); // step detector

    let events = driver.event_status_get().unwrap();

    assert!(events.free_fall);
    assert!(events.wake_up);
    assert!(events.single_tap);
    assert!(events.double_tap);
    assert!(events.six_d_orientation);
    assert!(events.step_detected);
    assert!(events.tilt);
}

#[test]
fn wake_up_is_routed_on_int2_not_int1() {
    let (mut driver, bus) = create_initialized_driver();
    bus.set_register(USER_BANK, Reg::WakeUpSrc as u8, 0x08); // WU_IA
    bus.set_register(USER_BANK, Reg::Md1Cfg as u8, 0x20); // INT1_WU, wrong pin

    assert!(!driver.event_status_get().unwrap().wake_up);

    bus.set_register(USER_BANK, Reg::Md2Cfg as u8, 0x20); // INT2_WU

    assert!(driver.event_status_get().unwrap().wake_up);
}

#[test]
fn status_is_recomputed_from_live_registers() {
    let (mut driver, bus) = create_initialized_driver();
    driver.free_fall_enable().unwrap();

    bus.set_register(USER_BANK, Reg::WakeUpSrc as u8, 0x20);
    assert!(driver.event_status_get().unwrap().free_fall);

    bus.set_register(USER_BANK, Reg::WakeUpSrc as u8, 0x00);
    assert!(!driver.event_status_get().unwrap().free_fall);
}

#[test]
fn disarming_stops_reporting_a_still_asserted_source() {
    let (mut driver, bus) = create_initialized_driver();
    driver.free_fall_enable().unwrap();
    bus.set_register(USER_BANK, Reg::WakeUpSrc as u8, 0x20);
    assert!(driver.event_status_get().unwrap().free_fall);

    driver.free_fall_disable().unwrap();

    assert!(!driver.event_status_get().unwrap().free_fall);
}

#[test]
fn orientation_source_register_is_readable() {
    let (mut driver, bus) = create_initialized_driver();
    bus.set_register(USER_BANK, Reg::D6dSrc as u8, 0x42); // D6D_IA + XH

    let src = driver.orientation_src_get().unwrap();

    assert_eq!(src.d6d_ia(), 1);
    assert_eq!(src.xh(), 1);
    assert_eq!(src.xl(), 0);
}
