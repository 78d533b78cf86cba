//! Embedded-functions configuration bank access.
//!
//! The bank shares the register address space with the user bank and is
//! mapped in through FUNC_CFG_ACCESS; every embedded write must open the
//! bank, program the register and close the bank again.

use crate::common::create_initialized_driver;
use crate::common::mock_bus::{EMB_FUNC_BANK, USER_BANK};
use lsm6dsl_rs::prelude::{EmbReg, Reg};

#[test]
fn pedo_threshold_goes_through_the_embedded_bank() {
    let (mut driver, bus) = create_initialized_driver();

    driver.pedo_threshold_set(0x17).unwrap();

    // bank opened, then closed
    assert_eq!(
        bus.writes_to(USER_BANK, Reg::FuncCfgAccess as u8),
        vec![0x80, 0x00]
    );
    assert_eq!(
        bus.register(EMB_FUNC_BANK, EmbReg::ConfigPedoThsMin as u8) & 0x1F,
        0x17
    );
}

#[test]
fn embedded_write_leaves_the_user_register_at_the_same_address_alone() {
    let (mut driver, bus) = create_initialized_driver();

    // CONFIG_PEDO_THS_MIN shares address 0x0F with WHO_AM_I
    driver.pedo_threshold_set(0x1F).unwrap();

    assert_eq!(bus.register(USER_BANK, 0x0F), 0x6A);
    assert_eq!(driver.device_id_get().unwrap(), 0x6A);
}

#[test]
fn pedo_debounce_configures_through_the_embedded_bank() {
    let (mut driver, bus) = create_initialized_driver();

    driver.pedo_debounce_steps_set(0x05).unwrap();

    assert_eq!(
        bus.register(EMB_FUNC_BANK, EmbReg::PedoDebReg as u8) & 0x07,
        0x05
    );
    assert_eq!(bus.register(USER_BANK, Reg::FuncCfgAccess as u8), 0x00);
}
