//! Driver construction helpers shared by the test modules.

use embedded_hal::delay::DelayNs;
use lsm6dsl_rs::Lsm6dsl;

use super::mock_bus::MockBus;

/// Delay provider that returns immediately; the mock bus has no
/// real-time behavior to wait for.
pub struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// A driver over a fresh mock bus, plus a handle for inspecting it.
pub fn create_mock_driver() -> (Lsm6dsl<MockBus, NoDelay>, MockBus) {
    let bus = MockBus::new();
    let handle = bus.clone();

    (Lsm6dsl::from_bus(bus, NoDelay), handle)
}

/// A driver already taken through the boot sequence, with the operation
/// log cleared so tests only see their own transactions.
pub fn create_initialized_driver() -> (Lsm6dsl<MockBus, NoDelay>, MockBus) {
    let (mut driver, bus) = create_mock_driver();
    driver.init_set().unwrap();
    bus.clear_operations();

    (driver, bus)
}
