//! Mock register bus for host-side driver tests.
//!
//! Emulates the device end of the serial interface: a byte store per
//! (bank, address) with auto-increment across multi-byte transactions, an
//! operation log, and failure injection keyed by register address. The
//! embedded-functions configuration bank is selected by bit 7 of
//! FUNC_CFG_ACCESS, exactly as on the part; FUNC_CFG_ACCESS itself stays
//! reachable from either bank.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use st_mems_bus::BusOperation;

const FUNC_CFG_ACCESS: u8 = 0x01;
const WHO_AM_I: u8 = 0x0F;

/// User register bank.
pub const USER_BANK: u8 = 0;
/// Embedded functions configuration bank.
pub const EMB_FUNC_BANK: u8 = 1;

/// One bus transaction as seen by the device.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Read { bank: u8, address: u8, len: usize },
    Write { bank: u8, address: u8, value: u8 },
}

/// Error returned by an injected bus failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

#[derive(Debug, Default)]
struct BusState {
    registers: HashMap<(u8, u8), u8>,
    operations: Vec<Operation>,
    fail_write_to: Option<u8>,
    fail_read_from: Option<u8>,
    last_address: u8,
}

impl BusState {
    fn bank_for(&self, address: u8) -> u8 {
        if address == FUNC_CFG_ACCESS {
            return USER_BANK;
        }
        self.registers
            .get(&(USER_BANK, FUNC_CFG_ACCESS))
            .copied()
            .unwrap_or(0)
            >> 7
    }
}

/// Shared-handle mock bus; clones observe the same register file, so the
/// test keeps one handle while the driver owns the other.
#[derive(Clone)]
pub struct MockBus {
    state: Rc<RefCell<BusState>>,
}

impl MockBus {
    pub fn new() -> Self {
        let mut state = BusState::default();
        state.registers.insert((USER_BANK, WHO_AM_I), 0x6A);

        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    pub fn register(&self, bank: u8, address: u8) -> u8 {
        self.state
            .borrow()
            .registers
            .get(&(bank, address))
            .copied()
            .unwrap_or(0)
    }

    pub fn set_register(&self, bank: u8, address: u8, value: u8) {
        self.state
            .borrow_mut()
            .registers
            .insert((bank, address), value);
    }

    /// Load a block of consecutive registers, e.g. output data.
    pub fn set_registers(&self, bank: u8, address: u8, values: &[u8]) {
        let mut state = self.state.borrow_mut();
        for (i, value) in values.iter().enumerate() {
            state.registers.insert((bank, address + i as u8), *value);
        }
    }

    pub fn operations(&self) -> Vec<Operation> {
        self.state.borrow().operations.clone()
    }

    pub fn clear_operations(&self) {
        self.state.borrow_mut().operations.clear();
    }

    /// Every value written to one register, in order.
    #[allow(dead_code)]
    pub fn writes_to(&self, bank: u8, address: u8) -> Vec<u8> {
        self.operations()
            .iter()
            .filter_map(|op| match op {
                Operation::Write {
                    bank: b,
                    address: a,
                    value,
                } if *b == bank && *a == address => Some(*value),
                _ => None,
            })
            .collect()
    }

    /// Fail every write transaction addressed to `address` until cleared.
    #[allow(dead_code)]
    pub fn fail_write_to(&self, address: Option<u8>) {
        self.state.borrow_mut().fail_write_to = address;
    }

    /// Fail every read transaction starting at `address` until cleared.
    #[allow(dead_code)]
    pub fn fail_read_from(&self, address: Option<u8>) {
        self.state.borrow_mut().fail_read_from = address;
    }

    fn transfer_in(&self, address: u8, rbuf: &mut [u8]) -> Result<(), BusFault> {
        let mut state = self.state.borrow_mut();
        state.last_address = address;

        if state.fail_read_from == Some(address) {
            return Err(BusFault);
        }

        let bank = state.bank_for(address);
        for (i, slot) in rbuf.iter_mut().enumerate() {
            *slot = state
                .registers
                .get(&(bank, address + i as u8))
                .copied()
                .unwrap_or(0);
        }
        state.operations.push(Operation::Read {
            bank,
            address,
            len: rbuf.len(),
        });

        Ok(())
    }
}

impl Default for MockBus {
    fn default() -> Self {
        Self::new()
    }
}

impl BusOperation for MockBus {
    type Error = BusFault;

    fn read_bytes(&mut self, rbuf: &mut [u8]) -> Result<(), Self::Error> {
        let address = self.state.borrow().last_address;
        self.transfer_in(address, rbuf)
    }

    fn write_bytes(&mut self, wbuf: &[u8]) -> Result<(), Self::Error> {
        let address = wbuf[0];
        let mut state = self.state.borrow_mut();
        state.last_address = address;

        if state.fail_write_to == Some(address) {
            return Err(BusFault);
        }

        for (i, value) in wbuf[1..].iter().enumerate() {
            let reg = address + i as u8;
            let bank = state.bank_for(reg);
            state.operations.push(Operation::Write {
                bank,
                address: reg,
                value: *value,
            });
            state.registers.insert((bank, reg), *value);
        }

        Ok(())
    }

    fn write_byte_read_bytes(
        &mut self,
        wbuf: &[u8; 1],
        rbuf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.transfer_in(wbuf[0], rbuf)
    }
}
