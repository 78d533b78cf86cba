pub mod embedded;
pub mod main;

use crate::{Error, Lsm6dsl};

use derive_more::TryFrom;
use embedded_hal::delay::DelayNs;
use st_mem_bank_macro::mem_bank;
use st_mems_bus::{BusOperation, MemBankFunctions};

/// Memory banks available in the device.
///
/// The embedded functions configuration registers share the address space
/// of the user registers and are exposed by setting the FUNC_CFG_EN bit of
/// FUNC_CFG_ACCESS.
#[repr(u8)]
#[derive(Default, TryFrom, Clone, Copy, PartialEq, Debug)]
#[try_from(repr)]
#[mem_bank(Lsm6dsl, generics = 2)]
pub enum MemBank {
    /// User register bank (default).
    #[default]
    #[main]
    UserMemBank = 0x0,
    /// Embedded functions configuration bank (bank A).
    #[state(EmbFuncState, fn_name = "operate_over_emb")]
    EmbFuncMemBank = 0x1,
}
