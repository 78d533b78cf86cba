use crate::Error;
use crate::register::EmbFuncState;
use bitfield_struct::bitfield;
use embedded_hal::delay::DelayNs;
use st_mem_bank_macro::register;
use st_mems_bus::BusOperation;

#[repr(u8)]
#[derive(Clone, Copy, PartialEq)]
pub enum EmbReg {
    ConfigPedoThsMin = 0x0F,
    PedoDebReg = 0x14,
}

/// CONFIG_PEDO_THS_MIN (0x0F)
///
/// Pedometer minimum threshold and internal full-scale configuration (R/W).
/// Accessible only when the embedded functions configuration bank is open.
#[register(address = EmbReg::ConfigPedoThsMin, access_type = EmbFuncState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct ConfigPedoThsMin {
    /// Minimum threshold for the internal pedometer debouncer (5 bits)
    #[bits(5)]
    pub ths_min: u8,
    /// Reserved bits, read-only
    #[bits(2, access = RO)]
    not_used0: u8,
    /// Internal full-scale used by the pedometer; 0 = ±2 g, 1 = ±4 g
    #[bits(1)]
    pub pedo_fs: u8,
}

/// PEDO_DEB_REG (0x14)
///
/// Pedometer debounce configuration register (R/W).
/// Accessible only when the embedded functions configuration bank is open.
#[register(address = EmbReg::PedoDebReg, access_type = EmbFuncState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct PedoDebReg {
    /// Debounce threshold; number of steps to start counting (3 bits)
    #[bits(3)]
    pub deb_step: u8,
    /// Debounce time window; 1 LSB = 80 ms (5 bits)
    #[bits(5)]
    pub deb_time: u8,
}
