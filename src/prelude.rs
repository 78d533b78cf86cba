//! Re-exports the register map and the memory-bank types so that driver
//! code and applications can name registers and their value enums
//! directly.

pub use crate::register::{EmbFuncState, MemBank, embedded::*, main::*};
