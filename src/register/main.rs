use crate::Error;
use crate::Lsm6dsl;
use bitfield_struct::bitfield;
use core::fmt::Debug;
use derive_more::TryFrom;
use embedded_hal::delay::DelayNs;
use st_mem_bank_macro::{named_register, register};
use st_mems_bus::BusOperation;

#[repr(u8)]
#[derive(Clone, Copy, PartialEq)]
pub enum Reg {
    FuncCfgAccess = 0x01,
    FifoCtrl5 = 0x0A,
    Int1Ctrl = 0x0D,
    Int2Ctrl = 0x0E,
    WhoAmI = 0x0F,
    Ctrl1Xl = 0x10,
    Ctrl2G = 0x11,
    Ctrl3C = 0x12,
    Ctrl10C = 0x19,
    WakeUpSrc = 0x1B,
    TapSrc = 0x1C,
    D6dSrc = 0x1D,
    StatusReg = 0x1E,
    OutTempL = 0x20,
    OutTempH = 0x21,
    OutxLG = 0x22,
    OutxHG = 0x23,
    OutyLG = 0x24,
    OutyHG = 0x25,
    OutzLG = 0x26,
    OutzHG = 0x27,
    OutxLXl = 0x28,
    OutxHXl = 0x29,
    OutyLXl = 0x2A,
    OutyHXl = 0x2B,
    OutzLXl = 0x2C,
    OutzHXl = 0x2D,
    StepCounterL = 0x4B,
    StepCounterH = 0x4C,
    FuncSrc1 = 0x53,
    TapCfg = 0x58,
    TapThs6d = 0x59,
    IntDur2 = 0x5A,
    WakeUpThs = 0x5B,
    WakeUpDur = 0x5C,
    FreeFall = 0x5D,
    Md1Cfg = 0x5E,
    Md2Cfg = 0x5F,
}

/// FUNC_CFG_ACCESS (0x01)
///
/// Embedded functions configuration register access (R/W)
#[register(address = Reg::FuncCfgAccess, access_type = Lsm6dsl, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct FuncCfgAccess {
    /// Reserved bits, read-only
    #[bits(5, access = RO)]
    not_used0: u8,
    /// Enables access to the embedded functions configuration bank B registers
    #[bits(1)]
    pub func_cfg_en_b: u8,
    /// Reserved bit, read-only
    #[bits(1, access = RO)]
    not_used1: u8,
    /// Enables access to the embedded functions configuration bank A registers
    #[bits(1)]
    pub func_cfg_en: u8,
}

/// FIFO_CTRL5 (0x0A)
///
/// FIFO control register 5 (R/W)
#[register(address = Reg::FifoCtrl5, access_type = Lsm6dsl, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct FifoCtrl5 {
    /// FIFO mode selection (3 bits); 000 = bypass
    #[bits(3)]
    pub fifo_mode: u8,
    /// FIFO output data rate selection (4 bits)
    #[bits(4)]
    pub odr_fifo: u8,
    /// Reserved bit, read-only
    #[bits(1, access = RO)]
    not_used0: u8,
}

/// INT1_CTRL (0x0D)
///
/// INT1 pin control register (R/W)
#[register(address = Reg::Int1Ctrl, access_type = Lsm6dsl, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Int1Ctrl {
    /// Accelerometer data-ready on INT1 pin
    #[bits(1)]
    pub int1_drdy_xl: u8,
    /// Gyroscope data-ready on INT1 pin
    #[bits(1)]
    pub int1_drdy_g: u8,
    /// Boot status on INT1 pin
    #[bits(1)]
    pub int1_boot: u8,
    /// FIFO threshold interrupt on INT1 pin
    #[bits(1)]
    pub int1_fth: u8,
    /// FIFO overrun interrupt on INT1 pin
    #[bits(1)]
    pub int1_fifo_ovr: u8,
    /// FIFO full flag interrupt on INT1 pin
    #[bits(1)]
    pub int1_full_flag: u8,
    /// Significant motion interrupt on INT1 pin
    #[bits(1)]
    pub int1_sign_mot: u8,
    /// Step detector interrupt on INT1 pin
    #[bits(1)]
    pub int1_step_detector: u8,
}

/// INT2_CTRL (0x0E)
///
/// INT2 pin control register (R/W)
#[register(address = Reg::Int2Ctrl, access_type = Lsm6dsl, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Int2Ctrl {
    /// Accelerometer data-ready on INT2 pin
    #[bits(1)]
    pub int2_drdy_xl: u8,
    /// Gyroscope data-ready on INT2 pin
    #[bits(1)]
    pub int2_drdy_g: u8,
    /// Temperature data-ready on INT2 pin
    #[bits(1)]
    pub int2_drdy_temp: u8,
    /// FIFO threshold interrupt on INT2 pin
    #[bits(1)]
    pub int2_fth: u8,
    /// FIFO overrun interrupt on INT2 pin
    #[bits(1)]
    pub int2_fifo_ovr: u8,
    /// FIFO full flag interrupt on INT2 pin
    #[bits(1)]
    pub int2_full_flag: u8,
    /// Step counter overflow interrupt on INT2 pin
    #[bits(1)]
    pub int2_step_count_ov: u8,
    /// Step counter delta-time interrupt on INT2 pin
    #[bits(1)]
    pub int2_step_delta: u8,
}

/// WHO_AM_I (0x0F)
///
/// Read-only device identification register; fixed value 0x6A.
#[register(address = Reg::WhoAmI, access_type = Lsm6dsl, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct WhoAmI {
    /// Device ID; fixed value 0x6A.
    #[bits(8, default = 0x6A)]
    pub id: u8,
}

/// CTRL1_XL (0x10)
///
/// Accelerometer control register 1 (R/W)
#[register(address = Reg::Ctrl1Xl, access_type = Lsm6dsl, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Ctrl1Xl {
    /// Accelerometer analog chain bandwidth selection
    #[bits(1)]
    pub bw0_xl: u8,
    /// Accelerometer digital LPF1 bandwidth selection
    #[bits(1)]
    pub lpf1_bw_sel: u8,
    /// Accelerometer full-scale selection (2 bits)
    #[bits(2)]
    pub fs_xl: u8,
    /// Accelerometer output data rate and power mode selection (4 bits)
    #[bits(4)]
    pub odr_xl: u8,
}

/// CTRL2_G (0x11)
///
/// Gyroscope control register 2 (R/W)
#[register(address = Reg::Ctrl2G, access_type = Lsm6dsl, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Ctrl2G {
    /// Reserved bit, read-only
    #[bits(1, access = RO)]
    not_used0: u8,
    /// Gyroscope full-scale at 125 dps
    #[bits(1)]
    pub fs_125: u8,
    /// Gyroscope full-scale selection (2 bits)
    #[bits(2)]
    pub fs_g: u8,
    /// Gyroscope output data rate selection (4 bits)
    #[bits(4)]
    pub odr_g: u8,
}

/// CTRL3_C (0x12)
///
/// Control register 3 (R/W)
#[register(address = Reg::Ctrl3C, access_type = Lsm6dsl, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Ctrl3C {
    /// Software reset; restores the default values in the user registers
    #[bits(1)]
    pub sw_reset: u8,
    /// Big/little endian data selection
    #[bits(1)]
    pub ble: u8,
    /// Register address automatically incremented during a multiple-byte access
    #[bits(1)]
    pub if_inc: u8,
    /// SPI serial interface mode selection
    #[bits(1)]
    pub sim: u8,
    /// Push-pull / open-drain selection on INT1 and INT2 pads
    #[bits(1)]
    pub pp_od: u8,
    /// Interrupt activation level; 0 = active high
    #[bits(1)]
    pub h_lactive: u8,
    /// Block data update; output registers not updated until MSB and LSB have been read
    #[bits(1)]
    pub bdu: u8,
    /// Reboot memory content
    #[bits(1)]
    pub boot: u8,
}

/// CTRL10_C (0x19)
///
/// Control register 10; embedded functions enable (R/W)
#[register(address = Reg::Ctrl10C, access_type = Lsm6dsl, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Ctrl10C {
    /// Enables significant motion detection
    #[bits(1)]
    pub sign_motion_en: u8,
    /// Resets the step counter
    #[bits(1)]
    pub pedo_rst_step: u8,
    /// Enables the embedded functions (pedometer, tilt, significant motion, timer)
    #[bits(1)]
    pub func_en: u8,
    /// Enables tilt calculation
    #[bits(1)]
    pub tilt_en: u8,
    /// Enables the pedometer algorithm
    #[bits(1)]
    pub pedo_en: u8,
    /// Enables the timestamp count
    #[bits(1)]
    pub timer_en: u8,
    /// Reserved bit, read-only
    #[bits(1, access = RO)]
    not_used0: u8,
    /// Enables wrist tilt calculation
    #[bits(1)]
    pub wrist_tilt_en: u8,
}

/// WAKE_UP_SRC (0x1B)
///
/// Wake-up interrupt source register (R)
#[register(address = Reg::WakeUpSrc, access_type = Lsm6dsl, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct WakeUpSrc {
    /// Wake-up event detection status on Z-axis
    #[bits(1)]
    pub z_wu: u8,
    /// Wake-up event detection status on Y-axis
    #[bits(1)]
    pub y_wu: u8,
    /// Wake-up event detection status on X-axis
    #[bits(1)]
    pub x_wu: u8,
    /// Wake-up event detection status
    #[bits(1)]
    pub wu_ia: u8,
    /// Sleep event status
    #[bits(1)]
    pub sleep_state_ia: u8,
    /// Free-fall event detection status
    #[bits(1)]
    pub ff_ia: u8,
    /// Reserved bits, read-only
    #[bits(2, access = RO)]
    not_used0: u8,
}

/// TAP_SRC (0x1C)
///
/// Tap source register (R)
#[register(address = Reg::TapSrc, access_type = Lsm6dsl, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct TapSrc {
    /// Tap event detection status on Z-axis
    #[bits(1)]
    pub z_tap: u8,
    /// Tap event detection status on Y-axis
    #[bits(1)]
    pub y_tap: u8,
    /// Tap event detection status on X-axis
    #[bits(1)]
    pub x_tap: u8,
    /// Sign of the acceleration peak of the tap event
    #[bits(1)]
    pub tap_sign: u8,
    /// Double-tap event detection status
    #[bits(1)]
    pub double_tap: u8,
    /// Single-tap event detection status
    #[bits(1)]
    pub single_tap: u8,
    /// Tap event detection status
    #[bits(1)]
    pub tap_ia: u8,
    /// Reserved bit, read-only
    #[bits(1, access = RO)]
    not_used0: u8,
}

/// D6D_SRC (0x1D)
///
/// Portrait, landscape, face-up and face-down source register (R)
#[register(address = Reg::D6dSrc, access_type = Lsm6dsl, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct D6dSrc {
    /// X-axis low event (under threshold)
    #[bits(1)]
    pub xl: u8,
    /// X-axis high event (over threshold)
    #[bits(1)]
    pub xh: u8,
    /// Y-axis low event (under threshold)
    #[bits(1)]
    pub yl: u8,
    /// Y-axis high event (over threshold)
    #[bits(1)]
    pub yh: u8,
    /// Z-axis low event (under threshold)
    #[bits(1)]
    pub zl: u8,
    /// Z-axis high event (over threshold)
    #[bits(1)]
    pub zh: u8,
    /// Orientation change detection status
    #[bits(1)]
    pub d6d_ia: u8,
    /// DEN data-ready flag
    #[bits(1)]
    pub den_drdy: u8,
}

/// STATUS_REG (0x1E)
///
/// Data-ready status register (R)
#[register(address = Reg::StatusReg, access_type = Lsm6dsl, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct StatusReg {
    /// Accelerometer new data available
    #[bits(1)]
    pub xlda: u8,
    /// Gyroscope new data available
    #[bits(1)]
    pub gda: u8,
    /// Temperature new data available
    #[bits(1)]
    pub tda: u8,
    /// Reserved bits, read-only
    #[bits(5, access = RO)]
    not_used0: u8,
}

/// OUT_TEMP (0x20, 0x21)
///
/// Temperature sensor output data (16-bit two's complement)
#[register(address = Reg::OutTempL, access_type = Lsm6dsl, generics = 2)]
pub struct OutTemp(pub i16);

/// OutXYZG (0x22 - 0x27)
///
/// Gyroscope X, Y, Z axis angular rate output (3 x 16-bit two's complement)
#[named_register(address = Reg::OutxLG, access_type = Lsm6dsl, generics = 2)]
pub struct OutXYZG {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

/// OutXYZA (0x28 - 0x2D)
///
/// Accelerometer X, Y, Z axis linear acceleration output (3 x 16-bit two's complement)
#[named_register(address = Reg::OutxLXl, access_type = Lsm6dsl, generics = 2)]
pub struct OutXYZA {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

/// STEP_COUNTER (0x4B, 0x4C)
///
/// Number of steps detected by the step counter (16-bit unsigned)
#[register(address = Reg::StepCounterL, access_type = Lsm6dsl, generics = 2)]
pub struct StepCounter(pub u16);

/// FUNC_SRC1 (0x53)
///
/// Embedded functions interrupt source register (R)
#[register(address = Reg::FuncSrc1, access_type = Lsm6dsl, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct FuncSrc1 {
    /// Sensor hub communication completed
    #[bits(1)]
    pub sensorhub_end_op: u8,
    /// Hard-iron calibration completed
    #[bits(1)]
    pub si_end_op: u8,
    /// Reserved bit, read-only
    #[bits(1, access = RO)]
    not_used0: u8,
    /// Step counter overflow status
    #[bits(1)]
    pub step_overflow: u8,
    /// Step detection status
    #[bits(1)]
    pub step_detected: u8,
    /// Tilt event detection status
    #[bits(1)]
    pub tilt_ia: u8,
    /// Significant motion event detection status
    #[bits(1)]
    pub sign_motion_ia: u8,
    /// Pedometer delta-time step recognition status
    #[bits(1)]
    pub step_count_delta_ia: u8,
}

/// TAP_CFG (0x58)
///
/// Tap, activity/inactivity and basic interrupts enable register (R/W)
#[register(address = Reg::TapCfg, access_type = Lsm6dsl, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct TapCfg {
    /// Latched interrupt mode
    #[bits(1)]
    pub lir: u8,
    /// Enables Z-axis in tap recognition
    #[bits(1)]
    pub tap_z_en: u8,
    /// Enables Y-axis in tap recognition
    #[bits(1)]
    pub tap_y_en: u8,
    /// Enables X-axis in tap recognition
    #[bits(1)]
    pub tap_x_en: u8,
    /// HPF or slope filter selection on wake-up and activity functions
    #[bits(1)]
    pub slope_fds: u8,
    /// Activity/inactivity recognition configuration (2 bits)
    #[bits(2)]
    pub inact_en: u8,
    /// Enables basic interrupts (6D, free-fall, wake-up, tap, inactivity)
    #[bits(1)]
    pub interrupts_enable: u8,
}

/// TAP_THS_6D (0x59)
///
/// Tap threshold and 6D orientation configuration register (R/W)
#[register(address = Reg::TapThs6d, access_type = Lsm6dsl, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct TapThs6d {
    /// Tap recognition threshold (5 bits); 1 LSB = FS_XL / 2^5
    #[bits(5)]
    pub tap_ths: u8,
    /// Threshold for 4D/6D orientation detection (2 bits)
    #[bits(2)]
    pub sixd_ths: u8,
    /// Enables 4D orientation detection (Z-axis position undetected)
    #[bits(1)]
    pub d4d_en: u8,
}

/// INT_DUR2 (0x5A)
///
/// Tap recognition time windows register (R/W)
#[register(address = Reg::IntDur2, access_type = Lsm6dsl, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct IntDur2 {
    /// Maximum duration of the over-threshold event (2 bits); 1 LSB = 8/ODR_XL
    #[bits(2)]
    pub shock: u8,
    /// Expected quiet time after a tap detection (2 bits); 1 LSB = 4/ODR_XL
    #[bits(2)]
    pub quiet: u8,
    /// Maximum time gap for double-tap recognition (4 bits); 1 LSB = 32/ODR_XL
    #[bits(4)]
    pub dur: u8,
}

/// WAKE_UP_THS (0x5B)
///
/// Single/double-tap selection and wake-up threshold register (R/W)
#[register(address = Reg::WakeUpThs, access_type = Lsm6dsl, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct WakeUpThs {
    /// Wake-up threshold (6 bits); 1 LSB = FS_XL / 2^6
    #[bits(6)]
    pub wk_ths: u8,
    /// Reserved bit, read-only
    #[bits(1, access = RO)]
    not_used0: u8,
    /// Single/double-tap event enable; 0 = single only, 1 = single and double
    #[bits(1)]
    pub single_double_tap: u8,
}

/// WAKE_UP_DUR (0x5C)
///
/// Free-fall, wake-up, timestamp and sleep mode duration register (R/W)
#[register(address = Reg::WakeUpDur, access_type = Lsm6dsl, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct WakeUpDur {
    /// Duration to go in sleep mode (4 bits); 1 LSB = 512/ODR_XL
    #[bits(4)]
    pub sleep_dur: u8,
    /// Timestamp register resolution; 0 = 25.6 ms, 1 = 6.4 ms
    #[bits(1)]
    pub timer_hr: u8,
    /// Wake-up duration event (2 bits); 1 LSB = 1/ODR_XL
    #[bits(2)]
    pub wake_dur: u8,
    /// Free-fall duration event, bit 5
    #[bits(1)]
    pub ff_dur: u8,
}

/// FREE_FALL (0x5D)
///
/// Free-fall function duration and threshold register (R/W)
#[register(address = Reg::FreeFall, access_type = Lsm6dsl, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct FreeFall {
    /// Free-fall threshold selection (3 bits)
    #[bits(3)]
    pub ff_ths: u8,
    /// Free-fall duration event, bits 4:0; 1 LSB = 1/ODR_XL
    #[bits(5)]
    pub ff_dur: u8,
}

/// MD1_CFG (0x5E)
///
/// Routing of interrupt functions on the INT1 pin (R/W)
#[register(address = Reg::Md1Cfg, access_type = Lsm6dsl, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Md1Cfg {
    /// Routing of end counter event of the timer on INT1
    #[bits(1)]
    pub int1_timer: u8,
    /// Routing of tilt event on INT1
    #[bits(1)]
    pub int1_tilt: u8,
    /// Routing of 6D orientation event on INT1
    #[bits(1)]
    pub int1_6d: u8,
    /// Routing of double-tap event on INT1
    #[bits(1)]
    pub int1_double_tap: u8,
    /// Routing of free-fall event on INT1
    #[bits(1)]
    pub int1_ff: u8,
    /// Routing of wake-up event on INT1
    #[bits(1)]
    pub int1_wu: u8,
    /// Routing of single-tap event on INT1
    #[bits(1)]
    pub int1_single_tap: u8,
    /// Routing of activity/inactivity event on INT1
    #[bits(1)]
    pub int1_inact_state: u8,
}

/// MD2_CFG (0x5F)
///
/// Routing of interrupt functions on the INT2 pin (R/W)
#[register(address = Reg::Md2Cfg, access_type = Lsm6dsl, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Md2Cfg {
    /// Routing of soft-iron/hard-iron end of computation on INT2
    #[bits(1)]
    pub int2_iron: u8,
    /// Routing of tilt event on INT2
    #[bits(1)]
    pub int2_tilt: u8,
    /// Routing of 6D orientation event on INT2
    #[bits(1)]
    pub int2_6d: u8,
    /// Routing of double-tap event on INT2
    #[bits(1)]
    pub int2_double_tap: u8,
    /// Routing of free-fall event on INT2
    #[bits(1)]
    pub int2_ff: u8,
    /// Routing of wake-up event on INT2
    #[bits(1)]
    pub int2_wu: u8,
    /// Routing of single-tap event on INT2
    #[bits(1)]
    pub int2_single_tap: u8,
    /// Routing of activity/inactivity event on INT2
    #[bits(1)]
    pub int2_inact_state: u8,
}

/// Accelerometer output data rate and power mode selection.
///
/// Codes above 0x0A are reserved and decode to an error.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum OdrXl {
    /// Power-down (default).
    #[default]
    Off = 0x0,
    /// 13 Hz.
    _13hz = 0x1,
    /// 26 Hz.
    _26hz = 0x2,
    /// 52 Hz.
    _52hz = 0x3,
    /// 104 Hz.
    _104hz = 0x4,
    /// 208 Hz.
    _208hz = 0x5,
    /// 416 Hz.
    _416hz = 0x6,
    /// 833 Hz.
    _833hz = 0x7,
    /// 1.66 kHz.
    _1660hz = 0x8,
    /// 3.33 kHz.
    _3330hz = 0x9,
    /// 6.66 kHz.
    _6660hz = 0xA,
}

/// Gyroscope output data rate selection.
///
/// Codes above 0x0A are reserved and decode to an error.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum OdrGy {
    /// Power-down (default).
    #[default]
    Off = 0x0,
    /// 13 Hz.
    _13hz = 0x1,
    /// 26 Hz.
    _26hz = 0x2,
    /// 52 Hz.
    _52hz = 0x3,
    /// 104 Hz.
    _104hz = 0x4,
    /// 208 Hz.
    _208hz = 0x5,
    /// 416 Hz.
    _416hz = 0x6,
    /// 833 Hz.
    _833hz = 0x7,
    /// 1.66 kHz.
    _1660hz = 0x8,
    /// 3.33 kHz.
    _3330hz = 0x9,
    /// 6.66 kHz.
    _6660hz = 0xA,
}

/// Accelerometer full-scale selection.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum FsXl {
    /// ±2 g (default).
    #[default]
    _2g = 0x0,
    /// ±16 g.
    _16g = 0x1,
    /// ±4 g.
    _4g = 0x2,
    /// ±8 g.
    _8g = 0x3,
}

/// Gyroscope full-scale selection.
///
/// ±125 dps is selected through the dedicated FS_125 bit of CTRL2_G.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum FsGy {
    /// ±245 dps (default).
    #[default]
    _245dps = 0x0,
    /// ±500 dps.
    _500dps = 0x1,
    /// ±1000 dps.
    _1000dps = 0x2,
    /// ±2000 dps.
    _2000dps = 0x3,
}

/// FIFO mode selection.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum FifoMode {
    /// Bypass mode; FIFO disabled (default).
    #[default]
    Bypass = 0x0,
    /// FIFO mode; stops collecting data when the FIFO is full.
    Fifo = 0x1,
    /// Continuous mode until trigger is deasserted, then FIFO mode.
    StreamToFifo = 0x3,
    /// Bypass mode until trigger is deasserted, then continuous mode.
    BypassToStream = 0x4,
    /// Continuous mode; new samples overwrite the older ones when full.
    Stream = 0x6,
}

/// Free-fall threshold settings.
///
/// Defines the threshold for free-fall detection.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum FfThreshold {
    /// 156 mg threshold (default).
    #[default]
    _156mg = 0x0,
    /// 219 mg threshold.
    _219mg = 0x1,
    /// 250 mg threshold.
    _250mg = 0x2,
    /// 312 mg threshold.
    _312mg = 0x3,
    /// 344 mg threshold.
    _344mg = 0x4,
    /// 406 mg threshold.
    _406mg = 0x5,
    /// 469 mg threshold.
    _469mg = 0x6,
    /// 500 mg threshold.
    _500mg = 0x7,
}

/// Threshold for the 4D/6D orientation detection function.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum SixdThs {
    /// 80 degrees (default).
    #[default]
    _80deg = 0x0,
    /// 70 degrees.
    _70deg = 0x1,
    /// 60 degrees.
    _60deg = 0x2,
    /// 50 degrees.
    _50deg = 0x3,
}
