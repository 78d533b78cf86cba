use crate::prelude::*;
use crate::{I2CAddress, PROPERTY_DISABLE, PROPERTY_ENABLE};

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{I2c, SevenBitAddress};
use embedded_hal::spi::SpiDevice;
use st_mems_bus::{BusOperation, MemBankFunctions};

/// Driver for the LSM6DSL sensor.
///
/// The struct takes a bus and a timer hardware object to write to the
/// registers.
/// The bus is generalized over the BusOperation trait, allowing the use
/// of I2C or SPI protocols; this also allows the user to implement sharing
/// techniques to share the underlying bus.
pub struct Lsm6dsl<B, T> {
    /// The bus driver.
    pub bus: B,
    pub tim: T,
    xl_state: SubsystemState,
    gy_state: SubsystemState,
}

/// Driver errors.
#[derive(Debug, PartialEq)]
pub enum Error<B> {
    Bus(B),          // Error at the bus level
    UnexpectedValue, // Unexpected value read from a register
    FailedToReadMemBank,
    FailedToSetMemBank(MemBank),
}

/// Error raised by one sub-operation of an arming or disarming sequence.
///
/// Sequences stop at the first failure and are not rolled back: the
/// sub-operations before `step` have already been written to the device.
#[derive(Debug, PartialEq)]
pub struct StepError<E> {
    /// Zero-based index of the failing sub-operation.
    pub step: u8,
    /// The underlying error.
    pub source: E,
}

/// Threads a composite register sequence, tagging every failure with the
/// index of the sub-operation it came from.
struct Seq(u8);

impl Seq {
    fn new() -> Self {
        Seq(0)
    }

    fn step<T, E>(&mut self, res: Result<T, E>) -> Result<T, StepError<E>> {
        let step = self.0;
        self.0 += 1;
        res.map_err(|source| StepError { step, source })
    }
}

/// Power state of one axis group.
///
/// While the group is disabled the hardware rate register holds power-down
/// and `pending_odr_hz` remembers the rate to program on the next enable;
/// while it is enabled the register reflects the last programmed rate.
#[derive(Clone, Copy, Debug)]
struct SubsystemState {
    enabled: bool,
    pending_odr_hz: f32,
}

impl Default for SubsystemState {
    fn default() -> Self {
        Self {
            enabled: false,
            pending_odr_hz: 104.0,
        }
    }
}

/// Status of the embedded motion-detection events.
///
/// A flag reads true only when the source bit is asserted by the sensor
/// *and* the event is routed onto an interrupt pin; source bits raised
/// while the function is not armed are not reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventStatus {
    pub free_fall: bool,
    pub wake_up: bool,
    pub single_tap: bool,
    pub double_tap: bool,
    pub six_d_orientation: bool,
    pub step_detected: bool,
    pub tilt: bool,
}

/// Accelerometer sensitivity in mg/LSB for each full-scale setting.
pub const ACC_SENSITIVITY_FS_2G: f32 = 0.061;
pub const ACC_SENSITIVITY_FS_4G: f32 = 0.122;
pub const ACC_SENSITIVITY_FS_8G: f32 = 0.244;
pub const ACC_SENSITIVITY_FS_16G: f32 = 0.488;

/// Gyroscope sensitivity in mdps/LSB for each full-scale setting.
pub const GYRO_SENSITIVITY_FS_125DPS: f32 = 4.375;
pub const GYRO_SENSITIVITY_FS_245DPS: f32 = 8.75;
pub const GYRO_SENSITIVITY_FS_500DPS: f32 = 17.50;
pub const GYRO_SENSITIVITY_FS_1000DPS: f32 = 35.0;
pub const GYRO_SENSITIVITY_FS_2000DPS: f32 = 70.0;

/// Preset values used by the tap and pedometer arming sequences.
pub const TAP_THRESHOLD_MID_LOW: u8 = 0x08;
pub const TAP_SHOCK_TIME_MID_HIGH: u8 = 0x02;
pub const TAP_SHOCK_TIME_HIGH: u8 = 0x03;
pub const TAP_QUIET_TIME_MID_LOW: u8 = 0x01;
pub const TAP_QUIET_TIME_HIGH: u8 = 0x03;
pub const TAP_DURATION_TIME_MID: u8 = 0x08;
pub const PEDO_THRESHOLD_MID_HIGH: u8 = 0x17;

/// Supported output data rates in Hz, ascending, paired with the code of
/// the rate field. The codes are common to the accelerometer and the
/// gyroscope rate registers.
const ODR_TABLE_HZ: [(f32, u8); 10] = [
    (13.0, OdrXl::_13hz as u8),
    (26.0, OdrXl::_26hz as u8),
    (52.0, OdrXl::_52hz as u8),
    (104.0, OdrXl::_104hz as u8),
    (208.0, OdrXl::_208hz as u8),
    (416.0, OdrXl::_416hz as u8),
    (833.0, OdrXl::_833hz as u8),
    (1660.0, OdrXl::_1660hz as u8),
    (3330.0, OdrXl::_3330hz as u8),
    (6660.0, OdrXl::_6660hz as u8),
];

/// Supported accelerometer full scales in g, ascending, with their codes.
const FS_XL_TABLE_G: [(f32, u8); 4] = [
    (2.0, FsXl::_2g as u8),
    (4.0, FsXl::_4g as u8),
    (8.0, FsXl::_8g as u8),
    (16.0, FsXl::_16g as u8),
];

/// Supported gyroscope full scales in dps, ascending, with their codes.
/// The 125 dps setting goes through the dedicated FS_125 bit instead.
const FS_GY_TABLE_DPS: [(f32, u8); 4] = [
    (245.0, FsGy::_245dps as u8),
    (500.0, FsGy::_500dps as u8),
    (1000.0, FsGy::_1000dps as u8),
    (2000.0, FsGy::_2000dps as u8),
];

/// Resolves a requested rate to the smallest supported rate not lower than
/// it, clamped to the fastest rate. Returns the table rate and its code.
fn odr_entry_from_hz(hz: f32) -> (f32, u8) {
    ODR_TABLE_HZ
        .iter()
        .copied()
        .find(|&(table_hz, _)| hz <= table_hz)
        .unwrap_or(ODR_TABLE_HZ[ODR_TABLE_HZ.len() - 1])
}

/// Maps a rate-field code back to its rate in Hz; power-down reads 0 Hz.
/// Reserved codes map to None.
fn odr_hz_from_code(code: u8) -> Option<f32> {
    if code == OdrXl::Off as u8 {
        return Some(0.0);
    }
    ODR_TABLE_HZ
        .iter()
        .copied()
        .find(|&(_, table_code)| table_code == code)
        .map(|(hz, _)| hz)
}

impl<P, T> Lsm6dsl<st_mems_bus::i2c::I2cBus<P>, T>
where
    P: I2c,
    T: DelayNs,
{
    /// Constructor method for using the I2C bus.
    ///
    /// # Arguments
    ///
    /// * `i2c`: The I2C peripheral.
    /// * `address`: The I2C address of the LSM6DSL sensor.
    /// * `tim`: The timer peripheral.
    pub fn new_i2c(i2c: P, address: I2CAddress, tim: T) -> Self {
        // Initialize the I2C bus with the LSM6DSL address
        let bus = st_mems_bus::i2c::I2cBus::new(i2c, address as SevenBitAddress);
        Self::from_bus(bus, tim)
    }
}

impl<P, T> Lsm6dsl<st_mems_bus::spi::SpiBus<P>, T>
where
    P: SpiDevice,
    T: DelayNs,
{
    /// Constructor method for using the SPI bus.
    pub fn new_spi(spi: P, tim: T) -> Self {
        // Initialize the SPI bus
        let bus = st_mems_bus::spi::SpiBus::new(spi);
        Self::from_bus(bus, tim)
    }
}

impl<B: BusOperation, T: DelayNs> MemBankFunctions<MemBank> for Lsm6dsl<B, T> {
    type Error = Error<B::Error>;

    /// Enable access to the embedded functions configuration registers.
    fn mem_bank_set(&mut self, val: MemBank) -> Result<(), Self::Error> {
        let mut func_cfg_access =
            FuncCfgAccess::read(self).map_err(|_| Error::FailedToReadMemBank)?;
        func_cfg_access.set_func_cfg_en(val as u8);
        func_cfg_access
            .write(self)
            .map_err(|_| Error::FailedToSetMemBank(val))
    }

    /// Get the register bank currently mapped.
    fn mem_bank_get(&mut self) -> Result<MemBank, Self::Error> {
        let val = FuncCfgAccess::read(self)?.func_cfg_en();
        Ok(MemBank::try_from(val).unwrap_or_default())
    }
}

impl<B: BusOperation, T: DelayNs> Lsm6dsl<B, T> {
    #[inline]
    pub fn read_from_register(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Error<B::Error>> {
        self.bus.read_from_register(reg, buf).map_err(Error::Bus)
    }

    #[inline]
    pub fn write_to_register(&mut self, reg: u8, buf: &[u8]) -> Result<(), Error<B::Error>> {
        self.bus.write_to_register(reg, buf).map_err(Error::Bus)
    }

    /// Constructor method using a generic bus that implements BusOperation.
    pub fn from_bus(bus: B, tim: T) -> Self {
        Self {
            bus,
            tim,
            xl_state: SubsystemState::default(),
            gy_state: SubsystemState::default(),
        }
    }

    /// Configure the device for register-based operation.
    ///
    /// Enables register address auto-increment and block data update, sets
    /// the FIFO to bypass mode, powers down both the accelerometer and the
    /// gyroscope and programs the default full scales (±2 g, 2000 dps).
    /// Both axis groups restart from 104 Hz on their next enable.
    pub fn init_set(&mut self) -> Result<(), Error<B::Error>> {
        self.auto_increment_set(PROPERTY_ENABLE)?;
        self.block_data_update_set(PROPERTY_ENABLE)?;
        self.fifo_mode_set(FifoMode::Bypass)?;

        self.xl_odr_code_write(OdrXl::Off as u8)?;
        self.xl_full_scale_set(2.0)?;

        self.gy_odr_code_write(OdrGy::Off as u8)?;
        self.gy_full_scale_set(2000.0)?;

        self.xl_state = SubsystemState::default();
        self.gy_state = SubsystemState::default();

        Ok(())
    }

    /// Device Who am I.
    pub fn device_id_get(&mut self) -> Result<u8, Error<B::Error>> {
        WhoAmI::read(self).map(|reg| reg.id())
    }

    /// Register address automatically incremented during a multiple byte
    /// access with a serial interface.
    pub fn auto_increment_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut ctrl3_c = Ctrl3C::read(self)?;
        ctrl3_c.set_if_inc(val);
        ctrl3_c.write(self)
    }

    /// Block data update.
    ///
    /// # Arguments
    ///
    /// * `val`: Change the value of bdu in reg CTRL3_C.
    pub fn block_data_update_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut ctrl3_c = Ctrl3C::read(self)?;
        ctrl3_c.set_bdu(val);
        ctrl3_c.write(self)
    }

    /// FIFO mode selection.
    pub fn fifo_mode_set(&mut self, val: FifoMode) -> Result<(), Error<B::Error>> {
        let mut fifo_ctrl5 = FifoCtrl5::read(self)?;
        fifo_ctrl5.set_fifo_mode(val as u8);
        fifo_ctrl5.write(self)
    }

    /// Enable the accelerometer.
    ///
    /// No-op when already enabled; otherwise programs the remembered
    /// output data rate.
    pub fn xl_enable(&mut self) -> Result<(), Error<B::Error>> {
        if self.xl_state.enabled {
            return Ok(());
        }

        let (_, code) = odr_entry_from_hz(self.xl_state.pending_odr_hz);
        self.xl_odr_code_write(code)?;
        self.xl_state.enabled = true;

        Ok(())
    }

    /// Disable the accelerometer.
    ///
    /// No-op when already disabled. The rate running on the device is read
    /// back before powering down, so a later enable resumes from it even
    /// if an arming sequence changed it in the meantime.
    pub fn xl_disable(&mut self) -> Result<(), Error<B::Error>> {
        if !self.xl_state.enabled {
            return Ok(());
        }

        self.xl_state.pending_odr_hz = self.xl_data_rate_get()?;
        self.xl_odr_code_write(OdrXl::Off as u8)?;
        self.xl_state.enabled = false;

        Ok(())
    }

    /// Accelerometer output data rate selection, in Hz.
    ///
    /// The request is rounded up to the next supported rate and clamped to
    /// 6660 Hz. While the accelerometer is disabled only the remembered
    /// rate is updated; the register write is deferred to the next enable.
    pub fn xl_data_rate_set(&mut self, odr_hz: f32) -> Result<(), Error<B::Error>> {
        let (table_hz, code) = odr_entry_from_hz(odr_hz);

        if self.xl_state.enabled {
            self.xl_odr_code_write(code)
        } else {
            self.xl_state.pending_odr_hz = table_hz;
            Ok(())
        }
    }

    /// Accelerometer output data rate currently programmed, in Hz.
    ///
    /// Power-down reads back as 0 Hz.
    pub fn xl_data_rate_get(&mut self) -> Result<f32, Error<B::Error>> {
        let ctrl1_xl = Ctrl1Xl::read(self)?;
        odr_hz_from_code(ctrl1_xl.odr_xl()).ok_or(Error::UnexpectedValue)
    }

    /// Accelerometer full-scale selection, in g.
    ///
    /// The request is rounded up to the next supported full scale and
    /// clamped to ±16 g.
    pub fn xl_full_scale_set(&mut self, fs_g: f32) -> Result<(), Error<B::Error>> {
        let code = FS_XL_TABLE_G
            .iter()
            .copied()
            .find(|&(table_g, _)| fs_g <= table_g)
            .map_or(FsXl::_16g as u8, |(_, code)| code);

        let mut ctrl1_xl = Ctrl1Xl::read(self)?;
        ctrl1_xl.set_fs_xl(code);
        ctrl1_xl.write(self)
    }

    /// Accelerometer full scale currently programmed, in g.
    pub fn xl_full_scale_get(&mut self) -> Result<f32, Error<B::Error>> {
        let ctrl1_xl = Ctrl1Xl::read(self)?;
        let fs = FsXl::try_from(ctrl1_xl.fs_xl()).map_err(|_| Error::UnexpectedValue)?;

        let val = match fs {
            FsXl::_2g => 2.0,
            FsXl::_4g => 4.0,
            FsXl::_8g => 8.0,
            FsXl::_16g => 16.0,
        };

        Ok(val)
    }

    /// Accelerometer sensitivity in mg/LSB.
    ///
    /// Resolved from the full scale read back from the device, never from
    /// a cached value: an arming sequence may have changed the range.
    pub fn xl_sensitivity_get(&mut self) -> Result<f32, Error<B::Error>> {
        let ctrl1_xl = Ctrl1Xl::read(self)?;
        let fs = FsXl::try_from(ctrl1_xl.fs_xl()).map_err(|_| Error::UnexpectedValue)?;

        let val = match fs {
            FsXl::_2g => ACC_SENSITIVITY_FS_2G,
            FsXl::_4g => ACC_SENSITIVITY_FS_4G,
            FsXl::_8g => ACC_SENSITIVITY_FS_8G,
            FsXl::_16g => ACC_SENSITIVITY_FS_16G,
        };

        Ok(val)
    }

    /// Linear acceleration output registers. The value is expressed as a
    /// 16-bit word in two's complement.
    pub fn acceleration_raw_get(&mut self) -> Result<[i16; 3], Error<B::Error>> {
        let val = OutXYZA::read(self)?;

        Ok([val.x, val.y, val.z])
    }

    /// Linear acceleration in mg, scaled by the sensitivity of the full
    /// scale currently active on the device.
    pub fn acceleration_mg_get(&mut self) -> Result<[i32; 3], Error<B::Error>> {
        let sensitivity = self.xl_sensitivity_get()?;
        let raw = self.acceleration_raw_get()?;

        Ok([
            (raw[0] as f32 * sensitivity) as i32,
            (raw[1] as f32 * sensitivity) as i32,
            (raw[2] as f32 * sensitivity) as i32,
        ])
    }

    /// Accelerometer new data available.
    pub fn xl_flag_data_ready_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ok(StatusReg::read(self)?.xlda())
    }

    /// Enable the gyroscope.
    ///
    /// No-op when already enabled; otherwise programs the remembered
    /// output data rate.
    pub fn gy_enable(&mut self) -> Result<(), Error<B::Error>> {
        if self.gy_state.enabled {
            return Ok(());
        }

        let (_, code) = odr_entry_from_hz(self.gy_state.pending_odr_hz);
        self.gy_odr_code_write(code)?;
        self.gy_state.enabled = true;

        Ok(())
    }

    /// Disable the gyroscope.
    ///
    /// No-op when already disabled. The rate running on the device is read
    /// back before powering down, so a later enable resumes from it.
    pub fn gy_disable(&mut self) -> Result<(), Error<B::Error>> {
        if !self.gy_state.enabled {
            return Ok(());
        }

        self.gy_state.pending_odr_hz = self.gy_data_rate_get()?;
        self.gy_odr_code_write(OdrGy::Off as u8)?;
        self.gy_state.enabled = false;

        Ok(())
    }

    /// Gyroscope output data rate selection, in Hz.
    ///
    /// The request is rounded up to the next supported rate and clamped to
    /// 6660 Hz. While the gyroscope is disabled only the remembered rate
    /// is updated; the register write is deferred to the next enable.
    pub fn gy_data_rate_set(&mut self, odr_hz: f32) -> Result<(), Error<B::Error>> {
        let (table_hz, code) = odr_entry_from_hz(odr_hz);

        if self.gy_state.enabled {
            self.gy_odr_code_write(code)
        } else {
            self.gy_state.pending_odr_hz = table_hz;
            Ok(())
        }
    }

    /// Gyroscope output data rate currently programmed, in Hz.
    ///
    /// Power-down reads back as 0 Hz.
    pub fn gy_data_rate_get(&mut self) -> Result<f32, Error<B::Error>> {
        let ctrl2_g = Ctrl2G::read(self)?;
        odr_hz_from_code(ctrl2_g.odr_g()).ok_or(Error::UnexpectedValue)
    }

    /// Gyroscope full-scale selection, in dps.
    ///
    /// Requests up to 125 dps select the dedicated ±125 dps mode; higher
    /// requests are rounded up to the next supported full scale and
    /// clamped to 2000 dps.
    pub fn gy_full_scale_set(&mut self, fs_dps: f32) -> Result<(), Error<B::Error>> {
        if fs_dps <= 125.0 {
            let mut ctrl2_g = Ctrl2G::read(self)?;
            ctrl2_g.set_fs_125(PROPERTY_ENABLE);
            return ctrl2_g.write(self);
        }

        let code = FS_GY_TABLE_DPS
            .iter()
            .copied()
            .find(|&(table_dps, _)| fs_dps <= table_dps)
            .map_or(FsGy::_2000dps as u8, |(_, code)| code);

        let mut ctrl2_g = Ctrl2G::read(self)?;
        ctrl2_g.set_fs_125(PROPERTY_DISABLE);
        ctrl2_g.set_fs_g(code);
        ctrl2_g.write(self)
    }

    /// Gyroscope full scale currently programmed, in dps.
    pub fn gy_full_scale_get(&mut self) -> Result<f32, Error<B::Error>> {
        let ctrl2_g = Ctrl2G::read(self)?;

        if ctrl2_g.fs_125() == PROPERTY_ENABLE {
            return Ok(125.0);
        }

        let fs = FsGy::try_from(ctrl2_g.fs_g()).map_err(|_| Error::UnexpectedValue)?;

        let val = match fs {
            FsGy::_245dps => 245.0,
            FsGy::_500dps => 500.0,
            FsGy::_1000dps => 1000.0,
            FsGy::_2000dps => 2000.0,
        };

        Ok(val)
    }

    /// Gyroscope sensitivity in mdps/LSB.
    ///
    /// The FS_125 bit takes precedence over the full-scale field, matching
    /// the priority the device itself applies.
    pub fn gy_sensitivity_get(&mut self) -> Result<f32, Error<B::Error>> {
        let ctrl2_g = Ctrl2G::read(self)?;

        if ctrl2_g.fs_125() == PROPERTY_ENABLE {
            return Ok(GYRO_SENSITIVITY_FS_125DPS);
        }

        let fs = FsGy::try_from(ctrl2_g.fs_g()).map_err(|_| Error::UnexpectedValue)?;

        let val = match fs {
            FsGy::_245dps => GYRO_SENSITIVITY_FS_245DPS,
            FsGy::_500dps => GYRO_SENSITIVITY_FS_500DPS,
            FsGy::_1000dps => GYRO_SENSITIVITY_FS_1000DPS,
            FsGy::_2000dps => GYRO_SENSITIVITY_FS_2000DPS,
        };

        Ok(val)
    }

    /// Angular rate output registers. The value is expressed as a 16-bit
    /// word in two's complement.
    pub fn angular_rate_raw_get(&mut self) -> Result<[i16; 3], Error<B::Error>> {
        let val = OutXYZG::read(self)?;

        Ok([val.x, val.y, val.z])
    }

    /// Angular rate in mdps, scaled by the sensitivity of the full scale
    /// currently active on the device.
    pub fn angular_rate_mdps_get(&mut self) -> Result<[i32; 3], Error<B::Error>> {
        let sensitivity = self.gy_sensitivity_get()?;
        let raw = self.angular_rate_raw_get()?;

        Ok([
            (raw[0] as f32 * sensitivity) as i32,
            (raw[1] as f32 * sensitivity) as i32,
            (raw[2] as f32 * sensitivity) as i32,
        ])
    }

    /// Gyroscope new data available.
    pub fn gy_flag_data_ready_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ok(StatusReg::read(self)?.gda())
    }

    /// Temperature data output register. L and H registers together
    /// express a 16-bit word in two's complement.
    pub fn temperature_raw_get(&mut self) -> Result<i16, Error<B::Error>> {
        Ok(OutTemp::read(self)?.0)
    }

    /// Temperature new data available.
    pub fn temp_flag_data_ready_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ok(StatusReg::read(self)?.tda())
    }

    /// Free-fall threshold selection.
    pub fn ff_threshold_set(&mut self, val: FfThreshold) -> Result<(), Error<B::Error>> {
        let mut free_fall = FreeFall::read(self)?;
        free_fall.set_ff_ths((val as u8) & 0x07);
        free_fall.write(self)
    }

    /// Free-fall duration time window.
    ///
    /// 1 LSB = 1/ODR_XL time. The 6-bit value is split between FREE_FALL
    /// and WAKE_UP_DUR.
    pub fn ff_duration_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut wake_up_dur = WakeUpDur::read(self)?;
        wake_up_dur.set_ff_dur((val & 0x20) >> 5);
        wake_up_dur.write(self)?;

        let mut free_fall = FreeFall::read(self)?;
        free_fall.set_ff_dur(val & 0x1F);
        free_fall.write(self)
    }

    /// Wake-up threshold; 1 LSB = FS_XL / 2^6.
    pub fn wake_up_threshold_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut wake_up_ths = WakeUpThs::read(self)?;
        wake_up_ths.set_wk_ths(val & 0x3F);
        wake_up_ths.write(self)
    }

    /// Wake-up duration event; 1 LSB = 1/ODR_XL time.
    pub fn wake_up_duration_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut wake_up_dur = WakeUpDur::read(self)?;
        wake_up_dur.set_wake_dur(val & 0x03);
        wake_up_dur.write(self)
    }

    /// Duration to go in sleep mode; 1 LSB = 512/ODR_XL time.
    pub fn sleep_duration_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut wake_up_dur = WakeUpDur::read(self)?;
        wake_up_dur.set_sleep_dur(val & 0x0F);
        wake_up_dur.write(self)
    }

    /// Timestamp register resolution; 0 = 6.4 ms, 1 = 25 us.
    pub fn timer_resolution_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut wake_up_dur = WakeUpDur::read(self)?;
        wake_up_dur.set_timer_hr(val & 0x01);
        wake_up_dur.write(self)
    }

    /// Tap recognition threshold; 1 LSB = FS_XL / 2^5.
    pub fn tap_threshold_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut tap_ths_6d = TapThs6d::read(self)?;
        tap_ths_6d.set_tap_ths(val & 0x1F);
        tap_ths_6d.write(self)
    }

    /// Tap shock time window; 1 LSB = 8/ODR_XL time.
    pub fn tap_shock_time_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut int_dur2 = IntDur2::read(self)?;
        int_dur2.set_shock(val & 0x03);
        int_dur2.write(self)
    }

    /// Tap quiet time window; 1 LSB = 4/ODR_XL time.
    pub fn tap_quiet_time_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut int_dur2 = IntDur2::read(self)?;
        int_dur2.set_quiet(val & 0x03);
        int_dur2.write(self)
    }

    /// Maximum time gap for double-tap recognition; 1 LSB = 32/ODR_XL time.
    pub fn tap_duration_time_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut int_dur2 = IntDur2::read(self)?;
        int_dur2.set_dur(val & 0x0F);
        int_dur2.write(self)
    }

    /// Single/double-tap event selection; 0 = single only, 1 = single and
    /// double.
    pub fn tap_mode_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut wake_up_ths = WakeUpThs::read(self)?;
        wake_up_ths.set_single_double_tap(val & 0x01);
        wake_up_ths.write(self)
    }

    /// Threshold for the 4D/6D orientation detection function.
    pub fn sixd_threshold_set(&mut self, val: SixdThs) -> Result<(), Error<B::Error>> {
        let mut tap_ths_6d = TapThs6d::read(self)?;
        tap_ths_6d.set_sixd_ths(val as u8);
        tap_ths_6d.write(self)
    }

    /// Enables the basic interrupts (6D, free-fall, wake-up, tap,
    /// inactivity).
    pub fn basic_interrupts_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut tap_cfg = TapCfg::read(self)?;
        tap_cfg.set_interrupts_enable(val);
        tap_cfg.write(self)
    }

    /// Portrait, landscape, face-up and face-down source register.
    pub fn orientation_src_get(&mut self) -> Result<D6dSrc, Error<B::Error>> {
        D6dSrc::read(self)
    }

    /// Minimum pedometer threshold, written through the embedded functions
    /// configuration bank.
    pub fn pedo_threshold_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        MemBank::operate_over_emb(self, |state| {
            let mut pedo_ths = ConfigPedoThsMin::read(state)?;
            pedo_ths.set_ths_min(val & 0x1F);
            pedo_ths.write(state)
        })
    }

    /// Pedometer debounce: number of steps required before counting starts.
    pub fn pedo_debounce_steps_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        MemBank::operate_over_emb(self, |state| {
            let mut pedo_deb = PedoDebReg::read(state)?;
            pedo_deb.set_deb_step(val & 0x07);
            pedo_deb.write(state)
        })
    }

    /// Step counter output register.
    pub fn number_of_steps_get(&mut self) -> Result<u16, Error<B::Error>> {
        StepCounter::read(self).map(|reg| reg.0)
    }

    /// Reset the step counter.
    pub fn steps_reset(&mut self) -> Result<(), Error<B::Error>> {
        let mut ctrl10_c = Ctrl10C::read(self)?;
        ctrl10_c.set_pedo_rst_step(PROPERTY_ENABLE);
        ctrl10_c.write(self)?;

        self.tim.delay_ms(10);

        let mut ctrl10_c = Ctrl10C::read(self)?;
        ctrl10_c.set_pedo_rst_step(PROPERTY_DISABLE);
        ctrl10_c.write(self)
    }

    /// Arm free-fall detection.
    ///
    /// Forces the accelerometer to 416 Hz / ±2 g, programs the free-fall
    /// thresholds and routes the event onto INT1. A previously selected
    /// user rate or full scale is overridden.
    pub fn free_fall_enable(&mut self) -> Result<(), StepError<Error<B::Error>>> {
        let mut seq = Seq::new();

        seq.step(self.xl_data_rate_set(416.0))?;
        seq.step(self.xl_full_scale_set(2.0))?;
        seq.step(self.ff_duration_set(0x06))?;
        seq.step(self.wake_up_duration_set(0x00))?;
        seq.step(self.timer_resolution_set(0x00))?;
        seq.step(self.sleep_duration_set(0x00))?;
        seq.step(self.ff_threshold_set(FfThreshold::_312mg))?;
        seq.step(self.basic_interrupts_set(PROPERTY_ENABLE))?;
        seq.step(self.int1_route_ff_set(PROPERTY_ENABLE))?;

        Ok(())
    }

    /// Disarm free-fall detection and reset its thresholds to the off
    /// values.
    ///
    /// The shared basic-interrupts enable bit is cleared unconditionally,
    /// even when other embedded functions still have events routed.
    pub fn free_fall_disable(&mut self) -> Result<(), StepError<Error<B::Error>>> {
        let mut seq = Seq::new();

        seq.step(self.int1_route_ff_set(PROPERTY_DISABLE))?;
        seq.step(self.basic_interrupts_set(PROPERTY_DISABLE))?;
        seq.step(self.ff_duration_set(0x00))?;
        seq.step(self.ff_threshold_set(FfThreshold::_156mg))?;

        Ok(())
    }

    /// Arm wake-up detection.
    ///
    /// Forces the accelerometer to 416 Hz / ±2 g and routes the event onto
    /// INT2.
    pub fn wake_up_enable(&mut self) -> Result<(), StepError<Error<B::Error>>> {
        let mut seq = Seq::new();

        seq.step(self.xl_data_rate_set(416.0))?;
        seq.step(self.xl_full_scale_set(2.0))?;
        seq.step(self.wake_up_duration_set(0x00))?;
        seq.step(self.wake_up_threshold_set(0x02))?;
        seq.step(self.basic_interrupts_set(PROPERTY_ENABLE))?;
        seq.step(self.int2_route_wake_up_set(PROPERTY_ENABLE))?;

        Ok(())
    }

    /// Disarm wake-up detection and reset its thresholds to the off
    /// values.
    ///
    /// The shared basic-interrupts enable bit is cleared unconditionally,
    /// even when other embedded functions still have events routed.
    pub fn wake_up_disable(&mut self) -> Result<(), StepError<Error<B::Error>>> {
        let mut seq = Seq::new();

        seq.step(self.int2_route_wake_up_set(PROPERTY_DISABLE))?;
        seq.step(self.basic_interrupts_set(PROPERTY_DISABLE))?;
        seq.step(self.wake_up_duration_set(0x00))?;
        seq.step(self.wake_up_threshold_set(0x00))?;

        Ok(())
    }

    /// Arm single-tap detection on all three axes.
    ///
    /// Forces the accelerometer to 416 Hz / ±2 g and routes the event onto
    /// INT1.
    pub fn single_tap_enable(&mut self) -> Result<(), StepError<Error<B::Error>>> {
        let mut seq = Seq::new();

        seq.step(self.xl_data_rate_set(416.0))?;
        seq.step(self.xl_full_scale_set(2.0))?;
        seq.step(self.tap_axis_x_set(PROPERTY_ENABLE))?;
        seq.step(self.tap_axis_y_set(PROPERTY_ENABLE))?;
        seq.step(self.tap_axis_z_set(PROPERTY_ENABLE))?;
        seq.step(self.tap_threshold_set(TAP_THRESHOLD_MID_LOW))?;
        seq.step(self.tap_shock_time_set(TAP_SHOCK_TIME_MID_HIGH))?;
        seq.step(self.tap_quiet_time_set(TAP_QUIET_TIME_MID_LOW))?;
        // Tap duration time window and single/double selection do not
        // matter for single tap.
        seq.step(self.basic_interrupts_set(PROPERTY_ENABLE))?;
        seq.step(self.int1_route_single_tap_set(PROPERTY_ENABLE))?;

        Ok(())
    }

    /// Disarm single-tap detection and reset its thresholds to the off
    /// values.
    ///
    /// The shared basic-interrupts enable bit is cleared unconditionally,
    /// even when other embedded functions still have events routed.
    pub fn single_tap_disable(&mut self) -> Result<(), StepError<Error<B::Error>>> {
        let mut seq = Seq::new();

        seq.step(self.int1_route_single_tap_set(PROPERTY_DISABLE))?;
        seq.step(self.basic_interrupts_set(PROPERTY_DISABLE))?;
        seq.step(self.tap_threshold_set(0x00))?;
        seq.step(self.tap_shock_time_set(0x00))?;
        seq.step(self.tap_quiet_time_set(0x00))?;
        seq.step(self.tap_axis_z_set(PROPERTY_DISABLE))?;
        seq.step(self.tap_axis_y_set(PROPERTY_DISABLE))?;
        seq.step(self.tap_axis_x_set(PROPERTY_DISABLE))?;

        Ok(())
    }

    /// Arm double-tap detection on all three axes.
    ///
    /// Forces the accelerometer to 416 Hz / ±2 g and routes the event onto
    /// INT1.
    pub fn double_tap_enable(&mut self) -> Result<(), StepError<Error<B::Error>>> {
        let mut seq = Seq::new();

        seq.step(self.xl_data_rate_set(416.0))?;
        seq.step(self.xl_full_scale_set(2.0))?;
        seq.step(self.tap_axis_x_set(PROPERTY_ENABLE))?;
        seq.step(self.tap_axis_y_set(PROPERTY_ENABLE))?;
        seq.step(self.tap_axis_z_set(PROPERTY_ENABLE))?;
        seq.step(self.tap_threshold_set(TAP_THRESHOLD_MID_LOW))?;
        seq.step(self.tap_shock_time_set(TAP_SHOCK_TIME_HIGH))?;
        seq.step(self.tap_quiet_time_set(TAP_QUIET_TIME_HIGH))?;
        seq.step(self.tap_duration_time_set(TAP_DURATION_TIME_MID))?;
        seq.step(self.tap_mode_set(PROPERTY_ENABLE))?;
        seq.step(self.basic_interrupts_set(PROPERTY_ENABLE))?;
        seq.step(self.int1_route_double_tap_set(PROPERTY_ENABLE))?;

        Ok(())
    }

    /// Disarm double-tap detection and reset its thresholds to the off
    /// values, leaving single-tap-only mode selected.
    ///
    /// The shared basic-interrupts enable bit is cleared unconditionally,
    /// even when other embedded functions still have events routed.
    pub fn double_tap_disable(&mut self) -> Result<(), StepError<Error<B::Error>>> {
        let mut seq = Seq::new();

        seq.step(self.int1_route_double_tap_set(PROPERTY_DISABLE))?;
        seq.step(self.basic_interrupts_set(PROPERTY_DISABLE))?;
        seq.step(self.tap_threshold_set(0x00))?;
        seq.step(self.tap_shock_time_set(0x00))?;
        seq.step(self.tap_quiet_time_set(0x00))?;
        seq.step(self.tap_duration_time_set(0x00))?;
        seq.step(self.tap_mode_set(PROPERTY_DISABLE))?;
        seq.step(self.tap_axis_z_set(PROPERTY_DISABLE))?;
        seq.step(self.tap_axis_y_set(PROPERTY_DISABLE))?;
        seq.step(self.tap_axis_x_set(PROPERTY_DISABLE))?;

        Ok(())
    }

    /// Arm 6D orientation detection with a 60 degree threshold.
    ///
    /// Forces the accelerometer to 416 Hz / ±2 g and routes the event onto
    /// INT1.
    pub fn sixd_orientation_enable(&mut self) -> Result<(), StepError<Error<B::Error>>> {
        let mut seq = Seq::new();

        seq.step(self.xl_data_rate_set(416.0))?;
        seq.step(self.xl_full_scale_set(2.0))?;
        seq.step(self.sixd_threshold_set(SixdThs::_60deg))?;
        seq.step(self.basic_interrupts_set(PROPERTY_ENABLE))?;
        seq.step(self.int1_route_6d_set(PROPERTY_ENABLE))?;

        Ok(())
    }

    /// Disarm 6D orientation detection and restore the default 80 degree
    /// threshold.
    ///
    /// The shared basic-interrupts enable bit is cleared unconditionally,
    /// even when other embedded functions still have events routed.
    pub fn sixd_orientation_disable(&mut self) -> Result<(), StepError<Error<B::Error>>> {
        let mut seq = Seq::new();

        seq.step(self.int1_route_6d_set(PROPERTY_DISABLE))?;
        seq.step(self.basic_interrupts_set(PROPERTY_DISABLE))?;
        seq.step(self.sixd_threshold_set(SixdThs::_80deg))?;

        Ok(())
    }

    /// Arm the pedometer.
    ///
    /// Forces the accelerometer to 26 Hz / ±2 g, programs the step
    /// threshold, enables the embedded functions block and routes the step
    /// detector onto INT1.
    pub fn pedometer_enable(&mut self) -> Result<(), StepError<Error<B::Error>>> {
        let mut seq = Seq::new();

        seq.step(self.xl_data_rate_set(26.0))?;
        seq.step(self.xl_full_scale_set(2.0))?;
        seq.step(self.pedo_threshold_set(PEDO_THRESHOLD_MID_HIGH))?;
        seq.step(self.func_en_set(PROPERTY_ENABLE))?;
        seq.step(self.pedo_en_set(PROPERTY_ENABLE))?;
        seq.step(self.int1_route_step_detector_set(PROPERTY_ENABLE))?;

        Ok(())
    }

    /// Disarm the pedometer and reset the step threshold.
    pub fn pedometer_disable(&mut self) -> Result<(), StepError<Error<B::Error>>> {
        let mut seq = Seq::new();

        seq.step(self.int1_route_step_detector_set(PROPERTY_DISABLE))?;
        seq.step(self.pedo_en_set(PROPERTY_DISABLE))?;
        seq.step(self.func_en_set(PROPERTY_DISABLE))?;
        seq.step(self.pedo_threshold_set(0x00))?;

        Ok(())
    }

    /// Arm tilt detection.
    ///
    /// Forces the accelerometer to 26 Hz / ±2 g, enables the embedded
    /// functions block and routes the event onto INT1.
    pub fn tilt_enable(&mut self) -> Result<(), StepError<Error<B::Error>>> {
        let mut seq = Seq::new();

        seq.step(self.xl_data_rate_set(26.0))?;
        seq.step(self.xl_full_scale_set(2.0))?;
        seq.step(self.func_en_set(PROPERTY_ENABLE))?;
        seq.step(self.tilt_en_set(PROPERTY_ENABLE))?;
        seq.step(self.int1_route_tilt_set(PROPERTY_ENABLE))?;

        Ok(())
    }

    /// Disarm tilt detection.
    pub fn tilt_disable(&mut self) -> Result<(), StepError<Error<B::Error>>> {
        let mut seq = Seq::new();

        seq.step(self.int1_route_tilt_set(PROPERTY_DISABLE))?;
        seq.step(self.tilt_en_set(PROPERTY_DISABLE))?;
        seq.step(self.func_en_set(PROPERTY_DISABLE))?;

        Ok(())
    }

    /// Status of all the embedded motion-detection events.
    ///
    /// Each flag is the AND of the interrupt routing bit and the source
    /// bit, read live from the device on every call: a source bit raised
    /// while the function was never routed does not report an event.
    pub fn event_status_get(&mut self) -> Result<EventStatus, Error<B::Error>> {
        let wake_up_src = WakeUpSrc::read(self)?;
        let tap_src = TapSrc::read(self)?;
        let d6d_src = D6dSrc::read(self)?;
        let func_src1 = FuncSrc1::read(self)?;
        let md1_cfg = Md1Cfg::read(self)?;
        let md2_cfg = Md2Cfg::read(self)?;
        let int1_ctrl = Int1Ctrl::read(self)?;

        Ok(EventStatus {
            free_fall: md1_cfg.int1_ff() == PROPERTY_ENABLE
                && wake_up_src.ff_ia() == PROPERTY_ENABLE,
            wake_up: md2_cfg.int2_wu() == PROPERTY_ENABLE
                && wake_up_src.wu_ia() == PROPERTY_ENABLE,
            single_tap: md1_cfg.int1_single_tap() == PROPERTY_ENABLE
                && tap_src.single_tap() == PROPERTY_ENABLE,
            double_tap: md1_cfg.int1_double_tap() == PROPERTY_ENABLE
                && tap_src.double_tap() == PROPERTY_ENABLE,
            six_d_orientation: md1_cfg.int1_6d() == PROPERTY_ENABLE
                && d6d_src.d6d_ia() == PROPERTY_ENABLE,
            step_detected: int1_ctrl.int1_step_detector() == PROPERTY_ENABLE
                && func_src1.step_detected() == PROPERTY_ENABLE,
            tilt: md1_cfg.int1_tilt() == PROPERTY_ENABLE
                && func_src1.tilt_ia() == PROPERTY_ENABLE,
        })
    }

    fn xl_odr_code_write(&mut self, code: u8) -> Result<(), Error<B::Error>> {
        let mut ctrl1_xl = Ctrl1Xl::read(self)?;
        ctrl1_xl.set_odr_xl(code);
        ctrl1_xl.write(self)
    }

    fn gy_odr_code_write(&mut self, code: u8) -> Result<(), Error<B::Error>> {
        let mut ctrl2_g = Ctrl2G::read(self)?;
        ctrl2_g.set_odr_g(code);
        ctrl2_g.write(self)
    }

    fn tap_axis_x_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut tap_cfg = TapCfg::read(self)?;
        tap_cfg.set_tap_x_en(val);
        tap_cfg.write(self)
    }

    fn tap_axis_y_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut tap_cfg = TapCfg::read(self)?;
        tap_cfg.set_tap_y_en(val);
        tap_cfg.write(self)
    }

    fn tap_axis_z_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut tap_cfg = TapCfg::read(self)?;
        tap_cfg.set_tap_z_en(val);
        tap_cfg.write(self)
    }

    fn func_en_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut ctrl10_c = Ctrl10C::read(self)?;
        ctrl10_c.set_func_en(val);
        ctrl10_c.write(self)
    }

    fn pedo_en_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut ctrl10_c = Ctrl10C::read(self)?;
        ctrl10_c.set_pedo_en(val);
        ctrl10_c.write(self)
    }

    fn tilt_en_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut ctrl10_c = Ctrl10C::read(self)?;
        ctrl10_c.set_tilt_en(val);
        ctrl10_c.write(self)
    }

    fn int1_route_ff_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut md1_cfg = Md1Cfg::read(self)?;
        md1_cfg.set_int1_ff(val);
        md1_cfg.write(self)
    }

    fn int1_route_single_tap_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut md1_cfg = Md1Cfg::read(self)?;
        md1_cfg.set_int1_single_tap(val);
        md1_cfg.write(self)
    }

    fn int1_route_double_tap_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut md1_cfg = Md1Cfg::read(self)?;
        md1_cfg.set_int1_double_tap(val);
        md1_cfg.write(self)
    }

    fn int1_route_6d_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut md1_cfg = Md1Cfg::read(self)?;
        md1_cfg.set_int1_6d(val);
        md1_cfg.write(self)
    }

    fn int1_route_tilt_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut md1_cfg = Md1Cfg::read(self)?;
        md1_cfg.set_int1_tilt(val);
        md1_cfg.write(self)
    }

    fn int1_route_step_detector_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut int1_ctrl = Int1Ctrl::read(self)?;
        int1_ctrl.set_int1_step_detector(val);
        int1_ctrl.write(self)
    }

    fn int2_route_wake_up_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut md2_cfg = Md2Cfg::read(self)?;
        md2_cfg.set_int2_wu(val);
        md2_cfg.write(self)
    }
}
