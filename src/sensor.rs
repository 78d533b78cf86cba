//! Capability traits for inertial sensor drivers.
//!
//! Each physical device implements the capabilities it actually has: an
//! accelerometer-only part implements [`Accelerometer`], a combo part such
//! as the LSM6DSL implements all three. The traits carry no state beyond
//! the driver handle, so generic application code can hold any mix of
//! devices behind the same bounds.

use crate::driver::{Error, EventStatus, Lsm6dsl, StepError};

use embedded_hal::delay::DelayNs;
use st_mems_bus::BusOperation;

/// Embedded motion-detection functions a device can arm.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Feature {
    FreeFall,
    WakeUp,
    SingleTap,
    DoubleTap,
    SixDOrientation,
    Pedometer,
    Tilt,
}

/// Linear acceleration sensing.
///
/// Rates and ranges are requested in physical units and rounded up to the
/// nearest setting the device supports; axes are returned in mg.
pub trait Accelerometer {
    type Error;

    fn accel_enable(&mut self) -> Result<(), Self::Error>;
    fn accel_disable(&mut self) -> Result<(), Self::Error>;
    fn accel_data_rate_set(&mut self, odr_hz: f32) -> Result<(), Self::Error>;
    fn accel_data_rate_get(&mut self) -> Result<f32, Self::Error>;
    fn accel_full_scale_set(&mut self, fs_g: f32) -> Result<(), Self::Error>;
    fn accel_full_scale_get(&mut self) -> Result<f32, Self::Error>;
    fn accel_axes_get(&mut self) -> Result<[i32; 3], Self::Error>;
}

/// Angular rate sensing.
///
/// Axes are returned in mdps.
pub trait Gyroscope {
    type Error;

    fn gyro_enable(&mut self) -> Result<(), Self::Error>;
    fn gyro_disable(&mut self) -> Result<(), Self::Error>;
    fn gyro_data_rate_set(&mut self, odr_hz: f32) -> Result<(), Self::Error>;
    fn gyro_data_rate_get(&mut self) -> Result<f32, Self::Error>;
    fn gyro_full_scale_set(&mut self, fs_dps: f32) -> Result<(), Self::Error>;
    fn gyro_full_scale_get(&mut self) -> Result<f32, Self::Error>;
    fn gyro_axes_get(&mut self) -> Result<[i32; 3], Self::Error>;
}

/// Embedded motion-detection functions and their event status.
///
/// Arming a feature may reprogram the data rate and full scale the
/// feature needs; disarming resets its thresholds to the off values.
pub trait MotionEvents {
    type Error;

    fn feature_enable(&mut self, feature: Feature) -> Result<(), StepError<Self::Error>>;
    fn feature_disable(&mut self, feature: Feature) -> Result<(), StepError<Self::Error>>;
    fn event_status_get(&mut self) -> Result<EventStatus, Self::Error>;
}

impl<B: BusOperation, T: DelayNs> Accelerometer for Lsm6dsl<B, T> {
    type Error = Error<B::Error>;

    fn accel_enable(&mut self) -> Result<(), Self::Error> {
        self.xl_enable()
    }

    fn accel_disable(&mut self) -> Result<(), Self::Error> {
        self.xl_disable()
    }

    fn accel_data_rate_set(&mut self, odr_hz: f32) -> Result<(), Self::Error> {
        self.xl_data_rate_set(odr_hz)
    }

    fn accel_data_rate_get(&mut self) -> Result<f32, Self::Error> {
        self.xl_data_rate_get()
    }

    fn accel_full_scale_set(&mut self, fs_g: f32) -> Result<(), Self::Error> {
        self.xl_full_scale_set(fs_g)
    }

    fn accel_full_scale_get(&mut self) -> Result<f32, Self::Error> {
        self.xl_full_scale_get()
    }

    fn accel_axes_get(&mut self) -> Result<[i32; 3], Self::Error> {
        self.acceleration_mg_get()
    }
}

impl<B: BusOperation, T: DelayNs> Gyroscope for Lsm6dsl<B, T> {
    type Error = Error<B::Error>;

    fn gyro_enable(&mut self) -> Result<(), Self::Error> {
        self.gy_enable()
    }

    fn gyro_disable(&mut self) -> Result<(), Self::Error> {
        self.gy_disable()
    }

    fn gyro_data_rate_set(&mut self, odr_hz: f32) -> Result<(), Self::Error> {
        self.gy_data_rate_set(odr_hz)
    }

    fn gyro_data_rate_get(&mut self) -> Result<f32, Self::Error> {
        self.gy_data_rate_get()
    }

    fn gyro_full_scale_set(&mut self, fs_dps: f32) -> Result<(), Self::Error> {
        self.gy_full_scale_set(fs_dps)
    }

    fn gyro_full_scale_get(&mut self) -> Result<f32, Self::Error> {
        self.gy_full_scale_get()
    }

    fn gyro_axes_get(&mut self) -> Result<[i32; 3], Self::Error> {
        self.angular_rate_mdps_get()
    }
}

impl<B: BusOperation, T: DelayNs> MotionEvents for Lsm6dsl<B, T> {
    type Error = Error<B::Error>;

    fn feature_enable(&mut self, feature: Feature) -> Result<(), StepError<Self::Error>> {
        match feature {
            Feature::FreeFall => self.free_fall_enable(),
            Feature::WakeUp => self.wake_up_enable(),
            Feature::SingleTap => self.single_tap_enable(),
            Feature::DoubleTap => self.double_tap_enable(),
            Feature::SixDOrientation => self.sixd_orientation_enable(),
            Feature::Pedometer => self.pedometer_enable(),
            Feature::Tilt => self.tilt_enable(),
        }
    }

    fn feature_disable(&mut self, feature: Feature) -> Result<(), StepError<Self::Error>> {
        match feature {
            Feature::FreeFall => self.free_fall_disable(),
            Feature::WakeUp => self.wake_up_disable(),
            Feature::SingleTap => self.single_tap_disable(),
            Feature::DoubleTap => self.double_tap_disable(),
            Feature::SixDOrientation => self.sixd_orientation_disable(),
            Feature::Pedometer => self.pedometer_disable(),
            Feature::Tilt => self.tilt_disable(),
        }
    }

    fn event_status_get(&mut self) -> Result<EventStatus, Self::Error> {
        Lsm6dsl::event_status_get(self)
    }
}
