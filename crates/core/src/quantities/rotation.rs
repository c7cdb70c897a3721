//! Torque, rotation speed and the angle they sweep out.

use crate::quantity::quantity;
use crate::units::{AngleUnit, RotationSpeedUnit, TorqueUnit};

quantity! {
    /// Torque, stored in newton-meters.
    Torque, TorqueUnit
}

quantity! {
    /// Shaft rotation speed, stored in revolutions per minute.
    RotationSpeed, RotationSpeedUnit
}

quantity! {
    /// Plane angle, stored in radians.
    ///
    /// Only what rotation-speed × time needs: construction, conversion and
    /// same-type arithmetic.
    Angle, AngleUnit
}
