//! Speed and acceleration.

use crate::quantity::quantity;
use crate::units::{AccelerationUnit, SpeedUnit};

quantity! {
    /// Linear speed, stored in meters per second.
    Speed, SpeedUnit
}

quantity! {
    /// Linear acceleration, stored in meters per second squared.
    Acceleration, AccelerationUnit
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_speed_units() {
        assert_eq!(Speed::new(36.0, SpeedUnit::KilometerPerHour).value(SpeedUnit::MeterPerSecond), 10.0);
        assert_relative_eq!(Speed::new(60.0, SpeedUnit::MilePerHour).value(SpeedUnit::FootPerSecond), 88.0, max_relative = 1e-14);
        assert_relative_eq!(Speed::new(1.0, SpeedUnit::FootPerSecond).value(SpeedUnit::MeterPerSecond), 0.3048, max_relative = 1e-15);
    }

    #[test]
    fn test_speed_sign_probes() {
        assert!(Speed::new(-3.0, SpeedUnit::MilePerHour).is_negative());
        assert!(Speed::new(3.0, SpeedUnit::MilePerHour).is_positive());
    }

    #[test]
    fn test_acceleration_units() {
        let g = Acceleration::new(1.0, AccelerationUnit::StandardGravity);
        assert_eq!(g.value(AccelerationUnit::MeterPerSecondSquared), 9.80665);
        assert_relative_eq!(g.value(AccelerationUnit::FootPerSecondSquared), 32.17404855643044, max_relative = 1e-14);

        let a = Acceleration::new(36.0, AccelerationUnit::KilometerPerHourPerSecond);
        assert_eq!(a.value(AccelerationUnit::MeterPerSecondSquared), 10.0);
        assert_relative_eq!(
            Acceleration::new(1.0, AccelerationUnit::MilePerHourPerSecond).value(AccelerationUnit::MeterPerSecondSquared),
            0.44704,
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_acceleration_scalar_ops() {
        let a = Acceleration::new(2.0, AccelerationUnit::MeterPerSecondSquared);
        assert_eq!((a * 2.5).value(AccelerationUnit::MeterPerSecondSquared), 5.0);
        assert_eq!((a / 4.0).value(AccelerationUnit::MeterPerSecondSquared), 0.5);
    }
}
