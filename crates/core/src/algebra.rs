//! Cross-quantity algebra.
//!
//! Operators between two different quantity types that produce a third,
//! following the physical relationships between them (distance / time =
//! speed, pressure × area = force, ...). Each relation converts both operands
//! to SI units, combines them, and builds the result in its SI unit.
//!
//! The set is closed: a pair with no implementation here simply has no
//! operator, so mixing incompatible quantities is a compile error rather than
//! a wrong number.
//!
//! ```
//! use measurement::{Length, LengthUnit, Speed, SpeedUnit, TimeDuration, TimeUnit};
//!
//! let speed = Length::new(10.0, LengthUnit::Meter) / TimeDuration::new(2.0, TimeUnit::Second);
//! assert_eq!(speed, Speed::new(5.0, SpeedUnit::MeterPerSecond));
//! ```
//!
//! ```compile_fail
//! use measurement::{Length, LengthUnit, Speed, SpeedUnit};
//!
//! // Length + Speed has no meaning
//! let _ = Length::new(1.0, LengthUnit::Meter) + Speed::new(1.0, SpeedUnit::MeterPerSecond);
//! ```
//!
//! ```compile_fail
//! use measurement::{Temperature, TemperatureUnit};
//!
//! // Temperatures are affine; they cannot be scaled
//! let _ = Temperature::new(20.0, TemperatureUnit::Celsius) * 2.0;
//! ```
//!
//! ```compile_fail
//! use measurement::{Speed, SpeedUnit, TimeDuration, TimeUnit};
//!
//! // Only Speed × TimeDuration is defined, not the reverse
//! let _ = TimeDuration::new(1.0, TimeUnit::Second) * Speed::new(1.0, SpeedUnit::MeterPerSecond);
//! ```

use crate::quantities::{
    Acceleration, Angle, Area, Current, Density, Energy, Force, Length, Mass, Power, Pressure,
    Resistance, RotationSpeed, Speed, TimeDuration, Torque, Voltage, Volume,
};
use crate::units::{
    AccelerationUnit, AngleUnit, AreaUnit, CurrentUnit, DensityUnit, EnergyUnit, ForceUnit,
    LengthUnit, MassUnit, PowerUnit, PressureUnit, ResistanceUnit, RotationSpeedUnit, SpeedUnit,
    TimeUnit, TorqueUnit, VoltageUnit, VolumeUnit,
};
use std::ops::{Div, Mul};
use tracing::trace;

// ============================================================================
// TIME
// ============================================================================

// Ratio of two durations
impl Div<TimeDuration> for TimeDuration {
    type Output = f64;
    fn div(self, rhs: TimeDuration) -> f64 {
        self.value(TimeUnit::Second) / rhs.value(TimeUnit::Second)
    }
}

// ============================================================================
// GEOMETRY
// ============================================================================

// length × length = area
impl Mul<Length> for Length {
    type Output = Area;
    fn mul(self, rhs: Length) -> Area {
        Area::new(
            self.value(LengthUnit::Meter) * rhs.value(LengthUnit::Meter),
            AreaUnit::SquareMeter,
        )
    }
}

// length × area = volume
impl Mul<Area> for Length {
    type Output = Volume;
    fn mul(self, rhs: Area) -> Volume {
        Volume::new(
            self.value(LengthUnit::Meter) * rhs.value(AreaUnit::SquareMeter),
            VolumeUnit::CubicMeter,
        )
    }
}

// distance × force = work
impl Mul<Force> for Length {
    type Output = Energy;
    fn mul(self, rhs: Force) -> Energy {
        Energy::new(
            self.value(LengthUnit::Meter) * rhs.value(ForceUnit::Newton),
            EnergyUnit::Joule,
        )
    }
}

// distance / time = speed
impl Div<TimeDuration> for Length {
    type Output = Speed;
    fn div(self, rhs: TimeDuration) -> Speed {
        Speed::new(
            self.value(LengthUnit::Meter) / rhs.value(TimeUnit::Second),
            SpeedUnit::MeterPerSecond,
        )
    }
}

// Ratio of two lengths
impl Div<Length> for Length {
    type Output = f64;
    fn div(self, rhs: Length) -> f64 {
        self.value(LengthUnit::Meter) / rhs.value(LengthUnit::Meter)
    }
}

// area / length = length
impl Div<Length> for Area {
    type Output = Length;
    fn div(self, rhs: Length) -> Length {
        Length::new(
            self.value(AreaUnit::SquareMeter) / rhs.value(LengthUnit::Meter),
            LengthUnit::Meter,
        )
    }
}

// area × length = volume
impl Mul<Length> for Area {
    type Output = Volume;
    fn mul(self, rhs: Length) -> Volume {
        Volume::new(
            self.value(AreaUnit::SquareMeter) * rhs.value(LengthUnit::Meter),
            VolumeUnit::CubicMeter,
        )
    }
}

// Ratio of two areas
impl Div<Area> for Area {
    type Output = f64;
    fn div(self, rhs: Area) -> f64 {
        self.value(AreaUnit::SquareMeter) / rhs.value(AreaUnit::SquareMeter)
    }
}

// volume / length = area
impl Div<Length> for Volume {
    type Output = Area;
    fn div(self, rhs: Length) -> Area {
        Area::new(
            self.value(VolumeUnit::CubicMeter) / rhs.value(LengthUnit::Meter),
            AreaUnit::SquareMeter,
        )
    }
}

// volume / area = length
impl Div<Area> for Volume {
    type Output = Length;
    fn div(self, rhs: Area) -> Length {
        Length::new(
            self.value(VolumeUnit::CubicMeter) / rhs.value(AreaUnit::SquareMeter),
            LengthUnit::Meter,
        )
    }
}

// ============================================================================
// MOTION
// ============================================================================

// speed / time = acceleration
impl Div<TimeDuration> for Speed {
    type Output = Acceleration;
    fn div(self, rhs: TimeDuration) -> Acceleration {
        Acceleration::new(
            self.value(SpeedUnit::MeterPerSecond) / rhs.value(TimeUnit::Second),
            AccelerationUnit::MeterPerSecondSquared,
        )
    }
}

// speed × time = distance
impl Mul<TimeDuration> for Speed {
    type Output = Length;
    fn mul(self, rhs: TimeDuration) -> Length {
        Length::new(
            self.value(SpeedUnit::MeterPerSecond) * rhs.value(TimeUnit::Second),
            LengthUnit::Meter,
        )
    }
}

// acceleration × time = speed
impl Mul<TimeDuration> for Acceleration {
    type Output = Speed;
    fn mul(self, rhs: TimeDuration) -> Speed {
        Speed::new(
            self.value(AccelerationUnit::MeterPerSecondSquared) * rhs.value(TimeUnit::Second),
            SpeedUnit::MeterPerSecond,
        )
    }
}

// acceleration × mass = force
impl Mul<Mass> for Acceleration {
    type Output = Force;
    fn mul(self, rhs: Mass) -> Force {
        Force::new(
            self.value(AccelerationUnit::MeterPerSecondSquared) * rhs.value(MassUnit::Kilogram),
            ForceUnit::Newton,
        )
    }
}

// ============================================================================
// MECHANICS
// ============================================================================

// mass × acceleration = force
impl Mul<Acceleration> for Mass {
    type Output = Force;
    fn mul(self, rhs: Acceleration) -> Force {
        Force::new(
            self.value(MassUnit::Kilogram) * rhs.value(AccelerationUnit::MeterPerSecondSquared),
            ForceUnit::Newton,
        )
    }
}

// mass / volume = density
impl Div<Volume> for Mass {
    type Output = Density;
    fn div(self, rhs: Volume) -> Density {
        Density::new(
            self.value(MassUnit::Kilogram) / rhs.value(VolumeUnit::CubicMeter),
            DensityUnit::KilogramPerCubicMeter,
        )
    }
}

// force × distance = work
impl Mul<Length> for Force {
    type Output = Energy;
    fn mul(self, rhs: Length) -> Energy {
        Energy::new(
            self.value(ForceUnit::Newton) * rhs.value(LengthUnit::Meter),
            EnergyUnit::Joule,
        )
    }
}

// force / mass = acceleration
impl Div<Mass> for Force {
    type Output = Acceleration;
    fn div(self, rhs: Mass) -> Acceleration {
        Acceleration::new(
            self.value(ForceUnit::Newton) / rhs.value(MassUnit::Kilogram),
            AccelerationUnit::MeterPerSecondSquared,
        )
    }
}

// force / acceleration = mass
impl Div<Acceleration> for Force {
    type Output = Mass;
    fn div(self, rhs: Acceleration) -> Mass {
        Mass::new(
            self.value(ForceUnit::Newton) / rhs.value(AccelerationUnit::MeterPerSecondSquared),
            MassUnit::Kilogram,
        )
    }
}

// force / area = pressure
impl Div<Area> for Force {
    type Output = Pressure;
    fn div(self, rhs: Area) -> Pressure {
        Pressure::new(
            self.value(ForceUnit::Newton) / rhs.value(AreaUnit::SquareMeter),
            PressureUnit::Pascal,
        )
    }
}

#[cfg(feature = "legacy-compat")]
impl Force {
    /// The historical `Force × Length`, which added newtons to meters
    /// instead of multiplying them.
    ///
    /// Only for reproducing previously stored results. Use
    /// `force * length` for work.
    #[must_use]
    pub fn legacy_mul_length(self, distance: Length) -> Energy {
        tracing::warn!(
            newtons = self.value(ForceUnit::Newton),
            meters = distance.value(LengthUnit::Meter),
            "additive legacy Force x Length in use"
        );
        Energy::new(
            self.value(ForceUnit::Newton) + distance.value(LengthUnit::Meter),
            EnergyUnit::Joule,
        )
    }
}

// pressure × area = force
impl Mul<Area> for Pressure {
    type Output = Force;
    fn mul(self, rhs: Area) -> Force {
        Force::new(
            self.value(PressureUnit::Pascal) * rhs.value(AreaUnit::SquareMeter),
            ForceUnit::Newton,
        )
    }
}

// density × volume = mass
impl Mul<Volume> for Density {
    type Output = Mass;
    fn mul(self, rhs: Volume) -> Mass {
        Mass::new(
            self.value(DensityUnit::GramPerCubicCentimeter) * rhs.value(VolumeUnit::CubicCentimeter),
            MassUnit::Gram,
        )
    }
}

// ============================================================================
// ENERGY & POWER
// ============================================================================

// energy / time = power
impl Div<TimeDuration> for Energy {
    type Output = Power;
    fn div(self, rhs: TimeDuration) -> Power {
        Power::new(
            self.value(EnergyUnit::Joule) / rhs.value(TimeUnit::Second),
            PowerUnit::Watt,
        )
    }
}

// work / distance = force
impl Div<Length> for Energy {
    type Output = Force;
    fn div(self, rhs: Length) -> Force {
        Force::new(
            self.value(EnergyUnit::Joule) / rhs.value(LengthUnit::Meter),
            ForceUnit::Newton,
        )
    }
}

// work / force = distance
impl Div<Force> for Energy {
    type Output = Length;
    fn div(self, rhs: Force) -> Length {
        Length::new(
            self.value(EnergyUnit::Joule) / rhs.value(ForceUnit::Newton),
            LengthUnit::Meter,
        )
    }
}

// energy / volume = pressure (J/m³ = Pa)
impl Div<Volume> for Energy {
    type Output = Pressure;
    fn div(self, rhs: Volume) -> Pressure {
        Pressure::new(
            self.value(EnergyUnit::Joule) / rhs.value(VolumeUnit::CubicMeter),
            PressureUnit::Pascal,
        )
    }
}

// energy / pressure = volume
impl Div<Pressure> for Energy {
    type Output = Volume;
    fn div(self, rhs: Pressure) -> Volume {
        Volume::new(
            self.value(EnergyUnit::Joule) / rhs.value(PressureUnit::Pascal),
            VolumeUnit::CubicMeter,
        )
    }
}

impl Energy {
    /// Reinterpret as torque (1 J ≡ 1 N·m).
    #[inline]
    #[must_use]
    pub fn to_torque(self) -> Torque {
        Torque::new(self.value(EnergyUnit::Joule), TorqueUnit::NewtonMeter)
    }
}

impl Torque {
    /// Reinterpret as energy (1 N·m ≡ 1 J).
    #[inline]
    #[must_use]
    pub fn to_energy(self) -> Energy {
        Energy::new(self.value(TorqueUnit::NewtonMeter), EnergyUnit::Joule)
    }
}

impl From<Torque> for Energy {
    fn from(torque: Torque) -> Energy {
        torque.to_energy()
    }
}

impl From<Energy> for Torque {
    fn from(energy: Energy) -> Torque {
        energy.to_torque()
    }
}

// power × time = energy
impl Mul<TimeDuration> for Power {
    type Output = Energy;
    fn mul(self, rhs: TimeDuration) -> Energy {
        Energy::new(
            self.value(PowerUnit::Watt) * rhs.value(TimeUnit::Second),
            EnergyUnit::Joule,
        )
    }
}

// power / current = voltage
impl Div<Current> for Power {
    type Output = Voltage;
    fn div(self, rhs: Current) -> Voltage {
        Voltage::new(
            self.value(PowerUnit::Watt) / rhs.value(CurrentUnit::Ampere),
            VoltageUnit::Volt,
        )
    }
}

// power / voltage = current
impl Div<Voltage> for Power {
    type Output = Current;
    fn div(self, rhs: Voltage) -> Current {
        Current::new(
            self.value(PowerUnit::Watt) / rhs.value(VoltageUnit::Volt),
            CurrentUnit::Ampere,
        )
    }
}

// power / force = speed
impl Div<Force> for Power {
    type Output = Speed;
    fn div(self, rhs: Force) -> Speed {
        Speed::new(
            self.value(PowerUnit::Watt) / rhs.value(ForceUnit::Newton),
            SpeedUnit::MeterPerSecond,
        )
    }
}

// power / speed = force
impl Div<Speed> for Power {
    type Output = Force;
    fn div(self, rhs: Speed) -> Force {
        Force::new(
            self.value(PowerUnit::Watt) / rhs.value(SpeedUnit::MeterPerSecond),
            ForceUnit::Newton,
        )
    }
}

// ============================================================================
// ELECTRICAL
// ============================================================================

// voltage × current = power
impl Mul<Current> for Voltage {
    type Output = Power;
    fn mul(self, rhs: Current) -> Power {
        Power::new(
            self.value(VoltageUnit::Volt) * rhs.value(CurrentUnit::Ampere),
            PowerUnit::Watt,
        )
    }
}

// Ohm's law: voltage / current = resistance
impl Div<Current> for Voltage {
    type Output = Resistance;
    fn div(self, rhs: Current) -> Resistance {
        Resistance::new(
            self.value(VoltageUnit::Volt) / rhs.value(CurrentUnit::Ampere),
            ResistanceUnit::Ohm,
        )
    }
}

// current × voltage = power
impl Mul<Voltage> for Current {
    type Output = Power;
    fn mul(self, rhs: Voltage) -> Power {
        Power::new(
            self.value(CurrentUnit::Ampere) * rhs.value(VoltageUnit::Volt),
            PowerUnit::Watt,
        )
    }
}

// Ohm's law: resistance × current = voltage
impl Mul<Current> for Resistance {
    type Output = Voltage;
    fn mul(self, rhs: Current) -> Voltage {
        Voltage::new(
            self.value(ResistanceUnit::Ohm) * rhs.value(CurrentUnit::Ampere),
            VoltageUnit::Volt,
        )
    }
}

// ============================================================================
// ROTATION
// ============================================================================

// torque / force = lever arm
impl Div<Force> for Torque {
    type Output = Length;
    fn div(self, rhs: Force) -> Length {
        Length::new(
            self.value(TorqueUnit::NewtonMeter) / rhs.value(ForceUnit::Newton),
            LengthUnit::Meter,
        )
    }
}

// torque / lever arm = force
impl Div<Length> for Torque {
    type Output = Force;
    fn div(self, rhs: Length) -> Force {
        Force::new(
            self.value(TorqueUnit::NewtonMeter) / rhs.value(LengthUnit::Meter),
            ForceUnit::Newton,
        )
    }
}

// Shaft power: |ω| × |τ|, negative when torque opposes the direction of rotation
impl Mul<Torque> for RotationSpeed {
    type Output = Power;
    fn mul(self, rhs: Torque) -> Power {
        let omega = self.value(RotationSpeedUnit::RadianPerSecond).abs();
        let magnitude = omega * rhs.value(TorqueUnit::NewtonMeter).abs();
        if rhs.is_negative() == self.is_negative() {
            Power::new(magnitude, PowerUnit::Watt)
        } else {
            trace!(
                rpm = self.value(RotationSpeedUnit::RevolutionPerMinute),
                torque_nm = rhs.value(TorqueUnit::NewtonMeter),
                "torque opposes rotation, shaft power is negative"
            );
            Power::new(-magnitude, PowerUnit::Watt)
        }
    }
}

// rotation speed × time = angle swept
impl Mul<TimeDuration> for RotationSpeed {
    type Output = Angle;
    fn mul(self, rhs: TimeDuration) -> Angle {
        Angle::new(
            self.value(RotationSpeedUnit::RevolutionPerMinute) * rhs.value(TimeUnit::Minute),
            AngleUnit::Revolution,
        )
    }
}
