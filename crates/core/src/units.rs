//! Closed unit tables for every quantity.
//!
//! Each quantity owns one enum of named units. The enum implements
//! [`UnitConversion`], an exhaustive `match` mapping a value in that unit to
//! the quantity's reference unit and back. Several units reach the reference
//! through another unit of the same table (inches through millimeters,
//! gallons through pints) instead of carrying a direct factor.
//!
//! ```
//! use measurement::units::{LengthUnit, UnitConversion, VolumeUnit};
//!
//! assert!((LengthUnit::Inch.to_reference(1.0) - 0.0254).abs() < 1e-15);
//! let liters = VolumeUnit::Gallon.to_reference(1.0);
//! assert_eq!(VolumeUnit::Pint.from_reference(liters), 8.0);
//! ```

use crate::error::{Result, UnitError};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

// ============================================================================
// TRAITS
// ============================================================================

/// Membership and naming of a closed unit table.
pub trait Unit: Copy + Eq + fmt::Debug + fmt::Display + 'static {
    /// Lowercase name of the quantity this table belongs to.
    const QUANTITY: &'static str;

    /// Every unit of the table, in declaration order.
    const ALL: &'static [Self];

    /// Short ASCII symbol (`"km"`, `"ft/s2"`, `"BTU/h"`).
    fn symbol(self) -> &'static str;
}

/// Scale, offset or composite formula tying a unit to its reference unit.
pub trait UnitConversion: Unit {
    /// Unit the owning quantity stores its canonical magnitude in.
    const REFERENCE: Self;

    /// Convert `value` expressed in `self` into the reference unit.
    fn to_reference(self, value: f64) -> f64;

    /// Convert a reference-unit magnitude into `self`.
    fn from_reference(self, reference: f64) -> f64;
}

fn parse_symbol<U: Unit>(symbol: &str) -> Result<U> {
    U::ALL
        .iter()
        .copied()
        .find(|unit| unit.symbol() == symbol)
        .ok_or_else(|| {
            debug!(quantity = U::QUANTITY, symbol, "unrecognized unit symbol");
            UnitError::UnknownUnit {
                quantity: U::QUANTITY,
                symbol: symbol.to_owned(),
            }
        })
}

macro_rules! unit_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $quantity:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $symbol:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl Unit for $name {
            const QUANTITY: &'static str = $quantity;
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn symbol(self) -> &'static str {
                match self {
                    $($name::$variant => $symbol),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.symbol())
            }
        }

        impl FromStr for $name {
            type Err = UnitError;

            fn from_str(s: &str) -> Result<Self> {
                parse_symbol(s)
            }
        }
    };
}

// ============================================================================
// CONVERSION CONSTANTS
// ============================================================================

/// Millimeters in one international inch
const MM_PER_INCH: f64 = 25.4;

/// Square meters in one square inch (0.0254²)
const SQ_METERS_PER_SQ_INCH: f64 = 0.00064516;

/// Liters in one cubic inch (0.254³)
const LITERS_PER_CUBIC_INCH: f64 = 0.016387064;

/// Liters in one US liquid pint
const LITERS_PER_PINT: f64 = 0.473176473;

/// Cubic inches in one cubic mile (63 360³)
const CUBIC_INCHES_PER_CUBIC_MILE: f64 = 254_358_061_056_000.0;

/// Standard gravity, m/s²
const STANDARD_GRAVITY: f64 = 9.80665;

/// Kilograms in one avoirdupois pound
const KG_PER_POUND: f64 = 0.45359237;

/// Newtons in one pound-force
const NEWTONS_PER_POUND_FORCE: f64 = 4.4482216152605;

/// Celsius to Kelvin conversion offset (0°C = 273.15 K)
const CELSIUS_KELVIN_OFFSET: f64 = 273.15;

/// Fahrenheit to Rankine conversion offset (0°F = 459.67°R)
const FAHRENHEIT_RANKINE_OFFSET: f64 = 459.67;

/// Rankine (and Fahrenheit) degrees per kelvin
const RANKINE_PER_KELVIN: f64 = 1.8;

/// Inch-pounds in one newton-meter (1 / (lbf × in))
const INCH_POUNDS_PER_NEWTON_METER: f64 = 1000.0 / (NEWTONS_PER_POUND_FORCE * MM_PER_INCH);

// ============================================================================
// TIME
// ============================================================================

unit_enum! {
    /// Units of [`TimeDuration`](crate::TimeDuration). Reference: second.
    TimeUnit, "time" {
        Second => "s",
        Minute => "min",
        Hour => "hr",
        Day => "day",
        Week => "week",
        /// Julian year of 365.25 days
        Year => "yr",
        Millisecond => "ms",
        Microsecond => "us",
        Nanosecond => "ns",
    }
}

impl UnitConversion for TimeUnit {
    const REFERENCE: Self = TimeUnit::Second;

    fn to_reference(self, value: f64) -> f64 {
        match self {
            Self::Second => value,
            Self::Minute => value * 60.0,
            Self::Hour => value * 3600.0,
            Self::Day => value * 86_400.0,
            Self::Week => value * 604_800.0,
            Self::Year => Self::Day.to_reference(value * 365.25),
            Self::Millisecond => value / 1e3,
            Self::Microsecond => value / 1e6,
            Self::Nanosecond => value / 1e9,
        }
    }

    fn from_reference(self, seconds: f64) -> f64 {
        match self {
            Self::Second => seconds,
            Self::Minute => seconds / 60.0,
            Self::Hour => seconds / 3600.0,
            Self::Day => seconds / 86_400.0,
            Self::Week => seconds / 604_800.0,
            Self::Year => Self::Day.from_reference(seconds) / 365.25,
            Self::Millisecond => seconds * 1e3,
            Self::Microsecond => seconds * 1e6,
            Self::Nanosecond => seconds * 1e9,
        }
    }
}

// ============================================================================
// GEOMETRY
// ============================================================================

unit_enum! {
    /// Units of [`Length`](crate::Length). Reference: meter.
    LengthUnit, "length" {
        Meter => "m",
        Centimeter => "cm",
        Millimeter => "mm",
        Micrometer => "um",
        Kilometer => "km",
        Inch => "in",
        Foot => "ft",
        Yard => "yd",
        Mile => "mi",
    }
}

impl UnitConversion for LengthUnit {
    const REFERENCE: Self = LengthUnit::Meter;

    fn to_reference(self, value: f64) -> f64 {
        match self {
            Self::Meter => value,
            Self::Centimeter => value / 100.0,
            Self::Millimeter => value / 1000.0,
            Self::Micrometer => value / 1e6,
            Self::Kilometer => value * 1000.0,
            Self::Inch => Self::Millimeter.to_reference(value * MM_PER_INCH),
            Self::Foot => Self::Inch.to_reference(value * 12.0),
            Self::Yard => Self::Foot.to_reference(value * 3.0),
            Self::Mile => Self::Foot.to_reference(value * 5280.0),
        }
    }

    fn from_reference(self, meters: f64) -> f64 {
        match self {
            Self::Meter => meters,
            Self::Centimeter => meters * 100.0,
            Self::Millimeter => meters * 1000.0,
            Self::Micrometer => meters * 1e6,
            Self::Kilometer => meters / 1000.0,
            Self::Inch => Self::Millimeter.from_reference(meters) / MM_PER_INCH,
            Self::Foot => Self::Inch.from_reference(meters) / 12.0,
            Self::Yard => Self::Foot.from_reference(meters) / 3.0,
            Self::Mile => Self::Foot.from_reference(meters) / 5280.0,
        }
    }
}

unit_enum! {
    /// Units of [`Area`](crate::Area). Reference: square meter.
    AreaUnit, "area" {
        SquareMeter => "m2",
        SquareCentimeter => "cm2",
        SquareMillimeter => "mm2",
        SquareMicrometer => "um2",
        SquareKilometer => "km2",
        SquareInch => "in2",
        SquareFoot => "ft2",
        SquareYard => "yd2",
        SquareMile => "mi2",
        Acre => "acre",
        Hectare => "ha",
    }
}

impl UnitConversion for AreaUnit {
    const REFERENCE: Self = AreaUnit::SquareMeter;

    fn to_reference(self, value: f64) -> f64 {
        match self {
            Self::SquareMeter => value,
            Self::SquareCentimeter => value / 1e4,
            Self::SquareMillimeter => value / 1e6,
            Self::SquareMicrometer => value / 1e12,
            Self::SquareKilometer => value * 1e6,
            Self::SquareInch => value * SQ_METERS_PER_SQ_INCH,
            Self::SquareFoot => Self::SquareInch.to_reference(value * 144.0),
            Self::SquareYard => Self::SquareFoot.to_reference(value * 9.0),
            Self::SquareMile => Self::SquareFoot.to_reference(value * 27_878_400.0),
            Self::Acre => Self::SquareFoot.to_reference(value * 43_560.0),
            Self::Hectare => value * 1e4,
        }
    }

    fn from_reference(self, square_meters: f64) -> f64 {
        match self {
            Self::SquareMeter => square_meters,
            Self::SquareCentimeter => square_meters * 1e4,
            Self::SquareMillimeter => square_meters * 1e6,
            Self::SquareMicrometer => square_meters * 1e12,
            Self::SquareKilometer => square_meters / 1e6,
            Self::SquareInch => square_meters / SQ_METERS_PER_SQ_INCH,
            Self::SquareFoot => Self::SquareInch.from_reference(square_meters) / 144.0,
            Self::SquareYard => Self::SquareFoot.from_reference(square_meters) / 9.0,
            Self::SquareMile => Self::SquareFoot.from_reference(square_meters) / 27_878_400.0,
            Self::Acre => Self::SquareFoot.from_reference(square_meters) / 43_560.0,
            Self::Hectare => square_meters / 1e4,
        }
    }
}

unit_enum! {
    /// Units of [`Volume`](crate::Volume). Reference: liter.
    ///
    /// Kitchen and liquid units are US customary and chain through the pint.
    VolumeUnit, "volume" {
        CubicMeter => "m3",
        CubicCentimeter => "cm3",
        CubicMillimeter => "mm3",
        CubicKilometer => "km3",
        Liter => "L",
        Milliliter => "mL",
        CubicInch => "in3",
        CubicFoot => "ft3",
        CubicYard => "yd3",
        CubicMile => "mi3",
        Teaspoon => "tsp",
        Tablespoon => "tbsp",
        Cup => "cup",
        Pint => "pint",
        Quart => "quart",
        Gallon => "gallon",
        /// Liquid barrel of 31.5 gallons
        Barrel => "barrel",
    }
}

impl UnitConversion for VolumeUnit {
    const REFERENCE: Self = VolumeUnit::Liter;

    fn to_reference(self, value: f64) -> f64 {
        match self {
            Self::CubicMeter => value * 1000.0,
            Self::CubicCentimeter => value / 1000.0,
            Self::CubicMillimeter => value / 1e6,
            Self::CubicKilometer => value * 1e12,
            Self::Liter => value,
            Self::Milliliter => value / 1000.0,
            Self::CubicInch => value * LITERS_PER_CUBIC_INCH,
            Self::CubicFoot => Self::CubicInch.to_reference(value * 1728.0),
            Self::CubicYard => Self::CubicInch.to_reference(value * 46_656.0),
            Self::CubicMile => Self::CubicInch.to_reference(value * CUBIC_INCHES_PER_CUBIC_MILE),
            Self::Teaspoon => Self::Pint.to_reference(value / 96.0),
            Self::Tablespoon => Self::Pint.to_reference(value / 32.0),
            Self::Cup => Self::Pint.to_reference(value / 2.0),
            Self::Pint => value * LITERS_PER_PINT,
            Self::Quart => Self::Pint.to_reference(value * 2.0),
            Self::Gallon => Self::Pint.to_reference(value * 8.0),
            Self::Barrel => Self::Gallon.to_reference(value * 31.5),
        }
    }

    fn from_reference(self, liters: f64) -> f64 {
        match self {
            Self::CubicMeter => liters / 1000.0,
            Self::CubicCentimeter => liters * 1000.0,
            Self::CubicMillimeter => liters * 1e6,
            Self::CubicKilometer => liters / 1e12,
            Self::Liter => liters,
            Self::Milliliter => liters * 1000.0,
            Self::CubicInch => liters / LITERS_PER_CUBIC_INCH,
            Self::CubicFoot => Self::CubicInch.from_reference(liters) / 1728.0,
            Self::CubicYard => Self::CubicInch.from_reference(liters) / 46_656.0,
            Self::CubicMile => Self::CubicInch.from_reference(liters) / CUBIC_INCHES_PER_CUBIC_MILE,
            Self::Teaspoon => Self::Pint.from_reference(liters) * 96.0,
            Self::Tablespoon => Self::Pint.from_reference(liters) * 32.0,
            Self::Cup => Self::Pint.from_reference(liters) * 2.0,
            Self::Pint => liters / LITERS_PER_PINT,
            Self::Quart => Self::Pint.from_reference(liters) / 2.0,
            Self::Gallon => Self::Pint.from_reference(liters) / 8.0,
            Self::Barrel => Self::Gallon.from_reference(liters) / 31.5,
        }
    }
}

// ============================================================================
// MOTION
// ============================================================================

unit_enum! {
    /// Units of [`Speed`](crate::Speed). Reference: meter per second.
    SpeedUnit, "speed" {
        MeterPerSecond => "m/s",
        KilometerPerHour => "kph",
        MilePerHour => "mph",
        FootPerSecond => "ft/s",
    }
}

impl UnitConversion for SpeedUnit {
    const REFERENCE: Self = SpeedUnit::MeterPerSecond;

    fn to_reference(self, value: f64) -> f64 {
        match self {
            Self::MeterPerSecond => value,
            Self::KilometerPerHour => value * 1000.0 / 3600.0,
            Self::MilePerHour => LengthUnit::Mile.to_reference(value) / 3600.0,
            Self::FootPerSecond => LengthUnit::Foot.to_reference(value),
        }
    }

    fn from_reference(self, meters_per_second: f64) -> f64 {
        match self {
            Self::MeterPerSecond => meters_per_second,
            Self::KilometerPerHour => meters_per_second * 3600.0 / 1000.0,
            Self::MilePerHour => LengthUnit::Mile.from_reference(meters_per_second * 3600.0),
            Self::FootPerSecond => LengthUnit::Foot.from_reference(meters_per_second),
        }
    }
}

unit_enum! {
    /// Units of [`Acceleration`](crate::Acceleration). Reference: m/s².
    AccelerationUnit, "acceleration" {
        MeterPerSecondSquared => "m/s2",
        KilometerPerHourPerSecond => "kph/s",
        MilePerHourPerSecond => "mph/s",
        FootPerSecondSquared => "ft/s2",
        /// Standard gravity (9.80665 m/s²)
        StandardGravity => "G",
    }
}

impl UnitConversion for AccelerationUnit {
    const REFERENCE: Self = AccelerationUnit::MeterPerSecondSquared;

    fn to_reference(self, value: f64) -> f64 {
        match self {
            Self::MeterPerSecondSquared => value,
            Self::KilometerPerHourPerSecond => SpeedUnit::KilometerPerHour.to_reference(value),
            Self::MilePerHourPerSecond => SpeedUnit::MilePerHour.to_reference(value),
            Self::FootPerSecondSquared => LengthUnit::Foot.to_reference(value),
            Self::StandardGravity => value * STANDARD_GRAVITY,
        }
    }

    fn from_reference(self, meters_per_second_squared: f64) -> f64 {
        match self {
            Self::MeterPerSecondSquared => meters_per_second_squared,
            Self::KilometerPerHourPerSecond => {
                SpeedUnit::KilometerPerHour.from_reference(meters_per_second_squared)
            }
            Self::MilePerHourPerSecond => {
                SpeedUnit::MilePerHour.from_reference(meters_per_second_squared)
            }
            Self::FootPerSecondSquared => LengthUnit::Foot.from_reference(meters_per_second_squared),
            Self::StandardGravity => meters_per_second_squared / STANDARD_GRAVITY,
        }
    }
}

// ============================================================================
// MECHANICS
// ============================================================================

unit_enum! {
    /// Units of [`Mass`](crate::Mass). Reference: kilogram.
    MassUnit, "mass" {
        Gram => "g",
        Kilogram => "kg",
        Pound => "lb",
        Ounce => "oz",
        /// Metric tonne (1000 kg)
        Tonne => "t",
        /// US short ton (2000 lb)
        Ton => "ton",
    }
}

impl UnitConversion for MassUnit {
    const REFERENCE: Self = MassUnit::Kilogram;

    fn to_reference(self, value: f64) -> f64 {
        match self {
            Self::Gram => value / 1000.0,
            Self::Kilogram => value,
            Self::Pound => value * KG_PER_POUND,
            Self::Ounce => Self::Pound.to_reference(value / 16.0),
            Self::Tonne => value * 1000.0,
            Self::Ton => Self::Pound.to_reference(value * 2000.0),
        }
    }

    fn from_reference(self, kilograms: f64) -> f64 {
        match self {
            Self::Gram => kilograms * 1000.0,
            Self::Kilogram => kilograms,
            Self::Pound => kilograms / KG_PER_POUND,
            Self::Ounce => Self::Pound.from_reference(kilograms) * 16.0,
            Self::Tonne => kilograms / 1000.0,
            Self::Ton => Self::Pound.from_reference(kilograms) / 2000.0,
        }
    }
}

unit_enum! {
    /// Units of [`Force`](crate::Force). Reference: newton.
    ForceUnit, "force" {
        Newton => "N",
        PoundForce => "lbf",
    }
}

impl UnitConversion for ForceUnit {
    const REFERENCE: Self = ForceUnit::Newton;

    fn to_reference(self, value: f64) -> f64 {
        match self {
            Self::Newton => value,
            Self::PoundForce => value * NEWTONS_PER_POUND_FORCE,
        }
    }

    fn from_reference(self, newtons: f64) -> f64 {
        match self {
            Self::Newton => newtons,
            Self::PoundForce => newtons / NEWTONS_PER_POUND_FORCE,
        }
    }
}

unit_enum! {
    /// Units of [`Pressure`](crate::Pressure). Reference: pascal.
    PressureUnit, "pressure" {
        Pascal => "Pa",
        Kilopascal => "kPa",
        Megapascal => "MPa",
        PoundPerSquareInch => "psi",
        MillimeterOfMercury => "mmHg",
        InchOfWater => "inH2O",
        Bar => "bar",
        Atmosphere => "atm",
    }
}

impl UnitConversion for PressureUnit {
    const REFERENCE: Self = PressureUnit::Pascal;

    fn to_reference(self, value: f64) -> f64 {
        value * self.pascals()
    }

    fn from_reference(self, pascals: f64) -> f64 {
        pascals / self.pascals()
    }
}

impl PressureUnit {
    /// Pascals in one unit
    fn pascals(self) -> f64 {
        match self {
            Self::Pascal => 1.0,
            Self::Kilopascal => 1e3,
            Self::Megapascal => 1e6,
            Self::PoundPerSquareInch => 6894.75729317,
            Self::MillimeterOfMercury => 133.322387415,
            Self::InchOfWater => 249.08891,
            Self::Bar => 1e5,
            Self::Atmosphere => 101_325.0,
        }
    }
}

unit_enum! {
    /// Units of [`Density`](crate::Density). Reference: ratio to water (g/cm³).
    DensityUnit, "density" {
        KilogramPerCubicMeter => "kg/m3",
        GramPerCubicCentimeter => "g/cm3",
        PoundPerGallon => "lb/gal",
    }
}

impl UnitConversion for DensityUnit {
    const REFERENCE: Self = DensityUnit::GramPerCubicCentimeter;

    fn to_reference(self, value: f64) -> f64 {
        match self {
            Self::KilogramPerCubicMeter => value / 1000.0,
            Self::GramPerCubicCentimeter => value,
            // kg per liter is numerically g/cm³
            Self::PoundPerGallon => {
                MassUnit::Pound.to_reference(value) / VolumeUnit::Gallon.to_reference(1.0)
            }
        }
    }

    fn from_reference(self, relative_to_water: f64) -> f64 {
        match self {
            Self::KilogramPerCubicMeter => relative_to_water * 1000.0,
            Self::GramPerCubicCentimeter => relative_to_water,
            Self::PoundPerGallon => MassUnit::Pound
                .from_reference(relative_to_water * VolumeUnit::Gallon.to_reference(1.0)),
        }
    }
}

// ============================================================================
// ENERGY & POWER
// ============================================================================

unit_enum! {
    /// Units of [`Energy`](crate::Energy). Reference: joule.
    EnergyUnit, "energy" {
        Joule => "J",
        Kilojoule => "kJ",
        Megajoule => "MJ",
        KilowattHour => "kWh",
        HorsepowerHour => "hph",
        /// International Table BTU
        Btu => "BTU",
        /// Thermochemical calorie
        Calorie => "cal",
        Kilocalorie => "kcal",
    }
}

impl UnitConversion for EnergyUnit {
    const REFERENCE: Self = EnergyUnit::Joule;

    fn to_reference(self, value: f64) -> f64 {
        value * self.joules()
    }

    fn from_reference(self, joules: f64) -> f64 {
        joules / self.joules()
    }
}

impl EnergyUnit {
    /// Joules in one unit
    fn joules(self) -> f64 {
        match self {
            Self::Joule => 1.0,
            Self::Kilojoule => 1e3,
            Self::Megajoule => 1e6,
            Self::KilowattHour => 3.6e6,
            Self::HorsepowerHour => 2_684_519.5368856,
            Self::Btu => 1055.05585262,
            Self::Calorie => 4.184,
            Self::Kilocalorie => 4184.0,
        }
    }
}

unit_enum! {
    /// Units of [`Power`](crate::Power). Reference: watt.
    PowerUnit, "power" {
        Watt => "W",
        Kilowatt => "kW",
        Megawatt => "MW",
        Milliwatt => "mW",
        /// Mechanical horsepower
        Horsepower => "hp",
        BtuPerHour => "BTU/h",
    }
}

impl UnitConversion for PowerUnit {
    const REFERENCE: Self = PowerUnit::Watt;

    fn to_reference(self, value: f64) -> f64 {
        match self {
            Self::Watt => value,
            Self::Kilowatt => value * 1e3,
            Self::Megawatt => value * 1e6,
            Self::Milliwatt => value / 1e3,
            Self::Horsepower => value * 745.699872,
            Self::BtuPerHour => EnergyUnit::Btu.to_reference(value) / 3600.0,
        }
    }

    fn from_reference(self, watts: f64) -> f64 {
        match self {
            Self::Watt => watts,
            Self::Kilowatt => watts / 1e3,
            Self::Megawatt => watts / 1e6,
            Self::Milliwatt => watts * 1e3,
            Self::Horsepower => watts / 745.699872,
            Self::BtuPerHour => EnergyUnit::Btu.from_reference(watts * 3600.0),
        }
    }
}

// ============================================================================
// TEMPERATURE (affine)
// ============================================================================

unit_enum! {
    /// Units of [`Temperature`](crate::Temperature). Reference: kelvin.
    ///
    /// The only table with offsets; Celsius and Fahrenheit are affine.
    TemperatureUnit, "temperature" {
        Celsius => "C",
        Kelvin => "K",
        Fahrenheit => "F",
        Rankine => "R",
    }
}

impl UnitConversion for TemperatureUnit {
    const REFERENCE: Self = TemperatureUnit::Kelvin;

    fn to_reference(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value + CELSIUS_KELVIN_OFFSET,
            Self::Kelvin => value,
            Self::Fahrenheit => (value + FAHRENHEIT_RANKINE_OFFSET) / RANKINE_PER_KELVIN,
            Self::Rankine => value / RANKINE_PER_KELVIN,
        }
    }

    fn from_reference(self, kelvin: f64) -> f64 {
        match self {
            Self::Celsius => kelvin - CELSIUS_KELVIN_OFFSET,
            Self::Kelvin => kelvin,
            Self::Fahrenheit => kelvin * RANKINE_PER_KELVIN - FAHRENHEIT_RANKINE_OFFSET,
            Self::Rankine => kelvin * RANKINE_PER_KELVIN,
        }
    }
}

// ============================================================================
// ELECTRICAL
// ============================================================================

/// Exhaustive SI-prefix table shared by the electrical units.
///
/// Multiples scale into the reference unit, sub-multiples divide into it, so
/// decimal values such as `20 mA` survive a round trip unchanged.
macro_rules! prefixed_conversion {
    (
        $name:ident, $base:ident,
        multiples { $($multiple:ident => $mfactor:expr),* $(,)? }
        submultiples { $($submultiple:ident => $sfactor:expr),* $(,)? }
    ) => {
        impl UnitConversion for $name {
            const REFERENCE: Self = $name::$base;

            fn to_reference(self, value: f64) -> f64 {
                match self {
                    Self::$base => value,
                    $(Self::$multiple => value * $mfactor,)*
                    $(Self::$submultiple => value / $sfactor,)*
                }
            }

            fn from_reference(self, reference: f64) -> f64 {
                match self {
                    Self::$base => reference,
                    $(Self::$multiple => reference / $mfactor,)*
                    $(Self::$submultiple => reference * $sfactor,)*
                }
            }
        }
    };
}

unit_enum! {
    /// Units of [`Voltage`](crate::Voltage). Reference: volt.
    VoltageUnit, "voltage" {
        Volt => "V",
        Millivolt => "mV",
        Kilovolt => "kV",
        Megavolt => "MV",
    }
}

prefixed_conversion!(VoltageUnit, Volt,
    multiples { Kilovolt => 1e3, Megavolt => 1e6 }
    submultiples { Millivolt => 1e3 }
);

unit_enum! {
    /// Units of [`Current`](crate::Current). Reference: ampere.
    CurrentUnit, "current" {
        Ampere => "A",
        Milliampere => "mA",
        Kiloampere => "kA",
        Megaampere => "MA",
    }
}

prefixed_conversion!(CurrentUnit, Ampere,
    multiples { Kiloampere => 1e3, Megaampere => 1e6 }
    submultiples { Milliampere => 1e3 }
);

unit_enum! {
    /// Units of [`Resistance`](crate::Resistance). Reference: ohm.
    ResistanceUnit, "resistance" {
        Ohm => "Ohm",
        Milliohm => "mOhm",
        Kiloohm => "kOhm",
        Megaohm => "MOhm",
    }
}

prefixed_conversion!(ResistanceUnit, Ohm,
    multiples { Kiloohm => 1e3, Megaohm => 1e6 }
    submultiples { Milliohm => 1e3 }
);

unit_enum! {
    /// Units of [`Capacitance`](crate::Capacitance). Reference: farad.
    CapacitanceUnit, "capacitance" {
        Farad => "F",
        Millifarad => "mF",
        Microfarad => "uF",
        Nanofarad => "nF",
        Picofarad => "pF",
    }
}

prefixed_conversion!(CapacitanceUnit, Farad,
    multiples {}
    submultiples { Millifarad => 1e3, Microfarad => 1e6, Nanofarad => 1e9, Picofarad => 1e12 }
);

// ============================================================================
// ROTATION
// ============================================================================

unit_enum! {
    /// Units of [`RotationSpeed`](crate::RotationSpeed). Reference: rpm.
    RotationSpeedUnit, "rotation speed" {
        RevolutionPerMinute => "rpm",
        RevolutionPerSecond => "rev/s",
        RadianPerSecond => "rad/s",
        DegreePerSecond => "deg/s",
    }
}

impl UnitConversion for RotationSpeedUnit {
    const REFERENCE: Self = RotationSpeedUnit::RevolutionPerMinute;

    fn to_reference(self, value: f64) -> f64 {
        match self {
            Self::RevolutionPerMinute => value,
            Self::RevolutionPerSecond => value * 60.0,
            Self::RadianPerSecond => value * 60.0 / TAU,
            Self::DegreePerSecond => value * 60.0 / 360.0,
        }
    }

    fn from_reference(self, rpm: f64) -> f64 {
        match self {
            Self::RevolutionPerMinute => rpm,
            Self::RevolutionPerSecond => rpm / 60.0,
            Self::RadianPerSecond => rpm * TAU / 60.0,
            Self::DegreePerSecond => rpm * 360.0 / 60.0,
        }
    }
}

unit_enum! {
    /// Units of [`Torque`](crate::Torque). Reference: newton-meter.
    TorqueUnit, "torque" {
        NewtonMeter => "N*m",
        InchPound => "in*lb",
        FootPound => "ft*lb",
    }
}

impl UnitConversion for TorqueUnit {
    const REFERENCE: Self = TorqueUnit::NewtonMeter;

    fn to_reference(self, value: f64) -> f64 {
        match self {
            Self::NewtonMeter => value,
            Self::InchPound => value / INCH_POUNDS_PER_NEWTON_METER,
            Self::FootPound => Self::InchPound.to_reference(value * 12.0),
        }
    }

    fn from_reference(self, newton_meters: f64) -> f64 {
        match self {
            Self::NewtonMeter => newton_meters,
            Self::InchPound => newton_meters * INCH_POUNDS_PER_NEWTON_METER,
            Self::FootPound => Self::InchPound.from_reference(newton_meters) / 12.0,
        }
    }
}

unit_enum! {
    /// Units of [`Angle`](crate::Angle). Reference: radian.
    AngleUnit, "angle" {
        Radian => "rad",
        Degree => "deg",
        Revolution => "rev",
    }
}

impl UnitConversion for AngleUnit {
    const REFERENCE: Self = AngleUnit::Radian;

    fn to_reference(self, value: f64) -> f64 {
        match self {
            Self::Radian => value,
            Self::Degree => value.to_radians(),
            Self::Revolution => value * TAU,
        }
    }

    fn from_reference(self, radians: f64) -> f64 {
        match self {
            Self::Radian => radians,
            Self::Degree => radians.to_degrees(),
            Self::Revolution => radians / TAU,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    fn assert_symbols_unique<U: Unit>() {
        let symbols: HashSet<_> = U::ALL.iter().map(|u| u.symbol()).collect();
        assert_eq!(symbols.len(), U::ALL.len(), "duplicate {} symbol", U::QUANTITY);
    }

    fn assert_symbols_parse<U: Unit + FromStr<Err = UnitError>>() {
        for &unit in U::ALL {
            assert_eq!(unit.symbol().parse::<U>(), Ok(unit));
            assert_eq!(unit.to_string(), unit.symbol());
        }
    }

    #[test]
    fn test_symbols_unique_and_parse() {
        assert_symbols_unique::<TimeUnit>();
        assert_symbols_unique::<LengthUnit>();
        assert_symbols_unique::<AreaUnit>();
        assert_symbols_unique::<VolumeUnit>();
        assert_symbols_unique::<PressureUnit>();
        assert_symbols_unique::<EnergyUnit>();
        assert_symbols_parse::<SpeedUnit>();
        assert_symbols_parse::<TemperatureUnit>();
        assert_symbols_parse::<TorqueUnit>();
        assert_symbols_parse::<CapacitanceUnit>();
    }

    #[test]
    fn test_unknown_symbol_is_rejected() {
        let err = "furlong".parse::<LengthUnit>().unwrap_err();
        assert_eq!(
            err,
            UnitError::UnknownUnit {
                quantity: "length",
                symbol: "furlong".to_owned(),
            }
        );
        // Symbols are case sensitive: "MV" is megavolts, "mv" is nothing
        assert!("mv".parse::<VoltageUnit>().is_err());
        assert_eq!("MV".parse::<VoltageUnit>(), Ok(VoltageUnit::Megavolt));
    }

    #[test]
    fn test_reference_unit_is_identity() {
        assert_eq!(LengthUnit::REFERENCE.to_reference(3.5), 3.5);
        assert_eq!(VolumeUnit::REFERENCE, VolumeUnit::Liter);
        assert_eq!(RotationSpeedUnit::REFERENCE.from_reference(-7.0), -7.0);
    }

    #[test]
    fn test_imperial_length_chain() {
        assert_relative_eq!(LengthUnit::Inch.to_reference(1.0), 0.0254, max_relative = 1e-15);
        assert_relative_eq!(LengthUnit::Foot.to_reference(1.0), 0.3048, max_relative = 1e-15);
        assert_relative_eq!(LengthUnit::Mile.to_reference(1.0), 1609.344, max_relative = 1e-15);
        assert_relative_eq!(LengthUnit::Yard.from_reference(0.9144), 1.0, max_relative = 1e-15);
    }

    #[test]
    fn test_gallon_is_exactly_eight_pints() {
        let liters = VolumeUnit::Gallon.to_reference(1.0);
        assert_eq!(VolumeUnit::Pint.from_reference(liters), 8.0);
        assert_relative_eq!(liters, 3.785411784, max_relative = 1e-12);
    }

    #[test]
    fn test_cubic_yard_is_twenty_seven_cubic_feet() {
        let liters = VolumeUnit::CubicYard.to_reference(1.0);
        assert_relative_eq!(VolumeUnit::CubicFoot.from_reference(liters), 27.0, max_relative = 1e-12);
        assert_relative_eq!(VolumeUnit::CubicMeter.from_reference(liters), 0.764554857984, max_relative = 1e-12);
    }

    #[test]
    fn test_short_ton_and_tonne() {
        assert_relative_eq!(MassUnit::Ton.to_reference(1.0), 907.18474, max_relative = 1e-12);
        assert_eq!(MassUnit::Tonne.from_reference(2500.0), 2.5);
        assert_eq!(MassUnit::Ounce.to_reference(16.0), KG_PER_POUND);
    }

    #[test]
    fn test_density_pound_per_gallon() {
        // Water is ~8.345 lb/gal
        let water = DensityUnit::PoundPerGallon.from_reference(1.0);
        assert_relative_eq!(water, 8.345404452, max_relative = 1e-9);
        assert_eq!(DensityUnit::KilogramPerCubicMeter.to_reference(1000.0), 1.0);
    }

    #[test]
    fn test_temperature_formulas() {
        assert_eq!(TemperatureUnit::Celsius.to_reference(0.0), 273.15);
        assert_relative_eq!(TemperatureUnit::Fahrenheit.to_reference(32.0), 273.15, max_relative = 1e-15);
        assert_relative_eq!(TemperatureUnit::Rankine.from_reference(273.15), 491.67, max_relative = 1e-15);
        assert_relative_eq!(TemperatureUnit::Fahrenheit.from_reference(373.15), 212.0, max_relative = 1e-14);
    }

    #[test]
    fn test_rotation_speed_table() {
        assert_eq!(RotationSpeedUnit::RevolutionPerSecond.to_reference(1.0), 60.0);
        assert_eq!(RotationSpeedUnit::DegreePerSecond.to_reference(360.0), 60.0);
        assert_relative_eq!(RotationSpeedUnit::RadianPerSecond.from_reference(60.0), TAU, max_relative = 1e-15);
    }

    #[test]
    fn test_electrical_prefixes() {
        assert_eq!(ResistanceUnit::Kiloohm.to_reference(4.7), 4700.0);
        assert_eq!(ResistanceUnit::Kiloohm.from_reference(4700.0), 4.7);
        assert_eq!(CurrentUnit::Milliampere.from_reference(0.02), 20.0);
        assert_relative_eq!(CapacitanceUnit::Microfarad.to_reference(10.0), 1e-5, max_relative = 1e-15);
    }

    #[test]
    fn test_foot_pound_torque() {
        assert_relative_eq!(TorqueUnit::FootPound.to_reference(1.0), 1.3558179483314, max_relative = 1e-9);
        assert_relative_eq!(TorqueUnit::InchPound.from_reference(1.0), INCH_POUNDS_PER_NEWTON_METER);
    }
}
