//! Absolute temperature.
//!
//! The only quantity with affine units. Two temperatures may be added or
//! subtracted (their kelvin magnitudes are combined), but there is no scalar
//! scaling and no cross-quantity algebra.

use crate::quantity::quantity;
use crate::units::TemperatureUnit;

quantity! {
    /// Absolute temperature, stored in kelvin.
    Temperature, TemperatureUnit, affine
}

impl Temperature {
    /// Absolute zero (0 K)
    pub const ABSOLUTE_ZERO: Temperature = Temperature(0.0);

    /// Water freezing point (273.15 K)
    pub const FREEZING: Temperature = Temperature(273.15);

    /// Water boiling point at 1 atm (373.15 K)
    pub const BOILING: Temperature = Temperature(373.15);
}
