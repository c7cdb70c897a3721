//! Mass, force, pressure and density.

use crate::quantity::quantity;
use crate::units::{DensityUnit, ForceUnit, MassUnit, PressureUnit};

quantity! {
    /// Mass, stored in kilograms.
    Mass, MassUnit
}

quantity! {
    /// Force, stored in newtons.
    Force, ForceUnit
}

quantity! {
    /// Pressure, stored in pascals.
    Pressure, PressureUnit
}

quantity! {
    /// Density, stored as a ratio to water (numerically g/cm³).
    Density, DensityUnit
}

impl Density {
    /// Pure water at 4°C
    pub const WATER: Density = Density(1.0);
}
