//! Voltage, current, resistance and capacitance.

use crate::quantity::quantity;
use crate::units::{CapacitanceUnit, CurrentUnit, ResistanceUnit, VoltageUnit};

quantity! {
    /// Electric potential difference, stored in volts.
    Voltage, VoltageUnit
}

quantity! {
    /// Electric current, stored in amperes.
    Current, CurrentUnit
}

quantity! {
    /// Electrical resistance, stored in ohms.
    Resistance, ResistanceUnit
}

quantity! {
    /// Capacitance, stored in farads.
    Capacitance, CapacitanceUnit
}
