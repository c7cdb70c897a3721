//! Energy and power.

use crate::quantity::quantity;
use crate::units::{EnergyUnit, PowerUnit};

quantity! {
    /// Energy or work, stored in joules.
    Energy, EnergyUnit
}

quantity! {
    /// Power, stored in watts.
    Power, PowerUnit
}
