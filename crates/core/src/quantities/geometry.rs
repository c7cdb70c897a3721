//! Length, area and volume.

use crate::quantity::quantity;
use crate::units::{AreaUnit, LengthUnit, VolumeUnit};

quantity! {
    /// Distance, stored in meters.
    Length, LengthUnit
}

quantity! {
    /// Surface area, stored in square meters.
    Area, AreaUnit
}

quantity! {
    /// Volume, stored in liters.
    Volume, VolumeUnit
}
