//! The quantity types, grouped by physical domain.

mod electrical;
mod energy;
mod geometry;
mod mechanics;
mod motion;
mod rotation;
mod temperature;
mod time;

pub use electrical::{Capacitance, Current, Resistance, Voltage};
pub use energy::{Energy, Power};
pub use geometry::{Area, Length, Volume};
pub use mechanics::{Density, Force, Mass, Pressure};
pub use motion::{Acceleration, Speed};
pub use rotation::{Angle, RotationSpeed, Torque};
pub use temperature::Temperature;
pub use time::{TimeDuration, YrDayHrMinSec};
