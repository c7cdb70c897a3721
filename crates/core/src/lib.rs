//! Measurement Core Library
//!
//! Strongly typed physical quantities with closed unit tables.
//!
//! Each quantity (length, pressure, torque, ...) is its own type holding one
//! magnitude in a fixed reference unit. Values go in and come out through the
//! quantity's unit enum, and the operators between quantity types follow the
//! physical relationships, so dimensionally invalid arithmetic does not
//! compile.
//!
//! ```
//! use measurement::{Area, AreaUnit, Force, ForceUnit, Pressure, PressureUnit};
//!
//! let force = Force::new(100.0, ForceUnit::Newton);
//! let pressure: Pressure = force / Area::new(2.0, AreaUnit::SquareMeter);
//! assert_eq!(pressure.value(PressureUnit::Pascal), 50.0);
//! ```
//!
//! ## Layout
//!
//! - [`units`]: the unit enums and their conversion factors
//! - [`quantity`]: the [`Quantity`] trait shared by all quantity types
//! - [`quantities`]: the quantity types themselves
//! - [`algebra`]: operators between different quantity types
//!
//! ## Features
//!
//! - `legacy-compat`: adds `Force::legacy_mul_length`, reproducing the old
//!   additive `Force × Length` result

// Unit tables and parsing
pub mod error;
pub mod units;

// Quantity types
pub mod quantity;
pub mod quantities;

// Cross-quantity operators
pub mod algebra;

pub use error::{Result, UnitError};
pub use quantities::*;
pub use quantity::Quantity;
pub use units::*;
