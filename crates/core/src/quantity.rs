//! The shared shell of every quantity type.
//!
//! A quantity is a newtype over one `f64` stored in its table's reference
//! unit. The `quantity!` macro stamps out the identical surface for each
//! type: `new`/`set`/`value`, same-type `+`/`-`, scalar `*`/`/`, IEEE
//! comparison, the sign probes and serde support. Anything that mixes two
//! different quantity types lives in [`crate::algebra`].

use crate::units::UnitConversion;
use std::fmt;

/// A physical quantity with one canonical magnitude and a closed unit table.
pub trait Quantity: Copy + Default + fmt::Debug + PartialEq + PartialOrd {
    /// The quantity's unit table.
    type Unit: UnitConversion;

    /// Build from a value expressed in `unit`.
    fn new(value: f64, unit: Self::Unit) -> Self;

    /// Replace the magnitude with `value` expressed in `unit`.
    fn set(&mut self, value: f64, unit: Self::Unit);

    /// The magnitude expressed in `unit`.
    fn value(&self, unit: Self::Unit) -> f64;

    /// The stored magnitude, in [`UnitConversion::REFERENCE`] units.
    fn canonical(&self) -> f64;
}

/// Generates a quantity newtype over `f64`.
///
/// The plain form also derives scalar `Mul<f64>`/`Div<f64>`; the `affine`
/// form leaves them out for quantities whose zero is not physical zero.
macro_rules! quantity {
    (@shell $(#[$meta:meta])* $name:ident, $unit:ty) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, PartialOrd, Default,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(transparent)]
        #[repr(transparent)]
        pub struct $name(f64);

        impl $name {
            #[doc = concat!("Create a `", stringify!($name), "` from a value in `unit`")]
            #[inline]
            #[must_use]
            pub fn new(value: f64, unit: $unit) -> Self {
                $name($crate::units::UnitConversion::to_reference(unit, value))
            }

            /// Create directly from a magnitude in the reference unit
            #[inline]
            #[must_use]
            pub const fn from_canonical(value: f64) -> Self {
                $name(value)
            }

            /// Replace the stored magnitude with `value` in `unit`
            #[inline]
            pub fn set(&mut self, value: f64, unit: $unit) {
                self.0 = $crate::units::UnitConversion::to_reference(unit, value);
            }

            /// Magnitude expressed in `unit`
            #[inline]
            #[must_use]
            pub fn value(self, unit: $unit) -> f64 {
                $crate::units::UnitConversion::from_reference(unit, self.0)
            }

            /// Magnitude in the reference unit
            #[inline]
            #[must_use]
            pub const fn canonical(self) -> f64 {
                self.0
            }

            /// True when the magnitude is strictly above zero
            #[inline]
            #[must_use]
            pub fn is_positive(self) -> bool {
                self.0 > 0.0
            }

            /// True when the magnitude is strictly below zero
            #[inline]
            #[must_use]
            pub fn is_negative(self) -> bool {
                self.0 < 0.0
            }
        }

        impl $crate::quantity::Quantity for $name {
            type Unit = $unit;

            fn new(value: f64, unit: $unit) -> Self {
                $name::new(value, unit)
            }

            fn set(&mut self, value: f64, unit: $unit) {
                $name::set(self, value, unit);
            }

            fn value(&self, unit: $unit) -> f64 {
                $name::value(*self, unit)
            }

            fn canonical(&self) -> f64 {
                self.0
            }
        }

        impl ::std::ops::Add for $name {
            type Output = $name;
            fn add(self, rhs: $name) -> $name {
                $name(self.0 + rhs.0)
            }
        }

        impl ::std::ops::Sub for $name {
            type Output = $name;
            fn sub(self, rhs: $name) -> $name {
                $name(self.0 - rhs.0)
            }
        }

        impl ::std::ops::AddAssign for $name {
            fn add_assign(&mut self, rhs: $name) {
                self.0 += rhs.0;
            }
        }

        impl ::std::ops::SubAssign for $name {
            fn sub_assign(&mut self, rhs: $name) {
                self.0 -= rhs.0;
            }
        }
    };
    ($(#[$meta:meta])* $name:ident, $unit:ty, affine) => {
        $crate::quantity::quantity!(@shell $(#[$meta])* $name, $unit);
    };
    ($(#[$meta:meta])* $name:ident, $unit:ty) => {
        $crate::quantity::quantity!(@shell $(#[$meta])* $name, $unit);

        impl ::std::ops::Mul<f64> for $name {
            type Output = $name;
            fn mul(self, rhs: f64) -> $name {
                $name(self.0 * rhs)
            }
        }

        impl ::std::ops::Div<f64> for $name {
            type Output = $name;
            fn div(self, rhs: f64) -> $name {
                $name(self.0 / rhs)
            }
        }
    };
}

pub(crate) use quantity;
