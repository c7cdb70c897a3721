//! Durations and their calendar-style breakdown.

use crate::quantity::quantity;
use crate::units::TimeUnit;
use serde::{Deserialize, Serialize};

quantity! {
    /// Elapsed time, stored in seconds.
    TimeDuration, TimeUnit
}

/// A duration split into whole years, days, hours and minutes plus the
/// remaining seconds.
///
/// Years are Julian (365.25 days). Each whole component is truncated toward
/// zero, so a negative duration yields non-positive components throughout.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct YrDayHrMinSec {
    /// Whole Julian years
    pub years: i64,
    /// Whole days after the years
    pub days: i64,
    /// Whole hours after the days
    pub hours: i64,
    /// Whole minutes after the hours
    pub minutes: i64,
    /// Fractional remainder in seconds, always below one minute in magnitude
    pub seconds: f64,
}

impl TimeDuration {
    /// Break the duration down into years, days, hours, minutes and seconds.
    ///
    /// ```
    /// use measurement::{TimeDuration, TimeUnit};
    ///
    /// let t = TimeDuration::new(90_061.5, TimeUnit::Second);
    /// let parts = t.yr_day_hr_min_sec();
    /// assert_eq!((parts.days, parts.hours, parts.minutes), (1, 1, 1));
    /// assert_eq!(parts.seconds, 1.5);
    /// ```
    #[must_use]
    pub fn yr_day_hr_min_sec(self) -> YrDayHrMinSec {
        let mut remainder = self.canonical();
        let mut take = |unit: TimeUnit| {
            let size = TimeDuration::new(1.0, unit).canonical();
            let whole = (remainder / size).trunc();
            remainder -= whole * size;
            whole as i64
        };

        let years = take(TimeUnit::Year);
        let days = take(TimeUnit::Day);
        let hours = take(TimeUnit::Hour);
        let minutes = take(TimeUnit::Minute);

        YrDayHrMinSec {
            years,
            days,
            hours,
            minutes,
            seconds: remainder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let t = TimeDuration::default();
        assert_eq!(t.value(TimeUnit::Second), 0.0);
        assert!(!t.is_positive());
        assert!(!t.is_negative());
    }

    #[test]
    fn test_unit_conversions() {
        assert_eq!(TimeDuration::new(1.0, TimeUnit::Hour).value(TimeUnit::Second), 3600.0);
        assert_eq!(TimeDuration::new(1.0, TimeUnit::Week).value(TimeUnit::Day), 7.0);
        assert_eq!(TimeDuration::new(1.0, TimeUnit::Year).value(TimeUnit::Day), 365.25);
        assert_eq!(TimeDuration::new(250.0, TimeUnit::Millisecond).value(TimeUnit::Second), 0.25);
    }

    #[test]
    fn test_set_replaces_magnitude() {
        let mut t = TimeDuration::new(10.0, TimeUnit::Minute);
        t.set(2.0, TimeUnit::Second);
        assert_eq!(t.canonical(), 2.0);
    }

    #[test]
    fn test_same_type_arithmetic() {
        let a = TimeDuration::new(1.0, TimeUnit::Minute);
        let b = TimeDuration::new(30.0, TimeUnit::Second);
        assert_eq!((a + b).value(TimeUnit::Second), 90.0);
        assert_eq!((a - b).value(TimeUnit::Second), 30.0);
        assert_eq!((a * 3.0).value(TimeUnit::Minute), 3.0);
        assert_eq!((a / 4.0).value(TimeUnit::Second), 15.0);

        let mut c = a;
        c += b;
        assert_eq!(c.value(TimeUnit::Second), 90.0);
        c -= b;
        c -= b;
        assert_eq!(c.value(TimeUnit::Second), 30.0);
    }

    #[test]
    fn test_comparisons_use_canonical_magnitude() {
        let hour = TimeDuration::new(1.0, TimeUnit::Hour);
        let minutes = TimeDuration::new(60.0, TimeUnit::Minute);
        assert_eq!(hour, minutes);
        assert!(hour > TimeDuration::new(59.0, TimeUnit::Minute));
        assert!(hour <= minutes);
        assert_ne!(hour, TimeDuration::new(3601.0, TimeUnit::Second));
    }

    #[test]
    fn test_breakdown() {
        let t = TimeDuration::new(1.0, TimeUnit::Year)
            + TimeDuration::new(2.0, TimeUnit::Day)
            + TimeDuration::new(3.0, TimeUnit::Hour)
            + TimeDuration::new(4.0, TimeUnit::Minute)
            + TimeDuration::new(5.5, TimeUnit::Second);
        let parts = t.yr_day_hr_min_sec();
        assert_eq!(
            parts,
            YrDayHrMinSec {
                years: 1,
                days: 2,
                hours: 3,
                minutes: 4,
                seconds: 5.5,
            }
        );
    }

    #[test]
    fn test_breakdown_truncates_toward_zero() {
        let parts = TimeDuration::new(-90.0, TimeUnit::Second).yr_day_hr_min_sec();
        assert_eq!(parts.years, 0);
        assert_eq!(parts.minutes, -1);
        assert_eq!(parts.seconds, -30.0);
    }

    #[test]
    fn test_breakdown_seconds_is_fractional_remainder() {
        let parts = TimeDuration::new(2.0, TimeUnit::Day).yr_day_hr_min_sec();
        assert_eq!((parts.days, parts.hours, parts.minutes), (2, 0, 0));
        assert_eq!(parts.seconds, 0.0);

        let parts = TimeDuration::new(7_384.25, TimeUnit::Second).yr_day_hr_min_sec();
        assert_eq!((parts.hours, parts.minutes), (2, 3));
        assert_eq!(parts.seconds, 4.25);
        assert!(parts.seconds.abs() < 60.0);
    }
}
