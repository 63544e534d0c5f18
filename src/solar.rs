// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Low-precision solar ephemeris.
//!
//! Computes the Sun's declination and the equation of time from a Julian
//! Day using the almanac approximation published by the U.S. Naval
//! Observatory ("Approximate Solar Coordinates").  Accuracy is about one
//! arcminute for dates within a few centuries of J2000.0, well below the
//! one-minute resolution of the prayer-time output.
//!
//! ## References
//! * USNO, *Approximate Solar Coordinates*
//! * Meeus, *Astronomical Algorithms* (2nd ed.), ch. 25 and 28

use qtty::{Degrees, Hours};

use crate::angle::{darcsin, darctan2, dcos, dsin, fix_angle, fix_hour};
use crate::julian::JulianDay;

/// Apparent solar quantities at one instant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolarPosition {
    /// Declination of the Sun.
    pub declination: Degrees,
    /// Equation of time: mean longitude minus right ascension, in hours.
    ///
    /// Not range-reduced; callers fold it through [`fix_hour`].
    pub equation_of_time: Hours,
}

impl SolarPosition {
    /// Evaluate the ephemeris at `jd`.
    pub fn at(jd: JulianDay) -> Self {
        let d = jd.days_since_j2000().value();

        // Mean anomaly and mean longitude
        let g = fix_angle(357.529 + 0.985_600_28 * d);
        let q = fix_angle(280.459 + 0.985_647_36 * d);
        // Ecliptic longitude and obliquity
        let l = fix_angle(q + 1.915 * dsin(g) + 0.020 * dsin(2.0 * g));
        let e = 23.439 - 0.000_000_36 * d;

        let declination = darcsin(dsin(e) * dsin(l));
        let right_ascension = fix_hour(darctan2(dcos(e) * dsin(l), dcos(l)) / 15.0);

        Self {
            declination: Degrees::new(declination),
            equation_of_time: Hours::new(q / 15.0 - right_ascension),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declination_near_zero_at_march_equinox() {
        // 2024-03-20 is the equinox day.
        let pos = SolarPosition::at(JulianDay::from_calendar(2024, 3, 20));
        assert!(pos.declination.value().abs() < 0.5, "{:?}", pos);
    }

    #[test]
    fn declination_peaks_at_solstices() {
        let june = SolarPosition::at(JulianDay::from_calendar(2024, 6, 21));
        let december = SolarPosition::at(JulianDay::from_calendar(2024, 12, 21));
        assert!((june.declination.value() - 23.44).abs() < 0.1);
        assert!((december.declination.value() + 23.44).abs() < 0.1);
    }

    #[test]
    fn equation_of_time_extremes() {
        // Sun runs ~16.4 min fast in early November, ~14.2 min slow mid February.
        let november = SolarPosition::at(JulianDay::from_calendar(2024, 11, 3));
        let february = SolarPosition::at(JulianDay::from_calendar(2024, 2, 11));
        let nov_min = november.equation_of_time.value() * 60.0;
        let feb_min = february.equation_of_time.value() * 60.0;
        assert!((nov_min - 16.4).abs() < 0.5, "november eqt = {nov_min} min");
        assert!((feb_min + 14.2).abs() < 0.5, "february eqt = {feb_min} min");
    }

    #[test]
    fn solar_noon_stays_near_twelve_all_year() {
        // q/15 − RA may jump by a full day when the two angles straddle 0°,
        // so compare after reducing the implied noon to [0, 24).
        let start = JulianDay::from_calendar(2023, 1, 1);
        for day in 0..366 {
            let pos = SolarPosition::at(start + qtty::Days::new(day as f64));
            let noon = fix_hour(12.0 - pos.equation_of_time.value());
            assert!((noon - 12.0).abs() < 0.3, "day {day}: noon = {noon}");
            assert!(pos.declination.value().abs() < 23.5);
        }
    }
}
