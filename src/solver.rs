// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Hour-angle solver for solar events.
//!
//! Every event of the day is the instant at which the Sun crosses a given
//! altitude.  With declination `δ` and latitude `φ` the hour angle `H` of
//! that crossing satisfies
//!
//! ```text
//! cos H = (−sin α − sin δ · sin φ) / (cos δ · cos φ)
//! ```
//!
//! where `α` is the depression angle below the horizon.  Angles greater than
//! 90° encode morning events (`180° − depression`), so one solver serves both
//! sides of solar noon.
//!
//! When `|cos H| > 1` the Sun never reaches the requested altitude on that
//! day (polar day, polar night, or a twilight angle that is never reached).
//! The solver reports this as `None` instead of letting `NaN` leak into the
//! arithmetic; the high-latitude rules consume that signal.

use log::trace;

use crate::angle::{darccos, darccot, dcos, dsin, dtan, fix_hour};
use crate::julian::JulianDay;
use crate::solar::SolarPosition;
use qtty::Days;

/// Altitude correction for sunrise and sunset: refraction plus the solar
/// semi-diameter.
pub const SUNRISE_DEPRESSION: f64 = 0.833;

/// Seed times of day (hours) at which each raw event is evaluated, in the
/// order Fajr, Sunrise, Dhuhr, Asr, Sunset, Maghrib, Isha.
pub(crate) const SEED_HOURS: [f64; 7] = [5.0, 6.0, 12.0, 13.0, 18.0, 18.0, 18.0];

/// Convert a seed time in hours into a fraction of a day.
#[inline]
pub fn day_portion(hours: f64) -> Days {
    Days::new(hours / 24.0)
}

/// Local apparent solar noon (hours) near `jd + portion`.
pub fn midday(portion: Days, jd: JulianDay) -> f64 {
    let eqt = SolarPosition::at(jd + portion).equation_of_time;
    fix_hour(12.0 - eqt.value())
}

/// Time (hours, local apparent solar time) at which the Sun reaches `angle`.
///
/// `angle` is a depression below the horizon for evening events, or
/// `180° − depression` for morning events.  Returns `None` when the
/// altitude is not reached on this day.
pub fn solve_for_angle(angle: f64, portion: Days, jd: JulianDay, latitude: f64) -> Option<f64> {
    let declination = SolarPosition::at(jd + portion).declination.value();
    let noon = midday(portion, jd);

    let numerator = -dsin(angle) - dsin(declination) * dsin(latitude);
    let denominator = dcos(declination) * dcos(latitude);
    let cos_h = numerator / denominator;
    if !cos_h.is_finite() || cos_h.abs() > 1.0 {
        trace!("angle {angle}° unreachable at latitude {latitude}° (cos H = {cos_h})");
        return None;
    }

    let hours = darccos(cos_h) / 15.0;
    Some(if angle > 90.0 { noon - hours } else { noon + hours })
}

/// Time of Asr for the given shadow factor (1 standard, 2 Hanafi).
///
/// Asr starts when an object's shadow equals `factor` times its height plus
/// the shadow length at noon; that condition maps to an altitude angle that
/// is handed to [`solve_for_angle`].
pub fn solve_for_asr(factor: f64, portion: Days, jd: JulianDay, latitude: f64) -> Option<f64> {
    let declination = SolarPosition::at(jd + portion).declination.value();
    let angle = -darccot(factor + dtan((latitude - declination).abs()));
    solve_for_angle(angle, portion, jd, latitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sydney_jd() -> JulianDay {
        // 1981-10-14 shifted to Sydney's local solar day
        JulianDay::from_calendar(1981, 10, 14) - Days::new(151.2093 / (15.0 * 24.0))
    }

    #[test]
    fn midday_is_close_to_noon() {
        let noon = midday(day_portion(12.0), sydney_jd());
        // mid-October: the Sun is ~14 minutes fast
        assert!((noon - 11.77).abs() < 0.02, "noon = {noon}");
    }

    #[test]
    fn sunrise_precedes_noon_and_sunset_follows() {
        let jd = sydney_jd();
        let lat = -33.8688;
        let sunrise = solve_for_angle(180.0 - SUNRISE_DEPRESSION, day_portion(6.0), jd, lat)
            .expect("sunrise");
        let sunset =
            solve_for_angle(SUNRISE_DEPRESSION, day_portion(18.0), jd, lat).expect("sunset");
        let noon = midday(day_portion(12.0), jd);
        assert!(sunrise < noon && noon < sunset);
        // symmetric about noon to within the declination drift of half a day
        assert!(((noon - sunrise) - (sunset - noon)).abs() < 0.05);
    }

    #[test]
    fn asr_falls_between_noon_and_sunset() {
        let jd = sydney_jd();
        let lat = -33.8688;
        let noon = midday(day_portion(12.0), jd);
        let asr = solve_for_asr(1.0, day_portion(13.0), jd, lat).expect("asr");
        let hanafi = solve_for_asr(2.0, day_portion(13.0), jd, lat).expect("hanafi asr");
        let sunset =
            solve_for_angle(SUNRISE_DEPRESSION, day_portion(18.0), jd, lat).expect("sunset");
        assert!(noon < asr && asr < hanafi && hanafi < sunset);
    }

    #[test]
    fn unreachable_twilight_is_none() {
        // Midsummer at 65°N: the Sun never sinks 18° below the horizon.
        let jd = JulianDay::from_calendar(2024, 6, 21);
        assert_eq!(solve_for_angle(180.0 - 18.0, day_portion(5.0), jd, 65.0), None);
        assert_eq!(solve_for_angle(17.0, day_portion(18.0), jd, 65.0), None);
        assert!(solve_for_angle(SUNRISE_DEPRESSION, day_portion(18.0), jd, 65.0).is_some());
    }

    #[test]
    fn polar_day_has_no_sunset() {
        let jd = JulianDay::from_calendar(2024, 6, 21);
        assert_eq!(
            solve_for_angle(SUNRISE_DEPRESSION, day_portion(18.0), jd, 78.2),
            None
        );
    }

    #[test]
    fn day_portion_is_fraction_of_day() {
        assert_eq!(day_portion(12.0), Days::new(0.5));
        assert_eq!(day_portion(6.0), Days::new(0.25));
    }
}
