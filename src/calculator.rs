// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The prayer-time pipeline.
//!
//! ```text
//! date ─► Julian day ─► raw events (local solar time)
//!      ─► zone time (UTC offset − longitude/15)
//!      ─► high-latitude rule
//!      ─► Imsak / Dhuhr / minute-defined Maghrib & Isha / Midnight
//!      ─► tuning ─► clock time
//! ```
//!
//! Every call builds its own [`EventHours`] buffer; nothing is cached and
//! nothing is shared between calls.

use chrono::{Local, NaiveDate, Offset, TimeZone};
use log::{debug, trace, warn};
use qtty::Days;

use crate::config::{parse_timezone, to_hours, AsrFactor, CalculationConfig, Location, Tuning};
use crate::convention::{Convention, ConventionAngles, IshaRule, MaghribRule};
use crate::error::Result;
use crate::high_latitude::{self, time_diff, HighLatitudeRule};
use crate::julian::JulianDay;
use crate::solver::{
    day_portion, midday, solve_for_angle, solve_for_asr, SEED_HOURS, SUNRISE_DEPRESSION,
};
use crate::times::{Event, EventHours, PrayerTimes};

/// Reference latitude used by [`compute_default`].
pub const DEFAULT_LATITUDE: f64 = -33.764_018_7;
/// Reference longitude used by [`compute_default`].
pub const DEFAULT_LONGITUDE: f64 = 150.820_235_1;

/// Computes prayer times for a fixed [`CalculationConfig`].
///
/// ```rust
/// use chrono::NaiveDate;
/// use praytime::{CalculationConfig, ClockTime, Location, PrayerCalculator};
///
/// let sydney = Location::with_timezone_name(-33.8688, 151.2093, "Australia/Sydney")?;
/// let date = NaiveDate::from_ymd_opt(1981, 10, 14).unwrap();
/// let times = PrayerCalculator::new(CalculationConfig::default()).compute(&sydney, date)?;
/// assert_eq!(times.fajr, ClockTime::new(3, 59));
/// # Ok::<(), praytime::PrayerTimeError>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct PrayerCalculator {
    config: CalculationConfig,
}

impl PrayerCalculator {
    pub const fn new(config: CalculationConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &CalculationConfig {
        &self.config
    }

    /// Minute-rounded prayer times at `location` on `date`.
    pub fn compute<Z: TimeZone>(
        &self,
        location: &Location<Z>,
        date: NaiveDate,
    ) -> Result<PrayerTimes> {
        let hours = self.compute_hours(location, date)?;
        Ok(PrayerTimes::from_hours(&hours))
    }

    /// Fully adjusted fractional hours at `location` on `date`.
    ///
    /// Values are in zone time but not reduced to `[0, 24)`.
    pub fn compute_hours<Z: TimeZone>(
        &self,
        location: &Location<Z>,
        date: NaiveDate,
    ) -> Result<EventHours> {
        let offset = location.utc_offset_hours(date)?;
        Ok(self.compute_hours_at_offset(
            location.latitude.value(),
            location.longitude.value(),
            offset,
            date,
        ))
    }

    /// Fractional hours for a fixed UTC offset (hours, east positive).
    pub fn compute_hours_at_offset(
        &self,
        latitude: f64,
        longitude: f64,
        utc_offset: f64,
        date: NaiveDate,
    ) -> EventHours {
        let angles = self.config.angles();
        let jd = JulianDay::from_date(date) - Days::new(longitude / (15.0 * 24.0));
        debug!(
            "{} on {date} at ({latitude}, {longitude}), {jd}, utc offset {utc_offset} h",
            self.config.convention
        );

        let mut times = raw_times(&angles, self.config.asr_factor, jd, latitude);
        trace!("raw solar times: {times:?}");
        self.adjust(&angles, &mut times, utc_offset, longitude);

        if times.unsolved().next().is_some() {
            let unsolved: Vec<Event> = times.unsolved().collect();
            warn!(
                "no solution for {unsolved:?} at latitude {latitude} on {date} \
                 (high-latitude rule: {:?})",
                self.config.high_latitude
            );
        }
        times
    }

    fn adjust(
        &self,
        angles: &ConventionAngles,
        times: &mut EventHours,
        utc_offset: f64,
        longitude: f64,
    ) {
        let config = &self.config;

        // local apparent solar time → zone time
        times.shift_all(utc_offset - longitude / 15.0);

        high_latitude::adjust(config.high_latitude, angles, times);

        times[Event::Imsak] = times[Event::Fajr].map(|fajr| fajr - to_hours(config.imsak_offset));
        times.shift(Event::Dhuhr, to_hours(config.dhuhr_offset));

        if let MaghribRule::MinutesAfterSunset(delay) = angles.maghrib {
            times[Event::Maghrib] = times[Event::Sunset].map(|sunset| sunset + to_hours(delay));
        }
        if let IshaRule::MinutesAfterMaghrib(delay) = angles.isha {
            times[Event::Isha] = times[Event::Maghrib].map(|maghrib| maghrib + to_hours(delay));
        }

        // Jafari counts the night up to Fajr, the others up to sunrise.
        let night_end = match config.convention {
            Convention::Jafari => Event::Fajr,
            _ => Event::Sunrise,
        };
        times[Event::Midnight] = match (times[Event::Sunset], times[night_end]) {
            (Some(sunset), Some(end)) => Some(sunset + time_diff(sunset, end) / 2.0),
            _ => None,
        };

        for event in Event::ALL {
            times.shift(event, config.tuning.hours(event));
        }
    }
}

/// Solve every event in local apparent solar time.
///
/// Imsak and Midnight are placeholders here; minute-defined Maghrib and Isha
/// copy their reference event and are placed during adjustment.
fn raw_times(
    angles: &ConventionAngles,
    asr_factor: AsrFactor,
    jd: JulianDay,
    latitude: f64,
) -> EventHours {
    let [fajr_at, sunrise_at, dhuhr_at, asr_at, sunset_at, maghrib_at, isha_at] =
        SEED_HOURS.map(day_portion);

    let fajr = solve_for_angle(180.0 - angles.fajr.value(), fajr_at, jd, latitude);
    let sunrise = solve_for_angle(180.0 - SUNRISE_DEPRESSION, sunrise_at, jd, latitude);
    let dhuhr = Some(midday(dhuhr_at, jd));
    let asr = solve_for_asr(asr_factor.shadow_factor(), asr_at, jd, latitude);
    let sunset = solve_for_angle(SUNRISE_DEPRESSION, sunset_at, jd, latitude);
    let maghrib = match angles.maghrib {
        MaghribRule::Angle(angle) => solve_for_angle(angle.value(), maghrib_at, jd, latitude),
        MaghribRule::MinutesAfterSunset(_) => sunset,
    };
    let isha = match angles.isha {
        IshaRule::Angle(angle) => solve_for_angle(angle.value(), isha_at, jd, latitude),
        IshaRule::MinutesAfterMaghrib(_) => maghrib,
    };

    EventHours::new([fajr, fajr, sunrise, dhuhr, asr, sunset, maghrib, isha, isha])
}

/// Prayer times for today at the reference location, in the host's local
/// time zone, with the default configuration.
pub fn compute_default() -> PrayerTimes {
    let now = Local::now();
    let offset = now.offset().fix().local_minus_utc() as f64 / 3600.0;
    let hours = PrayerCalculator::default().compute_hours_at_offset(
        DEFAULT_LATITUDE,
        DEFAULT_LONGITUDE,
        offset,
        now.date_naive(),
    );
    PrayerTimes::from_hours(&hours)
}

/// Prayer times for an explicit configuration and IANA time zone.
///
/// Imsak is placed ten minutes before Fajr.  `tuning` holds per-event minute
/// offsets ordered Imsak, Fajr, Sunrise, Dhuhr, Asr, Sunset, Maghrib, Isha,
/// Midnight.
#[allow(clippy::too_many_arguments)]
pub fn compute_custom(
    convention: Convention,
    dhuhr_minutes: f64,
    asr_factor: AsrFactor,
    high_latitude: HighLatitudeRule,
    latitude: f64,
    longitude: f64,
    date: NaiveDate,
    timezone: &str,
    tuning: [f64; 9],
) -> Result<PrayerTimes> {
    let location = Location::new(latitude, longitude, parse_timezone(timezone)?);
    let config = CalculationConfig::new(convention)
        .with_dhuhr_minutes(dhuhr_minutes)
        .with_asr_factor(asr_factor)
        .with_high_latitude(high_latitude)
        .with_tuning(Tuning::from_minutes(tuning));
    PrayerCalculator::new(config).compute(&location, date)
}
