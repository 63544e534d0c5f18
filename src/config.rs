// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calculation settings and observer location.
//!
//! [`CalculationConfig`] gathers everything that is independent of place
//! and date: convention, Asr juristic factor, fixed offsets, high-latitude
//! rule and per-event tuning.  [`Location`] carries the observer's
//! coordinates and time zone; the zone's UTC offset is resolved per date so
//! daylight-saving transitions are honoured.

use chrono::{NaiveDate, NaiveTime, Offset, TimeZone};
use chrono_tz::Tz;
use log::debug;
use qtty::{Degrees, Hour, Minutes};
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::convention::{Convention, ConventionAngles};
use crate::error::{PrayerTimeError, Result};
use crate::high_latitude::HighLatitudeRule;
use crate::times::Event;

#[inline]
pub(crate) fn to_hours(minutes: Minutes) -> f64 {
    minutes.to::<Hour>().value()
}

// ═══════════════════════════════════════════════════════════════════════════
// Asr factor
// ═══════════════════════════════════════════════════════════════════════════

/// Juristic definition of Asr.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AsrFactor {
    /// Shadow equals the object's height (Shafi'i, Maliki, Hanbali, Ja'fari).
    #[default]
    Standard,
    /// Shadow equals twice the object's height.
    Hanafi,
}

impl AsrFactor {
    /// Shadow length as a multiple of the object's height.
    #[inline]
    pub const fn shadow_factor(self) -> f64 {
        match self {
            AsrFactor::Standard => 1.0,
            AsrFactor::Hanafi => 2.0,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tuning
// ═══════════════════════════════════════════════════════════════════════════

/// Signed per-event minute offsets applied after every other correction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tuning {
    offsets: [Minutes; 9],
}

impl Tuning {
    /// No offsets.
    pub const ZERO: Self = Self {
        offsets: [Minutes::new(0.0); 9],
    };

    /// Offsets in minutes, ordered Imsak, Fajr, Sunrise, Dhuhr, Asr, Sunset,
    /// Maghrib, Isha, Midnight.
    pub fn from_minutes(minutes: [f64; 9]) -> Self {
        Self {
            offsets: minutes.map(Minutes::new),
        }
    }

    /// Same offsets with `event` set to `minutes`.
    pub fn with(mut self, event: Event, minutes: f64) -> Self {
        self.offsets[event.index()] = Minutes::new(minutes);
        self
    }

    /// Offset of `event` in hours.
    #[inline]
    pub fn hours(&self, event: Event) -> f64 {
        to_hours(self.offsets[event.index()])
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Index<Event> for Tuning {
    type Output = Minutes;
    fn index(&self, event: Event) -> &Minutes {
        &self.offsets[event.index()]
    }
}

// Serialized as the nine minute offsets in event order.
#[cfg(feature = "serde")]
impl Serialize for Tuning {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.offsets.map(|m| m.value()).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Tuning {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let minutes = <[f64; 9]>::deserialize(deserializer)?;
        Ok(Self::from_minutes(minutes))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CalculationConfig
// ═══════════════════════════════════════════════════════════════════════════

/// Place- and date-independent settings.
///
/// The default is the Jafari convention with standard Asr, the angle-based
/// high-latitude rule, Imsak ten minutes before Fajr and no tuning.
///
/// ```rust
/// use praytime::{AsrFactor, CalculationConfig, Convention, HighLatitudeRule};
///
/// let config = CalculationConfig::new(Convention::Isna)
///     .with_asr_factor(AsrFactor::Hanafi)
///     .with_high_latitude(HighLatitudeRule::OneSeventh)
///     .with_dhuhr_minutes(1.0);
/// assert_eq!(config.convention, Convention::Isna);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculationConfig {
    pub convention: Convention,
    pub asr_factor: AsrFactor,
    /// Delay added to solar noon.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_quantity::minutes"))]
    pub dhuhr_offset: Minutes,
    /// How long before Fajr Imsak begins.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_quantity::minutes"))]
    pub imsak_offset: Minutes,
    pub high_latitude: HighLatitudeRule,
    pub tuning: Tuning,
    /// Parameters used instead of the table row when the convention is
    /// [`Convention::Custom`].
    pub custom_angles: Option<ConventionAngles>,
}

impl CalculationConfig {
    /// Defaults with the given convention.
    pub fn new(convention: Convention) -> Self {
        Self {
            convention,
            ..Self::default()
        }
    }

    pub fn with_asr_factor(mut self, asr_factor: AsrFactor) -> Self {
        self.asr_factor = asr_factor;
        self
    }

    pub fn with_dhuhr_minutes(mut self, minutes: f64) -> Self {
        self.dhuhr_offset = Minutes::new(minutes);
        self
    }

    pub fn with_imsak_minutes(mut self, minutes: f64) -> Self {
        self.imsak_offset = Minutes::new(minutes);
        self
    }

    pub fn with_high_latitude(mut self, rule: HighLatitudeRule) -> Self {
        self.high_latitude = rule;
        self
    }

    pub fn with_tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Switch to [`Convention::Custom`] with the given parameters.
    pub fn with_custom_angles(mut self, angles: ConventionAngles) -> Self {
        self.convention = Convention::Custom;
        self.custom_angles = Some(angles);
        self
    }

    /// Twilight parameters in effect.
    pub fn angles(&self) -> ConventionAngles {
        match (self.convention, self.custom_angles) {
            (Convention::Custom, Some(custom)) => custom,
            (convention, _) => *convention.angles(),
        }
    }
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self {
            convention: Convention::Jafari,
            asr_factor: AsrFactor::Standard,
            dhuhr_offset: Minutes::new(0.0),
            imsak_offset: Minutes::new(10.0),
            high_latitude: HighLatitudeRule::AngleBased,
            tuning: Tuning::ZERO,
            custom_angles: None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Location
// ═══════════════════════════════════════════════════════════════════════════

/// Observer position and civil time zone.
///
/// Coordinates are not validated; values outside ±90° / ±180° give
/// degenerate results but never panic.
#[derive(Debug, Clone, PartialEq)]
pub struct Location<Z: TimeZone = Tz> {
    /// Geodetic latitude, north positive.
    pub latitude: Degrees,
    /// Longitude, east positive.
    pub longitude: Degrees,
    pub timezone: Z,
}

impl<Z: TimeZone> Location<Z> {
    pub fn new(latitude: f64, longitude: f64, timezone: Z) -> Self {
        Self {
            latitude: Degrees::new(latitude),
            longitude: Degrees::new(longitude),
            timezone,
        }
    }

    /// UTC offset of the zone on `date`, in hours.
    pub fn utc_offset_hours(&self, date: NaiveDate) -> Result<f64> {
        utc_offset_hours(&self.timezone, date)
    }
}

impl Location<Tz> {
    /// Location in a named IANA zone such as `"Australia/Sydney"`.
    pub fn with_timezone_name(latitude: f64, longitude: f64, name: &str) -> Result<Self> {
        Ok(Self::new(latitude, longitude, parse_timezone(name)?))
    }
}

/// Parse an IANA time-zone identifier.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| PrayerTimeError::UnknownTimezone(name.to_owned()))
}

/// UTC offset in hours in effect at the start of `date` in `tz`.
///
/// When local midnight falls in a DST gap the offset at local noon is used.
pub fn utc_offset_hours<Z: TimeZone>(tz: &Z, date: NaiveDate) -> Result<f64> {
    let local = tz
        .from_local_datetime(&date.and_time(NaiveTime::MIN))
        .earliest()
        .or_else(|| {
            let noon = date.and_hms_opt(12, 0, 0)?;
            tz.from_local_datetime(&noon).earliest()
        })
        .ok_or(PrayerTimeError::UnresolvableLocalDate(date))?;

    let seconds = local.offset().fix().local_minus_utc();
    let hours = seconds as f64 / 3600.0;
    debug!("utc offset on {date}: {hours} h");
    Ok(hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_config() {
        let config = CalculationConfig::default();
        assert_eq!(config.convention, Convention::Jafari);
        assert_eq!(config.asr_factor, AsrFactor::Standard);
        assert_eq!(config.high_latitude, HighLatitudeRule::AngleBased);
        assert_eq!(config.imsak_offset, Minutes::new(10.0));
        assert_eq!(config.dhuhr_offset, Minutes::new(0.0));
        assert_eq!(config.tuning, Tuning::ZERO);
    }

    #[test]
    fn custom_angles_only_apply_to_custom() {
        let mut angles = *Convention::Mwl.angles();
        angles.fajr = Degrees::new(20.0);

        let config = CalculationConfig::new(Convention::Isna).with_custom_angles(angles);
        assert_eq!(config.convention, Convention::Custom);
        assert_eq!(config.angles().fajr, Degrees::new(20.0));

        let isna = CalculationConfig {
            convention: Convention::Isna,
            ..config
        };
        assert_eq!(isna.angles(), *Convention::Isna.angles());
    }

    #[test]
    fn tuning_converts_minutes_to_hours() {
        let tuning = Tuning::from_minutes([0.0, -3.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 30.0]);
        assert!((tuning.hours(Event::Fajr) + 0.05).abs() < 1e-12);
        assert!((tuning.hours(Event::Dhuhr) - 2.0 / 60.0).abs() < 1e-12);
        assert!((tuning.hours(Event::Midnight) - 0.5).abs() < 1e-12);
        assert_eq!(tuning.hours(Event::Sunrise), 0.0);
        let tuned = tuning.with(Event::Isha, 6.0);
        assert_eq!(tuned[Event::Isha], Minutes::new(6.0));
        assert!((tuned.hours(Event::Isha) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn asr_shadow_factors() {
        assert_eq!(AsrFactor::Standard.shadow_factor(), 1.0);
        assert_eq!(AsrFactor::Hanafi.shadow_factor(), 2.0);
    }

    #[test]
    fn sydney_offset_follows_dst() {
        let sydney = parse_timezone("Australia/Sydney").unwrap();
        assert_eq!(utc_offset_hours(&sydney, date(1981, 10, 14)).unwrap(), 10.0);
        assert_eq!(utc_offset_hours(&sydney, date(2024, 1, 15)).unwrap(), 11.0);
        assert_eq!(utc_offset_hours(&sydney, date(2024, 7, 15)).unwrap(), 10.0);
    }

    #[test]
    fn fractional_offsets_are_kept() {
        let kolkata = parse_timezone("Asia/Kolkata").unwrap();
        assert_eq!(utc_offset_hours(&kolkata, date(2024, 3, 1)).unwrap(), 5.5);
        let fixed = FixedOffset::east_opt(-(3 * 3600 + 1800)).unwrap();
        assert_eq!(utc_offset_hours(&fixed, date(2024, 3, 1)).unwrap(), -3.5);
    }

    #[test]
    fn midnight_dst_gap_falls_back_to_noon() {
        // Chile skips 00:00–01:00 local when DST starts (2023-09-03).
        let santiago = parse_timezone("America/Santiago").unwrap();
        assert_eq!(utc_offset_hours(&santiago, date(2023, 9, 3)).unwrap(), -3.0);
    }

    #[test]
    fn unknown_timezone_is_an_error() {
        assert_eq!(
            parse_timezone("Mars/Olympus_Mons"),
            Err(PrayerTimeError::UnknownTimezone("Mars/Olympus_Mons".into()))
        );
        assert!(Location::with_timezone_name(0.0, 0.0, "Not/AZone").is_err());
    }

    #[test]
    fn location_holds_degrees() {
        let loc = Location::with_timezone_name(-33.8688, 151.2093, "Australia/Sydney").unwrap();
        assert_eq!(loc.latitude, Degrees::new(-33.8688));
        assert_eq!(loc.longitude, Degrees::new(151.2093));
        assert_eq!(loc.utc_offset_hours(date(1981, 10, 14)).unwrap(), 10.0);
    }
}
