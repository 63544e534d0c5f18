// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Prayer Times
//!
//! This crate computes the daily Islamic prayer times (Imsak, Fajr, Sunrise,
//! Dhuhr, Asr, Sunset, Maghrib, Isha and Midnight) for any location and
//! date from a low-precision solar ephemeris.
//!
//! # Core types
//!
//! - [`PrayerCalculator`] — runs the pipeline for a [`CalculationConfig`].
//! - [`CalculationConfig`] — convention, Asr factor, offsets, high-latitude rule, tuning.
//! - [`Location`] — latitude, longitude and a `chrono` time zone.
//! - [`PrayerTimes`] — minute-rounded result; [`EventHours`] — fractional hours.
//! - [`Convention`] / [`ConventionAngles`] — twilight parameters per convention.
//! - [`HighLatitudeRule`] — fallback for twilight the Sun never reaches.
//! - [`JulianDay`] / [`SolarPosition`] — the astronomical building blocks.
//!
//! # Pipeline
//!
//! | Stage | Module |
//! |-------|--------|
//! | Gregorian date → Julian day | [`julian`] |
//! | Declination, equation of time | [`solar`] |
//! | Hour-angle solving | [`solver`] |
//! | Convention parameters | [`convention`] |
//! | High-latitude correction | [`high_latitude`] |
//! | Zone shift, offsets, Midnight, tuning | [`calculator`] |
//! | Rounding to clock time | [`times`] |
//!
//! # Unsolvable events
//!
//! Near the polar circles the Sun may never reach a twilight angle (or the
//! horizon).  The solver reports such events as `None`.  With a
//! [`HighLatitudeRule`] other than `None` twilight events are replaced by a
//! portion of the night; with [`HighLatitudeRule::None`] they stay `None` in
//! [`PrayerTimes`].  Without sunrise or sunset no rule applies.
//!
//! # Quick example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use praytime::{compute_custom, AsrFactor, ClockTime, Convention, HighLatitudeRule};
//!
//! let times = compute_custom(
//!     Convention::Jafari,
//!     0.0,
//!     AsrFactor::Standard,
//!     HighLatitudeRule::AngleBased,
//!     -33.8688,
//!     151.2093,
//!     NaiveDate::from_ymd_opt(1981, 10, 14).unwrap(),
//!     "Australia/Sydney",
//!     [0.0; 9],
//! )?;
//! assert_eq!(times.sunrise, ClockTime::new(5, 15));
//! assert_eq!(times.maghrib, ClockTime::new(18, 23));
//! # Ok::<(), praytime::PrayerTimeError>(())
//! ```

pub mod angle;
pub mod calculator;
mod config;
pub mod convention;
mod error;
pub mod high_latitude;
pub mod julian;
#[cfg(feature = "serde")]
mod serde_quantity;
pub mod solar;
pub mod solver;
pub mod times;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calculator::{compute_custom, compute_default, PrayerCalculator};
pub use config::{
    parse_timezone, utc_offset_hours, AsrFactor, CalculationConfig, Location, Tuning,
};
pub use convention::{Convention, ConventionAngles, IshaRule, MaghribRule};
pub use error::{PrayerTimeError, Result};
pub use high_latitude::HighLatitudeRule;
pub use julian::JulianDay;
pub use solar::SolarPosition;
pub use times::{ClockTime, Event, EventHours, PrayerTimes};
