// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day instants built from Gregorian calendar dates.
//!
//! [`JulianDay`] stores a single [`Days`] quantity counted from the start of
//! the Julian Period.  Calendar dates are converted with the Meeus
//! formulation, which is valid for any proleptic Gregorian date.
//!
//! The conversion anchors a civil date at **noon** (integral Julian Day
//! numbers), which is the reference instant the prayer-time solver expects:
//! event seeds are then added as day fractions with `+ Days`.

use chrono::{Datelike, NaiveDate};
use qtty::Days;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A point on the continuous Julian Day axis.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDay {
    quantity: Days,
}

impl JulianDay {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw Julian Day number.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self { quantity: days }
    }

    /// Julian Day number of a Gregorian calendar date, anchored at noon.
    ///
    /// January and February are counted as months 13 and 14 of the previous
    /// year, then the Gregorian century correction `B = 2 − A + ⌊A/4⌋` is
    /// applied:
    ///
    /// ```text
    /// JD = ⌊365.25 (Y + 4716)⌋ + ⌊30.6001 (M + 1)⌋ + D + B − 1524
    /// ```
    ///
    /// ```rust
    /// use praytime::JulianDay;
    ///
    /// let jd = JulianDay::from_calendar(2000, 1, 1);
    /// assert_eq!(jd, JulianDay::J2000);
    /// ```
    pub fn from_calendar(year: i32, month: u32, day: u32) -> Self {
        let (mut y, mut m) = (year as f64, month as f64);
        if month <= 2 {
            y -= 1.0;
            m += 12.0;
        }
        let a = (y / 100.0).floor();
        let b = 2.0 - a + (a / 4.0).floor();
        let value =
            (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day as f64 + b
                - 1524.0;
        Self::new(value)
    }

    /// Julian Day number of a `chrono` calendar date.
    #[inline]
    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_calendar(date.year(), date.month(), date.day())
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying Julian Day number.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Days elapsed since J2000.0 (negative before the epoch).
    #[inline]
    pub fn days_since_j2000(&self) -> Days {
        *self - Self::J2000
    }
}

impl std::fmt::Display for JulianDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Julian Day: {}", self.quantity)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for JulianDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for JulianDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add<Days> for JulianDay {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl AddAssign<Days> for JulianDay {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.quantity += rhs;
    }
}

impl Sub<Days> for JulianDay {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl SubAssign<Days> for JulianDay {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.quantity -= rhs;
    }
}

impl Sub for JulianDay {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

impl From<Days> for JulianDay {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl From<JulianDay> for Days {
    #[inline]
    fn from(jd: JulianDay) -> Self {
        jd.quantity
    }
}

impl From<NaiveDate> for JulianDay {
    #[inline]
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_calendar_date() {
        let jd = JulianDay::from_calendar(2000, 1, 1);
        assert_eq!(jd.value(), 2_451_545.0);
        assert_eq!(jd.days_since_j2000(), Days::new(0.0));
        assert_eq!(
            JulianDay::from_calendar(1999, 12, 31).days_since_j2000(),
            Days::new(-1.0)
        );
    }

    #[test]
    fn meeus_reference_dates() {
        // Astronomical Algorithms, example 7.a and table 7.a, shifted to noon
        assert_eq!(JulianDay::from_calendar(1957, 10, 4).value(), 2_436_116.0);
        assert_eq!(JulianDay::from_calendar(1987, 1, 27).value(), 2_446_823.0);
        assert_eq!(JulianDay::from_calendar(1988, 6, 19).value(), 2_447_332.0);
        assert_eq!(JulianDay::from_calendar(1600, 12, 31).value(), 2_305_813.0);
    }

    #[test]
    fn january_and_february_roll_back_a_year() {
        let feb_28 = JulianDay::from_calendar(2024, 2, 28);
        let feb_29 = JulianDay::from_calendar(2024, 2, 29);
        let mar_1 = JulianDay::from_calendar(2024, 3, 1);
        assert_eq!(feb_29 - feb_28, Days::new(1.0));
        assert_eq!(mar_1 - feb_29, Days::new(1.0));
    }

    #[test]
    fn from_date_matches_from_calendar() {
        let date = NaiveDate::from_ymd_opt(1981, 10, 14).unwrap();
        assert_eq!(
            JulianDay::from_date(date),
            JulianDay::from_calendar(1981, 10, 14)
        );
        assert_eq!(JulianDay::from(date).value(), 2_444_892.0);
    }

    #[test]
    fn add_and_sub_days() {
        let mut jd = JulianDay::J2000;
        jd += Days::new(1.25);
        assert_eq!(jd.value(), 2_451_546.25);
        jd -= Days::new(0.25);
        assert_eq!((jd - Days::new(1.0)).value(), 2_451_545.0);
        assert_eq!((jd + Days::new(0.5)).quantity(), Days::new(2_451_546.5));
    }

    #[test]
    fn display_has_label() {
        let s = format!("{}", JulianDay::J2000);
        assert!(s.contains("Julian Day"));
    }
}
