// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calculation conventions and their twilight parameters.
//!
//! Each convention fixes the solar depression that defines Fajr and how
//! Maghrib and Isha are placed: either by their own depression angle or as a
//! fixed number of minutes after a reference event.
//!
//! | Convention | Fajr | Maghrib | Isha |
//! |------------|------|---------|------|
//! | [`Jafari`](Convention::Jafari) | 16° | 4° | 14° |
//! | [`Karachi`](Convention::Karachi) | 18° | sunset | 18° |
//! | [`Isna`](Convention::Isna) | 15° | sunset | 15° |
//! | [`Mwl`](Convention::Mwl) | 18° | sunset | 17° |
//! | [`Makkah`](Convention::Makkah) | 18.5° | sunset | Maghrib + 90 min |
//! | [`Egypt`](Convention::Egypt) | 19.5° | sunset | 17.5° |
//! | [`Tehran`](Convention::Tehran) | 17.7° | 4.5° | 14° |
//! | [`Custom`](Convention::Custom) | 18° | sunset | 17° |

use qtty::{Degrees, Minutes};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{PrayerTimeError, Result};

/// How Maghrib is placed relative to sunset.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MaghribRule {
    /// Solar depression below the horizon.
    Angle(#[cfg_attr(feature = "serde", serde(with = "crate::serde_quantity::degrees"))] Degrees),
    /// Fixed delay after sunset.
    MinutesAfterSunset(
        #[cfg_attr(feature = "serde", serde(with = "crate::serde_quantity::minutes"))] Minutes,
    ),
}

/// How Isha is placed.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IshaRule {
    /// Solar depression below the horizon.
    Angle(#[cfg_attr(feature = "serde", serde(with = "crate::serde_quantity::degrees"))] Degrees),
    /// Fixed delay after Maghrib.
    MinutesAfterMaghrib(
        #[cfg_attr(feature = "serde", serde(with = "crate::serde_quantity::minutes"))] Minutes,
    ),
}

/// Twilight parameters of one convention.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConventionAngles {
    /// Solar depression at Fajr.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_quantity::degrees"))]
    pub fajr: Degrees,
    pub maghrib: MaghribRule,
    pub isha: IshaRule,
}

impl ConventionAngles {
    pub const fn new(fajr: Degrees, maghrib: MaghribRule, isha: IshaRule) -> Self {
        Self {
            fajr,
            maghrib,
            isha,
        }
    }
}

const fn angles(fajr: f64, maghrib: MaghribRule, isha: IshaRule) -> ConventionAngles {
    ConventionAngles::new(Degrees::new(fajr), maghrib, isha)
}

const fn maghrib_at(depression: f64) -> MaghribRule {
    MaghribRule::Angle(Degrees::new(depression))
}

const fn isha_at(depression: f64) -> IshaRule {
    IshaRule::Angle(Degrees::new(depression))
}

const AT_SUNSET: MaghribRule = MaghribRule::MinutesAfterSunset(Minutes::new(0.0));

/// Parameters for every convention, indexed by `Convention as usize`.
#[rustfmt::skip]
static CONVENTION_TABLE: [ConventionAngles; 8] = [
    angles(16.0, maghrib_at(4.0), isha_at(14.0)),                                     // Jafari
    angles(18.0, AT_SUNSET, isha_at(18.0)),                                           // Karachi
    angles(15.0, AT_SUNSET, isha_at(15.0)),                                           // ISNA
    angles(18.0, AT_SUNSET, isha_at(17.0)),                                           // MWL
    angles(18.5, AT_SUNSET, IshaRule::MinutesAfterMaghrib(Minutes::new(90.0))),       // Makkah
    angles(19.5, AT_SUNSET, isha_at(17.5)),                                           // Egypt
    angles(17.7, maghrib_at(4.5), isha_at(14.0)),                                     // Tehran
    angles(18.0, AT_SUNSET, isha_at(17.0)),                                           // Custom
];

/// Calculation convention.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Convention {
    /// Shia Ithna Ashari, Leva Institute, Qum.
    #[default]
    Jafari,
    /// University of Islamic Sciences, Karachi.
    Karachi,
    /// Islamic Society of North America.
    Isna,
    /// Muslim World League.
    Mwl,
    /// Umm al-Qura University, Makkah.
    Makkah,
    /// Egyptian General Authority of Survey.
    Egypt,
    /// Institute of Geophysics, University of Tehran.
    Tehran,
    /// Caller-supplied angles (MWL parameters unless overridden).
    Custom,
}

impl Convention {
    /// Every convention, in table order.
    pub const ALL: [Convention; 8] = [
        Convention::Jafari,
        Convention::Karachi,
        Convention::Isna,
        Convention::Mwl,
        Convention::Makkah,
        Convention::Egypt,
        Convention::Tehran,
        Convention::Custom,
    ];

    /// Look up a convention by its table index.
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(PrayerTimeError::UnknownConvention(index))
    }

    /// Position in the convention table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Twilight parameters of this convention.
    #[inline]
    pub fn angles(self) -> &'static ConventionAngles {
        &CONVENTION_TABLE[self.index()]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Convention::Jafari => "Jafari",
            Convention::Karachi => "Karachi",
            Convention::Isna => "ISNA",
            Convention::Mwl => "MWL",
            Convention::Makkah => "Makkah",
            Convention::Egypt => "Egypt",
            Convention::Tehran => "Tehran",
            Convention::Custom => "Custom",
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Convention {
    type Err = PrayerTimeError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PrayerTimeError::UnknownConventionName(s.to_owned()))
    }
}
