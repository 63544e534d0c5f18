// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! High-latitude rules for Fajr, Maghrib and Isha.
//!
//! Near the polar circles the Sun may stay above the twilight angle all
//! night, or reach it so late that the naive time is unusable.  Each rule
//! caps the distance between sunrise/sunset and the twilight event at a
//! portion of the night (sunset → sunrise):
//!
//! | Rule | Portion of the night |
//! |------|----------------------|
//! | [`NightMiddle`](HighLatitudeRule::NightMiddle) | 1/2 |
//! | [`OneSeventh`](HighLatitudeRule::OneSeventh) | 1/7 |
//! | [`AngleBased`](HighLatitudeRule::AngleBased) | angle / 60 |
//!
//! An event is replaced when it is unsolvable or lies further from its
//! anchor than that portion allows.

use log::debug;
use qtty::Degrees;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::fix_hour;
use crate::convention::{ConventionAngles, IshaRule, MaghribRule};
use crate::times::{Event, EventHours};

/// Correction applied to twilight events at high latitudes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HighLatitudeRule {
    /// No correction; unreachable events stay unsolved.
    None,
    /// Twilight events bounded by the middle of the night.
    NightMiddle,
    /// Twilight events bounded by one seventh of the night.
    OneSeventh,
    /// Twilight events bounded by `angle / 60` of the night.
    AngleBased,
}

impl HighLatitudeRule {
    /// Portion of the night allotted to an event with twilight `angle`.
    pub fn night_portion(self, angle: Degrees) -> f64 {
        match self {
            HighLatitudeRule::None => 0.0,
            HighLatitudeRule::NightMiddle => 0.5,
            HighLatitudeRule::OneSeventh => 1.0 / 7.0,
            HighLatitudeRule::AngleBased => angle.value() / 60.0,
        }
    }
}

/// Forward distance in hours from `from` to `to`, wrapping past midnight.
#[inline]
pub fn time_diff(from: f64, to: f64) -> f64 {
    fix_hour(to - from)
}

/// Apply `rule` to the angle-defined twilight events of `times`.
///
/// Minute-defined Maghrib and Isha are left alone; they are derived from
/// sunset afterwards.  Without both sunrise and sunset there is no night to
/// divide and nothing changes.
pub fn adjust(rule: HighLatitudeRule, angles: &ConventionAngles, times: &mut EventHours) {
    if rule == HighLatitudeRule::None {
        return;
    }
    let (Some(sunrise), Some(sunset)) = (times[Event::Sunrise], times[Event::Sunset]) else {
        return;
    };
    let night = time_diff(sunset, sunrise);

    let fajr_diff = rule.night_portion(angles.fajr) * night;
    let fajr = times[Event::Fajr];
    if fajr.map_or(true, |t| time_diff(t, sunrise) > fajr_diff) {
        replace(times, Event::Fajr, sunrise - fajr_diff);
    }

    if let MaghribRule::Angle(angle) = angles.maghrib {
        let diff = rule.night_portion(angle) * night;
        if times[Event::Maghrib].map_or(true, |t| time_diff(sunset, t) > diff) {
            replace(times, Event::Maghrib, sunset + diff);
        }
    }

    if let IshaRule::Angle(angle) = angles.isha {
        let diff = rule.night_portion(angle) * night;
        if times[Event::Isha].map_or(true, |t| time_diff(sunset, t) > diff) {
            replace(times, Event::Isha, sunset + diff);
        }
    }
}

fn replace(times: &mut EventHours, event: Event, hours: f64) {
    debug!(
        "high-latitude rule moves {event} from {:?} to {hours:.4} h",
        times[event]
    );
    times[event] = Some(hours);
}
