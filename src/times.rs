// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Events of the day, the raw hour buffer, and clock-time output.
//!
//! - [`Event`] names the nine daily events in chronological order.
//! - [`EventHours`] is the working buffer: one fractional hour per event,
//!   `None` where the Sun never reaches the event's altitude.
//! - [`PrayerTimes`] is the final, minute-rounded result.

use chrono::NaiveTime;
use std::fmt;
use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::fix_hour;

/// One of the nine daily events.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Event {
    Imsak,
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Sunset,
    Maghrib,
    Isha,
    Midnight,
}

impl Event {
    /// All events in output order.
    pub const ALL: [Event; 9] = [
        Event::Imsak,
        Event::Fajr,
        Event::Sunrise,
        Event::Dhuhr,
        Event::Asr,
        Event::Sunset,
        Event::Maghrib,
        Event::Isha,
        Event::Midnight,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Event::Imsak => "Imsak",
            Event::Fajr => "Fajr",
            Event::Sunrise => "Sunrise",
            Event::Dhuhr => "Dhuhr",
            Event::Asr => "Asr",
            Event::Sunset => "Sunset",
            Event::Maghrib => "Maghrib",
            Event::Isha => "Isha",
            Event::Midnight => "Midnight",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// EventHours — working buffer
// ═══════════════════════════════════════════════════════════════════════════

/// Fractional hours for each event, before rounding to clock time.
///
/// Values are not range-reduced: corrections may push them below 0 or past
/// 24 and [`fix_hour`] is applied only when formatting.  `None` marks an
/// event the Sun does not reach on that day.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct EventHours {
    hours: [Option<f64>; 9],
}

impl EventHours {
    pub const fn new(hours: [Option<f64>; 9]) -> Self {
        Self { hours }
    }

    #[inline]
    pub fn get(&self, event: Event) -> Option<f64> {
        self.hours[event.index()]
    }

    #[inline]
    pub fn set(&mut self, event: Event, hours: Option<f64>) {
        self.hours[event.index()] = hours;
    }

    /// Add `delta` hours to one event; unsolvable events stay `None`.
    #[inline]
    pub fn shift(&mut self, event: Event, delta: f64) {
        if let Some(h) = self.hours[event.index()].as_mut() {
            *h += delta;
        }
    }

    /// Add `delta` hours to every solvable event.
    pub fn shift_all(&mut self, delta: f64) {
        for h in self.hours.iter_mut().flatten() {
            *h += delta;
        }
    }

    /// Events paired with their hours, in output order.
    pub fn iter(&self) -> impl Iterator<Item = (Event, Option<f64>)> + '_ {
        Event::ALL.into_iter().map(move |e| (e, self.get(e)))
    }

    /// Events the Sun does not reach.
    pub fn unsolved(&self) -> impl Iterator<Item = Event> + '_ {
        self.iter().filter_map(|(e, h)| h.is_none().then_some(e))
    }
}

impl Index<Event> for EventHours {
    type Output = Option<f64>;
    #[inline]
    fn index(&self, event: Event) -> &Self::Output {
        &self.hours[event.index()]
    }
}

impl IndexMut<Event> for EventHours {
    #[inline]
    fn index_mut(&mut self, event: Event) -> &mut Self::Output {
        &mut self.hours[event.index()]
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// ClockTime / PrayerTimes — output
// ═══════════════════════════════════════════════════════════════════════════

/// A time of day rounded to the minute.
///
/// Always satisfies `hour < 24` and `minute < 60`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

impl ClockTime {
    /// Build from hour/minute, `None` outside the 24-hour clock.
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    /// Round a fractional hour to the nearest minute on a 24-hour clock.
    ///
    /// Half a minute is added before truncation, and the value wraps into
    /// `[0, 24)`, so 23:59:40 becomes 00:00.
    pub fn from_hours(hours: f64) -> Self {
        let t = fix_hour(hours + 0.5 / 60.0);
        let hour = t.floor();
        let minute = ((t - hour) * 60.0).floor();
        Self {
            hour: (hour as u8).min(23),
            minute: (minute as u8).min(59),
        }
    }

    /// Minutes since midnight.
    #[inline]
    pub const fn minutes_of_day(self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl From<ClockTime> for NaiveTime {
    fn from(t: ClockTime) -> Self {
        // hour < 24 and minute < 60 by construction
        NaiveTime::from_hms_opt(t.hour as u32, t.minute as u32, 0).unwrap_or(NaiveTime::MIN)
    }
}

/// Prayer times for one day.
///
/// A field is `None` only when the Sun does not reach the event's altitude
/// and no high-latitude rule was configured to replace it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrayerTimes {
    pub imsak: Option<ClockTime>,
    pub fajr: Option<ClockTime>,
    pub sunrise: Option<ClockTime>,
    pub dhuhr: Option<ClockTime>,
    pub asr: Option<ClockTime>,
    pub sunset: Option<ClockTime>,
    pub maghrib: Option<ClockTime>,
    pub isha: Option<ClockTime>,
    pub midnight: Option<ClockTime>,
}

impl PrayerTimes {
    /// Round every event of `hours` to clock time.
    pub fn from_hours(hours: &EventHours) -> Self {
        let at = |e: Event| hours.get(e).map(ClockTime::from_hours);
        Self {
            imsak: at(Event::Imsak),
            fajr: at(Event::Fajr),
            sunrise: at(Event::Sunrise),
            dhuhr: at(Event::Dhuhr),
            asr: at(Event::Asr),
            sunset: at(Event::Sunset),
            maghrib: at(Event::Maghrib),
            isha: at(Event::Isha),
            midnight: at(Event::Midnight),
        }
    }

    pub fn get(&self, event: Event) -> Option<ClockTime> {
        match event {
            Event::Imsak => self.imsak,
            Event::Fajr => self.fajr,
            Event::Sunrise => self.sunrise,
            Event::Dhuhr => self.dhuhr,
            Event::Asr => self.asr,
            Event::Sunset => self.sunset,
            Event::Maghrib => self.maghrib,
            Event::Isha => self.isha,
            Event::Midnight => self.midnight,
        }
    }

    /// Events paired with their clock times, in output order.
    pub fn iter(&self) -> impl Iterator<Item = (Event, Option<ClockTime>)> + '_ {
        Event::ALL.into_iter().map(move |e| (e, self.get(e)))
    }

    /// `true` when every event has a time.
    pub fn is_complete(&self) -> bool {
        self.iter().all(|(_, t)| t.is_some())
    }
}

impl fmt::Display for PrayerTimes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (event, time) in self.iter() {
            match time {
                Some(t) => writeln!(f, "{event:<8} {t}")?,
                None => writeln!(f, "{event:<8} --:--")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest_minute() {
        assert_eq!(ClockTime::from_hours(3.983_86), ClockTime::new(3, 59).unwrap());
        assert_eq!(ClockTime::from_hours(5.251_31), ClockTime::new(5, 15).unwrap());
        // 12:29:31 rounds up, 12:29:29 rounds down
        assert_eq!(
            ClockTime::from_hours(12.0 + 29.0 / 60.0 + 31.0 / 3600.0),
            ClockTime::new(12, 30).unwrap()
        );
        assert_eq!(
            ClockTime::from_hours(12.0 + 29.0 / 60.0 + 29.0 / 3600.0),
            ClockTime::new(12, 29).unwrap()
        );
    }

    #[test]
    fn wraps_around_midnight() {
        assert_eq!(ClockTime::from_hours(23.999), ClockTime::new(0, 0).unwrap());
        assert_eq!(ClockTime::from_hours(24.5), ClockTime::new(0, 30).unwrap());
        assert_eq!(ClockTime::from_hours(-0.5), ClockTime::new(23, 30).unwrap());
    }

    #[test]
    fn clock_time_bounds() {
        assert!(ClockTime::new(24, 0).is_none());
        assert!(ClockTime::new(23, 60).is_none());
        let t = ClockTime::new(23, 59).unwrap();
        assert_eq!(t.minutes_of_day(), 1439);
        assert_eq!(t.to_string(), "23:59");
        assert_eq!(
            NaiveTime::from(t),
            NaiveTime::from_hms_opt(23, 59, 0).unwrap()
        );
    }

    #[test]
    fn event_hours_shift_skips_unsolved() {
        let mut hours = EventHours::default();
        hours.set(Event::Dhuhr, Some(12.0));
        hours.shift_all(1.5);
        hours.shift(Event::Isha, 2.0);
        assert_eq!(hours[Event::Dhuhr], Some(13.5));
        assert_eq!(hours[Event::Isha], None);
        assert_eq!(hours.unsolved().count(), 8);
    }

    #[test]
    fn prayer_times_follow_event_order() {
        let mut raw = [None; 9];
        for (i, slot) in raw.iter_mut().enumerate() {
            *slot = Some(4.0 + 2.0 * i as f64);
        }
        let times = PrayerTimes::from_hours(&EventHours::new(raw));
        assert!(times.is_complete());
        assert_eq!(times.imsak, ClockTime::new(4, 0));
        assert_eq!(times.midnight, ClockTime::new(20, 0));
        for (event, time) in times.iter() {
            assert_eq!(time.map(|t| t.hour as usize), Some(4 + 2 * event.index()));
        }
    }

    #[test]
    fn display_marks_missing_events() {
        let mut hours = EventHours::default();
        hours.set(Event::Dhuhr, Some(12.25));
        let text = PrayerTimes::from_hours(&hours).to_string();
        assert!(text.contains("Dhuhr    12:15"));
        assert!(text.contains("Fajr     --:--"));
        assert_eq!(text.lines().count(), 9);
    }
}
