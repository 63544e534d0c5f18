// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Configuration errors.
//!
//! Only caller mistakes are errors.  An event the Sun never reaches is an
//! astronomical fact and travels through the pipeline as `None`.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while setting up a prayer-time computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrayerTimeError {
    /// The time-zone identifier is not in the IANA database.
    #[error("unknown time zone identifier '{0}'")]
    UnknownTimezone(String),

    /// A convention index is outside the convention table.
    #[error("convention index {0} is out of range (0..{max})", max = crate::Convention::ALL.len())]
    UnknownConvention(usize),

    /// A convention name did not match any known convention.
    #[error("unknown calculation convention '{0}'")]
    UnknownConventionName(String),

    /// The zone has no instant for the start of this local date.
    #[error("time zone cannot resolve local date {0}")]
    UnresolvableLocalDate(NaiveDate),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PrayerTimeError>;
