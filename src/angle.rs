// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Degree-based trigonometry and range reduction.
//!
//! Every solar formula in this crate is written in degrees (angles) and
//! hours (times of day).  The helpers here keep that convention at the call
//! sites: arguments and results are plain `f64` degrees, and the conversion
//! to radians is routed through [`qtty`] so the unit boundary lives in one
//! place.
//!
//! `darcsin` / `darccos` follow `f64::asin` / `f64::acos` and return `NaN`
//! outside `[-1, 1]`.  The event solver is the only caller that can leave
//! that domain and it checks the argument before calling.

use qtty::{Degree, Degrees, Radian, Radians};

/// Reduce an angle in degrees to `[0, 360)`.
#[inline]
pub fn fix_angle(a: f64) -> f64 {
    wrap(a, 360.0)
}

/// Reduce a time of day in hours to `[0, 24)`.
#[inline]
pub fn fix_hour(a: f64) -> f64 {
    wrap(a, 24.0)
}

#[inline]
fn wrap(a: f64, period: f64) -> f64 {
    let reduced = a - period * (a / period).floor();
    // `floor` can leave `period` itself for tiny negative inputs.
    if reduced >= period {
        reduced - period
    } else if reduced < 0.0 {
        reduced + period
    } else {
        reduced
    }
}

#[inline]
fn radians(degrees: f64) -> f64 {
    Degrees::new(degrees).to::<Radian>().value()
}

#[inline]
fn degrees(radians: f64) -> f64 {
    Radians::new(radians).to::<Degree>().value()
}

#[inline]
pub fn dsin(d: f64) -> f64 {
    radians(d).sin()
}

#[inline]
pub fn dcos(d: f64) -> f64 {
    radians(d).cos()
}

#[inline]
pub fn dtan(d: f64) -> f64 {
    radians(d).tan()
}

#[inline]
pub fn darcsin(x: f64) -> f64 {
    degrees(x.asin())
}

#[inline]
pub fn darccos(x: f64) -> f64 {
    degrees(x.acos())
}

#[inline]
pub fn darctan(x: f64) -> f64 {
    degrees(x.atan())
}

#[inline]
pub fn darctan2(y: f64, x: f64) -> f64 {
    degrees(y.atan2(x))
}

/// Inverse cotangent in degrees, `atan2(1, x)`; stays in `(0, 180)`.
#[inline]
pub fn darccot(x: f64) -> f64 {
    degrees(1.0_f64.atan2(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn fix_angle_reduces_into_range() {
        assert_eq!(fix_angle(0.0), 0.0);
        assert!((fix_angle(370.0) - 10.0).abs() < EPS);
        assert!((fix_angle(-30.0) - 330.0).abs() < EPS);
        assert!((fix_angle(-720.0)).abs() < EPS);
        assert!(fix_angle(359.999) < 360.0);
    }

    #[test]
    fn fix_hour_reduces_into_range() {
        assert!((fix_hour(25.5) - 1.5).abs() < EPS);
        assert!((fix_hour(-1.0) - 23.0).abs() < EPS);
        assert!((fix_hour(48.0)).abs() < EPS);
        let tiny = fix_hour(-1e-17);
        assert!((0.0..24.0).contains(&tiny));
    }

    #[test]
    fn trig_works_in_degrees() {
        assert!((dsin(30.0) - 0.5).abs() < EPS);
        assert!((dcos(60.0) - 0.5).abs() < EPS);
        assert!((dtan(45.0) - 1.0).abs() < EPS);
        assert!((darcsin(0.5) - 30.0).abs() < 1e-9);
        assert!((darccos(0.5) - 60.0).abs() < 1e-9);
        assert!((darctan(1.0) - 45.0).abs() < 1e-9);
        assert!((darctan2(-1.0, -1.0) + 135.0).abs() < 1e-9);
    }

    #[test]
    fn arccot_is_atan2_of_one() {
        assert!((darccot(1.0) - 45.0).abs() < 1e-9);
        assert!((darccot(0.0) - 90.0).abs() < 1e-9);
        assert!((darccot(-1.0) - 135.0).abs() < 1e-9);
    }

    #[test]
    fn arccos_outside_domain_is_nan() {
        assert!(darccos(1.5).is_nan());
        assert!(darcsin(-1.01).is_nan());
    }
}
