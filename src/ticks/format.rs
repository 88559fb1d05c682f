//! Decimal degrees to degrees/minutes/seconds text.
//!
//! Seconds are printed with one decimal place. Rounding happens once, on the
//! whole angle expressed in tenths of an arcsecond, so a value just below a
//! minute or degree boundary carries upward instead of printing `60`.

use crate::ticks::series::Axis;
use serde::{Deserialize, Serialize};
use std::fmt;

const TENTHS_PER_DEGREE: f64 = 36_000.0;
const TENTHS_PER_MINUTE: u64 = 600;

/// An angle split into sexagesimal components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DmsAngle {
    pub degrees: u64,
    pub minutes: u64,
    /// Seconds times ten
    pub tenths_of_seconds: u64,
    /// Sign of the source value; false when the angle rounds to zero
    pub negative: bool,
}

impl DmsAngle {
    pub fn from_degrees(value: f64) -> Self {
        let tenths = (value.abs() * TENTHS_PER_DEGREE).round() as u64;
        let per_degree = TENTHS_PER_DEGREE as u64;

        Self {
            degrees: tenths / per_degree,
            minutes: (tenths % per_degree) / TENTHS_PER_MINUTE,
            tenths_of_seconds: tenths % TENTHS_PER_MINUTE,
            negative: value < 0.0 && tenths != 0,
        }
    }

    pub fn seconds(&self) -> f64 {
        self.tenths_of_seconds as f64 / 10.0
    }

    pub fn is_zero(&self) -> bool {
        self.degrees == 0 && self.minutes == 0 && self.tenths_of_seconds == 0
    }

    /// Signed decimal degrees, after rounding
    pub fn to_degrees(&self) -> f64 {
        let magnitude = self.degrees as f64
            + self.minutes as f64 / 60.0
            + self.seconds() / 3600.0;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

/// Unsigned form, e.g. `45° 30' 12.5"`
impl fmt::Display for DmsAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}° {}' {}.{}\"",
            self.degrees,
            self.minutes,
            self.tenths_of_seconds / 10,
            self.tenths_of_seconds % 10
        )
    }
}

/// Formats `value` as DMS.
///
/// With `hemisphere` set the sign becomes a `N`/`S` or `E`/`W` prefix;
/// otherwise negative values get a leading `-`. Zero carries no sign.
pub fn format_dms(value: f64, hemisphere: Option<Axis>) -> String {
    let angle = DmsAngle::from_degrees(value);
    if angle.is_zero() {
        return angle.to_string();
    }

    match hemisphere {
        Some(axis) => format!("{} {}", axis.hemisphere(angle.negative), angle),
        None if angle.negative => format!("-{angle}"),
        None => angle.to_string(),
    }
}

/// Label text for a coordinate on `axis`
pub fn format_coordinate(value: f64, axis: Axis, hemisphere_labels: bool) -> String {
    format_dms(value, hemisphere_labels.then_some(axis))
}
