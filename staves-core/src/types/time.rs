//! Rational time for durations and onsets
//!
//! Every duration and every time offset in a score is an exact rational, so
//! `1`, `2/2` and `1.0` all describe the same length and sums never drift.

use num_rational::Ratio;
use num_traits::Zero;

/// Exact time point or duration in beats
pub type Time = Ratio<i64>;

/// A half-open span of time [start, end)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: Time,
    pub end: Time,
}

impl Span {
    /// Create a new span from start to end
    pub fn new(start: Time, end: Time) -> Self {
        Self { start, end }
    }

    /// Span covering `[0, length)`
    pub fn from_origin(length: Time) -> Self {
        Self {
            start: Time::zero(),
            end: length,
        }
    }

    /// Length of this span
    pub fn duration(&self) -> Time {
        self.end - self.start
    }

    /// Check if a time point falls within this span [start, end)
    pub fn contains(&self, t: Time) -> bool {
        t >= self.start && t < self.end
    }
}

/// Anything usable as a duration or time offset.
///
/// Integers and rationals convert exactly; floats go through [`from_f64`].
pub trait IntoTime {
    fn into_time(self) -> Time;
}

impl IntoTime for Time {
    fn into_time(self) -> Time {
        self
    }
}

impl IntoTime for i64 {
    fn into_time(self) -> Time {
        Ratio::from_integer(self)
    }
}

impl IntoTime for i32 {
    fn into_time(self) -> Time {
        Ratio::from_integer(self as i64)
    }
}

impl IntoTime for f64 {
    fn into_time(self) -> Time {
        from_f64(self)
    }
}

/// Helper to create Time from a ratio n/d
#[inline]
pub fn time(n: i64, d: i64) -> Time {
    Ratio::new(n, d)
}

/// Create Time from an integer (whole beats)
#[inline]
pub fn beats(n: i64) -> Time {
    Ratio::from_integer(n)
}

/// Convert rational to f64
#[inline]
pub fn to_f64(t: Time) -> f64 {
    *t.numer() as f64 / *t.denom() as f64
}

/// Convert f64 to Time.
///
/// Values with an exact small rational form (`0.5`, `1.0`, `0.25`) convert
/// exactly. Anything that cannot be approximated (NaN, infinities, values out
/// of `i64` range) falls back to a grid of 9600 divisions per beat.
pub fn from_f64(f: f64) -> Time {
    if let Some(exact) = Ratio::<i64>::approximate_float(f) {
        return exact;
    }
    // LCM of common musical divisions: 24, 32, 48, etc.
    let denom = 9600i64;
    if !f.is_finite() {
        return Time::zero();
    }
    let numer = (f * denom as f64).round() as i64;
    Ratio::new(numer, denom)
}
