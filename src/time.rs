//! Subtitle timestamps.
//!
//! [`AssTime`] is the `H:MM:SS.CC` offset used by the `Start`/`End` columns
//! of the `[Events]` section. Hours are unpadded and unbounded (up to
//! `u32::MAX`); minutes, seconds and hundredths are range-checked on every
//! construction and mutation.

use crate::{Error, Result};
use chrono::TimeDelta;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const TIME_PATTERN: &str = "0:00:00.00";

// Unanchored: the timestamp may appear anywhere in the token.
static TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+):([0-9]{2}):([0-9]{2})\.([0-9]{2})").expect("time pattern is valid")
});

const CENTIS_PER_SECOND: u64 = 100;
const CENTIS_PER_MINUTE: u64 = 60 * CENTIS_PER_SECOND;
const CENTIS_PER_HOUR: u64 = 60 * CENTIS_PER_MINUTE;

fn ensure_range(field: &str, value: u32, max: u32) -> Result<u8> {
    if value > max {
        return Err(Error::out_of_range(field, i64::from(value), 0, i64::from(max)));
    }
    // max is at most 99
    Ok(value as u8)
}

/// A time offset with hundredth-of-a-second precision.
///
/// Ordering is chronological.
///
/// # Examples
///
/// ```rust
/// use serde_ass::AssTime;
///
/// let time = AssTime::parse("1:02:03.45").unwrap();
/// assert_eq!(time.minutes(), 2);
/// assert_eq!(time.to_string(), "1:02:03.45");
/// assert!((time.to_seconds() - 3723.45).abs() < 1e-9);
///
/// assert!(AssTime::new(0, 60, 0, 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssTime {
    hours: u32,
    minutes: u8,
    seconds: u8,
    centiseconds: u8,
}

impl AssTime {
    /// Creates a time from its components, checking minutes and seconds
    /// against `[0,59]` and hundredths against `[0,99]`.
    pub fn new(hours: u32, minutes: u32, seconds: u32, centiseconds: u32) -> Result<Self> {
        Ok(AssTime {
            centiseconds: ensure_range("centiseconds", centiseconds, 99)?,
            seconds: ensure_range("seconds", seconds, 59)?,
            minutes: ensure_range("minutes", minutes, 59)?,
            hours,
        })
    }

    /// Parses the first `H:MM:SS.CC` occurrence in `value`.
    ///
    /// Fields that are out of range (e.g. `0:75:00.00`, or hours above
    /// `u32::MAX`) are range errors; text without the pattern is an
    /// [`Error::InvalidTime`].
    pub fn parse(value: &str) -> Result<Self> {
        let caps = TIME_RE
            .captures(value)
            .ok_or_else(|| Error::invalid_time(value, TIME_PATTERN))?;

        // digits only, so parsing fails on overflow alone
        let component = |index: usize| caps[index].parse::<i64>().unwrap_or(i64::MAX);

        let hours = component(1);
        let hours = u32::try_from(hours)
            .map_err(|_| Error::out_of_range("hours", hours, 0, i64::from(u32::MAX)))?;

        // two digits each
        AssTime::new(
            hours,
            component(2) as u32,
            component(3) as u32,
            component(4) as u32,
        )
    }

    /// Builds a time from a count of hundredths of a second.
    pub fn from_centiseconds(total: u64) -> Result<Self> {
        let hours = total / CENTIS_PER_HOUR;
        let hours = u32::try_from(hours).map_err(|_| {
            Error::out_of_range("hours", i64::try_from(hours).unwrap_or(i64::MAX), 0, i64::from(u32::MAX))
        })?;
        let rest = total % CENTIS_PER_HOUR;

        AssTime::new(
            hours,
            (rest / CENTIS_PER_MINUTE) as u32,
            (rest % CENTIS_PER_MINUTE / CENTIS_PER_SECOND) as u32,
            (rest % CENTIS_PER_SECOND) as u32,
        )
    }

    /// Builds a time from fractional seconds, rounded to the nearest hundredth.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ass::AssTime;
    ///
    /// let time = AssTime::from_seconds(61.257).unwrap();
    /// assert_eq!(time.to_string(), "0:01:01.26");
    /// assert!(AssTime::from_seconds(-1.0).is_err());
    /// ```
    pub fn from_seconds(seconds: f64) -> Result<Self> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(Error::invalid_time(
                &seconds.to_string(),
                "a non-negative number of seconds",
            ));
        }
        AssTime::from_centiseconds((seconds * CENTIS_PER_SECOND as f64).round() as u64)
    }

    /// Converts a non-negative duration, truncating below hundredths.
    pub fn from_duration(duration: TimeDelta) -> Result<Self> {
        let millis = duration.num_milliseconds();
        if millis < 0 {
            return Err(Error::invalid_time(
                &duration.to_string(),
                "a non-negative duration",
            ));
        }
        AssTime::from_centiseconds(millis as u64 / 10)
    }

    #[inline]
    #[must_use]
    pub const fn hours(&self) -> u32 {
        self.hours
    }

    #[inline]
    #[must_use]
    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    #[inline]
    #[must_use]
    pub const fn seconds(&self) -> u8 {
        self.seconds
    }

    #[inline]
    #[must_use]
    pub const fn centiseconds(&self) -> u8 {
        self.centiseconds
    }

    pub fn set_hours(&mut self, value: u32) {
        self.hours = value;
    }

    pub fn set_minutes(&mut self, value: u32) -> Result<()> {
        self.minutes = ensure_range("minutes", value, 59)?;
        Ok(())
    }

    pub fn set_seconds(&mut self, value: u32) -> Result<()> {
        self.seconds = ensure_range("seconds", value, 59)?;
        Ok(())
    }

    pub fn set_centiseconds(&mut self, value: u32) -> Result<()> {
        self.centiseconds = ensure_range("centiseconds", value, 99)?;
        Ok(())
    }

    /// Total offset in hundredths of a second.
    #[must_use]
    pub fn total_centiseconds(&self) -> u64 {
        u64::from(self.hours) * CENTIS_PER_HOUR
            + u64::from(self.minutes) * CENTIS_PER_MINUTE
            + u64::from(self.seconds) * CENTIS_PER_SECOND
            + u64::from(self.centiseconds)
    }

    /// Total offset in (fractional) seconds.
    #[must_use]
    pub fn to_seconds(&self) -> f64 {
        f64::from(self.hours) * 3600.0
            + f64::from(self.minutes) * 60.0
            + f64::from(self.seconds)
            + f64::from(self.centiseconds) / 100.0
    }

    #[must_use]
    pub fn to_duration(&self) -> TimeDelta {
        TimeDelta::milliseconds(self.total_centiseconds() as i64 * 10)
    }
}

impl fmt::Display for AssTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{:02}:{:02}.{:02}",
            self.hours, self.minutes, self.seconds, self.centiseconds
        )
    }
}

impl FromStr for AssTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        AssTime::parse(s)
    }
}

impl Serialize for AssTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AssTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        AssTime::parse(&text).map_err(de::Error::custom)
    }
}
