//! Typed field values.
//!
//! A [`Value`] is what a field decodes to. Fields that have no codec in the
//! section schema stay [`Value::Text`] and are written back verbatim.
//!
//! ## Creating Values
//!
//! ```rust
//! use serde_ass::{AssTime, Value};
//!
//! let text = Value::from("Default");
//! let number = Value::from(1920);
//! let flag = Value::from(true);
//! let start = Value::from(AssTime::new(0, 0, 1, 0).unwrap());
//!
//! assert!(number.is_number());
//! assert_eq!(flag.to_string(), "-1");
//! assert_eq!(start.to_string(), "0:00:01.00");
//! ```

use crate::{AssColor, AssTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A decoded field value.
///
/// `Display` writes the value the way the format stores it, which is also
/// what the field codecs emit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Text(String),
    Bool(bool),
    Number(f64),
    Time(AssTime),
    Color(AssColor),
}

impl Default for Value {
    fn default() -> Self {
        Value::Text(String::new())
    }
}

impl Value {
    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_time(&self) -> bool {
        matches!(self, Value::Time(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_color(&self) -> bool {
        matches!(self, Value::Color(_))
    }

    /// If the value is text, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ass::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_time(&self) -> Option<&AssTime> {
        match self {
            Value::Time(t) => Some(t),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_color(&self) -> Option<&AssColor> {
        match self {
            Value::Color(c) => Some(c),
            _ => None,
        }
    }
}

/// Writes a number the way legacy script tools do: integral values without a
/// fraction, non-finite values as `NaN` / `Infinity` / `-Infinity`.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        // also covers -0
        f.write_str("0")
    } else {
        write!(f, "{}", n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Bool(b) => f.write_str(if *b { "-1" } else { "0" }),
            Value::Number(n) => write_number(f, *n),
            Value::Time(t) => fmt::Display::fmt(t, f),
            Value::Color(c) => fmt::Display::fmt(c, f),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<AssTime> for Value {
    fn from(value: AssTime) -> Self {
        Value::Time(value)
    }
}

impl From<AssColor> for Value {
    fn from(value: AssColor) -> Self {
        Value::Color(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display() {
        assert_eq!(Value::from(1920).to_string(), "1920");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from(-0.0).to_string(), "0");
        assert_eq!(Value::from(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::from(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Value::from(f64::NEG_INFINITY).to_string(), "-Infinity");
    }

    #[test]
    fn test_bool_display() {
        assert_eq!(Value::from(true).to_string(), "-1");
        assert_eq!(Value::from(false).to_string(), "0");
    }

    #[test]
    fn test_accessors() {
        let value = Value::from(AssColor::new(1, 2, 3, 0));
        assert!(value.is_color());
        assert_eq!(value.as_color(), Some(&AssColor::new(1, 2, 3, 0)));
        assert_eq!(value.as_time(), None);
        assert_eq!(Value::default().as_str(), Some(""));
    }

    #[test]
    fn test_json_roundtrip() {
        let value = Value::from(AssTime::new(0, 0, 1, 0).unwrap());
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"Time":"0:00:01.00"}"#);
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
