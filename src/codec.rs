//! Field codecs.
//!
//! A [`FieldCodec`] converts one field between its textual token and a typed
//! [`Value`]. Schemas pick a codec per field name; fields without one are kept
//! as raw text.
//!
//! | Codec | Decodes | Encodes |
//! |-------|---------|---------|
//! | `Text` | token as-is | any value in its text form |
//! | `Boolean` | `-1` is true, anything else false | `-1` / `0` |
//! | `Number` | leading numeric prefix, `NaN` if none | shortest decimal form |
//! | `Time` | `H:MM:SS.CC`, error otherwise | `H:MM:SS.CC` |
//! | `Color` | `&H[AA]BBGGRR`, transparent black otherwise | lowercase hex |

use crate::{AssColor, AssTime, Result, Value};
use once_cell::sync::Lazy;
use regex::Regex;

static NUMBER_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("number pattern is valid")
});

/// Parses the longest numeric prefix of `token`, ignoring leading whitespace
/// and any trailing garbage. Returns `NaN` when there is no numeric prefix.
///
/// # Examples
///
/// ```rust
/// use serde_ass::codec::parse_float;
///
/// assert_eq!(parse_float("1920"), 1920.0);
/// assert_eq!(parse_float(" 12.5px"), 12.5);
/// assert!(parse_float("abc").is_nan());
/// ```
#[must_use]
pub fn parse_float(token: &str) -> f64 {
    let Some(prefix) = NUMBER_PREFIX_RE.find(token.trim_start()) else {
        return f64::NAN;
    };
    let prefix = prefix.as_str();

    if prefix.ends_with("Infinity") {
        return if prefix.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    prefix.parse::<f64>().unwrap_or(f64::NAN)
}

/// The decoder/encoder for one kind of field.
///
/// # Examples
///
/// ```rust
/// use serde_ass::{FieldCodec, Value};
///
/// let value = FieldCodec::Boolean.decode("-1").unwrap();
/// assert_eq!(value, Value::Bool(true));
/// assert_eq!(FieldCodec::Boolean.encode(&value).unwrap(), "-1");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldCodec {
    Text,
    Boolean,
    Number,
    Time,
    Color,
}

impl FieldCodec {
    /// Decodes a (trimmed) token.
    ///
    /// Only [`FieldCodec::Time`] can fail; colors fall back to
    /// [`AssColor::SENTINEL`] and numbers to `NaN`.
    pub fn decode(&self, token: &str) -> Result<Value> {
        Ok(match self {
            FieldCodec::Text => Value::Text(token.to_string()),
            FieldCodec::Boolean => Value::Bool(token == "-1"),
            FieldCodec::Number => Value::Number(parse_float(token)),
            FieldCodec::Time => Value::Time(AssTime::parse(token)?),
            FieldCodec::Color => Value::Color(AssColor::parse(token)),
        })
    }

    /// Encodes a value to its token.
    ///
    /// A value of a different kind than the codec (say, raw text placed in a
    /// time column by the caller) is converted to the codec's kind first, so
    /// the token reads back as that value. Numbers become booleans by
    /// truthiness and times by seconds; anything else goes through its text
    /// form, which fails only for text that is not a valid time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ass::{FieldCodec, Value};
    ///
    /// assert_eq!(FieldCodec::Boolean.encode(&Value::Number(1.0)).unwrap(), "-1");
    /// assert_eq!(FieldCodec::Time.encode(&Value::Number(2.5)).unwrap(), "0:00:02.50");
    /// assert!(FieldCodec::Time.encode(&Value::from("soon")).is_err());
    /// ```
    pub fn encode(&self, value: &Value) -> Result<String> {
        let coerced = match (self, value) {
            (FieldCodec::Text, _)
            | (FieldCodec::Boolean, Value::Bool(_))
            | (FieldCodec::Number, Value::Number(_))
            | (FieldCodec::Time, Value::Time(_))
            | (FieldCodec::Color, Value::Color(_)) => return Ok(value.to_string()),
            (FieldCodec::Boolean, Value::Number(n)) => Value::Bool(*n != 0.0 && !n.is_nan()),
            (FieldCodec::Time, Value::Number(n)) => Value::Time(AssTime::from_seconds(*n)?),
            _ => self.decode(&value.to_string())?,
        };
        Ok(coerced.to_string())
    }
}

/// Decodes through `codec` when there is one, keeping raw text otherwise.
pub(crate) fn decode_field(codec: Option<&FieldCodec>, token: &str) -> Result<Value> {
    match codec {
        Some(codec) => codec.decode(token),
        None => Ok(Value::Text(token.to_string())),
    }
}

pub(crate) fn encode_field(codec: Option<&FieldCodec>, value: &Value) -> Result<String> {
    match codec {
        Some(codec) => codec.encode(value),
        None => Ok(value.to_string()),
    }
}
