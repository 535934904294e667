//! Style colors.
//!
//! Colors are written as `&H` followed by hex bytes in blue, green, red
//! order, with an optional leading alpha byte: `&HBBGGRR` or `&HAABBGGRR`.

use crate::{Error, Result};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

static COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^&H([0-9A-F]{2})([0-9A-F]{2})([0-9A-F]{2})([0-9A-F]{2})?&?$")
        .expect("color pattern is valid")
});

fn ensure_channel(field: &str, value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| Error::out_of_range(field, value, 0, 255))
}

/// A BGR color with an alpha byte (0 is opaque).
///
/// # Examples
///
/// ```rust
/// use serde_ass::AssColor;
///
/// let red = AssColor::parse("&H0000FF");
/// assert_eq!((red.r, red.g, red.b, red.a), (255, 0, 0, 0));
/// assert_eq!(red.to_string(), "&H0000ff");
///
/// // unparseable text degrades to transparent black
/// assert_eq!(AssColor::parse("&H80000000FF"), AssColor::SENTINEL);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AssColor {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl AssColor {
    /// The color substituted for unparseable text.
    pub const SENTINEL: AssColor = AssColor {
        b: 0,
        g: 0,
        r: 0,
        a: 0,
    };

    #[must_use]
    pub const fn new(b: u8, g: u8, r: u8, a: u8) -> Self {
        AssColor { b, g, r, a }
    }

    /// Creates a color from wide integers, checking every channel against `[0,255]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ass::{AssColor, Error};
    ///
    /// assert_eq!(AssColor::from_channels(1, 2, 3, 0).unwrap(), AssColor::new(1, 2, 3, 0));
    /// assert_eq!(
    ///     AssColor::from_channels(0, 256, 0, 0),
    ///     Err(Error::out_of_range("g", 256, 0, 255))
    /// );
    /// ```
    pub fn from_channels(b: i64, g: i64, r: i64, a: i64) -> Result<Self> {
        Ok(AssColor {
            a: ensure_channel("a", a)?,
            b: ensure_channel("b", b)?,
            g: ensure_channel("g", g)?,
            r: ensure_channel("r", r)?,
        })
    }

    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        AssColor { a, ..self }
    }

    /// Parses `&HBBGGRR` or `&HAABBGGRR` (hex digits in either case).
    ///
    /// Never fails: any other text yields [`AssColor::SENTINEL`], the way
    /// Aegisub treats invalid colors as black.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let Some(caps) = COLOR_RE.captures(value) else {
            debug!("unparseable color '{}', using transparent black", value);
            return AssColor::SENTINEL;
        };

        // The regex only admits two hex digits per group.
        let byte = |index: usize| u8::from_str_radix(&caps[index], 16).unwrap_or(0);

        if caps.get(4).is_some() {
            AssColor::new(byte(2), byte(3), byte(4), byte(1))
        } else {
            AssColor::new(byte(1), byte(2), byte(3), 0)
        }
    }
}

impl fmt::Display for AssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("&H")?;
        if self.a != 0 {
            write!(f, "{:02x}", self.a)?;
        }
        write!(f, "{:02x}{:02x}{:02x}", self.b, self.g, self.r)
    }
}

impl FromStr for AssColor {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(AssColor::parse(s))
    }
}

impl Serialize for AssColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AssColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(AssColor::parse(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bgr() {
        let color = AssColor::parse("&H0000FF");
        assert_eq!(color, AssColor::new(0, 0, 255, 0));
        assert_eq!(color.to_string(), "&H0000ff");
    }

    #[test]
    fn test_parse_with_alpha() {
        let color = AssColor::parse("&H80FF0010");
        assert_eq!(color, AssColor::new(0xff, 0x00, 0x10, 0x80));
        assert_eq!(color.to_string(), "&H80ff0010");
    }

    #[test]
    fn test_zero_alpha_is_omitted() {
        let color = AssColor::parse("&H00FFFFFF");
        assert_eq!(color, AssColor::new(255, 255, 255, 0));
        assert_eq!(color.to_string(), "&Hffffff");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(AssColor::parse("&habcdef"), AssColor::new(0xab, 0xcd, 0xef, 0));
    }

    #[test]
    fn test_trailing_ampersand_tolerated() {
        assert_eq!(AssColor::parse("&H00FF00&"), AssColor::new(0, 0xff, 0, 0));
    }

    #[test]
    fn test_malformed_is_sentinel() {
        assert_eq!(AssColor::parse("&H80000000FF"), AssColor::SENTINEL);
        assert_eq!(AssColor::parse("red"), AssColor::SENTINEL);
        assert_eq!(AssColor::parse("&H12345"), AssColor::SENTINEL);
        assert_eq!(AssColor::parse(""), AssColor::SENTINEL);
    }

    #[test]
    fn test_channel_range() {
        let err = AssColor::from_channels(0, 0, 0, -1).unwrap_err();
        assert_eq!(err, Error::out_of_range("a", -1, 0, 255));
        assert_eq!(AssColor::new(1, 2, 3, 0).with_alpha(4).a, 4);
    }
}
