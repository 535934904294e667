//! Dialogue text helpers.
//!
//! Event text stores hard line breaks as the two characters `\N`. Editors
//! show real newlines and convert back before storing the text again.

use std::borrow::Cow;

const HARD_BREAK: &str = "\\N";

/// Replaces every `\N` hard break with a newline.
///
/// # Examples
///
/// ```rust
/// use serde_ass::text::decode_line_breaks;
///
/// assert_eq!(decode_line_breaks("one\\Ntwo"), "one\ntwo");
/// ```
#[must_use]
pub fn decode_line_breaks(text: &str) -> Cow<'_, str> {
    if text.contains(HARD_BREAK) {
        Cow::Owned(text.replace(HARD_BREAK, "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Replaces every newline (`\n` or `\r\n`) with a `\N` hard break.
///
/// # Examples
///
/// ```rust
/// use serde_ass::text::encode_line_breaks;
///
/// assert_eq!(encode_line_breaks("one\r\ntwo\nthree"), "one\\Ntwo\\Nthree");
/// ```
#[must_use]
pub fn encode_line_breaks(text: &str) -> Cow<'_, str> {
    if text.contains('\n') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\n', HARD_BREAK))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(decode_line_breaks("plain"), Cow::Borrowed(_)));
        assert!(matches!(encode_line_breaks("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_soft_break_is_untouched() {
        assert_eq!(decode_line_breaks("a\\nb"), "a\\nb");
    }

    #[test]
    fn test_roundtrip() {
        let stored = "first\\Nsecond\\N";
        let shown = decode_line_breaks(stored);
        assert_eq!(shown, "first\nsecond\n");
        assert_eq!(encode_line_breaks(&shown), stored);
    }
}
