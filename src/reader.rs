//! Line cursor over script text.
//!
//! Splits on `\n` (a preceding `\r` is removed by the trim), trims every line
//! and hands them out one at a time. Section codecs share one cursor with the
//! document parser, so a section body ends wherever its codec stops reading.

/// Sequential access to the trimmed lines of an input text.
#[derive(Debug, Clone)]
pub struct LineReader<'a> {
    lines: Vec<&'a str>,
    index: usize,
}

impl<'a> LineReader<'a> {
    pub fn new(text: &'a str) -> Self {
        LineReader {
            lines: text.split('\n').collect(),
            index: 0,
        }
    }

    /// Returns `true` once every line has been consumed.
    #[inline]
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.index >= self.lines.len()
    }

    /// Consumes the next line, trimmed of surrounding whitespace.
    ///
    /// Returns `None` past the end of input rather than an empty line, so an
    /// exhausted reader can never be mistaken for a section terminator.
    pub fn next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.get(self.index)?;
        self.index += 1;
        Some(line.trim())
    }

    /// 1-based number of the line most recently returned by [`LineReader::next_line`].
    #[inline]
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_crlf_and_lf() {
        let mut reader = LineReader::new("a\r\n  b  \nc");
        assert_eq!(reader.next_line(), Some("a"));
        assert_eq!(reader.next_line(), Some("b"));
        assert_eq!(reader.line_number(), 2);
        assert_eq!(reader.next_line(), Some("c"));
        assert!(reader.is_eof());
        assert_eq!(reader.next_line(), None);
    }

    #[test]
    fn test_trailing_newline_yields_blank_line() {
        let mut reader = LineReader::new("a\n");
        assert_eq!(reader.next_line(), Some("a"));
        assert!(!reader.is_eof());
        assert_eq!(reader.next_line(), Some(""));
        assert!(reader.is_eof());
    }

    #[test]
    fn test_empty_input_is_one_blank_line() {
        let mut reader = LineReader::new("");
        assert_eq!(reader.next_line(), Some(""));
        assert!(reader.is_eof());
    }
}
