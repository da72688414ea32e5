use crate::{constants::NMEA_FIELD_SEPARATOR, error::ParseError};

/// Cursor over a sentence that decodes fixed-width integers, free-form floats
/// and single characters, in the manner of a `scanf` format string.
pub(crate) struct Scanner<'a> {
    line: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(line: &'a [u8], pos: usize) -> Self {
        Self { line, pos }
    }

    fn peek(&self) -> Option<u8> {
        self.line.get(self.pos).copied()
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.line.len()
    }

    fn malformed(&self, field: &'static str, offset: usize) -> ParseError {
        ParseError::Malformed { field, offset }
    }

    /// Exactly `width` ASCII digits, no sign, no leading whitespace.
    pub(crate) fn digits(&mut self, width: usize, field: &'static str) -> Result<u16, ParseError> {
        let start = self.pos;
        let mut value = 0u16;
        for _ in 0..width {
            match self.peek() {
                Some(b) if b.is_ascii_digit() => {
                    value = value * 10 + u16::from(b - b'0');
                    self.pos += 1;
                },
                _ => return Err(self.malformed(field, start)),
            }
        }
        Ok(value)
    }

    pub(crate) fn two_digits(&mut self, field: &'static str) -> Result<u8, ParseError> {
        let start = self.pos;
        let value = self.digits(2, field)?;
        u8::try_from(value).map_err(|_| self.malformed(field, start))
    }

    /// `[+-]digits[.digits][(e|E)[+-]digits]` with at least one mantissa digit,
    /// after skipping leading whitespace.
    pub(crate) fn float(&mut self, field: &'static str) -> Result<f64, ParseError> {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
        let start = self.pos;

        if matches!(self.peek(), Some(b'+' | b'-')) {
            self.pos += 1;
        }
        let mut mantissa_digits = self.skip_digits();
        if self.peek() == Some(b'.') {
            self.pos += 1;
            mantissa_digits += self.skip_digits();
        }
        if mantissa_digits == 0 {
            self.pos = start;
            return Err(self.malformed(field, start));
        }

        // An exponent marker only belongs to the number if digits follow it
        if matches!(self.peek(), Some(b'e' | b'E')) {
            let mark = self.pos;
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if self.skip_digits() == 0 {
                self.pos = mark;
            }
        }

        core::str::from_utf8(&self.line[start..self.pos])
            .ok()
            .and_then(|text| text.parse::<f64>().ok())
            .ok_or_else(|| self.malformed(field, start))
    }

    /// Any single byte.
    pub(crate) fn char(&mut self, field: &'static str) -> Result<char, ParseError> {
        let b = self.peek().ok_or_else(|| self.malformed(field, self.pos))?;
        self.pos += 1;
        Ok(char::from(b))
    }

    /// The field separator that ends `field`.
    pub(crate) fn separator(&mut self, field: &'static str) -> Result<(), ParseError> {
        if self.peek() != Some(NMEA_FIELD_SEPARATOR) {
            return Err(self.malformed(field, self.pos));
        }
        self.pos += 1;
        Ok(())
    }

    /// Exactly the bytes of `text`.
    pub(crate) fn literal(&mut self, text: &[u8], field: &'static str) -> Result<(), ParseError> {
        if !self.line[self.pos..].starts_with(text) {
            return Err(self.malformed(field, self.pos));
        }
        self.pos += text.len();
        Ok(())
    }

    /// Skips `.` and the digits after it, if present.
    pub(crate) fn skip_fraction(&mut self) {
        if self.peek() == Some(b'.') {
            self.pos += 1;
            self.skip_digits();
        }
    }

    fn skip_digits(&mut self) -> usize {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        self.pos - start
    }
}
