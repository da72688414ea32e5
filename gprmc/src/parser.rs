use crate::{
    constants::{LONGITUDE_DEGREE_DIGITS, RMC_PREAMBLE, TIME_FRACTION},
    error::ParseError,
    rmc::Rmc,
};

mod scanner;

use scanner::Scanner;

/// How the sub-second part of the time field is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fraction {
    /// `.` and any number of digits, or nothing
    Any,
    /// Exactly `.000`
    Zero,
}

/// Decodes one RMC sentence.
///
/// The line may still carry its `\r`, checksum and the trailing fields after
/// the date; they are not looked at. Parsing stops at the first NUL byte, so a
/// raw line buffer can be passed as is.
///
/// # Errors
///
/// [ParseError::WrongSentence] if the line does not start with `$GPRMC,`,
/// [ParseError::Malformed] naming the first field that does not match the
/// grammar. Without a fix only the time and the fix flag are required, and
/// the flag must be the last field or be followed by a separator.
///
/// The time may carry any number of fractional digits, or none; they are
/// dropped.
///
/// ```
/// let rmc = gprmc::parse_sentence(
///     b"$GPRMC,123519.000,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A",
/// )
/// .unwrap();
/// assert_eq!((rmc.hours, rmc.minutes, rmc.seconds), (12, 35, 19));
/// assert_eq!(rmc.latitude, 48);
/// assert_eq!(rmc.longitude_minutes, 31.0);
/// ```
pub fn parse_sentence(line: &[u8]) -> Result<Rmc, ParseError> {
    let line = until_nul(line);
    if !line.starts_with(RMC_PREAMBLE) {
        return Err(ParseError::WrongSentence);
    }

    let mut rmc = Rmc::default();
    scan_fields(&mut Scanner::new(line, RMC_PREAMBLE.len()), &mut rmc, Fraction::Any)?;
    rmc.clear_without_fix();
    Ok(rmc)
}

/// Decodes one RMC sentence the forgiving way: a line that is not an RMC
/// sentence gives `Rmc::default()`, and a malformed field leaves it and every
/// field after it at zero. Cannot fail, but cannot tell a zero field from a
/// missing one either; prefer [parse_sentence].
///
/// The time field must end in exactly `.000`. Any other fraction stops the
/// decode before the fix flag, so such a line yields a record with the time
/// of day only.
pub fn parse_line_lossy(line: &[u8]) -> Rmc {
    let line = until_nul(line);
    if !line.starts_with(RMC_PREAMBLE) {
        return Rmc::default();
    }

    let mut rmc = Rmc::default();
    let mut scanner = Scanner::new(line, RMC_PREAMBLE.len());
    if let Err(e) = scan_fields(&mut scanner, &mut rmc, Fraction::Zero) {
        log::trace!("partial RMC decode: {}", e);
    }
    rmc.clear_without_fix();
    rmc
}

impl core::str::FromStr for Rmc {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_sentence(s.as_bytes())
    }
}

fn until_nul(line: &[u8]) -> &[u8] {
    match line.iter().position(|&b| b == 0) {
        Some(end) => &line[..end],
        None => line,
    }
}

/// Fills `rmc` field by field and stops at the first mismatch, leaving the
/// rest untouched. Fields after a non-`A` fix flag are skipped.
fn scan_fields(s: &mut Scanner<'_>, rmc: &mut Rmc, fraction: Fraction) -> Result<(), ParseError> {
    rmc.hours = s.two_digits("hours")?;
    rmc.minutes = s.two_digits("minutes")?;
    rmc.seconds = s.two_digits("seconds")?;
    match fraction {
        Fraction::Any => s.skip_fraction(),
        Fraction::Zero => s.literal(TIME_FRACTION, "time")?,
    }
    s.separator("time")?;

    rmc.lock_flag = s.char("lock_flag")?;
    if !rmc.has_fix() {
        if !s.at_end() {
            s.separator("lock_flag")?;
        }
        return Ok(());
    }
    s.separator("lock_flag")?;

    rmc.latitude = s.two_digits("latitude")?;
    rmc.latitude_minutes = s.float("latitude_minutes")?;
    s.separator("latitude_minutes")?;
    rmc.latitude_direction = s.char("latitude_direction")?;
    s.separator("latitude_direction")?;

    rmc.longitude = s.digits(LONGITUDE_DEGREE_DIGITS, "longitude")?;
    rmc.longitude_minutes = s.float("longitude_minutes")?;
    s.separator("longitude_minutes")?;
    rmc.longitude_direction = s.char("longitude_direction")?;
    s.separator("longitude_direction")?;

    rmc.speed = s.float("speed")?;
    s.separator("speed")?;
    rmc.tracking_angle = s.float("tracking_angle")?;
    s.separator("tracking_angle")?;

    rmc.day = s.two_digits("day")?;
    rmc.month = s.two_digits("month")?;
    rmc.year = s.two_digits("year")?;
    Ok(())
}
