/// Sentence tag the filter looks for: talker `GP`, sentence type `RMC`.
pub const RMC_TAG: &[u8] = b"$GPRMC";
/// Tag followed by the first field separator. The field parser requires this.
pub const RMC_PREAMBLE: &[u8] = b"$GPRMC,";

pub const NMEA_FIELD_SEPARATOR: u8 = 0x2c; // ','
pub const NMEA_END_CHAR: u8 = 0x0a; // '\n' (<LF>)
/// A zero byte from the source marks the end of the stream.
pub const END_OF_STREAM: u8 = 0x00;

pub const NMEA_MAX_SENTENCE_LENGTH: usize = 82; // Including <CR><LF>
/// Room for the longest sentence plus the NUL terminator, with some slack for
/// receivers that do not respect the maximum.
pub const DEFAULT_LINE_CAPACITY: usize = 128;

pub(crate) const LONGITUDE_DEGREE_DIGITS: usize = 3;

/// Sub-second part of the time field as 1 Hz receivers send it.
pub(crate) const TIME_FRACTION: &[u8] = b".000";

pub(crate) const FIX_VALID: char = 'A';

pub(crate) const METERS_PER_SECOND_PER_KNOT: f64 = 1852.0 / 3600.0;

/// Two-digit years below this value belong to the 2000s.
pub const DEFAULT_CENTURY_PIVOT: u8 = 80;
