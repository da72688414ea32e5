use core::fmt;

/// Returned when a line buffer is built over a zero-length span. A line buffer
/// needs at least one byte for the NUL terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError;

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("line buffer needs room for at least the NUL terminator")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CapacityError {}

/// Error returned by the field parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The line does not start with `$GPRMC,`
    WrongSentence,
    /// The line is an RMC sentence, but `field` does not match the expected
    /// grammar at byte `offset` of the line.
    Malformed { field: &'static str, offset: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::WrongSentence => f.write_str("not an RMC sentence"),
            ParseError::Malformed { field, offset } => {
                write!(f, "Invalid field {} of RMC sentence at byte {}", field, offset)
            },
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Error returned by the sentence filter.
#[derive(Debug)]
pub enum ReadError<E> {
    /// The byte source failed, e.g. a serial port timed out.
    Source(E),
    /// `lines` lines were read without finding an RMC sentence.
    RetriesExhausted { lines: usize },
    /// The source signalled end of stream before an RMC sentence was found.
    EndOfStream,
}

impl<E> From<E> for ReadError<E> {
    fn from(error: E) -> Self {
        ReadError::Source(error)
    }
}

impl<E: fmt::Display> fmt::Display for ReadError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Source(e) => write!(f, "byte source error: {}", e),
            ReadError::RetriesExhausted { lines } => {
                write!(f, "no RMC sentence within {} lines", lines)
            },
            ReadError::EndOfStream => f.write_str("end of stream before an RMC sentence"),
        }
    }
}

#[cfg(feature = "std")]
impl<E> std::error::Error for ReadError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Source(e) => Some(e),
            _ => None,
        }
    }
}

/// Error returned by [`RmcReader`](crate::RmcReader), either while framing or
/// while decoding a sentence.
#[derive(Debug)]
pub enum ReaderError<E> {
    Read(ReadError<E>),
    Parse(ParseError),
}

impl<E> From<ReadError<E>> for ReaderError<E> {
    fn from(e: ReadError<E>) -> Self {
        Self::Read(e)
    }
}

impl<E> From<ParseError> for ReaderError<E> {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl<E: fmt::Display> fmt::Display for ReaderError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReaderError::Read(e) => e.fmt(f),
            ReaderError::Parse(e) => e.fmt(f),
        }
    }
}

#[cfg(feature = "std")]
impl<E> std::error::Error for ReaderError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReaderError::Read(e) => Some(e),
            ReaderError::Parse(e) => Some(e),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeError {
    /// The record carries no fix, so its date fields hold sentinels.
    NoFix,
    InvalidDate,
    InvalidTime,
}

impl fmt::Display for DateTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateTimeError::NoFix => f.write_str("no fix, date unavailable"),
            DateTimeError::InvalidDate => f.write_str("invalid date"),
            DateTimeError::InvalidTime => f.write_str("invalid time"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DateTimeError {}
