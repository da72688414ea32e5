use core::num::NonZeroUsize;

use crate::{
    constants::RMC_TAG,
    error::ReadError,
    line::{read_line, LineBuffer, LineEnd},
    source::ByteSource,
};

/// Bounds for [read_sentence].
///
/// The default is unbounded and treats the end-of-stream byte like any other
/// line terminator, so on a source that never sends an RMC sentence the
/// filter blocks forever.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Give up after examining this many lines.
    pub max_lines: Option<NonZeroUsize>,
    /// Fail with [ReadError::EndOfStream] when a non-RMC line ends with the
    /// end-of-stream byte instead of reading on.
    pub stop_at_end_of_stream: bool,
}

impl FilterConfig {
    pub const fn unbounded() -> Self {
        Self {
            max_lines: None,
            stop_at_end_of_stream: false,
        }
    }

    pub const fn with_max_lines(mut self, max_lines: NonZeroUsize) -> Self {
        self.max_lines = Some(max_lines);
        self
    }

    pub const fn stop_at_end_of_stream(mut self, stop: bool) -> Self {
        self.stop_at_end_of_stream = stop;
        self
    }
}

/// Reads lines into `line` until one starts with `$GPRMC`, discarding all the
/// others. On success `line` holds the matching sentence and the return value
/// says how it was terminated.
pub fn read_sentence<S: ByteSource + ?Sized>(
    source: &mut S,
    line: &mut LineBuffer<'_>,
    config: &FilterConfig,
) -> Result<LineEnd, ReadError<S::Error>> {
    let mut lines = 0usize;
    loop {
        let end = read_line(source, line)?;
        lines += 1;

        if line.starts_with(RMC_TAG) {
            return Ok(end);
        }
        log::trace!("discarding line {:?}", line);

        if end == LineEnd::EndOfStream && config.stop_at_end_of_stream {
            return Err(ReadError::EndOfStream);
        }
        if let Some(max_lines) = config.max_lines {
            if lines >= max_lines.get() {
                return Err(ReadError::RetriesExhausted { lines });
            }
        }
    }
}
