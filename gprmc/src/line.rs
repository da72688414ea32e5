use crate::{
    constants::{END_OF_STREAM, NMEA_END_CHAR},
    error::CapacityError,
    source::ByteSource,
};

/// Holds a mutable reference to a caller-owned byte span and frames one line
/// at a time into it.
///
/// The span always holds a NUL-terminated string: at most `capacity() - 1`
/// bytes of content followed by a zero byte.
pub struct LineBuffer<'a> {
    buffer: &'a mut [u8],
    len: usize,
}

impl<'a> LineBuffer<'a> {
    pub fn new(buf: &'a mut [u8]) -> Result<Self, CapacityError> {
        let first = buf.first_mut().ok_or(CapacityError)?;
        *first = 0;
        Ok(Self {
            buffer: buf,
            len: 0,
        })
    }

    /// Size of the underlying span, terminator included.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether another content byte would overwrite the terminator slot.
    pub fn is_full(&self) -> bool {
        self.len + 1 == self.buffer.len()
    }

    pub fn clear(&mut self) {
        self.len = 0;
        self.buffer[0] = 0;
    }

    /// The line without its terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.len]
    }

    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buffer[..=self.len]
    }

    /// The line as text, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(self.as_bytes()).ok()
    }

    /// Case-sensitive prefix test, bounded by the length of `tag`.
    pub fn starts_with(&self, tag: &[u8]) -> bool {
        self.as_bytes().starts_with(tag)
    }

    fn push(&mut self, byte: u8) {
        debug_assert!(!self.is_full());
        self.buffer[self.len] = byte;
        self.len += 1;
        self.buffer[self.len] = 0;
    }
}

impl core::fmt::Debug for LineBuffer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LineBuffer")
            .field("capacity", &self.capacity())
            .field("line", &core::str::from_utf8(self.as_bytes()))
            .finish()
    }
}

/// How [read_line] stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineEnd {
    /// A line feed was read. It is consumed and not stored.
    Newline,
    /// The source returned the end-of-stream byte.
    EndOfStream,
    /// The buffer filled up before a terminator. The byte that did not fit was
    /// consumed and dropped; the rest of the line is still in the source.
    Truncated,
}

/// Reads bytes from `source` into `line` until a line feed, the end-of-stream
/// byte, or a byte that no longer fits.
///
/// The previous content of `line` is discarded. A terminator as the first
/// byte leaves the line empty. Blocks as long as the source blocks.
pub fn read_line<S: ByteSource + ?Sized>(
    source: &mut S,
    line: &mut LineBuffer<'_>,
) -> Result<LineEnd, S::Error> {
    line.clear();
    loop {
        match source.read_byte()? {
            NMEA_END_CHAR => return Ok(LineEnd::Newline),
            END_OF_STREAM => return Ok(LineEnd::EndOfStream),
            _ if line.is_full() => {
                log::debug!("line exceeds {} bytes, truncated", line.len());
                return Ok(LineEnd::Truncated);
            },
            byte => line.push(byte),
        }
    }
}
