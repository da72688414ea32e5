use crate::constants::END_OF_STREAM;

/// This trait represents the byte source a GPS receiver is attached to, usually
/// a serial port. We provide implementations for byte slices ([SliceSource]),
/// closures ([FnSource]) and, with the `std` feature, anything implementing
/// `std::io::Read` ([IoSource]).
///
/// `read_byte` blocks until a byte is available. Returning `0` signals the end
/// of the stream. Errors are handed back to the caller untouched, so a source
/// with a read timeout is how a dead transport gets detected.
pub trait ByteSource {
    type Error;

    fn read_byte(&mut self) -> Result<u8, Self::Error>;
}

/// Reads from an in-memory byte slice. Once the slice is exhausted every read
/// returns the end-of-stream byte.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes not read yet.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }
}

impl ByteSource for SliceSource<'_> {
    type Error = core::convert::Infallible;

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        match self.data.get(self.pos) {
            Some(&b) => {
                self.pos += 1;
                Ok(b)
            },
            None => Ok(END_OF_STREAM),
        }
    }
}

/// Adapts a closure into a byte source, for example a blocking UART read from
/// an embedded HAL:
///
/// ```
/// use gprmc::{ByteSource, FnSource};
///
/// let mut bytes = b"$GPRMC".iter().copied();
/// let mut source = FnSource(|| Ok::<_, ()>(bytes.next().unwrap_or(0)));
/// assert_eq!(source.read_byte(), Ok(b'$'));
/// ```
pub struct FnSource<F>(pub F);

impl<F, E> ByteSource for FnSource<F>
where
    F: FnMut() -> Result<u8, E>,
{
    type Error = E;

    fn read_byte(&mut self) -> Result<u8, E> {
        (self.0)()
    }
}

/// Reads one byte at a time from a `std::io::Read`. End of file becomes the
/// end-of-stream byte and interrupted reads are retried; every other error,
/// including `TimedOut` from a serial port, is returned.
#[cfg(feature = "std")]
pub struct IoSource<R> {
    inner: R,
}

#[cfg(feature = "std")]
impl<R: std::io::Read> IoSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> ByteSource for IoSource<R> {
    type Error = std::io::Error;

    fn read_byte(&mut self) -> std::io::Result<u8> {
        let mut local_buf = [0; 1];
        loop {
            match self.inner.read(&mut local_buf) {
                Ok(0) => return Ok(END_OF_STREAM),
                Ok(_) => return Ok(local_buf[0]),
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}
