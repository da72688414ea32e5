use std::{io, num::NonZeroUsize};

use gprmc::{
    read_line, read_sentence, ByteSource, FilterConfig, FnSource, IoSource, LineBuffer, LineEnd,
    ReadError, ReaderError, RmcReader, SliceSource,
};

static STREAM: &[u8] = b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n\
$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39\r\n\
$GPGSV,2,1,08,01,40,083,46,02,17,308,41,12,07,344,39,14,22,228,45*75\r\n\
$GPRMC,123519.000,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A\r\n\
$GPGGA,123520,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*4D\r\n\
$GPRMC,123520.000,V,,,,,,,,,N*53\r\n";

#[test]
fn test_line_reader_reproduces_short_lines() {
    let mut buf = [0xaa; 32];
    let mut line = LineBuffer::new(&mut buf).unwrap();
    let mut source = SliceSource::new(b"$GPRMC,1\nsecond line\n");

    assert_eq!(read_line(&mut source, &mut line), Ok(LineEnd::Newline));
    assert_eq!(line.as_bytes_with_nul(), b"$GPRMC,1\0");
    assert_eq!(read_line(&mut source, &mut line), Ok(LineEnd::Newline));
    assert_eq!(line.as_bytes_with_nul(), b"second line\0");
}

#[test]
fn test_line_reader_immediate_end_of_stream() {
    let mut buf = [0xaa; 8];
    let mut line = LineBuffer::new(&mut buf).unwrap();
    let mut source = SliceSource::new(&[0, 0, 0]);

    assert_eq!(read_line(&mut source, &mut line), Ok(LineEnd::EndOfStream));
    assert!(line.is_empty());
    assert_eq!(line.as_bytes_with_nul(), &[0]);
}

#[test]
fn test_filter_discards_until_rmc() {
    let mut buf = [0; 128];
    let mut line = LineBuffer::new(&mut buf).unwrap();
    let mut source = SliceSource::new(STREAM);

    read_sentence(&mut source, &mut line, &FilterConfig::default()).unwrap();
    assert_eq!(
        line.as_str(),
        Some("$GPRMC,123519.000,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A\r")
    );

    read_sentence(&mut source, &mut line, &FilterConfig::default()).unwrap();
    assert_eq!(line.as_str(), Some("$GPRMC,123520.000,V,,,,,,,,,N*53\r"));
    assert!(source.remaining().is_empty());
}

#[test]
fn test_filter_over_io_source() {
    let mut buf = [0; 128];
    let mut line = LineBuffer::new(&mut buf).unwrap();
    let mut source = IoSource::new(io::Cursor::new(STREAM.to_vec()));
    let config = FilterConfig::unbounded().stop_at_end_of_stream(true);

    assert!(read_sentence(&mut source, &mut line, &config).is_ok());
    assert!(read_sentence(&mut source, &mut line, &config).is_ok());
    match read_sentence(&mut source, &mut line, &config) {
        Err(ReadError::EndOfStream) => {},
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_filter_propagates_timeouts() {
    let mut data = b"$GPGGA,1\r\n$GP".iter().copied();
    let mut source = FnSource(|| {
        data.next()
            .ok_or_else(|| io::Error::from(io::ErrorKind::TimedOut))
    });
    let mut buf = [0; 128];
    let mut line = LineBuffer::new(&mut buf).unwrap();

    match read_sentence(&mut source, &mut line, &FilterConfig::default()) {
        Err(ReadError::Source(e)) => assert_eq!(e.kind(), io::ErrorKind::TimedOut),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_filter_bounded_retries() {
    let mut buf = [0; 128];
    let mut line = LineBuffer::new(&mut buf).unwrap();
    let mut source = SliceSource::new(STREAM);
    let config = FilterConfig::unbounded().with_max_lines(NonZeroUsize::new(3).unwrap());

    match read_sentence(&mut source, &mut line, &config) {
        Err(ReadError::RetriesExhausted { lines: 3 }) => {},
        other => panic!("unexpected {:?}", other),
    }
    // The sentence after the exhausted lines is still there
    read_sentence(&mut source, &mut line, &config).unwrap();
    assert!(line.starts_with(b"$GPRMC,123519.000,A"));
}

#[test]
fn test_reader_yields_records_in_order() {
    let mut reader = RmcReader::new(
        SliceSource::new(STREAM),
        FilterConfig::unbounded().stop_at_end_of_stream(true),
    );
    let mut buf = [0; 128];
    let mut line = LineBuffer::new(&mut buf).unwrap();

    let first = reader.next_record(&mut line).unwrap();
    assert!(first.has_fix());
    assert_eq!(first.latitude, 48);

    let second = reader.next_record(&mut line).unwrap();
    assert!(!second.has_fix());
    assert_eq!((second.hours, second.minutes, second.seconds), (12, 35, 20));

    match reader.next_record(&mut line) {
        Err(ReaderError::Read(ReadError::EndOfStream)) => {},
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(reader.stats().sentences, 2);
}

#[test]
fn test_reader_over_small_buffer() {
    let mut reader = RmcReader::new(SliceSource::new(STREAM), FilterConfig::default());
    let mut buf = [0; 40];
    let mut line = LineBuffer::new(&mut buf).unwrap();

    // The fix sentence does not fit and is cut inside the longitude minutes
    match reader.next_record(&mut line) {
        Err(ReaderError::Parse(_)) => {},
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(reader.stats().truncated, 1);

    // The void sentence fits
    let rmc = reader.next_record(&mut line).unwrap();
    assert_eq!(rmc.seconds, 20);
}

struct CountingSource<'a> {
    inner: SliceSource<'a>,
    reads: usize,
}

impl ByteSource for CountingSource<'_> {
    type Error = core::convert::Infallible;

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        self.reads += 1;
        self.inner.read_byte()
    }
}

#[test]
fn test_custom_source() {
    let mut source = CountingSource {
        inner: SliceSource::new(b"$GPRMC,010203,V\n"),
        reads: 0,
    };
    let mut buf = [0; 32];
    let mut line = LineBuffer::new(&mut buf).unwrap();

    read_sentence(&mut source, &mut line, &FilterConfig::default()).unwrap();
    assert_eq!(source.reads, 16);
}
