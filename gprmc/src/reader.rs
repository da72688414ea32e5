use crate::{
    error::{ReadError, ReaderError},
    filter::{read_sentence, FilterConfig},
    line::{LineBuffer, LineEnd},
    parser::{parse_line_lossy, parse_sentence},
    rmc::Rmc,
    source::ByteSource,
};

/// Running counters kept by [RmcReader].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReaderStats {
    /// RMC sentences framed, decoded or not
    pub sentences: usize,
    /// Sentences rejected by the strict parser
    pub parse_errors: usize,
    /// Sentences that did not fit the line buffer
    pub truncated: usize,
}

/// Owns a byte source and hands out one decoded RMC record per call. The
/// line buffer stays with the caller, so the reader never allocates.
///
/// ```
/// use gprmc::{FilterConfig, LineBuffer, RmcReader, SliceSource};
///
/// let data = b"$GPGSV,3,1,11\r\n$GPRMC,081836.000,A,3751.65,S,14507.36,E,000.0,360.0,130998,011.3,E*62\r\n";
/// let mut reader = RmcReader::new(SliceSource::new(data), FilterConfig::default());
/// let mut buf = [0; 128];
/// let mut line = LineBuffer::new(&mut buf).unwrap();
///
/// let rmc = reader.next_record(&mut line).unwrap();
/// assert_eq!(rmc.latitude_direction, 'S');
/// assert_eq!(reader.stats().sentences, 1);
/// ```
pub struct RmcReader<S> {
    source: S,
    config: FilterConfig,
    stats: ReaderStats,
}

impl<S: ByteSource> RmcReader<S> {
    pub fn new(source: S, config: FilterConfig) -> Self {
        Self {
            source,
            config,
            stats: ReaderStats::default(),
        }
    }

    pub fn stats(&self) -> ReaderStats {
        self.stats
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }

    /// Reads the next RMC sentence into `line` and returns how it ended.
    pub fn next_sentence(&mut self, line: &mut LineBuffer<'_>) -> Result<LineEnd, ReadError<S::Error>> {
        let end = read_sentence(&mut self.source, line, &self.config)?;
        self.stats.sentences += 1;
        if end == LineEnd::Truncated {
            self.stats.truncated += 1;
        }
        Ok(end)
    }

    /// Reads and strictly decodes the next RMC sentence. A malformed sentence
    /// is reported as an error; the next call carries on with the line after
    /// it.
    pub fn next_record(&mut self, line: &mut LineBuffer<'_>) -> Result<Rmc, ReaderError<S::Error>> {
        self.next_sentence(line)?;
        parse_sentence(line.as_bytes()).map_err(|e| {
            self.stats.parse_errors += 1;
            log::debug!("dropping sentence {:?}: {}", line, e);
            ReaderError::Parse(e)
        })
    }

    /// Reads the next RMC sentence and decodes whatever fields it can.
    pub fn next_record_lossy(&mut self, line: &mut LineBuffer<'_>) -> Result<Rmc, ReadError<S::Error>> {
        self.next_sentence(line)?;
        Ok(parse_line_lossy(line.as_bytes()))
    }
}
