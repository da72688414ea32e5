//! # gprmc
//!
//! Reads NMEA-0183 `$GPRMC` ("recommended minimum") sentences from the raw byte
//! stream of a GPS receiver and decodes them into a fixed time / position /
//! velocity record. Nothing in the core allocates; line buffers are owned by
//! the caller.
//!
//! Reading Sentences
//! =================
//!
//! Bytes come from a [ByteSource]. [read_line] frames one newline-terminated
//! line into a [LineBuffer], and [read_sentence] keeps reading lines until one
//! starts with `$GPRMC`, throwing the others away:
//! ```
//! use gprmc::{read_sentence, FilterConfig, LineBuffer, SliceSource};
//!
//! let mut source = SliceSource::new(b"$GPGGA,123519,4807.038,N\r\n$GPRMC,123519.000,V,,,,,,,,,N\r\n");
//! let mut buf = [0; 128];
//! let mut line = LineBuffer::new(&mut buf).unwrap();
//! read_sentence(&mut source, &mut line, &FilterConfig::default()).unwrap();
//! assert!(line.as_bytes().starts_with(b"$GPRMC,123519.000,V"));
//! ```
//! The default [FilterConfig] waits forever for a matching sentence, as long
//! as the source keeps blocking. Set `max_lines`, or give the source a read
//! timeout, to notice a dead receiver.
//!
//! Decoding Sentences
//! ==================
//!
//! [parse_sentence] turns a line into an [Rmc] record, or says why it could
//! not. Without a fix (`lock_flag != 'A'`) everything but the time of day is
//! reset to fixed sentinels. [parse_line_lossy] keeps the old forgiving
//! behaviour of leaving undecodable fields at zero.
//! ```
//! use gprmc::{parse_sentence, ParseError};
//!
//! let rmc = parse_sentence(b"$GPRMC,123519.000,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A").unwrap();
//! assert_eq!((rmc.day, rmc.month, rmc.year), (23, 3, 94));
//! assert!(rmc.position().is_some());
//!
//! assert_eq!(parse_sentence(b"$GPGGA,123519"), Err(ParseError::WrongSentence));
//! ```
//! [RmcReader] bundles both steps around an owned byte source.
//!
//! no_std Support
//! ==============
//!
//! Disable the default `std` feature to build for embedded targets. The
//! `std` feature adds `std::error::Error` implementations and [IoSource] for
//! anything implementing `std::io::Read`. The `serde` feature derives
//! `Serialize`/`Deserialize` for the record and its derived types.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "serde")]
extern crate serde;

#[cfg(feature = "std")]
pub use crate::source::IoSource;
pub use crate::{
    constants::*,
    error::{CapacityError, DateTimeError, ParseError, ReadError, ReaderError},
    filter::{read_sentence, FilterConfig},
    line::{read_line, LineBuffer, LineEnd},
    parser::{parse_line_lossy, parse_sentence},
    reader::{ReaderStats, RmcReader},
    rmc::Rmc,
    source::{ByteSource, FnSource, SliceSource},
    types::{CenturyPivot, Hemisphere, Position, Velocity},
};

mod constants;
mod error;
mod filter;
mod line;
mod parser;
mod reader;
mod rmc;
mod source;
mod types;
