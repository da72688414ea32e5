use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgGroup, ArgMatches};
use gprmc::{CenturyPivot, FilterConfig, DEFAULT_CENTURY_PIVOT, DEFAULT_LINE_CAPACITY};
use serialport::FlowControl as SerialFlowControl;
use std::{
    fs::File,
    io::{self, BufReader, Read},
    num::NonZeroUsize,
    path::PathBuf,
    time::Duration,
};

pub fn command() -> clap::Command {
    clap::Command::new("gprmc")
        .about("Reads $GPRMC sentences from a GPS receiver and prints the decoded records")
        .arg_required_else_help(true)
        .arg(
            Arg::new("port")
                .value_name("port")
                .short('p')
                .long("port")
                .help("Serial port the GPS receiver is attached to"),
        )
        .arg(
            Arg::new("file")
                .value_name("file")
                .short('f')
                .long("file")
                .value_parser(value_parser!(PathBuf))
                .help("Read a captured NMEA stream from a file instead, '-' for stdin"),
        )
        .group(
            ArgGroup::new("input")
                .args(["port", "file"])
                .required(true),
        )
        .arg(
            Arg::new("baud")
                .value_name("baud")
                .short('s')
                .long("baud")
                .default_value("9600")
                .value_parser(value_parser!(u32))
                .help("Baud rate for the selected port"),
        )
        .arg(
            Arg::new("timeout-ms")
                .value_name("ms")
                .long("timeout-ms")
                .default_value("2000")
                .value_parser(value_parser!(u64))
                .help("Give up when the serial port stays silent this long"),
        )
        .arg(
            Arg::new("buffer-size")
                .value_name("bytes")
                .long("buffer-size")
                .default_value("128")
                .value_parser(value_parser!(usize))
                .help("Line buffer size, including the NUL terminator"),
        )
        .arg(
            Arg::new("max-lines")
                .value_name("lines")
                .long("max-lines")
                .default_value("0")
                .value_parser(value_parser!(usize))
                .help("Lines to examine for an RMC sentence before giving up, 0 for no limit"),
        )
        .arg(
            Arg::new("lossy")
                .long("lossy")
                .action(clap::ArgAction::SetTrue)
                .help("Keep partially decoded sentences instead of reporting them"),
        )
        .arg(
            Arg::new("century-pivot")
                .value_name("year")
                .long("century-pivot")
                .default_value("80")
                .value_parser(value_parser!(u8).range(0..=100))
                .help("Two-digit years below this are read as 20xx, the others as 19xx"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(clap::ArgAction::SetTrue)
                .help("Print one JSON object per record"),
        )
}

#[derive(Debug)]
pub enum Input {
    Serial {
        port: String,
        baud: u32,
        timeout: Duration,
    },
    File(PathBuf),
}

impl Input {
    pub fn is_serial(&self) -> bool {
        matches!(self, Input::Serial { .. })
    }

    pub fn open(&self) -> Result<Box<dyn Read>> {
        match self {
            Input::Serial {
                port,
                baud,
                timeout,
            } => {
                let builder = serialport::new(port, *baud)
                    .timeout(*timeout)
                    .flow_control(SerialFlowControl::None);
                log::debug!("{:?}", &builder);
                let port = builder
                    .open()
                    .with_context(|| format!("Failed to open port: {}", port))?;
                Ok(Box::new(port))
            },
            Input::File(path) if path.as_os_str() == "-" => Ok(Box::new(io::stdin().lock())),
            Input::File(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open file: {}", path.display()))?;
                Ok(Box::new(BufReader::new(file)))
            },
        }
    }
}

#[derive(Debug)]
pub struct Settings {
    pub input: Input,
    pub buffer_size: usize,
    pub filter: FilterConfig,
    pub lossy: bool,
    pub century_pivot: CenturyPivot,
    pub json: bool,
}

impl Settings {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let input = match (
            matches.get_one::<String>("port"),
            matches.get_one::<PathBuf>("file"),
        ) {
            (Some(port), _) => Input::Serial {
                port: port.clone(),
                baud: matches.get_one::<u32>("baud").copied().unwrap_or(9600),
                timeout: Duration::from_millis(
                    matches.get_one::<u64>("timeout-ms").copied().unwrap_or(2000),
                ),
            },
            (None, Some(path)) => Input::File(path.clone()),
            (None, None) => anyhow::bail!("Either --port or --file is required"),
        };

        let mut filter = FilterConfig::unbounded();
        if let Some(max_lines) = matches
            .get_one::<usize>("max-lines")
            .copied()
            .and_then(NonZeroUsize::new)
        {
            filter = filter.with_max_lines(max_lines);
        }
        // A capture file ends, a serial port only goes quiet
        filter = filter.stop_at_end_of_stream(!input.is_serial());

        let pivot = matches
            .get_one::<u8>("century-pivot")
            .copied()
            .unwrap_or(DEFAULT_CENTURY_PIVOT);

        Ok(Self {
            input,
            buffer_size: matches
                .get_one::<usize>("buffer-size")
                .copied()
                .unwrap_or(DEFAULT_LINE_CAPACITY),
            filter,
            lossy: matches.get_flag("lossy"),
            century_pivot: CenturyPivot::new(pivot)
                .with_context(|| format!("Invalid century pivot: {}", pivot))?,
            json: matches.get_flag("json"),
        })
    }
}
