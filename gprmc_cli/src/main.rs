use anyhow::{bail, Context, Result};
use gprmc::{IoSource, LineBuffer, ReadError, ReaderError, Rmc, RmcReader};
use log::{info, warn};
use std::io::{self, ErrorKind};

mod cli;

fn main() -> Result<()> {
    env_logger::Builder::new()
        .format_timestamp(None)
        .format_target(false)
        .filter_level(log::LevelFilter::Info)
        .parse_env("LOG_LEVEL")
        .init();

    let matches = cli::command()
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .get_matches();
    let settings = cli::Settings::from_matches(&matches)?;

    let mut buf = vec![0; settings.buffer_size];
    let mut line = LineBuffer::new(&mut buf).context("Invalid --buffer-size")?;
    let mut reader = RmcReader::new(IoSource::new(settings.input.open()?), settings.filter);

    loop {
        let next = if settings.lossy {
            reader.next_record_lossy(&mut line).map_err(ReaderError::from)
        } else {
            reader.next_record(&mut line)
        };

        match next {
            Ok(rmc) => print_record(&rmc, &settings)?,
            Err(ReaderError::Parse(e)) => warn!("Skipping sentence: {}", e),
            Err(ReaderError::Read(ReadError::EndOfStream)) => break,
            Err(ReaderError::Read(ReadError::Source(e))) if e.kind() == ErrorKind::TimedOut => {
                bail!("No data from the receiver within the timeout")
            },
            Err(ReaderError::Read(e)) => return Err(e).context("Failed to read a sentence"),
        }
    }

    let stats = reader.stats();
    info!(
        "{} sentences, {} rejected, {} truncated",
        stats.sentences, stats.parse_errors, stats.truncated
    );
    Ok(())
}

fn print_record(rmc: &Rmc, settings: &cli::Settings) -> Result<()> {
    let datetime = rmc.to_datetime(settings.century_pivot).ok();

    if settings.json {
        let value = serde_json::json!({
            "record": rmc,
            "datetime": datetime.map(|dt| dt.to_rfc3339()),
            "position": rmc.position(),
            "velocity": rmc.velocity(),
        });
        serde_json::to_writer(io::stdout().lock(), &value)?;
        println!();
        return Ok(());
    }

    let time = format!("{:02}:{:02}:{:02}", rmc.hours, rmc.minutes, rmc.seconds);
    match (rmc.position(), rmc.velocity()) {
        (Some(pos), Some(vel)) => {
            let date = match datetime {
                Some(dt) => dt.format("%Y-%m-%d").to_string(),
                None => format!("{:02}{:02}{:02}", rmc.day, rmc.month, rmc.year),
            };
            println!(
                "{} {} lat {:.6} lon {:.6} speed {:.2} m/s heading {:.1}",
                date, time, pos.lat, pos.lon, vel.speed, vel.heading
            );
        },
        _ => println!("{} no fix (flag {:?})", time, rmc.lock_flag),
    }
    Ok(())
}
