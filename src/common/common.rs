use std::collections::HashSet;
use std::fmt;
use std::fmt::{Formatter, Write};
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;
use crate::tracker::structs::info_hash::InfoHash;
use crate::udp::types::ScrapeResult;

pub fn parse_log_level(level: &str) -> Result<log::LevelFilter, CustomError> {
    match level {
        "off" => Ok(log::LevelFilter::Off),
        "trace" => Ok(log::LevelFilter::Trace),
        "debug" => Ok(log::LevelFilter::Debug),
        "info" => Ok(log::LevelFilter::Info),
        "warn" => Ok(log::LevelFilter::Warn),
        "error" => Ok(log::LevelFilter::Error),
        _ => Err(CustomError::new(&format!("Unknown log level encountered: '{level}'"))),
    }
}

/// Installs the global logger.
///
/// Output goes to stderr so that scrape results on stdout stay machine
/// readable.
pub fn setup_logging(config: &Configuration) -> Result<(), CustomError>
{
    let level = parse_log_level(config.log_level.as_str())?;

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
        .map_err(|_| CustomError::new("Failed to initialize logging."))?;

    info!("logging initialized.");
    Ok(())
}

pub(crate) fn bin2hex(data: &[u8; 20], f: &mut Formatter) -> fmt::Result {
    let mut chars = [0u8; 40];
    let hex = binascii::bin2hex(data, &mut chars).map_err(|_| fmt::Error)?;
    f.write_str(std::str::from_utf8(hex).map_err(|_| fmt::Error)?)
}

/// Returns the value of a single hex digit, or `0xFF` when `byte` is not one.
#[inline]
pub(crate) fn hex_to_nibble(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        b'A'..=b'F' => byte - b'A' + 10,
        _ => 0xFF,
    }
}

/// Drops repeated info hashes, keeping the first occurrence of each.
pub fn unique_info_hashes(info_hashes: &[InfoHash]) -> Vec<InfoHash> {
    let mut seen = HashSet::with_capacity(info_hashes.len());
    info_hashes.iter().copied().filter(|info_hash| seen.insert(*info_hash)).collect()
}

/// Renders scrape results as text blocks in the order of `info_hashes`.
pub fn format_scrape_text(info_hashes: &[InfoHash], result: &ScrapeResult) -> String {
    let mut output = String::new();
    for info_hash in unique_info_hashes(info_hashes) {
        let Some(stats) = result.get(&info_hash) else {
            continue;
        };
        let _ = writeln!(output, "{info_hash}");
        let _ = writeln!(output, "Completed: {}", stats.completed);
        let _ = writeln!(output, "Leechers: {}", stats.leechers);
        let _ = writeln!(output, "Seeders: {}", stats.seeders);
    }
    output
}

/// Renders scrape results as a JSON object keyed by hex info hash, keeping
/// the order of `info_hashes`.
pub fn format_scrape_json(info_hashes: &[InfoHash], result: &ScrapeResult) -> Result<String, serde_json::Error> {
    let mut object = serde_json::Map::with_capacity(result.len());
    for info_hash in unique_info_hashes(info_hashes) {
        if let Some(stats) = result.get(&info_hash) {
            object.insert(info_hash.to_string(), serde_json::to_value(stats)?);
        }
    }
    serde_json::to_string_pretty(&serde_json::Value::Object(object))
}
