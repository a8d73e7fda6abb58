use std::fs::OpenOptions;
use std::io::{self, Write};
use std::process::exit;

use log::LevelFilter;
use simplelog::{SharedLogger, TermLogger, TerminalMode, WriteLogger};

use crate::error::Result;
use crate::util::Config;

/// Builds the report logger: stderr for `-`, otherwise a truncated file.
///
/// Without a terminal on stderr the records are written there uncolored.
pub fn logger_for(log_stream: &str, log_level: LevelFilter) -> Result<Box<dyn SharedLogger>> {
    let log_conf = simplelog::Config::default();

    let logger: Box<dyn SharedLogger> = if log_stream == "-" {
        match TermLogger::new(log_level, log_conf.clone(), TerminalMode::Stderr) {
            Some(logger) => logger,
            None => WriteLogger::new(log_level, log_conf, io::stderr()),
        }
    } else {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_stream)?;
        WriteLogger::new(log_level, log_conf, file)
    };
    Ok(logger)
}

/// Installs the global logger selected by `--log` and `--log-level`.
pub fn init_logging(conf: &Config) -> Result<()> {
    let logger = logger_for(&conf.log_stream, conf.log_level)?;
    simplelog::CombinedLogger::init(vec![logger])?;
    Ok(())
}

pub fn init_logging_or_exit(conf: &Config) {
    if let Err(err) = init_logging(conf) {
        let stderr = io::stderr();
        let _ = writeln!(stderr.lock(), "can't start logging to \"{}\": {}", conf.log_stream, err);
        exit(-1);
    }
}
