use argparse::{ArgumentParser, Print, Store, StoreOption, StoreTrue};
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::str;
use std::time::Instant;

use libc::{getrusage, rusage, RUSAGE_SELF};
use log::{info, LevelFilter};

use crate::error::AnalyzerError;
use crate::merge_sort::SortStrategy;
use crate::report::{frequency_report, CountStrategy, WordFrequency};
use crate::tokenize::{read_words, EmptyTokens};

/// How a missing word shows up in the report.
pub const MISSING_WORD: &str = "null";

pub fn get_cputime_usecs() -> (u64, u64) {
    let mut usage: rusage = unsafe { std::mem::zeroed() };

    unsafe { getrusage(RUSAGE_SELF, (&mut usage) as *mut rusage); }

    let u_secs = usage.ru_utime.tv_sec as u64;
    let u_usecs = usage.ru_utime.tv_usec as u64;
    let s_secs = usage.ru_stime.tv_sec as u64;
    let s_usecs = usage.ru_stime.tv_usec as u64;

    let u_time = (u_secs * 1_000_000) + u_usecs;
    let s_time = (s_secs * 1_000_000) + s_usecs;

    (u_time, s_time)
}

pub struct Config {
    pub output: Option<String>,
    pub input: Option<String>,
    pub log_stream: String,
    pub log_level: LevelFilter,
    pub sorter: SortStrategy,
    pub keep_empty: bool,
    pub banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: None,
            input: None,
            log_stream: "-".to_string(),
            log_level: LevelFilter::Warn,
            sorter: SortStrategy::default(),
            keep_empty: false,
            banner: false,
        }
    }
}

impl Config {
    pub fn empty_tokens(&self) -> EmptyTokens {
        if self.keep_empty {
            EmptyTokens::Keep
        } else {
            EmptyTokens::Skip
        }
    }
}

pub fn parse_args(description: &str) -> Config {
    let mut conf = Config::default();

    {
        // this block limits scope of borrows by ap.refer() method
        let mut ap = ArgumentParser::new();

        ap.set_description(description);
        ap.add_option(
            &["-V", "--version"],
            Print(env!("CARGO_PKG_VERSION").to_string()),
            "Show version",
        );

        ap.refer(&mut conf.input)
            .add_argument("input", StoreOption, "input file - default: stdin");

        ap.refer(&mut conf.output).add_argument(
            "output",
            StoreOption,
            "output file - default: stdout",
        );

        ap.refer(&mut conf.log_stream).add_option(
            &["--log"],
            Store,
            "log file, \"-\" for stderr - default: -",
        );

        ap.refer(&mut conf.log_level).add_option(
            &["--log-level"],
            Store,
            "off, error, warn, info, debug or trace - default: warn",
        );

        ap.refer(&mut conf.sorter).add_option(
            &["--sorter"],
            Store,
            "top-down or bottom-up merge sort - default: top-down",
        );

        ap.refer(&mut conf.keep_empty).add_option(
            &["--keep-empty"],
            StoreTrue,
            "count empty fragments between adjacent separators as empty words",
        );

        ap.refer(&mut conf.banner).add_option(
            &["--banner"],
            StoreTrue,
            "print an \"Output\" header before the report",
        );

        ap.parse_args_or_exit();
    }

    conf
}

pub fn open_input(conf: &Config) -> io::Result<Box<dyn BufRead>> {
    let input: Box<dyn BufRead> = match &conf.input {
        Some(filename) => Box::new(BufReader::new(File::open(filename)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };
    Ok(input)
}

pub fn open_output(conf: &Config) -> io::Result<Box<dyn Write>> {
    let output: Box<dyn Write> = match &conf.output {
        Some(filename) => {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(filename)?;
            Box::new(file)
        }
        None => Box::new(io::stdout()),
    };
    Ok(output)
}

pub fn utf8(buf: &[u8]) -> Result<&str, io::Error> {
    str::from_utf8(buf)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "Unable to decode input as UTF8"))
}

/// Writes one `<count> <word>` line per entry.
pub fn write_report<W: Write>(out: W, report: &[WordFrequency], banner: bool) -> io::Result<()> {
    let mut out = BufWriter::new(out);
    if banner {
        out.write_all(b"Output\n======\n")?;
    }
    for entry in report {
        let word = entry.word.as_deref().unwrap_or(MISSING_WORD);
        writeln!(out, "{} {}", entry.count, word)?;
    }
    out.flush()
}

/// Reads, counts and writes one document. Returns the number of report lines.
pub fn run(conf: &Config, counting: CountStrategy) -> Result<usize, AnalyzerError> {
    let words = read_words(open_input(conf)?, conf.empty_tokens())?;
    let report = frequency_report(words, counting, conf.sorter);
    write_report(open_output(conf)?, &report, conf.banner)?;
    Ok(report.len())
}

/// Wall clock and CPU time of the current process since `start`.
pub struct Stopwatch {
    start_time: Instant,
    start_usr_time: u64,
    start_sys_time: u64,
}

impl Stopwatch {
    pub fn start() -> Self {
        let (start_usr_time, start_sys_time) = get_cputime_usecs();
        Stopwatch {
            start_time: Instant::now(),
            start_usr_time,
            start_sys_time,
        }
    }

    pub fn log_elapsed(&self, what: &str) {
        let difference = self.start_time.elapsed();
        let (end_usr_time, end_sys_time) = get_cputime_usecs();
        let usr_time = end_usr_time.saturating_sub(self.start_usr_time) as f64 / 1_000_000.0;
        let sys_time = end_sys_time.saturating_sub(self.start_sys_time) as f64 / 1_000_000.0;
        info!("{}: walltime: {:?} (usr: {:.3}s sys: {:.3}s)",
            what, difference, usr_time, sys_time);
    }
}
