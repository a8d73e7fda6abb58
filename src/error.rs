use std::error::Error;
use std::fmt;
use std::io;

use log::SetLoggerError;

#[derive(Debug)]
pub enum AnalyzerError {
    /// `first + len` does not fit into a slice of `size` elements.
    InvalidRange { first: usize, len: usize, size: usize },
    WordTooLong { len: usize, max: usize },
    Io(io::Error),
    Logger(SetLoggerError),
}

impl fmt::Display for AnalyzerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            AnalyzerError::InvalidRange { first, len, size } => write!(
                f,
                "invalid sort range: start {} length {} exceeds {} elements",
                first, len, size
            ),
            AnalyzerError::WordTooLong { len, max } => {
                write!(f, "max word length exceeded: {}B > {}B", len, max)
            }
            AnalyzerError::Io(ref err) => write!(f, "IO error: {}", err),
            AnalyzerError::Logger(ref err) => write!(f, "set_logger error: {}", err),
        }
    }
}

impl Error for AnalyzerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            AnalyzerError::Io(ref err) => Some(err),
            AnalyzerError::Logger(ref err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for AnalyzerError {
    fn from(err: io::Error) -> AnalyzerError {
        AnalyzerError::Io(err)
    }
}

impl From<SetLoggerError> for AnalyzerError {
    fn from(err: SetLoggerError) -> AnalyzerError {
        AnalyzerError::Logger(err)
    }
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
