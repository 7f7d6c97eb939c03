use std::error;
use std::fmt;
use std::io;
use std::result;

#[derive(Debug)]
pub enum DictError {
    /// A bulk-load line without the `"; "` separator. `line` is 1-based.
    MalformedRecord { line: usize, record: String },
    IO(io::Error),
    StringError(String),
}

impl fmt::Display for DictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedRecord { line, record } => {
                write!(f, "MalformedRecord: line {}: {:?}", line, record)
            }
            Self::IO(err) => write!(f, "IO: {}", err),
            Self::StringError(msg) => write!(f, "{}", msg),
        }
    }
}

impl error::Error for DictError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::MalformedRecord { .. } => None,
            Self::IO(source) => Some(source),
            Self::StringError(_) => None,
        }
    }
}

impl From<io::Error> for DictError {
    fn from(e: io::Error) -> Self {
        Self::IO(e)
    }
}

pub type Result<T> = result::Result<T, DictError>;
