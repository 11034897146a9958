use std::{fmt, path::PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

/// Source name and 1-based line of a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub source: String,
    pub line: usize,
}

impl Location {
    pub fn new(source: impl Into<String>, line: usize) -> Self {
        Self {
            source: source.into(),
            line,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source, self.line)
    }
}

/// Everything that can fail while reading variable files.
///
/// A load either produces a complete record or one of these; there is no
/// partially applied result.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The line is not a comment, blank, or `$name = value` / `$name ||= value`
    #[error("{at}: malformed assignment: {reason}")]
    Parse { at: Location, reason: String },

    /// The name is not part of the option schema
    #[error("{at}: unknown option `${name}`")]
    UnknownOption { at: Location, name: String },

    /// The literal does not fit the option's declared type
    #[error("{at}: `${name}` expects {expected}, got {found}")]
    TypeMismatch {
        at: Location,
        name: String,
        expected: String,
        found: String,
    },

    #[error("could not read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl Error {
    pub fn parse(at: Location, reason: impl Into<String>) -> Self {
        Self::Parse {
            at,
            reason: reason.into(),
        }
    }

    pub fn serialization(err: impl fmt::Display) -> Self {
        Self::Serialization(err.to_string())
    }

    /// Location of the offending statement, if the error came from one.
    pub fn location(&self) -> Option<&Location> {
        match self {
            Self::Parse { at, .. }
            | Self::UnknownOption { at, .. }
            | Self::TypeMismatch { at, .. } => Some(at),
            Self::Io { .. } | Self::Serialization(_) => None,
        }
    }
}
