use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    InvalidDate {
        input: String,
        reason: String,
    },
    FileNotFound {
        path: PathBuf,
    },
    PlaceholderNotFound {
        name: &'static str,
        path: Option<PathBuf>,
    },
    FileReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    FileWriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    ConfigParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    IoError(std::io::Error),
    BuildToolNotFound {
        command: String,
    },
    BuildFailed {
        status: Option<i32>,
        output_tail: String,
    },
    ArtifactMissing {
        path: PathBuf,
    },
    BuildTimeout {
        timeout: Duration,
    },
}

/// coarse classification of errors, one per failure domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Format,
    NotFound,
    Io,
    Config,
    ExternalTool,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidDate { .. } => ErrorKind::Format,
            Error::FileNotFound { .. } | Error::PlaceholderNotFound { .. } => ErrorKind::NotFound,
            Error::FileReadError { .. } | Error::FileWriteError { .. } | Error::IoError(_) => {
                ErrorKind::Io
            }
            Error::ConfigParseError { .. } => ErrorKind::Config,
            Error::BuildToolNotFound { .. }
            | Error::BuildFailed { .. }
            | Error::ArtifactMissing { .. }
            | Error::BuildTimeout { .. } => ErrorKind::ExternalTool,
        }
    }

    /// map a read failure, turning `NotFound` into `FileNotFound`
    pub fn from_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound { path }
        } else {
            Error::FileReadError { path, source }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDate { input, reason } => {
                write!(
                    f,
                    "invalid date format '{}', use YYYY-MM-DD: {}",
                    input, reason
                )
            }
            Error::FileNotFound { path } => {
                write!(f, "file not found: {}", path.display())
            }
            Error::PlaceholderNotFound { name, path } => match path {
                Some(path) => write!(f, "{} not found in {}", name, path.display()),
                None => write!(f, "{} not found in template", name),
            },
            Error::FileReadError { path, source } => {
                write!(f, "failed to read file: {} ({})", path.display(), source)
            }
            Error::FileWriteError { path, source } => {
                write!(f, "failed to write file: {} ({})", path.display(), source)
            }
            Error::ConfigParseError { path, source } => {
                write!(
                    f,
                    "failed to parse config file: {} ({})",
                    path.display(),
                    source
                )
            }
            Error::IoError(err) => {
                write!(f, "io error: {}", err)
            }
            Error::BuildToolNotFound { command } => {
                write!(
                    f,
                    "{} not found, please install a LaTeX distribution",
                    command
                )
            }
            Error::BuildFailed {
                status,
                output_tail,
            } => {
                match status {
                    Some(code) => write!(f, "LaTeX build failed with exit code {}", code)?,
                    None => write!(f, "LaTeX build terminated by signal")?,
                }
                if !output_tail.is_empty() {
                    write!(f, ":\n{}", output_tail)?;
                }
                Ok(())
            }
            Error::ArtifactMissing { path } => {
                write!(
                    f,
                    "build succeeded but {} was not produced",
                    path.display()
                )
            }
            Error::BuildTimeout { timeout } => {
                write!(f, "build timeout (>{} seconds)", timeout.as_secs())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::FileReadError { source, .. } => Some(source),
            Error::FileWriteError { source, .. } => Some(source),
            Error::ConfigParseError { source, .. } => Some(source),
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}
