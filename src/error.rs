// SPDX-License-Identifier: MPL-2.0
//! Errors raised while reading or writing `settings.toml`.

use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The settings file or its directory could not be accessed.
    Io { path: PathBuf, message: String },
    /// The settings file is not valid TOML or has mistyped fields.
    Parse { path: PathBuf, message: String },
    /// The configuration could not be encoded as TOML.
    Encode(String),
}

impl Error {
    pub(crate) fn io(path: &Path, err: &std::io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    pub(crate) fn parse(path: &Path, err: &toml::de::Error) -> Self {
        Error::Parse {
            path: path.to_path_buf(),
            message: err.message().to_string(),
        }
    }

    /// Path of the settings file involved, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::Io { path, .. } | Error::Parse { path, .. } => Some(path),
            Error::Encode(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, message } => {
                write!(f, "cannot access settings at {}: {message}", path.display())
            }
            Error::Parse { path, message } => {
                write!(f, "invalid settings in {}: {message}", path.display())
            }
            Error::Encode(message) => write!(f, "cannot encode settings: {message}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Encode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
