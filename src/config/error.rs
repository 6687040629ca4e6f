use core::error::Error;
use core::fmt;
use core::fmt::Display;
use core::fmt::Formatter;
use std::io;

/// A configuration error.
#[derive(Debug)]
pub enum ConfigError {
    /// An I/O error.
    Io(io::Error),
    /// A missing field.
    MissingField(&'static str),
    /// A TOML deserialization error.
    Toml(toml::de::Error),
}

impl Display for ConfigError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(error) => write!(formatter, "{error}"),
            Self::MissingField(field) => {
                write!(formatter, "configuration field not defined: {field}")
            }
            Self::Toml(error) => write!(formatter, "{error}"),
        }
    }
}

impl Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(error: toml::de::Error) -> Self {
        Self::Toml(error)
    }
}
