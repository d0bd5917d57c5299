// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.

use crate::notifications::Severity;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// The style table has no entry for a severity. There is no fallback style.
    #[error("Config Error: no style configured for severity {0}")]
    MissingStyle(Severity),

    /// A severity name in a config file or on the command line was not recognized.
    #[error("Config Error: unknown severity '{0}'")]
    UnknownSeverity(String),

    /// Neither the primary nor the fallback viewpoint source produced a pose.
    #[error("No viewpoint available to position the notification slot")]
    NoViewpoint,

    /// An exclusive manager instance is already alive in this process.
    #[error("A notification manager already exists in this process")]
    AlreadyConstructed,
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn missing_style_names_the_severity() {
        let err = Error::MissingStyle(Severity::Warning);
        assert!(format!("{}", err).contains("warning"));
    }

    #[test]
    fn unknown_severity_keeps_the_raw_name() {
        let err = Error::UnknownSeverity("fatal".into());
        assert_eq!(format!("{}", err), "Config Error: unknown severity 'fatal'");
    }

    #[test]
    fn toml_parse_error_becomes_config_error() {
        let parse: std::result::Result<toml::Table, _> = toml::from_str("a = = b");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}
