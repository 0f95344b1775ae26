use std::{fmt, io};

use crate::config::ConfigError;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "terminal i/o failed: {err}"),
            Error::Config(err) => write!(f, "invalid arguments: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Config(err) => Some(err),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Config(err)
    }
}

#[test]
fn test_error_display() {
    let err = Error::from(ConfigError::Zero("--width"));
    assert_eq!(err.to_string(), "invalid arguments: --width must be greater than zero");
    let err = Error::from(io::Error::new(io::ErrorKind::Other, "no tty"));
    assert_eq!(err.to_string(), "terminal i/o failed: no tty");
}

#[test]
fn test_config_failure_propagates() {
    use crate::{Command, Config};

    fn parse(args: &[&str]) -> Result<Command, Error> {
        Ok(Config::parse(args.iter().map(|arg| arg.to_string()))?)
    }

    assert!(matches!(
        parse(&["--width", "5000"]),
        Err(Error::Config(ConfigError::TooLarge("--width")))
    ));
    assert!(matches!(parse(&[]), Ok(Command::Run(_))));
}
