use std::{fmt, time::Duration};

use rand::rngs::StdRng;

use crate::RngCoin;

pub const DEFAULT_WIDTH: usize = 200;
pub const DEFAULT_HEIGHT: usize = 150;
pub const DEFAULT_TICK: Duration = Duration::from_millis(16);
/// Largest accepted grid side, far beyond any terminal.
pub const MAX_DIMENSION: u64 = 4096;

pub const USAGE: &str = "\
usage: sandrs [--width N] [--height N] [--tick-ms N] [--seed N]

  --width N     grid columns (default 200)
  --height N    grid rows (default 150)
  --tick-ms N   frame interval in milliseconds (default 16)
  --seed N      seed for the left/right tie-break, random when omitted

controls: left mouse paints sand, the Restart button or [r] clears,
[space] pauses the fall, [q] quits. RUST_LOG controls stderr logging.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub tick: Duration,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick: DEFAULT_TICK,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Config),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownFlag(String),
    MissingValue(&'static str),
    InvalidNumber { flag: &'static str, value: String },
    Zero(&'static str),
    TooLarge(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::UnknownFlag(flag) => write!(f, "unknown argument '{flag}'"),
            ConfigError::MissingValue(flag) => write!(f, "{flag} expects a value"),
            ConfigError::InvalidNumber { flag, value } => {
                write!(f, "{flag} expects a non-negative integer, got '{value}'")
            }
            ConfigError::Zero(flag) => write!(f, "{flag} must be greater than zero"),
            ConfigError::TooLarge(flag) => write!(f, "{flag} must be at most {MAX_DIMENSION}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Parses the arguments following the program name.
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Command, ConfigError> {
        let mut config = Config::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let flag = match arg.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "--width" => "--width",
                "--height" => "--height",
                "--tick-ms" => "--tick-ms",
                "--seed" => "--seed",
                _ => return Err(ConfigError::UnknownFlag(arg)),
            };
            let value = args.next().ok_or(ConfigError::MissingValue(flag))?;
            let number: u64 = value
                .parse()
                .map_err(|_| ConfigError::InvalidNumber { flag, value })?;

            match flag {
                "--width" => config.width = dimension(flag, number)?,
                "--height" => config.height = dimension(flag, number)?,
                "--tick-ms" => config.tick = Duration::from_millis(number),
                _ => config.seed = Some(number),
            }
        }

        Ok(Command::Run(config))
    }

    pub fn coin(&self) -> RngCoin<StdRng> {
        match self.seed {
            Some(seed) => RngCoin::seeded(seed),
            None => RngCoin::from_entropy(),
        }
    }
}

fn dimension(flag: &'static str, number: u64) -> Result<usize, ConfigError> {
    match number {
        0 => Err(ConfigError::Zero(flag)),
        number if number > MAX_DIMENSION => Err(ConfigError::TooLarge(flag)),
        number => Ok(number as usize),
    }
}
