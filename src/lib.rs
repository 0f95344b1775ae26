pub use utils::Pos;
mod utils;

pub use world::{BufferId, Cell, DenseWorld, DoubleBuffer, World};
pub mod world;

pub use sim::{step, Coin, RngCoin, ScriptedCoin, Side, State, StepReport};
pub mod sim;

pub use config::{Command, Config, ConfigError};
pub mod config;

pub use error::Error;
mod error;

pub mod view;
