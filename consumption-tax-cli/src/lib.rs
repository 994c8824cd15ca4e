pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod session;
pub mod views;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};
