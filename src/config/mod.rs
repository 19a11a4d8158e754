#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{Action, CliArgs};
pub use toml_config::TogglerConfig;
