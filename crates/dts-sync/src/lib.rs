#![deny(missing_docs)]
#![doc = "Configuration, loading layer and subcommands of the token sync tool."]

pub mod commands;
pub mod config;
pub mod io;

pub use config::{load_config, SyncConfig, DEFAULT_CONFIG_FILE};
