//! Command-line front end for the report exporter.
//!
//! This crate provides the `exportdocs` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::Cli;
pub use config::ClientConfig;
pub use error::{CliError, CliResult};
