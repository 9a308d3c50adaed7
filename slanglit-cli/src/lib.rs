//! slanglit CLI library
//!
//! Command-line front end for the `slanglit-core` slang transformer.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
