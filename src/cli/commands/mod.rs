//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Commands that change the
//! configuration load it once, mutate it in memory, and save it once.

pub mod completions;
pub mod config;
pub mod create;
pub mod dispatcher;
pub mod display;
pub mod import;
pub mod init;
pub mod list;
pub mod registry;
pub mod template;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
