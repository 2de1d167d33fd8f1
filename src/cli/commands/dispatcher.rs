//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, ListArgs};
use crate::config::ConfigPaths;
use crate::error::Result;
use crate::registry::HttpFetcher;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    paths: ConfigPaths,
    templates_root: PathBuf,
    fetcher: HttpFetcher,
}

impl CommandDispatcher {
    /// Create a dispatcher for a configuration directory and templates root.
    pub fn new(paths: ConfigPaths, templates_root: PathBuf) -> Self {
        Self {
            paths,
            templates_root,
            fetcher: HttpFetcher::new(),
        }
    }

    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    pub fn templates_root(&self) -> &Path {
        &self.templates_root
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. No subcommand means `list`.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::List(args)) => self.list(args.clone(), ui),
            Some(Commands::Init(args)) => {
                let cmd = super::init::InitCommand::new(
                    &self.paths,
                    &self.templates_root,
                    &self.fetcher,
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Some(Commands::Create(args)) => {
                let cmd = super::create::CreateCommand::new(
                    &self.paths,
                    &self.templates_root,
                    &self.fetcher,
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Some(Commands::Import(args)) => {
                let cmd =
                    super::import::ImportCommand::new(&self.paths, &self.fetcher, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Registry(args)) => {
                let cmd = super::registry::RegistryCommand::new(&self.paths, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Template(args)) => {
                let cmd = super::template::TemplateCommand::new(&self.paths, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Config(args)) => {
                let cmd = super::config::ConfigCommand::new(&self.paths, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => self.list(ListArgs::default(), ui),
        }
    }

    fn list(&self, args: ListArgs, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let cmd =
            super::list::ListCommand::new(&self.paths, &self.templates_root, &self.fetcher, args);
        cmd.execute(ui)
    }
}
