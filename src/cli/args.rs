//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Boilerplates - scaffold new projects from reusable templates.
#[derive(Debug, Parser)]
#[command(name = "boilerplates")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration directory (defaults to ~/.boilerplates)
    #[arg(long, global = true, env = "BOILERPLATES_HOME", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Directory holding local templates and checked-out template repos
    #[arg(
        long,
        global = true,
        env = "BOILERPLATES_TEMPLATES",
        default_value = "templates",
        value_name = "DIR"
    )]
    pub templates_dir: PathBuf,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Never prompt; use flags, BOILERPLATES_PROMPT_* variables, and defaults
    #[arg(long, global = true)]
    pub non_interactive: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List templates from registries, custom templates, and local sources (default)
    List(ListArgs),

    /// Pick a template interactively and create a project from it
    Init(InitArgs),

    /// Create a project from a template without prompting
    Create(CreateArgs),

    /// Import templates from a registry URL as custom templates
    Import(ImportArgs),

    /// Manage template registries
    Registry(RegistryArgs),

    /// Manage custom templates
    Template(TemplateArgs),

    /// Manage configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InitArgs {
    /// Template id (prompted when omitted)
    #[arg(long)]
    pub template: Option<String>,

    /// Project name (prompted when omitted)
    #[arg(long)]
    pub project_name: Option<String>,

    /// Author name (prompted when omitted)
    #[arg(long)]
    pub author_name: Option<String>,

    /// Output directory (defaults to ./<project name>)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Set a template variable
    #[arg(long = "var", value_name = "KEY=VALUE")]
    pub vars: Vec<String>,
}

/// Arguments for the `create` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CreateArgs {
    /// Template id
    #[arg(long)]
    pub template_id: String,

    /// Project name
    #[arg(long)]
    pub project_name: String,

    /// Author name
    #[arg(long)]
    pub author_name: String,

    /// Output directory (defaults to ./<project name>)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Set a template variable
    #[arg(long = "var", value_name = "KEY=VALUE")]
    pub vars: Vec<String>,
}

/// Arguments for the `import` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ImportArgs {
    /// Registry document URL
    pub url: String,

    /// Import a specific template by id
    #[arg(long, conflicts_with = "all")]
    pub template: Option<String>,

    /// Import all templates from the registry
    #[arg(long)]
    pub all: bool,

    /// Registry requires authentication
    #[arg(long)]
    pub auth: bool,
}

/// Arguments for the `registry` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RegistryArgs {
    #[command(subcommand)]
    pub command: RegistryCommands,
}

/// `registry` subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum RegistryCommands {
    /// List all configured registries
    List,

    /// Add a new template registry
    Add {
        /// Registry id
        id: String,
        /// Registry document URL
        url: String,
        /// Display name
        #[arg(long)]
        name: Option<String>,
        /// Registry requires authentication
        #[arg(long)]
        auth: bool,
    },

    /// Remove a template registry
    Remove {
        /// Registry id
        id: String,
    },

    /// Enable a template registry
    Enable {
        /// Registry id
        id: String,
    },

    /// Disable a template registry
    Disable {
        /// Registry id
        id: String,
    },
}

/// Arguments for the `template` command.
#[derive(Debug, Clone, clap::Args)]
pub struct TemplateArgs {
    #[command(subcommand)]
    pub command: TemplateCommands,
}

/// `template` subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum TemplateCommands {
    /// List all custom templates
    List,

    /// Add a custom template repository
    Add(TemplateAddArgs),

    /// Remove a custom template
    Remove {
        /// Template id
        id: String,
    },

    /// Pin a custom template to a specific commit
    Pin {
        /// Template id
        id: String,
        /// Commit hash
        commit: String,
    },

    /// Unpin a custom template (use latest)
    Unpin {
        /// Template id
        id: String,
    },
}

/// Arguments for `template add`.
#[derive(Debug, Clone, clap::Args)]
pub struct TemplateAddArgs {
    /// Template id
    pub id: String,

    /// Repository URL
    pub repo: String,

    /// Display name (defaults to the id)
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long, default_value = "")]
    pub description: String,

    /// Path within the repository
    #[arg(long, default_value = "")]
    pub path: String,

    #[arg(long, default_value = "main")]
    pub branch: String,

    /// Pin to a commit
    #[arg(long)]
    pub commit: Option<String>,

    /// The repository is private
    #[arg(long)]
    pub private: bool,

    #[arg(long, default_value = "")]
    pub category: String,

    /// Tag (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// `config` subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show {
        /// Output as JSON (token masked)
        #[arg(long)]
        json: bool,
    },

    /// Set the access token sent to registries that require auth
    SetToken {
        /// Token (prompted when omitted; empty clears it)
        token: Option<String>,
    },

    /// Clear the access token
    ClearToken,

    /// Show configuration paths
    Path,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_create() {
        let cli = Cli::try_parse_from([
            "boilerplates",
            "create",
            "--template-id",
            "go_cli",
            "--project-name",
            "app",
            "--author-name",
            "Ada",
            "--var",
            "port=8080",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Create(args)) => {
                assert_eq!(args.template_id, "go_cli");
                assert_eq!(args.vars, vec!["port=8080"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn create_requires_template_id() {
        let result = Cli::try_parse_from([
            "boilerplates",
            "create",
            "--project-name",
            "app",
            "--author-name",
            "Ada",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn import_template_conflicts_with_all() {
        let result = Cli::try_parse_from([
            "boilerplates",
            "import",
            "https://example.com/r.json",
            "--template",
            "x",
            "--all",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn template_add_defaults_branch_to_main() {
        let cli = Cli::try_parse_from([
            "boilerplates",
            "template",
            "add",
            "api",
            "https://github.com/acme/api",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Template(TemplateArgs {
                command: TemplateCommands::Add(args),
            })) => {
                assert_eq!(args.branch, "main");
                assert_eq!(args.commit, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "boilerplates",
            "list",
            "--config-dir",
            "/tmp/bp",
            "--templates-dir",
            "/tmp/tpl",
        ])
        .unwrap();
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/bp")));
        assert_eq!(cli.templates_dir, PathBuf::from("/tmp/tpl"));
    }
}
