//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases
//! and help text. No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "construct",
    bin_name = "construct",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "An application constructor with flexible template support",
    long_about = "Construct creates new applications from a template repository \
                  and generates additional files into existing ones.",
    after_help = "EXAMPLES:\n\
        \x20 construct new blog\n\
        \x20 construct generate resource Post\n\
        \x20 construct --template https://github.com/me/my-template new shop\n\
        \x20 construct completions bash > ~/.local/share/bash-completion/completions/construct",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new application from the template's `structure/` directory.
    #[command(
        visible_alias = "n",
        about = "Create a new application",
        after_help = "EXAMPLES:\n\
            \x20 construct new blog\n\
            \x20 construct new blog --import-prefix github.com/me"
    )]
    New(NewArgs),

    /// Generate files for an entity into the current application.
    #[command(
        visible_alias = "g",
        about = "Generate files into the current application",
        after_help = "EXAMPLES:\n\
            \x20 construct generate resource Post\n\
            \x20 construct g resource person   # person / people"
    )]
    Generate(GenerateArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 construct completions bash > ~/.local/share/bash-completion/completions/construct\n\
            \x20 construct completions zsh  > ~/.zfunc/_construct\n\
            \x20 construct completions fish > ~/.config/fish/completions/construct.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 construct config get template.reference\n\
            \x20 construct config list\n\
            \x20 construct config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `construct new`.
///
/// The name is optional here so that leaving it out is reported as a
/// missing argument by the scaffolding service itself.
#[derive(Debug, Args)]
pub struct NewArgs {
    #[arg(value_name = "NAME", help = "Application name")]
    pub name: Option<String>,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `construct generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Template subdirectory to render, e.g. `resource`.
    #[arg(value_name = "TYPE", help = "Generator type (template subdirectory)")]
    pub generator: Option<String>,

    /// Entity name; singular and plural forms are derived from it.
    #[arg(value_name = "NAME", help = "Entity name")]
    pub name: Option<String>,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `construct config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `template.reference`.
        key: String,
    },
    /// Print the effective configuration as TOML.
    List,
    /// Print the path to the configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from(["construct", "new", "blog"]);
        match cli.command {
            Commands::New(args) => assert_eq!(args.name.as_deref(), Some("blog")),
            other => panic!("expected New command, got {other:?}"),
        }
    }

    #[test]
    fn new_name_is_optional_at_parse_time() {
        let cli = Cli::parse_from(["construct", "new"]);
        assert!(matches!(cli.command, Commands::New(NewArgs { name: None })));
    }

    #[test]
    fn generate_alias_and_positionals() {
        let cli = Cli::parse_from(["construct", "g", "resource", "Post"]);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.generator.as_deref(), Some("resource"));
                assert_eq!(args.name.as_deref(), Some("Post"));
            }
            other => panic!("expected Generate command, got {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "construct",
            "new",
            "blog",
            "--template",
            "/tmp/tpl",
            "--branch",
            "develop",
        ]);
        assert_eq!(cli.global.template.as_deref(), Some("/tmp/tpl"));
        assert_eq!(cli.global.branch.as_deref(), Some("develop"));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["construct", "--quiet", "--verbose", "new", "x"]);
        assert!(result.is_err());
    }
}
