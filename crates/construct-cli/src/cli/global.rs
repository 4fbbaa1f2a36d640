//! Global arguments that apply to every subcommand.
//!
//! Declared here and flattened into [`super::Cli`] so that `-v`, `-q`,
//! `--template`, etc. are available on any invocation without repetition.

use clap::Args;
use std::path::PathBuf;

/// Global arguments for all commands.
#[derive(Debug, Default, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`). Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Only warnings and errors
    -v      - Info level (progress messages)
    -vv     - Debug level (detailed diagnostics)
    -vvv    - Trace level (very verbose)"
    )]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// Template repository URL or local directory.
    #[arg(
        short = 't',
        long = "template",
        global = true,
        value_name = "URL|DIR",
        env = "CONSTRUCT_TEMPLATE",
        help = "Template repository URL or local directory"
    )]
    pub template: Option<String>,

    /// Import prefix exposed to templates as `ImportPrefix`.
    #[arg(
        short = 'i',
        long = "import-prefix",
        global = true,
        value_name = "PREFIX",
        env = "CONSTRUCT_IMPORT_PREFIX",
        help = "Import prefix, e.g. github.com/me"
    )]
    pub import_prefix: Option<String>,

    /// Base path new applications are created under (`<path>/src/<prefix>`).
    #[arg(
        long = "source-path",
        global = true,
        value_name = "DIR",
        env = "GOPATH",
        help = "Base source path for new applications"
    )]
    pub source_path: Option<PathBuf>,

    /// Template branch to track instead of the remote default.
    #[arg(
        short = 'b',
        long = "branch",
        global = true,
        value_name = "BRANCH",
        help = "Template branch to track"
    )]
    pub branch: Option<String>,

    #[arg(
        long = "cache-dir",
        global = true,
        value_name = "DIR",
        help = "Directory template repositories are cached in"
    )]
    pub cache_dir: Option<PathBuf>,
}
