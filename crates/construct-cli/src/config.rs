//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags and their env vars (`--template` / `CONSTRUCT_TEMPLATE`, ...),
//!    merged by [`AppConfig::resolve`]
//! 2. Environment variables `CONSTRUCT__<SECTION>__<KEY>`
//! 3. Config file (`~/.construct/config.toml` or `--config FILE`)
//! 4. Built-in defaults (always present)
//!
//! There is no built-in template: commands that render fail with
//! [`CliError::NoTemplate`] until one is configured.

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use construct_core::domain::{RenameRuleSpec, TemplateReference};

use crate::{
    cli::GlobalArgs,
    error::{CliError, CliResult},
};

/// Per-user directory holding the config file, dotenv file and cache.
const HOME_DIR_NAME: &str = ".construct";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub template: TemplateConfig,
    pub project: ProjectConfig,
    pub output: OutputConfig,
    pub render: RenderConfig,
    pub generate: GenerateConfig,
}

/// Where templates come from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Repository URL or local directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Branch to track; the remote default branch when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Cache base; `~/.construct/src` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub import_prefix: String,
    /// New applications go to `<source_path>/src/<import_prefix>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Fail on template variables missing from the view.
    pub strict: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Replaces the built-in rename rules of `generate` when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rename_rules: Option<Vec<RenameRuleSpec>>,
}

/// Effective settings for one command: config merged with CLI flags.
#[derive(Debug, Clone)]
pub struct Settings {
    pub template: Option<TemplateReference>,
    pub branch: Option<String>,
    pub cache_dir: PathBuf,
    pub import_prefix: String,
    pub source_path: Option<PathBuf>,
    pub strict: bool,
    pub rename_rules: Option<Vec<RenameRuleSpec>>,
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// A file passed with `--config` must exist; the default file is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };

        Config::builder()
            .add_source(File::from(path.as_path()).format(FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix("CONSTRUCT")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Merge CLI flags over the loaded values.
    pub fn resolve(&self, args: &GlobalArgs) -> Settings {
        let template = args
            .template
            .clone()
            .filter(|t| !t.is_empty())
            .or_else(|| self.template.reference.clone())
            .filter(|t| !t.is_empty());

        Settings {
            template: template.map(TemplateReference::new),
            branch: args.branch.clone().or_else(|| self.template.branch.clone()),
            cache_dir: args
                .cache_dir
                .clone()
                .or_else(|| self.template.cache_dir.clone())
                .unwrap_or_else(Self::default_cache_dir),
            import_prefix: args
                .import_prefix
                .clone()
                .unwrap_or_else(|| self.project.import_prefix.clone()),
            source_path: args
                .source_path
                .clone()
                .filter(|p| !p.as_os_str().is_empty())
                .or_else(|| self.project.source_path.clone()),
            strict: self.render.strict,
            rename_rules: self.generate.rename_rules.clone(),
        }
    }

    /// Path to the default configuration file.
    pub fn config_path() -> PathBuf {
        construct_home().join("config.toml")
    }

    /// Dotenv-style file read before argument parsing.
    pub fn dotenv_path() -> PathBuf {
        construct_home().join("config")
    }

    pub fn default_cache_dir() -> PathBuf {
        construct_home().join("src")
    }
}

impl Settings {
    /// The template to render from; rendering commands cannot run without one.
    pub fn require_template(&self) -> CliResult<TemplateReference> {
        self.template.clone().ok_or(CliError::NoTemplate)
    }

    /// Directory `construct new` creates applications in.
    pub fn source_root(&self, cwd: &Path) -> PathBuf {
        match &self.source_path {
            Some(base) => {
                let mut root = base.join("src");
                root.extend(self.import_prefix.split('/').filter(|s| !s.is_empty()));
                root
            }
            None => cwd.to_path_buf(),
        }
    }
}

/// `~/.construct`, or `.construct` in the current directory when the home
/// directory cannot be determined.
fn construct_home() -> PathBuf {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(HOME_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(HOME_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn no_template_is_configured_by_default() {
        let cfg = AppConfig::default();
        assert!(cfg.template.reference.is_none());
        assert!(!cfg.render.strict);
        assert!(cfg.generate.rename_rules.is_none());

        let settings = cfg.resolve(&GlobalArgs::default());
        assert!(matches!(settings.require_template(), Err(CliError::NoTemplate)));
    }

    #[test]
    fn empty_template_counts_as_unset() {
        let mut cfg = AppConfig::default();
        cfg.template.reference = Some(String::new());
        let args = GlobalArgs {
            template: Some(String::new()),
            ..GlobalArgs::default()
        };
        assert!(cfg.resolve(&args).require_template().is_err());
    }

    #[test]
    fn config_path_lives_under_construct_home() {
        let p = AppConfig::config_path();
        assert!(p.ends_with(".construct/config.toml"));
        assert!(AppConfig::default_cache_dir().ends_with(".construct/src"));
    }

    #[test]
    fn load_reads_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[template]
reference = "https://example.com/me/tpl"
branch = "develop"

[project]
import_prefix = "example.com/me"

[render]
strict = true

[[generate.rename_rules]]
pattern = "model\\.go$"
replacement = "{{singular}}.go"
"#
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(cfg.template.reference.as_deref(), Some("https://example.com/me/tpl"));
        assert_eq!(cfg.template.branch.as_deref(), Some("develop"));
        assert_eq!(cfg.project.import_prefix, "example.com/me");
        assert!(cfg.render.strict);
        assert_eq!(cfg.generate.rename_rules.map(|r| r.len()), Some(1));
    }

    #[test]
    fn load_missing_explicit_file_fails() {
        let missing = PathBuf::from("/definitely/not/here/config.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn flags_override_config() {
        let mut cfg = AppConfig::default();
        cfg.project.import_prefix = "example.com/config".into();
        cfg.template.branch = Some("main".into());
        cfg.template.reference = Some("https://example.com/configured".into());

        let args = GlobalArgs {
            template: Some("/tmp/local-template".into()),
            import_prefix: Some("example.com/flag".into()),
            ..GlobalArgs::default()
        };

        let settings = cfg.resolve(&args);
        assert_eq!(settings.require_template().unwrap().as_str(), "/tmp/local-template");
        assert_eq!(settings.import_prefix, "example.com/flag");
        assert_eq!(settings.branch.as_deref(), Some("main"));
    }

    #[test]
    fn source_root_uses_go_layout_when_source_path_is_set() {
        let settings = AppConfig {
            project: ProjectConfig {
                import_prefix: "github.com/me".into(),
                source_path: Some(PathBuf::from("/home/me/go")),
            },
            ..AppConfig::default()
        }
        .resolve(&GlobalArgs::default());

        assert_eq!(
            settings.source_root(Path::new("/work")),
            PathBuf::from("/home/me/go/src/github.com/me")
        );
    }

    #[test]
    fn source_root_falls_back_to_cwd() {
        let settings = AppConfig::default().resolve(&GlobalArgs::default());
        assert_eq!(settings.source_root(Path::new("/work")), PathBuf::from("/work"));
    }
}
