//! Configuration management for doctree.
//!
//! Parses `doctree.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.title`
//! - `site.base_path`
//! - `site.reference_route`

mod expand;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override deployment base path.
    pub base_path: Option<String>,
    /// Override page tree JSON file.
    pub tree: Option<PathBuf>,
    /// Override translation status file.
    pub translation_status: Option<PathBuf>,
    /// Override output directory.
    pub output_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "doctree.toml";

/// Identifiers accepted for translation statuses.
pub const TRANSLATION_STATUSES: [&str; 4] = [
    "translated",
    "partially_translated",
    "untranslated",
    "community",
];

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site presentation configuration.
    pub site: SiteConfig,
    /// Input files (paths are relative strings from TOML).
    input: InputConfigRaw,
    /// Build output configuration (paths are relative strings from TOML).
    build: BuildConfigRaw,
    /// Translation banner configuration.
    pub translation: TranslationConfig,

    /// Resolved input configuration (set after loading).
    #[serde(skip)]
    pub input_resolved: InputConfig,
    /// Resolved build configuration (set after loading).
    #[serde(skip)]
    pub build_resolved: BuildConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site presentation configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title shown in the header and document titles.
    pub title: String,
    /// Document language (`<html lang>`).
    pub lang: String,
    /// Deployment base path (e.g. `/` or `/docs/`).
    pub base_path: String,
    /// Route of the root listing page (default: first top-level page).
    pub root_route: Option<String>,
    /// Route under which type documentation pages live.
    pub reference_route: String,
    /// Stylesheet URLs; absolute ones get the base path applied.
    pub stylesheets: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            lang: "en".to_owned(),
            base_path: "/".to_owned(),
            root_route: None,
            reference_route: "/docs/reference/".to_owned(),
            stylesheets: vec!["/assets/style.css".to_owned()],
        }
    }
}

/// Raw input configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct InputConfigRaw {
    tree: Option<String>,
    translation_status: Option<String>,
}

/// Resolved input configuration with absolute paths.
#[derive(Debug, Default)]
pub struct InputConfig {
    /// Page tree JSON written by the documentation generator.
    pub tree: PathBuf,
    /// Optional route → status file (JSON or YAML).
    pub translation_status: Option<PathBuf>,
}

/// Raw build configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct BuildConfigRaw {
    output_dir: Option<String>,
    clean: Option<bool>,
    copy: Vec<CopyRuleRaw>,
}

#[derive(Debug, Deserialize)]
struct CopyRuleRaw {
    from: String,
    #[serde(default)]
    to: String,
}

/// Resolved build configuration with absolute paths.
#[derive(Debug, Default)]
pub struct BuildConfig {
    /// Output directory for the generated site.
    pub output_dir: PathBuf,
    /// Remove the output directory before building.
    pub clean: bool,
    /// Directories copied verbatim into the output.
    pub copy: Vec<CopyRule>,
}

/// A directory copied into the output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyRule {
    /// Absolute source directory.
    pub from: PathBuf,
    /// Destination relative to the output directory (empty for the root).
    pub to: PathBuf,
}

/// Translation banner configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TranslationConfig {
    /// Status for pages without an explicit one.
    pub default_status: Option<String>,
    /// Also show a banner on fully translated pages.
    pub show_translated_banner: bool,
    /// Banner text overrides keyed by status identifier.
    pub labels: HashMap<String, LabelConfig>,
}

/// Banner text override for one status.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub label: Option<String>,
    pub message: Option<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.base_path`").
        field: String,
        /// Error message (e.g., "${`BASE_PATH`} not set").
        message: String,
    },
}

/// Require a route-like field to start with `/`.
fn require_absolute(value: &str, field: &str) -> Result<(), ConfigError> {
    if !value.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "{field} must start with '/' (got '{value}')"
        )));
    }
    Ok(())
}

/// Require a status identifier to be one of [`TRANSLATION_STATUSES`].
fn require_status(value: &str, field: &str) -> Result<(), ConfigError> {
    if !TRANSLATION_STATUSES.contains(&value) {
        return Err(ConfigError::Validation(format!(
            "{field}: unknown translation status '{value}'"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `doctree.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. Validation runs last.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(base_path) = &settings.base_path {
            self.site.base_path.clone_from(base_path);
        }
        if let Some(tree) = &settings.tree {
            self.input_resolved.tree.clone_from(tree);
        }
        if let Some(status) = &settings.translation_status {
            self.input_resolved.translation_status = Some(status.clone());
        }
        if let Some(output_dir) = &settings.output_dir {
            self.build_resolved.output_dir.clone_from(output_dir);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            input: InputConfigRaw::default(),
            build: BuildConfigRaw::default(),
            translation: TranslationConfig::default(),
            input_resolved: InputConfig {
                tree: base.join("assets/docs.json"),
                translation_status: None,
            },
            build_resolved: BuildConfig {
                output_dir: base.join("dist"),
                clean: true,
                copy: Vec::new(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_translation()?;
        self.validate_build()?;
        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        // An empty base path is the same as `/`.
        if !self.site.base_path.is_empty() {
            require_absolute(&self.site.base_path, "site.base_path")?;
        }
        require_absolute(&self.site.reference_route, "site.reference_route")?;
        if let Some(root) = &self.site.root_route {
            require_absolute(root, "site.root_route")?;
        }
        Ok(())
    }

    fn validate_translation(&self) -> Result<(), ConfigError> {
        if let Some(status) = &self.translation.default_status {
            require_status(status, "translation.default_status")?;
        }
        for key in self.translation.labels.keys() {
            require_status(key, "translation.labels")?;
        }
        Ok(())
    }

    fn validate_build(&self) -> Result<(), ConfigError> {
        let output = &self.build_resolved.output_dir;

        // Cleaning an output directory that holds the inputs would delete them.
        if self.build_resolved.clean && self.input_resolved.tree.starts_with(output) {
            return Err(ConfigError::Validation(format!(
                "build.output_dir {} contains the page tree input",
                output.display()
            )));
        }
        if let Some(rule) = self.build_resolved.copy.iter().find(|r| &r.from == output) {
            return Err(ConfigError::Validation(format!(
                "build.copy source {} is the output directory",
                rule.from.display()
            )));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.title = expand::expand_env(&self.site.title, "site.title")?;
        self.site.base_path = expand::expand_env(&self.site.base_path, "site.base_path")?;
        self.site.reference_route =
            expand::expand_env(&self.site.reference_route, "site.reference_route")?;
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.input_resolved = InputConfig {
            tree: resolve(self.input.tree.as_deref(), "assets/docs.json"),
            translation_status: self
                .input
                .translation_status
                .as_deref()
                .map(|p| config_dir.join(p)),
        };

        self.build_resolved = BuildConfig {
            output_dir: resolve(self.build.output_dir.as_deref(), "dist"),
            clean: self.build.clean.unwrap_or(true),
            copy: self
                .build
                .copy
                .iter()
                .map(|rule| CopyRule {
                    from: config_dir.join(&rule.from),
                    to: PathBuf::from(rule.to.trim_start_matches('/')),
                })
                .collect(),
        };
    }
}
