//! Configuration management for repodocs.
//!
//! Parses `repodocs.toml` configuration files with serde and provides
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
//! - `github.owner`
//! - `github.host`
//! - `github.api_url`
//! - `github.raw_url`

mod expand;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override repository owner.
    pub owner: Option<String>,
    /// Override index Markdown file.
    pub index_file: Option<PathBuf>,
    /// Override page output directory.
    pub output_dir: Option<PathBuf>,
    /// Override cache enabled flag.
    pub cache_enabled: Option<bool>,
    /// Override HTTP timeout in seconds.
    pub timeout_secs: Option<u64>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "repodocs.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GitHub source configuration.
    pub github: GitHubConfig,
    /// Documentation paths (relative strings from TOML).
    docs: DocsConfigRaw,
    /// Cache settings (relative strings from TOML).
    cache: CacheConfigRaw,
    /// Staleness notice policy.
    pub staleness: StalenessConfig,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Resolved cache configuration (set after loading).
    #[serde(skip)]
    pub cache_resolved: CacheConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// GitHub source configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Account or organization owning every mirrored repository.
    pub owner: String,
    /// Host that index links point at.
    pub host: String,
    /// REST API base URL.
    pub api_url: String,
    /// Raw content base URL.
    pub raw_url: String,
    /// HTTP timeout in seconds.
    pub timeout_secs: u64,
}

impl GitHubConfig {
    /// HTTP timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            owner: "BA-CalderonMorales".to_owned(),
            host: "github.com".to_owned(),
            api_url: "https://api.github.com".to_owned(),
            raw_url: "https://raw.githubusercontent.com".to_owned(),
            timeout_secs: 10,
        }
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    index_file: Option<String>,
    output_dir: Option<String>,
}

/// Resolved documentation paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Markdown index listing the mirrored repositories.
    pub index_file: PathBuf,
    /// Directory receiving one `<slug>/index.md` per repository.
    pub output_dir: PathBuf,
}

/// Raw cache configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct CacheConfigRaw {
    enabled: Option<bool>,
    dir: Option<String>,
}

/// Resolved cache configuration.
#[derive(Debug, Default)]
pub struct CacheConfig {
    /// Whether fetched responses are cached on disk.
    pub enabled: bool,
    /// Cache directory.
    pub dir: PathBuf,
}

/// How to treat a repository whose metadata could not be fetched at all.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MissingDescriptorPolicy {
    /// Append the staleness notice.
    #[default]
    Stale,
    /// Leave the page without a notice.
    Fresh,
}

/// Staleness notice configuration.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct StalenessConfig {
    /// Days since the last push after which a repository is stale.
    pub threshold_days: u32,
    /// Policy for repositories without metadata.
    pub missing_descriptor: MissingDescriptorPolicy,
}

impl Default for StalenessConfig {
    fn default() -> Self {
        Self {
            threshold_days: 180,
            missing_descriptor: MissingDescriptorPolicy::Stale,
        }
    }
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
        /// Config field path (e.g., "`github.owner`").
        field: String,
        /// Error message (e.g., "${`REPO_OWNER`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `repodocs.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails, or
    /// the result (including CLI overrides) is invalid.
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
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(owner) = &settings.owner {
            self.github.owner.clone_from(owner);
        }
        if let Some(index_file) = &settings.index_file {
            self.docs_resolved.index_file.clone_from(index_file);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.docs_resolved.output_dir.clone_from(output_dir);
        }
        if let Some(enabled) = settings.cache_enabled {
            self.cache_resolved.enabled = enabled;
        }
        if let Some(timeout_secs) = settings.timeout_secs {
            self.github.timeout_secs = timeout_secs;
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
            github: GitHubConfig::default(),
            docs: DocsConfigRaw::default(),
            cache: CacheConfigRaw::default(),
            staleness: StalenessConfig::default(),
            docs_resolved: DocsConfig {
                index_file: base.join("docs/repositories/index.md"),
                output_dir: base.join("docs/repositories"),
            },
            cache_resolved: CacheConfig {
                enabled: true,
                dir: base.join(".repodocs/cache"),
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

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.github.owner, "github.owner")?;
        require_non_empty(&self.github.host, "github.host")?;
        require_http_url(&self.github.api_url, "github.api_url")?;
        require_http_url(&self.github.raw_url, "github.raw_url")?;

        if self.github.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "github.timeout_secs must be greater than 0".to_owned(),
            ));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.github.owner = expand::expand_env(&self.github.owner, "github.owner")?;
        self.github.host = expand::expand_env(&self.github.host, "github.host")?;
        self.github.api_url = expand::expand_env(&self.github.api_url, "github.api_url")?;
        self.github.raw_url = expand::expand_env(&self.github.raw_url, "github.raw_url")?;
        Ok(())
    }

    /// Resolve relative paths against the config file directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.docs_resolved = DocsConfig {
            index_file: resolve(
                self.docs.index_file.as_deref(),
                "docs/repositories/index.md",
            ),
            output_dir: resolve(self.docs.output_dir.as_deref(), "docs/repositories"),
        };

        self.cache_resolved = CacheConfig {
            enabled: self.cache.enabled.unwrap_or(true),
            dir: resolve(self.cache.dir.as_deref(), ".repodocs/cache"),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.github.owner, "BA-CalderonMorales");
        assert_eq!(config.github.host, "github.com");
        assert_eq!(config.github.api_url, "https://api.github.com");
        assert_eq!(config.github.raw_url, "https://raw.githubusercontent.com");
        assert_eq!(config.github.timeout(), Duration::from_secs(10));
        assert_eq!(
            config.docs_resolved.index_file,
            PathBuf::from("/test/docs/repositories/index.md")
        );
        assert_eq!(
            config.docs_resolved.output_dir,
            PathBuf::from("/test/docs/repositories")
        );
        assert!(config.cache_resolved.enabled);
        assert_eq!(
            config.cache_resolved.dir,
            PathBuf::from("/test/.repodocs/cache")
        );
        assert_eq!(config.staleness.threshold_days, 180);
        assert_eq!(
            config.staleness.missing_descriptor,
            MissingDescriptorPolicy::Stale
        );
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.github.owner, "BA-CalderonMorales");
        assert_eq!(config.github.timeout_secs, 10);
    }

    #[test]
    fn test_parse_github_config() {
        let toml = r#"
[github]
owner = "octo-org"
host = "github.example.com"
api_url = "https://github.example.com/api/v3"
raw_url = "https://github.example.com/raw"
timeout_secs = 30
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.github.owner, "octo-org");
        assert_eq!(config.github.host, "github.example.com");
        assert_eq!(config.github.api_url, "https://github.example.com/api/v3");
        assert_eq!(config.github.raw_url, "https://github.example.com/raw");
        assert_eq!(config.github.timeout_secs, 30);
    }

    #[test]
    fn test_parse_staleness_config() {
        let toml = r#"
[staleness]
threshold_days = 90
missing_descriptor = "fresh"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.staleness.threshold_days, 90);
        assert_eq!(
            config.staleness.missing_descriptor,
            MissingDescriptorPolicy::Fresh
        );
    }

    #[test]
    fn test_parse_unknown_policy_fails() {
        let toml = r#"
[staleness]
missing_descriptor = "maybe"
"#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[docs]
index_file = "site/repos.md"
output_dir = "site/repos"

[cache]
enabled = false
dir = "tmp/cache"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.docs_resolved.index_file,
            PathBuf::from("/project/site/repos.md")
        );
        assert_eq!(
            config.docs_resolved.output_dir,
            PathBuf::from("/project/site/repos")
        );
        assert!(!config.cache_resolved.enabled);
        assert_eq!(config.cache_resolved.dir, PathBuf::from("/project/tmp/cache"));
    }

    #[test]
    fn test_resolve_paths_defaults() {
        let mut config: Config = toml::from_str("").unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.docs_resolved.index_file,
            PathBuf::from("/project/docs/repositories/index.md")
        );
        assert!(config.cache_resolved.enabled);
        assert_eq!(
            config.cache_resolved.dir,
            PathBuf::from("/project/.repodocs/cache")
        );
    }

    #[test]
    fn test_load_from_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            r#"
[github]
owner = "octo"

[docs]
output_dir = "out"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.github.owner, "octo");
        assert_eq!(config.docs_resolved.output_dir, tmp.path().join("out"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let err = Config::load(Some(Path::new("/nonexistent/repodocs.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_apply_cli_settings_owner() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            owner: Some("octo".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.github.owner, "octo");
        assert_eq!(config.github.host, "github.com"); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_paths() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            index_file: Some(PathBuf::from("/custom/index.md")),
            output_dir: Some(PathBuf::from("/custom/out")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.docs_resolved.index_file,
            PathBuf::from("/custom/index.md")
        );
        assert_eq!(config.docs_resolved.output_dir, PathBuf::from("/custom/out"));
        assert_eq!(
            config.cache_resolved.dir,
            PathBuf::from("/test/.repodocs/cache")
        ); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_cache_and_timeout() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            cache_enabled: Some(false),
            timeout_secs: Some(3),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert!(!config.cache_resolved.enabled);
        assert_eq!(config.github.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_expand_env_vars_github() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("TEST_REPODOCS_OWNER", "octo-env");
        }

        let toml = r#"
[github]
owner = "${TEST_REPODOCS_OWNER}"
api_url = "${TEST_REPODOCS_API:-https://api.github.com}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(config.github.owner, "octo-env");
        assert_eq!(config.github.api_url, "https://api.github.com");

        unsafe {
            std::env::remove_var("TEST_REPODOCS_OWNER");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("MISSING_VAR_REPODOCS_TEST");
        }

        let toml = r#"
[github]
raw_url = "${MISSING_VAR_REPODOCS_TEST}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.expand_env_vars().unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("MISSING_VAR_REPODOCS_TEST"));
        assert!(err.to_string().contains("github.raw_url"));
    }

    // Validation tests

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let result = config.validate();
        assert!(result.is_err(), "Expected validation to fail");
        let err = result.unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    #[test]
    fn test_validate_default_config_passes() {
        let config = Config::default_with_base(Path::new("/test"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_owner_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.github.owner = String::new();
        assert_validation_error(&config, &["github.owner", "empty"]);
    }

    #[test]
    fn test_validate_api_url_invalid_scheme() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.github.api_url = "ftp://api.github.com".to_owned();
        assert_validation_error(&config, &["github.api_url", "http"]);
    }

    #[test]
    fn test_validate_raw_url_invalid_scheme() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.github.raw_url = "raw.githubusercontent.com".to_owned();
        assert_validation_error(&config, &["github.raw_url", "http"]);
    }

    #[test]
    fn test_validate_timeout_zero() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.github.timeout_secs = 0;
        assert_validation_error(&config, &["timeout_secs", "greater than 0"]);
    }

    #[test]
    fn test_load_rejects_zero_timeout_override() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "").unwrap();

        let overrides = CliSettings {
            timeout_secs: Some(0),
            ..Default::default()
        };
        let err = Config::load(Some(&path), Some(&overrides)).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
