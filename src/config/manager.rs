use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::fs::atomic_write;
use crate::paths;
use crate::status;
use crate::translation::{
    ClientOptions, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, TranslateError,
    canonical_name,
};
use crate::ui::Style;

pub const DEFAULT_SOURCE_LANGUAGE: &str = "English";
pub const DEFAULT_TARGET_LANGUAGE: &str = "Korean";

/// Default settings in the `[gtx]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GtxConfig {
    /// Default source language name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Default target language name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Base URL of the translation endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// User-Agent header sent with requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/gtx/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub gtx: GtxConfig,
}

/// Resolved configuration after merging CLI arguments, config file, and defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Canonical source language name.
    pub source_language: String,
    /// Canonical target language name.
    pub target_language: String,
    pub endpoint: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ResolvedConfig {
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            endpoint: self.endpoint.clone(),
            timeout: self.timeout,
            user_agent: self.user_agent.clone(),
        }
    }
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub from: Option<String>,
    pub to: Option<String>,
    pub endpoint: Option<String>,
}

fn resolve_language_setting(key: &str, value: &str) -> Result<String> {
    canonical_name(value)
        .map(str::to_string)
        .ok_or_else(|| TranslateError::UnsupportedLanguage(value.to_string()))
        .with_context(|| format!("Invalid '{key}' language setting: '{value}'"))
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI options, then the config file, then built-in defaults.
///
/// # Errors
///
/// Returns an error if a language is not supported or the timeout is zero.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let file = &config_file.gtx;

    let from = options
        .from
        .as_deref()
        .or(file.from.as_deref())
        .unwrap_or(DEFAULT_SOURCE_LANGUAGE);

    let to = options
        .to
        .as_deref()
        .or(file.to.as_deref())
        .unwrap_or(DEFAULT_TARGET_LANGUAGE);

    let endpoint = options
        .endpoint
        .as_deref()
        .or(file.endpoint.as_deref())
        .unwrap_or(DEFAULT_ENDPOINT);

    let timeout = match file.timeout_secs {
        Some(0) => bail!(
            "Invalid configuration: 'timeout_secs' must be greater than 0\n\n\
             Fix it in ~/.config/gtx/config.toml"
        ),
        Some(secs) => Duration::from_secs(secs),
        None => DEFAULT_TIMEOUT,
    };

    Ok(ResolvedConfig {
        source_language: resolve_language_setting("from", from)?,
        target_language: resolve_language_setting("to", to)?,
        endpoint: endpoint.to_string(),
        timeout,
        user_agent: file
            .user_agent
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/gtx/config.toml`
    /// or `~/.config/gtx/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
        atomic_write(&self.config_path, &contents)
    }

    /// Loads the config file, falling back to defaults when it is missing or invalid.
    pub fn load_or_default(&self) -> ConfigFile {
        if !self.config_path.exists() {
            return ConfigFile::default();
        }

        self.load().unwrap_or_else(|e| {
            status!(
                "{} Ignoring unreadable config file, using defaults: {e:#}",
                Style::warning("Warning:")
            );
            ConfigFile::default()
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager {
            config_path: temp_dir.path().join("gtx").join("config.toml"),
        }
    }

    fn create_test_config() -> ConfigFile {
        ConfigFile {
            gtx: GtxConfig {
                from: Some("Japanese".to_string()),
                to: Some("French".to_string()),
                endpoint: Some("http://localhost:8080".to_string()),
                timeout_secs: Some(3),
                user_agent: None,
            },
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        let config = create_test_config();

        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_saved_config_omits_unset_keys() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        manager.save(&create_test_config()).unwrap();
        let contents = fs::read_to_string(manager.config_path()).unwrap();

        assert!(contents.contains("[gtx]"));
        assert!(contents.contains("from = \"Japanese\""));
        assert!(!contents.contains("user_agent"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert!(manager.load().is_err());
        assert_eq!(manager.load_or_default(), ConfigFile::default());
    }

    #[test]
    fn test_load_or_default_with_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::create_dir_all(manager.config_path().parent().unwrap()).unwrap();
        fs::write(manager.config_path(), "[gtx\nfrom = ").unwrap();

        assert!(manager.load().is_err());
        assert_eq!(manager.load_or_default(), ConfigFile::default());
    }

    #[test]
    fn test_resolve_config_defaults() {
        let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

        assert_eq!(resolved.source_language, "English");
        assert_eq!(resolved.target_language, "Korean");
        assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(resolved.timeout, DEFAULT_TIMEOUT);
        assert_eq!(resolved.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_resolve_config_falls_back_to_file() {
        let resolved = resolve_config(&ResolveOptions::default(), &create_test_config()).unwrap();

        assert_eq!(resolved.source_language, "Japanese");
        assert_eq!(resolved.target_language, "French");
        assert_eq!(resolved.endpoint, "http://localhost:8080");
        assert_eq!(resolved.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_resolve_config_cli_overrides_file() {
        let options = ResolveOptions {
            from: Some("German".to_string()),
            to: Some("es".to_string()),
            endpoint: Some("http://127.0.0.1:9999".to_string()),
        };

        let resolved = resolve_config(&options, &create_test_config()).unwrap();

        assert_eq!(resolved.source_language, "German");
        assert_eq!(resolved.target_language, "Spanish");
        assert_eq!(resolved.endpoint, "http://127.0.0.1:9999");
    }

    #[test]
    fn test_resolve_config_unsupported_language() {
        let options = ResolveOptions {
            to: Some("Klingon".to_string()),
            ..ResolveOptions::default()
        };

        let result = resolve_config(&options, &ConfigFile::default());

        let err = result.unwrap_err();
        assert!(err.to_string().contains("'to'"));
        assert!(err.to_string().contains("Klingon"));
        assert!(matches!(
            err.downcast_ref::<TranslateError>(),
            Some(TranslateError::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn test_resolve_config_zero_timeout() {
        let mut config = ConfigFile::default();
        config.gtx.timeout_secs = Some(0);

        let result = resolve_config(&ResolveOptions::default(), &config);
        assert!(result.unwrap_err().to_string().contains("timeout_secs"));
    }

    #[test]
    fn test_client_options_from_resolved() {
        let resolved = resolve_config(&ResolveOptions::default(), &create_test_config()).unwrap();
        let options = resolved.client_options();

        assert_eq!(options.endpoint, "http://localhost:8080");
        assert_eq!(options.timeout, Duration::from_secs(3));
    }
}
