use crate::{BoardEditorError, BoardEditorResult};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

pub const USERNAME_KEY: &str = "username";
pub const PASSWORD_KEY: &str = "password";
pub const BASE_URL_KEY: &str = "base_url";
pub const PROJECT_KEY: &str = "project_key";
pub const TIMEOUT_KEY: &str = "timeout_secs";

pub const DEFAULT_BASE_URL: &str = "https://issues.redhat.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const ENV_PREFIX: &str = "BOARD_EDITOR_";

/// A single layer of configuration values, consulted by key.
pub trait ConfigProvider {
    fn get(&self, key: &str) -> Option<String>;

    /// Where this layer reads from, used in error messages.
    fn describe(&self) -> String;
}

/// Reads `<prefix><KEY>` environment variables. Empty values count as unset.
pub struct EnvProvider {
    prefix: String,
}

impl EnvProvider {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn var_name(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key.to_uppercase())
    }
}

impl Default for EnvProvider {
    fn default() -> Self {
        Self::new(ENV_PREFIX)
    }
}

impl ConfigProvider for EnvProvider {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(self.var_name(key))
            .ok()
            .filter(|v| !v.trim().is_empty())
    }

    fn describe(&self) -> String {
        format!("environment ({}*)", self.prefix)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    password: Option<String>,
    #[serde(default)]
    base_url: Option<String>,
    #[serde(default)]
    project_key: Option<String>,
    #[serde(default)]
    timeout_secs: Option<u64>,
}

/// Values from a TOML config file. A file that does not exist yields no values.
pub struct FileProvider {
    path: PathBuf,
    values: ConfigFile,
}

impl FileProvider {
    pub fn load(path: impl Into<PathBuf>) -> BoardEditorResult<Self> {
        let path = path.into();
        if !path.exists() {
            tracing::debug!("No config file at {}", path.display());
            return Ok(Self {
                path,
                values: ConfigFile::default(),
            });
        }

        let content = std::fs::read_to_string(&path)?;
        let values: ConfigFile =
            toml::from_str(&content).map_err(|e| BoardEditorError::ConfigFile {
                path: path.display().to_string(),
                message: e.message().to_string(),
            })?;
        tracing::debug!("Loaded config file {}", path.display());

        Ok(Self { path, values })
    }
}

impl ConfigProvider for FileProvider {
    fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            USERNAME_KEY => self.values.username.clone(),
            PASSWORD_KEY => self.values.password.clone(),
            BASE_URL_KEY => self.values.base_url.clone(),
            PROJECT_KEY => self.values.project_key.clone(),
            TIMEOUT_KEY => self.values.timeout_secs.map(|t| t.to_string()),
            _ => None,
        };
        value.filter(|v| !v.trim().is_empty())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Built-in fallbacks; only settings with a sensible default appear here.
pub struct DefaultsProvider;

impl ConfigProvider for DefaultsProvider {
    fn get(&self, key: &str) -> Option<String> {
        match key {
            BASE_URL_KEY => Some(DEFAULT_BASE_URL.to_string()),
            TIMEOUT_KEY => Some(DEFAULT_TIMEOUT_SECS.to_string()),
            _ => None,
        }
    }

    fn describe(&self) -> String {
        "built-in defaults".to_string()
    }
}

impl ConfigProvider for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }

    fn describe(&self) -> String {
        "in-memory values".to_string()
    }
}

/// Connection settings for one run. Immutable once resolved.
#[derive(Clone)]
pub struct EditorConfig {
    pub username: String,
    pub password: String,
    pub base_url: Url,
    pub project_key: String,
    pub timeout: Duration,
}

impl fmt::Debug for EditorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("project_key", &self.project_key)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl EditorConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/board-editor/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("board-editor/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("board-editor\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Layers environment, config file and built-in defaults, in that order.
    ///
    /// An explicitly given `path` must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> BoardEditorResult<Self> {
        let env = EnvProvider::default();
        let file = match path {
            Some(p) => {
                if !p.exists() {
                    return Err(std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        format!("config file {} does not exist", p.display()),
                    )
                    .into());
                }
                Some(FileProvider::load(p)?)
            }
            None => Self::config_path().map(FileProvider::load).transpose()?,
        };

        let mut providers: Vec<&dyn ConfigProvider> = vec![&env];
        if let Some(file) = &file {
            providers.push(file);
        }
        providers.push(&DefaultsProvider);

        Self::resolve(&providers)
    }

    pub fn resolve(providers: &[&dyn ConfigProvider]) -> BoardEditorResult<Self> {
        let username = required(providers, USERNAME_KEY)?;
        let password = required(providers, PASSWORD_KEY)?;
        let raw_url = required(providers, BASE_URL_KEY)?;
        let project_key = required(providers, PROJECT_KEY)?;

        let base_url = Url::parse(&raw_url).map_err(|e| BoardEditorError::InvalidSetting {
            key: BASE_URL_KEY.to_string(),
            reason: format!("'{raw_url}' is not a valid URL ({e})"),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(BoardEditorError::InvalidSetting {
                key: BASE_URL_KEY.to_string(),
                reason: format!("'{raw_url}' cannot be used as a base URL"),
            });
        }

        let timeout_secs = match lookup(providers, TIMEOUT_KEY) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| BoardEditorError::InvalidSetting {
                    key: TIMEOUT_KEY.to_string(),
                    reason: format!("'{raw}' is not a number of seconds ({e})"),
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(BoardEditorError::InvalidSetting {
                key: TIMEOUT_KEY.to_string(),
                reason: "must be at least one second".to_string(),
            });
        }

        Ok(Self {
            username,
            password,
            base_url,
            project_key,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn lookup(providers: &[&dyn ConfigProvider], key: &str) -> Option<String> {
    providers.iter().find_map(|p| p.get(key))
}

fn required(providers: &[&dyn ConfigProvider], key: &str) -> BoardEditorResult<String> {
    lookup(providers, key).ok_or_else(|| BoardEditorError::Configuration {
        key: key.to_string(),
        sources: providers
            .iter()
            .map(|p| p.describe())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_resolve_uses_default_base_url() {
        let provided = values(&[
            ("username", "alice"),
            ("password", "secret"),
            ("project_key", "WFLY"),
        ]);

        let config = EditorConfig::resolve(&[&provided, &DefaultsProvider]).unwrap();
        assert_eq!(config.username, "alice");
        assert_eq!(config.project_key, "WFLY");
        assert_eq!(config.base_url.as_str(), "https://issues.redhat.com/");
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_earlier_provider_wins() {
        let overrides = values(&[("username", "override")]);
        let base = values(&[
            ("username", "alice"),
            ("password", "secret"),
            ("project_key", "WFLY"),
            ("base_url", "https://jira.example.com/jira"),
        ]);

        let config = EditorConfig::resolve(&[&overrides, &base, &DefaultsProvider]).unwrap();
        assert_eq!(config.username, "override");
        assert_eq!(config.base_url.as_str(), "https://jira.example.com/jira");
    }

    #[test]
    fn test_missing_required_key_names_key_and_sources() {
        let provided = values(&[("username", "alice"), ("password", "secret")]);

        let err = EditorConfig::resolve(&[&provided, &DefaultsProvider]).unwrap_err();
        match err {
            BoardEditorError::Configuration { key, sources } => {
                assert_eq!(key, PROJECT_KEY);
                assert!(sources.contains("in-memory values"));
                assert!(sources.contains("built-in defaults"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_base_url_is_configuration_error() {
        let provided = values(&[
            ("username", "alice"),
            ("password", "secret"),
            ("project_key", "WFLY"),
            ("base_url", "not a url"),
        ]);

        let err = EditorConfig::resolve(&[&provided]).unwrap_err();
        assert!(matches!(
            err,
            BoardEditorError::InvalidSetting { ref key, .. } if key == BASE_URL_KEY
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let provided = values(&[
            ("username", "alice"),
            ("password", "secret"),
            ("project_key", "WFLY"),
            ("timeout_secs", "0"),
        ]);

        let err = EditorConfig::resolve(&[&provided, &DefaultsProvider]).unwrap_err();
        assert!(matches!(
            err,
            BoardEditorError::InvalidSetting { ref key, .. } if key == TIMEOUT_KEY
        ));
    }

    #[test]
    fn test_unparsable_file_reports_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "username = \"bob\"\npassword\n").unwrap();

        let err = FileProvider::load(&path).err().unwrap();
        match err {
            BoardEditorError::ConfigFile { path: reported, .. } => {
                assert!(reported.ends_with("config.toml"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_file_provider_reads_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "username = \"bob\"\npassword = \"pw\"\nproject_key = \"EAP\"\ntimeout_secs = 5\n",
        )
        .unwrap();

        let file = FileProvider::load(&path).unwrap();
        assert_eq!(file.get(USERNAME_KEY).as_deref(), Some("bob"));
        assert_eq!(file.get(BASE_URL_KEY), None);

        let config = EditorConfig::resolve(&[&file, &DefaultsProvider]).unwrap();
        assert_eq!(config.project_key, "EAP");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_missing_file_yields_no_values() {
        let dir = tempdir().unwrap();
        let file = FileProvider::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(file.get(USERNAME_KEY), None);
    }

    #[test]
    fn test_env_provider_overrides_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "username = \"bob\"\npassword = \"pw\"\nproject_key = \"EAP\"\n",
        )
        .unwrap();
        std::env::set_var("BOARD_EDITOR_CFG_TEST_PROJECT_KEY", "WFCORE");
        std::env::set_var("BOARD_EDITOR_CFG_TEST_USERNAME", "  ");

        let env = EnvProvider::new("BOARD_EDITOR_CFG_TEST_");
        let file = FileProvider::load(&path).unwrap();
        let config = EditorConfig::resolve(&[&env, &file, &DefaultsProvider]).unwrap();

        assert_eq!(config.project_key, "WFCORE");
        assert_eq!(config.username, "bob");
    }

    #[test]
    fn test_debug_redacts_password() {
        let provided = values(&[
            ("username", "alice"),
            ("password", "hunter2"),
            ("project_key", "WFLY"),
        ]);
        let config = EditorConfig::resolve(&[&provided, &DefaultsProvider]).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("hunter2"));
    }
}
