#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use std::fmt;
use std::path::Path;
use toml_config::{is_unresolved_placeholder, TomlConfig};

pub const DEFAULT_BASE_URL: &str = "https://listen-api.listennotes.com/api/v2";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

pub const ENV_BASE_URL: &str = "LISTENNOTES_BASE_URL";
pub const ENV_API_KEY: &str = "LISTENNOTES_API_KEY";
pub const ENV_TIMEOUT_SECONDS: &str = "LISTENNOTES_TIMEOUT_SECONDS";

const LOG_FORMATS: [&str; 2] = ["compact", "json"];

/// 所有工具共用的唯讀 API 設定
#[derive(Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

// api_key 不進日誌
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_seconds", &self.timeout_seconds)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// 預設值加上環境變數
    pub fn from_env() -> Self {
        let mut config = Self::default();
        for warning in config.apply_env(|name| std::env::var(name).ok()) {
            tracing::warn!("⚠️ {}", warning);
        }
        config
    }

    /// 套用環境變數。被忽略的值以警告字串回傳，呼叫端在 logger 就緒後再輸出。
    pub fn apply_env<F>(&mut self, lookup: F) -> Vec<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.base_url = base_url;
        }
        if let Some(api_key) = lookup(ENV_API_KEY) {
            self.api_key = Some(api_key);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECONDS) {
            match raw.trim().parse() {
                Ok(timeout) => self.timeout_seconds = timeout,
                Err(_) => warnings.push(format!(
                    "Ignoring {}={:?}: not a whole number of seconds",
                    ENV_TIMEOUT_SECONDS, raw
                )),
            }
        }
        warnings
    }
}

impl Validate for ApiConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api.base_url", &self.base_url)?;
        validation::validate_positive_number("api.timeout_seconds", self.timeout_seconds, 1)?;
        if let Some(api_key) = &self.api_key {
            validation::validate_non_empty_string("api.api_key", api_key)?;
        }
        validation::validate_non_empty_string("api.user_agent", &self.user_agent)?;
        Ok(())
    }
}

/// Name and version reported in the MCP `initialize` handshake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

impl Default for ServerInfo {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: String,
    pub verbose: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: None,
            format: "compact".to_string(),
            verbose: false,
        }
    }
}

impl LoggingConfig {
    pub fn log_format(&self) -> LogFormat {
        LogFormat::parse(&self.format).unwrap_or_default()
    }
}

/// 命令列覆蓋值，優先權最高
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub log_format: Option<String>,
    pub verbose: bool,
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub server: ServerInfo,
    pub logging: LoggingConfig,
    /// 載入時被忽略的設定值
    pub warnings: Vec<String>,
}

impl AppConfig {
    /// 依序套用：預設值 → 設定檔 → 環境變數 → 命令列
    pub fn load(config_path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        Self::load_with_env(config_path, overrides, |name| std::env::var(name).ok())
    }

    pub fn load_with_env<F>(
        config_path: Option<&Path>,
        overrides: &ConfigOverrides,
        lookup: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = config_path {
            config.apply_file(TomlConfig::from_file(path)?);
        }

        let env_warnings = config.api.apply_env(lookup);
        config.warnings.extend(env_warnings);
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn apply_file(&mut self, file: TomlConfig) {
        if let Some(api) = file.api {
            if let Some(base_url) = api.base_url {
                self.api.base_url = base_url;
            }
            match api.api_key {
                Some(key) if is_unresolved_placeholder(&key) => {
                    self.warnings.push(format!(
                        "Ignoring api.api_key {}: environment variable is not set",
                        key
                    ));
                }
                Some(key) => self.api.api_key = Some(key),
                None => {}
            }
            if let Some(timeout) = api.timeout_seconds {
                self.api.timeout_seconds = timeout;
            }
            if let Some(user_agent) = api.user_agent {
                self.api.user_agent = user_agent;
            }
        }

        if let Some(server) = file.server {
            if let Some(name) = server.name {
                self.server.name = name;
            }
            if let Some(version) = server.version {
                self.server.version = version;
            }
        }

        if let Some(logging) = file.logging {
            if logging.level.is_some() {
                self.logging.level = logging.level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }
    }

    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(base_url) = &overrides.base_url {
            self.api.base_url = base_url.clone();
        }
        if let Some(api_key) = &overrides.api_key {
            self.api.api_key = Some(api_key.clone());
        }
        if let Some(timeout) = overrides.timeout_seconds {
            self.api.timeout_seconds = timeout;
        }
        if let Some(format) = &overrides.log_format {
            self.logging.format = format.clone();
        }
        self.logging.verbose |= overrides.verbose;
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.api.validate()?;
        validation::validate_non_empty_string("server.name", &self.server.name)?;
        validation::validate_one_of(
            "logging.format",
            &self.logging.format.trim().to_ascii_lowercase(),
            &LOG_FORMATS,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config =
            AppConfig::load_with_env(None, &ConfigOverrides::default(), env_from(&[])).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.api_key, None);
        assert_eq!(config.api.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_layering_precedence() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"
[api]
base_url = "http://file.example.com"
api_key = "file-key"
timeout_seconds = 5

[logging]
format = "json"
"#,
        )
        .unwrap();

        let env = env_from(&[
            (ENV_API_KEY, "env-key"),
            (ENV_TIMEOUT_SECONDS, "12"),
        ]);
        let overrides = ConfigOverrides {
            timeout_seconds: Some(60),
            ..ConfigOverrides::default()
        };

        let config = AppConfig::load_with_env(Some(file.path()), &overrides, env).unwrap();
        assert_eq!(config.api.base_url, "http://file.example.com");
        assert_eq!(config.api.api_key.as_deref(), Some("env-key"));
        assert_eq!(config.api.timeout_seconds, 60);
        assert_eq!(config.logging.log_format(), LogFormat::Json);
    }

    #[test]
    fn test_bad_timeout_env_is_ignored() {
        let mut config = ApiConfig::default();
        let warnings = config.apply_env(env_from(&[(ENV_TIMEOUT_SECONDS, "soon")]));
        assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_ignored_timeout_is_reported_by_load() {
        let env = env_from(&[(ENV_TIMEOUT_SECONDS, "soon")]);
        let config = AppConfig::load_with_env(None, &ConfigOverrides::default(), env).unwrap();
        assert_eq!(config.api.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
        assert_eq!(config.warnings.len(), 1);
        assert!(config.warnings[0].contains(ENV_TIMEOUT_SECONDS));
        assert!(config.warnings[0].contains("soon"));
    }

    #[test]
    fn test_clean_load_has_no_warnings() {
        let env = env_from(&[(ENV_TIMEOUT_SECONDS, "12")]);
        let config = AppConfig::load_with_env(None, &ConfigOverrides::default(), env).unwrap();
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_log_format_validation_ignores_case() {
        let mut config = AppConfig::default();
        config.logging.format = "JSON".to_string();
        assert_eq!(config.logging.log_format(), LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unresolved_key_placeholder_is_ignored() {
        let mut config = AppConfig::default();
        let file = TomlConfig::from_toml_str(
            "[api]\napi_key = \"${LISTENNOTES_MCP_TEST_NEVER_SET}\"\n",
        )
        .unwrap();
        config.apply_file(file);
        assert_eq!(config.api.api_key, None);
        assert_eq!(config.warnings.len(), 1);
        assert!(config.warnings[0].contains("api.api_key"));
    }

    #[test]
    fn test_validation_failures() {
        let mut config = AppConfig::default();
        config.api.base_url = "listennotes".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.api.timeout_seconds = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.api.api_key = Some("  ".to_string());
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ApiConfig::default().with_api_key("super-secret");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }
}
