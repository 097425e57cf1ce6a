use crate::utils::error::{ConfigError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 設定檔結構，所有區段與欄位都可省略
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub api: Option<ApiSection>,
    pub server: Option<ServerSection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiSection {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub name: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ConfigError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ConfigError::ParseError {
            field: "toml_parsing".to_string(),
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${LISTENNOTES_API_KEY})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConfigError::ParseError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

/// 仍是 `${VAR}` 形式的值代表環境變數未設定
pub fn is_unresolved_placeholder(value: &str) -> bool {
    let value = value.trim();
    value.starts_with("${") && value.ends_with('}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[api]
base_url = "https://listen-api-test.listennotes.com/api/v2"
api_key = "abc123"
timeout_seconds = 10

[server]
name = "podcasts"

[logging]
level = "debug"
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let api = config.api.unwrap();
        assert_eq!(
            api.base_url.as_deref(),
            Some("https://listen-api-test.listennotes.com/api/v2")
        );
        assert_eq!(api.api_key.as_deref(), Some("abc123"));
        assert_eq!(api.timeout_seconds, Some(10));
        assert_eq!(config.server.unwrap().name.as_deref(), Some("podcasts"));
        assert_eq!(config.logging.unwrap().format.as_deref(), Some("json"));
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.api.is_none());
        assert!(config.server.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("LISTENNOTES_MCP_TEST_KEY", "from-env");

        let config = TomlConfig::from_toml_str(
            r#"
[api]
api_key = "${LISTENNOTES_MCP_TEST_KEY}"
"#,
        )
        .unwrap();
        assert_eq!(config.api.unwrap().api_key.as_deref(), Some("from-env"));

        std::env::remove_var("LISTENNOTES_MCP_TEST_KEY");
    }

    #[test]
    fn test_missing_env_var_left_as_placeholder() {
        let config = TomlConfig::from_toml_str(
            r#"
[api]
api_key = "${LISTENNOTES_MCP_TEST_SURELY_UNSET}"
"#,
        )
        .unwrap();
        let key = config.api.unwrap().api_key.unwrap();
        assert_eq!(key, "${LISTENNOTES_MCP_TEST_SURELY_UNSET}");
        assert!(is_unresolved_placeholder(&key));
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::from_toml_str("[api\nbase_url = 1").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[api]\nbase_url = \"http://localhost:9000\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.api.unwrap().base_url.as_deref(),
            Some("http://localhost:9000")
        );
    }
}
