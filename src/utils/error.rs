use thiserror::Error;

/// 參數所在位置，決定缺少參數時的錯誤訊息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    Path,
    Query,
    Header,
}

/// 單次工具呼叫的錯誤。Display 的內容就是回傳給呼叫端的文字。
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Invalid arguments object")]
    InvalidArguments,

    #[error("Missing required path parameter: {name}")]
    MissingPathParameter { name: String },

    #[error("Missing required parameter: {name}")]
    MissingParameter { name: String },

    #[error("Invalid path parameter: {name}")]
    InvalidPathParameter { name: String },

    #[error("Failed to create request: {message}")]
    RequestBuild { message: String },

    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to read response body: {0}")]
    BodyRead(#[source] reqwest::Error),

    #[error("API error: {body}")]
    Api { status: u16, body: String },

    #[error("Failed to format JSON: {0}")]
    Format(#[from] serde_json::Error),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 呼叫參數不正確，沒有發出任何請求
    Invocation,
    Transport,
    /// 上游回應 status >= 400
    Upstream,
    Internal,
}

impl ToolError {
    pub fn missing(name: &str, location: ParamLocation) -> Self {
        match location {
            ParamLocation::Path => ToolError::MissingPathParameter {
                name: name.to_string(),
            },
            ParamLocation::Query | ParamLocation::Header => ToolError::MissingParameter {
                name: name.to_string(),
            },
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ToolError::InvalidArguments
            | ToolError::MissingPathParameter { .. }
            | ToolError::MissingParameter { .. }
            | ToolError::InvalidPathParameter { .. }
            | ToolError::UnknownTool(_) => ErrorCategory::Invocation,
            ToolError::Transport(_) | ToolError::BodyRead(_) => ErrorCategory::Transport,
            ToolError::Api { .. } => ErrorCategory::Upstream,
            ToolError::RequestBuild { .. } | ToolError::Format(_) => ErrorCategory::Internal,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ToolError::InvalidArguments => "Pass the tool arguments as a JSON object",
            ToolError::MissingPathParameter { .. } | ToolError::MissingParameter { .. } => {
                "Supply every parameter listed as required in the tool schema"
            }
            ToolError::InvalidPathParameter { .. } => "Path parameters must be non-empty strings",
            ToolError::RequestBuild { .. } => {
                "Check the API key for characters not allowed in headers"
            }
            ToolError::Transport(_) | ToolError::BodyRead(_) => {
                "Check network connectivity and the configured base URL"
            }
            ToolError::Api { status, .. } if *status == 401 => "Check the X-ListenAPI-Key value",
            ToolError::Api { status, .. } if *status == 429 => {
                "Quota exceeded, wait before calling again"
            }
            ToolError::Api { .. } => "Inspect the upstream error body for details",
            ToolError::Format(_) => "Report this as a bug",
            ToolError::UnknownTool(_) => "Call tools/list to see the available tool names",
        }
    }
}

/// 啟動階段（設定、HTTP client 建立）的錯誤
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error in {field}: {message}")]
    ParseError { field: String, message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl ConfigError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ConfigError::IoError(e) => format!("Could not read the configuration file: {}", e),
            ConfigError::ParseError { message, .. } => {
                format!("The configuration file is not valid TOML: {}", message)
            }
            ConfigError::InvalidValue { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            ConfigError::HttpClient(e) => format!("Could not initialise the HTTP client: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConfigError::IoError(_) => "Make sure the --config path exists and is readable",
            ConfigError::ParseError { .. } => "Fix the TOML syntax and try again",
            ConfigError::InvalidValue { .. } => {
                "Correct the value in the config file, environment or CLI flag"
            }
            ConfigError::HttpClient(_) => "Check the TLS setup of this machine",
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameter_messages() {
        assert_eq!(
            ToolError::missing("id", ParamLocation::Path).to_string(),
            "Missing required path parameter: id"
        );
        assert_eq!(
            ToolError::missing("q", ParamLocation::Query).to_string(),
            "Missing required parameter: q"
        );
        assert_eq!(
            ToolError::missing("X-ListenAPI-Key", ParamLocation::Header).to_string(),
            "Missing required parameter: X-ListenAPI-Key"
        );
    }

    #[test]
    fn test_api_error_includes_body() {
        let err = ToolError::Api {
            status: 404,
            body: "{\"error\":\"not found\"}".to_string(),
        };
        assert_eq!(err.to_string(), "API error: {\"error\":\"not found\"}");
        assert_eq!(err.category(), ErrorCategory::Upstream);
    }

    #[test]
    fn test_categories() {
        assert_eq!(ToolError::InvalidArguments.category(), ErrorCategory::Invocation);
        assert_eq!(
            ToolError::UnknownTool("x".to_string()).category(),
            ErrorCategory::Invocation
        );
        assert_eq!(
            ToolError::RequestBuild {
                message: "bad header".to_string()
            }
            .category(),
            ErrorCategory::Internal
        );
    }
}
