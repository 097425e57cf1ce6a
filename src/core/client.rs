use crate::config::ApiConfig;
use crate::core::endpoint::API_KEY_HEADER;
use crate::core::request::RequestPlan;
use crate::utils::error::{ConfigError, Result, ToolError};
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// 所有工具共用的 HTTP client，建立後唯讀
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    default_api_key: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| ConfigError::InvalidValue {
            field: "api.base_url".to_string(),
            value: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()?;

        let default_api_key = config
            .api_key
            .as_ref()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        Ok(Self {
            http,
            base_url,
            default_api_key,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn default_api_key(&self) -> Option<&str> {
        self.default_api_key.as_deref()
    }

    pub fn has_default_api_key(&self) -> bool {
        self.default_api_key.is_some()
    }

    /// 送出請求並取回 body。status >= 400 時 body 原封不動放進錯誤。
    pub async fn execute(&self, plan: &RequestPlan) -> std::result::Result<String, ToolError> {
        let mut key = HeaderValue::from_str(&plan.api_key).map_err(|e| ToolError::RequestBuild {
            message: format!("invalid {} header value: {}", API_KEY_HEADER, e),
        })?;
        key.set_sensitive(true);

        let response = self
            .http
            .request(plan.method.into(), plan.url.clone())
            .header(ACCEPT, "application/json")
            .header(API_KEY_HEADER, key)
            .send()
            .await
            .map_err(ToolError::Transport)?;

        let status = response.status();
        tracing::debug!("📡 API response status: {}", status);

        let body = response.text().await.map_err(ToolError::BodyRead)?;

        if status.as_u16() >= 400 {
            return Err(ToolError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_bad_base_url() {
        let err = ApiClient::new(&ApiConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_blank_default_key_is_treated_as_absent() {
        let client = ApiClient::new(&ApiConfig::default().with_api_key("   ")).unwrap();
        assert!(!client.has_default_api_key());

        let client = ApiClient::new(&ApiConfig::default().with_api_key("abc")).unwrap();
        assert_eq!(client.default_api_key(), Some("abc"));
    }

    #[tokio::test]
    async fn test_header_rejects_control_characters() {
        let client = ApiClient::new(&ApiConfig::new("http://127.0.0.1:9")).unwrap();
        let plan = RequestPlan {
            method: crate::core::endpoint::HttpMethod::Get,
            url: Url::parse("http://127.0.0.1:9/genres").unwrap(),
            api_key: "bad\nkey".to_string(),
        };
        let err = tokio_test::assert_err!(client.execute(&plan).await);
        assert!(err.to_string().starts_with("Failed to create request:"));
    }
}
