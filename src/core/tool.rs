use crate::core::client::ApiClient;
use crate::core::endpoint::Endpoint;
use crate::core::request::build_request;
use crate::domain::ports::{Tool, ToolOutput};
use crate::utils::error::ToolError;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// 把一個 ListenNotes 端點包裝成 MCP 工具
pub struct EndpointTool {
    endpoint: &'static Endpoint,
    client: Arc<ApiClient>,
}

impl EndpointTool {
    pub fn new(endpoint: &'static Endpoint, client: Arc<ApiClient>) -> Self {
        Self { endpoint, client }
    }

    pub fn endpoint(&self) -> &'static Endpoint {
        self.endpoint
    }

    /// 驗證 → 呼叫 → 整理回應。參數有誤時不會送出任何請求。
    pub async fn invoke(&self, args: &Value) -> Result<String, ToolError> {
        let plan = build_request(
            self.endpoint,
            self.client.base_url(),
            self.client.default_api_key(),
            args,
        )?;

        tracing::info!(
            "🔧 {}: {} {}",
            self.endpoint.name,
            self.endpoint.method.as_str(),
            self.endpoint.path
        );
        tracing::debug!("📡 {}: requesting {}", self.endpoint.name, plan.url);

        let body = self.client.execute(&plan).await?;
        (self.endpoint.render)(&body)
    }
}

#[async_trait]
impl Tool for EndpointTool {
    fn name(&self) -> &str {
        self.endpoint.name
    }

    fn description(&self) -> &str {
        self.endpoint.description
    }

    fn input_schema(&self) -> Value {
        self.endpoint.input_schema(!self.client.has_default_api_key())
    }

    async fn call(&self, args: Value) -> ToolOutput {
        match self.invoke(&args).await {
            Ok(text) => {
                tracing::debug!("✅ {}: {} bytes", self.endpoint.name, text.len());
                ToolOutput::success(text)
            }
            Err(e) => {
                tracing::warn!(
                    "❌ {} failed: {} (Category: {:?})",
                    self.endpoint.name,
                    e,
                    e.category()
                );
                tracing::debug!("💡 {}", e.recovery_suggestion());
                e.into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::core::endpoints::directory::GET_GENRES;

    fn tool(config: ApiConfig) -> EndpointTool {
        EndpointTool::new(&GET_GENRES, Arc::new(ApiClient::new(&config).unwrap()))
    }

    #[test]
    fn test_schema_requires_key_without_default() {
        let schema = tool(ApiConfig::default()).input_schema();
        assert_eq!(schema["required"][0], "X-ListenAPI-Key");
    }

    #[test]
    fn test_schema_with_default_key() {
        let schema = tool(ApiConfig::default().with_api_key("k")).input_schema();
        assert_eq!(schema["required"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_invalid_arguments_never_reach_network() {
        // port 9 不會有服務，若真的送出請求會得到 Request failed
        let tool = tool(ApiConfig::new("http://127.0.0.1:9").with_api_key("k"));
        let output = tool.call(Value::String("nope".to_string())).await;
        assert!(output.is_error);
        assert_eq!(output.text, "Invalid arguments object");
    }
}
