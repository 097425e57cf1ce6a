use crate::config::ApiConfig;
use crate::core::client::ApiClient;
use crate::core::endpoints;
use crate::core::tool::EndpointTool;
use crate::domain::ports::{Tool, ToolDescriptor, ToolOutput};
use crate::utils::error::{Result, ToolError};
use serde_json::Value;
use std::sync::Arc;

/// 每個端點一個工具，共用同一個 client
pub fn all_tools(client: Arc<ApiClient>) -> Vec<Arc<dyn Tool>> {
    endpoints::all()
        .into_iter()
        .map(|endpoint| Arc::new(EndpointTool::new(endpoint, client.clone())) as Arc<dyn Tool>)
        .collect()
}

/// 依名稱查找並呼叫工具，保留註冊順序
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new(tools: Vec<Arc<dyn Tool>>) -> Self {
        Self { tools }
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let client = Arc::new(ApiClient::new(config)?);
        let registry = Self::new(all_tools(client));
        tracing::debug!("🧰 Registered {} tools", registry.len());
        Ok(registry)
    }

    /// 同名工具會取代舊的
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        match self.tools.iter().position(|t| t.name() == tool.name()) {
            Some(index) => self.tools[index] = tool,
            None => self.tools.push(tool),
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name).cloned()
    }

    pub fn list(&self) -> Vec<ToolDescriptor> {
        self.tools.iter().map(|t| t.descriptor()).collect()
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub async fn call(
        &self,
        name: &str,
        args: Value,
    ) -> std::result::Result<ToolOutput, ToolError> {
        match self.get(name) {
            Some(tool) => Ok(tool.call(args).await),
            None => {
                tracing::warn!("Unknown tool requested: {}", name);
                Err(ToolError::UnknownTool(name.to_string()))
            }
        }
    }
}
