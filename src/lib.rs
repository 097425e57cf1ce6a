pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, ConnectionArgs};

pub use adapters::McpServer;
pub use config::{ApiConfig, AppConfig, ServerInfo};
pub use core::client::ApiClient;
pub use core::registry::{all_tools, ToolRegistry};
pub use domain::ports::{Tool, ToolDescriptor, ToolOutput};
pub use utils::error::{ConfigError, Result, ToolError};
