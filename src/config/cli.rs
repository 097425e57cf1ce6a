use super::{AppConfig, ConfigOverrides};
use crate::utils::error::Result;
use clap::{Args, Parser};
use std::path::PathBuf;

/// 兩個執行檔共用的連線與日誌參數
#[derive(Debug, Clone, Args)]
pub struct ConnectionArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the ListenNotes API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Default X-ListenAPI-Key sent with every request
    #[arg(long)]
    pub api_key: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Log format: compact or json
    #[arg(long)]
    pub log_format: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl ConnectionArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            timeout_seconds: self.timeout,
            log_format: self.log_format.clone(),
            verbose: self.verbose,
        }
    }

    /// 設定檔、環境變數與命令列合併後的設定
    pub fn load(&self) -> Result<AppConfig> {
        AppConfig::load(self.config.as_deref(), &self.overrides())
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "listennotes-mcp")]
#[command(about = "MCP server exposing the ListenNotes podcast API as tools")]
pub struct CliConfig {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Print every tool schema as JSON and exit
    #[arg(long)]
    pub list_tools: bool,
}
