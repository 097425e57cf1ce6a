use clap::Parser;
use listennotes_mcp::utils::{logger, validation::Validate};
use listennotes_mcp::{CliConfig, McpServer, ToolRegistry};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.connection.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // stdout 是協定通道，日誌一律寫到 stderr
    logger::init_logger(
        config.logging.verbose,
        config.logging.level.as_deref(),
        config.logging.log_format(),
    );
    for warning in &config.warnings {
        tracing::warn!("⚠️ {}", warning);
    }
    if let Some(path) = &cli.connection.config {
        tracing::debug!("📁 Loaded configuration from: {}", path.display());
    }
    tracing::debug!("Loaded config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if config.api.api_key.is_none() {
        tracing::warn!("⚠️ No default API key configured, every call must pass X-ListenAPI-Key");
    }

    let registry = ToolRegistry::from_config(&config.api)?;

    if cli.list_tools {
        println!("{}", serde_json::to_string_pretty(&registry.list())?);
        return Ok(());
    }

    let server = Arc::new(McpServer::new(Arc::new(registry), config.server.clone()));
    server.serve_stdio().await?;

    Ok(())
}
