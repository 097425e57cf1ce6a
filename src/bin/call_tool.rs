use clap::Parser;
use listennotes_mcp::utils::{logger, validation::Validate};
use listennotes_mcp::{ConnectionArgs, ToolRegistry};
use serde_json::Value;

/// 直接呼叫單一工具，方便不透過 MCP client 測試 API
#[derive(Parser)]
#[command(name = "call_tool")]
#[command(about = "Invoke one ListenNotes tool and print its output")]
struct Args {
    /// Tool name, e.g. get_search
    tool: Option<String>,

    /// Tool arguments as a JSON object
    #[arg(short, long, default_value = "{}")]
    args: String,

    /// Print the available tool names and exit
    #[arg(long)]
    list: bool,

    #[command(flatten)]
    connection: ConnectionArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match args.connection.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_logger(
        config.logging.verbose,
        config.logging.level.as_deref(),
        config.logging.log_format(),
    );
    for warning in &config.warnings {
        tracing::warn!("⚠️ {}", warning);
    }

    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let registry = ToolRegistry::from_config(&config.api)?;

    if args.list {
        for name in registry.tool_names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let Some(tool) = args.tool else {
        eprintln!("❌ Missing tool name, use --list to see the available tools");
        std::process::exit(1);
    };

    let arguments: Value = match serde_json::from_str(&args.args) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("❌ --args is not valid JSON: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("🚀 Calling {}", tool);
    match registry.call(&tool, arguments).await {
        Ok(output) if output.is_error => {
            eprintln!("❌ {}", output.text);
            std::process::exit(1);
        }
        Ok(output) => println!("{}", output.text),
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
