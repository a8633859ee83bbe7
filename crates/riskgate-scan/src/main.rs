use anyhow::Result;
use clap::Parser;
use riskgate_scan::{AppConfig, Application};
use riskgate_telemetry::init_logging;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "riskgate-scan")]
#[command(about = "Evaluate the survivability gate and persist the risk snapshot")]
struct Args {
    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Override the configured exchange key
    #[arg(long)]
    exchange: Option<String>,

    /// Override the configured reference symbol
    #[arg(long)]
    symbol: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args
        .config
        .or_else(|| std::env::var("RISKGATE_CONFIG").ok())
        .unwrap_or_else(|| "config/default.toml".to_string());

    let config_found = std::path::Path::new(&config_path).exists();
    let mut config = AppConfig::load(&config_path)?;
    if let Some(exchange) = args.exchange {
        config.exchange = exchange;
    }
    if let Some(symbol) = args.symbol {
        config.reference_symbol = symbol;
    }

    init_logging(&config.telemetry.log_level, config.telemetry.log_format)?;
    if !config_found {
        warn!(path = %config_path, "config file not found, using defaults");
    }
    info!(
        exchange = %config.exchange,
        symbol = %config.reference_symbol,
        "starting survivability scan"
    );

    let app = Application::new(config)?;
    let snapshot = app.run_cycle().await?;

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
