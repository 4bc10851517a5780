pub mod cli;
pub mod core;
pub mod providers;

pub use crate::core::config;

use crate::core::ConversionRequest;
use crate::providers::CurrencyLayerProvider;
use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    Convert {
        currency: Option<String>,
        amount: Option<String>,
    },
    Rates,
}

fn load_config(config_path: Option<&str>) -> Result<config::AppConfig> {
    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    }
    .with_env_overrides();
    debug!(base_url = config.currencylayer_url(), "Loaded config");
    Ok(config)
}

fn build_provider(config: &config::AppConfig) -> Result<CurrencyLayerProvider> {
    let api_key = config.require_api_key()?;
    Ok(CurrencyLayerProvider::new(
        config.currencylayer_url(),
        api_key,
    ))
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("xrate starting...");

    match command {
        AppCommand::Convert { currency, amount } => {
            // Input problems are reported before anything touches the network
            let request = ConversionRequest::parse(currency.as_deref(), amount.as_deref())?;
            let config = load_config(config_path)?;
            let provider = build_provider(&config)?;
            cli::convert::run(&provider, &request).await
        }
        AppCommand::Rates => {
            let config = load_config(config_path)?;
            let provider = build_provider(&config)?;
            cli::rates::run(&provider).await
        }
    }
}
