use clap::{CommandFactory, Parser, Subcommand};
use std::process::ExitCode;
use xrate::AppCommand;
use xrate::cli::{setup, ui};
use xrate::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert a USD amount into KRW, JPY or PHP
    Convert {
        /// Target currency (KRW, JPY or PHP)
        #[arg(short, long)]
        to: Option<String>,

        /// Amount in USD
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
    },
    /// Display live rates for all supported currencies
    Rates,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config_path = cli.config_path.as_deref();
    let result = match cli.command {
        None => Cli::command().print_help().map_err(anyhow::Error::from),
        Some(Commands::Setup) => setup::setup(),
        Some(Commands::Convert { to, amount }) => {
            xrate::run_command(
                AppCommand::Convert {
                    currency: to,
                    amount,
                },
                config_path,
            )
            .await
        }
        Some(Commands::Rates) => xrate::run_command(AppCommand::Rates, config_path).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Application failed");
            eprintln!("{}", ui::error_line(&e));
            ExitCode::FAILURE
        }
    }
}
