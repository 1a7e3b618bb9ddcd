mod config;
mod consts;
mod decision;
mod events;
mod keys;
mod loader;
mod logging;
mod portfolio;
mod session;
mod ui;
mod wallet;

use crate::config::{Config, get_config_path};
use crate::session::{SessionOptions, run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        /// Wallet account to connect with. 42-character hex string starting with '0x'
        #[arg(long, value_name = "WALLET_ADDRESS")]
        account: Option<String>,

        /// Run without the terminal UI, printing activity to stdout
        #[arg(long, action = clap::ArgAction::SetTrue)]
        headless: bool,

        /// Exit after the first load cycle finishes (headless only)
        #[arg(long, action = clap::ArgAction::SetTrue, requires = "headless")]
        once: bool,

        /// Disable background colors
        #[arg(long = "no-background-color", action = clap::ArgAction::SetTrue)]
        no_background_color: bool,

        /// Simulated latency of the resolution step, in milliseconds
        #[arg(long, value_name = "MILLISECONDS")]
        latency_ms: Option<u64>,

        /// Number of initial resolutions that fail
        #[arg(long, value_name = "COUNT", default_value_t = 0)]
        simulate_failures: u32,

        /// Path to the configuration file
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
    /// Write a default configuration file
    InitConfig {
        /// Wallet account to store in the configuration
        #[arg(long, value_name = "WALLET_ADDRESS")]
        account: Option<String>,

        /// Path to the configuration file
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init_max_level();

    let args = Args::parse();
    match args.command {
        Command::Start {
            account,
            headless,
            once,
            no_background_color,
            latency_ms,
            simulate_failures,
            config,
        } => {
            let config_path = resolve_config_path(config)?;
            let config = Config::load_or_default(&config_path)
                .map_err(|e| format!("Failed to load config: {}", e))?;

            // Command-line flags override the configuration file.
            let account = account.or(config.account);
            if let Some(account) = &account {
                validate_account(account)?;
            }
            let options = SessionOptions {
                account,
                latency: Duration::from_millis(latency_ms.unwrap_or(config.resolution_latency_ms)),
                simulated_failures: simulate_failures,
                with_background_color: config.with_background_color && !no_background_color,
            };

            let session = setup_session(options);
            if headless {
                run_headless_mode(session, once).await
            } else {
                run_tui_mode(session).await
            }
        }
        Command::InitConfig { account, config } => {
            if let Some(account) = &account {
                validate_account(account)?;
            }
            let config_path = resolve_config_path(config)?;
            println!("Writing configuration to {}", config_path.display());
            Config::new(account)
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            Ok(())
        }
    }
}

fn resolve_config_path(path: Option<PathBuf>) -> Result<PathBuf, std::io::Error> {
    match path {
        Some(path) => Ok(path),
        None => get_config_path(),
    }
}

fn validate_account(account: &str) -> Result<(), Box<dyn Error>> {
    if !keys::is_valid_eth_address(account) {
        return Err(Box::from(format!(
            "Invalid Ethereum wallet address: {}. It should be a 42-character hex string starting with '0x'.",
            account
        )));
    }
    Ok(())
}
