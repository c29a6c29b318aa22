mod bot;
mod config;
mod handlers;
mod utils;

use anyhow::Result;
use clap::Parser;
use config::{Config, ConfigError};
use teloxide::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const USAGE_EXAMPLE: &str = "panorama-viewer-bot https://your-url.example.net";

#[derive(Parser)]
#[command(name = "panorama-viewer-bot")]
#[command(about = "Telegram bot that opens the 3D panoramic viewer web app", long_about = None)]
#[command(version)]
struct Cli {
    /// Web app URL opened by the /start button (https)
    web_app_url: Option<String>,

    /// Лишние аргументы после URL игнорируются
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<String>,
}

/// What startup does with the result of config validation.
enum Startup {
    Run(Config),
    /// Missing token: propagated out of `main` as an error.
    Abort(ConfigError),
    /// Bad or missing URL: logged with a usage example, exit status 1.
    Exit(ConfigError),
}

impl Startup {
    fn from_config(result: Result<Config, ConfigError>) -> Self {
        match result {
            Ok(config) => Startup::Run(config),
            Err(e @ ConfigError::MissingToken) => Startup::Abort(e),
            Err(e) => Startup::Exit(e),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match Startup::from_config(Config::from_env(cli.web_app_url)) {
        Startup::Run(config) => config,
        Startup::Abort(e) => return Err(e.into()),
        Startup::Exit(e) => {
            error!("Error: {}", e);
            error!("Usage example: {}", USAGE_EXAMPLE);
            std::process::exit(1);
        }
    };

    info!("Using web app URL: {}", config.web_app_url);

    let bot = Bot::new(&config.bot_token);
    bot::start_bot(bot, config).await?;

    Ok(())
}
