use reqwest::Url;
use std::env;
use thiserror::Error;

pub const TOKEN_ENV: &str = "BOT_TOKEN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BOT_TOKEN environment variable is required")]
    MissingToken,
    #[error("web app URL argument is required")]
    MissingWebAppUrl,
    #[error("web app URL {url:?} is not a valid URL: {reason}")]
    InvalidWebAppUrl { url: String, reason: String },
    #[error("web app URL {0} must use https")]
    InsecureWebAppUrl(Url),
}

#[derive(Clone)]
pub struct Config {
    pub bot_token: String,
    pub web_app_url: Url,
}

impl Config {
    pub fn from_env(web_app_url: Option<String>) -> Result<Self, ConfigError> {
        Self::from_parts(env::var(TOKEN_ENV).ok(), web_app_url)
    }

    /// Токен проверяется первым, затем URL.
    pub fn from_parts(
        bot_token: Option<String>,
        web_app_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let bot_token = bot_token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let raw = web_app_url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .ok_or(ConfigError::MissingWebAppUrl)?;

        let web_app_url = Url::parse(&raw).map_err(|e| ConfigError::InvalidWebAppUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        // Telegram открывает web app только по https
        if web_app_url.scheme() != "https" {
            return Err(ConfigError::InsecureWebAppUrl(web_app_url));
        }

        Ok(Self {
            bot_token,
            web_app_url,
        })
    }
}
