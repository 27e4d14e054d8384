use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";
const DISCORD_REVOCATION_URL: &str = "https://discord.com/api/oauth2/token/revoke";
const DISCORD_API_BASE_URL: &str = "https://discord.com/api/v10";

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

pub struct Config {
    pub database_url: String,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,
    /// Only required by the bot process.
    pub discord_bot_token: Option<String>,

    pub discord_auth_url: String,
    pub discord_token_url: String,
    pub discord_revocation_url: String,
    pub discord_api_base_url: String,

    /// Public base URL of the web service, used for authorization links sent by the bot.
    pub app_url: String,
    pub bind_address: String,
    /// Includes error details in failed bot command replies.
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_client_id: required("DISCORD_CLIENT_ID")?,
            discord_client_secret: required("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: required("DISCORD_REDIRECT_URL")?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN").ok(),
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            discord_revocation_url: DISCORD_REVOCATION_URL.to_string(),
            discord_api_base_url: DISCORD_API_BASE_URL.to_string(),
            app_url: required("APP_URL")?.trim_end_matches('/').to_string(),
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            debug: std::env::var("BOT_DEBUG")
                .map(|value| matches!(value.as_str(), "1" | "true"))
                .unwrap_or(false),
        })
    }

    /// Returns the bot token or fails if it is not configured.
    pub fn require_bot_token(&self) -> Result<&str, AppError> {
        self.discord_bot_token
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()).into())
    }

    /// Link sent to users who need to (re-)authorize the application.
    pub fn authorize_url(&self) -> String {
        format!("{}/login/discord", self.app_url)
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
