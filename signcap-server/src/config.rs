use signcap_core::IceServerConfig;
use std::env;
use thiserror::Error;

/// Default HTTP/WebSocket bind port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default base URL of the caption-prediction service.
pub const DEFAULT_AI_MODEL_URL: &str = "http://localhost:5000";

/// Process configuration, loaded once at startup from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind port (`PORT`).
    pub port: u16,

    /// CORS allow-list (`CORS_ORIGIN`, comma-separated). Empty means any
    /// origin — the dev default.
    pub allowed_origins: Vec<String>,

    /// Base URL of the external prediction service (`AI_MODEL_URL`).
    pub ai_model_url: String,

    /// STUN servers advertised to clients via `GET /api/config`.
    pub ice_servers: Vec<IceServerConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            Err(_) => DEFAULT_PORT,
        };

        let allowed_origins = parse_origins(&env::var("CORS_ORIGIN").unwrap_or_default());

        let ai_model_url =
            env::var("AI_MODEL_URL").unwrap_or_else(|_| DEFAULT_AI_MODEL_URL.to_string());

        Ok(Self {
            port,
            allowed_origins,
            ai_model_url,
            ice_servers: default_ice_servers(),
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            allowed_origins: Vec::new(),
            ai_model_url: DEFAULT_AI_MODEL_URL.to_string(),
            ice_servers: default_ice_servers(),
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn default_ice_servers() -> Vec<IceServerConfig> {
    vec![
        IceServerConfig::stun("stun:stun.l.google.com:19302"),
        IceServerConfig::stun("stun:global.stun.twilio.com:3478?transport=udp"),
    ]
}
