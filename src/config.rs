use std::{env, net::SocketAddr};

use crate::error::AppError;

pub const DEFAULT_HF_BASE_URL: &str = "https://router.huggingface.co/v1";
pub const DEFAULT_HF_MODEL: &str = "deepseek-ai/DeepSeek-R1:fastest";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub listen_addr: SocketAddr,
    /// Upstream router token. Absence is not a startup error; the plan route
    /// reports it as a server error when it is actually needed.
    pub hf_token: Option<String>,
    pub hf_base_url: String,
    pub hf_model: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://vibetrip.db?mode=rwc".to_string());
        let listen_addr: SocketAddr = env::var("APP_LISTEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .map_err(|err| AppError::Config(format!("invalid APP_LISTEN_ADDR: {err}")))?;

        let hf_token = env::var("HF_TOKEN")
            .ok()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());

        let hf_base_url =
            env::var("HF_BASE_URL").unwrap_or_else(|_| DEFAULT_HF_BASE_URL.to_string());
        let hf_model = env::var("HF_MODEL").unwrap_or_else(|_| DEFAULT_HF_MODEL.to_string());

        Ok(Self {
            database_url,
            listen_addr,
            hf_token,
            hf_base_url,
            hf_model,
        })
    }
}
