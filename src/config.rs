use std::net::SocketAddr;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub mongodb_uri: String,
    pub mongodb_db: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let port = env_string("PORT", "3001")
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        Ok(Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], port)),
            mongodb_uri: env_string("MONGODB_URI", "mongodb://127.0.0.1:27017"),
            mongodb_db: env_string("MONGODB_DB", "react-todo"),
        })
    }
}

fn env_string(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
