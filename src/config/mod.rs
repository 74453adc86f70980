use anyhow::Result;
use dotenvy::dotenv;
use secrecy::Secret;
use serde::Deserialize;
use std::env;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub service_name: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Deserialize, Clone, Debug)]
pub struct DatabaseConfig {
    /// Absent means the process serves in degraded mode without persistence.
    pub url: Option<Secret<String>>,
    pub db_name: String,
    pub timeout_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()?;

        let db_url = env::var("DATABASE_URL").ok().map(Secret::new);
        let db_name = env::var("DATABASE_NAME").unwrap_or_else(|_| "plumberpro".to_string());
        let timeout_seconds = env::var("DATABASE_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .unwrap_or(5);

        Ok(Self {
            server: ServerConfig { port },
            database: DatabaseConfig {
                url: db_url,
                db_name,
                timeout_seconds,
            },
            service_name: "plumberpro-api".to_string(),
        })
    }
}
