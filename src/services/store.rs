//! Document store client owning the process-wide MongoDB connection.
//!
//! Startup is fail-soft: a missing or broken connection string leaves the
//! store degraded and the process keeps serving its static endpoints.
//! Operations against a degraded store fail fast instead of hanging.

use std::time::Duration;

use mongodb::{options::ClientOptions, Client, Collection, Database};
use secrecy::ExposeSecret;

use crate::config::DatabaseConfig;
use crate::error::AppError;
use crate::models::Lead;

const LEAD_COLLECTION: &str = "lead";

#[derive(Clone)]
pub struct LeadStore {
    db: Option<Database>,
}

impl LeadStore {
    /// Build the store from configuration. Never fails: any problem with the
    /// connection string degrades the store and is logged.
    pub async fn connect(config: &DatabaseConfig) -> Self {
        let Some(url) = config.url.as_ref() else {
            tracing::warn!("DATABASE_URL not set, persistence disabled");
            return Self { db: None };
        };

        let timeout = Duration::from_secs(config.timeout_seconds);
        let mut client_options = match ClientOptions::parse(url.expose_secret()).await {
            Ok(options) => options,
            Err(e) => {
                tracing::warn!(
                    "Failed to parse MongoDB connection string: {}, persistence disabled",
                    e
                );
                return Self { db: None };
            }
        };
        client_options.app_name = Some("plumberpro-api".to_string());
        client_options.server_selection_timeout = Some(timeout);
        client_options.connect_timeout = Some(timeout);

        match Client::with_options(client_options) {
            Ok(client) => {
                let db = client.database(&config.db_name);
                tracing::info!(database = %config.db_name, "MongoDB client initialized");
                Self { db: Some(db) }
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to create MongoDB client: {}, persistence disabled",
                    e
                );
                Self { db: None }
            }
        }
    }

    pub fn is_connected(&self) -> bool {
        self.db.is_some()
    }

    pub fn database(&self) -> Option<&Database> {
        self.db.as_ref()
    }

    pub fn database_name(&self) -> Option<&str> {
        self.db.as_ref().map(Database::name)
    }

    fn db(&self) -> Result<&Database, AppError> {
        self.db
            .as_ref()
            .ok_or_else(|| AppError::DatabaseError(anyhow::anyhow!("database not configured")))
    }

    fn leads(&self) -> Result<Collection<Lead>, AppError> {
        Ok(self.db()?.collection(LEAD_COLLECTION))
    }

    /// Insert one lead and return the hex form of the generated `_id`.
    pub async fn insert_lead(&self, lead: &Lead) -> Result<String, AppError> {
        let result = self.leads()?.insert_one(lead, None).await.map_err(|e| {
            tracing::error!("Failed to insert lead: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;

        result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .ok_or_else(|| {
                AppError::DatabaseError(anyhow::anyhow!("insert did not return an ObjectId"))
            })
    }

    pub async fn list_collections(&self) -> Result<Vec<String>, AppError> {
        self.db()?.list_collection_names(None).await.map_err(|e| {
            tracing::error!("Failed to list collections: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })
    }
}
