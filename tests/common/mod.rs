use plumberpro_api::config::{Config, DatabaseConfig, ServerConfig};
use plumberpro_api::models::Lead;
use plumberpro_api::startup::Application;
use secrecy::Secret;

pub struct TestApp {
    pub address: String,
    pub db: Option<mongodb::Database>,
    pub db_name: String,
}

impl TestApp {
    /// Spawn an app backed by a fresh per-test database.
    pub async fn spawn() -> Self {
        let url = std::env::var("TEST_MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let db_name = format!("plumberpro_test_{}", uuid::Uuid::new_v4());
        Self::spawn_with(Some(url), db_name).await
    }

    /// Spawn an app with no connection string, so the store is degraded.
    pub async fn spawn_degraded() -> Self {
        Self::spawn_with(None, "plumberpro_test_degraded".to_string()).await
    }

    async fn spawn_with(url: Option<String>, db_name: String) -> Self {
        let config = Config {
            server: ServerConfig { port: 0 },
            database: DatabaseConfig {
                url: url.map(Secret::new),
                db_name: db_name.clone(),
                timeout_seconds: 5,
            },
            service_name: "plumberpro-api-test".to_string(),
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());
        let db = app.store().database().cloned();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept requests
        let client = reqwest::Client::new();
        for _ in 0..50 {
            if client.get(&address).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            db,
            db_name,
        }
    }

    /// Typed handle to the `lead` collection of this test's database.
    pub fn leads(&self) -> mongodb::Collection<Lead> {
        self.db
            .as_ref()
            .expect("test app has no database")
            .collection("lead")
    }

    /// Cleanup test database after test completes.
    pub async fn cleanup(&self) {
        if let Some(db) = &self.db {
            db.drop(None).await.expect("Failed to drop test database");
        }
    }
}
