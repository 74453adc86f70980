//! Database diagnostic endpoint.
//!
//! `GET /test` always answers 200; connectivity problems are narrated in the
//! body so operators can tell "backend up, DB down" from "DB up but empty"
//! without log access. Faults on this path are captured into the response,
//! never propagated as HTTP errors.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::startup::AppState;

const MAX_ERROR_LEN: usize = 50;
const MAX_COLLECTIONS: usize = 10;

#[derive(Debug, Serialize)]
pub struct DbHealthResponse {
    pub backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

pub async fn test_database(State(state): State<AppState>) -> Json<DbHealthResponse> {
    let mut response = DbHealthResponse {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: None,
        database_name: None,
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    if state.store.is_connected() {
        response.database = "✅ Available".to_string();
        response.database_url = Some(
            if state.config.database.url.is_some() {
                "✅ Set"
            } else {
                "❌ Not Set"
            }
            .to_string(),
        );
        response.database_name = state.store.database_name().map(str::to_string);
        response.connection_status = "Connected".to_string();

        match state.store.list_collections().await {
            Ok(mut names) => {
                names.truncate(MAX_COLLECTIONS);
                response.collections = names;
                response.database = "✅ Connected & Working".to_string();
            }
            Err(e) => {
                response.database = format!(
                    "⚠️  Connected but Error: {}",
                    truncate(&e.to_string(), MAX_ERROR_LEN)
                );
            }
        }
    }

    Json(response)
}

// Char-boundary-safe cut; driver errors can carry multi-byte text.
fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_caps_length() {
        let long = "x".repeat(80);
        assert_eq!(truncate(&long, 50).len(), 50);
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("connection refused", 50), "connection refused");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let text = "é".repeat(60);
        assert_eq!(truncate(&text, 50).chars().count(), 50);
    }
}
