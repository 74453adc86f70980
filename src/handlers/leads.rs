use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppError;
use crate::models::Lead;
use crate::startup::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateLeadRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    pub email: Option<String>,
    #[serde(rename = "serviceType")]
    pub service_type: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LeadResponse {
    pub id: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn create_lead(
    State(state): State<AppState>,
    Json(request): Json<CreateLeadRequest>,
) -> Result<(StatusCode, Json<LeadResponse>), AppError> {
    request.validate()?;

    let lead = Lead::new(
        request.name,
        request.phone,
        request.email,
        request.service_type,
        request.message,
    );

    let id = state.store.insert_lead(&lead).await?;

    tracing::info!(lead_id = %id, "Lead stored");

    Ok((StatusCode::CREATED, Json(LeadResponse { id })))
}
