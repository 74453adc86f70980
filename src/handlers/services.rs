use axum::Json;
use serde::Serialize;

use crate::models::{Service, CATALOG};

#[derive(Debug, Serialize)]
pub struct ServicesResponse {
    pub services: &'static [Service],
}

pub async fn list_services() -> Json<ServicesResponse> {
    Json(ServicesResponse { services: CATALOG })
}
