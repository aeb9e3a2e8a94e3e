//! Rutas HTTP de la API

pub mod survey_routes;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/", get(liveness))
        .nest("/api/surveys", survey_routes::create_survey_router())
}

/// Respuesta de liveness en texto plano
async fn liveness() -> &'static str {
    "Auto-Rickshaw Survey API is running..."
}
