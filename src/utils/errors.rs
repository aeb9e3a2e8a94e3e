//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Submission error: {0}")]
    Submission(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    message: String,
    error: String,
    code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Database(e) => {
                eprintln!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        message: "Error fetching surveys".to_string(),
                        error: e.to_string(),
                        code: "DB_ERROR".to_string(),
                    },
                )
            }

            AppError::Validation(violations) => {
                eprintln!("Validation error: {}", violations.join(", "));
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        message: "Error submitting survey".to_string(),
                        error: format!(
                            "Please correct the following fields: {}",
                            violations.join(", ")
                        ),
                        code: "VALIDATION_ERROR".to_string(),
                    },
                )
            }

            AppError::Submission(msg) => {
                eprintln!("Submit error: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        message: "Error submitting survey".to_string(),
                        error: msg,
                        code: "SUBMIT_ERROR".to_string(),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;
