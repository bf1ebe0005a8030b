use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::response::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("No se ha encontrado el producto con id: {0}")]
    ProductoNotFound(i64),

    #[error("No se han encontrado productos")]
    ProductosNotFound,

    #[error("{message}")]
    ProductoBadRequest {
        field: &'static str,
        message: String,
    },

    #[error("{message}")]
    GeneralBadRequest { context: String, message: String },

    #[error("ORM error")]
    OrmError(#[from] sea_orm::DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn bad_request(context: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::GeneralBadRequest {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Turns infrastructure failures into a `GeneralBadRequest` for the given
    /// context. Not-found and validation errors keep their own status.
    pub fn within(self, context: &str, message: &str) -> Self {
        match self {
            AppError::OrmError(_) | AppError::Internal(_) => {
                tracing::warn!(error = ?self, context, "request failed");
                AppError::bad_request(context, message)
            }
            other => other,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ProductoNotFound(_) | AppError::ProductosNotFound => StatusCode::NOT_FOUND,
            AppError::ProductoBadRequest { .. } | AppError::GeneralBadRequest { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::OrmError(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Field or context label reported alongside the message.
    pub fn field(&self) -> &str {
        match self {
            AppError::ProductoNotFound(_) => "Producto",
            AppError::ProductosNotFound => "Productos",
            AppError::ProductoBadRequest { field, .. } => *field,
            AppError::GeneralBadRequest { context, .. } => context.as_str(),
            AppError::OrmError(_) | AppError::Internal(_) => "Servidor",
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorData {
    pub code: u16,
    pub field: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = ?self, "unhandled error");
        }

        let body = ApiResponse {
            message: status.canonical_reason().unwrap_or("Error").to_string(),
            data: Some(ErrorData {
                code: status.as_u16(),
                field: self.field().to_string(),
                message: self.to_string(),
            }),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request("Cuerpo", rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(_: QueryRejection) -> Self {
        AppError::bad_request("Selección de Datos", "Parámetros de consulta incorrectos")
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::bad_request("Ruta", rejection.body_text())
    }
}

pub type AppResult<T> = Result<T, AppError>;
