use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unknown sort field '{field}'")]
    UnknownSortField { field: String },

    #[error("failed to render page")]
    Render(#[from] askama::Error),
}

impl AppError {
    pub fn unknown_sort_field(field: impl Into<String>) -> Self {
        Self::UnknownSortField {
            field: field.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UnknownSortField { .. } => StatusCode::BAD_REQUEST,
            AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let AppError::Render(err) = &self {
            tracing::error!(error = %err, "page render failed");
        }

        let mut error = json!({
            "message": self.to_string(),
            "status": status.as_u16(),
        });
        if let AppError::UnknownSortField { field } = &self {
            error["field"] = json!(field);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sort_field_is_a_client_error() {
        let err = AppError::unknown_sort_field("salary");

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "unknown sort field 'salary'");
    }
}
