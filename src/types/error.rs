use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // request-shape problems
    #[error("{0}")]
    Validation(String),
    #[error("Manager is not active or invalid")]
    ManagerInactive,
    #[error("{0}")]
    NotFound(String),

    // infra things
    #[error(transparent)]
    Db(#[from] DbErr),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a str>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::ManagerInactive => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Storage errors are logged for the operator but never echoed to the
        // client verbatim.
        let message = match self {
            Self::Db(e) => {
                log::error!("store error: {e}");
                "internal storage error".to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: &message,
            details: None,
        })
    }
}
