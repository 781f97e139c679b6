use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The platform could not be reached.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The platform answered with something that is not JSON.
    #[error("could not decode platform response: {0}")]
    ApiDecode(#[from] serde_json::Error),

    #[error("no open, delivery-capable store found near this address")]
    NoEligibleStore,

    #[error("invalid store id: {0:?}")]
    InvalidStoreId(String),

    #[error("an order is already in progress for {0}")]
    AlreadyInProgress(String),

    #[error("no active order for {0}")]
    OrderNotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Network(_) | AppError::ApiDecode(_) => StatusCode::BAD_GATEWAY,
            AppError::NoEligibleStore | AppError::OrderNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidStoreId(_) | AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::AlreadyInProgress(_) => StatusCode::CONFLICT,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        (status, self.to_string()).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
