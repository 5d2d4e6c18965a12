use crate::{qr_code, repository, service::ticket_api_service};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ticket not exist")]
    TicketNotExist,

    #[error("validation error: {0}")]
    Validation(&'static str),

    #[error("ticket limit reached for this vatin")]
    TicketLimitReached,

    #[error("ticket api error: {0}")]
    TicketApi(#[from] ticket_api_service::Error),

    #[error("qr code error: {0}")]
    QrCode(#[from] qr_code::Error),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        match self {
            Error::TicketNotExist => StatusCode::NOT_FOUND.into_response(),
            Error::Validation(_) | Error::TicketLimitReached => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Error::TicketApi(_) => StatusCode::BAD_GATEWAY.into_response(),
            Error::QrCode(_) | Error::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
