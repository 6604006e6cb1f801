use crate::{repository, service::entitlement_service::Rejection};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("hotel not exist")]
    HotelNotExist,

    #[error("access forbidden: {0}")]
    Forbidden(Rejection),

    #[error("payment required: {0}")]
    PaymentRequired(Rejection),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),
}

impl From<Rejection> for Error {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::NoEnrollment | Rejection::NoTicket | Rejection::TicketWithoutHotel => {
                Error::Forbidden(rejection)
            }
            Rejection::PaymentPending => Error::PaymentRequired(rejection),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        match self {
            Error::HotelNotExist => StatusCode::NOT_FOUND,
            Error::Forbidden(_) => StatusCode::FORBIDDEN,
            Error::PaymentRequired(_) => StatusCode::PAYMENT_REQUIRED,
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
        .into_response()
    }
}
