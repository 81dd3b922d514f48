use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use crate::booking::error::{FlowError, StoreError};
use crate::models::doctor::DoctorId;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("session {0} not found")]
    SessionNotFound(Uuid),

    #[error("doctor {0} not found")]
    DoctorNotFound(DoctorId),

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Flow(#[from] FlowError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Flow(FlowError::Store(err))
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl ApiError {
    /// Stable machine-readable code for the UI
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::SessionNotFound(_) => "session_not_found",
            ApiError::DoctorNotFound(_) => "doctor_not_found",
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Flow(err) => match err {
                FlowError::DateRequired => "date_required",
                FlowError::AlreadyConfirmed => "already_confirmed",
                FlowError::MissingContact(_) => "missing_contact",
                FlowError::NoBooking => "no_booking",
                FlowError::NothingSelected => "nothing_selected",
                FlowError::Store(StoreError::NotFound(_)) => "appointment_not_found",
                FlowError::Store(StoreError::MissingSelection) => "missing_selection",
                FlowError::Store(StoreError::PastDate(_)) => "past_date",
                FlowError::Store(StoreError::Terminal { .. }) => "appointment_closed",
            },
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::SessionNotFound(_) | ApiError::DoctorNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Flow(err) => match err {
                FlowError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
                FlowError::DateRequired
                | FlowError::MissingContact(_)
                | FlowError::Store(StoreError::MissingSelection)
                | FlowError::Store(StoreError::PastDate(_)) => StatusCode::UNPROCESSABLE_ENTITY,
                FlowError::AlreadyConfirmed
                | FlowError::NoBooking
                | FlowError::NothingSelected
                | FlowError::Store(StoreError::Terminal { .. }) => StatusCode::CONFLICT,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        warn!("request failed with {}: {}", status, self);
        HttpResponse::build(status).json(ErrorBody {
            error: self.code(),
            message: self.to_string(),
        })
    }
}
