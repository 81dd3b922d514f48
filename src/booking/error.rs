use chrono::NaiveDate;
use thiserror::Error;

use crate::models::appointment::{AppointmentId, AppointmentStatus};
use crate::models::contact::ContactField;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    #[error("appointment {0} not found")]
    NotFound(AppointmentId),

    /// Message doubles as the warning shown next to the form
    #[error("Please select date and time")]
    MissingSelection,

    #[error("{0} is in the past, pick a later date")]
    PastDate(NaiveDate),

    #[error("appointment {id} is {status} and can no longer be changed")]
    Terminal {
        id: AppointmentId,
        status: AppointmentStatus,
    },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FlowError {
    #[error("select a date before choosing a time")]
    DateRequired,

    #[error("this booking is already confirmed")]
    AlreadyConfirmed,

    #[error("{0} is required")]
    MissingContact(ContactField),

    #[error("no booking in progress")]
    NoBooking,

    #[error("no appointment selected")]
    NothingSelected,

    #[error(transparent)]
    Store(#[from] StoreError),
}
