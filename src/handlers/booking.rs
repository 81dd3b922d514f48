use chrono::NaiveDate;
use uuid::Uuid;

use crate::booking::flow::{BookingSummary, BookingView};
use crate::error::ApiError;
use crate::handlers::today;
use crate::models::contact::ContactDetails;
use crate::models::doctor::DoctorId;
use crate::models::timeslot::TimeSlot;
use crate::state::AppState;

pub async fn open_booking(
    state: &AppState,
    session_id: Uuid,
    doctor_id: DoctorId,
) -> Result<BookingView, ApiError> {
    let doctor = state
        .catalog
        .find(doctor_id)
        .cloned()
        .ok_or(ApiError::DoctorNotFound(doctor_id))?;
    let session = state.session(session_id).await?;
    let mut session = session.lock().await;
    Ok(session.open_booking(doctor).view())
}

pub async fn booking_view(state: &AppState, session_id: Uuid) -> Result<BookingView, ApiError> {
    let session = state.session(session_id).await?;
    let session = session.lock().await;
    Ok(session.booking()?.view())
}

pub async fn select_date(
    state: &AppState,
    session_id: Uuid,
    date: NaiveDate,
) -> Result<BookingView, ApiError> {
    let session = state.session(session_id).await?;
    let mut session = session.lock().await;
    let flow = session.booking_mut()?;
    flow.select_date(date, today())?;
    Ok(flow.view())
}

pub async fn select_time(
    state: &AppState,
    session_id: Uuid,
    time: TimeSlot,
) -> Result<BookingView, ApiError> {
    let session = state.session(session_id).await?;
    let mut session = session.lock().await;
    let flow = session.booking_mut()?;
    flow.select_time(time)?;
    Ok(flow.view())
}

pub async fn update_contact(
    state: &AppState,
    session_id: Uuid,
    contact: ContactDetails,
) -> Result<BookingView, ApiError> {
    let session = state.session(session_id).await?;
    let mut session = session.lock().await;
    let flow = session.booking_mut()?;
    flow.update_contact(contact)?;
    Ok(flow.view())
}

pub async fn submit_booking(
    state: &AppState,
    session_id: Uuid,
) -> Result<BookingSummary, ApiError> {
    let session = state.session(session_id).await?;
    let mut session = session.lock().await;
    Ok(session.submit_booking(today())?)
}

pub async fn dismiss_booking(state: &AppState, session_id: Uuid) -> Result<BookingView, ApiError> {
    let session = state.session(session_id).await?;
    let mut session = session.lock().await;
    Ok(session.dismiss_booking()?.view())
}
