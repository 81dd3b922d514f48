use chrono::NaiveDate;
use uuid::Uuid;

use crate::booking::cancel::CancelPrompt;
use crate::booking::reschedule::RescheduleView;
use crate::error::ApiError;
use crate::handlers::{ActionOutcome, today};
use crate::models::appointment::AppointmentId;
use crate::models::timeslot::TimeSlot;
use crate::state::AppState;

pub async fn open_reschedule(
    state: &AppState,
    session_id: Uuid,
    appointment_id: AppointmentId,
) -> Result<RescheduleView, ApiError> {
    let session = state.session(session_id).await?;
    let mut session = session.lock().await;
    Ok(session.open_reschedule(appointment_id)?.view())
}

pub async fn reschedule_view(
    state: &AppState,
    session_id: Uuid,
) -> Result<RescheduleView, ApiError> {
    let session = state.session(session_id).await?;
    let session = session.lock().await;
    Ok(session.reschedule()?.view())
}

pub async fn reschedule_date(
    state: &AppState,
    session_id: Uuid,
    date: NaiveDate,
) -> Result<RescheduleView, ApiError> {
    let session = state.session(session_id).await?;
    let mut session = session.lock().await;
    let flow = session.reschedule_mut()?;
    flow.select_date(date, today())?;
    Ok(flow.view())
}

pub async fn reschedule_time(
    state: &AppState,
    session_id: Uuid,
    time: TimeSlot,
) -> Result<RescheduleView, ApiError> {
    let session = state.session(session_id).await?;
    let mut session = session.lock().await;
    let flow = session.reschedule_mut()?;
    flow.select_time(time)?;
    Ok(flow.view())
}

pub async fn confirm_reschedule(
    state: &AppState,
    session_id: Uuid,
) -> Result<ActionOutcome, ApiError> {
    let session = state.session(session_id).await?;
    let mut session = session.lock().await;
    Ok(session.confirm_reschedule(today())?.into())
}

pub async fn abandon_reschedule(state: &AppState, session_id: Uuid) -> Result<(), ApiError> {
    let session = state.session(session_id).await?;
    let mut session = session.lock().await;
    Ok(session.abandon_reschedule()?)
}

pub async fn open_cancel(
    state: &AppState,
    session_id: Uuid,
    appointment_id: AppointmentId,
) -> Result<CancelPrompt, ApiError> {
    let session = state.session(session_id).await?;
    let mut session = session.lock().await;
    Ok(session.open_cancel(appointment_id)?)
}

pub async fn cancel_prompt(state: &AppState, session_id: Uuid) -> Result<CancelPrompt, ApiError> {
    let session = state.session(session_id).await?;
    let session = session.lock().await;
    Ok(session.cancel_prompt()?)
}

pub async fn confirm_cancel(state: &AppState, session_id: Uuid) -> Result<ActionOutcome, ApiError> {
    let session = state.session(session_id).await?;
    let mut session = session.lock().await;
    Ok(session.confirm_cancel()?.into())
}

pub async fn decline_cancel(state: &AppState, session_id: Uuid) -> Result<(), ApiError> {
    let session = state.session(session_id).await?;
    let mut session = session.lock().await;
    Ok(session.decline_cancel()?)
}
