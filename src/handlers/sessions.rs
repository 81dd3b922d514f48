use serde::Serialize;
use uuid::Uuid;

use crate::booking::store::AppointmentStats;
use crate::error::ApiError;
use crate::handlers::today;
use crate::models::appointment::Appointment;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SessionOpened {
    pub session_id: Uuid,
    pub stats: AppointmentStats,
}

pub async fn open_session(state: &AppState) -> SessionOpened {
    let (session_id, session) = state.sessions.open(today()).await;
    let stats = session.lock().await.store().stats();
    SessionOpened { session_id, stats }
}

pub async fn close_session(state: &AppState, id: Uuid) -> Result<(), ApiError> {
    if state.sessions.close(id).await {
        Ok(())
    } else {
        Err(ApiError::SessionNotFound(id))
    }
}

/// Whole collection in booking order
pub async fn all_appointments(state: &AppState, id: Uuid) -> Result<Vec<Appointment>, ApiError> {
    let session = state.session(id).await?;
    let session = session.lock().await;
    Ok(session.store().all().to_vec())
}

pub async fn upcoming_appointments(
    state: &AppState,
    id: Uuid,
) -> Result<Vec<Appointment>, ApiError> {
    let session = state.session(id).await?;
    let session = session.lock().await;
    let upcoming = session.store().list_upcoming();
    Ok(upcoming.into_iter().cloned().collect())
}

pub async fn past_appointments(state: &AppState, id: Uuid) -> Result<Vec<Appointment>, ApiError> {
    let session = state.session(id).await?;
    let session = session.lock().await;
    let past = session.store().list_past();
    Ok(past.into_iter().cloned().collect())
}

pub async fn appointment_stats(state: &AppState, id: Uuid) -> Result<AppointmentStats, ApiError> {
    let session = state.session(id).await?;
    let stats = session.lock().await.store().stats();
    Ok(stats)
}
