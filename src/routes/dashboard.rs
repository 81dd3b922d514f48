use crate::handlers::dashboard::{
    abandon_reschedule, cancel_prompt, confirm_cancel, confirm_reschedule, decline_cancel,
    open_cancel, open_reschedule, reschedule_date, reschedule_time, reschedule_view,
};
use crate::models::appointment::AppointmentId;
use crate::routes::booking::{DateRequest, TimeRequest};
use crate::state::AppState;
use actix_web::{HttpResponse, Responder, ResponseError, delete, get, post, put, web};
use uuid::Uuid;

#[post("/{session_id}/appointments/{appointment_id}/reschedule")]
async fn open_reschedule_flow(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, u64)>,
) -> impl Responder {
    let (session_id, appointment_id) = path.into_inner();

    match open_reschedule(&state, session_id, AppointmentId::from(appointment_id)).await {
        Ok(data) => HttpResponse::Created().json(data),
        Err(e) => e.error_response(),
    }
}

#[get("/{session_id}/reschedule")]
async fn reschedule(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match reschedule_view(&state, path.into_inner()).await {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => e.error_response(),
    }
}

#[put("/{session_id}/reschedule/date")]
async fn reschedule_new_date(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<DateRequest>,
) -> impl Responder {
    match reschedule_date(&state, path.into_inner(), body.date).await {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => e.error_response(),
    }
}

#[put("/{session_id}/reschedule/time")]
async fn reschedule_new_time(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<TimeRequest>,
) -> impl Responder {
    match reschedule_time(&state, path.into_inner(), body.time).await {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => e.error_response(),
    }
}

#[post("/{session_id}/reschedule/confirm")]
async fn reschedule_confirm(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match confirm_reschedule(&state, path.into_inner()).await {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => e.error_response(),
    }
}

#[delete("/{session_id}/reschedule")]
async fn reschedule_abandon(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match abandon_reschedule(&state, path.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => e.error_response(),
    }
}

#[post("/{session_id}/appointments/{appointment_id}/cancel")]
async fn open_cancel_gate(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, u64)>,
) -> impl Responder {
    let (session_id, appointment_id) = path.into_inner();

    match open_cancel(&state, session_id, AppointmentId::from(appointment_id)).await {
        Ok(data) => HttpResponse::Created().json(data),
        Err(e) => e.error_response(),
    }
}

#[get("/{session_id}/cancel")]
async fn cancel(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match cancel_prompt(&state, path.into_inner()).await {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => e.error_response(),
    }
}

#[post("/{session_id}/cancel/confirm")]
async fn cancel_confirm(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match confirm_cancel(&state, path.into_inner()).await {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => e.error_response(),
    }
}

#[post("/{session_id}/cancel/decline")]
async fn cancel_decline(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match decline_cancel(&state, path.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => e.error_response(),
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(open_reschedule_flow)
        .service(reschedule)
        .service(reschedule_new_date)
        .service(reschedule_new_time)
        .service(reschedule_confirm)
        .service(reschedule_abandon)
        .service(open_cancel_gate)
        .service(cancel)
        .service(cancel_confirm)
        .service(cancel_decline);
}
