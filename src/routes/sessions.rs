use crate::handlers::sessions::{
    all_appointments, appointment_stats, close_session, open_session, past_appointments,
    upcoming_appointments,
};
use crate::state::AppState;
use actix_web::{HttpResponse, Responder, ResponseError, delete, get, post, web};
use uuid::Uuid;

#[post("")]
async fn open(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Created().json(open_session(&state).await)
}

#[delete("/{session_id}")]
async fn close(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match close_session(&state, path.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => e.error_response(),
    }
}

#[get("/{session_id}/appointments")]
async fn appointments(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match all_appointments(&state, path.into_inner()).await {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => e.error_response(),
    }
}

#[get("/{session_id}/appointments/upcoming")]
async fn upcoming(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match upcoming_appointments(&state, path.into_inner()).await {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => e.error_response(),
    }
}

#[get("/{session_id}/appointments/past")]
async fn past(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match past_appointments(&state, path.into_inner()).await {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => e.error_response(),
    }
}

#[get("/{session_id}/appointments/stats")]
async fn stats(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match appointment_stats(&state, path.into_inner()).await {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => e.error_response(),
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(open)
        .service(close)
        .service(appointments)
        .service(upcoming)
        .service(past)
        .service(stats);
}
