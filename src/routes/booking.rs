use crate::handlers::booking::{
    booking_view, dismiss_booking, open_booking, select_date, select_time, submit_booking,
    update_contact,
};
use crate::models::contact::ContactDetails;
use crate::models::doctor::DoctorId;
use crate::models::timeslot::TimeSlot;
use crate::state::AppState;
use actix_web::{HttpResponse, Responder, ResponseError, delete, get, post, put, web};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct OpenBookingRequest {
    pub doctor_id: DoctorId,
}

#[derive(Debug, Deserialize)]
pub struct DateRequest {
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct TimeRequest {
    pub time: TimeSlot,
}

#[post("/{session_id}/booking")]
async fn open(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<OpenBookingRequest>,
) -> impl Responder {
    match open_booking(&state, path.into_inner(), body.doctor_id).await {
        Ok(data) => HttpResponse::Created().json(data),
        Err(e) => e.error_response(),
    }
}

#[get("/{session_id}/booking")]
async fn view(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match booking_view(&state, path.into_inner()).await {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => e.error_response(),
    }
}

#[put("/{session_id}/booking/date")]
async fn date(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<DateRequest>,
) -> impl Responder {
    match select_date(&state, path.into_inner(), body.date).await {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => e.error_response(),
    }
}

#[put("/{session_id}/booking/time")]
async fn time(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<TimeRequest>,
) -> impl Responder {
    match select_time(&state, path.into_inner(), body.time).await {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => e.error_response(),
    }
}

#[put("/{session_id}/booking/contact")]
async fn contact(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<ContactDetails>,
) -> impl Responder {
    match update_contact(&state, path.into_inner(), body.into_inner()).await {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => e.error_response(),
    }
}

#[post("/{session_id}/booking/submit")]
async fn submit(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match submit_booking(&state, path.into_inner()).await {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => e.error_response(),
    }
}

#[delete("/{session_id}/booking")]
async fn dismiss(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match dismiss_booking(&state, path.into_inner()).await {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => e.error_response(),
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(open)
        .service(view)
        .service(date)
        .service(time)
        .service(contact)
        .service(submit)
        .service(dismiss);
}
