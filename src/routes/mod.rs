pub mod booking;
pub mod dashboard;
pub mod doctors;
pub mod health;
pub mod sessions;

use actix_web::{Error, HttpRequest, web};

use crate::error::ApiError;

/// Extractor rejections get the same JSON error body as handler failures
fn rejected(err: impl std::fmt::Display, _req: &HttpRequest) -> Error {
    ApiError::BadRequest(err.to_string()).into()
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(rejected))
        .app_data(web::PathConfig::default().error_handler(rejected))
        .app_data(web::QueryConfig::default().error_handler(rejected))
        .service(web::scope("/health").configure(health::init))
        .service(web::scope("/doctors").configure(doctors::init))
        .service(
            web::scope("/sessions")
                .configure(sessions::init)
                .configure(booking::init)
                .configure(dashboard::init),
        );
}
