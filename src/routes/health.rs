use crate::state::AppState;
use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;

#[derive(Serialize)]
struct Readiness {
    status: &'static str,
    doctors: usize,
    /// Approximate, evictions are applied lazily
    sessions: u64,
}

#[get("/ping")]
async fn ping() -> impl Responder {
    HttpResponse::Ok().body("pong")
}

#[get("/ready")]
async fn ready(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(Readiness {
        status: "ok",
        doctors: state.catalog.doctors().len(),
        sessions: state.sessions.entry_count(),
    })
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(ping).service(ready);
}

#[cfg(test)]
mod tests {
    use crate::routes::{self, testing};
    use actix_web::{App, test, web};
    use serde_json::Value;

    #[actix_web::test]
    async fn ping_and_ready() {
        let state = testing::state();
        let app = test::init_service(App::new().app_data(state).configure(routes::init)).await;

        let req = test::TestRequest::get().uri("/health/ping").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, web::Bytes::from_static(b"pong"));

        let req = test::TestRequest::get().uri("/health/ready").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["doctors"], 4);
    }
}
