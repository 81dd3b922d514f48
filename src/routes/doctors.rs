use crate::handlers::doctors::{
    get_doctor, list_doctors, search_doctors, specialty_categories, time_slots,
};
use crate::models::doctor::DoctorId;
use crate::state::AppState;
use actix_web::{HttpResponse, Responder, ResponseError, get, web};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct DoctorQuery {
    specialty: Option<String>,
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    query: String,
    #[serde(default)]
    location: String,
}

#[get("")]
async fn doctors(state: web::Data<AppState>, query: web::Query<DoctorQuery>) -> impl Responder {
    let specialty = query.specialty.as_deref();
    match list_doctors(&state, specialty, query.category.as_deref()) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => e.error_response(),
    }
}

#[get("/search")]
async fn search(state: web::Data<AppState>, query: web::Query<SearchQuery>) -> impl Responder {
    HttpResponse::Ok().json(search_doctors(&state, &query.query, &query.location))
}

#[get("/specialties")]
async fn specialties() -> impl Responder {
    HttpResponse::Ok().json(specialty_categories())
}

#[get("/slots")]
async fn slots() -> impl Responder {
    HttpResponse::Ok().json(time_slots())
}

#[get("/{id}")]
async fn doctor(state: web::Data<AppState>, path: web::Path<DoctorId>) -> impl Responder {
    match get_doctor(&state, path.into_inner()) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => e.error_response(),
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    // "/{id}" last so it does not swallow the named routes
    cfg.service(doctors)
        .service(search)
        .service(specialties)
        .service(slots)
        .service(doctor);
}

#[cfg(test)]
mod tests {
    use crate::routes::{self, testing};
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::Value;

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let state = testing::state();
        let app = test::init_service(App::new().app_data(state).configure(routes::init)).await;
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    fn names(body: &Value) -> Vec<&str> {
        body.as_array()
            .unwrap()
            .iter()
            .map(|d| d["name"].as_str().unwrap())
            .collect()
    }

    #[actix_web::test]
    async fn lists_whole_catalog_by_default_and_for_all() {
        let (status, body) = get_json("/doctors").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 4);

        let (_, body) = get_json("/doctors?specialty=all").await;
        assert_eq!(body.as_array().unwrap().len(), 4);
    }

    #[actix_web::test]
    async fn filters_by_label_or_category() {
        let (_, body) = get_json("/doctors?specialty=Cardiologist").await;
        assert_eq!(names(&body), vec!["Dr. Sarah Mitchell"]);

        let (_, body) = get_json("/doctors?specialty=cardiologist").await;
        assert!(names(&body).is_empty());

        let (_, body) = get_json("/doctors?category=pediatrics").await;
        assert_eq!(names(&body), vec!["Dr. Michael Adams"]);

        let (_, body) = get_json("/doctors?category=orthopedics").await;
        assert!(names(&body).is_empty());
    }

    #[actix_web::test]
    async fn unknown_category_is_a_bad_request() {
        let (status, body) = get_json("/doctors?category=dermatology").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
    }

    #[actix_web::test]
    async fn searches_name_specialty_and_location() {
        let (_, body) = get_json("/doctors/search?query=neuro").await;
        assert_eq!(names(&body), vec!["Dr. Emily Chen"]);

        let (_, body) = get_json("/doctors/search?query=dr.&location=westside").await;
        assert_eq!(names(&body), vec!["Dr. James Wilson"]);

        let (_, body) = get_json("/doctors/search").await;
        assert_eq!(names(&body).len(), 4);
    }

    #[actix_web::test]
    async fn reference_lists() {
        let (_, body) = get_json("/doctors/slots").await;
        assert_eq!(body.as_array().unwrap().len(), 10);
        assert_eq!(body[0], "9:00 AM");

        let (_, body) = get_json("/doctors/specialties").await;
        assert_eq!(body[0]["id"], "all");
        assert_eq!(body[0]["specialty"], Value::Null);
        assert_eq!(body[4]["name"], "Eye Care");
    }

    #[actix_web::test]
    async fn single_doctor() {
        let (status, body) = get_json("/doctors/2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["specialty"], "General Practitioner");

        let (status, body) = get_json("/doctors/42").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "doctor_not_found");
    }
}
