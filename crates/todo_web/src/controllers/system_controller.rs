use actix_web::{get, http::header, web, HttpResponse};
use serde::Serialize;

use crate::controllers::redirect;
use crate::views::assets::APPLICATION_JS;
use crate::views::pages::SCRIPT_PATH;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(root)
        .service(health)
        .route(SCRIPT_PATH, web::get().to(application_js));
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[get("/")]
pub async fn root() -> HttpResponse {
    redirect("/lists")
}

#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

pub async fn application_js() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .insert_header((header::CACHE_CONTROL, "public, max-age=3600"))
        .body(APPLICATION_JS)
}
