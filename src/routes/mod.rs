use actix_web::{web, HttpResponse, Responder};

use crate::{
    services::ShortenerServiceType,
    types::{AppState, HealthStatus},
};

mod short_url;

// Handler function for the health check endpoint
async fn health_check(
    data: web::Data<AppState>,
    service: web::Data<ShortenerServiceType>,
) -> impl Responder {
    let status = HealthStatus {
        status: String::from("OK"),
        version: data.version.clone(),
        uptime_seconds: data.start_time.elapsed().as_secs(),
        entries: service.count().await,
    };

    HttpResponse::Ok().json(status)
}

// Configure all routes function
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
    short_url::configure_routes(cfg);
}
