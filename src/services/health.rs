use actix_web::{HttpResponse, Responder};
use serde::Serialize;

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
}

pub struct HealthService {}

impl HealthService {
    pub async fn health_check() -> impl Responder {
        HttpResponse::Ok().json(HealthStatus { status: "ok" })
    }
}
