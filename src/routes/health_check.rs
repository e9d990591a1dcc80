use actix_web::HttpResponse;

/// Answers `200 OK` with an empty body as long as the server is up.
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}
