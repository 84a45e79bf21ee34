//! OpenAPI documentation configuration.

use actix_web::{HttpResponse, get, web};
use utoipa::OpenApi;

use crate::{api, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Laporan Server",
        version = "0.1.0",
        description = "Submission and listing of administrative activity reports (laporan)"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Health endpoints
        api::health::health,
        api::health::ready,
        // Laporan endpoints
        api::laporan::list_laporan,
        api::laporan::create_laporan,
    ),
    components(
        schemas(
            error::ErrorResponse,
            api::health::HealthResponse,
            api::health::ReadyResponse,
            models::Laporan,
            models::NewLaporan,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Laporan", description = "Report submission and listing")
    )
)]
pub struct ApiDoc;

/// Serve the generated OpenAPI document.
#[get("/openapi.json")]
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Configure OpenAPI routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(openapi_json);
}
