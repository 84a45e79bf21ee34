//! Laporan API handlers.

use actix_web::{HttpResponse, get, post, web};
use tracing::info;

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{Laporan, NewLaporan};

/// Configure laporan routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_laporan).service(create_laporan);
}

/// List every laporan, newest first.
///
/// GET /laporan
#[utoipa::path(
    get,
    path = "/api/laporan",
    tag = "Laporan",
    responses(
        (status = 200, description = "All laporan ordered by creation time, newest first", body = Vec<Laporan>),
        (status = 500, description = "Database error", body = crate::error::ErrorResponse)
    )
)]
#[get("/laporan")]
pub async fn list_laporan(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let rows = pool.list_laporan().await?;
    Ok(HttpResponse::Ok().json(rows))
}

/// Submit a new laporan.
///
/// POST /laporan
#[utoipa::path(
    post,
    path = "/api/laporan",
    tag = "Laporan",
    request_body = NewLaporan,
    responses(
        (status = 201, description = "Laporan stored", body = Laporan),
        (status = 400, description = "Missing or blank fields", body = crate::error::ErrorResponse),
        (status = 500, description = "Database error", body = crate::error::ErrorResponse)
    )
)]
#[post("/laporan")]
pub async fn create_laporan(
    pool: web::Data<DbPool>,
    body: web::Json<NewLaporan>,
) -> AppResult<HttpResponse> {
    let saved = pool.insert_laporan(&body).await?;

    info!(
        laporan_id = saved.id,
        user_id = ?saved.user_id,
        "Laporan created"
    );

    Ok(HttpResponse::Created().json(saved))
}
