//! Server-rendered pages.

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;

use crate::db::DbPool;
use crate::error::AppResult;
use crate::views::{LaporanTable, StoreReportSource, render_document};

/// Query parameters for the laporan page.
#[derive(Debug, Deserialize)]
pub struct LaporanPageQuery {
    /// Open the detail overlay for this laporan id.
    pub detail: Option<i32>,
}

/// Configure page routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(laporan_page);
}

/// Laporan table page.
///
/// GET /laporan?detail={id}
///
/// A store failure renders the empty table rather than an error page.
/// Only a template failure yields a 500.
#[get("/laporan")]
pub async fn laporan_page(
    pool: web::Data<DbPool>,
    query: web::Query<LaporanPageQuery>,
) -> AppResult<HttpResponse> {
    let source = StoreReportSource::new(pool.get_ref().clone());
    let mut table = LaporanTable::new();
    table.mount(&source).await;

    if let Some(id) = query.detail {
        table.open_detail_by_id(id);
    }

    let html = render_document(&table)?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}
