//! E2E tests: table view fed over HTTP.

use laporan_lib::views::{DetailOverlay, HttpReportSource, LaporanTable};

use super::test_helpers::*;

#[actix_rt::test]
#[ignore = "requires PostgreSQL"]
async fn test_table_mounts_from_api() {
    let pool = create_test_pool().await;
    let saved = pool.insert_laporan(&new_laporan("table")).await.unwrap();
    let (base_url, handle) = spawn_app(pool);

    let mut table = LaporanTable::new();
    table.mount(&HttpReportSource::new(&base_url)).await;

    assert!(table.rows().iter().any(|r| r.id == saved.id));
    assert!(table.render().unwrap().contains(&saved.perihal));

    assert!(table.open_detail_by_id(saved.id));
    assert_eq!(table.detail(), &DetailOverlay::Open(saved));

    handle.stop(true).await;
}

#[actix_rt::test]
#[ignore = "requires PostgreSQL"]
async fn test_page_renders_detail() {
    let pool = create_test_pool().await;
    let saved = pool.insert_laporan(&new_laporan("page")).await.unwrap();
    let (base_url, handle) = spawn_app(pool);

    let html = reqwest::get(format!("{}/laporan?detail={}", base_url, saved.id))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(html.contains("role=\"dialog\""));
    assert!(html.contains(&saved.perihal));

    handle.stop(true).await;
}
