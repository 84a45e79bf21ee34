//! E2E tests: HTTP API.

use super::test_helpers::*;

#[actix_rt::test]
#[ignore = "requires PostgreSQL"]
async fn test_post_then_get() {
    let pool = create_test_pool().await;
    let (base_url, handle) = spawn_app(pool);
    let client = reqwest::Client::new();

    let input = new_laporan("api");
    let resp = client
        .post(format!("{}/api/laporan", base_url))
        .json(&input)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 201);
    let saved: serde_json::Value = resp.json().await.unwrap();
    let id = saved["id"].as_i64().unwrap();

    let rows: Vec<serde_json::Value> = client
        .get(format!("{}/api/laporan", base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let row = rows.iter().find(|r| r["id"].as_i64() == Some(id)).unwrap();
    assert_eq!(row["perihal"], input.perihal.as_str());
    assert_eq!(row["status"], "aktif");

    handle.stop(true).await;
}

#[actix_rt::test]
#[ignore = "requires PostgreSQL"]
async fn test_post_missing_field_is_400() {
    let pool = create_test_pool().await;
    let (base_url, handle) = spawn_app(pool);

    let resp = reqwest::Client::new()
        .post(format!("{}/api/laporan", base_url))
        .json(&serde_json::json!({ "perihal": "Tanpa pelapor" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);

    handle.stop(true).await;
}
