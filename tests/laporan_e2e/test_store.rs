//! E2E tests: laporan data store.

use laporan_lib::error::AppError;

use super::test_helpers::*;

#[actix_rt::test]
#[ignore = "requires PostgreSQL"]
async fn test_insert_returns_input_with_assigned_fields() {
    let pool = create_test_pool().await;
    let input = new_laporan("insert");

    let saved = pool.insert_laporan(&input).await.unwrap();

    assert!(saved.id > 0);
    assert_eq!(saved.user_id, Some(input.user_id));
    assert_eq!(saved.pelapor, input.pelapor);
    assert_eq!(saved.perihal, input.perihal);
    assert_eq!(saved.tempat, input.tempat);
    assert_eq!(saved.pelaksana, input.pelaksana);
    assert_eq!(saved.sasaran, input.sasaran);
    assert_eq!(saved.bentuk_kegiatan, input.bentuk_kegiatan);
    assert_eq!(saved.tanggal, input.tanggal);
    assert_eq!(saved.waktu, input.waktu);
    assert_eq!(saved.status, "aktif");
}

#[actix_rt::test]
#[ignore = "requires PostgreSQL"]
async fn test_list_returns_reverse_insertion_order() {
    let pool = create_test_pool().await;

    let first = pool.insert_laporan(&new_laporan("order")).await.unwrap();
    let second = pool.insert_laporan(&new_laporan("order")).await.unwrap();

    let rows = pool.list_laporan().await.unwrap();

    let pos_first = rows.iter().position(|r| r.id == first.id).unwrap();
    let pos_second = rows.iter().position(|r| r.id == second.id).unwrap();
    assert!(pos_second < pos_first);

    for pair in rows.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[actix_rt::test]
#[ignore = "requires PostgreSQL"]
async fn test_values_are_bound_not_interpolated() {
    let pool = create_test_pool().await;
    let mut input = new_laporan("inject");
    input.perihal = "x'); DROP TABLE laporan; --".to_string();

    let saved = pool.insert_laporan(&input).await.unwrap();
    assert_eq!(saved.perihal, input.perihal);

    let rows = pool.list_laporan().await.unwrap();
    assert!(rows.iter().any(|r| r.id == saved.id));
}

#[actix_rt::test]
#[ignore = "requires PostgreSQL"]
async fn test_blank_field_rejected() {
    let pool = create_test_pool().await;
    let mut input = new_laporan("blank");
    input.sasaran = String::new();

    let err = pool.insert_laporan(&input).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}
