//! Shared test helpers for laporan E2E tests.

use actix_web::{App, HttpServer, web};
use chrono::{NaiveDate, NaiveTime};
use laporan_lib::config::Config;
use laporan_lib::db::DbPool;
use laporan_lib::models::NewLaporan;
use std::sync::atomic::{AtomicU32, Ordering};

static SEQUENCE: AtomicU32 = AtomicU32::new(0);

/// Create a DB pool and apply migrations.
pub async fn create_test_pool() -> DbPool {
    let mut config = Config::from_env().expect(
        "Failed to load config. Ensure RUST_ENV and DATABASE_URL are set, \
         and that PostgreSQL is running.",
    );
    config.database.max_connections = 2;
    config.database.min_connections = 1;

    let pool = DbPool::new(&config)
        .await
        .expect("Failed to connect to database");

    pool.run_migrations()
        .await
        .expect("Failed to run migrations");

    pool
}

/// A complete laporan input with a unique subject.
pub fn new_laporan(prefix: &str) -> NewLaporan {
    let n = SEQUENCE.fetch_add(1, Ordering::SeqCst);
    NewLaporan {
        user_id: 1,
        pelapor: "Penguji".to_string(),
        perihal: format!("{}-{}-{}", prefix, std::process::id(), n),
        tempat: "Ruang Rapat".to_string(),
        pelaksana: "Tim QA".to_string(),
        sasaran: "Sistem".to_string(),
        bentuk_kegiatan: "Pengujian".to_string(),
        tanggal: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        waktu: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
    }
}

/// Start the API on an ephemeral port. Returns the base URL and a stop handle.
pub fn spawn_app(pool: DbPool) -> (String, actix_web::dev::ServerHandle) {
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .service(web::scope("/api").configure(laporan_lib::api::configure_laporan_routes))
            .configure(laporan_lib::api::configure_page_routes)
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("Failed to bind test server");

    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_rt::spawn(server);

    (format!("http://{}", addr), handle)
}
