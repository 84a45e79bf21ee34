//! Laporan E2E test suite.
//!
//! Exercises the store, the HTTP API and the table view against a real
//! PostgreSQL database. Requires `RUST_ENV` and `DATABASE_URL` to point at a
//! disposable database.
//!
//! Run with: cargo test --test laporan_e2e -- --ignored

mod test_helpers;

mod test_api;
mod test_store;
mod test_table;
