//! Laporan server library.
//!
//! Provides the laporan data store, the HTTP API and the server-rendered
//! report table.

pub mod api;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod middleware;
pub mod migration;
pub mod models;
pub mod views;
