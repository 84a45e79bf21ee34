//! Domain models for the laporan server.

pub mod laporan;

pub use laporan::{Laporan, NewLaporan};
