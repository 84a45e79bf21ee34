//! Read-only detail overlay for a single laporan.

use serde::Serialize;

use super::templates::{self, ViewError};
use crate::models::Laporan;

/// Detail dialog rendered next to the table.
pub struct DetailModal<'a> {
    pub data: Option<&'a Laporan>,
    pub is_open: bool,
}

#[derive(Serialize)]
struct Field {
    label: &'static str,
    value: String,
}

#[derive(Serialize)]
struct ModalContext {
    fields: Option<Vec<Field>>,
}

impl<'a> DetailModal<'a> {
    pub fn new(data: Option<&'a Laporan>, is_open: bool) -> Self {
        Self { data, is_open }
    }

    /// Render the dialog. A closed dialog renders nothing.
    pub fn render(&self) -> Result<String, ViewError> {
        if !self.is_open {
            return Ok(String::new());
        }

        let context = ModalContext {
            fields: self.data.map(fields),
        };
        templates::render(templates::DETAIL_MODAL, &context)
    }
}

fn fields(laporan: &Laporan) -> Vec<Field> {
    [
        ("Perihal", laporan.perihal.clone()),
        ("Pelapor", laporan.pelapor.clone()),
        ("Tempat", laporan.tempat.clone()),
        ("Pelaksana", laporan.pelaksana.clone()),
        ("Sasaran", laporan.sasaran.clone()),
        ("Bentuk Kegiatan", laporan.bentuk_kegiatan.clone()),
        ("Tanggal", laporan.tanggal.format("%Y-%m-%d").to_string()),
        ("Waktu", laporan.waktu.format("%H:%M").to_string()),
        ("Status", laporan.status.clone()),
        ("Dibuat", laporan.created_at.format("%Y-%m-%d %H:%M").to_string()),
    ]
    .into_iter()
    .map(|(label, value)| Field { label, value })
    .collect()
}
